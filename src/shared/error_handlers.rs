use actix_web::{
  dev::ServiceResponse,
  http::StatusCode,
  middleware::{ErrorHandlerResponse, ErrorHandlers},
  HttpResponse, Result,
};

use super::{api_error::INTERNAL_SERVER_ERROR, http_error::HttpError};

/// Rewrites every 500 leaving the app into the generic error envelope.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
  ErrorHandlers::new()
    .handler(StatusCode::INTERNAL_SERVER_ERROR, internal_server_error)
}

fn internal_server_error<B>(
  response: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
  let path = response.request().path().to_string();
  match response.response().error() {
    Some(error) => tracing::error!(%path, %error, "Request failed"),
    None => tracing::error!(%path, "Request failed without a cause"),
  }

  let (request, _) = response.into_parts();
  let response = HttpResponse::InternalServerError()
    .json(HttpError::from(INTERNAL_SERVER_ERROR));

  Ok(ErrorHandlerResponse::Response(
    ServiceResponse::new(request, response).map_into_right_body(),
  ))
}

#[cfg(test)]
mod tests {
  use actix_web::{test, web, App};

  use super::*;

  #[actix_web::test]
  async fn test_plain_500_gets_the_envelope() {
    let app = test::init_service(
      App::new().wrap(error_handlers()).route(
        "/boom",
        web::get().to(|| async {
          HttpResponse::InternalServerError().body("stack trace goes here")
        }),
      ),
    )
    .await;

    let request = test::TestRequest::get().uri("/boom").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: HttpError = test::read_body_json(response).await;
    assert_eq!(body, HttpError::from(INTERNAL_SERVER_ERROR));
  }

  #[actix_web::test]
  async fn test_other_statuses_pass_through() {
    let app = test::init_service(App::new().wrap(error_handlers()).route(
      "/teapot",
      web::get()
        .to(|| async { HttpResponse::ImATeapot().body("short and stout") }),
    ))
    .await;

    let request = test::TestRequest::get().uri("/teapot").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    let body = test::read_body(response).await;
    assert_eq!(body, web::Bytes::from_static(b"short and stout"));
  }
}
