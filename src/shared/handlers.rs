use actix_web::{HttpRequest, HttpResponse, Responder};

use super::{http_error::HttpError, rto::service_info_rto::ServiceInfoRto};

const ENDPOINTS: [&str; 6] = [
  "GET /",
  "GET /users",
  "GET /users/{id}",
  "POST /users",
  "PUT /users/{id}",
  "DELETE /users/{id}",
];

#[utoipa::path(
  get,
  path = "/",
  tag = "service",
  responses(
    (status = 200, description = "Describe the service", body = ServiceInfoRto)
  )
)]
pub async fn index() -> impl Responder {
  HttpResponse::Ok().json(ServiceInfoRto {
    message: String::from("Users API: in-memory CRUD over user records"),
    version: env!("CARGO_PKG_VERSION").to_string(),
    endpoints: ENDPOINTS.iter().map(|route| route.to_string()).collect(),
  })
}

pub async fn route_not_found(request: HttpRequest) -> impl Responder {
  HttpResponse::NotFound().json(
    HttpError::from("Route not found")
      .with_details(format!("{} {}", request.method(), request.path())),
  )
}
