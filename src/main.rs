mod shared;
mod users;

use actix_web::{middleware::Logger, web, App, HttpServer};
use shared::{
  config::Config,
  error_handlers::error_handlers,
  handlers::{index, route_not_found},
  openapi,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{
  repository::user_repository::{InMemoryUserRepository, UserRepository},
  seed::seed_users,
};

// This struct represents state
struct AppState<UR: UserRepository> {
  user_repository: UR,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "users_api=info,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = Config::from_env()?;

  // One store for the whole process, shared by every worker
  let state = web::Data::new(AppState {
    user_repository: InMemoryUserRepository::with_users(seed_users()),
  });

  tracing::info!(
    host = %config.host,
    port = config.port,
    "Listening on http://{}:{}",
    config.host,
    config.port
  );
  HttpServer::new(move || {
    App::new()
      .app_data(state.clone())
      .wrap(error_handlers())
      .wrap(Logger::default())
      .configure(app_config::<InMemoryUserRepository>)
  })
  .bind(config.server_address())?
  .run()
  .await?;

  Ok(())
}

// Function to initialize the App
fn app_config<UR: UserRepository + 'static>(
  config: &mut web::ServiceConfig,
) {
  config
    .route("/", web::get().to(index))
    .configure(users::configure::<UR>)
    .configure(openapi::configure)
    .default_service(web::to(route_not_found));
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::shared::{http_error::HttpError, role::Role};
  use crate::shared::rto::service_info_rto::ServiceInfoRto;
  use crate::users::model::user::User;
  use actix_web::{http::StatusCode, test};
  use serde_json::json;

  macro_rules! seeded_app {
    () => {
      test::init_service(
        App::new()
          .app_data(web::Data::new(AppState {
            user_repository: InMemoryUserRepository::with_users(
              seed_users(),
            ),
          }))
          .wrap(error_handlers())
          .configure(app_config::<InMemoryUserRepository>),
      )
      .await
    };
  }

  #[actix_rt::test]
  async fn test_root_describes_the_service() {
    let app = seeded_app!();

    let request = test::TestRequest::get().uri("/").to_request();
    let info: ServiceInfoRto =
      test::call_and_read_body_json(&app, request).await;

    assert!(info.endpoints.contains(&String::from("GET /users")));
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
  }

  #[actix_rt::test]
  async fn test_delete_then_create_reuses_id() {
    let app = seeded_app!();

    // 1) Delete the second seed user
    let request = test::TestRequest::delete().uri("/users/2").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = test::TestRequest::get().uri("/users").to_request();
    let users: Vec<User> = test::call_and_read_body_json(&app, request).await;
    let ids: Vec<u64> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // 2) Create a new one: count is 2, so the id is 3 again
    let request = test::TestRequest::post()
      .uri("/users")
      .set_json(json!({
        "name": "Grace Hopper",
        "username": "grace",
        "email": "grace@example.com",
        "password": "cobol"
      }))
      .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: User = test::read_body_json(response).await;
    assert_eq!(created.id, 3);

    let request = test::TestRequest::get().uri("/users").to_request();
    let users: Vec<User> = test::call_and_read_body_json(&app, request).await;
    let ids: Vec<u64> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![1, 3, 3]);
    assert_eq!(users[2], created);
  }

  #[actix_rt::test]
  async fn test_put_rol_changes_only_rol_and_updated_at() {
    let app = seeded_app!();

    let request = test::TestRequest::get().uri("/users/2").to_request();
    let before: User = test::call_and_read_body_json(&app, request).await;
    assert_eq!(before.rol, Role::User);

    let request = test::TestRequest::put()
      .uri("/users/2")
      .set_json(json!({ "rol": "admin" }))
      .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let after: User = test::read_body_json(response).await;

    assert_eq!(after.rol, Role::Admin);
    assert!(after.updated_at >= before.updated_at);
    assert_eq!(
      User {
        rol: Role::User,
        updated_at: before.updated_at,
        ..after.clone()
      },
      before
    );

    let request = test::TestRequest::get().uri("/users/2").to_request();
    let stored: User = test::call_and_read_body_json(&app, request).await;
    assert_eq!(stored, after);
  }

  #[actix_rt::test]
  async fn test_create_keeps_missing_fields_absent() {
    let app = seeded_app!();

    let request = test::TestRequest::post()
      .uri("/users")
      .set_json(json!({}))
      .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(response).await;
    let object = body.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "image", "rol", "updatedAt"]);
    assert_eq!(body["image"], "default.jpg");
    assert_eq!(body["rol"], "user");
  }

  #[actix_rt::test]
  async fn test_unknown_route_is_not_found() {
    let app = seeded_app!();

    let request = test::TestRequest::get().uri("/accounts").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: HttpError = test::read_body_json(response).await;
    assert_eq!(error.message, "Route not found");
    assert_eq!(error.details.as_deref(), Some("GET /accounts"));
  }

  #[actix_rt::test]
  async fn test_openapi_document_is_served() {
    let app = seeded_app!();

    let request = test::TestRequest::get()
      .uri("/api-docs/openapi.json")
      .to_request();
    let document: serde_json::Value =
      test::call_and_read_body_json(&app, request).await;

    assert!(document["paths"]["/users/{id}"]["put"].is_object());
  }
}
