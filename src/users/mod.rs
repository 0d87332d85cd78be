pub mod dto;
pub mod model;
pub mod repository;
pub mod seed;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use dto::{create_user_dto::CreateUserDto, update_user_dto::UpdateUserDto};
use model::user::{NewUser, User};
use repository::user_repository::UserRepository;

use crate::shared::api_error::ApiError;
use crate::shared::http_error::HttpError;
use crate::shared::json_body::parse_json_object;
use crate::AppState;

pub fn configure<UR: UserRepository + 'static>(
  config: &mut web::ServiceConfig,
) {
  config
    .service(
      web::resource("/users")
        .route(web::get().to(list_users::<UR>))
        .route(web::post().to(create_user::<UR>)),
    )
    .service(
      web::resource("/users/{id}")
        .route(web::get().to(find_user::<UR>))
        .route(web::put().to(update_user::<UR>))
        .route(web::delete().to(delete_user::<UR>)),
    );
}

#[utoipa::path(
  get,
  path = "/users",
  tag = "users",
  responses(
    (
      status = 200,
      description = "Every stored user, in insertion order",
      body = [User]
    ),
    (status = 500, description = "Store unavailable", body = HttpError)
  )
)]
pub async fn list_users<UR: UserRepository + 'static>(
  data: web::Data<AppState<UR>>,
) -> Result<HttpResponse, ApiError> {
  let users = data.user_repository.find_all().await?;
  tracing::debug!(count = users.len(), "Listing users");
  Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
  get,
  path = "/users/{id}",
  tag = "users",
  params(("id" = u64, Path, description = "User id")),
  responses(
    (status = 200, description = "First user with this id", body = User),
    (status = 404, description = "No user with this id", body = HttpError)
  )
)]
pub async fn find_user<UR: UserRepository + 'static>(
  data: web::Data<AppState<UR>>,
  id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
  let id = parse_id(&id)?;
  let user = data.user_repository.find_one(id).await?;
  tracing::debug!(id, "Found user");
  Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
  post,
  path = "/users",
  tag = "users",
  request_body = CreateUserDto,
  responses(
    (status = 201, description = "User created", body = User),
    (status = 400, description = "Body is not a JSON object", body = HttpError)
  )
)]
pub async fn create_user<UR: UserRepository + 'static>(
  data: web::Data<AppState<UR>>,
  body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
  let dto = CreateUserDto::from(parse_json_object(&body)?);
  let user = data.user_repository.create(NewUser::from(dto)).await?;
  tracing::info!(id = user.id, "Created user");

  Ok(
    HttpResponse::Created()
      .append_header((header::LOCATION, format!("/users/{}", user.id)))
      .json(user),
  )
}

#[utoipa::path(
  put,
  path = "/users/{id}",
  tag = "users",
  params(("id" = u64, Path, description = "User id")),
  request_body = UpdateUserDto,
  responses(
    (status = 200, description = "User after the patch", body = User),
    (status = 400, description = "Body is not a JSON object", body = HttpError),
    (status = 404, description = "No user with this id", body = HttpError)
  )
)]
pub async fn update_user<UR: UserRepository + 'static>(
  data: web::Data<AppState<UR>>,
  id: web::Path<String>,
  body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
  let id = parse_id(&id)?;
  let UpdateUserDto(patch) = UpdateUserDto::from(parse_json_object(&body)?);
  let user = data.user_repository.update(id, &patch).await?;
  tracing::info!(
    id,
    fields = ?patch.keys().collect::<Vec<_>>(),
    "Updated user"
  );
  Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
  delete,
  path = "/users/{id}",
  tag = "users",
  params(("id" = u64, Path, description = "User id")),
  responses(
    (status = 204, description = "User deleted"),
    (status = 404, description = "No user with this id", body = HttpError)
  )
)]
pub async fn delete_user<UR: UserRepository + 'static>(
  data: web::Data<AppState<UR>>,
  id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
  let id = parse_id(&id)?;
  data.user_repository.delete(id).await?;
  tracing::info!(id, "Deleted user");
  Ok(HttpResponse::NoContent().finish())
}

// A path segment that is not a plain integer can never match a stored user.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
  raw.parse().map_err(|_| ApiError::NotFound(raw.to_string()))
}

impl From<CreateUserDto> for NewUser {
  fn from(dto: CreateUserDto) -> Self {
    Self {
      name: dto.name,
      username: dto.username,
      email: dto.email,
      password: dto.password,
      image: dto.image,
      rol: dto.rol,
    }
  }
}
