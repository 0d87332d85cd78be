use actix_web::web;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::{
  handlers, http_error::HttpError, rto::service_info_rto::ServiceInfoRto,
};
use crate::users::{
  self,
  dto::{create_user_dto::CreateUserDto, update_user_dto::UpdateUserDto},
  model::user::User,
};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Users API",
    description = "In-memory CRUD service over user records"
  ),
  paths(
    handlers::index,
    users::list_users,
    users::find_user,
    users::create_user,
    users::update_user,
    users::delete_user,
  ),
  components(schemas(
    User,
    CreateUserDto,
    UpdateUserDto,
    HttpError,
    ServiceInfoRto
  )),
  tags(
    (name = "users", description = "User records"),
    (name = "service", description = "Service information")
  )
)]
pub struct ApiDoc;

pub fn configure(config: &mut web::ServiceConfig) {
  let openapi = ApiDoc::openapi();
  config
    .service(
      SwaggerUi::new("/swagger-ui/{_:.*}")
        .url("/api-docs/openapi.json", openapi.clone()),
    )
    .service(Scalar::with_url("/scalar", openapi));
}
