use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::users::model::user::text_value;

/// Body of `POST /users`. Every field is optional and unvalidated.
#[derive(ToSchema)]
#[derive(Debug, Clone, Default)]
pub struct CreateUserDto {
  pub name: Option<String>,
  pub username: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
  /// Defaults to `default.jpg`
  pub image: Option<String>,
  /// Defaults to `user`
  pub rol: Option<String>,
}

// Fields are read loosely: numbers and booleans become text, anything else
// counts as absent.
impl From<Map<String, Value>> for CreateUserDto {
  fn from(body: Map<String, Value>) -> Self {
    let field = |key: &str| body.get(key).and_then(text_value);
    Self {
      name: field("name"),
      username: field("username"),
      email: field("email"),
      password: field("password"),
      image: field("image"),
      rol: field("rol"),
    }
  }
}
