use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body of `PUT /users/{id}`: any JSON object. Keys naming a user field
/// overwrite it; `id` is never changed.
#[derive(ToSchema)]
#[derive(Debug, Clone, Default)]
#[schema(value_type = Object)]
pub struct UpdateUserDto(pub Map<String, Value>);

impl From<Map<String, Value>> for UpdateUserDto {
  fn from(body: Map<String, Value>) -> Self {
    Self(body)
  }
}
