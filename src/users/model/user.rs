use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::shared::{role::Role, timestamp};

pub const DEFAULT_IMAGE: &str = "default.jpg";

#[derive(ToSchema)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id: u64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(rename = "updatedAt", with = "timestamp")]
  #[schema(value_type = String, example = "2024-03-09T14:05:07.000Z")]
  pub updated_at: DateTime<Utc>,
  pub image: String,
  #[schema(value_type = String, example = "user")]
  pub rol: Role,
}

/// Fields supplied when creating a user; the store assigns the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
  pub name: Option<String>,
  pub username: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
  pub image: Option<String>,
  pub rol: Option<String>,
}

impl NewUser {
  /// Empty `image` and `rol` fall back to their defaults like missing ones.
  pub fn into_user(self, id: u64, updated_at: DateTime<Utc>) -> User {
    User {
      id,
      name: self.name,
      username: self.username,
      email: self.email,
      password: self.password,
      updated_at,
      image: self
        .image
        .filter(|image| !image.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
      rol: self
        .rol
        .filter(|rol| !rol.is_empty())
        .map(Role::from)
        .unwrap_or_default(),
    }
  }
}

impl User {
  /// Copies every patch key naming a record field onto the record, except
  /// `id`. Values go through [`text_value`]; a value with no text form clears
  /// the optional fields and resets `image` and `rol` to their defaults.
  /// Unknown keys are ignored. `updatedAt` always moves forward.
  pub fn apply_patch(
    &mut self,
    patch: &Map<String, Value>,
    now: DateTime<Utc>,
  ) {
    for (key, value) in patch {
      let text = text_value(value);
      match key.as_str() {
        "name" => self.name = text,
        "username" => self.username = text,
        "email" => self.email = text,
        "password" => self.password = text,
        "image" => {
          self.image = text.unwrap_or_else(|| DEFAULT_IMAGE.to_string())
        }
        "rol" => self.rol = text.map(Role::from).unwrap_or_default(),
        // "id" never changes, "updatedAt" is refreshed below
        _ => {}
      }
    }
    self.updated_at = self.updated_at.max(now);
  }
}

/// Text stored for a JSON value: strings as-is, numbers and booleans in
/// their JSON form, nothing for `null`, arrays and objects.
pub fn text_value(value: &Value) -> Option<String> {
  match value {
    Value::String(text) => Some(text.clone()),
    Value::Number(number) => Some(number.to_string()),
    Value::Bool(flag) => Some(flag.to_string()),
    Value::Null | Value::Array(_) | Value::Object(_) => None,
  }
}
