use serde::{Deserialize, Serialize};

/// Role carried by a user. Any string is accepted; the two known values get
/// their own variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
  Admin,
  #[default]
  User,
  Other(String),
}

impl Role {
  pub fn as_str(&self) -> &str {
    match self {
      Role::Admin => "admin",
      Role::User => "user",
      Role::Other(role) => role,
    }
  }
}

impl From<String> for Role {
  fn from(role: String) -> Self {
    match role.as_str() {
      "admin" => Role::Admin,
      "user" => Role::User,
      _ => Role::Other(role),
    }
  }
}

impl From<Role> for String {
  fn from(role: Role) -> Self {
    match role {
      Role::Other(role) => role,
      known => known.as_str().to_string(),
    }
  }
}
