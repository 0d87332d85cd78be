use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON envelope returned by every failed request.
#[derive(ToSchema)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpError {
  pub message: String,
  pub error: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

impl HttpError {
  pub fn with_details(mut self, details: impl Into<String>) -> Self {
    self.details = Some(details.into());
    self
  }
}

impl From<&str> for HttpError {
  fn from(message: &str) -> Self {
    Self {
      message: message.to_string(),
      error: true,
      details: None,
    }
  }
}
