use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoRto {
  pub message: String,
  pub version: String,
  pub endpoints: Vec<String>,
}
