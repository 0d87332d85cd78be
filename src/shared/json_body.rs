use serde_json::{Map, Value};

use super::api_error::ApiError;

/// Reads a request body as a JSON object whatever its content type. An empty
/// body is `{}` and an array carries no fields; only unparsable JSON and bare
/// scalars are rejected.
pub fn parse_json_object(
  body: &[u8],
) -> Result<Map<String, Value>, ApiError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(Map::new());
  }

  let value: Value = serde_json::from_slice(body)
    .map_err(|error| ApiError::BadRequest(error.to_string()))?;
  match value {
    Value::Object(object) => Ok(object),
    Value::Array(_) => Ok(Map::new()),
    scalar => Err(ApiError::BadRequest(format!(
      "expected a JSON object, found {}",
      scalar
    ))),
  }
}
