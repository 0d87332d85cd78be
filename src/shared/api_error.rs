use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::http_error::HttpError;
use crate::users::repository::user_repository::UserRepositoryError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("User {0} not found")]
  NotFound(String),

  #[error("Invalid JSON payload: {0}")]
  BadRequest(String),

  #[error("Internal error: {0}")]
  Internal(String),
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  // The cause of an internal error is logged by the error handlers and never
  // leaves the service.
  fn error_response(&self) -> HttpResponse {
    let body = match self {
      ApiError::NotFound(id) => HttpError::from("User not found")
        .with_details(format!("No user with id {}", id)),
      ApiError::BadRequest(reason) => {
        HttpError::from("Invalid JSON payload").with_details(reason.as_str())
      }
      ApiError::Internal(_) => HttpError::from(INTERNAL_SERVER_ERROR),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

impl From<UserRepositoryError> for ApiError {
  fn from(error: UserRepositoryError) -> Self {
    match error {
      UserRepositoryError::NotFound(id) => ApiError::NotFound(id.to_string()),
      UserRepositoryError::Unavailable(reason) => ApiError::Internal(reason),
    }
  }
}
