use actix_web::{error, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
  pub message: String,
}

impl From<&str> for HttpError {
  fn from(message: &str) -> Self {
    Self {
      message: String::from(message),
    }
  }
}

/// Turns body extraction failures into a 400 with an `HttpError` body
/// instead of actix's plain text response.
pub fn json_error_handler(
  err: error::JsonPayloadError,
  request: &HttpRequest,
) -> actix_web::Error {
  let message = err.to_string();
  log::warn!("Rejected payload on {}: {}", request.path(), message);
  let response = HttpResponse::BadRequest()
    .content_type("application/json")
    .json(HttpError::from(message.as_str()));
  error::InternalError::from_response(err, response).into()
}

pub fn invalid_payload(errors: ValidationErrors) -> HttpResponse {
  let message = format!("Invalid payload: {}", errors);
  log::warn!("{}", message);
  HttpResponse::BadRequest()
    .content_type("application/json")
    .json(HttpError::from(message.as_str()))
}
