use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// The provider rejected the call; carries the provider's own message.
    #[error("{0}")]
    ExternalApiError(String),

    /// A parameter the provider requires was absent from the request.
    #[error("Required parameter \"params['{0}']\" missing.")]
    MissingParameter(&'static str),

    #[error("{0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidBody(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        match self {
            AppError::InvalidBody(msg) => log::warn!("Invalid request body: {msg}"),
            AppError::ExternalApiError(msg) => log::error!("Provider call failed: {msg}"),
            AppError::ReqwestError(err) => log::error!("Provider request error: {err}"),
            _ => log::error!("Request failed: {self}"),
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::json;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_provider_message_is_relayed_verbatim() {
        let (status, body) = body_of(AppError::ExternalApiError(
            "Invalid parameter `To`: +1555".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Invalid parameter `To`: +1555" }));
    }

    #[actix_web::test]
    async fn test_missing_parameter_is_server_error() {
        let (status, body) = body_of(AppError::MissingParameter("to")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Required parameter \"params['to']\" missing.");
    }

    #[actix_web::test]
    async fn test_invalid_body_is_bad_request() {
        let (status, body) = body_of(AppError::InvalidBody("EOF while parsing".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "EOF while parsing");
    }

    #[actix_web::test]
    async fn test_body_matches_documented_schema() {
        let resp = AppError::MissingParameter("code").error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Required parameter \"params['code']\" missing.");
    }
}
