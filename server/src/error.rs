//! Server-specific error types and their HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use shared::{ErrorDetail, InvalidMcNumber};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid MC number format. Must start with 'MC'.")]
    InvalidMcNumber,

    #[error("Carrier not found in our database.")]
    CarrierNotFound,

    #[error("Invalid reference number.")]
    InvalidReference,

    #[error("Load not found")]
    LoadNotFound,

    #[error("Carrier registry unavailable: {message}")]
    RegistryUnavailable { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Load file error: {0}")]
    LoadFile(#[from] csv::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl From<InvalidMcNumber> for ServerError {
    fn from(_: InvalidMcNumber) -> Self {
        ServerError::InvalidMcNumber
    }
}

impl ServerError {
    /// HTTP status this error maps to at the API boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidMcNumber | ServerError::InvalidReference => StatusCode::BAD_REQUEST,
            ServerError::CarrierNotFound | ServerError::LoadNotFound => StatusCode::NOT_FOUND,
            ServerError::RegistryUnavailable { .. } => StatusCode::BAD_GATEWAY,
            ServerError::Config(_)
            | ServerError::ServerStartup(_)
            | ServerError::LoadFile(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorDetail::new(self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServerError::InvalidMcNumber.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::InvalidReference.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::CarrierNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServerError::LoadNotFound.status_code(), StatusCode::NOT_FOUND);
        let registry = ServerError::RegistryUnavailable { message: "timeout".to_string() };
        assert_eq!(registry.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_detail_texts_match_the_api_contract() {
        assert_eq!(
            ServerError::InvalidMcNumber.to_string(),
            "Invalid MC number format. Must start with 'MC'."
        );
        assert_eq!(
            ServerError::CarrierNotFound.to_string(),
            "Carrier not found in our database."
        );
        assert_eq!(ServerError::LoadNotFound.to_string(), "Load not found");
        assert_eq!(ServerError::InvalidReference.to_string(), "Invalid reference number.");
    }
}
