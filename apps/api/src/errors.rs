use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const AUTOFILL_PRECONDITION_MESSAGE: &str =
    "Por favor completa los datos de nacimiento básicos para el asistente de IA.";
pub const ESTIMATION_FAILED_MESSAGE: &str =
    "El asistente cósmico no pudo calcular las efemérides.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Error conectando con los registros cósmicos.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Gateway failures carry the underlying `LlmError`; the client only ever
/// sees one generic message per call site.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Position estimation failed: {0}")]
    Estimation(#[source] LlmError),

    #[error("Akashic analysis failed: {0}")]
    Analysis(#[source] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Precondition(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PRECONDITION_FAILED",
                msg.clone(),
            ),
            // Already logged with full detail where the call was made.
            AppError::Estimation(_) => (
                StatusCode::BAD_GATEWAY,
                "GATEWAY_ERROR",
                ESTIMATION_FAILED_MESSAGE.to_string(),
            ),
            AppError::Analysis(_) => (
                StatusCode::BAD_GATEWAY,
                "GATEWAY_ERROR",
                ANALYSIS_FAILED_MESSAGE.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_errors_map_to_bad_gateway() {
        let response = AppError::Analysis(LlmError::EmptyContent).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response =
            AppError::Estimation(LlmError::Malformed("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_every_variant_has_a_client_or_gateway_status() {
        let cases = [
            (AppError::Validation("bad month".into()), 400, "VALIDATION_ERROR"),
            (AppError::Precondition("x".into()), 422, "PRECONDITION_FAILED"),
            (AppError::Estimation(LlmError::EmptyContent), 502, "GATEWAY_ERROR"),
            (AppError::Analysis(LlmError::EmptyContent), 502, "GATEWAY_ERROR"),
        ];

        for (err, status, code) in cases {
            let response = err.into_response();
            assert_eq!(response.status().as_u16(), status);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"]["code"], code);
        }
    }

    #[test]
    fn test_precondition_maps_to_unprocessable() {
        let response =
            AppError::Precondition(AUTOFILL_PRECONDITION_MESSAGE.into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
