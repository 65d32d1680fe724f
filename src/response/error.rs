//! HTTP mapping for `CsvResponseError`

use crate::types::CsvResponseError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl CsvResponseError {
    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CsvResponseError::FileNotFound { .. } => StatusCode::NOT_FOUND,
            CsvResponseError::IoError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CsvResponseError::ParseError { .. }
            | CsvResponseError::NotASequence { .. }
            | CsvResponseError::InvalidRecord { .. }
            | CsvResponseError::InvalidStatus { .. }
            | CsvResponseError::InvalidHeader { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// A request body that is not valid JSON, lacks a JSON content type or does
/// not match the expected shape
impl From<JsonRejection> for CsvResponseError {
    fn from(rejection: JsonRejection) -> Self {
        CsvResponseError::ParseError {
            line: None,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for CsvResponseError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(CsvResponseError::FileNotFound { path: "a".to_string() }, StatusCode::NOT_FOUND)]
    #[case::io(CsvResponseError::IoError { message: "disk".to_string() }, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::invalid_record(CsvResponseError::invalid_record(0, "number"), StatusCode::BAD_REQUEST)]
    #[case::invalid_status(CsvResponseError::InvalidStatus { code: 42 }, StatusCode::BAD_REQUEST)]
    fn test_status_code(#[case] error: CsvResponseError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
        assert_eq!(error.into_response().status(), expected);
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = CsvResponseError::ParseError {
            line: None,
            message: "missing field `records`".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Parse error: missing field `records`");
    }
}
