//! CSV response type for axum
//!
//! `Csv` plays the role `axum::Json` plays for JSON: return it from a handler
//! and the records are encoded into the response body.
//!
//! ```
//! use axum::{routing::get, Router};
//! use csv_response::{Csv, Record};
//!
//! async fn users() -> Csv {
//!     Csv::new(vec![Record::named([("name", "john")])]).with_header(true)
//! }
//!
//! let app: Router = Router::new().route("/users.csv", get(users));
//! ```

use crate::core::config::EncoderConfig;
use crate::core::encoder::encode;
use crate::io::json_reader::records_from_serialize;
use crate::types::{Record, Result};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use serde::Serialize;
use tracing::debug;

/// Content type set on every CSV response
pub const TEXT_CSV: &str = "text/csv; charset=utf-8";

/// Encode records and build the HTTP response
///
/// The body is `encode(records, include_header, config)` with
/// `Content-Type: text/csv; charset=utf-8`. Extra `headers` are applied last
/// and replace any header of the same name, including the content type.
/// `status` defaults to `200 OK`.
pub fn send_csv(
    records: &[Record],
    headers: Option<HeaderMap>,
    status: Option<StatusCode>,
    include_header: bool,
    config: &EncoderConfig,
) -> Response {
    let body = encode(records, include_header, config);
    let status = status.unwrap_or(StatusCode::OK);

    debug!(status = status.as_u16(), bytes = body.len(), "Sending CSV response");

    let mut response = (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_CSV))],
        body,
    )
        .into_response();

    if let Some(headers) = headers {
        response.headers_mut().extend(headers);
    }

    response
}

/// Make `config` available to handlers through `Extension<EncoderConfig>`
///
/// ```
/// use axum::Router;
/// use csv_response::{csv_extension, EncoderConfig};
///
/// let app: Router = Router::new().layer(csv_extension(EncoderConfig::new().separator(';')));
/// ```
pub fn csv_extension(config: EncoderConfig) -> Extension<EncoderConfig> {
    Extension(config)
}

/// A CSV response body
#[derive(Debug, Clone)]
pub struct Csv {
    records: Vec<Record>,
    include_header: bool,
    config: EncoderConfig,
    status: Option<StatusCode>,
    headers: Option<HeaderMap>,
}

impl Csv {
    /// Respond with `records` in the default dialect, without a header row
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            include_header: false,
            config: EncoderConfig::default(),
            status: None,
            headers: None,
        }
    }

    /// Respond with serializable values, see [`records_from_serialize`]
    pub fn from_serialize<T: Serialize>(items: &[T]) -> Result<Self> {
        Ok(Self::new(records_from_serialize(items)?))
    }

    /// Emit a header row derived from the first record
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Use a specific dialect
    pub fn with_config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Respond with a status other than 200
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Add response headers
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

impl IntoResponse for Csv {
    fn into_response(self) -> Response {
        send_csv(
            &self.records,
            self.headers,
            self.status,
            self.include_header,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn users() -> Vec<Record> {
        vec![Record::named([
            ("name", FieldValue::from("john")),
            ("id", FieldValue::Integer(1)),
        ])]
    }

    #[tokio::test]
    async fn test_send_csv_defaults() {
        let response = send_csv(&users(), None, None, true, &EncoderConfig::default());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_CSV);
        assert_eq!(
            body_string(response).await,
            "\"name\",\"id\"\r\n\"john\",\"1\"\r\n"
        );
    }

    #[tokio::test]
    async fn test_send_csv_status_and_extra_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"users.csv\""),
        );

        let response = send_csv(
            &users(),
            Some(headers),
            Some(StatusCode::CREATED),
            false,
            &EncoderConfig::default(),
        );

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_CSV);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"users.csv\""
        );
        assert_eq!(body_string(response).await, "\"john\",\"1\"\r\n");
    }

    #[tokio::test]
    async fn test_extra_headers_override_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let response = send_csv(&users(), Some(headers), None, false, &EncoderConfig::default());

        let values: Vec<_> = response.headers().get_all(header::CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec!["text/plain"]);
    }

    #[tokio::test]
    async fn test_csv_builder_into_response() {
        let response = Csv::new(vec![Record::named([("x", "1")])])
            .with_config(EncoderConfig::new().prevent_cast(true))
            .with_status(StatusCode::ACCEPTED)
            .into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_string(response).await, "=\"1\"\r\n");
    }

    #[tokio::test]
    async fn test_csv_from_serialize() {
        #[derive(Serialize)]
        struct Item {
            sku: &'static str,
            qty: u32,
        }

        let response = Csv::from_serialize(&[Item { sku: "A-1", qty: 3 }])
            .unwrap()
            .with_header(true)
            .into_response();

        assert_eq!(body_string(response).await, "\"sku\",\"qty\"\r\n\"A-1\",\"3\"\r\n");
    }

    #[tokio::test]
    async fn test_empty_records_give_empty_body() {
        let response = Csv::new(vec![]).with_header(true).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "");
    }
}
