//! HTTP service for the `serve` command
//!
//! # Routes
//!
//! - `POST /csv` - encode the records in a JSON request body
//! - `GET /health` - liveness check
//!
//! # Request body
//!
//! ```json
//! {
//!   "records": [{"name": "john", "id": 1}],
//!   "header": true,
//!   "status": 200,
//!   "headers": {"content-disposition": "attachment; filename=\"users.csv\""},
//!   "config": {"separator": ";"}
//! }
//! ```
//!
//! Only `records` is required. A missing `config` falls back to the server's
//! default dialect, registered on the router as an `Extension`. Bodies that
//! are not JSON or do not match this shape get a `400` with a JSON `error`
//! field.

use crate::core::config::EncoderConfig;
use crate::io::json_reader::records_from_json;
use crate::response::{csv_extension, Csv};
use crate::types::{CsvResponseError, Result};
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Body of a `POST /csv` request
#[derive(Debug, Deserialize)]
pub struct CsvRequest {
    /// Array of arrays or objects
    pub records: serde_json::Value,
    /// Emit a header row
    #[serde(default)]
    pub header: bool,
    /// Response status, 200 when absent
    pub status: Option<u16>,
    /// Extra response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Dialect override for this request
    pub config: Option<EncoderConfig>,
}

fn parse_status(code: u16) -> Result<StatusCode> {
    StatusCode::from_u16(code).map_err(|_| CsvResponseError::InvalidStatus { code })
}

fn parse_headers(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| CsvResponseError::invalid_header(name))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| CsvResponseError::invalid_header(name))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

impl CsvRequest {
    /// Resolve the request into a response, using `default_config` when the
    /// request carries no dialect of its own
    pub fn into_csv(self, default_config: &EncoderConfig) -> Result<Csv> {
        let records = records_from_json(self.records)?;
        let config = self.config.unwrap_or_else(|| default_config.clone());

        let mut csv = Csv::new(records).with_header(self.header).with_config(config);
        if let Some(code) = self.status {
            csv = csv.with_status(parse_status(code)?);
        }
        if !self.headers.is_empty() {
            csv = csv.with_headers(parse_headers(&self.headers)?);
        }
        Ok(csv)
    }
}

/// Malformed bodies are answered like every other bad request, with a `400`
/// and a JSON `error` field
async fn encode_csv(
    Extension(default_config): Extension<EncoderConfig>,
    payload: std::result::Result<Json<CsvRequest>, JsonRejection>,
) -> std::result::Result<Csv, CsvResponseError> {
    payload
        .map_err(CsvResponseError::from)
        .and_then(|Json(request)| request.into_csv(&default_config))
        .map_err(|e| {
            warn!("Rejected CSV request: {}", e);
            e
        })
}

async fn health() -> &'static str {
    "ok"
}

/// Build the service router with `config` as the default dialect
pub fn router(config: EncoderConfig) -> Router {
    Router::new()
        .route("/csv", post(encode_csv))
        .route("/health", get(health))
        .layer(csv_extension(config))
}

/// Bind `host:port` and serve until the process is stopped
pub async fn serve(host: &str, port: u16, config: EncoderConfig) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving CSV encoder on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
