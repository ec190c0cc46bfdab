//! HTTP API for the Serial Engine.
//!
//! This module exposes a minimal REST API around the calculation
//! modules using the [`axum`](https://crates.io/crates/axum) framework.
//! Clients post the form configuration and weights as JSON and receive
//! the generated records, or a plain text export of them.

use crate::checksum::calculate_digit_verifier;
use crate::config::ServerConfig;
use crate::engine::{digit_count_mismatches, generate_numbers};
use crate::error::SerialError;
use crate::export::{export_filename, export_timestamp, render, ExportFormat, CONTENT_TYPE};
use crate::mask::increment_masked_number;
use crate::models::{FormConfig, SerialNumberData, Weight};
use anyhow::Result;
use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementRequest {
    pub serial_number: String,
    #[serde(default)]
    pub delta: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitVerifierRequest {
    pub serial_number: String,
    #[serde(default)]
    pub weights: Vec<Weight>,
    pub divider: i64,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub config: FormConfig,
    #[serde(default)]
    pub weights: Vec<Weight>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// Build the API router.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/increment", post(increment_handler))
        .route("/api/digit-verifier", post(digit_verifier_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/export", post(export_handler))
}

fn error_response(err: SerialError) -> Response {
    warn!(error = %err, "rejecting request");
    let body = Json(json!({"error": err.to_string()}));
    (StatusCode::BAD_REQUEST, body).into_response()
}

/// Runs a batch and logs it.  The calculation modules themselves never log.
fn run_batch(req: &GenerateRequest) -> Result<Vec<SerialNumberData>, SerialError> {
    let config = &req.config;
    debug!(
        seed = %config.serial_number,
        registers = config.qtd_registers,
        divider = config.divider,
        weights = req.weights.len(),
        "generating serial numbers"
    );
    let records = generate_numbers(config, &req.weights)?;
    let mismatches = digit_count_mismatches(config, &records);
    if mismatches > 0 {
        warn!(
            mismatches,
            total = records.len(),
            expected = config.qtd_numbers,
            "serial number digit count differs from the configured length"
        );
    }
    Ok(records)
}

/// Handler for POST /api/increment
async fn increment_handler(Json(req): Json<IncrementRequest>) -> Response {
    match increment_masked_number(&req.serial_number, req.delta) {
        Ok(serial_number) => Json(json!({"serialNumber": serial_number})).into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler for POST /api/digit-verifier
async fn digit_verifier_handler(Json(req): Json<DigitVerifierRequest>) -> Response {
    match calculate_digit_verifier(&req.serial_number, &req.weights, req.divider) {
        Ok(result) => Json(result).into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler for POST /api/generate
async fn generate_handler(Json(req): Json<GenerateRequest>) -> Response {
    match run_batch(&req) {
        Ok(records) => Json(records).into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler for POST /api/export
async fn export_handler(Query(query): Query<ExportQuery>, Json(req): Json<GenerateRequest>) -> Response {
    let records = match run_batch(&req) {
        Ok(records) => records,
        Err(err) => return error_response(err),
    };
    let Some(content) = render(&records, query.format) else {
        return StatusCode::NO_CONTENT.into_response();
    };
    let filename = export_filename(export_timestamp());
    let headers = [
        (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    (StatusCode::OK, headers, content).into_response()
}

/// Launch the API server.  Binds to the configured address and blocks
/// until the server terminates.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "server listening");
    axum::serve(listener, build_router()).await?;
    Ok(())
}
