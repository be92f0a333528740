// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use roster_recon_api::{
    ApiError, CsvPreviewResult, FiscalMonthResponse, ImportValidateRequest, PreviewRequest,
    PreviewResponse, StatisticsRequest, StatisticsResponse, ValidateRequest, ValidateResponse,
    fiscal_months, import_validate, preview, statistics, validate,
};
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

/// Roster reconciliation server - stateless HTTP boundary for the roster engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Calendar dates in query strings.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Query carrying the calendar date to evaluate against.
#[derive(Debug, Default, Deserialize)]
struct TodayQuery {
    /// `YYYY-MM-DD`; the current UTC date when absent.
    today: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok`.
    status: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream { .. } => {
                warn!(error = %err, "Upstream failure");
                StatusCode::BAD_GATEWAY
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Resolves the `today` query parameter.
fn resolve_today(query: &TodayQuery) -> Result<Date, HttpError> {
    match &query.today {
        Some(raw) => Date::parse(raw, DATE_FORMAT).map_err(|e| {
            HttpError::from(ApiError::InvalidInput {
                field: String::from("today"),
                message: format!("'{raw}' is not a YYYY-MM-DD date: {e}"),
            })
        }),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn handle_fiscal_month(
    Query(query): Query<TodayQuery>,
) -> Result<Json<FiscalMonthResponse>, HttpError> {
    let today: Date = resolve_today(&query)?;
    Ok(Json(fiscal_months(today)))
}

async fn handle_preview(
    Query(query): Query<TodayQuery>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, HttpError> {
    let today: Date = resolve_today(&query)?;
    let response: PreviewResponse = preview(req, today)?;
    Ok(Json(response))
}

async fn handle_validate(
    Query(query): Query<TodayQuery>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, HttpError> {
    let today: Date = resolve_today(&query)?;
    let response: ValidateResponse = validate(req, today)?;
    Ok(Json(response))
}

async fn handle_statistics(Json(req): Json<StatisticsRequest>) -> Json<StatisticsResponse> {
    Json(statistics(&req))
}

async fn handle_import_validate(
    Json(req): Json<ImportValidateRequest>,
) -> Result<Json<CsvPreviewResult>, HttpError> {
    let response: CsvPreviewResult = import_validate(&req)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router() -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/fiscal-month", get(handle_fiscal_month))
        .route("/preview", post(handle_preview))
        .route("/validate", post(handle_validate))
        .route("/statistics", post(handle_statistics))
        .route("/import/validate", post(handle_import_validate))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("Initializing roster reconciliation server");

    let app: Router = build_router();

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
