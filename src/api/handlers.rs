//! HTTP request handlers for the roster report API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_roster, select_events};
use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{CalendarEvent, ReportType, RosterReport};

use super::request::RosterRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster", post(roster_handler))
        .with_state(state)
}

/// Handler for POST /roster endpoint.
///
/// Accepts a roster request and returns the roster report for the month.
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the problem
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the report configuration before touching any event
    let loader = state.config();
    let config = match loader.report_config(&request.options) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid report configuration"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let report_type = request
        .report_type
        .unwrap_or(loader.settings().report_type);
    let events: Vec<CalendarEvent> = request.events.into_iter().map(Into::into).collect();

    // Build the report
    let start_time = Instant::now();
    match perform_report(&events, &request.attendees, report_type, &config) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                report_month = report.report_month,
                events_count = events.len(),
                rostered_count = report.rostered_events.len(),
                attendees_count = report.summaries.len(),
                duration_us = duration.as_micros(),
                "Roster report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster report failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the roster report for the selected events.
fn perform_report(
    events: &[CalendarEvent],
    attendees: &[String],
    report_type: ReportType,
    config: &ReportConfig,
) -> EngineResult<RosterReport> {
    let start_time = Instant::now();

    let selected = select_events(events, config.timezone(), config.report_month(), attendees);
    let roster = build_roster(selected, config)?;
    let rows = report_type.build_rows(&roster.summaries);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(RosterReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        report_month: config.report_month(),
        timezone: config.timezone().name().to_string(),
        rostered_events: roster.rostered_events,
        summaries: roster.summaries,
        rows,
        duration_us,
    })
}
