use actix_web::{http::StatusCode, web, HttpResponse};
use log::error;
use serde::Serialize;

use crate::services::upstream_client::UpstreamError;

pub mod flights;
pub mod health;
pub mod hotels;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Map a relay failure onto the status code and `{error, message}` body the client expects.
pub fn upstream_error_response(kind: &str, err: &UpstreamError) -> HttpResponse {
    let (status, error) = match err {
        UpstreamError::MissingApiKey => (StatusCode::BAD_REQUEST, "API key is required".to_string()),
        UpstreamError::Unreachable(_) | UpstreamError::InvalidBody(_) => (
            StatusCode::BAD_GATEWAY,
            format!("Failed to reach {} search service", kind),
        ),
        UpstreamError::Status { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            format!("{} search failed", kind),
        ),
    };

    if status.is_server_error() {
        error!("{} relay failed: {}", kind, err);
    }

    let message = match err {
        UpstreamError::Status { message, .. } => message.clone(),
        other => other.to_string(),
    };

    HttpResponse::build(status).json(ErrorBody { error, message })
}

/// Route table for the search proxy, shared by the binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/flights", web::get().to(flights::search_flights))
            .route("/hotels", web::get().to(hotels::search_hotels)),
    );
}
