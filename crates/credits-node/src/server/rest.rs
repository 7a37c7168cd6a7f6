//! REST API endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use credits_core::{
    render_credits_page, AnimationPlan, CreditCategory, CreditsError, Measurements,
    RosterSnapshot, ScrollVariant,
};

use crate::AppState;

/// Error returned by REST handlers
#[derive(Debug)]
pub struct ApiError(pub CreditsError);

impl From<CreditsError> for ApiError {
    fn from(err: CreditsError) -> Self {
        ApiError(err)
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorBody {
            error: self.0.to_string(),
            code: self.0.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Server info endpoint
#[derive(Debug, Serialize)]
pub struct NodeInfo {
    pub name: String,
    pub version: &'static str,
    pub variant: ScrollVariant,
    pub uptime_seconds: u64,
}

pub async fn node_info(State(state): State<Arc<AppState>>) -> Json<NodeInfo> {
    Json(NodeInfo {
        name: state.config.server.title.clone(),
        version: env!("CARGO_PKG_VERSION"),
        variant: state.config.scroll.variant,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Rendered credits page
pub async fn credits_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let page = render_credits_page(&state.roster.snapshot(), &state.page_options())?;
    Ok(Html(page))
}

/// Current roster
pub async fn get_credits(State(state): State<Arc<AppState>>) -> Json<RosterSnapshot> {
    Json(state.roster.snapshot())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddCreditRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreditResponse {
    pub category: CreditCategory,
    pub name: String,
    pub changed: bool,
}

/// Credit a name; 201 when new, 200 when already present
pub async fn add_credit(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Json(request): Json<AddCreditRequest>,
) -> Result<(StatusCode, Json<CreditResponse>), ApiError> {
    let category: CreditCategory = category.parse()?;
    let added = state.add_credit(category, &request.name)?;
    let status = if added { StatusCode::CREATED } else { StatusCode::OK };

    Ok((
        status,
        Json(CreditResponse {
            category,
            name: request.name.trim().to_string(),
            changed: added,
        }),
    ))
}

/// Remove a credited name
pub async fn remove_credit(
    State(state): State<Arc<AppState>>,
    Path((category, name)): Path<(String, String)>,
) -> Result<Json<CreditResponse>, ApiError> {
    let category: CreditCategory = category.parse()?;
    let removed = state.remove_credit(category, &name);

    Ok(Json(CreditResponse {
        category,
        name: name.trim().to_string(),
        changed: removed,
    }))
}

/// Remove every credited name
pub async fn clear_credits(State(state): State<Arc<AppState>>) -> StatusCode {
    state.clear_credits();
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize)]
pub struct ScrollQuery {
    pub content_height: f64,
    pub viewport_height: f64,
    pub variant: Option<String>,
}

/// Scroll plan for explicit heights; defaults to the configured variant
pub async fn scroll_plan(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ScrollQuery>, QueryRejection>,
) -> Result<Json<AnimationPlan>, ApiError> {
    let Query(query) = query.map_err(|e| CreditsError::InvalidRequest(e.body_text()))?;
    let variant = match query.variant.as_deref() {
        Some(name) => name.parse()?,
        None => state.config.scroll.variant,
    };
    let params = variant.compute(Measurements::new(query.content_height, query.viewport_height))?;

    Ok(Json(AnimationPlan::new(variant, params)))
}
