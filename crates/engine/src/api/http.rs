//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use folgen_domain::{
    CityStory, Episode, EpisodeDetails, GlossaryEntry, MathFact, Playlist, WithEpisode,
};
use folgen_shared::{
    BatchResponse, ErrorCode, GlossaryFilter, QueryBatch, QueryDescriptor, ResponseResult,
};

use crate::app::App;
use crate::use_cases::catalog::{parse_request, CatalogQueries, QueryError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/query", post(query))
        .route("/api/schema", get(schema))
        .route("/api/episodes", get(list_episodes))
        .route("/api/city-stories", get(list_city_stories))
        .route("/api/math-facts", get(list_math_facts))
        .route("/api/playlists", get(list_playlists))
        .route("/api/glossary", get(list_glossary))
        .route("/api/episode-details", get(list_episode_details))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Query Endpoint
// =============================================================================

/// Single query (`{"query": ...}`) or batch (`{"queries": [...]}`).
async fn query(
    State(app): State<Arc<App>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let queries = &app.use_cases.catalog.queries;

    if body.get("queries").is_some() {
        let batch: QueryBatch = serde_json::from_value(body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid batch: {e}")))?;
        tracing::debug!(size = batch.queries.len(), "Resolving query batch");
        let results = queries.execute_batch(batch);
        return Ok(Json(BatchResponse { results }).into_response());
    }

    let request = parse_request(body)?;
    match ResponseResult::from_response(&queries.execute(&request)) {
        ResponseResult::Error { message, .. } => Err(ApiError::Internal(message)),
        result => Ok(Json(result).into_response()),
    }
}

async fn schema() -> Json<Vec<QueryDescriptor>> {
    Json(CatalogQueries::schema())
}

// =============================================================================
// Per-Collection Shortcuts
// =============================================================================

async fn list_episodes(State(app): State<Arc<App>>) -> Json<Vec<Episode>> {
    Json(app.use_cases.catalog.queries.episodes())
}

async fn list_city_stories(State(app): State<Arc<App>>) -> Json<Vec<WithEpisode<CityStory>>> {
    Json(app.use_cases.catalog.queries.city_stories())
}

async fn list_math_facts(State(app): State<Arc<App>>) -> Json<Vec<WithEpisode<MathFact>>> {
    Json(app.use_cases.catalog.queries.math_facts())
}

async fn list_playlists(State(app): State<Arc<App>>) -> Json<Vec<Playlist>> {
    Json(app.use_cases.catalog.queries.playlists())
}

async fn list_episode_details(State(app): State<Arc<App>>) -> Json<Vec<EpisodeDetails>> {
    Json(app.use_cases.catalog.queries.episode_details())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlossaryParams {
    contains_substring: Option<String>,
}

async fn list_glossary(
    State(app): State<Arc<App>>,
    Query(params): Query<GlossaryParams>,
) -> Json<Vec<GlossaryEntry>> {
    let filter = GlossaryFilter {
        contains_substring: params.contains_substring,
    };
    Json(app.use_cases.catalog.queries.glossary(Some(&filter)))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UnknownQuery(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg),
            ApiError::UnknownQuery(name) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::UnknownQuery,
                format!("Unknown query: {name}"),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    "Internal error".to_string(),
                )
            }
        };
        (status, Json(ResponseResult::error(code, message))).into_response()
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::UnknownQuery(name) => ApiError::UnknownQuery(name),
            QueryError::InvalidRequest(msg) => ApiError::BadRequest(msg),
        }
    }
}
