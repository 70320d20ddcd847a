use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::models::{
    HealthResponse, RagQueryRequest, RagQueryResponse, ReloadResponse, Service, ServiceChunk,
    ServiceInfoResponse, ServicesListResponse,
};
use crate::search::engine::format_response;
use crate::state::AppState;

const MAX_TOP_K: usize = 20;

/// POST /api/rag/query - Rank content chunks against a free-text query.
pub async fn query_content(
    State(state): State<AppState>,
    Json(req): Json<RagQueryRequest>,
) -> Json<RagQueryResponse> {
    Json(run_query(&state, &req.query, req.service.as_deref(), req.top_k))
}

/// GET /api/rag/query - Same query operation for simple clients.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub q: String,
    pub service: Option<String>,
    pub top_k: Option<usize>,
}

pub async fn query_content_get(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<RagQueryResponse> {
    Json(run_query(
        &state,
        &params.q,
        params.service.as_deref(),
        params.top_k,
    ))
}

fn run_query(
    state: &AppState,
    query: &str,
    service: Option<&str>,
    top_k: Option<usize>,
) -> RagQueryResponse {
    let scoring = &state.config.scoring;
    let top_k = top_k.unwrap_or(scoring.top_k).clamp(1, MAX_TOP_K);

    // An unknown service name matches no chunks; that is a normal
    // not-found response, not a request error.
    let filter = match service {
        Some(raw) => match Service::parse(raw) {
            Some(parsed) => Some(parsed),
            None => return format_response(&[]),
        },
        None => None,
    };

    state.with_engine(|engine| {
        let results = engine.query(query, filter, top_k, scoring.min_score);
        format_response(&results)
    })
}

/// GET /api/rag/services - Services with indexed content.
pub async fn list_services(State(state): State<AppState>) -> Json<ServicesListResponse> {
    let services = state.with_engine(|engine| engine.available_services());
    Json(ServicesListResponse {
        services: services.iter().map(|s| s.as_str().to_string()).collect(),
    })
}

/// GET /api/rag/services/{service} - Full dump of one service's chunks.
pub async fn get_service_info(
    State(state): State<AppState>,
    Path(service): Path<String>,
) -> Result<Json<ServiceInfoResponse>, (StatusCode, String)> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            format!("Service '{service}' not found or has no content"),
        )
    };

    let Some(parsed) = Service::parse(&service) else {
        return Err(not_found());
    };

    let chunks = state.with_engine(|engine| engine.get_service_info(parsed));
    if chunks.is_empty() {
        return Err(not_found());
    }

    let total = chunks.len();
    let chunks: Vec<ServiceChunk> = chunks
        .into_iter()
        .map(|c| ServiceChunk {
            id: c.id,
            category: c.category,
            title: c.title,
            content: c.content,
            source: c.source,
        })
        .collect();

    Ok(Json(ServiceInfoResponse {
        service: parsed.as_str().to_string(),
        chunks,
        total,
    }))
}

/// GET /api/rag/health - Index status.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (total_chunks, services) =
        state.with_engine(|engine| (engine.chunk_count(), engine.available_services()));
    Json(HealthResponse {
        status: "healthy".to_string(),
        indexed: total_chunks > 0,
        total_chunks,
        services: services.iter().map(|s| s.as_str().to_string()).collect(),
        indexed_at: state.indexed_at(),
    })
}

/// POST /api/rag/reload - Rebuild the index from the content sources.
pub async fn reload(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, (StatusCode, String)> {
    let state_clone = state.clone();
    let (total_chunks, services) = tokio::task::spawn_blocking(move || state_clone.reload())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Reload failed: {e}"),
            )
        })?;

    tracing::info!("Index reloaded: {total_chunks} chunks");
    Ok(Json(ReloadResponse {
        total_chunks,
        services: services.iter().map(|s| s.as_str().to_string()).collect(),
        reloaded_at: Utc::now(),
    }))
}
