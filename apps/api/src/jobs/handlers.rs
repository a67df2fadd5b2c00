//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};

use crate::cache::CacheStats;
use crate::errors::AppError;
use crate::jobs::models::{JobDetailsResponse, RecommendationsRequest, RecommendationsResponse};
use crate::jobs::service;
use crate::models::profile::JobQuery;
use crate::state::AppState;

/// POST /api/v1/jobs/details
///
/// Expands a job title/company into a full description. Served from the cache
/// when an equivalent query was answered within the TTL.
pub async fn handle_job_details(
    State(state): State<AppState>,
    Json(query): Json<JobQuery>,
) -> Result<Json<JobDetailsResponse>, AppError> {
    if query.title.trim().is_empty() && query.company.trim().is_empty() {
        return Err(AppError::Validation(
            "title or company is required".to_string(),
        ));
    }

    let result = service::job_details(&state.cache, state.generator.as_ref(), &query).await?;

    Ok(Json(JobDetailsResponse {
        details: result.value,
        cached: result.cached,
    }))
}

/// POST /api/v1/jobs/recommendations
///
/// Suggests roles for a resume profile, optionally biased by target keywords.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    if request.profile.is_empty() {
        return Err(AppError::Validation(
            "profile must include skills, experience, or a summary".to_string(),
        ));
    }

    let result = service::recommendations(
        &state.cache,
        state.generator.as_ref(),
        &request.profile,
        &request.keywords,
    )
    .await?;

    Ok(Json(RecommendationsResponse {
        recommendations: result.value,
        cached: result.cached,
    }))
}

/// GET /api/v1/cache/stats
///
/// `size` counts expired entries that have not been swept yet.
pub async fn handle_cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
