use crate::infra::{AppState, InMemoryJobDirectory};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use hireboard::dashboard::applicants::{
    applicant_router, ApplicantRecord, ApplicantViewService, ExportSink, JobId, JobPosting,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub(crate) fn with_dashboard_routes<S>(
    service: Arc<ApplicantViewService<InMemoryJobDirectory, S>>,
    directory: Arc<InMemoryJobDirectory>,
) -> axum::Router
where
    S: ExportSink + 'static,
{
    applicant_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/jobs", axum::routing::post(ingest_endpoint))
        .layer(Extension(directory))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Snapshot pushed by the upstream platform: either a loading marker or the
/// full job + applicant pool.
#[derive(Debug, Deserialize)]
pub(crate) struct JobIngestRequest {
    pub(crate) job_id: String,
    #[serde(default)]
    pub(crate) loading: bool,
    #[serde(default)]
    pub(crate) job: Option<JobPosting>,
    #[serde(default)]
    pub(crate) applicants: Vec<ApplicantRecord>,
}

pub(crate) async fn ingest_endpoint(
    Extension(directory): Extension<Arc<InMemoryJobDirectory>>,
    Json(payload): Json<JobIngestRequest>,
) -> Response {
    if payload.job_id.trim().is_empty() {
        let body = json!({ "error": "job_id must not be blank" });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let job_id = JobId(payload.job_id);

    if payload.loading {
        directory.mark_loading(&job_id);
        let body = json!({ "job_id": job_id.0, "status": "loading" });
        return (StatusCode::ACCEPTED, Json(body)).into_response();
    }

    let Some(job) = payload.job else {
        let body = json!({ "error": "job metadata is required unless loading is set" });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let count = payload.applicants.len();
    directory.insert(job_id.clone(), job, payload.applicants);
    info!(job_id = %job_id.0, applicants = count, "job snapshot ingested");

    let body = json!({ "job_id": job_id.0, "applicants": count });
    (StatusCode::ACCEPTED, Json(body)).into_response()
}
