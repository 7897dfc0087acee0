use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::criteria::{
    ExperienceBand, FilterCriteria, GenderFilter, LocationFilter, ScoreBand, SortDirection,
    SortKey, SortSpec,
};
use super::directory::JobDirectory;
use super::domain::JobId;
use super::export::ExportSink;
use super::service::{ApplicantViewService, ExportOutcome, PoolViewOutcome, ViewServiceError};

/// Router builder exposing the applicant pool view and its CSV export.
pub fn applicant_router<D, S>(service: Arc<ApplicantViewService<D, S>>) -> Router
where
    D: JobDirectory + 'static,
    S: ExportSink + 'static,
{
    Router::new()
        .route("/api/v1/jobs/:job_id/applicants", get(view_handler::<D, S>))
        .route(
            "/api/v1/jobs/:job_id/applicants/export",
            get(export_handler::<D, S>),
        )
        .with_state(service)
}

/// Raw query parameters of the applicant pool endpoints. Every field is
/// optional; selector values are decoded fail-open so a stale or malformed
/// link still renders the full pool.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicantQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

impl ApplicantQuery {
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.clone());
        }
        if let Some(raw) = &self.experience {
            criteria = criteria.with_experience(ExperienceBand::from_param(raw));
        }
        if let Some(raw) = &self.location {
            criteria = criteria.with_location(LocationFilter::from_param(raw));
        }
        if let Some(raw) = &self.gender {
            criteria = criteria.with_gender(GenderFilter::from_param(raw));
        }
        if let Some(raw) = &self.score {
            criteria = criteria.with_score(ScoreBand::from_param(raw));
        }
        if let Some(key) = self.sort.as_deref().and_then(SortKey::from_param) {
            let direction = self
                .direction
                .as_deref()
                .map(SortDirection::from_param)
                .unwrap_or_default();
            criteria = criteria.with_sort(SortSpec::by(key, direction));
        }
        criteria
    }
}

pub(crate) async fn view_handler<D, S>(
    State(service): State<Arc<ApplicantViewService<D, S>>>,
    Path(job_id): Path<String>,
    Query(query): Query<ApplicantQuery>,
) -> Response
where
    D: JobDirectory + 'static,
    S: ExportSink + 'static,
{
    let job_id = JobId(job_id);
    match service.view(&job_id, &query.criteria()) {
        Ok(PoolViewOutcome::Ready(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(PoolViewOutcome::Loading) => loading_response(),
        Ok(PoolViewOutcome::NotFound) => not_found_response(&job_id),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<D, S>(
    State(service): State<Arc<ApplicantViewService<D, S>>>,
    Path(job_id): Path<String>,
    Query(query): Query<ApplicantQuery>,
) -> Response
where
    D: JobDirectory + 'static,
    S: ExportSink + 'static,
{
    let job_id = JobId(job_id);
    match service.export(&job_id, &query.criteria()) {
        Ok(ExportOutcome::Ready(document)) => {
            let disposition = format!("attachment; filename=\"{}\"", document.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                document.content,
            )
                .into_response()
        }
        Ok(ExportOutcome::Loading) => loading_response(),
        Ok(ExportOutcome::NotFound) => not_found_response(&job_id),
        Err(error) => error_response(error),
    }
}

fn loading_response() -> Response {
    (
        StatusCode::ACCEPTED,
        axum::Json(json!({ "status": "loading" })),
    )
        .into_response()
}

fn not_found_response(job_id: &JobId) -> Response {
    let payload = json!({
        "error": "job not found",
        "job_id": job_id.0,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn error_response(error: ViewServiceError) -> Response {
    let status = match &error {
        ViewServiceError::MissingJobId => StatusCode::BAD_REQUEST,
        ViewServiceError::Directory(_) => StatusCode::SERVICE_UNAVAILABLE,
        ViewServiceError::Export(_) | ViewServiceError::Sink(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
