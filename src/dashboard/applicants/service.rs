use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::criteria::FilterCriteria;
use super::directory::{DirectoryError, JobDirectory, JobFetch};
use super::domain::{ApplicantRecord, Gender, JobId, JobPosting};
use super::experience::total_experience_years;
use super::export::{export_csv, ExportDocument, ExportError, ExportSink, SinkError};
use super::pipeline;

/// Service composing the data source, the view pipeline, and the export sink.
pub struct ApplicantViewService<D, S> {
    directory: Arc<D>,
    sink: Arc<S>,
}

impl<D, S> ApplicantViewService<D, S>
where
    D: JobDirectory + 'static,
    S: ExportSink + 'static,
{
    pub fn new(directory: Arc<D>, sink: Arc<S>) -> Self {
        Self { directory, sink }
    }

    /// Derive the applicant pool view for one criteria snapshot.
    pub fn view(
        &self,
        job_id: &JobId,
        criteria: &FilterCriteria,
    ) -> Result<PoolViewOutcome, ViewServiceError> {
        let fetch = self.fetch_checked(job_id)?;
        if fetch.loading {
            return Ok(PoolViewOutcome::Loading);
        }
        let Some(job) = fetch.job else {
            return Ok(PoolViewOutcome::NotFound);
        };

        Ok(PoolViewOutcome::Ready(build_pool_view(
            &job,
            &fetch.applicants,
            criteria,
        )))
    }

    /// Export the current derived view as CSV and hand it to the sink.
    /// Invoked only on explicit user action, one delivery per call.
    pub fn export(
        &self,
        job_id: &JobId,
        criteria: &FilterCriteria,
    ) -> Result<ExportOutcome, ViewServiceError> {
        let fetch = self.fetch_checked(job_id)?;
        if fetch.loading {
            return Ok(ExportOutcome::Loading);
        }
        let Some(job) = fetch.job else {
            return Ok(ExportOutcome::NotFound);
        };

        let visible = pipeline::derive_view(&fetch.applicants, criteria);
        let document = export_csv(&visible, &job.job_title, job_id)?;
        self.sink.deliver(&document)?;
        info!(job_id = %job_id.0, rows = visible.len(), "applicant export delivered");

        Ok(ExportOutcome::Ready(document))
    }

    fn fetch_checked(&self, job_id: &JobId) -> Result<JobFetch, ViewServiceError> {
        if job_id.0.trim().is_empty() {
            return Err(ViewServiceError::MissingJobId);
        }
        Ok(self.directory.fetch(job_id)?)
    }
}

fn build_pool_view(
    job: &JobPosting,
    applicants: &[ApplicantRecord],
    criteria: &FilterCriteria,
) -> ApplicantPoolView {
    let visible = pipeline::derive_view(applicants, criteria);
    ApplicantPoolView {
        job_title: job.job_title.clone(),
        total: applicants.len(),
        shown: visible.len(),
        locations: pipeline::distinct_locations(applicants),
        applicants: visible.iter().map(ApplicantRowView::from_record).collect(),
    }
}

/// One table row of the applicant pool screen.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantRowView {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub screening_score: u8,
    pub experience_years: f64,
}

impl ApplicantRowView {
    pub fn from_record(record: &ApplicantRecord) -> Self {
        Self {
            full_name: record.full_name(),
            current_role: record.current_role.clone(),
            location: record.location.clone(),
            gender: record.gender,
            screening_score: record.screening_score,
            experience_years: total_experience_years(&record.experiences),
        }
    }
}

/// The filtered, searched, sorted pool plus the "Showing X of Y" summary and
/// the distinct locations feeding the filter selector.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantPoolView {
    pub job_title: String,
    pub total: usize,
    pub shown: usize,
    pub locations: Vec<String>,
    pub applicants: Vec<ApplicantRowView>,
}

/// Outcome of a view request; loading and not-found short-circuit before any
/// pipeline work.
#[derive(Debug)]
pub enum PoolViewOutcome {
    Loading,
    NotFound,
    Ready(ApplicantPoolView),
}

/// Outcome of an export request.
#[derive(Debug)]
pub enum ExportOutcome {
    Loading,
    NotFound,
    Ready(ExportDocument),
}

/// Error raised by the applicant view service.
#[derive(Debug, thiserror::Error)]
pub enum ViewServiceError {
    #[error("job id must not be blank")]
    MissingJobId,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
