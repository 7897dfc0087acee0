use hireboard::dashboard::applicants::{
    ApplicantRecord, DirectoryError, ExportDocument, ExportSink, JobDirectory, JobFetch, JobId,
    JobPosting, SinkError,
};
use hireboard::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local job directory fed by the ingest endpoint or snapshot files.
#[derive(Default, Clone)]
pub(crate) struct InMemoryJobDirectory {
    jobs: Arc<Mutex<HashMap<String, (JobPosting, Vec<ApplicantRecord>)>>>,
    pending: Arc<Mutex<HashSet<String>>>,
}

impl InMemoryJobDirectory {
    pub(crate) fn insert(&self, job_id: JobId, job: JobPosting, applicants: Vec<ApplicantRecord>) {
        self.pending
            .lock()
            .expect("directory mutex poisoned")
            .remove(&job_id.0);
        self.jobs
            .lock()
            .expect("directory mutex poisoned")
            .insert(job_id.0, (job, applicants));
    }

    pub(crate) fn mark_loading(&self, job_id: &JobId) {
        self.pending
            .lock()
            .expect("directory mutex poisoned")
            .insert(job_id.0.clone());
    }
}

impl JobDirectory for InMemoryJobDirectory {
    fn fetch(&self, job_id: &JobId) -> Result<JobFetch, DirectoryError> {
        if self
            .pending
            .lock()
            .expect("directory mutex poisoned")
            .contains(&job_id.0)
        {
            return Ok(JobFetch::loading());
        }

        let guard = self.jobs.lock().expect("directory mutex poisoned");
        Ok(match guard.get(&job_id.0) {
            Some((job, applicants)) => JobFetch::ready(job.clone(), applicants.clone()),
            None => JobFetch::not_found(),
        })
    }
}

/// Filesystem realization of the download sink: one file per delivery under
/// the configured export directory.
pub(crate) struct FileExportSink {
    directory: PathBuf,
}

impl FileExportSink {
    pub(crate) fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ExportSink for FileExportSink {
    fn deliver(&self, document: &ExportDocument) -> Result<(), SinkError> {
        fs::create_dir_all(&self.directory)?;
        let safe_name = document.filename.replace(['/', '\\'], "_");
        fs::write(self.directory.join(safe_name), &document.content)?;
        Ok(())
    }
}

/// Job snapshot file consumed by `applicants export`: the job id, its
/// posting, and the raw applicant pool in the platform wire format.
#[derive(Debug, Deserialize)]
pub(crate) struct JobSnapshot {
    pub(crate) job_id: String,
    pub(crate) job: JobPosting,
    #[serde(default)]
    pub(crate) applicants: Vec<ApplicantRecord>,
}

pub(crate) fn load_job_snapshot(path: &Path) -> Result<JobSnapshot, AppError> {
    let raw = fs::read_to_string(path)?;
    let snapshot: JobSnapshot = serde_json::from_str(&raw)?;
    Ok(snapshot)
}
