use super::domain::{ApplicantRecord, JobId, JobPosting};

/// Result of asking the data source for a job and its applicant pool.
///
/// `loading` mirrors the upstream fetch state: while it is set the caller
/// must defer, and `job = None` is the distinct not-found state. Neither may
/// reach the filter/sort/export pipeline.
#[derive(Debug, Clone)]
pub struct JobFetch {
    pub job: Option<JobPosting>,
    pub loading: bool,
    pub applicants: Vec<ApplicantRecord>,
}

impl JobFetch {
    pub fn ready(job: JobPosting, applicants: Vec<ApplicantRecord>) -> Self {
        Self {
            job: Some(job),
            loading: false,
            applicants,
        }
    }

    pub fn loading() -> Self {
        Self {
            job: None,
            loading: true,
            applicants: Vec::new(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            job: None,
            loading: false,
            applicants: Vec::new(),
        }
    }
}

/// Read-only data source abstraction so the view service can be exercised in
/// isolation.
pub trait JobDirectory: Send + Sync {
    fn fetch(&self, job_id: &JobId) -> Result<JobFetch, DirectoryError>;
}

/// Error enumeration for data source failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("job directory unavailable: {0}")]
    Unavailable(String),
}
