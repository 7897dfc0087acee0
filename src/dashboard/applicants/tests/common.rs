use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::dashboard::applicants::directory::{DirectoryError, JobDirectory, JobFetch};
use crate::dashboard::applicants::domain::{
    ApplicantRecord, EducationEntry, ExperienceStint, Gender, JobId, JobPosting,
};
use crate::dashboard::applicants::export::{ExportDocument, ExportSink, SinkError};
use crate::dashboard::applicants::service::ApplicantViewService;

pub(super) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn job_id() -> JobId {
    JobId("job-2048".to_string())
}

pub(super) fn posting() -> JobPosting {
    JobPosting {
        job_title: "Backend Engineer".to_string(),
    }
}

pub(super) fn ana() -> ApplicantRecord {
    ApplicantRecord {
        first_name: "Ana".to_string(),
        last_name: "Lee".to_string(),
        current_role: Some("Data Analyst".to_string()),
        location: Some("NY".to_string()),
        gender: Some(Gender::Female),
        screening_score: 92,
        experiences: vec![ExperienceStint::spanning(day(2020, 1, 1), day(2021, 1, 1))],
        education: vec![EducationEntry {
            institute: "Hunter College".to_string(),
        }],
    }
}

pub(super) fn bo() -> ApplicantRecord {
    ApplicantRecord {
        first_name: "Bo".to_string(),
        last_name: "Kim".to_string(),
        current_role: Some("Backend Engineer".to_string()),
        location: Some("LA".to_string()),
        gender: Some(Gender::Male),
        screening_score: 60,
        experiences: Vec::new(),
        education: Vec::new(),
    }
}

pub(super) fn carla() -> ApplicantRecord {
    ApplicantRecord {
        first_name: "Carla".to_string(),
        last_name: "Mendes".to_string(),
        current_role: Some("Backend Engineer".to_string()),
        location: Some("Des Moines, IA".to_string()),
        gender: Some(Gender::Female),
        screening_score: 75,
        experiences: vec![
            ExperienceStint::spanning(day(2016, 3, 1), day(2019, 8, 1)),
            ExperienceStint::spanning(day(2019, 9, 1), day(2023, 2, 1)),
        ],
        education: vec![EducationEntry {
            institute: "UT Austin".to_string(),
        }],
    }
}

/// Record with every optional field absent plus a stint that failed to parse.
pub(super) fn dev() -> ApplicantRecord {
    ApplicantRecord {
        first_name: "Dev".to_string(),
        last_name: "Patel".to_string(),
        current_role: None,
        location: None,
        gender: None,
        screening_score: 47,
        experiences: vec![ExperienceStint {
            start: None,
            end: None,
        }],
        education: Vec::new(),
    }
}

pub(super) fn pool() -> Vec<ApplicantRecord> {
    vec![ana(), bo(), carla(), dev()]
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    jobs: Arc<Mutex<HashMap<String, JobFetch>>>,
}

impl MemoryDirectory {
    pub(super) fn put_ready(
        &self,
        job_id: &JobId,
        job: JobPosting,
        applicants: Vec<ApplicantRecord>,
    ) {
        self.jobs
            .lock()
            .expect("directory mutex poisoned")
            .insert(job_id.0.clone(), JobFetch::ready(job, applicants));
    }

    pub(super) fn put_loading(&self, job_id: &JobId) {
        self.jobs
            .lock()
            .expect("directory mutex poisoned")
            .insert(job_id.0.clone(), JobFetch::loading());
    }
}

impl JobDirectory for MemoryDirectory {
    fn fetch(&self, job_id: &JobId) -> Result<JobFetch, DirectoryError> {
        let guard = self.jobs.lock().expect("directory mutex poisoned");
        Ok(guard
            .get(&job_id.0)
            .cloned()
            .unwrap_or_else(JobFetch::not_found))
    }
}

pub(super) struct UnavailableDirectory;

impl JobDirectory for UnavailableDirectory {
    fn fetch(&self, _job_id: &JobId) -> Result<JobFetch, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct CapturingSink {
    deliveries: Arc<Mutex<Vec<ExportDocument>>>,
}

impl CapturingSink {
    pub(super) fn deliveries(&self) -> Vec<ExportDocument> {
        self.deliveries.lock().expect("sink mutex poisoned").clone()
    }
}

impl ExportSink for CapturingSink {
    fn deliver(&self, document: &ExportDocument) -> Result<(), SinkError> {
        self.deliveries
            .lock()
            .expect("sink mutex poisoned")
            .push(document.clone());
        Ok(())
    }
}

pub(super) fn build_service() -> (
    ApplicantViewService<MemoryDirectory, CapturingSink>,
    Arc<MemoryDirectory>,
    Arc<CapturingSink>,
) {
    let directory = Arc::new(MemoryDirectory::default());
    let sink = Arc::new(CapturingSink::default());
    let service = ApplicantViewService::new(directory.clone(), sink.clone());
    (service, directory, sink)
}

pub(super) fn seeded_service() -> (
    ApplicantViewService<MemoryDirectory, CapturingSink>,
    Arc<MemoryDirectory>,
    Arc<CapturingSink>,
) {
    let (service, directory, sink) = build_service();
    directory.put_ready(&job_id(), posting(), pool());
    (service, directory, sink)
}
