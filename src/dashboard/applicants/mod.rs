//! The applicant pool screen of the employer dashboard.
//!
//! The heart of the module is a pure view pipeline: one criteria snapshot
//! (search text, band filters, sort) applied to the raw applicant collection
//! yields a derived, ordered view, with a CSV export of whatever is currently
//! visible. The surrounding service wires the pipeline to a read-only job
//! directory and a download sink so the same code drives the HTTP API, the
//! CLI, and the tests.

pub mod criteria;
pub mod directory;
pub mod domain;
pub mod experience;
pub mod export;
pub mod pipeline;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use criteria::{
    ExperienceBand, FilterCriteria, GenderFilter, LocationFilter, ScoreBand, SortDirection,
    SortKey, SortSpec,
};
pub use directory::{DirectoryError, JobDirectory, JobFetch};
pub use domain::{ApplicantRecord, EducationEntry, ExperienceStint, Gender, JobId, JobPosting};
pub use experience::total_experience_years;
pub use export::{export_csv, ExportDocument, ExportError, ExportSink, SinkError, EXPORT_HEADER};
pub use pipeline::{derive_view, distinct_locations};
pub use router::{applicant_router, ApplicantQuery};
pub use service::{
    ApplicantPoolView, ApplicantRowView, ApplicantViewService, ExportOutcome, PoolViewOutcome,
    ViewServiceError,
};
