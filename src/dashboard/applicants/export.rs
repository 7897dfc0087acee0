use serde::Serialize;

use super::domain::{ApplicantRecord, JobId};
use super::experience::total_experience_years;

/// Fixed column set of the applicant export.
pub const EXPORT_HEADER: [&str; 7] = [
    "Full Name",
    "College Name",
    "Experience",
    "Current Role",
    "Location",
    "Gender",
    "Profile Score",
];

const MISSING_FIELD: &str = "N/A";

/// A generated CSV document plus the filename suggested to the download sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub content: String,
}

/// Serialize the derived view to CSV, one row per applicant in view order.
///
/// Fields containing commas, quotes, or newlines are quoted per RFC 4180;
/// comma-free values serialize exactly as a plain join would.
pub fn export_csv(
    applicants: &[ApplicantRecord],
    job_title: &str,
    job_id: &JobId,
) -> Result<ExportDocument, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for applicant in applicants {
        writer.write_record(&export_row(applicant))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|err| ExportError::Buffer(err.to_string()))?;

    Ok(ExportDocument {
        filename: format!("applicants-{}-{}.csv", job_title, job_id.0),
        content,
    })
}

fn export_row(applicant: &ApplicantRecord) -> [String; 7] {
    let college = applicant
        .education
        .first()
        .map(|entry| entry.institute.clone())
        .unwrap_or_else(|| MISSING_FIELD.to_string());

    [
        applicant.full_name(),
        college,
        format!(
            "{:.1} years",
            total_experience_years(&applicant.experiences)
        ),
        applicant
            .current_role
            .clone()
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        applicant
            .location
            .clone()
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        applicant
            .gender
            .map(|gender| gender.label().to_string())
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        format!("{}%", applicant.screening_score),
    ]
}

/// Destination for generated documents (filesystem, object store, ...).
/// Delivery is fire-and-forget from the pipeline's point of view.
pub trait ExportSink: Send + Sync {
    fn deliver(&self, document: &ExportDocument) -> Result<(), SinkError>;
}

/// Error raised while building the CSV document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to build csv document: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finish csv document: {0}")]
    Buffer(String),
}

/// Error raised by a delivery sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export sink unavailable: {0}")]
    Unavailable(String),
}
