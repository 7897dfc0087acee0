//! The pure applicant view pipeline: search and filter predicates, the stable
//! sort, and the distinct-location extractor. Every function reads one
//! criteria snapshot, never mutates its input, and returns a fresh sequence.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::criteria::{FilterCriteria, SortDirection, SortKey, SortSpec};
use super::domain::ApplicantRecord;
use super::experience::total_experience_years;

/// Whether an applicant belongs in the derived view for the given criteria.
pub fn matches(applicant: &ApplicantRecord, criteria: &FilterCriteria) -> bool {
    matches_search(applicant, &criteria.search) && matches_filters(applicant, criteria)
}

fn matches_search(applicant: &ApplicantRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    applicant.full_name().to_lowercase().contains(&needle)
        || applicant
            .current_role_text()
            .to_lowercase()
            .contains(&needle)
        || applicant.location_text().to_lowercase().contains(&needle)
}

fn matches_filters(applicant: &ApplicantRecord, criteria: &FilterCriteria) -> bool {
    criteria.gender.matches(applicant.gender)
        && criteria.location.matches(applicant.location_text())
        && criteria
            .experience
            .matches(total_experience_years(&applicant.experiences))
        && criteria.score.matches(applicant.screening_score)
}

/// Return a newly ordered copy of `applicants`. With no active key the input
/// order is preserved as-is. The underlying sort is stable, so ties keep
/// their pre-sort relative order, and descending merely reverses the
/// comparison.
pub fn sort(applicants: &[ApplicantRecord], spec: SortSpec) -> Vec<ApplicantRecord> {
    let mut ordered = applicants.to_vec();
    let Some(key) = spec.key else {
        return ordered;
    };

    ordered.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    ordered
}

fn compare_by_key(a: &ApplicantRecord, b: &ApplicantRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .full_name()
            .to_lowercase()
            .cmp(&b.full_name().to_lowercase()),
        SortKey::Role => a
            .current_role_text()
            .to_lowercase()
            .cmp(&b.current_role_text().to_lowercase()),
        SortKey::Location => a
            .location_text()
            .to_lowercase()
            .cmp(&b.location_text().to_lowercase()),
        SortKey::Score => a.screening_score.cmp(&b.screening_score),
    }
}

/// Search + filter + sort in one pass over an immutable snapshot.
pub fn derive_view(
    applicants: &[ApplicantRecord],
    criteria: &FilterCriteria,
) -> Vec<ApplicantRecord> {
    let shortlisted: Vec<ApplicantRecord> = applicants
        .iter()
        .filter(|applicant| matches(applicant, criteria))
        .cloned()
        .collect();
    sort(&shortlisted, criteria.sort)
}

/// Distinct non-empty locations in first-occurrence order, used to populate
/// the location selector.
pub fn distinct_locations(applicants: &[ApplicantRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut locations = Vec::new();
    for applicant in applicants {
        let location = applicant.location_text();
        if location.is_empty() {
            continue;
        }
        if seen.insert(location.to_string()) {
            locations.push(location.to_string());
        }
    }
    locations
}
