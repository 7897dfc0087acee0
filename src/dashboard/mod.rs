//! Employer-facing dashboard screens.

pub mod applicants;
