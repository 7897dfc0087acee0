use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier wrapper for job postings, as supplied by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Metadata describing the posting an applicant pool belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub job_title: String,
}

/// Gender as disclosed by the candidate. Unrecognized wire values collapse to
/// [`Gender::Other`] instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub(crate) fn from_wire(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.eq_ignore_ascii_case("male") {
            Some(Gender::Male)
        } else if trimmed.eq_ignore_ascii_case("female") {
            Some(Gender::Female)
        } else {
            Some(Gender::Other)
        }
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// One employment stint. Endpoints that fail to parse are kept as `None` and
/// contribute nothing to the experience total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceStint {
    #[serde(
        rename = "candidate_start_date",
        default,
        deserialize_with = "lenient_instant"
    )]
    pub start: Option<NaiveDateTime>,
    #[serde(
        rename = "candidate_end_date",
        default,
        deserialize_with = "lenient_instant"
    )]
    pub end: Option<NaiveDateTime>,
}

impl ExperienceStint {
    pub fn spanning(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_hms_opt(0, 0, 0),
            end: end.and_hms_opt(0, 0, 0),
        }
    }
}

/// Education entry; only the institute is surfaced by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(rename = "candidate_institute", default)]
    pub institute: String,
}

/// One candidate's application to one job, as delivered by the platform API.
///
/// Every optional field deserializes leniently: missing, null, or malformed
/// values become neutral defaults so a single bad record never takes down the
/// whole applicant view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(rename = "candidate_first_name", default)]
    pub first_name: String,
    #[serde(rename = "candidate_last_name", default)]
    pub last_name: String,
    #[serde(
        rename = "candidate_current_role",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub current_role: Option<String>,
    #[serde(
        rename = "candidate_location",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub location: Option<String>,
    #[serde(
        rename = "candidate_gender",
        default,
        deserialize_with = "lenient_gender"
    )]
    pub gender: Option<Gender>,
    #[serde(rename = "screening_score", default, deserialize_with = "lenient_score")]
    pub screening_score: u8,
    #[serde(default)]
    pub experiences: Vec<ExperienceStint>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl ApplicantRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn current_role_text(&self) -> &str {
        self.current_role.as_deref().unwrap_or("")
    }

    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Coerce a screening score the way the platform serves it: numeric strings
/// take their leading integer digits, anything else becomes 0, and the result
/// is pinned to the 0-100 percentage range.
pub(crate) fn coerce_score(raw: &str) -> u8 {
    let trimmed = raw.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = body.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return 0;
    }

    digits
        .parse::<i64>()
        .map(|value| value.clamp(0, 100) as u8)
        .unwrap_or(100)
}

pub(crate) fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

fn lenient_instant<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(parse_instant))
}

fn lenient_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(Gender::from_wire))
}

fn lenient_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    match Option::<RawScore>::deserialize(deserializer)? {
        Some(RawScore::Number(value)) => Ok((value as i64).clamp(0, 100) as u8),
        Some(RawScore::Text(text)) => Ok(coerce_score(&text)),
        None => Ok(0),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
