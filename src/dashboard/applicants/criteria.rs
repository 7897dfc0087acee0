use super::domain::Gender;

/// Experience bucket selectable in the filter panel.
///
/// Selector parsing fails open: any token outside the recognized set maps to
/// [`ExperienceBand::All`] so a malformed filter state never hides applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceBand {
    #[default]
    All,
    UpToOne,
    OneToThree,
    ThreeToFive,
    FivePlus,
}

impl ExperienceBand {
    pub fn matches(self, years: f64) -> bool {
        match self {
            ExperienceBand::All => true,
            ExperienceBand::UpToOne => (0.0..=1.0).contains(&years),
            ExperienceBand::OneToThree => years > 1.0 && years <= 3.0,
            ExperienceBand::ThreeToFive => years > 3.0 && years <= 5.0,
            ExperienceBand::FivePlus => years > 5.0,
        }
    }

    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "0-1" => ExperienceBand::UpToOne,
            "1-3" => ExperienceBand::OneToThree,
            "3-5" => ExperienceBand::ThreeToFive,
            "5+" => ExperienceBand::FivePlus,
            _ => ExperienceBand::All,
        }
    }

    pub const fn as_param(self) -> &'static str {
        match self {
            ExperienceBand::All => "all",
            ExperienceBand::UpToOne => "0-1",
            ExperienceBand::OneToThree => "1-3",
            ExperienceBand::ThreeToFive => "3-5",
            ExperienceBand::FivePlus => "5+",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceBand::All => "All Experience",
            ExperienceBand::UpToOne => "0-1 year",
            ExperienceBand::OneToThree => "1-3 years",
            ExperienceBand::ThreeToFive => "3-5 years",
            ExperienceBand::FivePlus => "5+ years",
        }
    }
}

/// Screening score bucket selectable in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreBand {
    #[default]
    All,
    NinetyPlus,
    SeventyFiveToNinety,
    FiftyToSeventyFive,
    BelowFifty,
}

impl ScoreBand {
    pub fn matches(self, score: u8) -> bool {
        match self {
            ScoreBand::All => true,
            ScoreBand::NinetyPlus => score >= 90,
            ScoreBand::SeventyFiveToNinety => (75..90).contains(&score),
            ScoreBand::FiftyToSeventyFive => (50..75).contains(&score),
            ScoreBand::BelowFifty => score < 50,
        }
    }

    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "90+" => ScoreBand::NinetyPlus,
            "75-90" => ScoreBand::SeventyFiveToNinety,
            "50-75" => ScoreBand::FiftyToSeventyFive,
            "0-50" => ScoreBand::BelowFifty,
            _ => ScoreBand::All,
        }
    }

    pub const fn as_param(self) -> &'static str {
        match self {
            ScoreBand::All => "all",
            ScoreBand::NinetyPlus => "90+",
            ScoreBand::SeventyFiveToNinety => "75-90",
            ScoreBand::FiftyToSeventyFive => "50-75",
            ScoreBand::BelowFifty => "0-50",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::All => "All Scores",
            ScoreBand::NinetyPlus => "90% and above",
            ScoreBand::SeventyFiveToNinety => "75% - 90%",
            ScoreBand::FiftyToSeventyFive => "50% - 75%",
            ScoreBand::BelowFifty => "Below 50%",
        }
    }
}

/// Gender constraint; unrecognized selectors fail open to `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Is(Gender),
}

impl GenderFilter {
    pub fn matches(self, gender: Option<Gender>) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Is(wanted) => gender == Some(wanted),
        }
    }

    pub fn from_param(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("male") {
            GenderFilter::Is(Gender::Male)
        } else if trimmed.eq_ignore_ascii_case("female") {
            GenderFilter::Is(Gender::Female)
        } else {
            GenderFilter::All
        }
    }
}

/// Location constraint: substring containment against the selected value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Within(String),
}

impl LocationFilter {
    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Within(fragment) => location.contains(fragment.as_str()),
        }
    }

    pub fn from_param(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            LocationFilter::All
        } else {
            LocationFilter::Within(trimmed.to_string())
        }
    }
}

/// Column the derived view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Role,
    Location,
    Score,
}

impl SortKey {
    /// Unrecognized keys yield `None`, leaving the view order untouched.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "role" => Some(SortKey::Role),
            "location" => Some(SortKey::Location),
            "score" => Some(SortKey::Score),
            _ => None,
        }
    }

    pub const fn as_param(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Role => "role",
            SortKey::Location => "location",
            SortKey::Score => "score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_param(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "descending" | "desc" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Active ordering. At most one key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Re-selecting the active key flips direction; a new key starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self {
            key: Some(key),
            direction,
        }
    }
}

/// One immutable snapshot of everything the employer has dialed in: free-text
/// search, the four band filters, and the active sort. Updates go through the
/// named `with_*` operations, each returning a fresh value, so a pipeline
/// invocation can never observe a half-applied change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub experience: ExperienceBand,
    pub location: LocationFilter,
    pub gender: GenderFilter,
    pub score: ScoreBand,
    pub sort: SortSpec,
}

impl FilterCriteria {
    /// Everything back to the unconstrained defaults.
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_experience(self, experience: ExperienceBand) -> Self {
        Self { experience, ..self }
    }

    pub fn with_location(self, location: LocationFilter) -> Self {
        Self { location, ..self }
    }

    pub fn with_gender(self, gender: GenderFilter) -> Self {
        Self { gender, ..self }
    }

    pub fn with_score(self, score: ScoreBand) -> Self {
        Self { score, ..self }
    }

    pub fn with_sort(self, sort: SortSpec) -> Self {
        Self { sort, ..self }
    }

    pub fn toggle_sort(self, key: SortKey) -> Self {
        let sort = self.sort.toggle(key);
        Self { sort, ..self }
    }
}
