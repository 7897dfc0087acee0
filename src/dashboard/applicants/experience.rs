use super::domain::ExperienceStint;

const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Total experience across all stints, in fractional years.
///
/// Stints accumulate additively: overlapping employment is counted twice, the
/// same way the platform has always reported it. Interval direction is
/// ignored (the absolute span counts), and a stint missing either endpoint
/// contributes nothing.
pub fn total_experience_years(stints: &[ExperienceStint]) -> f64 {
    stints.iter().map(stint_years).sum()
}

fn stint_years(stint: &ExperienceStint) -> f64 {
    match (stint.start, stint.end) {
        (Some(start), Some(end)) => {
            let seconds = (end - start).num_seconds().abs();
            seconds as f64 / SECONDS_PER_YEAR
        }
        _ => 0.0,
    }
}
