//! Average-rating analysis.
//!
//! Computes the mean community rating across a favorites collection and
//! classifies it into one of six fixed descriptive tiers.
//!
//! The tier boundaries are a historical contract: the comparison chain in
//! `describe` mixes `<=` and `>` on purpose (4.0 and 5.0 belong to the
//! cult-classics band, exactly 8.5 to the award-winning band) and must not
//! be "cleaned up" into uniform half-open intervals.

use catalog::Movie;

/// Mean of the well-formed ratings in `movies`, rounded to 2 decimal places.
///
/// Missing and non-finite ratings are excluded from the mean, not treated
/// as zero. Returns 0.0 when no valid rating remains.
pub fn average_score(movies: &[Movie]) -> f64 {
    let valid: Vec<f64> = movies
        .iter()
        .filter_map(|m| m.vote_average)
        .filter(|v| v.is_finite())
        .collect();

    if valid.is_empty() {
        return 0.0;
    }

    let mean = valid.iter().sum::<f64>() / valid.len() as f64;
    // Round half-up on the third decimal digit
    (mean * 100.0).round() / 100.0
}

/// Fixed description for an average score.
///
/// Bands over [0, 10]: [0,4), [4,5], (5,6.5], (6.5,7.5], (7.5,8.5], (8.5,10].
/// Scores outside [0, 10] take the defensive fallback string.
pub fn describe(score: f64) -> &'static str {
    if score >= 0.0 && score < 4.0 {
        "You have a unique taste in niche and experimental films"
    } else if score >= 4.0 && score <= 5.0 {
        "You enjoy cult classics and underrated gems"
    } else if score > 5.0 && score <= 6.5 {
        "You appreciate diverse films across the spectrum"
    } else if score > 6.5 && score <= 7.5 {
        "You prefer well-regarded and critically acclaimed films"
    } else if score > 7.5 && score <= 8.5 {
        "You love popular and award-winning cinema"
    } else if score > 8.5 && score <= 10.0 {
        "You have exceptional taste in acclaimed masterpieces"
    } else {
        "Your film preferences are ... rather unique"
    }
}
