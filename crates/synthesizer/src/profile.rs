//! Top-level synthesis entry point.
//!
//! Runs the aggregation, scoring, and narrative stages over a favorites
//! collection and bundles their outputs. Each call recomputes everything
//! from the inputs; nothing is cached between calls and the whole flow is
//! side-effect-free, so callers may synthesize concurrently without
//! coordination.

use crate::genres::{self, GenreCount};
use crate::narrative;
use crate::score;
use catalog::{GenreCatalog, Movie};
use serde::{Deserialize, Serialize};

/// Everything the synthesizer derives from one favorites collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasteProfile {
    /// Ranked genre distribution (count descending)
    pub genre_counts: Vec<GenreCount>,
    /// Mean community rating, rounded to 2 decimal places
    pub average_score: f64,
    /// Fixed tier description for the average score
    pub score_description: String,
    /// The generated personality summary paragraph
    pub summary: String,
}

/// Synthesize a taste profile from a favorites collection.
///
/// ## Stages
/// 1. Aggregate and rank genres against the caller's catalog
/// 2. Compute the average rating and its tier description
/// 3. Compose the personality summary from both
///
/// Degrades gracefully on sparse input (empty collections, missing
/// overviews, unknown genre ids) instead of erroring.
pub fn synthesize(movies: &[Movie], catalog: &GenreCatalog) -> TasteProfile {
    let genre_counts = genres::aggregate(movies, catalog);
    tracing::debug!(
        movies = movies.len(),
        genres = genre_counts.len(),
        "aggregated genre distribution"
    );

    let average_score = score::average_score(movies);
    let score_description = score::describe(average_score).to_string();
    tracing::debug!(average_score, "computed average score");

    let summary = narrative::compose(movies, &genre_counts, average_score);
    tracing::debug!(summary_len = summary.len(), "composed summary");

    TasteProfile {
        genre_counts,
        average_score,
        score_description,
        summary,
    }
}
