//! Taste-breadth classification from the ranked genre distribution.
//!
//! Compares how many distinct genres a collection spans against how many
//! (movie, genre) pairs it contains, and buckets the ratio into a coarse
//! diversity category.

use crate::genres::GenreCount;
use serde::{Deserialize, Serialize};

/// How spread a user's genre preferences are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiversityCategory {
    /// Distinct genres make up more than half the total count
    Eclectic,
    /// Ratio above 0.3
    Varied,
    /// Ratio at or below 0.3
    Focused,
    /// Empty genre distribution
    Unknown,
}

/// Insights derived from the ranked genre distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreInsights {
    pub category: DiversityCategory,
    /// Name of the most frequent genre, if any
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    /// Names of the top 3 genres in rank order (length 0-3)
    pub top_genres: Vec<String>,
}

/// Classify taste breadth from an already-ranked genre distribution.
///
/// ## Algorithm
/// - `diversity_score = unique / max(total, 1)` where `unique` is the number
///   of distinct genre entries and `total` the sum of their counts
/// - score > 0.5 is eclectic, > 0.3 varied, otherwise focused
/// - an empty distribution classifies as unknown
pub fn classify(genre_counts: &[GenreCount]) -> GenreInsights {
    let unique = genre_counts.len();
    if unique == 0 {
        return GenreInsights {
            category: DiversityCategory::Unknown,
            primary: None,
            secondary: None,
            tertiary: None,
            top_genres: Vec::new(),
        };
    }

    let total: u32 = genre_counts.iter().map(|g| g.count).sum();
    let diversity_score = unique as f64 / total.max(1) as f64;

    let category = if diversity_score > 0.5 {
        DiversityCategory::Eclectic
    } else if diversity_score > 0.3 {
        DiversityCategory::Varied
    } else {
        DiversityCategory::Focused
    };

    let top_genres: Vec<String> = genre_counts
        .iter()
        .take(3)
        .map(|g| g.name.clone())
        .collect();

    GenreInsights {
        category,
        primary: top_genres.first().cloned(),
        secondary: top_genres.get(1).cloned(),
        tertiary: top_genres.get(2).cloned(),
        top_genres,
    }
}
