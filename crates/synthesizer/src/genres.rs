//! Genre aggregation across a favorites collection.
//!
//! Counts how often each recognized genre appears across the user's
//! favorite films and ranks genres by frequency. The ranking feeds both
//! the diversity classification and the narrative composer.

use catalog::{GenreCatalog, GenreId, Movie};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Occurrence count for one recognized genre.
///
/// Counts sum to the number of (movie, distinct genre) pairs in the input:
/// a film carrying three genres contributes to three counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub id: GenreId,
    pub name: String,
    pub count: u32,
}

/// Count genre occurrences across `movies` and rank them.
///
/// ## Algorithm
/// 1. For each movie, count each **distinct** genre id once (a film listing
///    the same id twice does not double-count)
/// 2. Drop ids the catalog cannot resolve to a display name
/// 3. Sort by count descending; ties keep the order in which genres were
///    first encountered across the input (stable sort over insertion order)
///
/// Empty input, or input with no recognized genres, yields an empty Vec.
pub fn aggregate(movies: &[Movie], catalog: &GenreCatalog) -> Vec<GenreCount> {
    // Tally in first-encounter order so the later stable sort breaks
    // count ties deterministically.
    let mut counts: Vec<GenreCount> = Vec::new();
    let mut slots: HashMap<GenreId, usize> = HashMap::new();

    for movie in movies {
        let mut seen: HashSet<GenreId> = HashSet::new();
        for &genre_id in &movie.genre_ids {
            if !seen.insert(genre_id) {
                continue;
            }
            let Some(name) = catalog.name(genre_id) else {
                continue;
            };
            match slots.get(&genre_id) {
                Some(&slot) => counts[slot].count += 1,
                None => {
                    slots.insert(genre_id, counts.len());
                    counts.push(GenreCount {
                        id: genre_id,
                        name: name.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
