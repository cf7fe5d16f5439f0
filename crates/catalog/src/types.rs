//! Core domain types for a user's favorite-films collection.
//!
//! This module defines the fundamental data structures used throughout the system.
//! - Type aliases for domain clarity (MovieId, GenreId)
//! - Movie mirrors the TMDB favorites payload, so callers can deserialize
//!   the catalog API response straight into it
//! - GenreCatalog is the caller-owned id -> display-name lookup

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up movie IDs with genre IDs

/// Unique identifier for a movie in the external catalog
pub type MovieId = u32;

/// Unique identifier for a genre in the external catalog
pub type GenreId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A single favorited film, as delivered by the external movie catalog.
///
/// Field names match the TMDB favorites payload (`genre_ids`, `vote_average`,
/// `overview`); unknown payload fields are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// Genre identifiers for this film, in catalog order.
    ///
    /// May contain duplicates; consumers count each distinct id once per movie.
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    /// Community rating in [0, 10].
    ///
    /// `None` when the catalog has no rating; a non-finite value is treated
    /// as malformed and excluded from averages.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Free-text plot overview; possibly empty or absent.
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Create a movie with no rating and no overview.
    pub fn new(id: MovieId, genre_ids: Vec<GenreId>) -> Self {
        Self {
            id,
            genre_ids,
            vote_average: None,
            overview: None,
        }
    }

    /// The overview text, if it contains anything beyond whitespace.
    pub fn overview_text(&self) -> Option<&str> {
        self.overview
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
    }
}

// =============================================================================
// GenreCatalog
// =============================================================================

/// Caller-owned lookup from genre id to display name.
///
/// The catalog is supplied by the presentation layer (sourced from the
/// external movie catalog API) and is never mutated by this core. Construction
/// is the one place malformed data fails loudly; lookups simply return `None`
/// for unknown ids.
#[derive(Debug, Clone, Default)]
pub struct GenreCatalog {
    names: HashMap<GenreId, String>,
}

impl GenreCatalog {
    /// Build a catalog from (id, display name) entries.
    ///
    /// # Errors
    /// * `CatalogError::DuplicateGenre` if an id appears twice
    /// * `CatalogError::BlankName` if a display name is empty or whitespace
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (GenreId, S)>,
        S: Into<String>,
    {
        let mut names = HashMap::new();
        for (id, name) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(CatalogError::BlankName { id });
            }
            if names.insert(id, name).is_some() {
                return Err(CatalogError::DuplicateGenre { id });
            }
        }
        Ok(Self { names })
    }

    /// Get the display name for a genre id.
    ///
    /// Returns `None` for ids the catalog does not know; callers drop those
    /// silently rather than erroring.
    pub fn name(&self, id: GenreId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of genres in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
