//! Error types for catalog construction.
//!
//! The synthesizer core never fails; the only fallible operation in this
//! workspace is building a `GenreCatalog` from caller-supplied data, which
//! should reject malformed input loudly at that boundary.

use thiserror::Error;

/// Errors that can occur while building a `GenreCatalog`
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The same genre id appeared more than once in the entries
    #[error("Duplicate genre id {id} in catalog entries")]
    DuplicateGenre { id: u32 },

    /// A genre had an empty or whitespace-only display name
    #[error("Blank display name for genre id {id}")]
    BlankName { id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
