//! # Catalog Crate
//!
//! Domain types for a user's favorite-films collection.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, GenreCatalog)
//! - **error**: Error type for catalog construction
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{GenreCatalog, Movie};
//!
//! let catalog = GenreCatalog::from_entries([
//!     (28, "Action"),
//!     (12, "Adventure"),
//!     (18, "Drama"),
//! ]).unwrap();
//!
//! let movie = Movie::new(603, vec![28, 878]);
//! assert_eq!(catalog.name(28), Some("Action"));
//! assert_eq!(movie.overview_text(), None);
//! ```

// Public modules
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{GenreCatalog, GenreId, Movie, MovieId};
