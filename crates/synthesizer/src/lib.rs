//! Taste profile synthesis for a user's favorite films.
//!
//! This crate provides:
//! - Genre aggregation and ranking over a favorites collection
//! - Average-rating analysis with fixed descriptive tiers
//! - Keyword-based theme extraction from film overviews
//! - Taste-breadth (diversity) classification
//! - A template-driven personality summary composer
//!
//! ## Architecture
//! The synthesizer runs in stages over one immutable input collection:
//! 1. Genres are counted and ranked against a caller-supplied catalog
//! 2. The average rating is computed and classified independently
//! 3. The genre ranking feeds the diversity classification
//! 4. Themes are tallied from the overview texts
//! 5. The composer turns all of it into the summary paragraph
//!
//! Every stage is a pure function; nothing is cached or mutated between
//! calls, so concurrent synthesis needs no coordination.
//!
//! ## Example Usage
//! ```
//! use catalog::{GenreCatalog, Movie};
//! use synthesizer::synthesize;
//!
//! let catalog = GenreCatalog::from_entries([(28, "Action")]).unwrap();
//!
//! let mut movie = Movie::new(603, vec![28]);
//! movie.vote_average = Some(8.2);
//! movie.overview = Some("A hacker learns to fight the system.".to_string());
//!
//! let profile = synthesize(&[movie], &catalog);
//! assert_eq!(profile.genre_counts[0].name, "Action");
//! assert_eq!(profile.average_score, 8.2);
//! ```

pub mod diversity;
pub mod genres;
pub mod narrative;
pub mod profile;
pub mod score;
pub mod themes;

// Re-export main types
pub use diversity::{DiversityCategory, GenreInsights};
pub use genres::GenreCount;
pub use profile::{synthesize, TasteProfile};
pub use themes::{Theme, ThemeTally};
