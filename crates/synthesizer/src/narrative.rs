//! Template-driven composition of the personality summary.
//!
//! Builds the final paragraph from fixed sentence templates, emitted in a
//! fixed order (opening, genre, theme, rating, closing) and joined with
//! single spaces. All variation comes from table lookups and the
//! deterministic rankings computed upstream; nothing here is free-form.

use crate::diversity::{self, DiversityCategory};
use crate::genres::GenreCount;
use crate::themes::{self, Theme};
use catalog::Movie;

/// Guard sentence for an empty collection.
const NO_FILMS: &str = "No favorite films found to analyze.";

/// Guard sentence for a collection without any overview text.
const NO_OVERVIEWS: &str =
    "Your favorite films do not have overviews available for analysis.";

/// Per-genre description sentences, keyed by TMDB display name.
///
/// Names an English-locale catalog produces; a catalog in another locale
/// falls through to the generic sentence naming the genre.
const GENRE_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Action",
        "You crave adrenaline-pumping excitement and high-stakes narratives.",
    ),
    (
        "Adventure",
        "You love epic journeys and stories of exploration and discovery.",
    ),
    (
        "Animation",
        "You appreciate the artistry and creativity of animated storytelling.",
    ),
    (
        "Comedy",
        "You value humor and lighthearted entertainment that brings joy.",
    ),
    (
        "Crime",
        "You enjoy complex narratives centered around crime and justice.",
    ),
    (
        "Documentary",
        "You seek real-world stories and factual content that educates.",
    ),
    (
        "Drama",
        "You're drawn to emotionally rich narratives that explore human experiences.",
    ),
    (
        "Family",
        "You appreciate wholesome entertainment suitable for all ages.",
    ),
    (
        "Fantasy",
        "You love escaping into magical worlds and extraordinary adventures.",
    ),
    (
        "History",
        "You're fascinated by stories rooted in real historical events.",
    ),
    (
        "Horror",
        "You enjoy the thrill and suspense of frightening tales.",
    ),
    (
        "Music",
        "You're passionate about films that celebrate music and musicians.",
    ),
    (
        "Mystery",
        "You love puzzling stories with secrets waiting to be uncovered.",
    ),
    (
        "Romance",
        "You're a romantic at heart, drawn to stories of love and connection.",
    ),
    (
        "Science Fiction",
        "You're fascinated by futuristic possibilities and scientific exploration.",
    ),
    (
        "TV Movie",
        "You appreciate accessible storytelling made for television.",
    ),
    (
        "Thriller",
        "You crave suspenseful narratives that keep you on edge.",
    ),
    (
        "War",
        "You're interested in stories of conflict and its consequences.",
    ),
    (
        "Western",
        "You enjoy classic tales of the American frontier.",
    ),
];

/// Per-theme description sentences. Themes missing from this table are
/// silently skipped by the composer.
const THEME_DESCRIPTIONS: &[(Theme, &str)] = &[
    (
        Theme::Adventure,
        "Your films often feature journeys of discovery and exploration.",
    ),
    (
        Theme::Romance,
        "You're drawn to stories of love, connection, and emotional bonds.",
    ),
    (
        Theme::Action,
        "You enjoy high-energy narratives with thrilling sequences.",
    ),
    (
        Theme::Mystery,
        "You love stories that challenge you to solve puzzles and uncover secrets.",
    ),
    (
        Theme::Drama,
        "You appreciate emotionally complex narratives that explore human nature.",
    ),
    (
        Theme::Comedy,
        "You value humor and entertainment that brings laughter and joy.",
    ),
    (
        Theme::Horror,
        "You enjoy the adrenaline rush of suspenseful and frightening tales.",
    ),
    (
        Theme::SciFi,
        "You're fascinated by futuristic concepts and technological possibilities.",
    ),
    (
        Theme::Fantasy,
        "You love escaping into worlds of magic and wonder.",
    ),
    (
        Theme::Thriller,
        "You crave tension and suspense that keeps you engaged.",
    ),
];

fn genre_description(name: &str) -> Option<&'static str> {
    GENRE_DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, sentence)| sentence)
}

fn theme_description(theme: Theme) -> Option<&'static str> {
    THEME_DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == theme)
        .map(|&(_, sentence)| sentence)
}

/// Generate the personality summary for a favorites collection.
///
/// `genre_counts` must already be ranked (the output of
/// [`crate::genres::aggregate`]); `average_score` is the output of
/// [`crate::score::average_score`].
///
/// ## Sentence order
/// 1. Empty-collection guard
/// 2. Missing-overviews guard
/// 3. Opening, chosen by diversity category
/// 4. Primary-genre description (table lookup, generic fallback)
/// 5. Top-theme description (table lookup, skipped on a miss)
/// 6. Rating insight, by descending score thresholds
/// 7. Closing with the exact collection size
pub fn compose(movies: &[Movie], genre_counts: &[GenreCount], average_score: f64) -> String {
    if movies.is_empty() {
        return NO_FILMS.to_string();
    }

    let overviews: Vec<&str> = movies.iter().filter_map(Movie::overview_text).collect();
    if overviews.is_empty() {
        return NO_OVERVIEWS.to_string();
    }

    let tally = themes::extract(&overviews);
    let dominant_themes = themes::dominant(&tally, 3);
    let insights = diversity::classify(genre_counts);
    tracing::debug!(
        top_theme = dominant_themes.first().map(|t| t.label()),
        category = ?insights.category,
        "derived narrative inputs"
    );

    let mut sentences: Vec<String> = Vec::new();

    // Opening based on diversity
    match insights.category {
        DiversityCategory::Eclectic => sentences.push(format!(
            "Your film taste is wonderfully eclectic, spanning {} different genres and showing a genuine appreciation for cinematic diversity.",
            genre_counts.len()
        )),
        DiversityCategory::Varied => sentences.push(format!(
            "You have a varied taste in cinema, exploring {} different genres while maintaining clear preferences.",
            genre_counts.len()
        )),
        DiversityCategory::Focused => {
            let top_two = if insights.top_genres.len() >= 2 {
                insights.top_genres[..2].join(" and ")
            } else {
                insights
                    .primary
                    .clone()
                    .unwrap_or_else(|| "your favorite genres".to_string())
            };
            sentences.push(format!(
                "You have a focused and passionate interest in {}, with {} dominating your collection.",
                insights.primary.as_deref().unwrap_or("cinema"),
                top_two
            ));
        }
        DiversityCategory::Unknown => sentences.push(
            "Your film collection shows a unique and personal approach to cinema.".to_string(),
        ),
    }

    // Genre-specific insight
    if let Some(primary) = insights.primary.as_deref() {
        let sentence = match genre_description(primary) {
            Some(description) => description.to_string(),
            None => format!("You have a strong preference for {primary} films."),
        };
        sentences.push(sentence);
    }

    // Theme insight for the single highest-ranked theme
    if let Some(&top_theme) = dominant_themes.first() {
        if let Some(description) = theme_description(top_theme) {
            sentences.push(description.to_string());
        }
    }

    // Rating-based insight
    if average_score >= 8.0 {
        sentences.push(
            "With an average rating above 8.0, you clearly have exceptional taste and gravitate toward critically acclaimed masterpieces.".to_string(),
        );
    } else if average_score >= 7.0 {
        sentences.push(
            "Your preference for well-regarded films (averaging above 7.0) shows you value quality storytelling and cinematic excellence.".to_string(),
        );
    } else if average_score >= 6.0 {
        sentences.push(
            "You appreciate a wide range of films, from mainstream hits to more niche selections, showing an open-minded approach to cinema.".to_string(),
        );
    } else {
        sentences.push(
            "You have a unique taste that embraces underrated gems and cult classics, showing you value films beyond mainstream popularity.".to_string(),
        );
    }

    // Closing statement
    if movies.len() >= 10 {
        sentences.push(format!(
            "With {} favorite films, your collection reveals a well-developed and thoughtful approach to cinema.",
            movies.len()
        ));
    } else {
        sentences.push(format!(
            "Your growing collection of {} favorite film{} is just the beginning of your cinematic journey.",
            movies.len(),
            if movies.len() != 1 { "s" } else { "" }
        ));
    }

    sentences.join(" ")
}
