//! Integration tests for the full synthesis flow.
//!
//! These tests verify that aggregation, scoring, theme extraction, and
//! narrative composition work together over realistic collections.

use catalog::{GenreCatalog, Movie};
use synthesizer::{synthesize, DiversityCategory, Theme, diversity, genres, score, themes};
use tracing_subscriber::EnvFilter;

/// Route stage logs to the test writer; RUST_LOG=debug shows them on failure.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tmdb_catalog() -> GenreCatalog {
    GenreCatalog::from_entries([
        (28, "Action"),
        (12, "Adventure"),
        (16, "Animation"),
        (35, "Comedy"),
        (80, "Crime"),
        (18, "Drama"),
        (14, "Fantasy"),
        (27, "Horror"),
        (9648, "Mystery"),
        (10749, "Romance"),
        (878, "Science Fiction"),
        (53, "Thriller"),
    ])
    .unwrap()
}

fn favorite(id: u32, genre_ids: Vec<u32>, rating: f64, overview: &str) -> Movie {
    Movie {
        id,
        genre_ids,
        vote_average: Some(rating),
        overview: Some(overview.to_string()),
    }
}

fn create_test_collection() -> Vec<Movie> {
    vec![
        favorite(
            603,
            vec![28, 878],
            8.2,
            "A hacker discovers the truth and must fight to rescue humanity from the machines.",
        ),
        favorite(
            11,
            vec![12, 28, 878],
            8.2,
            "An epic journey through space to battle an evil empire.",
        ),
        favorite(
            550,
            vec![18],
            8.4,
            "An insomniac's struggle with modern life spirals into conflict.",
        ),
        favorite(
            680,
            vec![80, 53],
            8.5,
            "The lives of two hitmen, a boxer and a pair of diner bandits intertwine.",
        ),
        favorite(
            13,
            vec![35, 18, 10749],
            8.5,
            "A simple man's journey through decades of American life, love and family.",
        ),
    ]
}

#[test]
fn test_full_synthesis_over_realistic_collection() {
    init_logging();
    let catalog = tmdb_catalog();
    let movies = create_test_collection();

    let profile = synthesize(&movies, &catalog);

    // Genre invariant: counts sum to the (movie, distinct genre) pairs
    let total: u32 = profile.genre_counts.iter().map(|g| g.count).sum();
    assert_eq!(total, 11);

    // Action, Science Fiction and Drama lead with 2 apiece, in
    // first-encounter order
    assert_eq!(profile.genre_counts[0].name, "Action");
    assert_eq!(profile.genre_counts[0].count, 2);
    assert_eq!(profile.genre_counts[1].name, "Science Fiction");
    assert_eq!(profile.genre_counts[2].name, "Drama");

    // (8.2 + 8.2 + 8.4 + 8.5 + 8.5) / 5 = 8.36
    assert_eq!(profile.average_score, 8.36);
    assert_eq!(
        profile.score_description,
        "You love popular and award-winning cinema"
    );

    // 8 distinct genres over 11 pairs -> eclectic opening, Action genre
    // sentence, top-rating sentence, small-collection closing
    assert!(profile.summary.starts_with(
        "Your film taste is wonderfully eclectic, spanning 8 different genres"
    ));
    assert!(profile
        .summary
        .contains("You crave adrenaline-pumping excitement and high-stakes narratives."));
    assert!(profile.summary.contains("average rating above 8.0"));
    assert!(profile.summary.ends_with(
        "Your growing collection of 5 favorite films is just the beginning of your cinematic journey."
    ));
}

#[test]
fn test_stage_outputs_agree_with_entry_point() {
    let catalog = tmdb_catalog();
    let movies = create_test_collection();

    let genre_counts = genres::aggregate(&movies, &catalog);
    let average = score::average_score(&movies);
    let profile = synthesize(&movies, &catalog);

    assert_eq!(profile.genre_counts, genre_counts);
    assert_eq!(profile.average_score, average);
    assert_eq!(profile.score_description, score::describe(average));

    let insights = diversity::classify(&genre_counts);
    assert_eq!(insights.category, DiversityCategory::Eclectic);
    assert_eq!(insights.primary.as_deref(), Some("Action"));
}

#[test]
fn test_theme_extraction_feeds_the_summary() {
    let catalog = tmdb_catalog();
    let movies = create_test_collection();

    let overviews: Vec<&str> = movies.iter().filter_map(Movie::overview_text).collect();
    let tally = themes::extract(&overviews);
    let dominant = themes::dominant(&tally, 3);

    // drama: struggle + life x2 + conflict + family = 5
    // action: fight + battle + conflict + rescue = 4
    // adventure: journey x2 + discover = 3
    assert_eq!(dominant, vec![Theme::Drama, Theme::Action, Theme::Adventure]);

    let profile = synthesize(&movies, &catalog);
    assert!(profile
        .summary
        .contains("You appreciate emotionally complex narratives that explore human nature."));
}

#[test]
fn test_single_movie_without_overview_fields() {
    let catalog = tmdb_catalog();
    let mut movie = Movie::new(1, vec![28]);
    movie.vote_average = Some(9.0);
    movie.overview = Some("A lone hero fights for what is right.".to_string());

    let profile = synthesize(&[movie], &catalog);

    // Focused would need >= 2 genres; one genre over one pair is eclectic
    assert!(profile.summary.contains("spanning 1 different genres"));
    assert!(profile.summary.ends_with("favorite film is just the beginning of your cinematic journey."));
}

#[test]
fn test_collection_without_any_overview() {
    init_logging();
    let catalog = tmdb_catalog();
    let mut movie = Movie::new(1, vec![28]);
    movie.vote_average = Some(9.0);

    let profile = synthesize(&[movie], &catalog);

    // Guard short-circuits the summary but the other outputs still compute
    assert_eq!(
        profile.summary,
        "Your favorite films do not have overviews available for analysis."
    );
    assert_eq!(profile.average_score, 9.0);
    assert_eq!(profile.genre_counts.len(), 1);
}

#[test]
fn test_synthesis_is_deterministic() {
    init_logging();
    let catalog = tmdb_catalog();
    let movies = create_test_collection();

    let first = synthesize(&movies, &catalog);
    let second = synthesize(&movies, &catalog);
    assert_eq!(first, second);
}

#[test]
fn test_unknown_genre_ids_are_dropped_end_to_end() {
    let catalog = tmdb_catalog();
    let movies = vec![favorite(
        1,
        vec![28, 99999],
        7.0,
        "A hero fights a battle against danger.",
    )];

    let profile = synthesize(&movies, &catalog);
    assert_eq!(profile.genre_counts.len(), 1);
    assert_eq!(profile.genre_counts[0].name, "Action");
}
