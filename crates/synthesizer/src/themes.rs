//! Keyword-based theme extraction from film overviews.
//!
//! Ten fixed themes, each backed by a fixed lowercase keyword list. A
//! theme's tally is the number of (keyword, overview) pairs where the
//! keyword occurs as a case-insensitive substring of the overview, so one
//! overview can contribute several hits to one theme and hits to several
//! themes at once.

use serde::{Deserialize, Serialize};

/// The closed set of themes the extractor recognizes.
///
/// Declaration order is the tie-break order for [`dominant`]: when two
/// themes have equal counts the one declared first ranks higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Adventure,
    Romance,
    Action,
    Mystery,
    Drama,
    Comedy,
    Horror,
    SciFi,
    Fantasy,
    Thriller,
}

impl Theme {
    /// All themes in declaration order.
    pub const ALL: [Theme; 10] = [
        Theme::Adventure,
        Theme::Romance,
        Theme::Action,
        Theme::Mystery,
        Theme::Drama,
        Theme::Comedy,
        Theme::Horror,
        Theme::SciFi,
        Theme::Fantasy,
        Theme::Thriller,
    ];

    /// Stable lowercase label used in log output.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Adventure => "adventure",
            Theme::Romance => "romance",
            Theme::Action => "action",
            Theme::Mystery => "mystery",
            Theme::Drama => "drama",
            Theme::Comedy => "comedy",
            Theme::Horror => "horror",
            Theme::SciFi => "sciFi",
            Theme::Fantasy => "fantasy",
            Theme::Thriller => "thriller",
        }
    }

    /// The fixed keyword list backing this theme.
    ///
    /// Keywords are lowercase and are matched as literal substrings.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Theme::Adventure => &[
                "journey", "quest", "adventure", "expedition", "travel", "explore", "discover",
            ],
            Theme::Romance => &[
                "love", "romance", "relationship", "heart", "passion", "affection", "couple",
            ],
            Theme::Action => &[
                "fight", "battle", "action", "combat", "war", "conflict", "hero", "rescue",
            ],
            Theme::Mystery => &[
                "mystery", "secret", "solve", "investigate", "clue", "puzzle", "hidden",
            ],
            Theme::Drama => &[
                "drama", "emotional", "struggle", "conflict", "tragedy", "life", "family",
            ],
            Theme::Comedy => &[
                "comedy", "funny", "humor", "laugh", "hilarious", "comic", "joke",
            ],
            Theme::Horror => &[
                "horror", "scary", "frightening", "terror", "fear", "haunted", "monster",
            ],
            Theme::SciFi => &[
                "future", "space", "technology", "scientific", "alien", "robot", "cyber",
            ],
            Theme::Fantasy => &[
                "magic", "fantasy", "magical", "wizard", "dragon", "mythical", "enchanted",
            ],
            Theme::Thriller => &[
                "thriller", "suspense", "tension", "danger", "chase", "escape", "threat",
            ],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Hit counts per theme, in theme declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTally {
    counts: [u32; Theme::ALL.len()],
}

impl ThemeTally {
    /// Hit count for one theme.
    pub fn count(&self, theme: Theme) -> u32 {
        self.counts[theme.index()]
    }

    /// (theme, count) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Theme, u32)> + '_ {
        Theme::ALL.iter().map(|&t| (t, self.counts[t.index()]))
    }
}

/// Tally theme keyword hits across `overviews`.
///
/// Overviews that are empty or whitespace-only are excluded before
/// tallying; they contribute to no theme.
pub fn extract(overviews: &[&str]) -> ThemeTally {
    let lowered: Vec<String> = overviews
        .iter()
        .filter(|o| !o.trim().is_empty())
        .map(|o| o.to_lowercase())
        .collect();

    let mut tally = ThemeTally::default();
    for theme in Theme::ALL {
        for keyword in theme.keywords() {
            for overview in &lowered {
                if overview.contains(keyword) {
                    tally.counts[theme.index()] += 1;
                }
            }
        }
    }
    tally
}

/// The top `k` themes with a nonzero tally, count descending.
///
/// Ties keep theme declaration order (stable sort over the fixed table),
/// so the ranking is deterministic regardless of input order. Fewer than
/// `k` nonzero themes yields a shorter, possibly empty, Vec.
pub fn dominant(tally: &ThemeTally, k: usize) -> Vec<Theme> {
    let mut ranked: Vec<(Theme, u32)> = tally.iter().filter(|&(_, count)| count > 0).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(k).map(|(theme, _)| theme).collect()
}
