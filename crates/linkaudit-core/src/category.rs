//! Media library categories and their layout conventions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A media library section scanned with its own grouping rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// `Show/Season/File` layout.
    Tv,
    /// `Movie/File` layout.
    Movies,
}

impl MediaCategory {
    /// Default grouping segment: third from last for TV, second from last for movies.
    pub fn group_index(self) -> isize {
        match self {
            MediaCategory::Tv => -3,
            MediaCategory::Movies => -2,
        }
    }

    /// Default key for files too shallow to carry a title.
    pub fn fallback_label(self) -> &'static str {
        match self {
            MediaCategory::Tv => "UNKNOWN_SHOW",
            MediaCategory::Movies => "UNKNOWN_MOVIE",
        }
    }

    /// Stem of the report file name, before the timestamp.
    pub fn report_stem(self) -> &'static str {
        match self {
            MediaCategory::Tv => "non_hardlinked_tv_episodes",
            MediaCategory::Movies => "non_hardlinked_movies",
        }
    }

    /// Plural noun for groups of this category, used in summaries.
    pub fn group_noun(self) -> &'static str {
        match self {
            MediaCategory::Tv => "Shows",
            MediaCategory::Movies => "Movies",
        }
    }
}
