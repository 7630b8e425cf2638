// THEORY:
// `ColorCategory` is the vocabulary of the whole engine: the nine human-readable
// buckets every pixel ends up in. It is a plain sum type; display names and
// histogram slots are reached through exhaustive `match`es, never through
// integer casts.
//
// The order of `ColorCategory::ALL` is semantic. The aggregator walks categories
// in exactly this order and only replaces its leader on a strictly greater
// count, so among tied categories the one listed first wins. Reordering this
// list changes results.

use std::fmt;
use std::str::FromStr;

use crate::error::DominantColorError;

/// One of the nine color buckets a pixel can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Gray,
    Black,
    White,
}

impl ColorCategory {
    /// Every category, in tie-break priority order (first wins).
    pub const ALL: [ColorCategory; 9] = [
        ColorCategory::Red,
        ColorCategory::Yellow,
        ColorCategory::Green,
        ColorCategory::Cyan,
        ColorCategory::Blue,
        ColorCategory::Magenta,
        ColorCategory::Gray,
        ColorCategory::Black,
        ColorCategory::White,
    ];

    /// Reported when no pixel was counted at all (an empty region).
    pub const DEFAULT: ColorCategory = ColorCategory::White;

    /// The lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorCategory::Red => "red",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Green => "green",
            ColorCategory::Cyan => "cyan",
            ColorCategory::Blue => "blue",
            ColorCategory::Magenta => "magenta",
            ColorCategory::Gray => "gray",
            ColorCategory::Black => "black",
            ColorCategory::White => "white",
        }
    }

    /// True for the three buckets decided by lightness/saturation alone.
    pub fn is_achromatic(&self) -> bool {
        matches!(
            self,
            ColorCategory::Gray | ColorCategory::Black | ColorCategory::White
        )
    }
}

impl Default for ColorCategory {
    fn default() -> Self {
        ColorCategory::DEFAULT
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorCategory {
    type Err = DominantColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DominantColorError::UnknownCategory(s.to_string()))
    }
}
