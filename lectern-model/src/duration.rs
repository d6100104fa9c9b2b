#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Duration value as stored by the catalog API, with ambiguous units.
///
/// Catalog data mixes minutes and seconds in the same field. The carried
/// disambiguation heuristic: values below 60 are treated as minutes, values
/// of 60 and above as seconds. This mis-classifies genuine minute counts of
/// 60 or more, a known data-quality gap upstream; an explicit unit field in
/// the API would remove the ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct RawDuration(u32);

impl RawDuration {
    pub const fn new(raw: u32) -> Self {
        RawDuration(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Canonical second count after unit disambiguation.
    pub const fn as_seconds(&self) -> u32 {
        if self.0 < 60 { self.0 * 60 } else { self.0 }
    }

    /// Zero-padded `MM:SS` display string.
    pub fn display(&self) -> String {
        let seconds = self.as_seconds();
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

impl std::fmt::Display for RawDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
