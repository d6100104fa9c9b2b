//! Raw video reference resolution.
//!
//! Lesson records carry whatever the course author pasted in: a full watch
//! URL, a share link, an embed URL, a bare platform ID, or garbage. This
//! module maps any of those to a canonical [`VideoId`] or reports that no
//! playable identifier exists. Failure is representable only as `None`;
//! nothing here panics on malformed input.

use lectern_model::VideoId;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Watch-URL shapes, in attempt order. Each pattern captures an 11-char
/// token terminated by a non-token character or end of input (the regex
/// crate has no lookahead, hence the trailing alternation).
static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const TOKEN: &str = "([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)";
    let patterns = [
        // Standard watch URL, `v` in any query position.
        format!(r"youtube\.com/watch\?(?:[^#&]*&)*v={TOKEN}"),
        // Shortened share-host form.
        format!(r"youtu\.be/{TOKEN}"),
        // Embedded player URL.
        format!(r"/embed/{TOKEN}"),
        // Legacy flash-era path form.
        format!(r"/v/{TOKEN}"),
    ];
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).expect("hard-coded pattern compiles")
        })
        .collect()
});

/// Resolve a raw lesson video reference to a canonical video identifier.
///
/// Attempts, in order: known watch-URL patterns, bare 11-character ID,
/// generic URL `v` query parameter. Returns `None` when nothing matches;
/// callers render a "no video" state rather than failing navigation.
pub fn resolve(raw: &str) -> Option<VideoId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for pattern in URL_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw)
            && let Some(token) = captures.get(1)
            && let Ok(id) = VideoId::new(token.as_str())
        {
            return Some(id);
        }
    }

    if VideoId::is_valid_token(raw) {
        // A bare ID pasted directly into the video field.
        return VideoId::new(raw).ok();
    }

    // Last resort: any parseable URL with a `v` query parameter.
    let parsed = Url::parse(raw).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .and_then(|(_, value)| VideoId::new(value.as_ref()).ok())
}
