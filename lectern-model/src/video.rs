use crate::error::ModelError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of a canonical platform video token.
pub const VIDEO_ID_LEN: usize = 11;

/// Canonical video identifier on the external platform.
///
/// An 11-character token drawn from `[A-Za-z0-9_-]`, extracted from raw
/// lesson video references by the resolver in `lectern-core`. Construction
/// validates the token shape; a `VideoId` that exists is always playable as
/// far as this client can tell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(token: impl Into<String>) -> Result<Self, ModelError> {
        let token = token.into();
        if !Self::is_valid_token(&token) {
            return Err(ModelError::InvalidVideoId(token));
        }
        Ok(VideoId(token))
    }

    /// Whether a string has the exact shape of a platform video token.
    pub fn is_valid_token(token: &str) -> bool {
        token.len() == VIDEO_ID_LEN
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
