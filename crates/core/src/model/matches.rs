use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinkError {
    #[error("route root cannot carry a path: {0}")]
    InvalidRoot(String),
}

/// Scratch origin used only to percent-encode route segments.
const ROUTE_ROOT: &str = "http://localhost/";

/// One scored entity returned by the scoring endpoint.
///
/// Field names follow the wire format: `{"name", "match", "reason"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    #[serde(rename = "match")]
    pub score: u32,
    pub reason: String,
}

impl MatchResult {
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}%", self.score)
    }

    /// In-app route of the entity's portfolio page: `/portfolio/<name>`.
    ///
    /// The name is pushed as a single path segment, so characters such as
    /// spaces and `/` are percent-encoded. The route never depends on where
    /// the studio site is hosted.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::InvalidRoot` if the scratch origin cannot be used
    /// to build a path.
    pub fn portfolio_path(&self) -> Result<String, LinkError> {
        let invalid = || LinkError::InvalidRoot(ROUTE_ROOT.to_string());
        let mut url = Url::parse(ROUTE_ROOT).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push("portfolio")
            .push(&self.name);
        Ok(url.path().to_string())
    }
}
