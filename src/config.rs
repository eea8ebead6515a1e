//! Client configuration.
//!
//! All knobs for resolution behavior live here as plain serde-backed data,
//! so a caller can build the struct directly, load it from a TOML file, or
//! ship it inside a larger application config. Every field has a default;
//! a config file only needs the keys it wants to override.
//!
//! The access token can also come from the `GENIUS_ACCESS_TOKEN`
//! environment variable, checked at client construction when the config
//! carries no token.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Environment variable consulted when no token is configured.
pub const TOKEN_ENV_VAR: &str = "GENIUS_ACCESS_TOKEN";

/// Titles matching any of these patterns are not treated as songs during
/// search disambiguation (track listings, scans of liner notes, interview
/// transcriptions and similar non-lyric pages share the song index).
///
/// Patterns are combined with any user-supplied terms into a single
/// case-insensitive alternation; see [`GeniusConfig::effective_excluded_terms`].
pub const DEFAULT_EXCLUDED_TERMS: [&str; 9] = [
    r"track\s?list",
    r"album art(work)?",
    r"liner notes",
    r"booklet",
    r"credits",
    r"interview",
    r"skit",
    r"instrumental",
    r"setlist",
];

/// Body format requested from the structured API (`text_format` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Plain text (default)
    #[default]
    Plain,
    /// Rendered HTML
    Html,
    /// Markdown
    Markdown,
    /// Structured DOM nodes
    Dom,
}

impl TextFormat {
    /// Parameter value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Dom => "dom",
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeniusConfig {
    /// API access token; falls back to `GENIUS_ACCESS_TOKEN` when unset
    pub access_token: Option<String>,

    /// Body format for structured API responses
    pub response_format: TextFormat,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Fixed delay between retry attempts in milliseconds
    pub retry_delay_ms: u64,

    /// Retry bound for 5xx/network failures (0 = single attempt)
    pub retries: u32,

    /// Emit progress logs during resolution
    pub verbose: bool,

    /// Strip `[Verse]`-style section annotations from extracted lyrics
    pub remove_section_headers: bool,

    /// Reject search results that cannot carry lyrics (incomplete,
    /// instrumental, or matching an exclusion pattern)
    pub skip_non_songs: bool,

    /// Additional exclusion patterns (regex fragments)
    pub excluded_terms: Vec<String>,

    /// Use `excluded_terms` instead of the built-in defaults rather than
    /// in addition to them
    pub replace_default_terms: bool,
}

impl Default for GeniusConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            response_format: TextFormat::Plain,
            timeout_ms: 100_000,
            retry_delay_ms: 200,
            retries: 0,
            verbose: true,
            remove_section_headers: false,
            skip_non_songs: true,
            excluded_terms: Vec::new(),
            replace_default_terms: false,
        }
    }
}

impl GeniusConfig {
    /// Config with the given access token, defaults for everything else.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// Unlike an application config this does not fall back to defaults on
    /// a broken file: the caller asked for this specific path, so an
    /// unreadable or unparsable file is an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// The token to authenticate with: configured value first, then the
    /// `GENIUS_ACCESS_TOKEN` environment variable.
    pub fn resolve_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Exclusion patterns in effect: user terms replace or extend the
    /// built-in defaults depending on `replace_default_terms`.
    pub fn effective_excluded_terms(&self) -> Vec<String> {
        if self.replace_default_terms {
            self.excluded_terms.clone()
        } else {
            DEFAULT_EXCLUDED_TERMS
                .iter()
                .map(|t| t.to_string())
                .chain(self.excluded_terms.iter().cloned())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeniusConfig::default();
        assert!(config.access_token.is_none());
        assert_eq!(config.response_format, TextFormat::Plain);
        assert_eq!(config.retries, 0);
        assert!(config.skip_non_songs);
        assert!(!config.remove_section_headers);
        assert!(config.excluded_terms.is_empty());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: GeniusConfig = toml::from_str(
            r#"
            access_token = "tok-123"
            retries = 3
            response_format = "html"
            "#,
        )
        .unwrap();

        assert_eq!(config.access_token.as_deref(), Some("tok-123"));
        assert_eq!(config.retries, 3);
        assert_eq!(config.response_format, TextFormat::Html);
        // Untouched keys keep their defaults
        assert!(config.skip_non_songs);
        assert_eq!(config.retry_delay_ms, 200);
    }

    #[test]
    fn test_user_terms_extend_defaults() {
        let config = GeniusConfig {
            excluded_terms: vec!["demo".to_string()],
            ..Default::default()
        };

        let terms = config.effective_excluded_terms();
        assert_eq!(terms.len(), DEFAULT_EXCLUDED_TERMS.len() + 1);
        assert!(terms.iter().any(|t| t == "demo"));
        assert!(terms.iter().any(|t| t == r"track\s?list"));
    }

    #[test]
    fn test_user_terms_replace_defaults() {
        let config = GeniusConfig {
            excluded_terms: vec!["demo".to_string()],
            replace_default_terms: true,
            ..Default::default()
        };

        assert_eq!(config.effective_excluded_terms(), vec!["demo".to_string()]);
    }

    #[test]
    fn test_text_format_wire_values() {
        assert_eq!(TextFormat::Plain.as_str(), "plain");
        assert_eq!(TextFormat::Dom.as_str(), "dom");
    }
}
