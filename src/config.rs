//! Search configuration.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::search::{AlphaBeta, Exhaustive, GameSearch};

/// Which recursive engine the move selector drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SearchKind {
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Minimax over the full tree, no pruning.
    Exhaustive,
}

impl SearchKind {
    /// Creates a boxed engine from the kind
    pub fn into_boxed_search(self) -> Box<dyn GameSearch> {
        match self {
            SearchKind::AlphaBeta => Box::new(AlphaBeta),
            SearchKind::Exhaustive => Box::new(Exhaustive),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchKind::AlphaBeta => "alpha-beta",
            SearchKind::Exhaustive => "exhaustive",
        };
        f.write_str(label)
    }
}

impl FromStr for SearchKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha-beta" | "alpha_beta" | "alphabeta" => Ok(SearchKind::AlphaBeta),
            "exhaustive" | "minimax" => Ok(SearchKind::Exhaustive),
            _ => Err(crate::Error::ParseSearchKind {
                input: s.to_string(),
                expected: "alpha-beta, exhaustive".to_string(),
            }),
        }
    }
}

/// Configuration for a [`MoveSelector`](crate::search::MoveSelector).
///
/// # Examples
///
/// ```
/// use noughts::config::{SearchConfig, SearchKind};
///
/// let config = SearchConfig::new()
///     .with_search(SearchKind::Exhaustive)
///     .with_parallel(true);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Engine used for every root action
    pub search: SearchKind,
    /// Evaluate root actions on the rayon thread pool
    pub parallel: bool,
}

impl SearchConfig {
    /// Alpha-beta search on the calling thread
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search engine.
    pub fn with_search(mut self, search: SearchKind) -> Self {
        self.search = search;
        self
    }

    /// Enable or disable parallel root evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        debug!(path = ?path, search = %config.search, parallel = config.parallel, "loaded search config");
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.search, SearchKind::AlphaBeta);
        assert!(!config.parallel);
    }

    #[test]
    fn test_search_kind_parsing() {
        assert_eq!("alpha-beta".parse::<SearchKind>().unwrap(), SearchKind::AlphaBeta);
        assert_eq!(" AlphaBeta ".parse::<SearchKind>().unwrap(), SearchKind::AlphaBeta);
        assert_eq!("minimax".parse::<SearchKind>().unwrap(), SearchKind::Exhaustive);

        let err = "mcts".parse::<SearchKind>().unwrap_err();
        assert!(err.to_string().contains("alpha-beta, exhaustive"));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for kind in [SearchKind::AlphaBeta, SearchKind::Exhaustive] {
            assert_eq!(kind.to_string().parse::<SearchKind>().unwrap(), kind);
            assert_eq!(kind.into_boxed_search().name(), kind.to_string());
        }
    }

    #[test]
    fn test_json_partial_config_uses_defaults() {
        let config = SearchConfig::from_json_str(r#"{ "parallel": true }"#).unwrap();
        assert_eq!(config.search, SearchKind::AlphaBeta);
        assert!(config.parallel);

        let config = SearchConfig::from_json_str(r#"{ "search": "exhaustive" }"#).unwrap();
        assert_eq!(config.search, SearchKind::Exhaustive);
        assert!(!config.parallel);
    }

    #[test]
    fn test_json_rejects_unknown_kind() {
        let err = SearchConfig::from_json_str(r#"{ "search": "mcts" }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }

    #[test]
    fn test_from_path() {
        let config = SearchConfig::new().with_search(SearchKind::Exhaustive);
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_json().unwrap().as_bytes()).unwrap();

        let loaded = SearchConfig::from_path(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Io { .. }));
        assert!(err.to_string().contains("read config file"));
    }
}
