//! Static JSON store: reads the published documents from the data directory.
//!
//! One read per call, no caching and no retries. Callers decide how to degrade.

use crate::models::{LeagueStandings, MatchCollection, PlayerRoster};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub const MATCHES_FILE: &str = "matches.json";
pub const ROSTER_FILE: &str = "players.json";
pub const STANDINGS_FILE: &str = "league_data.json";

/// Errors that can occur while fetching a document.
#[derive(Debug)]
pub enum DataError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            DataError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io { source, .. } => Some(source),
            DataError::Parse { source, .. } => Some(source),
        }
    }
}

/// Directory holding `matches.json`, `players.json` and `league_data.json`.
#[derive(Clone, Debug)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn load_matches(&self) -> Result<MatchCollection, DataError> {
        self.load(MATCHES_FILE).await
    }

    pub async fn load_roster(&self) -> Result<PlayerRoster, DataError> {
        self.load(ROSTER_FILE).await
    }

    pub async fn load_standings(&self) -> Result<LeagueStandings, DataError> {
        self.load(STANDINGS_FILE).await
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, DataError> {
        let path = self.dir.join(file);
        let bytes = tokio::fs::read(&path).await.map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        let document = serde_json::from_slice(&bytes).map_err(|source| DataError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded {}", path.display());
        Ok(document)
    }
}
