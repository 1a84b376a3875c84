use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in puzzle file {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid TOML in puzzle file {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything a session is built from. Field names match the page-level
/// puzzle config (`wordBreaks`, `videoUrl`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    #[serde(default = "default_solution")]
    pub solution: String,
    #[serde(default = "default_clue")]
    pub clue: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_date")]
    pub date: String,
    /// 1-based letter positions followed by a space.
    #[serde(default)]
    pub word_breaks: Vec<usize>,
    #[serde(default)]
    pub video_url: Option<String>,
}

fn default_solution() -> String {
    "PORT".to_string()
}
fn default_clue() -> String {
    "Paddleboat's left side or its terminus!?".to_string()
}
fn default_author() -> String {
    "William Snow".to_string()
}
fn default_date() -> String {
    "27 June, 2025".to_string()
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            solution: default_solution(),
            clue: default_clue(),
            author: default_author(),
            date: default_date(),
            word_breaks: Vec::new(),
            video_url: None,
        }
    }
}

impl PuzzleConfig {
    /// Load from a `.json` file, or TOML for any other extension.
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        let content = fs::read_to_string(path).map_err(|source| PuzzleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: PuzzleConfig = if is_json {
            serde_json::from_str(&content).map_err(|source| PuzzleError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| PuzzleError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };
        Ok(config.normalized())
    }

    /// Apply the loading policy: blank text fields fall back to their
    /// defaults, a blank video link means no video, and the solution is
    /// upper-cased to match what the on-screen keyboard emits.
    pub fn normalized(mut self) -> Self {
        fn or_default(value: String, default: fn() -> String) -> String {
            if value.trim().is_empty() { default() } else { value }
        }
        self.solution = or_default(self.solution, default_solution).to_uppercase();
        self.clue = or_default(self.clue, default_clue);
        self.author = or_default(self.author, default_author);
        self.date = or_default(self.date, default_date);
        self.video_url = self.video_url.filter(|url| !url.trim().is_empty());
        self
    }
}
