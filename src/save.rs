use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime};
use log::{info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::game::Achievements;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {path} is not valid: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Progress kept between runs. Every field is optional on disk.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SaveRecord {
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub achievements: Achievements,
    /// Informational only.
    #[serde(default, deserialize_with = "lenient_date")]
    pub save_date: Option<DateTime<Local>>,
}

impl SaveRecord {
    pub fn snapshot(coins: u32, high_score: u32, achievements: Achievements) -> Self {
        Self {
            coins,
            high_score,
            achievements,
            save_date: Some(Local::now()),
        }
    }
}

/// Accepts RFC 3339 as well as plain `YYYY-MM-DD HH:MM:SS[.ffffff]`
/// local time. Anything else is dropped instead of failing the whole load.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_save_date))
}

fn parse_save_date(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .and_then(|naive| naive.and_local_timezone(Local).single())
}

/// Reads and writes the save record at a fixed path.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when there is no save file yet.
    pub fn read(&self) -> Result<Option<SaveRecord>, SaveError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SaveError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| SaveError::Format {
                path: self.path.clone(),
                source,
            })
    }

    /// Like `read`, but falls back to a fresh record on any problem.
    pub fn load(&self) -> SaveRecord {
        match self.read() {
            Ok(Some(record)) => {
                info!(
                    "Loaded save: {} coins, high score {}",
                    record.coins, record.high_score
                );
                record
            }
            Ok(None) => {
                info!("No save file at {}, starting fresh", self.path.display());
                SaveRecord::default()
            }
            Err(e) => {
                warn!("Ignoring save file: {}", e);
                SaveRecord::default()
            }
        }
    }

    /// Overwrites the whole file.
    pub fn write(&self, record: &SaveRecord) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(record).map_err(|source| SaveError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| SaveError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
