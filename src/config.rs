// File: src/config.rs
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lexicon::dhatu::DhatuOptions;
use crate::lexicon::shabda::ShabdaOptions;

/// Where the lexicons live and how they are searched. Every key is
/// optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dhatu_file: PathBuf,
    pub shabda_file: PathBuf,
    /// Decoded lexicons are cached here when set.
    pub snapshot_file: Option<PathBuf>,
    pub dhatu: DhatuOptions,
    pub shabda: ShabdaOptions,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dhatu_file: PathBuf::from("data/dhatu.json"),
            shabda_file: PathBuf::from("data/shabda.json"),
            snapshot_file: None,
            dhatu: DhatuOptions::default(),
            shabda: ShabdaOptions::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }

    /// The config at `path`, or the defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::shabda::ShabdaField;

    #[test]
    fn missing_keys_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"shabda": {"search_fields": ["word", "end"]}}"#).unwrap();
        assert_eq!(config.dhatu_file, PathBuf::from("data/dhatu.json"));
        assert_eq!(config.shabda.search_fields, [ShabdaField::Word, ShabdaField::End]);
        assert_eq!(config.shabda.display_fields.len(), 4);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn load_reports_the_path() {
        let err = Config::load(Path::new("no/such/config.json")).unwrap_err();
        assert!(err.to_string().contains("no/such/config.json"));
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
