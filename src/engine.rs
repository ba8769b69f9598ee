// File: src/engine.rs
use crate::config::Config;
use crate::error::{KoshaError, SnapshotError};
use crate::lexicon::dhatu::Dhatupatha;
use crate::lexicon::shabda::Shabdapatha;
use crate::persistence::{load_from_disk, save_to_disk};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Both lexicons, decoded once and shared read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kosha {
    pub dhatupatha: Dhatupatha,
    pub shabdapatha: Shabdapatha,
}

impl Kosha {
    /// Decodes both lexicon files named by `config`.
    pub fn load(config: &Config) -> Result<Self, KoshaError> {
        Ok(Self {
            dhatupatha: Dhatupatha::load(&config.dhatu_file, config.dhatu.clone())?,
            shabdapatha: Shabdapatha::load(&config.shabda_file, config.shabda.clone())?,
        })
    }

    /// Uses the snapshot when one is configured and readable; otherwise
    /// decodes the sources and, if a snapshot path is set, writes it.
    pub fn from_snapshot_or_sources(config: &Config) -> Result<Self, KoshaError> {
        let Some(snapshot) = config.snapshot_file.as_deref() else {
            return Self::load(config);
        };

        match load_from_disk(snapshot) {
            Ok(mut kosha) => {
                info!(path = %snapshot.display(), "loaded snapshot");
                kosha.dhatupatha.set_options(config.dhatu.clone());
                kosha.shabdapatha.set_options(config.shabda.clone());
                Ok(kosha)
            }
            Err(err) => {
                warn!(path = %snapshot.display(), "snapshot unusable, decoding sources: {err}");
                let kosha = Self::load(config)?;
                kosha.save_snapshot(snapshot)?;
                Ok(kosha)
            }
        }
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        save_to_disk(self, path)?;
        info!(path = %path.display(), "saved snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::dhatu::DhatuOptions;
    use crate::lexicon::shabda::ShabdaOptions;

    fn kosha() -> Kosha {
        let dhatu = r#"{"01.0001": {"dhatu": "भू", "aupadeshik": "भू", "gana": "1", "pada": "P",
            "settva": "S", "karma": "A", "artha": "सत्तायाम्",
            "rupaani": {"plat": "भवति;भवतः;भवन्ति;भवसि;भवथः;भवथ;भवामि;भवावः;भवामः"}}}"#;
        let shabda = r#"{"01.001": {"word": "राम", "end": "अ", "linga": "P", "forms": ""}}"#;
        Kosha {
            dhatupatha: Dhatupatha::from_json(dhatu, DhatuOptions::default()).unwrap(),
            shabdapatha: Shabdapatha::from_json(shabda, ShabdaOptions::default()).unwrap(),
        }
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kosha.bin");
        let kosha = kosha();
        kosha.save_snapshot(&path).unwrap();

        let restored = load_from_disk(&path).unwrap();
        let before: Vec<_> = kosha.dhatupatha.search("भवथ", false).into_iter().map(|m| m.description()).collect();
        let after: Vec<_> = restored.dhatupatha.search("भवथ", false).into_iter().map(|m| m.description()).collect();
        assert_eq!(before, after);
        assert_eq!(restored.shabdapatha.get_similar("देव", None).len(), 1);
    }

    #[test]
    fn unreadable_snapshot_falls_back_to_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            dhatu_file: dir.path().join("missing.json"),
            snapshot_file: Some(dir.path().join("kosha.bin")),
            ..Config::default()
        };
        assert!(matches!(
            Kosha::from_snapshot_or_sources(&config),
            Err(KoshaError::Lexicon(_))
        ));
    }

    #[test]
    fn corrupt_snapshot_is_rebuilt_and_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let dhatu_file = dir.path().join("dhatu.json");
        let shabda_file = dir.path().join("shabda.json");
        let snapshot = dir.path().join("kosha.bin");
        std::fs::write(
            &dhatu_file,
            r#"{"01.0001": {"dhatu": "भू", "aupadeshik": "भू", "gana": "1", "pada": "P",
                "settva": "S", "karma": "A", "artha": "सत्तायाम्", "rupaani": {}}}"#,
        )
        .unwrap();
        std::fs::write(&shabda_file, r#"{"01.001": {"word": "राम", "linga": "P"}}"#).unwrap();
        std::fs::write(&snapshot, [0xff, 0x00, 0x01]).unwrap();
        assert!(load_from_disk(&snapshot).is_err());

        let config = Config {
            dhatu_file,
            shabda_file,
            snapshot_file: Some(snapshot.clone()),
            ..Config::default()
        };
        let kosha = Kosha::from_snapshot_or_sources(&config).unwrap();
        assert_eq!(kosha.dhatupatha.len(), 1);
        assert_eq!(kosha.shabdapatha.len(), 1);

        let rewritten = load_from_disk(&snapshot).unwrap();
        assert_eq!(rewritten.dhatupatha.get("1.1").unwrap().dhatu, "भू");
        assert_eq!(rewritten.shabdapatha.get("1.1").unwrap().word, "राम");
    }
}
