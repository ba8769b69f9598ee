// File: src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lexicon::grid::PackedError;
use crate::lexicon::BaseIndex;

/// A lexicon that cannot be loaded. Always fatal: a partially decoded
/// lexicon is never handed out.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry key `{key}` is not a valid index")]
    InvalidKey { key: String },

    #[error("entry {index}, slot `{slot}`: {source}")]
    Packed { index: BaseIndex, slot: String, source: PackedError },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("cannot move snapshot into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed config {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Error)]
pub enum KoshaError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
