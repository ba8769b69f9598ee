// File: src/persistence.rs
use crate::engine::Kosha;
use crate::error::SnapshotError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the decoded lexicons next to `path` and renames the file into
/// place, so a reader never sees a half-written snapshot.
pub fn save_to_disk(kosha: &Kosha, path: &Path) -> Result<(), SnapshotError> {
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, kosha)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Kosha, SnapshotError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}
