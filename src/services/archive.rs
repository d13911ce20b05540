//! Template archive extraction.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::domain::AppError;

/// Unpack the zip at `archive` under `dest_root`, recreating the entry layout.
///
/// Entries are processed one at a time in archive order. Parent directories
/// are created on demand, so file entries may arrive before (or without) the
/// directory entries that would contain them. Existing files at an entry path
/// are overwritten. Entry names are confined to `dest_root`: absolute paths
/// and `..` components are rejected.
pub fn unpack(archive: &Path, dest_root: &Path) -> Result<(), AppError> {
    let file = File::open(archive)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| AppError::MalformedArchive(e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| AppError::MalformedArchive(e.to_string()))?;
        let destination = dest_root.join(confined_path(entry.name())?);

        if entry.name().ends_with('/') {
            fs::create_dir_all(&destination)?;
            continue;
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut output = File::create(&destination)?;
        io::copy(&mut entry, &mut output)?;
    }

    Ok(())
}

fn confined_path(entry: &str) -> Result<PathBuf, AppError> {
    let path = Path::new(entry);
    if path.is_absolute() {
        return Err(AppError::UnsafeArchivePath(entry.to_string()));
    }

    let mut confined = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => confined.push(segment),
            Component::CurDir => {}
            _ => return Err(AppError::UnsafeArchivePath(entry.to_string())),
        }
    }
    Ok(confined)
}
