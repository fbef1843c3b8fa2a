//! Safe tarball extraction with top-level directory stripping.

use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use tar::{Archive, EntryType};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read archive: {0}")]
    Io(#[from] io::Error),

    #[error("archive entry '{0}' escapes the destination")]
    UnsafeEntry(String),

    #[error("archive contained no files")]
    Empty,
}

/// Unpack a tar stream into `destination`, dropping the first path
/// component of every entry.
///
/// Entries that would land outside `destination` are rejected. Links are
/// not materialised, so nothing can be written through them. Returns the
/// number of regular files written.
pub fn unpack_stripped<R: Read>(reader: R, destination: &Path) -> Result<usize, ArchiveError> {
    std::fs::create_dir_all(destination)?;

    let mut archive = Archive::new(reader);
    let mut files = 0;

    for entry in archive.entries()? {
        let mut entry = entry?;
        let raw = entry.path()?.into_owned();

        let Some(relative) = strip_top_level(&raw)? else {
            continue;
        };
        ensure_no_link_ancestor(destination, &relative, &raw)?;
        let target = destination.join(&relative);

        match entry.header().entry_type() {
            EntryType::Directory => {
                std::fs::create_dir_all(&target)?;
            }
            EntryType::Regular | EntryType::Continuous => {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                entry.unpack(&target)?;
                files += 1;
            }
            other => {
                trace!(path = %raw.display(), kind = ?other, "skipping archive entry");
            }
        }
    }

    if files == 0 {
        return Err(ArchiveError::Empty);
    }
    Ok(files)
}

/// Refuse entries whose already-unpacked ancestors are not real
/// directories.
fn ensure_no_link_ancestor(
    destination: &Path,
    relative: &Path,
    raw: &Path,
) -> Result<(), ArchiveError> {
    let mut current = destination.to_path_buf();
    for component in relative.components() {
        current.push(component);
        match std::fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                return Err(ArchiveError::UnsafeEntry(raw.display().to_string()));
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Drop the first component and validate the rest.
///
/// `Ok(None)` means the entry is the top-level folder itself (or a
/// metadata entry such as `pax_global_header`).
fn strip_top_level(path: &Path) -> Result<Option<PathBuf>, ArchiveError> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(_)) => {}
        Some(Component::CurDir) => return strip_top_level(components.as_path()),
        None => return Ok(None),
        Some(_) => return Err(ArchiveError::UnsafeEntry(path.display().to_string())),
    }

    let mut relative = PathBuf::new();
    for component in components {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return Err(ArchiveError::UnsafeEntry(path.display().to_string())),
        }
    }

    if relative.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(relative))
    }
}
