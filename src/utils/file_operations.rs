use crate::error::{FlatCopyError, FlatCopyResult};
use crate::models::{DestinationPolicy, EntryKind, FileEntry};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the immediate entries of a directory, sorted by name.
///
/// Symlinks are classified by their target; dangling links count as `Other`.
pub fn list_entries<P: AsRef<Path>>(directory: P) -> FlatCopyResult<Vec<FileEntry>> {
    let dir_path = directory.as_ref();

    let read_error = |source| FlatCopyError::ReadSource {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir_path)
        .map_err(read_error)?
        .map(|entry| entry.map(|entry| FileEntry::new(entry.file_name(), classify(&entry.path()))))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn classify(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => EntryKind::File,
        _ => EntryKind::Other,
    }
}

/// Apply the destination-existence policy before any copy happens
pub fn prepare_destination<P: AsRef<Path>>(
    destination: P,
    policy: DestinationPolicy,
) -> FlatCopyResult<()> {
    let dest_path = destination.as_ref();

    if dest_path.exists() {
        return if dest_path.is_dir() {
            Ok(())
        } else {
            Err(FlatCopyError::NotADirectory {
                path: dest_path.to_path_buf(),
            })
        };
    }

    match policy {
        DestinationPolicy::RequireExisting => Err(FlatCopyError::MissingDestination {
            path: dest_path.to_path_buf(),
        }),
        DestinationPolicy::CreateIfMissing => {
            debug!("Creating destination directory {:?}", dest_path);
            fs::create_dir_all(dest_path).map_err(|source| FlatCopyError::CreateDestination {
                path: dest_path.to_path_buf(),
                source,
            })
        }
    }
}

fn canonical(path: &Path) -> FlatCopyResult<PathBuf> {
    fs::canonicalize(path).map_err(|source| FlatCopyError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Fail when both directories resolve to the same place.
/// Both must exist, so call this after `prepare_destination`.
pub fn ensure_distinct_directories<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> FlatCopyResult<()> {
    let resolved = canonical(source.as_ref())?;
    if resolved == canonical(destination.as_ref())? {
        return Err(FlatCopyError::SameDirectory { path: resolved });
    }
    Ok(())
}

/// Copy bytes and permissions from `source` to `destination`, overwriting.
/// Returns the number of bytes copied.
///
/// `fs::copy` truncates the destination first, so a destination that
/// resolves to the source itself is refused.
pub fn copy_file_overwrite<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> FlatCopyResult<u64> {
    let src_path = source.as_ref();
    let dest_path = destination.as_ref();

    if dest_path.exists() && canonical(src_path)? == canonical(dest_path)? {
        return Err(FlatCopyError::SameFile {
            from: src_path.to_path_buf(),
            to: dest_path.to_path_buf(),
        });
    }

    fs::copy(src_path, dest_path).map_err(|source| FlatCopyError::CopyFile {
        from: src_path.to_path_buf(),
        to: dest_path.to_path_buf(),
        source,
    })
}
