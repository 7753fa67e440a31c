use crate::error::{FlatCopyError, FlatCopyResult};
use crate::models::{destination_name, CopiedFile, CopyReport, FileEntry, FlatCopyConfig, SkipReason};
use crate::utils::{
    copy_file_overwrite, ensure_distinct_directories, list_entries, prepare_destination,
};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Decide whether an entry is skipped, without touching the filesystem
pub fn skip_reason(entry: &FileEntry, config: &FlatCopyConfig) -> Option<SkipReason> {
    if !entry.is_file() {
        return Some(SkipReason::NotAFile);
    }
    match &config.exclude_name {
        Some(excluded) if *excluded == entry.name => Some(SkipReason::SelfExcluded),
        _ => None,
    }
}

/// Copy a single entry into `dest_dir`, applying the rename rule
pub fn copy_entry(
    source_dir: &Path,
    dest_dir: &Path,
    entry: &FileEntry,
    rename_js: bool,
) -> FlatCopyResult<CopiedFile> {
    let (dest_name, renamed) = destination_name(&entry.name, rename_js);
    let source_path = entry.path_in(source_dir);
    let dest_path = dest_dir.join(&dest_name);

    let bytes = copy_file_overwrite(&source_path, &dest_path)?;

    Ok(CopiedFile {
        source: entry.display_name(),
        destination: dest_name.to_string_lossy().into_owned(),
        renamed,
        bytes,
    })
}

/// Console line for a copied file
pub fn progress_line(file: &CopiedFile) -> String {
    if file.renamed {
        format!(
            "Copied with renamed extension: {} -> {}",
            file.source, file.destination
        )
    } else {
        format!("Copied: {}", file.source)
    }
}

/// Console line printed after the last copy
pub fn summary_line(config: &FlatCopyConfig) -> &'static str {
    if config.excludes_self() {
        "All files (excluding this script) copied successfully!"
    } else {
        "All files copied successfully!"
    }
}

/// Run a flat copy: prepare the destination, then copy every qualifying
/// entry of the source directory in name order.
///
/// The first filesystem failure aborts the run. Files copied before it stay.
pub fn run_flat_copy<W: Write>(
    config: &FlatCopyConfig,
    progress: &mut W,
) -> FlatCopyResult<CopyReport> {
    info!(
        "Copying files from {:?} to {:?}",
        config.source, config.destination
    );

    prepare_destination(&config.destination, config.policy)?;

    let entries = list_entries(&config.source)?;
    debug!("Found {} entries in source directory", entries.len());
    ensure_distinct_directories(&config.source, &config.destination)?;

    let mut report = CopyReport::new(config.destination.to_string_lossy().into_owned());

    for entry in &entries {
        if let Some(reason) = skip_reason(entry, config) {
            debug!("Skipping {:?}: {:?}", entry.name, reason);
            report.record_skip(reason);
            continue;
        }

        let copied = copy_entry(&config.source, &config.destination, entry, config.rename_js)?;
        writeln!(progress, "{}", progress_line(&copied)).map_err(FlatCopyError::Output)?;
        report.record_copy(copied);
    }

    writeln!(progress, "{}", summary_line(config)).map_err(FlatCopyError::Output)?;
    report.finish();

    info!(
        "Flat copy completed. Processed: {}, Copied: {} ({} bytes), Renamed: {}, Skipped: {}",
        report.total_processed(),
        report.successful_copies(),
        report.total_bytes(),
        report.renamed_copies(),
        report.skipped_non_files + report.skipped_self
    );

    Ok(report)
}
