use chrono::{DateTime, Utc};
use serde::Serialize;

/// A file that was copied into the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: String,
    pub destination: String,
    pub renamed: bool,
    pub bytes: u64,
}

/// Why an entry was not copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAFile,
    SelfExcluded,
}

/// Report of a completed flat copy run
#[derive(Debug, Clone, Serialize)]
pub struct CopyReport {
    pub destination: String,
    pub copied_files: Vec<CopiedFile>,
    pub skipped_non_files: usize,
    pub skipped_self: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CopyReport {
    pub fn new(destination: String) -> Self {
        let now = Utc::now();
        Self {
            destination,
            copied_files: Vec::new(),
            skipped_non_files: 0,
            skipped_self: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn record_copy(&mut self, file: CopiedFile) {
        self.copied_files.push(file);
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::NotAFile => self.skipped_non_files += 1,
            SkipReason::SelfExcluded => self.skipped_self += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }

    pub fn successful_copies(&self) -> usize {
        self.copied_files.len()
    }

    pub fn renamed_copies(&self) -> usize {
        self.copied_files.iter().filter(|file| file.renamed).count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.copied_files.iter().map(|file| file.bytes).sum()
    }

    pub fn total_processed(&self) -> usize {
        self.successful_copies() + self.skipped_non_files + self.skipped_self
    }
}
