pub mod copy_report;
pub mod file_entry;
pub mod preset;

pub use copy_report::{CopiedFile, CopyReport, SkipReason};
pub use file_entry::{destination_name, has_js_suffix, EntryKind, FileEntry};
pub use preset::{DestinationPolicy, FlatCopyConfig, Preset};
