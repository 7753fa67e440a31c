pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{FlatCopyError, FlatCopyResult};
pub use models::{
    CopiedFile, CopyReport, DestinationPolicy, EntryKind, FileEntry, FlatCopyConfig, Preset,
    SkipReason,
};
pub use services::run_flat_copy;

/// Exit code for the clean early exit on a missing destination
pub const EXIT_MISSING_DESTINATION: u8 = 3;

// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub preset: Preset,
    pub flat_copy: FlatCopyConfig,
    pub json_report: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            flat_copy: FlatCopyConfig::default(),
            json_report: false,
            log_level: "warn".to_string(),
        }
    }
}
