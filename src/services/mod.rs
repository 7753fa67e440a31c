pub mod flat_copy;

pub use flat_copy::{copy_entry, progress_line, run_flat_copy, skip_reason, summary_line};
