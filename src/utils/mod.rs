pub mod file_operations;

pub use file_operations::{
    copy_file_overwrite, ensure_distinct_directories, list_entries, prepare_destination,
};
