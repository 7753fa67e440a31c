use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Suffix that triggers the rename rule
pub const JS_SUFFIX: &str = ".js";

/// Suffix appended to renamed destinations
pub const MD_SUFFIX: &str = ".md";

/// Kind of a source directory entry, resolved through symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Other,
}

/// Immediate entry of the source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl FileEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Lossy display form of the name for console output
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Path of this entry inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }
}

/// Pure function: true when `name` ends with the literal `.js` suffix.
/// Case-sensitive, so `FOO.JS` is left alone.
pub fn has_js_suffix(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(JS_SUFFIX.as_bytes())
}

/// Compute the destination file name for `name`.
///
/// Returns the name and whether the rename rule applied.
pub fn destination_name(name: &OsStr, rename_js: bool) -> (OsString, bool) {
    if rename_js && has_js_suffix(name) {
        let mut renamed = name.to_os_string();
        renamed.push(MD_SUFFIX);
        (renamed, true)
    } else {
        (name.to_os_string(), false)
    }
}
