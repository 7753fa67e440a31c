//! Shared testing utilities for flat-copy CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated source/destination layout inside a temp directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a work directory holding two scripts, a text file and a subdirectory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("drafts")).expect("Failed to create work directory");

        fs::write(work_dir.join("MindMap.js"), "/*\n```javascript\n*/\nea.reset();\n")
            .expect("Failed to write MindMap.js");
        fs::write(work_dir.join("Table.js"), "const rows = [];\n").expect("Failed to write Table.js");
        fs::write(work_dir.join("notes.txt"), "plain notes").expect("Failed to write notes.txt");
        fs::write(work_dir.join("copy_file.py"), "import shutil\n")
            .expect("Failed to write copy_file.py");
        fs::write(work_dir.join("drafts").join("draft.js"), "draft").expect("Failed to write draft");

        Self { root, work_dir }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Destination of the built-in presets when run from the work directory.
    pub fn preset_scripts_dir(&self) -> PathBuf {
        self.root().join("Zero").join("Excalidraw").join("Scripts")
    }

    pub fn dest(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Command for the compiled binary, run inside the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("flat-copy").expect("Failed to locate flat-copy binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("FLAT_COPY_DEST")
            .env_remove("FLAT_COPY_PRESET")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Vec<u8> {
        fs::read(path.as_ref()).expect("Failed to read file")
    }
}
