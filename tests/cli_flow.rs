mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn default_run_copies_into_preset_destination() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Copied with renamed extension: MindMap.js -> MindMap.js.md",
        ))
        .stdout(predicate::str::contains("Copied: notes.txt"))
        .stdout(predicate::str::contains(
            "All files (excluding this script) copied successfully!",
        ));

    let dest = ctx.preset_scripts_dir();
    assert_eq!(
        ctx.read(dest.join("MindMap.js.md")),
        ctx.read(ctx.work_dir().join("MindMap.js"))
    );
    assert_eq!(
        ctx.read(dest.join("Table.js.md")),
        ctx.read(ctx.work_dir().join("Table.js"))
    );
    assert_eq!(ctx.read(dest.join("notes.txt")), b"plain notes");
    assert!(!dest.join("drafts").exists());
    assert!(!dest.join("draft.js.md").exists());
}

#[test]
fn progress_lines_follow_name_order() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["--dest"])
        .arg(ctx.dest())
        .args(["--no-rename-js", "--exclude-name", "copy_file.py"])
        .output()
        .expect("Failed to run flat-copy");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Copied: MindMap.js",
            "Copied: Table.js",
            "Copied: notes.txt",
            "All files (excluding this script) copied successfully!",
        ]
    );
    assert!(!ctx.dest().join("copy_file.py").exists());
}

#[test]
fn strict_preset_stops_when_destination_is_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--preset", "strict"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Target folder does not exist"))
        .stdout(predicate::str::contains("Copied").not());

    assert!(!ctx.preset_scripts_dir().exists());
}

#[test]
fn strict_preset_copies_everything_into_existing_destination() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.dest()).unwrap();

    ctx.cli()
        .args(["--preset", "strict", "--dest"])
        .arg(ctx.dest())
        .assert()
        .success()
        .stdout(predicate::str::contains("All files copied successfully!"));

    assert!(ctx.dest().join("MindMap.js").exists());
    assert!(ctx.dest().join("copy_file.py").exists());
    assert!(!ctx.dest().join("MindMap.js.md").exists());
}

#[test]
fn destination_can_come_from_environment() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("FLAT_COPY_DEST", ctx.dest())
        .env("FLAT_COPY_PRESET", "mirror")
        .assert()
        .success();

    assert!(ctx.dest().join("Table.js").exists());
    assert!(!ctx.dest().join("Table.js.md").exists());
}

#[test]
fn json_report_lists_copied_files() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .arg("--dest")
        .arg(ctx.dest())
        .arg("--json")
        .output()
        .expect("Failed to run flat-copy");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').expect("JSON report missing");
    let report: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    let copied = report["copied_files"].as_array().unwrap();
    assert_eq!(copied.len(), 4);
    assert_eq!(copied[0]["source"], "MindMap.js");
    assert_eq!(copied[0]["destination"], "MindMap.js.md");
    assert_eq!(copied[0]["renamed"], true);
    assert_eq!(report["skipped_non_files"], 1);
}

#[test]
fn unknown_preset_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--preset", "nonsense"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn missing_source_directory_is_a_filesystem_failure() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--source")
        .arg(ctx.root().join("absent"))
        .arg("--dest")
        .arg(ctx.dest())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read source directory"));
}

#[test]
fn running_binary_is_not_copied_into_destination() {
    let ctx = TestContext::new();
    let own_name = format!("flat-copy{}", std::env::consts::EXE_SUFFIX);
    fs::write(ctx.work_dir().join(&own_name), "stand-in binary").unwrap();

    let output = ctx
        .cli()
        .arg("--dest")
        .arg(ctx.dest())
        .arg("--json")
        .output()
        .expect("Failed to run flat-copy");

    assert!(output.status.success());
    assert!(!ctx.dest().join(&own_name).exists());
    assert!(ctx.dest().join("notes.txt").exists());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains(&format!("Copied: {}", own_name)));
    let json_start = stdout.find('{').expect("JSON report missing");
    let report: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(report["skipped_self"], 1);
}

#[test]
fn destination_equal_to_source_leaves_files_intact() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--dest")
        .arg(ctx.work_dir())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Copied").not())
        .stderr(predicate::str::contains("same directory"));

    assert_eq!(ctx.read(ctx.work_dir().join("notes.txt")), b"plain notes");
    assert!(!ctx.work_dir().join("MindMap.js.md").exists());
}

#[test]
fn destination_that_is_a_file_is_not_reported_missing() {
    let ctx = TestContext::new();
    fs::write(ctx.dest(), "occupied").unwrap();

    ctx.cli()
        .args(["--preset", "strict", "--dest"])
        .arg(ctx.dest())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Target folder does not exist").not())
        .stderr(predicate::str::contains("not a directory"));

    assert_eq!(ctx.read(ctx.dest()), b"occupied");
}
