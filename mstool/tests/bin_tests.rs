use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run(bin: &str, workdir: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .current_dir(workdir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to spawn binary")
}

fn pms_import(workdir: &Path, args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_pms-import"), workdir, args)
}

fn schema_break(workdir: &Path, args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_schema-break"), workdir, args)
}

#[test]
fn test_pms_import_usage_error_exits_1() {
    let tmp = tempdir().unwrap();
    let out = pms_import(tmp.path(), &["onlyone"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn test_schema_break_usage_error_exits_1() {
    let tmp = tempdir().unwrap();
    assert_eq!(schema_break(tmp.path(), &[]).status.code(), Some(1));
    assert_eq!(schema_break(tmp.path(), &["in.sql"]).status.code(), Some(1));
}

#[test]
fn test_mstool_without_subcommand_exits_1() {
    let tmp = tempdir().unwrap();
    let out = run(env!("CARGO_BIN_EXE_mstool"), tmp.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_help_exits_0() {
    let tmp = tempdir().unwrap();

    let out = pms_import(tmp.path(), &["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("PMS_DIR"));

    assert_eq!(schema_break(tmp.path(), &["--help"]).status.code(), Some(0));
}

#[test]
fn test_pms_import_prints_destination_paths() {
    let tmp = tempdir().unwrap();
    let renderers = tmp.path().join("pms/renderers");
    fs::create_dir_all(&renderers).unwrap();
    fs::write(renderers.join("TV.conf"), "RendererName = TV\n").unwrap();
    fs::write(renderers.join("Box.conf"), "RendererName = Box\n").unwrap();

    let out = pms_import(tmp.path(), &["pms", "res"]);

    assert_eq!(out.status.code(), Some(0));
    let root = tmp.path().canonicalize().unwrap();
    let expected = format!(
        "{}\n{}\n",
        root.join("res/renderers/Box.conf").display(),
        root.join("res/renderers/TV.conf").display()
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), expected);
    assert_eq!(
        fs::read_to_string(tmp.path().join("res/renderers/TV.conf")).unwrap(),
        "[General]\nName = TV\n\n"
    );
}

#[test]
fn test_pms_import_missing_source_exits_1() {
    let tmp = tempdir().unwrap();
    let out = pms_import(tmp.path(), &["missing", "res"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("renderer directory not found"));
    assert!(!tmp.path().join("res").exists());
}

#[test]
fn test_schema_break_missing_input_exits_1() {
    let tmp = tempdir().unwrap();
    let out = schema_break(tmp.path(), &["nope.sql", "out.h"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("could not open"));
    assert!(stderr.contains("nope.sql"));
    assert!(stderr.contains("for reading"));
}

#[test]
fn test_schema_break_unwritable_output_exits_1() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("init.sql"), "SELECT 1;").unwrap();

    let out = schema_break(tmp.path(), &["init.sql", "missing/out.h"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("for writing"));
}

#[test]
fn test_schema_break_writes_array() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("create.schema.sql"),
        "SELECT 1; -- comment\nSELECT 2;",
    )
    .unwrap();

    let out = schema_break(tmp.path(), &["create.schema.sql", "schema.h"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(tmp.path().join("schema.h")).unwrap(),
        "static const char* create_schema_sql[] = {\n\t\"SELECT 1\",\n\t\"SELECT 2\",\n};\n"
    );
}
