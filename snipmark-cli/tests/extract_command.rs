use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("snipmark-parser")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn snipmark() -> Command {
    Command::cargo_bin("snipmark").unwrap()
}

#[test]
fn extracts_display_code_by_default() {
    let mut cmd = snipmark();
    cmd.arg(fixture_path("sample.js"));

    let output_pred = predicate::str::contains("document.createElement")
        .and(predicate::str::contains("// start").not())
        .and(predicate::str::contains("// end").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn preview_tab_omits_render_skipped_lines() {
    let mut cmd = snipmark();
    cmd.arg(fixture_path("sample.js")).arg("--tab").arg("preview");

    let output_pred = predicate::str::contains("addEventListener")
        .and(predicate::str::contains("appendChild").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn original_tab_keeps_render_skipped_lines() {
    let mut cmd = snipmark();
    cmd.arg(fixture_path("sample.js")).arg("--tab").arg("original");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("appendChild"));
}

#[test]
fn json_format_prints_all_artifacts() {
    let mut cmd = snipmark();
    cmd.arg(fixture_path("sample.html")).arg("--format").arg("json");

    let output_pred = predicate::str::contains("codeForDisplay")
        .and(predicate::str::contains("renderablePreviewContent"))
        .and(predicate::str::contains("originalPreviewCode"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn file_type_override_changes_marker_style() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snippet.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "<!-- start -->\n<p>hi</p>\n<!-- end -->\n").unwrap();

    let mut cmd = snipmark();
    cmd.arg(&path).arg("--file-type").arg("markup");
    cmd.assert().success().stdout("<p>hi</p>\n");
}

#[test]
fn scan_lists_recognized_sources() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("demo.js"), "const x = 1;").unwrap();
    std::fs::write(dir.path().join("page.html"), "<p>hi</p>").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a snippet").unwrap();

    let mut cmd = snipmark();
    cmd.arg(dir.path()).arg("--scan");

    let output_pred = predicate::str::contains("Found 2 snippet sources")
        .and(predicate::str::contains("demo.js  [script]"))
        .and(predicate::str::contains("page.html  [markup]"))
        .and(predicate::str::contains("notes.txt").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn list_types_shows_comment_tokens() {
    let mut cmd = snipmark();
    cmd.arg("--list-types");

    let output_pred = predicate::str::contains("typed-script-component")
        .and(predicate::str::contains("{/* ... */}"))
        .and(predicate::str::contains("<!-- ... -->"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn missing_files_fail_with_an_error() {
    let mut cmd = snipmark();
    cmd.arg("no/such/snippet.js");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error loading"));
}

#[test]
fn unknown_tabs_are_rejected() {
    let mut cmd = snipmark();
    cmd.arg(fixture_path("sample.js")).arg("--tab").arg("bogus");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tab"));
}

#[test]
fn verbose_prints_diagnostics_to_stderr() {
    let mut cmd = snipmark();
    cmd.arg(fixture_path("sample.js")).arg("--verbose");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("File type: script"));
}
