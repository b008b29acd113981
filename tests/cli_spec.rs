mod common;

use common::fixture_path;
use std::process::Command;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_mo-reader"))
        .args(args)
        .output()
        .expect("run mo-reader");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn lossy_flag_is_accepted_before_and_after_the_path() {
    let path = fixture_path(&["tests", "fixtures", "de-le.mo"]);
    let path = path.to_str().expect("utf-8 fixture path");

    for args in [
        vec!["--lossy", path, "Hello"],
        vec![path, "--lossy", "Hello"],
        vec![path, "Hello"],
    ] {
        let (ok, stdout) = run(&args);
        assert!(ok, "mo-reader failed for {:?}", args);
        assert_eq!(stdout.trim_end(), "Hallo", "output for {:?}", args);
    }
}

#[test]
fn plural_query_selects_by_count() {
    let path = fixture_path(&["tests", "fixtures", "de-be.mo"]);
    let path = path.to_str().expect("utf-8 fixture path");

    let (ok, stdout) = run(&[path, "one apple", "%d apples", "4"]);
    assert!(ok, "mo-reader failed");
    assert_eq!(stdout.trim_end(), "%d Früchte");
}

#[test]
fn missing_path_prints_usage_and_fails() {
    let (ok, _) = run(&["--lossy"]);
    assert!(!ok, "expected failure without a catalog path");
}
