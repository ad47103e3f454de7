/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use common::{DATASET_FILE, DatasetBuilder, PersonBuilder, binary, dataset_dir, sample_dataset};
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Command with a clean environment: no dataset variable, no RUST_LOG, and a home and data
/// directory that contain nothing
fn command(home: &TempDir) -> Command {
    let mut cmd = Command::new(binary());
    cmd.env_remove("ALUMNI_EXPLORER_DATA")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .current_dir(home.path());
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let home = TempDir::new().unwrap();
    command(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let home = TempDir::new().unwrap();
    command(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search and browse an alumni career dataset"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_cli_version_flag() {
    let home = TempDir::new().unwrap();
    command(&home).arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let home = TempDir::new().unwrap();
    command(&home).arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_stats_with_data_flag() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alumni Dataset Statistics"))
        .stdout(predicate::str::contains("Total alumni: 3"))
        .stdout(predicate::str::contains("Total jobs: 5"))
        .stdout(predicate::str::contains("Unique companies: 3"))
        .stdout(predicate::str::contains("Unique locations: 3"))
        .stdout(predicate::str::contains("Graduation years: 2015 - 2019 (3 distinct)"))
        .stderr(predicate::str::contains("Loaded 3 alumni"));
}

#[test]
fn test_cli_stats_with_env_var() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .env("ALUMNI_EXPLORER_DATA", &path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total alumni: 3"));
}

#[test]
fn test_cli_stats_from_current_directory() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();
    fs::copy(&path, home.path().join(DATASET_FILE)).unwrap();

    command(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total alumni: 3"));
}

#[test]
fn test_cli_missing_dataset() {
    let home = TempDir::new().unwrap();

    command(&home)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No dataset found"))
        .stderr(predicate::str::contains("ALUMNI_EXPLORER_DATA"));
}

#[test]
fn test_cli_data_flag_to_missing_file() {
    let home = TempDir::new().unwrap();

    command(&home)
        .args(["--data", "does-not-exist.json", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open dataset file"));
}

#[test]
fn test_cli_search_case_insensitive() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    for query in ["acme", "ACME", "AcMe"] {
        command(&home)
            .arg("--data")
            .arg(&path)
            .args(["search", query])
            .assert()
            .success()
            .stdout(predicate::str::contains("Asha Verma | 2016 | Founder @ Acme AI | Bangalore"))
            .stdout(predicate::str::contains("1 match (3 alumni)"))
            .stdout(predicate::str::contains("Ravi Kumar").not());
    }
}

#[test]
fn test_cli_search_joins_words() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["search", "goldman", "sachs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi Kumar"))
        .stdout(predicate::str::contains("1 match"));
}

#[test]
fn test_cli_search_empty_query_lists_everyone_in_order() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    let output = command(&home).arg("--data").arg(&path).arg("search").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let asha = stdout.find("Asha Verma").unwrap();
    let ravi = stdout.find("Ravi Kumar").unwrap();
    let zara = stdout.find("Zara Khan").unwrap();
    assert!(asha < ravi && ravi < zara);
    assert!(!stdout.contains("Meera Iyer"));
    assert!(stdout.contains("3 matches (3 alumni)"));
}

#[test]
fn test_cli_search_with_filter() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    // Filters look at the whole job history, not just the first job
    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["search", "--filter", "comp:google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha Verma"))
        .stdout(predicate::str::contains("1 match"));

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["search", "--filter", "sector:tech since:2017"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi Kumar"))
        .stdout(predicate::str::contains("Asha Verma").not());
}

#[test]
fn test_cli_search_invalid_filter() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["search", "--filter", "salary:high"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter"))
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn test_cli_search_limit() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["search", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha Verma"))
        .stdout(predicate::str::contains("Ravi Kumar").not())
        .stdout(predicate::str::contains("Showing 1 of 3 matches"));
}

#[test]
fn test_cli_search_json() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    let output = command(&home)
        .arg("--data")
        .arg(&path)
        .args(["search", "bangalore", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], json!("Asha Verma"));
    assert_eq!(results[0]["firstJob"]["comp"], json!("Acme AI"));
    assert_eq!(results[0]["jobs"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_show_person() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    let output = command(&home).arg("--data").arg(&path).args(["show", "asha"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Asha Verma\n"));
    assert!(stdout.contains("LinkedIn: https://www.linkedin.com/in/asha-verma"));
    assert!(stdout.contains("2016 - 2020 · 4 years · Mountain View"));
    assert!(stdout.contains("Startup · Founder"));

    let founder = stdout.find("Founder @ Acme AI").unwrap();
    let engineer = stdout.find("Software Engineer @ Google").unwrap();
    assert!(founder < engineer);
}

#[test]
fn test_cli_show_by_id_and_multiword_name() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["show", "p-2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ravi Kumar"))
        .stdout(predicate::str::contains("LinkedIn: No LinkedIn found"));

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["show", "zara", "khan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Consultant @ Globex"));
}

#[test]
fn test_cli_show_unknown_person() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    // People without jobs are not part of the working set
    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["show", "meera"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No alumni named 'meera'"));
}

#[test]
fn test_cli_paths() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("People with sector transitions: 2"))
        .stdout(predicate::str::contains("Tech/Product → Startup (1, 50.0%)"))
        .stdout(predicate::str::contains("Tech/Product → Finance (1, 50.0%)"))
        .stdout(predicate::str::contains("Asha Verma (https://www.linkedin.com/in/asha-verma)"))
        .stdout(predicate::str::contains("Ravi Kumar (No LinkedIn found)"));
}

#[test]
fn test_cli_paths_top() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = sample_dataset();

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["paths", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 transitions"))
        .stdout(predicate::str::contains("Tech/Product → Startup"))
        .stdout(predicate::str::contains("Tech/Product → Finance").not());
}

#[test]
fn test_cli_invalid_json_dataset() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DATASET_FILE);
    fs::write(&path, "{ not json").unwrap();

    command(&home)
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_cli_mostly_malformed_dataset() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = DatasetBuilder::new()
        .with_raw("a", json!(null))
        .with_raw("b", json!(42))
        .with_raw("c", json!("text"))
        .with_person("d", PersonBuilder::new("Only One").job("Acme", "SDE", "Pune"))
        .build();

    command(&home)
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many malformed records"));
}

#[test]
fn test_cli_log_file() {
    let home = TempDir::new().unwrap();
    let (dir, path) = sample_dataset();
    let log_path = dataset_dir(&path).join("logs").join("cli.log");

    command(&home)
        .arg("--data")
        .arg(&path)
        .arg("--log-file")
        .arg(&log_path)
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded").not());

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Loaded 3 alumni"));
    assert!(!log.contains('\x1b'));
    drop(dir);
}

#[test]
fn test_cli_output_is_sanitized() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = DatasetBuilder::new()
        .with_person(
            "evil",
            PersonBuilder::new("\u{1b}[2J\u{1b}]0;pwned\u{7}Mallory")
                .job("Acme\u{1b}[31m", "SDE", "Pune"),
        )
        .build();

    let output =
        command(&home).arg("--data").arg(&path).args(["search", "mallory"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Mallory | - | SDE @ Acme | Pune"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_cli_show_with_out_of_range_years() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = DatasetBuilder::new()
        .with_person(
            "odd",
            PersonBuilder::new("Odd Years")
                .raw_job(json!({"comp": "Acme", "title": "SDE", "start_year": -2147483648_i64}))
                .raw_job(json!({"comp": "Globex", "start_year": 2015, "end_year": 10000000000.0})),
        )
        .build();

    command(&home)
        .arg("--data")
        .arg(&path)
        .args(["show", "odd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SDE @ Acme"))
        .stdout(predicate::str::contains("2147483647").not());
}
