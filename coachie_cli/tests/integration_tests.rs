//! Integration tests for the coachie binary.
//!
//! These tests verify end-to-end behavior including:
//! - Parsing spoken commands to JSON
//! - Logging to the per-day JSONL files
//! - Scoring a day and recording it in the history
//! - Streaks over the recorded history

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("coachie"))
}

/// CLI pointed at an isolated data dir and config file
fn coachie(dir: &Path) -> Command {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        fs::write(&config_path, "[habits]\ntracked = [\"eat breakfast\"]\n")
            .expect("Failed to write config");
    }

    let mut cmd = cli();
    cmd.arg("--data-dir")
        .arg(dir.join("data"))
        .arg("--config")
        .arg(&config_path);
    cmd
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coachie Score"));
}

#[test]
fn test_parse_prints_json() {
    let temp_dir = setup_test_dir();

    let output = coachie(temp_dir.path())
        .args(["parse", "I", "drank", "2", "glasses", "of", "water"])
        .output()
        .expect("Failed to run coachie");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse output is JSON");
    assert_eq!(json["type"], "water");
    assert_eq!(json["amount_ml"], 500.0);

    // Parsing never touches the data directory
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_parse_unknown_is_not_an_error() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["parse", "asdf qwerty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unknown\""));
}

#[test]
fn test_log_appends_to_todays_file() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["log", "I slept 8 hours"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Logged Sleep: 8 hours"));

    let log_path = temp_dir
        .path()
        .join("data/logs")
        .join(format!("{}.jsonl", today()));
    let contents = fs::read_to_string(&log_path).expect("Failed to read day log");
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("\"type\":\"sleep\""));
    assert!(contents.contains("\"quality\":3"));
}

#[test]
fn test_log_dry_run_does_not_write() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["log", "--dry-run", "I weigh 180 lbs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight: 180 lbs"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp_dir.path().join("data/logs").exists());
}

#[test]
fn test_log_unrecognized_fails() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["log", "asdf qwerty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't log that"));

    coachie(temp_dir.path())
        .args(["log", "I drank some water"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("water amount"));

    assert!(!temp_dir.path().join("data/logs").exists());
}

#[test]
fn test_score_empty_day() {
    let temp_dir = setup_test_dir();

    // Baseline calories, no water or sleep, tracked habit not done
    coachie(temp_dir.path())
        .args(["score", "--date", "2024-01-15", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coachie Score for 2024-01-15: 22"))
        .stdout(predicate::str::contains("No logs for this day yet"));

    assert!(!temp_dir.path().join("data/scores.csv").exists());
}

#[test]
fn test_log_then_score_end_to_end() {
    let temp_dir = setup_test_dir();

    for command in [
        "I drank 2 glasses of water",
        "I slept 8 hours",
        "complete eat breakfast habit",
    ] {
        coachie(temp_dir.path())
            .args(["log", command])
            .assert()
            .success();
    }

    // Calories at baseline, water a quarter of goal, sleep on goal;
    // the only tracked habit is done
    coachie(temp_dir.path())
        .arg("score")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Coachie Score for {}: 67",
            today()
        )))
        .stdout(predicate::str::contains("Health:   60"))
        .stdout(predicate::str::contains("Wellness: 50"))
        .stdout(predicate::str::contains("Habits:   100"));

    let csv = fs::read_to_string(temp_dir.path().join("data/scores.csv"))
        .expect("Failed to read score history");
    assert!(csv.contains(&format!("{},67,60,50,100", today())));
}

#[test]
fn test_steps_count_toward_health() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["log", "I drank 2 glasses of water"])
        .assert()
        .success();
    coachie(temp_dir.path())
        .args(["steps", "6000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Logged 6000 steps"));
    coachie(temp_dir.path())
        .args(["steps", "4000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today: 10000 steps"));

    // Baseline calories, a quarter of the water goal, steps on goal
    coachie(temp_dir.path())
        .args(["score", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health:   34"));
}

#[test]
fn test_score_signals_add_bonuses() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["score", "--date", "2024-01-15", "--no-save", "--circle", "--focus-done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wellness: 60"))
        .stdout(predicate::str::contains("Habits:   10"));
}

#[test]
fn test_rescoring_replaces_history_row() {
    let temp_dir = setup_test_dir();

    coachie(temp_dir.path())
        .args(["score", "--date", "2024-01-15"])
        .assert()
        .success();
    coachie(temp_dir.path())
        .args(["score", "--date", "2024-01-15", "--circle"])
        .assert()
        .success();

    let csv = fs::read_to_string(temp_dir.path().join("data/scores.csv"))
        .expect("Failed to read score history");
    assert_eq!(csv.lines().filter(|l| l.starts_with("2024-01-15")).count(), 1);
    assert!(csv.contains("2024-01-15,25,19,60,0"));
}

#[test]
fn test_streak_from_history() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();

    let today = chrono::Local::now().date_naive();
    let mut csv = String::from("date,daily_score,health_score,wellness_score,habits_score\n");
    for (offset, score) in [(5, 80), (4, 80), (3, 80), (2, 30), (1, 70)] {
        let date = today - chrono::Duration::days(offset);
        csv.push_str(&format!("{},{},50,50,50\n", date.format("%Y-%m-%d"), score));
    }
    fs::write(data_dir.join("scores.csv"), csv).unwrap();

    coachie(temp_dir.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 1 day"))
        .stdout(predicate::str::contains("Longest streak: 3 days"));

    coachie(temp_dir.path())
        .args(["streak", "--threshold", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 0 days"))
        .stdout(predicate::str::contains("Longest streak: 0 days"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[goals]\ncalories = -100.0\n",
    )
    .unwrap();

    coachie(temp_dir.path())
        .args(["score", "--no-save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("goals.calories"));
}
