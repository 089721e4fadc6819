//! Integration tests for the wordblend CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_vocab(dir: &TempDir, name: &str, words: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, words.join("\n")).unwrap();
    path
}

#[test]
fn generates_blends_from_a_vocabulary_file() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(&temp, "vocab.txt", &["revenge", "vengeance"]);

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("revengeance"));
}

#[test]
fn uppercase_flag_highlights_the_overlap() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(&temp, "vocab.txt", &["revenge", "vengeance"]);

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-u").arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reVENGEance"));
}

#[test]
fn number_flag_caps_the_blend_count() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(&temp, "vocab.txt", &["ama", "oma", "mare", "mask"]);

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-n").arg("1").arg("-q");

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn output_goes_to_a_file_when_requested() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(&temp, "vocab.txt", &["revenge", "vengeance"]);
    let out = temp.path().join("blends.txt");

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-o").arg(&out).arg("-q");

    cmd.assert().success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("revengeance"));
}

#[test]
fn exclusion_vocabulary_rejects_overlaps() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(&temp, "vocab.txt", &["sing", "ingot"]);
    let exclusions = write_vocab(&temp, "suffixes.txt", &["ing"]);

    // Without exclusions the pair blends into "singot".
    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-q");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("singot"));

    // With them, nothing comes out.
    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i")
        .arg(&vocab)
        .arg("-e")
        .arg(&exclusions)
        .arg("-q");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("singot").not());
}

#[test]
fn reads_vocabulary_from_piped_stdin() {
    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-q").write_stdin("revenge\nvengeance\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("revengeance"));
}

#[test]
fn pool_specific_sources_blend_in_one_direction() {
    let temp = TempDir::new().unwrap();
    let first = write_vocab(&temp, "first.txt", &["revenge"]);
    let second = write_vocab(&temp, "second.txt", &["vengeance"]);

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("--w1").arg(&first).arg("--w2").arg(&second).arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("revengeance\n"));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(
        &temp,
        "vocab.txt",
        &["# suffix vocabulary", "", "revenge # sweet", "vengeance"],
    );

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("revengeance"));
}

#[test]
fn missing_vocabulary_file_fails() {
    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg("nonexistent.txt").arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read vocabulary file"));
}

#[test]
fn empty_stdin_produces_no_blends() {
    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-q").write_stdin("");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn depth_flag_raises_the_match_bar() {
    let temp = TempDir::new().unwrap();
    // "task" / "ska" overlap only two characters deep.
    let vocab = write_vocab(&temp, "vocab.txt", &["task", "ska"]);

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-d").arg("3").arg("-q");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn capitalized_words_are_skipped_by_default() {
    let temp = TempDir::new().unwrap();
    let vocab = write_vocab(&temp, "vocab.txt", &["Revenge", "vengeance"]);

    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-q");
    cmd.assert().success().stdout(predicate::str::is_empty());

    // -c lets the capitalized word participate.
    let mut cmd = Command::cargo_bin("wordblend").unwrap();
    cmd.arg("-i").arg(&vocab).arg("-c").arg("-q");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Revengeance"));
}
