//! Integration tests for the qb CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use qb_store::{DecisionLog, PlayerProfile, PlayerStore};

fn qb() -> Command {
    Command::cargo_bin("qb").unwrap()
}

/// Seed a data directory with one active and one archived profile plus a
/// couple of decisions.
fn seeded_data() -> TempDir {
    let dir = TempDir::new().unwrap();

    let mut store = PlayerStore::open(dir.path()).unwrap();
    let mut kara = PlayerProfile::synthesized("kara-key");
    kara.name = "Kara".into();
    kara.race = "Elf".into();
    kara.class = "Ranger".into();
    store.register(kara).unwrap();
    store.append_history("kara-key", "Follow the tracks").unwrap();

    let mut ghost = PlayerProfile::synthesized("ghost-key");
    ghost.name = "Ghost".into();
    store.register(ghost).unwrap();
    store.archive_and_delete("ghost-key").unwrap();

    let mut log = DecisionLog::open(dir.path().join("decisions.jsonl")).unwrap();
    log.append("kara-key", "Follow the tracks", "A caravan vanished")
        .unwrap();
    log.append("kara-key", "Light a torch", "The cave is dark")
        .unwrap();

    dir
}

// ---------------------------------------------------------------------------
// roster / archive
// ---------------------------------------------------------------------------

#[test]
fn roster_lists_active_players() {
    let dir = seeded_data();
    qb().args(["roster", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Kara"))
        .stdout(predicate::str::contains("Ranger"))
        .stdout(predicate::str::contains("1 active players"));
}

#[test]
fn roster_empty() {
    let dir = TempDir::new().unwrap();
    qb().args(["roster", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No registered players"));
}

#[test]
fn archive_lists_deleted_players() {
    let dir = seeded_data();
    qb().args(["archive", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ghost"))
        .stdout(predicate::str::contains("1 archived players"));
}

#[test]
fn archived_player_not_in_roster() {
    let dir = seeded_data();
    qb().args(["roster", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ghost").not());
}

// ---------------------------------------------------------------------------
// log
// ---------------------------------------------------------------------------

#[test]
fn log_shows_decisions_in_order() {
    let dir = seeded_data();
    qb().args(["log", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("Follow the tracks"))
        .stdout(predicate::str::contains("Light a torch"))
        .stdout(predicate::str::contains("2 of 2 decisions"));
}

#[test]
fn log_count_limits_output() {
    let dir = seeded_data();
    qb().args(["log", "--count", "1", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Follow the tracks").not())
        .stdout(predicate::str::contains("Light a torch"));
}

#[test]
fn log_empty() {
    let dir = TempDir::new().unwrap();
    qb().args(["log", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No decisions recorded"));
}

// ---------------------------------------------------------------------------
// play (scripted via stdin; closed stdin reads as wizard timeouts)
// ---------------------------------------------------------------------------

#[test]
fn play_rolls_and_help() {
    let dir = TempDir::new().unwrap();
    qb().args(["play", "--data"])
        .arg(dir.path())
        .write_stdin("!roll\n!help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20"))
        .stdout(predicate::str::contains("Questbote commands"))
        .stdout(predicate::str::contains("Farewell"));
}

#[test]
fn play_adventure_and_choice_are_logged() {
    let dir = TempDir::new().unwrap();
    qb().args(["play", "--seed", "7", "--data"])
        .arg(dir.path())
        .write_stdin("!adventure\n!choose 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adventure hook:"))
        .stdout(predicate::str::contains("Choices:"))
        .stdout(predicate::str::contains("You chose:"));

    // The choice reached the durable stores.
    qb().args(["log", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"));
    qb().args(["roster", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Adventurer"));
}

#[test]
fn play_register_aborts_on_eof() {
    let dir = TempDir::new().unwrap();
    // Name/race/class steps fall back to random draws on the EOF-timeouts;
    // the skill step aborts the whole run instead.
    qb().args(["play", "--data"])
        .arg(dir.path())
        .write_stdin("!register\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was changed"));

    qb().args(["roster", "--data"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No registered players"));
}

#[test]
fn play_stats_before_registering() {
    let dir = TempDir::new().unwrap();
    qb().args(["play", "--data"])
        .arg(dir.path())
        .write_stdin("!stats\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not registered"));
}
