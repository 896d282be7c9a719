#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::core::clock::{self, ClockAction, ClockPolicy, Ledger, Outcome};
use rattendance::models::actor::{Actor, Role};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so a real user
/// configuration never leaks into the tests.
pub fn rti() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rattendance_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Init the DB (test mode) and log in `id`/`name` as an employee.
pub fn init_and_login(db_path: &str, id: &str, name: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rti()
        .args(["--db", db_path, "login", "--id", id, "--name", name])
        .assert()
        .success();
}

/// Run a clock command at a pinned instant.
pub fn clock_at(db_path: &str, now: &str, command: &str) -> assert_cmd::assert::Assert {
    rti()
        .args(["--db", db_path, "--now", now, command])
        .assert()
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, s).unwrap()
}

pub fn alice() -> Actor {
    Actor::new("E001", "Alice", Role::Employee)
}

pub fn bob() -> Actor {
    Actor::new("E002", "Bob", Role::Employee)
}

/// Apply a sequence of actions, each expected to be accepted.
pub fn run_accepted(
    mut ledger: Ledger,
    actor: &Actor,
    steps: &[(ClockAction, NaiveDateTime)],
    policy: &ClockPolicy,
) -> Ledger {
    for (action, now) in steps {
        let (next, outcome) = clock::apply(&ledger, actor, *action, *now, policy);
        assert!(
            matches!(outcome, Outcome::Accepted { .. }),
            "{:?} at {} was rejected: {}",
            action,
            now,
            outcome.message()
        );
        ledger = next;
    }
    ledger
}
