//! Integration tests for book, show, cancel, reschedule and list.

mod common;

use chrono::Duration;
use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_book_prints_id() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(48));

    env.command()
        .args(["book", "--guest", "1", "--schedule", &schedule.to_string()])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_book_unknown_schedule_fails() {
    let env = TestEnv::new();

    env.command()
        .args(["book", "--guest", "1", "--schedule", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("schedule 42"));
}

#[test]
fn test_show_json_snapshot() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(48));
    let id = env.book(7, schedule);

    let snapshot = env.json(&["show", &id.to_string()]);
    assert_eq!(snapshot["id"], id);
    assert_eq!(snapshot["guestId"], 7);
    assert_eq!(snapshot["scheduleId"], schedule);
    assert_eq!(snapshot["reservationStatus"], "READY_TO_PLAY");
    assert_eq!(snapshot["value"], "10");
    assert_eq!(snapshot["refundValue"], "0");
    assert!(snapshot.get("previousReservation").is_none());
}

#[test]
fn test_show_missing_reservation() {
    let env = TestEnv::new();

    env.command()
        .args(["show", "99"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cancel_with_full_refund() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(48));
    let id = env.book(1, schedule);

    let snapshot = env.json(&["cancel", &id.to_string()]);
    assert_eq!(snapshot["reservationStatus"], "CANCELLED");
    assert_eq!(snapshot["refundValue"], "10");
    assert_eq!(snapshot["value"], "0");
}

#[test]
fn test_cancel_last_minute_refunds_nothing() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(1));
    let id = env.book(1, schedule);

    let snapshot = env.json(&["cancel", &id.to_string()]);
    assert_eq!(snapshot["reservationStatus"], "CANCELLED");
    assert_eq!(snapshot["refundValue"], "0");
    assert_eq!(snapshot["value"], "10");
}

#[test]
fn test_cancel_twice_fails() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(48));
    let id = env.book(1, schedule).to_string();

    env.command().args(["cancel", &id]).assert().success();
    env.command()
        .args(["cancel", &id])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CANCELLED"));
}

#[test]
fn test_cancel_dry_run_changes_nothing() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(6));
    let id = env.book(1, schedule).to_string();

    env.command()
        .args(["cancel", &id, "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"))
        .stderr(predicate::str::contains("refund 5"));

    let snapshot = env.json(&["show", &id]);
    assert_eq!(snapshot["reservationStatus"], "READY_TO_PLAY");
}

#[test]
fn test_reschedule_nests_original() {
    let env = TestEnv::new();
    let first = env.add_schedule(Duration::hours(48));
    let second = env.add_schedule(Duration::hours(72));
    let id = env.book(1, first);

    let moved = env.json(&["reschedule", &id.to_string(), &second.to_string()]);
    assert_eq!(moved["reservationStatus"], "READY_TO_PLAY");
    assert_eq!(moved["scheduleId"], second);
    assert_eq!(moved["value"], "10");
    assert_eq!(moved["previousReservation"]["id"], id);
    assert_eq!(moved["previousReservation"]["reservationStatus"], "RESCHEDULED");
    assert_eq!(moved["previousReservation"]["refundValue"], "10");
    assert_eq!(moved["previousReservation"]["value"], "0");
}

#[test]
fn test_reschedule_to_same_schedule_is_invalid_argument() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(48));
    let id = env.book(1, schedule);

    env.command()
        .args(["reschedule", &id.to_string(), &schedule.to_string()])
        .assert()
        .code(4);
}

#[test]
fn test_reschedule_dry_run() {
    let env = TestEnv::new();
    let first = env.add_schedule(Duration::hours(48));
    let second = env.add_schedule(Duration::hours(72));
    let id = env.book(1, first).to_string();

    env.command()
        .args(["reschedule", &id, &second.to_string(), "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("RESCHEDULED"))
        .stderr(predicate::str::contains(format!("replacing reservation {id}")));

    let list = env.json(&["list"]);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[test]
fn test_list_text_and_filter() {
    let env = TestEnv::new();
    let schedule = env.add_schedule(Duration::hours(48));
    env.book(1, schedule);
    env.book(2, schedule);

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID"))
        .stdout(predicate::str::contains("READY_TO_PLAY"));

    let list = env.json(&["list", "--guest", "2"]);
    let entries = list.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["guestId"], 2);
}

#[test]
fn test_list_empty() {
    let env = TestEnv::new();

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout("No reservations\n");
}
