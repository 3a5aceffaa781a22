mod support;

use predicates::prelude::*;
use support::TestBoard;

#[test]
fn theme_defaults_to_light() {
    let board = TestBoard::new();

    board
        .kanby()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn theme_set_persists_and_reads_back() {
    let board = TestBoard::new();

    board
        .kanby()
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));
    assert!(board.theme_file().exists());

    board
        .kanby()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn theme_rejects_invalid_value() {
    let board = TestBoard::new();

    board
        .kanby()
        .args(["theme", "sepia"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid theme"));
    assert!(!board.theme_file().exists());
}

#[test]
fn theme_works_without_any_board_state() {
    // Theme has its own lifecycle: no cache, unreachable remote, still fine.
    let board = TestBoard::new();

    board.kanby().args(["theme", "dark"]).assert().success();
    assert!(!board.tasks_file().exists());
}

#[test]
fn default_theme_comes_from_config() {
    let board = TestBoard::new();
    board.write_config("default_theme = \"dark\"");

    board
        .kanby()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}
