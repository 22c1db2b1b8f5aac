//! Integration tests for the menu binary.
//!
//! Input is piped, so key waits and screen clears are skipped and the
//! output is plain text.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn menu_demo() -> Command {
    Command::cargo_bin("menu-demo").expect("failed to find menu-demo binary")
}

#[test]
fn test_menu_lists_every_command() {
    menu_demo()
        .write_stdin("Exit\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Please choose an action:\n\n"))
        .stdout(predicate::str::contains("[1]:    Eat Candy\n"))
        .stdout(predicate::str::contains("[2]:    Go Fishing\n"))
        .stdout(predicate::str::contains("[3]:    Play Basketball\n"))
        .stdout(predicate::str::contains("[4]:    Exit\n"))
        .stdout(predicate::str::contains("[5]").not())
        .stdout(predicate::str::contains("Enter your selection: "));
}

#[test]
fn test_action_is_confirmed() {
    menu_demo()
        .write_stdin("EatCandy\nExit\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You chose to Eat Candy."))
        .stdout(predicate::str::contains("Press any key to continue..."));
}

#[test]
fn test_declined_exit_shows_menu_again() {
    menu_demo()
        .write_stdin("Exit\nN\nExit\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("exit the application? (Y/N): ").count(2))
        .stdout(predicate::str::contains("Please choose an action:").count(2))
        .stdout(predicate::str::contains("Press any key").not());
}

#[test]
fn test_confirmed_exit_terminates_cleanly() {
    menu_demo()
        .write_stdin("Exit\nY\n")
        .assert()
        .code(0)
        .stdout(predicate::str::ends_with("Exiting the application...\n"));
}

#[test]
fn test_unknown_input_is_invalid_choice() {
    menu_demo()
        .write_stdin("banana\n1\nExit\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again.").count(2))
        .stdout(predicate::str::contains("You chose to").not());
}

#[test]
fn test_closed_input_fails() {
    menu_demo()
        .write_stdin("GoFishing\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("You chose to Go Fishing."))
        .stderr(predicate::str::contains("console failure"));
}
