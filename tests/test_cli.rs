#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_default_run() {
    Command::cargo_bin("invoker")
        .unwrap()
        .assert()
        .success()
        .stdout("[PrintCommand] print test ####\nDog sits\nDog stays\nDog sits\n");
}

#[test]
fn test_custom_run() {
    Command::cargo_bin("invoker")
        .unwrap()
        .args(["--message", "hello", "--actions", "stay,stay"])
        .assert()
        .success()
        .stdout("[PrintCommand] hello\nDog stays\nDog stays\n");
}

#[test]
fn test_verbose_keeps_stdout() {
    Command::cargo_bin("invoker")
        .unwrap()
        .arg("-vv")
        .assert()
        .success()
        .stdout("[PrintCommand] print test ####\nDog sits\nDog stays\nDog sits\n")
        .stderr(predicate::str::contains("invoker"));
}

#[test]
fn test_unknown_action() {
    Command::cargo_bin("invoker")
        .unwrap()
        .args(["--actions", "sit,roll"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unknown dog action `roll`"));
}
