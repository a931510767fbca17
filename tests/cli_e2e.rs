use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stash_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("simplestash").unwrap();
    // NO_COLOR keeps assertions on plain text even if a CI shell looks
    // enough like a terminal to enable styling.
    cmd.env("SIMPLESTASH_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn write_store(home: &Path, content: &str) {
    fs::write(home.join(".simplestash.yml"), content).unwrap();
}

fn read_store(home: &Path) -> String {
    fs::read_to_string(home.join(".simplestash.yml")).unwrap()
}

#[test]
fn no_arguments_shows_help_and_never_creates_the_store() {
    let home = TempDir::new().unwrap();
    stash_cmd(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("forgotten to enter an argument"))
        .stdout(predicate::str::contains("simplestash new"));
    assert!(!home.path().join(".simplestash.yml").exists());
}

#[test]
fn unknown_verb_shows_help_with_exit_zero() {
    let home = TempDir::new().unwrap();
    stash_cmd(home.path())
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("don't seem quite right"));
    assert!(!home.path().join(".simplestash.yml").exists());
}

#[test]
fn extra_arguments_show_help_with_exit_zero() {
    let home = TempDir::new().unwrap();
    stash_cmd(home.path())
        .args(["list", "cp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("don't seem quite right"));
}

#[test]
fn help_verb_prints_usage_without_touching_the_store() {
    let home = TempDir::new().unwrap();
    stash_cmd(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in help utility"));
    assert!(!home.path().join(".simplestash.yml").exists());
}

#[test]
fn first_run_new_onboards_and_stashes_the_link() {
    let home = TempDir::new().unwrap();
    stash_cmd(home.path())
        .arg("new")
        .write_stdin("y\n#Home:https://example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You're all set"))
        .stdout(predicate::str::contains("Link added!"));

    let store = read_store(home.path());
    assert!(store.contains("firstlaunch: false"));
    assert!(store.contains("Home: https://example.com"));
}

#[test]
fn declining_first_run_exits_with_remediation() {
    let home = TempDir::new().unwrap();
    stash_cmd(home.path())
        .arg("list")
        .write_stdin("n\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    assert!(!home.path().join(".simplestash.yml").exists());
}

#[test]
fn new_reprompts_until_the_syntax_is_right() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "firstlaunch: false\nlinks: {}\n");

    stash_cmd(home.path())
        .arg("new")
        .write_stdin("bad input\n#X:y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrong input syntax"))
        .stdout(predicate::str::contains("Link added!"));

    assert!(read_store(home.path()).contains("X: y"));
}

#[test]
fn new_with_no_valid_line_leaves_the_store_alone() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "firstlaunch: false\nlinks: {}\n");

    stash_cmd(home.path())
        .arg("new")
        .write_stdin("bad input\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No link added."));

    assert_eq!(read_store(home.path()), "firstlaunch: false\nlinks: {}\n");
}

#[test]
fn new_overwrites_a_duplicate_label() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "firstlaunch: false\nlinks:\n  A: u1\n  B: u2\n");

    stash_cmd(home.path())
        .arg("new")
        .write_stdin("#A:u9\n")
        .assert()
        .success();

    let store = read_store(home.path());
    assert!(store.contains("A: u9"));
    assert!(!store.contains("A: u1"));
    // Overwriting keeps the label in its original slot.
    assert!(store.find("A: u9").unwrap() < store.find("B: u2").unwrap());
}

#[test]
fn list_renders_each_link_once_in_insertion_order() {
    let home = TempDir::new().unwrap();
    write_store(
        home.path(),
        "firstlaunch: false\nlinks:\n  Docs: https://docs.example.com\n",
    );

    stash_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Links"))
        .stdout(predicate::str::contains("• Docs -> https://docs.example.com").count(1));
}

#[test]
fn list_keeps_insertion_order() {
    let home = TempDir::new().unwrap();
    write_store(
        home.path(),
        "firstlaunch: false\nlinks:\n  Zulu: u1\n  Alpha: u2\n",
    );

    let output = stash_cmd(home.path()).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("Zulu").unwrap() < stdout.find("Alpha").unwrap());
}

#[test]
fn list_on_empty_store_still_prints_the_header() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "firstlaunch: false\nlinks: {}\n");

    stash_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Links"))
        .stdout(predicate::str::contains("No links stashed yet."));
}

#[test]
fn list_twice_produces_identical_output() {
    let home = TempDir::new().unwrap();
    write_store(
        home.path(),
        "firstlaunch: false\nlinks:\n  A: u1\n  B: u2\n",
    );

    let first = stash_cmd(home.path()).arg("list").output().unwrap();
    let second = stash_cmd(home.path()).arg("list").output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cp_on_empty_store_refuses_gracefully() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "firstlaunch: false\nlinks: {}\n");

    stash_cmd(home.path())
        .arg("cp")
        .assert()
        .success()
        .stdout(predicate::str::contains("No links to copy yet"));

    // Copy never mutates the store.
    assert_eq!(read_store(home.path()), "firstlaunch: false\nlinks: {}\n");
}

#[test]
fn corrupt_store_fails_with_remediation() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), ":: not yaml {");

    stash_cmd(home.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn store_missing_required_key_is_corrupt() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "links: {}\n");

    stash_cmd(home.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn hand_edited_key_order_is_tolerated() {
    let home = TempDir::new().unwrap();
    write_store(
        home.path(),
        "links:\n  Docs: https://docs.example.com\nfirstlaunch: false\n",
    );

    stash_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Docs -> https://docs.example.com"));
}

#[test]
fn deferred_verbs_report_not_finished() {
    let home = TempDir::new().unwrap();
    for verb in ["reset", "viewlog"] {
        stash_cmd(home.path())
            .arg(verb)
            .assert()
            .success()
            .stdout(predicate::str::contains("not finished yet"));
    }
    assert!(!home.path().join(".simplestash.yml").exists());
}

#[test]
fn commands_append_to_the_debug_log() {
    let home = TempDir::new().unwrap();
    write_store(home.path(), "firstlaunch: false\nlinks: {}\n");

    stash_cmd(home.path()).arg("list").assert().success();

    let log = fs::read_to_string(home.path().join(".simplestash.log")).unwrap();
    assert!(log.contains("verb 'list'"));
}
