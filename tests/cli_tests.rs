//! CLI tests for the non-interactive modes

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ps1-studio"))
        .args(args)
        .env_remove("PS1_STUDIO_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_print_default_composition() {
    let output = run(&["--print"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        "PS1=\"\\[\\e[1m\\]\\u\\[\\e[0m\\]\\[\\e[2m\\]@\\[\\e[0m\\]\\h \\W \\[\\e[1m\\]\\$\\[\\e[0m\\]\""
    );
}

#[test]
fn test_print_custom_segments() {
    let output = run(&["--segments", "user,at-symbol,host-short", "--print"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "PS1=\"\\u@\\h\"");
}

#[test]
fn test_print_empty_segments() {
    let output = run(&["--segments", "", "--print"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), "PS1=\"\"");
}

#[test]
fn test_list_shows_categories_and_ids() {
    let output = run(&["--list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for needle in ["Classics:", "Symbols:", "Integrations:", "host-short", "k8s"] {
        assert!(stdout.contains(needle), "missing {needle}");
    }
}

#[test]
fn test_list_and_print_conflict() {
    let output = run(&["--list", "--print"]);
    assert!(!output.status.success());
}
