#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::process::Command;
use std::process::Output;

fn run_model(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quince-solver"))
        .args(args)
        .output()
        .expect("the solver binary can be started")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn colour_model_prints_a_colour_per_country() {
    let output = run_model(&["color"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for country in ["Belgium", "Denmark", "France", "Germany", "Netherlands", "Luxembourg"] {
        assert!(stdout.contains(&format!("{country}:")), "{stdout}");
    }
}

#[test]
fn knapsack_model_proves_optimality() {
    let output = run_model(&["knapsack"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Total value:"), "{stdout}");
    assert!(stdout.contains("The selection is optimal"), "{stdout}");
}

#[test]
fn statistics_are_logged_with_the_configured_prefix() {
    let output = run_model(&["knapsack", "--log-statistics"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("%% quince-stat: numNodes="), "{stdout}");
}

#[test]
fn missing_instance_file_fails() {
    let output = run_model(&["facility", "--data", "/nonexistent/facility.txt"]);

    assert!(!output.status.success());
}

#[test]
fn allocation_without_cells_uses_no_frequencies() {
    let output = run_model(&["allocation", "--cells", "0"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("No solution"), "{stdout}");
    assert!(stdout.contains("Total # of frequencies 0"), "{stdout}");
}

#[test]
fn facility_count_model_opens_facilities_within_their_capacity() {
    let output = run_model(&["facility-count"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Optimal value:"), "{stdout}");

    let capacities = [3, 2, 3, 2, 3];
    let mut served = 0;
    for line in stdout.lines().filter(|line| line.starts_with("Facility ")) {
        let location = line
            .split_whitespace()
            .nth(1)
            .and_then(|location| location.parse::<usize>().ok())
            .expect("a location index");
        let stores = line
            .split("serves stores")
            .nth(1)
            .map(|stores| stores.split_whitespace().count())
            .expect("a list of stores");

        assert!(stores <= capacities[location], "{stdout}");
        served += stores;
    }
    assert_eq!(served, 8, "{stdout}");
}

#[test]
fn facility_count_model_logs_progress_every_node() {
    let output = run_model(&["facility-count", "--verbose"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.lines().filter(|line| line.starts_with("% ")).count() > 8, "{stdout}");
}
