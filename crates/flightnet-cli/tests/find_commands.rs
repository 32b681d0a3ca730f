use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn run(network: &Path, args: &[&str]) -> Command {
    let mut cmd = cargo_bin_cmd!("flightnet-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--network")
        .arg(network)
        .args(args);
    cmd
}

/// JFK, LHR and LAX with JFK->LHR at `direct_cost`, JFK->LAX 400 and
/// LAX->LHR 450, built entirely through the CLI.
fn prepare(direct_cost: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("create temp dir");
    let network = temp_dir.path().join("network.fnsn");

    let airports = [
        ("JFK", "John F. Kennedy International", "USA", "40.64", "-73.78"),
        ("LHR", "London Heathrow", "UK", "51.47", "-0.45"),
        ("LAX", "Los Angeles International", "USA", "33.94", "-118.41"),
    ];
    for (code, name, country, lat, lon) in airports {
        let lat = format!("--lat={lat}");
        let lon = format!("--lon={lon}");
        run(
            &network,
            &[
                "airport",
                "add",
                code,
                "--name",
                name,
                "--country",
                country,
                lat.as_str(),
                lon.as_str(),
            ],
        )
        .assert()
        .success();
    }
    let routes = [
        ("JFK", "LHR", direct_cost),
        ("JFK", "LAX", "400"),
        ("LAX", "LHR", "450"),
    ];
    for (from, to, cost) in routes {
        run(&network, &["route", "add", from, to, "--cost", cost])
            .assert()
            .success();
    }

    (temp_dir, network)
}

#[test]
fn cheapest_route_prefers_direct_leg() {
    let (_temp, network) = prepare("500");
    run(&network, &["find", "JFK", "LHR"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: JFK -> LHR (1 hop, metric: cost)",
        ))
        .stdout(predicate::str::contains("Total: $500.00"));
}

#[test]
fn expensive_direct_leg_routes_via_lax() {
    let (_temp, network) = prepare("1000");
    run(&network, &["find", "JFK", "LHR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: JFK -> LAX"))
        .stdout(predicate::str::contains("2: LAX -> LHR"))
        .stdout(predicate::str::contains("Total: $850.00"));
}

#[test]
fn distance_metric_takes_the_direct_leg() {
    let (_temp, network) = prepare("1000");
    run(&network, &["find", "JFK", "LHR", "--metric", "distance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("metric: distance"))
        .stdout(predicate::str::contains("Total: $1000.00"));
}

#[test]
fn direct_only_without_direct_route_fails() {
    let (_temp, network) = prepare("500");
    run(&network, &["route", "remove", "JFK", "LHR"])
        .assert()
        .success();

    run(&network, &["find", "JFK", "LHR", "--direct-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between JFK and LHR"));

    run(&network, &["find", "JFK", "LHR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $850.00"));
}

#[test]
fn unknown_endpoint_fails_with_suggestion() {
    let (_temp, network) = prepare("500");
    run(&network, &["find", "JFK", "LHX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown airport code: LHX"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn json_summary_reports_totals() {
    let (_temp, network) = prepare("1000");
    let output = run(&network, &["--format", "json", "find", "JFK", "LHR"])
        .output()
        .expect("run find");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["metric"], "cost");
    assert_eq!(value["hops"], 2);
    assert_eq!(value["totals"]["cost"], 850.0);
    assert_eq!(value["goal"]["name"], "London Heathrow");
}

#[test]
fn rich_format_renders_markdown() {
    let (_temp, network) = prepare("500");
    run(&network, &["--format", "rich", "find", "JFK", "LHR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**JFK**"));
}
