//! Integration tests for the algoviz CLI
//!
//! These tests run the algoviz binary and check its output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for algoviz, isolated from any user config
fn algoviz() -> Command {
    let mut cmd = cargo_bin_cmd!("algoviz");
    cmd.env("ALGOVIZ_CONFIG_DIR", "/nonexistent/algoviz-tests")
        .env_remove("ALGOVIZ_SPEED")
        .env_remove("ALGOVIZ_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_lists_commands() {
    algoviz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: algoviz"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("bst"))
        .stdout(predicate::str::contains("sort"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn test_version_flag() {
    algoviz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("algoviz"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    algoviz()
        .args(["--format", "xml", "nodes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_format_flag_accepts_json_after_subcommand() {
    let json = stdout_json(algoviz().args(["nodes", "--format", "json", "--quiet"]));
    assert!(json["nodes"].is_array());
}

// ============================================================================
// Campus graph
// ============================================================================

#[test]
fn test_nodes_human() {
    algoviz()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Campus locations (6):"))
        .stdout(predicate::str::contains("Main Gate (100, 250)"))
        .stdout(predicate::str::contains("Library (150m)"));
}

#[test]
fn test_nodes_json() {
    let json = stdout_json(algoviz().args(["nodes", "--format", "json"]));
    assert_eq!(json["edge_count"], 16);
    assert_eq!(json["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(json["nodes"][0]["name"], "Main Gate");
}

#[test]
fn test_path_dijkstra() {
    algoviz()
        .args(["path", "Main Gate", "Sports Complex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra's Algorithm"))
        .stdout(predicate::str::contains(
            "Route: Main Gate -> Library -> Sports Complex",
        ))
        .stdout(predicate::str::contains("Distance: 350 meters"));
}

#[test]
fn test_path_bfs_reports_hops_and_meters() {
    algoviz()
        .args(["path", "Main Gate", "Sports Complex", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS Algorithm"))
        .stdout(predicate::str::contains("2 hops (350m actual distance)"));
}

#[test]
fn test_path_json() {
    let json = stdout_json(algoviz().args([
        "--format",
        "json",
        "path",
        "MCA Department",
        "Sports Complex",
    ]));
    assert_eq!(json["distance"], 300);
    assert_eq!(
        json["path"],
        serde_json::json!(["MCA Department", "Cafeteria", "Sports Complex"])
    );
    assert_eq!(json["kind"], "dijkstra");
}

#[test]
fn test_path_animated_with_zero_speed() {
    algoviz()
        .args(["path", "Library", "Cafeteria", "--animate", "--speed", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visit  1: Library"))
        .stdout(predicate::str::contains("walk: Library -> Cafeteria"));
}

#[test]
fn test_path_unknown_node_is_data_error() {
    algoviz()
        .args(["path", "Main Gate", "Moon Base"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found: Moon Base"));
}

#[test]
fn test_path_unknown_node_json_envelope() {
    let output = algoviz()
        .args(["--format", "json", "path", "Nowhere", "Library"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "not_found");
}

#[test]
fn test_invalid_algorithm_is_usage_error() {
    algoviz()
        .args(["--format", "json", "path", "Library", "Cafeteria", "--algorithm", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage_error"));
}

// ============================================================================
// Binary search tree
// ============================================================================

#[test]
fn test_bst_preorder() {
    algoviz()
        .args(["bst", "50", "30", "70", "20", "40", "60", "80", "--traverse", "preorder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value 80 inserted successfully!"))
        .stdout(predicate::str::contains(
            "Preorder: 50 -> 30 -> 20 -> 40 -> 70 -> 60 -> 80",
        ))
        .stdout(predicate::str::contains("Preorder traversal completed!"));
}

#[test]
fn test_bst_rejects_batch_with_out_of_range_value() {
    algoviz()
        .args(["bst", "5", "500"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("inserted successfully").not())
        .stderr(predicate::str::contains("500"));
}

#[test]
fn test_bst_echoes_parsed_values() {
    algoviz()
        .args(["bst", "+5", "007"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value 5 inserted successfully!"))
        .stdout(predicate::str::contains("Value 7 inserted successfully!"))
        .stdout(predicate::str::contains("Value 007").not());
}

#[test]
fn test_bst_non_integer_value() {
    algoviz()
        .args(["bst", "12", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn test_bst_sample_search() {
    algoviz()
        .args(["bst", "--sample", "1", "--search", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value 60 found!"));

    algoviz()
        .args(["bst", "--sample", "3", "--search", "65"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value 65 not found!"));
}

#[test]
fn test_bst_unknown_sample() {
    algoviz().args(["bst", "--sample", "9"]).assert().code(2);
}

#[test]
fn test_bst_json_layout() {
    let json = stdout_json(algoviz().args([
        "--format",
        "json",
        "bst",
        "50",
        "30",
        "--traverse",
        "inorder",
    ]));
    let positions = json["layout"]["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0]["value"], 50);
    assert_eq!(positions[0]["x"], 400.0);
    assert_eq!(positions[0]["y"], 80.0);
    assert_eq!(positions[1]["side"], "left");
    assert_eq!(json["traversal"]["values"], serde_json::json!([30, 50]));
    assert_eq!(json["inserted"][1]["value"], 30);
    assert_eq!(json["inserted"][1]["id"], 1);
}

// ============================================================================
// Quicksort
// ============================================================================

#[test]
fn test_sort_given_values() {
    algoviz()
        .args(["sort", "--values", "50,40,30,20,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Array: [50, 40, 30, 20, 10]"))
        .stdout(predicate::str::contains("comparisons!"))
        .stdout(predicate::str::contains("Result: [10, 20, 30, 40, 50]"));
}

#[test]
fn test_sort_trace_prints_steps() {
    algoviz()
        .args(["sort", "--values", "30,10,20,40,50", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pivot a[4] = 50"))
        .stdout(predicate::str::contains("compare a[0] with a[4]"));
}

#[test]
fn test_sort_json_trace() {
    let json = stdout_json(algoviz().args([
        "--format",
        "json",
        "sort",
        "--values",
        "30,10,20,40,50",
        "--trace",
    ]));
    assert_eq!(json["values"], serde_json::json!([10, 20, 30, 40, 50]));
    assert_eq!(json["cancelled"], false);
    let frames = json["frames"].as_array().unwrap();
    assert_eq!(frames.last().unwrap()["event"], "finished");
    assert_eq!(frames[0]["event"], "pivot-selected");
}

#[test]
fn test_sort_seed_is_reproducible() {
    let first = stdout_json(algoviz().args(["--format", "json", "sort", "--seed", "42"]));
    let second = stdout_json(algoviz().args(["--format", "json", "sort", "--seed", "42"]));
    assert_eq!(first["initial"], second["initial"]);
    assert_eq!(first["initial"].as_array().unwrap().len(), 20);
}

#[test]
fn test_sort_size_out_of_range() {
    algoviz()
        .args(["sort", "--size", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("array size"));
}

#[test]
fn test_sort_element_out_of_range() {
    algoviz()
        .args(["sort", "--values", "50,40,300,20,10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("array element"));
}

#[test]
fn test_sort_size_and_values_conflict() {
    algoviz()
        .args(["sort", "--size", "8", "--values", "10,20,30,40,50"])
        .assert()
        .code(2);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[sort]\ndefault_size = 8\n").unwrap();

    let json = stdout_json(algoviz().args([
        "--format",
        "json",
        "--config",
        path.to_str().unwrap(),
        "sort",
        "--seed",
        "1",
    ]));
    assert_eq!(json["initial"].as_array().unwrap().len(), 8);
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[bst]\nmin_value = 1\nmax_value = 1000\n",
    )
    .unwrap();

    algoviz()
        .env("ALGOVIZ_CONFIG_DIR", dir.path())
        .args(["bst", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value 500 inserted successfully!"));
}

#[test]
fn test_invalid_config_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bst]\nmin_value = 10\nmax_value = 1\n").unwrap();

    algoviz()
        .args(["--config", path.to_str().unwrap(), "nodes"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    algoviz()
        .args([
            "--config",
            dir.path().join("absent.toml").to_str().unwrap(),
            "nodes",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

// ============================================================================
// Interactive shell
// ============================================================================

#[test]
fn test_shell_keeps_state_between_commands() {
    algoviz()
        .arg("shell")
        .write_stdin("insert 50 30 70\ntraverse inorder\nsearch 30\nclear\ntree\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inorder: 30 -> 50 -> 70"))
        .stdout(predicate::str::contains("Value 30 found!"))
        .stdout(predicate::str::contains("BST cleared!"))
        .stdout(predicate::str::contains("Tree is empty"));
}

#[test]
fn test_shell_reports_errors_and_continues() {
    algoviz()
        .arg("shell")
        .write_stdin("insert abc\ninsert 10\npath Library ->\ndance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Value 10 inserted successfully!"))
        .stderr(predicate::str::contains("please enter a destination"))
        .stderr(predicate::str::contains("unknown command 'dance'"));
}

#[test]
fn test_shell_path_and_sort() {
    algoviz()
        .arg("shell")
        .write_stdin("path bfs Main Gate -> Cafeteria\nresize 5\nsort\nreset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: Main Gate -> Library -> Cafeteria"))
        .stdout(predicate::str::contains("comparisons!"))
        .stdout(predicate::str::contains("Array reset!"));
}
