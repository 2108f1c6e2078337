//! CLI integration tests for bb
//!
//! Runs the binary end-to-end with an isolated config directory. Commands
//! that reach Bitbucket are pointed at a mockito server through `BB_API_URL`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Unreachable API base, so default workspace lookups fail fast.
const DEAD_API: &str = "http://127.0.0.1:9";

/// Helper to create a command with an empty config and no credentials
#[allow(deprecated)]
fn bb_cmd(config_dir: &TempDir, api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("bb").unwrap();
    cmd.env("BB_CONFIG_DIR", config_dir.path());
    cmd.env("BB_API_URL", api_url);
    for var in [
        "BB_DEFAULT_WORKSPACE",
        "BB_TOKEN",
        "BB_USERNAME",
        "BB_APP_PASSWORD",
        "ATLASSIAN_BITBUCKET_USERNAME",
        "ATLASSIAN_BITBUCKET_APP_PASSWORD",
        "BB_DEBUG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_pull_request_search_without_repo_is_reported_in_band() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["search", "-q", "bug", "-t", "prs", "-w", "myteam"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Repository is required for pull request search.",
        ));
}

#[test]
fn test_empty_repo_is_reported_in_band() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["search", "-q", "bug", "-t", "prs", "-w", "myteam", "-r", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Repository is required for pull request search.",
        ));
}

#[test]
fn test_unknown_scope_is_reported_in_band() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["search", "-q", "x", "-t", "wiki", "-w", "myteam"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Unknown search scope \"wiki\". Supported types are: code, content, repositories, pullrequests.",
        ));
}

#[test]
fn test_missing_workspace_is_reported_in_band() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["search", "-q", "TODO"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Please provide a workspace to search in",
        ));
}

#[test]
fn test_query_is_required() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["search", "-w", "myteam"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_json_envelope() {
    let dir = TempDir::new().unwrap();

    let output = bb_cmd(&dir, DEAD_API)
        .args(["--json", "search", "-q", "bug", "-t", "prs", "-w", "myteam"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        envelope["content"],
        "Error: Repository is required for pull request search."
    );
}

#[test]
fn test_configured_default_workspace_is_used() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["config", "set", "default_workspace", "myteam"])
        .assert()
        .success();

    bb_cmd(&dir, DEAD_API)
        .args(["config", "get", "default_workspace"])
        .assert()
        .success()
        .stdout(predicate::str::diff("myteam\n"));

    // Passing the workspace check proves the configured value was picked up.
    bb_cmd(&dir, DEAD_API)
        .args(["search", "-q", "bug", "-t", "prs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Repository is required for pull request search.",
        ));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key 'editor'"));
}

#[test]
fn test_code_search_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/workspaces/myteam/search/code")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("search_query".into(), "TODO ext:rs".into()),
            mockito::Matcher::UrlEncoded("pagelen".into(), "20".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "size": 2, "page": 1, "pagelen": 20,
                "next": "https://api.bitbucket.org/2.0/workspaces/myteam/search/code?page=2",
                "values": [{
                    "content_match_count": 1,
                    "content_matches": [{"lines": [{"line": 12, "segments": [
                        {"text": "// "}, {"text": "TODO", "match": true}, {"text": " tidy"}
                    ]}]}],
                    "file": {"path": "src/lib.rs",
                             "commit": {"repository": {"full_name": "myteam/api"}}}
                }]
            }"#,
        )
        .create();

    bb_cmd(&dir, &server.url())
        .args(["search", "-q", "TODO", "-w", "myteam", "-e", "rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Code Search Results: \"TODO\""))
        .stdout(predicate::str::contains("- Line 12: // **TODO** tidy"))
        .stdout(predicate::str::contains("*Showing 1 of 2 results*"))
        .stdout(predicate::str::contains("Next page cursor: 2"));

    mock.assert();
}

#[test]
fn test_upstream_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/repositories/ghost")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body(r#"{"type": "error", "error": {"message": "No workspace with identifier 'ghost'."}}"#)
        .create();

    bb_cmd(&dir, &server.url())
        .args(["search", "-q", "api", "-t", "repos", "-w", "ghost"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("No workspace with identifier 'ghost'."));
}

#[test]
fn test_tool_list() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["tool", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("create_pull_request_comment"));
}

#[test]
fn test_tool_schema() {
    let dir = TempDir::new().unwrap();

    let output = bb_cmd(&dir, DEAD_API)
        .args(["tool", "schema", "search"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"]["repoSlug"].is_object());
    assert!(schema["properties"]["query"].is_object());
}

#[test]
fn test_tool_validate_reports_repo_requirement() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args([
            "tool",
            "validate",
            "search",
            "--args",
            r#"{"query": "bug", "scope": "pullrequests"}"#,
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            r#"repoSlug: repoSlug is required when scope is "pullrequests""#,
        ));
}

#[test]
fn test_tool_validate_accepts_valid_payload() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["tool", "validate", "search", "--args", r#"{"query": "TODO"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments are valid for search"));
}

#[test]
fn test_tool_validate_unknown_tool() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args(["tool", "validate", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tool \"nope\""));
}

#[test]
fn test_tool_call_validates_before_dispatch() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args([
            "tool",
            "call",
            "search",
            "--args",
            r#"{"query": "bug", "scope": "pullrequests", "workspaceSlug": "myteam"}"#,
        ])
        .assert()
        .code(2);
}

#[test]
fn test_tool_call_search_runs_controller() {
    let dir = TempDir::new().unwrap();

    bb_cmd(&dir, DEAD_API)
        .args([
            "tool",
            "call",
            "search",
            "--args",
            r#"{"query": "TODO"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Please provide a workspace"));
}
