//! Tests for the `quotecard` binary's command line.

mod common;

use common::mock_server::{MockQuoteServer, MockResponse};
use std::process::{Command, Output};

fn quotecard_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quotecard"))
}

async fn run_blocking(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .unwrap()
}

#[test]
fn test_help_lists_options() {
    let output = quotecard_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--once"));
    assert!(stdout.contains("--id"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = quotecard_cmd()
        .args(["--once", "--config", "/nonexistent/quotecard.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config file '/nonexistent/quotecard.toml' not found"));
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let (_dir, path) = common::temp_config("");
    let output = quotecard_cmd()
        .args(["--once", "--base-url", "ftp://example.com", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_once_prints_quote() {
    let mock = MockQuoteServer::start().await;
    mock.enqueue_response(MockResponse::quote(5, "Stay hungry.", "Steve Jobs"))
        .await;
    let (_dir, path) = common::temp_config("");

    let base_url = mock.base_url();
    let mut cmd = quotecard_cmd();
    cmd.args(["--once", "--id", "5", "--base-url", base_url.as_str(), "--config"])
        .arg(&path);
    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "“Stay hungry.”\n- Steve Jobs");
    assert_eq!(mock.captured_requests().await[0].path, "/quotes/5");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_once_reports_fetch_failure() {
    let mock = MockQuoteServer::start().await;
    let (_dir, path) = common::temp_config("");

    let base_url = mock.base_url();
    let mut cmd = quotecard_cmd();
    cmd.args(["--once", "--base-url", base_url.as_str(), "--config"])
        .arg(&path);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error getting quote: server returned 404"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_flags_override_invalid_config_values() {
    let mock = MockQuoteServer::start().await;
    mock.enqueue_response(MockResponse::quote(3, "Less is more.", "Mies van der Rohe"))
        .await;
    let (_dir, path) = common::temp_config(
        "[api]\nbase_url = \"not-a-url\"\n\n[ui]\ninitial_quote_id = 0\n",
    );

    let base_url = mock.base_url();
    let mut cmd = quotecard_cmd();
    cmd.args(["--once", "--id", "3", "--base-url", base_url.as_str(), "--config"])
        .arg(&path);
    let output = run_blocking(cmd).await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(mock.captured_requests().await[0].path, "/quotes/3");
}
