//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_server;

use quotecard::ui::quote::QuoteUiState;
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::watch;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait until the receiver holds a `Success` or `Error` state.
pub async fn wait_for_terminal(rx: &mut watch::Receiver<QuoteUiState>) -> QuoteUiState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(QuoteUiState::is_terminal))
        .await
        .expect("timed out waiting for terminal state")
        .map(|state| (*state).clone())
        .expect("presenter dropped")
}
