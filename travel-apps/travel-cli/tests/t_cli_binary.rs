//!  Travel CLI
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.


//! Command line surface tests. These run the built binary but never reach the
//! flight service: every case either exits during argument validation or
//! points the service command at a program that does not exist.

use std::process::Output;

use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(30);
const MISSING_SERVER: &str = "/nonexistent/travel-cli-test-server --stdio";

async fn run_cli(args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_travel-cli"));
    cmd.args(args)
        .env("TRAVEL_CLI_MCP_SERVER", MISSING_SERVER)
        .env("RUST_LOG", "warn")
        .kill_on_drop(true);
    tokio::time::timeout(TIMEOUT, cmd.output())
        .await
        .context("travel-cli did not exit in time")?
        .context("Failed to run travel-cli")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn test_help_lists_subcommands() -> Result<()> {
    let output = run_cli(&["--help"]).await?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["search", "roundtrip", "compare", "quick"] {
        assert!(stdout.contains(subcommand), "missing {subcommand} in:\n{stdout}");
    }
    Ok(())
}

#[tokio::test]
async fn test_version() -> Result<()> {
    let output = run_cli(&["--version"]).await?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[tokio::test]
async fn test_quick_requires_destination() -> Result<()> {
    let output = run_cli(&["quick", "blr"]).await?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Usage: travel-cli quick"));
    Ok(())
}

#[tokio::test]
async fn test_quick_rejects_unknown_date_word() -> Result<()> {
    let output = run_cli(&["quick", "blr-del yesterday"]).await?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid date"));
    Ok(())
}

#[tokio::test]
async fn test_search_rejects_bad_date() -> Result<()> {
    let output = run_cli(&["search", "-f", "BLR", "-t", "DEL", "-d", "2026-13-45"]).await?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid search"));
    Ok(())
}

#[tokio::test]
async fn test_roundtrip_rejects_return_before_departure() -> Result<()> {
    let args = ["roundtrip", "-f", "BLR", "-t", "SFO", "-d", "2026-12-20", "-r", "2026-12-01"];
    let output = run_cli(&args).await?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid search"));
    Ok(())
}

#[tokio::test]
async fn test_zero_passengers_is_a_usage_error() -> Result<()> {
    let args = ["search", "-f", "BLR", "-t", "DEL", "-d", "2026-11-02", "-p", "0"];
    let output = run_cli(&args).await?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("passengers"));
    Ok(())
}

#[tokio::test]
async fn test_missing_server_program() -> Result<()> {
    let args = ["search", "-f", "BLR", "-t", "DEL", "-d", "2026-11-02"];
    let output = run_cli(&args).await?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Failed to start flight service"));
    Ok(())
}
