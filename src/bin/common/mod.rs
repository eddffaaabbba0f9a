// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::io::Read as _;
use std::path::Path;

use anyhow::Context as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Environment variable selecting the log format (`json` or `compact`).
pub const LOG_FORMAT_ENV: &str = "ROS_IGN_CONVERT_LOG_FORMAT";

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so diagnostics
/// reported during a conversion are visible without extra setup. Logs go to
/// stderr to keep stdout clean for converted messages.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let use_json = std::env::var(LOG_FORMAT_ENV).as_deref() == Ok("json");

    // A second init (e.g. in tests) is not an error worth surfacing.
    let _ = if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}

/// Read the whole input, from a file or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Output data as JSON or execute a custom formatter.
pub fn output_json_or<T, F>(json: bool, data: &T, formatter: F) -> Result<()>
where
    T: serde::Serialize,
    F: FnOnce() -> Result<()>,
{
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    } else {
        formatter()
    }
}
