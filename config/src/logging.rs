//! Tracing initialisation shared by the explainer binary.
//!
//! Reads `RUST_LOG` (filter) and `LOG_FILE` (path) from the environment, typically after
//! [`crate::load_and_apply`] has merged `.env`. With `LOG_FILE` set, logs are appended to that
//! file as plain text; otherwise they go to stderr so stdout carries only command output.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Installs the global subscriber. `default_filter` applies when `RUST_LOG` is unset or invalid
/// (e.g. `"info,hyper_util=off"`).
///
/// Calling this twice is not an error: the second call leaves the first subscriber in place.
pub fn init(default_filter: &str) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = match std::env::var("LOG_FILE") {
        Ok(path) if !path.is_empty() => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_filter(filter);
            let ok = tracing_subscriber::registry().with(file_layer).try_init().is_ok();
            if ok {
                tracing::info!(path = %path, "logging to file");
            }
            ok
        }
        _ => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter);
            tracing_subscriber::registry().with(stderr_layer).try_init().is_ok()
        }
    };
    if !installed {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
