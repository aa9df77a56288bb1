//! Load configuration from XDG `config.toml` and project `.env`, then apply to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! Keys consumed by the explainer crates: `GEMINI_API_KEY`, `GEMINI_API_URL`,
//! `EXPLAINER_ADDR`, `EXPLAINER_URL`, `RUST_LOG`, `LOG_FILE`.

mod dotenv;
#[cfg(feature = "tracing-init")]
pub mod logging;
mod xdg_toml;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Loads config from XDG `config.toml` and optional project `.env`, then sets environment
/// variables only for keys that are **not** already set.
///
/// * `app_name`: e.g. `"explainer"`, used for `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` there instead of the current directory.
///
/// A source that fails to load counts as empty: the other one is still applied, and the
/// first failure (XDG before `.env`) is returned afterwards.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    apply_sources(xdg_toml::load_env_map(app_name), override_dir)
}

fn apply_sources(
    xdg: Result<HashMap<String, String>, LoadError>,
    override_dir: Option<&Path>,
) -> Result<(), LoadError> {
    let dotenv = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead);
    let (xdg_map, xdg_err) = split(xdg);
    let (dotenv_map, dotenv_err) = split(dotenv);

    let merged = merge(&dotenv_map, &xdg_map, |key| std::env::var_os(key).is_some());
    for (key, value) in merged {
        std::env::set_var(&key, value);
    }

    match xdg_err.or(dotenv_err) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn split(
    loaded: Result<HashMap<String, String>, LoadError>,
) -> (HashMap<String, String>, Option<LoadError>) {
    match loaded {
        Ok(map) => (map, None),
        Err(e) => (HashMap::new(), Some(e)),
    }
}

/// Picks `.env` over XDG for every key, skipping keys for which `is_set` is true.
fn merge(
    dotenv_map: &HashMap<String, String>,
    xdg_map: &HashMap<String, String>,
    is_set: impl Fn(&str) -> bool,
) -> HashMap<String, String> {
    let keys: HashSet<&String> = dotenv_map.keys().chain(xdg_map.keys()).collect();
    keys.into_iter()
        .filter(|key| !is_set(key.as_str()))
        .filter_map(|key| {
            dotenv_map
                .get(key)
                .or_else(|| xdg_map.get(key))
                .map(|v| (key.clone(), v.clone()))
        })
        .collect()
}
