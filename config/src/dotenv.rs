//! Parse a project `.env` file into a key-value map. Nothing is written to the process env here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` inside `override_dir` if given, else inside the current directory. `None` when absent.
fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Strips one pair of matching surrounding quotes. Double quotes honour `\"`.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].replace("\\\"", "\"");
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

/// Line-oriented parser: `KEY=VALUE` or `export KEY=VALUE`.
///
/// Blank lines and lines starting with `#` are skipped; `#` inside a value is kept.
/// Lines without `=` or with an empty key are ignored. No multiline values.
pub(crate) fn parse_dotenv(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (k, v) = line.split_once('=')?;
            let key = k.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(v.trim())))
        })
        .collect()
}

/// Loads `.env` into a map. A missing file is an empty map, not an error.
pub fn load_env_map(override_dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    let Some(path) = dotenv_path(override_dir) else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path)?;
    Ok(parse_dotenv(&content))
}
