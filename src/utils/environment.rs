use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Environment variable naming the dataset file
pub const DATA_ENV_VAR: &str = "ALUMNI_EXPLORER_DATA";
/// File name looked up in the working directory and the platform data directory
pub const DEFAULT_DATASET_FILE: &str = "structured_careers.json";

/// Log file name used by the browser when no `--log-file` is given
pub const BROWSE_LOG_FILE: &str = "browse.log";

/// Resolve the dataset path.
///
/// Precedence: explicit `--data` path, then `ALUMNI_EXPLORER_DATA`, then
/// `structured_careers.json` in the current directory, then
/// `<data dir>/alumni-explorer/structured_careers.json`. The last two are only used if the
/// file exists.
pub fn resolve_data_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let from_env = env::var(DATA_ENV_VAR).ok();
    let data_dir = dirs::data_dir().map(|dir| dir.join("alumni-explorer"));

    resolve_with(explicit, from_env.as_deref(), &cwd, data_dir.as_deref())
}

/// Where the browser logs by default, since stderr shares its terminal:
/// `<local data dir>/alumni-explorer/browse.log`, or the temp directory without one
pub fn default_browse_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("alumni-explorer"))
        .unwrap_or_else(env::temp_dir)
        .join(BROWSE_LOG_FILE)
}

/// Resolution with every input injected (for testing)
pub(crate) fn resolve_with(
    explicit: Option<&Path>,
    from_env: Option<&str>,
    cwd: &Path,
    data_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(value) = from_env.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }

    let local = cwd.join(DEFAULT_DATASET_FILE);
    if local.is_file() {
        return Ok(local);
    }

    if let Some(dir) = data_dir {
        let candidate = dir.join(DEFAULT_DATASET_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    bail!(
        "No dataset found: pass --data <PATH>, set {}, or place {} in the current directory",
        DATA_ENV_VAR,
        DEFAULT_DATASET_FILE
    )
}
