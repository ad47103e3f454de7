use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum dataset size: 50MB
const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (50MB)
///
/// Takes an open file handle so the checked file is the one that gets read.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is larger than 50MB.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let file_size = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
        .len();

    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with `~` in place of the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use alumni_explorer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/data/structured_careers.json");
/// // "~/data/structured_careers.json" when the home directory is /home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_with_home(path, dirs::home_dir().as_deref())
}

fn format_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.display().to_string()
}
