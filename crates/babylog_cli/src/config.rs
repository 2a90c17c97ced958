//! Runtime configuration for the CLI.
//!
//! # Responsibility
//! - Resolve the data directory from flag, environment and platform default.
//! - Derive database and log locations from it.
//!
//! # Invariants
//! - Resolved directories are absolute.

use std::path::{Path, PathBuf};

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "BABYLOG_DATA_DIR";
const APP_DIR_NAME: &str = "babylog";
const DB_FILE_NAME: &str = "babylog.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Resolved locations and switches for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub logging_enabled: bool,
    pub ephemeral: bool,
}

impl AppConfig {
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

/// Picks the data directory: explicit flag, then `BABYLOG_DATA_DIR`, then the
/// platform data directory, then the temp directory.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    let from_env = std::env::var(DATA_DIR_ENV).ok();
    let candidate = choose_data_dir(flag, from_env.as_deref(), dirs::data_dir());
    absolutize(candidate)
}

fn choose_data_dir(flag: Option<&Path>, env: Option<&str>, platform: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag.filter(|path| !path.as_os_str().is_empty()) {
        return path.to_path_buf();
    }
    if let Some(raw) = env.map(str::trim).filter(|raw| !raw.is_empty()) {
        return PathBuf::from(raw);
    }
    platform
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR_NAME))
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}
