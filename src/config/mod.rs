use std::time::Duration;

use crate::errors::{ReaderError, ReaderResult};
use crate::services::loader::{ErrorPolicy, LoadPolicy};

#[derive(Debug, Clone)]
pub struct Config {
    pub timeout_secs: u64,
    pub on_error: ErrorPolicy,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> ReaderResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let timeout_secs = match std::env::var("READER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ReaderError::Config(format!("READER_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => 30,
        };

        let on_error = match std::env::var("READER_ON_ERROR") {
            Ok(raw) => raw.parse::<ErrorPolicy>().map_err(ReaderError::Config)?,
            Err(_) => ErrorPolicy::KeepPrevious,
        };

        Ok(Self {
            timeout_secs,
            on_error,
        })
    }

    pub fn load_policy(&self) -> LoadPolicy {
        LoadPolicy {
            timeout: Duration::from_secs(self.timeout_secs),
            on_error: self.on_error,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            on_error: ErrorPolicy::KeepPrevious,
        }
    }
}
