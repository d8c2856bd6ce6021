//! Environment file loading
//!
//! Priority order (highest to lowest):
//! 1. Variables already set in the environment
//! 2. Current directory .env
//! 3. ~/.loctrack/.env
//!
//! dotenvy never overwrites a variable that is already set.

use std::path::PathBuf;

/// Load .env files, returning the ones that were read.
///
/// Runs before tracing is initialized so RUST_LOG can come from a .env file;
/// call [`log_loaded`] afterwards.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// Report which .env files were loaded.
pub fn log_loaded(loaded: &[PathBuf]) {
    if loaded.is_empty() {
        tracing::debug!("No .env files found (current dir or ~/.loctrack)");
    } else {
        let paths: Vec<String> = loaded.iter().map(|p| p.display().to_string()).collect();
        tracing::info!("Loaded configuration from: {}", paths.join(", "));
    }
}

/// The loctrack config directory (~/.loctrack)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".loctrack"))
}
