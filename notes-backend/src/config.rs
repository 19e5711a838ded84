use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "NOTES_PORT";
    pub const CACHE_DIR: &str = "NOTES_CACHE_DIR";
}

/// Default values
pub mod defaults {
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const STATIC_DIR: &str = "static";
}

/// Returns the absolute path to the notes-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it resolves the same way
/// regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the directory holding static pages (the upload form)
pub fn static_dir() -> PathBuf {
    backend_dir().join(defaults::STATIC_DIR)
}

/// Startup configuration. Every flag is required; each can also come from
/// the environment (or a `.env` file).
#[derive(Clone, Debug, Parser)]
#[command(name = "notes-backend", version, about = "Note service API")]
#[command(disable_help_flag = true)]
pub struct Config {
    /// Server address reported in the startup log
    #[arg(short = 'h', long, env = env_vars::HOST)]
    pub host: String,

    /// Server port
    #[arg(short, long, env = env_vars::PORT)]
    pub port: u16,

    /// Cache directory holding notes.json (must exist)
    #[arg(short, long, env = env_vars::CACHE_DIR)]
    pub cache: PathBuf,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    _help: Option<bool>,
}

impl Config {
    /// Resolve the cache directory to an absolute path, failing if it is
    /// missing or not a directory.
    pub fn cache_dir(&self) -> Result<PathBuf, ConfigError> {
        resolve_cache_dir(&self.cache)
    }

    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn resolve_cache_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    match path.canonicalize() {
        Ok(dir) if dir.is_dir() => Ok(dir),
        _ => Err(ConfigError::InvalidCacheDir(path.to_path_buf())),
    }
}
