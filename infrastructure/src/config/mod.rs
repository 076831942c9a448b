//! Configuration file loading for quizcheck
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZCHECK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizcheck.toml` or `./.quizcheck.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizcheck/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileDelegateConfig, FileDiagnosticsConfig, FileServerConfig,
    Severity,
};
pub use loader::ConfigLoader;
