//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Delegate (OpenAI-compatible API) settings
    pub delegate: FileDelegateConfig,
    /// Rejection diagnostics settings
    pub diagnostics: FileDiagnosticsConfig,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address (default: "127.0.0.1:8787")
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".to_string(),
        }
    }
}

/// `[delegate]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDelegateConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var named by `api_key_env`).
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model used for solving and generation.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Max tokens per reply.
    pub max_tokens: u32,
    /// Per-call HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileDelegateConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            max_tokens: 4096,
            timeout_secs: 60,
        }
    }
}

impl FileDelegateConfig {
    /// Look up the API key: the direct value first, then the named env var.
    ///
    /// Called once at the start of every request.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// `[diagnostics]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiagnosticsConfig {
    /// JSONL file receiving one record per dropped candidate; disabled when unset.
    pub path: Option<PathBuf>,
}

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found while validating the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.bind.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue::error(
                "server.bind",
                format!("'{}' is not a socket address", self.server.bind),
            ));
        }
        if self.delegate.model.trim().is_empty() {
            issues.push(ConfigIssue::error("delegate.model", "model name is empty"));
        }
        if !self.delegate.base_url.starts_with("http://")
            && !self.delegate.base_url.starts_with("https://")
        {
            issues.push(ConfigIssue::error(
                "delegate.base_url",
                format!("'{}' is not an http(s) URL", self.delegate.base_url),
            ));
        }
        if self.delegate.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "delegate.timeout_secs",
                "timeout must be at least 1 second",
            ));
        }
        if !(0.0..=2.0).contains(&self.delegate.temperature) {
            issues.push(ConfigIssue::warning(
                "delegate.temperature",
                format!("{} is outside 0.0..=2.0", self.delegate.temperature),
            ));
        }
        if self.delegate.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "delegate.api_key",
                format!(
                    "API key is stored in the config file; prefer ${}",
                    self.delegate.api_key_env
                ),
            ));
        }

        issues
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> Option<SocketAddr> {
        self.server.bind.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.bind_addr().unwrap().port(), 8787);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
[server]
bind = "0.0.0.0:9000"

[delegate]
model = "gpt-4o"
timeout_secs = 30

[diagnostics]
path = "logs/rejections.jsonl"
"#,
        )
        .unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.delegate.model, "gpt-4o");
        assert_eq!(config.delegate.timeout_secs, 30);
        // Unset fields keep their defaults
        assert_eq!(config.delegate.api_key_env, "OPENAI_API_KEY");
        assert_eq!(
            config.diagnostics.path,
            Some(PathBuf::from("logs/rejections.jsonl"))
        );
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.server.bind = "localhost".to_string();
        config.delegate.model = " ".to_string();
        config.delegate.timeout_secs = 0;
        config.delegate.base_url = "api.openai.com".to_string();

        let fields: Vec<_> = config.validate().iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "server.bind",
                "delegate.model",
                "delegate.base_url",
                "delegate.timeout_secs"
            ]
        );
    }

    #[test]
    fn test_inline_key_is_a_warning() {
        let mut config = FileConfig::default();
        config.delegate.api_key = Some("sk-inline".to_string());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(config.delegate.resolve_api_key().as_deref(), Some("sk-inline"));
    }

    #[test]
    fn test_missing_key_resolves_to_none() {
        let config = FileDelegateConfig {
            api_key_env: "QUIZCHECK_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..FileDelegateConfig::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
