//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::boundary::{expand_tilde, find_project_root, DEFAULT_MARKER};
use crate::rules::{Rule, RuleBook, Tier};

/// Environment variable pointing at an alternative user config file.
pub const CONFIG_ENV: &str = "PROJECT_GUARD_CONFIG";

/// Default location templates are fetched from.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/user/claude-project-best-practices/main";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// What a hook does when it fails internally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailMode {
    /// Let the operation through and report the error on stderr.
    #[default]
    Open,
    /// Block the operation.
    Closed,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Directory for the warning and prompt logs (default `~/.claude/logs`).
    pub log_dir: Option<String>,

    /// Directory name that marks a project root (default `.claude`).
    pub marker: Option<String>,

    /// Failure policy for internal hook errors.
    pub fail_mode: Option<FailMode>,

    /// Extra deny rules, checked before the built-in tables.
    pub deny: Vec<DenyRule>,

    /// Prompt hook settings.
    pub prompt: PromptConfig,

    /// Audit logging settings.
    pub audit: AuditConfig,

    /// Bootstrap settings.
    pub bootstrap: BootstrapConfig,
}

/// Explicit deny rule.
#[derive(Debug, Clone, Deserialize)]
pub struct DenyRule {
    /// Tool name to match (e.g., "Bash", "Read", "Prompt").
    pub tool: String,
    /// Regex pattern to match against command/path/prompt.
    pub pattern: String,
    /// Human-readable reason for blocking.
    pub reason: String,
}

/// Prompt hook configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PromptConfig {
    /// Block prompts that match a suspicious pattern instead of only logging them.
    pub block_suspicious: bool,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// Bootstrap configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Template source: an http(s) base URL or a local directory.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Compiled configuration with pre-built rule-sets.
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Built-in rule tables.
    pub rules: RuleBook,
    /// Compiled deny rules.
    pub deny_patterns: Vec<(DenyRule, Rule)>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd {
            let marker = config.marker.as_deref().unwrap_or(DEFAULT_MARKER);
            if let Some(project_config) = Self::load_project_config(cwd, marker)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Load user-level config from ~/.claude/project-guard.toml
    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Ok(Some(toml::from_str(&content)?));
            }
        }
        Ok(None)
    }

    /// Load project-level config from `.claude/project-guard.toml` under the
    /// project root containing `cwd`.
    fn load_project_config(cwd: &Path, marker: &str) -> Result<Option<Self>, ConfigError> {
        let root = find_project_root(cwd, marker).unwrap_or_else(|_| cwd.to_path_buf());
        let path = root.join(DEFAULT_MARKER).join("project-guard.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects PROJECT_GUARD_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".claude/project-guard.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        self.deny.extend(other.deny);

        if other.log_dir.is_some() {
            self.log_dir = other.log_dir;
        }
        if other.marker.is_some() {
            self.marker = other.marker;
        }
        if other.fail_mode.is_some() {
            self.fail_mode = other.fail_mode;
        }
        if other.prompt.block_suspicious {
            self.prompt.block_suspicious = true;
        }
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
        if other.bootstrap.base_url.is_some() {
            self.bootstrap.base_url = other.bootstrap.base_url;
        }
        if other.bootstrap.timeout_secs.is_some() {
            self.bootstrap.timeout_secs = other.bootstrap.timeout_secs;
        }
    }

    /// Compile all regex patterns for faster matching.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let rules = RuleBook::builtin()?;

        let deny_patterns = self
            .deny
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let compiled = Rule::new(
                    format!("deny.{i}"),
                    &rule.pattern,
                    Tier::Block,
                    &rule.reason,
                )?;
                Ok((rule.clone(), compiled))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(CompiledConfig {
            raw: self,
            rules,
            deny_patterns,
        })
    }
}

impl CompiledConfig {
    /// Check the explicit deny rules for `tool`.
    pub fn denied(&self, tool: &str, text: &str) -> Option<&Rule> {
        self.deny_patterns
            .iter()
            .filter(|(rule, _)| rule.tool == tool)
            .map(|(_, compiled)| compiled)
            .find(|compiled| !text.is_empty() && compiled.is_match(text))
    }

    /// Directory holding the warning and prompt logs.
    pub fn log_dir(&self) -> Option<PathBuf> {
        match &self.raw.log_dir {
            Some(dir) => Some(expand_tilde(dir)),
            None => dirs::home_dir().map(|h| h.join(".claude/logs")),
        }
    }

    pub fn marker(&self) -> &str {
        self.raw.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    pub fn fail_mode(&self) -> FailMode {
        self.raw.fail_mode.unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        self.raw.bootstrap.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.raw.bootstrap.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Path of the audit log, when auditing is enabled.
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.raw.audit.enabled {
            return None;
        }
        self.raw.audit.path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let compiled = Config::default().compile().unwrap();
        assert_eq!(compiled.marker(), ".claude");
        assert_eq!(compiled.fail_mode(), FailMode::Open);
        assert_eq!(compiled.base_url(), DEFAULT_BASE_URL);
        assert!(compiled.audit_path().is_none());
    }

    #[test]
    fn test_project_config_found_from_subdirectory() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".claude")).unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(
            dir.path().join(".claude/project-guard.toml"),
            "fail_mode = \"closed\"\n",
        )
        .unwrap();

        let config = Config::load_project_config(&dir.path().join("src/nested"), DEFAULT_MARKER)
            .unwrap()
            .unwrap();
        assert_eq!(config.fail_mode, Some(FailMode::Closed));
        assert!(
            Config::load_project_config(Path::new("/no/such/dir"), DEFAULT_MARKER)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
log_dir = "/tmp/guard-logs"
fail_mode = "closed"

[prompt]
block_suspicious = true

[bootstrap]
base_url = "/srv/templates"
timeout_secs = 5

[[deny]]
tool = "Bash"
pattern = '^\s*printenv'
reason = "Exposes environment variables"
"#,
        )
        .unwrap();
        let compiled = config.compile().unwrap();
        assert_eq!(compiled.fail_mode(), FailMode::Closed);
        assert_eq!(compiled.log_dir(), Some(PathBuf::from("/tmp/guard-logs")));
        assert_eq!(compiled.fetch_timeout(), Duration::from_secs(5));
        assert!(compiled.raw.prompt.block_suspicious);
        assert!(compiled.denied("Bash", "printenv HOME").is_some());
        assert!(compiled.denied("Read", "printenv HOME").is_none());
    }

    #[test]
    fn test_invalid_regex() {
        let config = Config {
            deny: vec![DenyRule {
                tool: "Bash".to_string(),
                pattern: "[invalid".to_string(),
                reason: "x".to_string(),
            }],
            ..Default::default()
        };
        assert!(config.compile().is_err());
    }

    #[test]
    fn test_merge_prefers_project_scalars() {
        let mut user = Config {
            log_dir: Some("/user/logs".to_string()),
            deny: vec![DenyRule {
                tool: "Bash".to_string(),
                pattern: "a".to_string(),
                reason: "a".to_string(),
            }],
            ..Default::default()
        };
        let project = Config {
            marker: Some(".project".to_string()),
            fail_mode: Some(FailMode::Closed),
            deny: vec![DenyRule {
                tool: "Read".to_string(),
                pattern: "b".to_string(),
                reason: "b".to_string(),
            }],
            ..Default::default()
        };
        user.merge(project);
        assert_eq!(user.deny.len(), 2);
        assert_eq!(user.log_dir.as_deref(), Some("/user/logs"));
        assert_eq!(user.marker.as_deref(), Some(".project"));
        assert_eq!(user.fail_mode, Some(FailMode::Closed));
    }
}
