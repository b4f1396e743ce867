//! Append-only JSON-lines logs: safety warnings, suspicious prompts and the
//! optional per-decision audit trail.
//!
//! Every write is best-effort. A log that cannot be written never changes the
//! verdict of a hook.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::decision::HookOutcome;
use crate::input::HookInput;
use crate::redaction::redact_secrets;

pub const WARNINGS_LOG: &str = "safety-warnings.log";
pub const PROMPTS_LOG: &str = "prompt-safety.log";

const PROMPT_PREVIEW_CHARS: usize = 200;
const SUMMARY_CHARS: usize = 200;

/// A warning from the safety hook.
#[derive(Debug, Serialize)]
pub struct WarningEntry {
    pub timestamp: DateTime<Utc>,
    pub level: &'static str,
    pub message: String,
}

/// A prompt that matched a suspicious pattern.
#[derive(Debug, Serialize)]
pub struct PromptEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub reason: String,
    pub prompt: String,
}

impl PromptEntry {
    pub fn new(prompt: &str, reason: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: "suspicious_prompt",
            reason: reason.to_string(),
            prompt: preview(&redact_secrets(prompt), PROMPT_PREVIEW_CHARS),
        }
    }
}

/// An audit log entry for one hook decision.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub hook: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub tool: String,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The command, path or prompt, redacted and truncated.
    pub summary: String,
}

impl AuditEntry {
    pub fn new(hook: &str, input: &HookInput, outcome: &HookOutcome) -> Self {
        let (blocked, rule, reason, error) = match outcome {
            HookOutcome::Allowed => (false, None, None, None),
            HookOutcome::Blocked(info) => (
                true,
                Some(info.rule.clone()),
                Some(info.reason.clone()),
                None,
            ),
            HookOutcome::InternalError(detail) => (false, None, None, Some(detail.clone())),
        };

        let summary = input
            .command()
            .or_else(|| input.file_path())
            .or(input.prompt.as_deref())
            .map(|s| truncate(&redact_secrets(s), SUMMARY_CHARS))
            .unwrap_or_else(|| "<unknown>".to_string());

        Self {
            timestamp: Utc::now(),
            hook: hook.to_string(),
            session_id: input.session_id.clone(),
            tool: input.tool_name.clone(),
            blocked,
            rule,
            reason,
            error,
            summary,
        }
    }
}

/// First `max` characters, with `...` appended when anything was cut.
fn preview(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    }
}

/// At most `max` characters including the trailing `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

/// Append-only JSON-lines writer.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create a log file, creating its directory if needed.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write one entry as a single line.
    pub fn log<T: Serialize>(&mut self, entry: &T) -> std::io::Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()
    }
}

/// The warning and prompt logs under one directory.
#[derive(Debug, Clone)]
pub struct EventLog {
    dir: Option<PathBuf>,
}

impl EventLog {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Record a warning. Failures are discarded.
    pub fn warn(&self, message: impl Into<String>) {
        let entry = WarningEntry {
            timestamp: Utc::now(),
            level: "WARNING",
            message: message.into(),
        };
        self.append(WARNINGS_LOG, &entry);
    }

    /// Record a suspicious prompt. Failures are discarded.
    pub fn suspicious_prompt(&self, prompt: &str, reason: &str) {
        self.append(PROMPTS_LOG, &PromptEntry::new(prompt, reason));
    }

    fn append<T: Serialize>(&self, file_name: &str, entry: &T) {
        let Some(dir) = &self.dir else {
            return;
        };
        if let Ok(mut logger) = AuditLogger::open(&dir.join(file_name)) {
            let _ = logger.log(entry);
        }
    }
}
