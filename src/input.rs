//! Input parsing for Claude Code hook invocations.

use serde::Deserialize;
use thiserror::Error;

/// Tools that operate on a single file path.
pub const FILE_WRITE_TOOLS: &[&str] = &["Write", "Edit", "MultiEdit", "NotebookEdit"];

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),
}

/// The raw payload a hook receives on stdin.
///
/// Tool hooks carry `tool_name`/`tool_input`; the prompt hook carries `prompt`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// The tool being invoked (e.g., "Bash", "Read", "Write").
    #[serde(default)]
    pub tool_name: String,

    /// The tool's input parameters as raw JSON.
    #[serde(default)]
    pub tool_input: serde_json::Value,

    /// Submitted prompt text (UserPromptSubmit events).
    #[serde(default)]
    pub prompt: Option<String>,

    /// Current working directory (optional).
    #[serde(default)]
    pub cwd: Option<String>,

    /// Session ID for audit logging (optional).
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Parsed input for the Bash tool.
#[derive(Debug, Clone)]
pub struct BashInput {
    /// The command to execute.
    pub command: String,
}

/// Parsed input for any tool that targets one file.
#[derive(Debug, Clone)]
pub struct FileInput {
    /// The file path being accessed.
    pub file_path: String,
}

impl HookInput {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse one payload from a reader.
    pub fn from_reader(mut reader: impl std::io::Read) -> Result<Self, InputError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::parse(&raw)
    }

    /// Try to extract as Bash input. A missing command reads as empty.
    pub fn as_bash(&self) -> Option<BashInput> {
        if self.tool_name != "Bash" {
            return None;
        }
        Some(BashInput {
            command: self.command().unwrap_or_default().to_string(),
        })
    }

    /// Try to extract as Read input.
    pub fn as_read(&self) -> Option<FileInput> {
        if self.tool_name != "Read" {
            return None;
        }
        Some(FileInput {
            file_path: self.file_path().unwrap_or_default().to_string(),
        })
    }

    /// Try to extract as a file modification (Write, Edit, MultiEdit, NotebookEdit).
    pub fn as_file_write(&self) -> Option<FileInput> {
        if !self.is_file_write() {
            return None;
        }
        Some(FileInput {
            file_path: self.file_path().unwrap_or_default().to_string(),
        })
    }

    pub fn is_file_write(&self) -> bool {
        FILE_WRITE_TOOLS.contains(&self.tool_name.as_str())
    }

    /// Get the primary path being accessed (for any file-based tool).
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input
            .get("file_path")
            .or_else(|| self.tool_input.get("notebook_path"))
            .and_then(|v| v.as_str())
    }

    /// Get the command (for Bash tool).
    pub fn command(&self) -> Option<&str> {
        self.tool_input.get("command").and_then(|v| v.as_str())
    }

    /// Get the submitted prompt, if any.
    pub fn prompt_text(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bash_input() {
        let json = r#"{"tool_name":"Bash","tool_input":{"command":"ls -la"}}"#;
        let input = HookInput::parse(json).unwrap();
        assert_eq!(input.tool_name, "Bash");
        let bash = input.as_bash().unwrap();
        assert_eq!(bash.command, "ls -la");
    }

    #[test]
    fn test_parse_read_input() {
        let json = r#"{"tool_name":"Read","tool_input":{"file_path":"/etc/passwd"}}"#;
        let input = HookInput::parse(json).unwrap();
        let read = input.as_read().unwrap();
        assert_eq!(read.file_path, "/etc/passwd");
        assert!(input.as_file_write().is_none());
    }

    #[test]
    fn test_parse_multiedit_as_write() {
        let json = r#"{"tool_name":"MultiEdit","tool_input":{"file_path":"src/lib.rs","edits":[]}}"#;
        let input = HookInput::parse(json).unwrap();
        assert_eq!(input.as_file_write().unwrap().file_path, "src/lib.rs");
    }

    #[test]
    fn test_parse_prompt_payload() {
        let json = r#"{"prompt":"hello there","session_id":"abc"}"#;
        let input = HookInput::parse(json).unwrap();
        assert_eq!(input.prompt_text(), "hello there");
        assert!(input.tool_name.is_empty());
    }

    #[test]
    fn test_missing_command_is_empty() {
        let json = r#"{"tool_name":"Bash","tool_input":{}}"#;
        let input = HookInput::parse(json).unwrap();
        assert_eq!(input.as_bash().unwrap().command, "");
    }

    #[test]
    fn test_wrong_tool_type() {
        let json = r#"{"tool_name":"Read","tool_input":{"file_path":"/etc/passwd"}}"#;
        let input = HookInput::parse(json).unwrap();
        assert!(input.as_bash().is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(HookInput::parse("not json").is_err());
    }
}
