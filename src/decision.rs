//! Decision types for hook responses.

use serde::Serialize;

/// The result of analyzing a tool invocation.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Allow the tool to proceed.
    Allow,
    /// Block the tool with a reason.
    Block(BlockInfo),
}

/// Information about why a tool was blocked.
#[derive(Debug, Clone, Serialize)]
pub struct BlockInfo {
    /// Human-readable reason for blocking.
    pub reason: String,
    /// The rule that triggered the block.
    pub rule: String,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Block(BlockInfo::new(rule, reason))
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }
}

/// Final outcome of one hook invocation.
///
/// Keeps "nothing objected" apart from "the hook itself failed", so the
/// failure policy is applied in one place instead of inside every analyzer.
#[derive(Debug, Clone)]
pub enum HookOutcome {
    Allowed,
    Blocked(BlockInfo),
    InternalError(String),
}

impl HookOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, HookOutcome::Blocked(_))
    }

    pub fn is_internal_error(&self) -> bool {
        matches!(self, HookOutcome::InternalError(_))
    }
}

impl From<Decision> for HookOutcome {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Allow => HookOutcome::Allowed,
            Decision::Block(info) => HookOutcome::Blocked(info),
        }
    }
}
