//! Response formatting for hook output.

use serde::Serialize;
use std::io::{self, Write};

use crate::config::FailMode;
use crate::decision::{BlockInfo, HookOutcome};
use crate::hook::HookKind;

/// Discriminant the host tool reads from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Block,
    Approve,
}

/// JSON object written to stdout: `{"decision": ..., "reason": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct HookResponse {
    pub decision: Verdict,
    pub reason: String,
}

impl HookResponse {
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Verdict::Block,
            reason: reason.into(),
        }
    }

    pub fn approve(reason: impl Into<String>) -> Self {
        Self {
            decision: Verdict::Approve,
            reason: reason.into(),
        }
    }
}

fn block_message(kind: HookKind, info: &BlockInfo) -> String {
    let reason = &info.reason;
    match kind {
        HookKind::Safety => format!(
            "🛡️ SAFETY BLOCK: {reason}\n\nThis operation requires manual execution for safety."
        ),
        HookKind::Boundary => format!(
            "🚧 PROJECT BOUNDARY: {reason}\n\nOperations must stay within the project directory for safety."
        ),
        HookKind::Prompt => reason.clone(),
    }
}

/// Map an outcome to the response a hook prints, if any.
///
/// Only the boundary hook answers `approve` explicitly; the other hooks stay
/// silent when nothing objects.
pub fn response_for(
    kind: HookKind,
    outcome: &HookOutcome,
    fail_mode: FailMode,
) -> Option<HookResponse> {
    match outcome {
        HookOutcome::Blocked(info) => Some(HookResponse::block(block_message(kind, info))),
        HookOutcome::Allowed => match kind {
            HookKind::Boundary => Some(HookResponse::approve("Operation within project boundary")),
            HookKind::Safety | HookKind::Prompt => None,
        },
        HookOutcome::InternalError(detail) => match fail_mode {
            FailMode::Closed => {
                let info = BlockInfo::new("internal_error", format!("hook error: {detail}"));
                Some(HookResponse::block(block_message(kind, &info)))
            }
            FailMode::Open => match kind {
                HookKind::Boundary => Some(HookResponse::approve("Hook error - defaulting to allow")),
                HookKind::Safety | HookKind::Prompt => None,
            },
        },
    }
}

/// Write a response as one JSON line.
pub fn emit(out: &mut impl Write, response: &HookResponse) -> io::Result<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()
}
