//! Prompt analysis for UserPromptSubmit events.

use super::block_on;
use crate::audit::EventLog;
use crate::config::CompiledConfig;
use crate::decision::Decision;

/// Analyze a submitted prompt.
///
/// Suspicious prompts are logged. They are only blocked when
/// `prompt.block_suspicious` is set.
pub fn analyze_prompt(prompt: &str, config: &CompiledConfig, log: &EventLog) -> Decision {
    if let Some(rule) = config.denied("Prompt", prompt) {
        return block_on(rule);
    }

    let mut matched = config.rules.suspicious_prompt.matches(prompt);
    let Some(rule) = matched.next() else {
        return Decision::allow();
    };
    log.suspicious_prompt(prompt, &rule.reason);
    for other in matched {
        log.suspicious_prompt(prompt, &other.reason);
    }

    if config.raw.prompt.block_suspicious {
        return Decision::block(
            &rule.id,
            format!("Prompt blocked for safety reasons: {}", rule.reason),
        );
    }
    Decision::allow()
}
