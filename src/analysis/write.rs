//! Write, Edit and MultiEdit analysis.

use super::block_on;
use crate::audit::EventLog;
use crate::boundary::path_forms;
use crate::config::CompiledConfig;
use crate::decision::Decision;
use crate::input::FileInput;
use crate::rules::{Evaluation, evaluate};

/// Analyze a file modification by `tool`.
pub fn analyze_write(
    tool: &str,
    input: &FileInput,
    config: &CompiledConfig,
    log: &EventLog,
) -> Decision {
    let path = &input.file_path;

    // 1. Check explicit deny rules
    if let Some(rule) = config.denied(tool, path) {
        return block_on(rule);
    }

    // 2. Critical files block; configuration files are logged
    let sets = [&config.rules.critical_file, &config.rules.config_file];
    match evaluate(&path_forms(path), &sets) {
        Evaluation::Blocked(rule) => block_on(rule),
        Evaluation::Warned(_) => {
            log.warn(format!("Configuration file modification: {}", path));
            Decision::allow()
        }
        Evaluation::SafeListed(_) | Evaluation::NoMatch => Decision::allow(),
    }
}
