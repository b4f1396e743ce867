//! Read tool analysis.

use super::block_on;
use crate::boundary::path_forms;
use crate::config::CompiledConfig;
use crate::decision::Decision;
use crate::input::FileInput;

/// Analyze a Read tool invocation.
pub fn analyze_read(input: &FileInput, config: &CompiledConfig) -> Decision {
    let path = &input.file_path;

    // 1. Check explicit deny rules
    if let Some(rule) = config.denied("Read", path) {
        return block_on(rule);
    }

    // 2. Forbidden paths, matched against every spelling of the path
    match config.rules.forbidden_read.first_match_any(&path_forms(path)) {
        Some(rule) => block_on(rule),
        None => Decision::allow(),
    }
}
