//! Project boundary analysis.

use std::io;

use super::block_on;
use crate::boundary::{BoundaryResolver, path_forms};
use crate::config::CompiledConfig;
use crate::decision::{BlockInfo, Decision};
use crate::input::HookInput;
use crate::rules::{Evaluation, evaluate};

const FILE_TOOLS: &[&str] = &["Write", "Edit", "MultiEdit", "NotebookEdit", "Read"];

/// Check that a tool invocation stays inside the project root.
///
/// Failing to locate the root is an error for the caller; a path that cannot
/// be resolved is treated as outside.
pub fn analyze_boundary(
    input: &HookInput,
    config: &CompiledConfig,
    resolver: &BoundaryResolver,
) -> io::Result<Decision> {
    resolver.root()?;

    if FILE_TOOLS.contains(&input.tool_name.as_str()) {
        return Ok(check_file(input.file_path().unwrap_or_default(), config, resolver));
    }
    if input.tool_name == "Bash" {
        return Ok(check_command(input.command().unwrap_or_default(), config, resolver));
    }
    Ok(Decision::allow())
}

fn check_file(path: &str, config: &CompiledConfig, resolver: &BoundaryResolver) -> Decision {
    if path.is_empty() {
        return Decision::allow();
    }

    if !resolver.contains(path).is_inside() {
        return Decision::block(
            "boundary.outside_project",
            format!("File operation outside project boundary: {}", path),
        );
    }

    match config.rules.system_path.first_match_any(&path_forms(path)) {
        Some(rule) => Decision::Block(
            BlockInfo::new(&rule.id, format!("{}: {}", rule.reason, path)),
        ),
        None => Decision::allow(),
    }
}

fn check_command(command: &str, config: &CompiledConfig, resolver: &BoundaryResolver) -> Decision {
    let command = command.trim();
    let sets = [
        &config.rules.boundary_command,
        &config.rules.safe_local_command,
    ];
    match evaluate(&[command], &sets) {
        Evaluation::Blocked(rule) => return block_on(rule),
        Evaluation::SafeListed(_) => return Decision::allow(),
        Evaluation::Warned(_) | Evaluation::NoMatch => {}
    }

    // An absolute cd must land inside the project.
    if let Some(target) = cd_target(command) {
        if target.starts_with('/') && !resolver.contains(target).is_inside() {
            return Decision::block(
                "boundary.cd_outside",
                format!("Cannot cd outside project boundary: {}", target),
            );
        }
    }

    Decision::allow()
}

fn cd_target(command: &str) -> Option<&str> {
    let rest = command.strip_prefix("cd")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let target = rest.trim().trim_matches(|c| c == '\'' || c == '"');
    (!target.is_empty()).then_some(target)
}
