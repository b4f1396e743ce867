//! Bash tool analysis.

use super::block_on;
use crate::audit::EventLog;
use crate::config::CompiledConfig;
use crate::decision::Decision;
use crate::input::BashInput;
use crate::rules::{Evaluation, evaluate};

/// Analyze a Bash tool invocation.
pub fn analyze_bash(input: &BashInput, config: &CompiledConfig, log: &EventLog) -> Decision {
    let command = input.command.trim();

    // 1. Check explicit deny rules
    if let Some(rule) = config.denied("Bash", command) {
        return block_on(rule);
    }

    // 2. Built-in tables: critical, then warnings, then the safe list
    let rules = &config.rules;
    let sets = [
        &rules.critical_command,
        &rules.warning_command,
        &rules.safe_command,
    ];
    match evaluate(&[command], &sets) {
        Evaluation::Blocked(rule) => block_on(rule),
        Evaluation::Warned(_) => {
            for rule in rules.warning_command.matches(command) {
                log.warn(format!("WARNING: {} - Command: {}", rule.reason, command));
            }
            Decision::allow()
        }
        Evaluation::SafeListed(_) | Evaluation::NoMatch => Decision::allow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::WARNINGS_LOG;
    use crate::config::{Config, DenyRule};
    use tempfile::TempDir;

    fn test_config() -> CompiledConfig {
        Config {
            deny: vec![DenyRule {
                tool: "Bash".to_string(),
                pattern: r"^printenv\s+\w+".to_string(),
                reason: "Exposes environment variables".to_string(),
            }],
            ..Default::default()
        }
        .compile()
        .unwrap()
    }

    fn bash(command: &str) -> BashInput {
        BashInput {
            command: command.to_string(),
        }
    }

    fn analyze(command: &str) -> Decision {
        analyze_bash(&bash(command), &test_config(), &EventLog::new(None))
    }

    #[test]
    fn test_deny_rule() {
        let decision = analyze("printenv AWS_SECRET_ACCESS_KEY");
        assert_eq!(
            decision.block_info().unwrap().reason,
            "Exposes environment variables"
        );
    }

    #[test]
    fn test_rm_rf_root() {
        let decision = analyze("rm -rf /");
        assert!(decision.is_blocked());
        assert!(!decision.block_info().unwrap().reason.is_empty());
    }

    #[test]
    fn test_force_push() {
        assert!(analyze("git push --force").is_blocked());
    }

    #[test]
    fn test_safe_commands() {
        for cmd in ["ls", "ls -la", "pwd", "git status", "pytest -q", "printenv"] {
            assert!(!analyze(cmd).is_blocked(), "{cmd} should be allowed");
        }
    }

    #[test]
    fn test_empty_command_allowed() {
        assert!(!analyze("").is_blocked());
        assert!(!analyze("   ").is_blocked());
    }

    #[test]
    fn test_warning_is_logged_not_blocked() {
        let dir = TempDir::new().unwrap();
        let log = EventLog::new(Some(dir.path().to_path_buf()));
        let decision = analyze_bash(&bash("make clean"), &test_config(), &log);
        assert!(!decision.is_blocked());

        let content = std::fs::read_to_string(dir.path().join(WARNINGS_LOG)).unwrap();
        assert!(content.contains("Clean operations may remove generated files"));
        assert!(content.contains("Command: make clean"));
    }

    #[test]
    fn test_every_matching_warning_is_logged() {
        let dir = TempDir::new().unwrap();
        let log = EventLog::new(Some(dir.path().to_path_buf()));
        let decision = analyze_bash(&bash("rm -f build.log && make clean"), &test_config(), &log);
        assert!(!decision.is_blocked());

        let content = std::fs::read_to_string(dir.path().join(WARNINGS_LOG)).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Recursive delete"));
        assert!(lines[1].contains("Clean operations"));
    }

    #[test]
    fn test_critical_beats_warning() {
        let dir = TempDir::new().unwrap();
        let log = EventLog::new(Some(dir.path().to_path_buf()));
        let decision = analyze_bash(&bash("git reset --hard HEAD~5"), &test_config(), &log);
        assert!(decision.is_blocked());
        assert!(!dir.path().join(WARNINGS_LOG).exists());
    }
}
