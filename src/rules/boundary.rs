//! Tables for the project boundary hook.

use super::RuleSpec;

/// Commands that can reach outside the project directory.
pub const ESCAPING_COMMANDS: &[RuleSpec] = &[
    RuleSpec::new(
        "boundary.parent_traversal",
        r"\b(cp|mv|rm|ln)\s+.*\.\./",
        "File operations using ../ can escape project boundary",
    ),
    RuleSpec::new(
        "boundary.absolute_paths",
        r"\b(cp|mv|rm|ln)\s+.*/.*/",
        "Absolute file paths may escape project boundary",
    ),
    RuleSpec::new("boundary.sudo", r"\bsudo\s+", "System-level operations are forbidden"),
    RuleSpec::new("boundary.su", r"\bsu\s+", "User switching is forbidden"),
    RuleSpec::new(
        "boundary.chmod_system",
        r"\bchmod\s+.*(/usr/|/etc/|/var/)",
        "System directory permission changes forbidden",
    ),
    RuleSpec::new(
        "boundary.pipe_to_shell",
        r"\b(wget|curl)\b.*\|\s*(sh|bash)\b",
        "Piping downloads to shell is dangerous",
    ),
    RuleSpec::new(
        "boundary.system_packages",
        r"\b(apt|apt-get|yum|brew|pacman)\s+install",
        "System package installation should be manual",
    ),
];

/// Commands that clearly stay within the current directory.
pub const SAFE_LOCAL: &[RuleSpec] = &[
    RuleSpec::new("local.ls", r"^ls\s", "list directory"),
    RuleSpec::new("local.pwd", r"^pwd$", "print working directory"),
    RuleSpec::new("local.cd", r"^cd\s+[^/]", "relative cd"),
    RuleSpec::new("local.find", r"^find\s+\.\s", "find in current directory"),
    RuleSpec::new("local.grep", r"^grep\s+.*\s+\.", "grep in current directory"),
];

/// System locations that stay off-limits even when inside the project.
pub const SYSTEM_PATHS: &[RuleSpec] = &[
    RuleSpec::new("system.etc", r"^/etc/", "Access to system directory blocked"),
    RuleSpec::new("system.usr", r"^/usr/", "Access to system directory blocked"),
    RuleSpec::new("system.var", r"^/var/", "Access to system directory blocked"),
    RuleSpec::new("system.bin", r"^/bin/", "Access to system directory blocked"),
    RuleSpec::new("system.sbin", r"^/sbin/", "Access to system directory blocked"),
    RuleSpec::new("system.ssh", r"^~/\.ssh/", "Access to system directory blocked"),
    RuleSpec::new("system.aws", r"^~/\.aws/", "Access to system directory blocked"),
    RuleSpec::new("system.dev", r"^/dev/", "Access to system directory blocked"),
    RuleSpec::new("system.proc", r"^/proc/", "Access to system directory blocked"),
    RuleSpec::new("system.sys", r"^/sys/", "Access to system directory blocked"),
];
