//! Shell command tables for the safety hook.

use super::RuleSpec;

/// Commands that are never allowed.
pub const CRITICAL: &[RuleSpec] = &[
    // System destruction
    RuleSpec::new(
        "command.rm_absolute",
        r"\brm\s+.*-[rf].*/",
        "Recursive delete with absolute paths is dangerous",
    ),
    RuleSpec::new(
        "command.rm_root",
        r"\brm\s+-[rf]\s+/",
        "Recursive delete of root paths is forbidden",
    ),
    RuleSpec::new(
        "command.fork_bomb",
        r":\(\)\s*\{\s*:\s*\|\s*:\s*&\s*\}\s*;\s*:",
        "Fork bomb detected",
    ),
    RuleSpec::new(
        "command.disk_redirect",
        r">\s*/dev/(sd|hd|nvme)",
        "Direct disk operations are forbidden",
    ),
    RuleSpec::new(
        "command.dd_device",
        r"\bdd\s+.*of=/dev/",
        "Direct disk operations are forbidden",
    ),
    // Database destruction
    RuleSpec::new(
        "database.drop",
        r"\bDROP\s+(DATABASE|SCHEMA)\s+",
        "Database/schema drops outside test context are forbidden",
    )
    .unless(".*test"),
    RuleSpec::new(
        "database.truncate",
        r"\bTRUNCATE\s+TABLE\s+",
        "Table truncation outside test context is forbidden",
    )
    .unless(".*test"),
    RuleSpec::new(
        "database.delete_all",
        r"\bDELETE\s+FROM.*WHERE\s+1\s*=\s*1",
        "Unsafe DELETE without proper WHERE clause",
    ),
    // Cloud destruction through the CLI
    RuleSpec::new(
        "aws.delete",
        r"\baws\s+.*delete",
        "AWS delete operations should be done through IaC",
    )
    .unless(r"\s+.*test"),
    RuleSpec::new(
        "aws.terminate",
        r"\baws\s+.*terminate",
        "AWS terminate operations should be done through IaC",
    )
    .unless(r"\s+.*test"),
    RuleSpec::new(
        "aws.destroy",
        r"\baws\s+.*destroy",
        "AWS destroy operations should be done through IaC",
    ),
    RuleSpec::new(
        "terraform.destroy",
        r"\bterraform\s+destroy",
        "Terraform destroy should target specific resources",
    )
    .unless(r"\s+.*-target"),
    // Git history rewriting
    RuleSpec::new(
        "git.force_push",
        r"\bgit\s+push\b.*(--force|\s-f\b)",
        "Force push operations are dangerous",
    ),
    RuleSpec::new(
        "git.reset_many",
        r"\bgit\s+reset\s+--hard\s+HEAD~([2-9]|[1-9][0-9]+)",
        "Hard reset beyond 1 commit is dangerous",
    ),
    RuleSpec::new(
        "git.clean",
        r"\bgit\s+clean\s+-[fd]",
        "Git clean can delete untracked files",
    ),
    RuleSpec::new(
        "git.filter_branch",
        r"\bgit\s+filter-branch",
        "Git filter-branch is destructive",
    ),
    // System modifications
    RuleSpec::new(
        "system.chmod_777",
        r"\bchmod\s+(-R\s+)?777",
        "World-writable permissions are dangerous",
    ),
    RuleSpec::new(
        "system.chown_root",
        r"\bchown\s+-R\s+root",
        "Changing ownership to root is forbidden",
    ),
    RuleSpec::new("system.sudo_rm", r"\bsudo\s+rm\b", "Sudo rm operations are forbidden"),
    RuleSpec::new(
        "system.sudo_chmod",
        r"\bsudo\s+chmod.*(/usr/|/etc/|/var/)",
        "System directory permission changes forbidden",
    ),
    // Network
    RuleSpec::new(
        "network.curl_pipe",
        r"\bcurl\b.*\|\s*(sudo\s+)?(ba|z)?sh\b",
        "Piping downloads to shell is dangerous",
    ),
    RuleSpec::new(
        "network.wget_pipe",
        r"\bwget\b.*\|\s*(sudo\s+)?(ba|z)?sh\b",
        "Piping downloads to shell is dangerous",
    ),
    RuleSpec::new(
        "network.netcat_exec",
        r"\bnc\s+.*-e\b",
        "Netcat with command execution is dangerous",
    ),
    // Package management outside controlled environments
    RuleSpec::new(
        "packages.system",
        r"\bsudo\s+(apt|apt-get|yum|dnf|pacman)\b",
        "System package management should be done manually",
    ),
    RuleSpec::new(
        "packages.npm_global",
        r"\bnpm\s+(install|i)\b.*(\s-g\b|--global)",
        "Global npm installs should be done manually",
    ),
    RuleSpec::new(
        "packages.pip_user",
        r"\bpip3?\s+install\b.*--user",
        "User-level pip installs should be done manually",
    ),
];

/// Commands that go through but leave a trace in the warning log.
pub const WARNING: &[RuleSpec] = &[
    RuleSpec::new(
        "command.rm_recursive",
        r"\brm\s+-[rf]",
        "Recursive delete - ensure you're in the right directory",
    ),
    RuleSpec::new(
        "git.reset_hard",
        r"\bgit\s+reset\s+--hard",
        "Hard reset will lose uncommitted changes",
    ),
    RuleSpec::new(
        "make.clean",
        r"\bmake\s+clean",
        "Clean operations may remove generated files",
    ),
];

/// Known read-only or project-local commands.
pub const SAFE: &[RuleSpec] = &[
    RuleSpec::new("safe.ls", r"^ls(\s|$)", "list directory"),
    RuleSpec::new("safe.pwd", r"^pwd$", "print working directory"),
    RuleSpec::new("safe.cd", r"^cd\s+[^/]", "relative cd"),
    RuleSpec::new("safe.cat", r"^cat\s+[^/]", "relative file read"),
    RuleSpec::new("safe.grep", r"^grep\s+", "search"),
    RuleSpec::new("safe.find", r"^find\s+\.", "local find"),
    RuleSpec::new("safe.which", r"^which\s+", "locate binary"),
    RuleSpec::new("safe.echo", r"^echo\s+", "echo"),
    RuleSpec::new("safe.printf", r"^printf\s+", "printf"),
    RuleSpec::new(
        "safe.git_read",
        r"^git\s+(status|log|diff|branch|remote|show)(\s|$)",
        "read-only git",
    ),
    RuleSpec::new(
        "safe.make",
        r"^make\s+(test|lint|format|help|check)(\s|$)",
        "make target",
    ),
    RuleSpec::new("safe.python_script", r"^python3?\s+.*\.py$", "run script"),
    RuleSpec::new("safe.poetry", r"^poetry\s+(show|list|env|version)", "poetry query"),
    RuleSpec::new("safe.pytest", r"^pytest(\s|$)", "run tests"),
    RuleSpec::new("safe.aws_read", r"^aws\s+.*(describe|list|get)", "aws query"),
    RuleSpec::new("safe.docker_read", r"^docker\s+(ps|images|logs)(\s|$)", "docker query"),
    RuleSpec::new("safe.env", r"^env$", "environment listing"),
    RuleSpec::new("safe.printenv", r"^printenv$", "environment listing"),
];
