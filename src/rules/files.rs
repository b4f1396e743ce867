//! File path tables for write, edit and read operations.

use super::RuleSpec;

/// Paths that may never be written or edited.
pub const CRITICAL: &[RuleSpec] = &[
    // Secrets and credentials
    RuleSpec::new("file.pem", r"\.pem$", "Certificate files cannot be modified"),
    RuleSpec::new("file.key", r"\.key$", "Private key files cannot be modified"),
    RuleSpec::new("file.p12", r"\.p12$", "Certificate store files cannot be modified"),
    RuleSpec::new("file.credentials", r"credentials", "Credential files cannot be modified"),
    RuleSpec::new(
        "file.secrets",
        r"secrets\.(json|yaml|yml)$",
        "Secret files cannot be modified",
    ),
    // System files
    RuleSpec::new("file.etc", r"^/etc/", "System configuration files cannot be modified"),
    RuleSpec::new("file.usr", r"^/usr/", "System files cannot be modified"),
    RuleSpec::new("file.var_log", r"^/var/log/", "System logs cannot be modified"),
    RuleSpec::new("file.ssh", r"(^|/)\.ssh/", "SSH configuration cannot be modified"),
    RuleSpec::new(
        "file.aws_credentials",
        r"(^|/)\.aws/credentials",
        "AWS credentials cannot be modified",
    ),
    // Git internals, hooks excepted
    RuleSpec::new("file.git_internals", r"\.git/", "Git internals cannot be modified directly")
        .unless("hooks/"),
    // Lock files are owned by their package managers
    RuleSpec::new(
        "file.npm_lock",
        r"package-lock\.json",
        "Package lock files should not be edited directly",
    ),
    RuleSpec::new(
        "file.poetry_lock",
        r"poetry\.lock",
        "Poetry lock files should not be edited directly",
    ),
    RuleSpec::new(
        "file.pipfile_lock",
        r"Pipfile\.lock",
        "Pipfile lock files should not be edited directly",
    ),
    RuleSpec::new("file.yarn_lock", r"yarn\.lock", "Yarn lock files should not be edited directly"),
];

/// Configuration files: allowed, but every change is logged.
pub const CONFIG: &[RuleSpec] = &[
    RuleSpec::new("config.env", r"\.env$", "Environment file modification"),
    RuleSpec::new("config.env_variant", r"\.env\.", "Environment file modification"),
    RuleSpec::new(
        "config.generic",
        r"config\.(json|yaml|yml|toml)$",
        "Configuration file modification",
    ),
    RuleSpec::new("config.pyproject", r"pyproject\.toml$", "Python project file modification"),
    RuleSpec::new("config.package_json", r"package\.json$", "Package manifest modification"),
    RuleSpec::new("config.dockerfile", r"Dockerfile$", "Dockerfile modification"),
    RuleSpec::new(
        "config.compose",
        r"docker-compose\.(yml|yaml)$",
        "Compose file modification",
    ),
    RuleSpec::new(
        "config.claude_settings",
        r"\.claude/settings\.json$",
        "Hook settings modification",
    ),
];

/// Paths that may never be read.
pub const FORBIDDEN_READ: &[RuleSpec] = &[
    RuleSpec::new("read.pem", r"\.pem$", "Private certificate files cannot be read"),
    RuleSpec::new("read.key", r"\.key$", "Private key files cannot be read"),
    RuleSpec::new("read.shadow", r"/etc/shadow", "Password files cannot be read"),
    RuleSpec::new("read.ssh_key", r"(^|/)\.ssh/id_", "SSH private keys cannot be read"),
    RuleSpec::new(
        "read.aws_credentials",
        r"(^|/)\.aws/credentials",
        "AWS credentials should not be read by Claude",
    ),
];
