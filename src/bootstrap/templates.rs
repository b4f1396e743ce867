//! Locally rendered project files: `CLAUDE.md` and `.gitignore`.

use std::fs;
use std::io;
use std::path::Path;

use super::project::ProjectConfig;

const DOMAINS_PREFIX: &str = "**Domains**: ";
const GITIGNORE_MARKER: &str = "# Claude Code specific";

pub const GITIGNORE_CONTENT: &str = "# Claude Code specific
TODO.md
CLAUDE.local.md
.claude/logs/
.claude/session-history/

# OS
.DS_Store
.DS_Store?
._*
Thumbs.db

# IDE
.vscode/
.idea/
*.swp
*.swo
*~
";

pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The project context document.
pub fn render_context(config: &ProjectConfig) -> String {
    let structure = config
        .domains
        .iter()
        .map(|d| format!("- **{}**: Domain-specific tooling and practices", title_case(d)))
        .collect::<Vec<_>>()
        .join("\n");
    let memory_bank = config.name.to_lowercase().replace(' ', "-");

    format!(
        "# Claude Code Project Context

## Project Overview
**Name**: {name}
**Type**: {kind}
**Description**: {description}

## Technology Stack
{DOMAINS_PREFIX}{domains}

## Development Principles
- Follow domain-specific best practices
- Use test-driven development (TDD)
- Maintain clean, documented code
- Infrastructure as Code where applicable

## Project Structure
This project uses modular Claude Code configuration with the following domains:
{structure}

## Safety & Restrictions
- File operations allowed within project directory only
- Always prompt for configuration changes
- No destructive operations outside project scope
- All infrastructure changes through code, not CLI

## Next Steps
1. Review domain-specific documentation
2. Run project setup: `make setup` or equivalent
3. Start development with Claude Code
4. Check TODO.md for current tasks

## Memory Bank
This project uses memory bank: `project-{memory_bank}`
",
        name = config.name,
        kind = config.project_type,
        description = config.description(),
        domains = config.domains.join(", "),
    )
}

/// Read the domain list back out of a rendered context document.
pub fn parse_domains(doc: &str) -> Vec<String> {
    doc.lines()
        .find_map(|line| line.strip_prefix(DOMAINS_PREFIX))
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreUpdate {
    Created,
    Updated,
    Unchanged,
}

/// Create `.gitignore` or append the block once.
pub fn update_gitignore(path: &Path) -> io::Result<GitignoreUpdate> {
    if !path.exists() {
        fs::write(path, GITIGNORE_CONTENT)?;
        return Ok(GitignoreUpdate::Created);
    }
    let existing = fs::read_to_string(path)?;
    if existing.contains(GITIGNORE_MARKER) {
        return Ok(GitignoreUpdate::Unchanged);
    }
    fs::write(path, format!("{existing}\n{GITIGNORE_CONTENT}"))?;
    Ok(GitignoreUpdate::Updated)
}
