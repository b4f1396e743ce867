use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "project-guard",
    version,
    about = "Safety hooks and project bootstrap for Claude Code"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// PreToolUse hook: block dangerous commands and sensitive file access
    Safety,
    /// PreToolUse hook: keep file operations inside the project root
    Boundary,
    /// UserPromptSubmit hook: flag suspicious prompts
    Prompt,
    /// Scaffold a project from the best-practice templates
    Bootstrap(BootstrapArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct BootstrapArgs {
    #[arg(long, help = "Run interactive setup")]
    pub interactive: bool,
    #[arg(long, help = "Project name")]
    pub name: Option<String>,
    #[arg(long, help = "Comma-separated list of domains")]
    pub domains: Option<String>,
    #[arg(long = "type", help = "Project type")]
    pub project_type: Option<String>,
    #[arg(long, help = "Base URL (or local directory) for fetching templates")]
    pub base_url: Option<String>,
    #[arg(long, help = "Project directory (defaults to the current directory)")]
    pub dir: Option<PathBuf>,
}

impl BootstrapArgs {
    /// `--name` and `--domains` together select non-interactive mode.
    pub fn non_interactive(&self) -> Option<(&str, &str)> {
        if self.interactive {
            return None;
        }
        match (self.name.as_deref(), self.domains.as_deref()) {
            (Some(name), Some(domains)) if !name.is_empty() && !domains.is_empty() => {
                Some((name, domains))
            }
            _ => None,
        }
    }
}
