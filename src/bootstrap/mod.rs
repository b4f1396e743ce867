//! Project bootstrap: fetch the best-practice templates into a new project.
//!
//! Setup is partial-success. A file that cannot be fetched is reported and
//! skipped, a domain whose manifest cannot be fetched is skipped as a whole,
//! and nothing already written is rolled back.

mod manifest;
mod project;
mod source;
mod templates;

pub use manifest::{Manifest, ManifestEntry};
pub use project::{AVAILABLE_DOMAINS, PROJECT_TYPES, ProjectConfig, interactive_setup};
pub use source::{DirSource, FetchError, HttpSource, TemplateSource, open_source};
pub use templates::{GitignoreUpdate, parse_domains, render_context, update_gitignore};

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::BootstrapArgs;
use crate::config::{Config, ConfigError};

/// Core files every project receives. Stored without the `core/` prefix.
pub const CORE_FILES: &[&str] = &[
    "core/.claude/settings.json",
    "core/.claude/hooks/pre-tool-use-safety.py",
    "core/.claude/hooks/project-boundary.py",
    "core/.claude/hooks/prompt-safety-check.py",
    "core/.claude/commands/help.md",
];

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open template source: {0}")]
    Source(#[from] FetchError),
}

/// What a setup run did.
#[derive(Debug, Default)]
pub struct SetupReport {
    /// Files written, relative to the project root.
    pub fetched: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub applied_domains: Vec<String>,
    pub failed_domains: Vec<String>,
    pub gitignore: Option<GitignoreUpdate>,
    /// Hook files marked executable.
    pub executables: Vec<PathBuf>,
}

pub struct ProjectBootstrap {
    root: PathBuf,
    source: Box<dyn TemplateSource>,
}

impl ProjectBootstrap {
    pub fn new(root: impl Into<PathBuf>, source: Box<dyn TemplateSource>) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the project layout for `config`, writing progress to `out`.
    pub fn setup_project(
        &self,
        config: &ProjectConfig,
        out: &mut impl Write,
    ) -> Result<SetupReport, BootstrapError> {
        let mut report = SetupReport::default();
        writeln!(out, "\n🚀 Setting up project: {}", config.name)?;

        let claude_dir = self.root.join(".claude");
        fs::create_dir_all(&claude_dir)?;

        writeln!(out, "   📦 Fetching core configuration...")?;
        for &path in CORE_FILES {
            let dest = path.strip_prefix("core/").unwrap_or(path);
            self.fetch_into(path, Path::new(dest), &mut report, out)?;
        }

        writeln!(out, "   🔧 Applying domains: {}", config.domains.join(", "))?;
        for domain in &config.domains {
            self.apply_domain(domain, &mut report, out)?;
        }

        fs::write(self.root.join("CLAUDE.md"), render_context(config))?;
        writeln!(out, "   ✅ Created CLAUDE.md")?;

        let gitignore = update_gitignore(&self.root.join(".gitignore"))?;
        match gitignore {
            GitignoreUpdate::Created => writeln!(out, "   ✅ Created .gitignore")?,
            GitignoreUpdate::Updated => writeln!(out, "   ✅ Updated .gitignore")?,
            GitignoreUpdate::Unchanged => {}
        }
        report.gitignore = Some(gitignore);

        report.executables = mark_executable(&claude_dir.join("hooks"))?;

        writeln!(out, "✅ Project setup complete!")?;
        print_next_steps(config, out)?;
        Ok(report)
    }

    fn apply_domain(
        &self,
        domain: &str,
        report: &mut SetupReport,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out, "   📦 Applying {domain} domain...")?;

        let manifest_path = format!("domains/{domain}/manifest.json");
        let manifest = self
            .source
            .fetch(&manifest_path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| Manifest::parse(&bytes).map_err(|e| e.to_string()));
        let manifest = match manifest {
            Ok(manifest) => manifest,
            Err(e) => {
                warn(report, out, format!("Failed to fetch manifest for {domain}: {e}"))?;
                report.failed_domains.push(domain.to_string());
                return Ok(());
            }
        };

        for entry in manifest.entries(domain) {
            if !manifest::is_contained(&entry.dest) {
                warn(
                    report,
                    out,
                    format!("Skipping {}: outside the project directory", entry.dest.display()),
                )?;
                continue;
            }
            self.fetch_into(&entry.source, &entry.dest, report, out)?;
        }
        report.applied_domains.push(domain.to_string());
        Ok(())
    }

    /// Fetch one file. Failures become warnings; only output errors propagate.
    fn fetch_into(
        &self,
        source_path: &str,
        dest: &Path,
        report: &mut SetupReport,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let written = self
            .source
            .fetch(source_path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| write_file(&self.root.join(dest), &bytes).map_err(|e| e.to_string()));
        match written {
            Ok(()) => {
                report.fetched.push(dest.to_path_buf());
                Ok(())
            }
            Err(e) => warn(report, out, format!("Failed to fetch {source_path}: {e}")),
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}

fn warn(report: &mut SetupReport, out: &mut impl Write, message: String) -> io::Result<()> {
    writeln!(out, "   ⚠️  {message}")?;
    report.warnings.push(message);
    Ok(())
}

#[cfg(unix)]
fn mark_executable(dir: &Path) -> io::Result<Vec<PathBuf>> {
    use std::os::unix::fs::PermissionsExt;

    let mut marked = Vec::new();
    if !dir.is_dir() {
        return Ok(marked);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_script = path.extension().is_some_and(|ext| ext == "py");
        if is_script && path.is_file() {
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
            marked.push(path);
        }
    }
    marked.sort();
    Ok(marked)
}

#[cfg(not(unix))]
fn mark_executable(_dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(Vec::new())
}

fn print_next_steps(config: &ProjectConfig, out: &mut impl Write) -> io::Result<()> {
    let mut steps = vec![
        "Review CLAUDE.md for project context".to_string(),
        "Initialize git repository: git init".to_string(),
        "Start Claude Code: claude".to_string(),
    ];
    if config.domains.iter().any(|d| d == "python") {
        steps.push("Set up Python environment: make setup".to_string());
    }
    if config.domains.iter().any(|d| d == "aws") {
        steps.push("Configure AWS credentials".to_string());
    }

    writeln!(out, "\n🎯 Next Steps:")?;
    for (i, step) in steps.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, step)?;
    }
    writeln!(
        out,
        "\n💡 Pro tip: Use 'claude \"/help\"' to see available commands"
    )
}

fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🤖 Claude Code Project Bootstrap")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// Entry point for `project-guard bootstrap`.
pub fn run(
    args: &BootstrapArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<SetupReport, BootstrapError> {
    let root = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    fs::create_dir_all(&root)?;

    let settings = Config::load(Some(root.as_path()))?.compile()?;
    let base_url = args.base_url.as_deref().unwrap_or(settings.base_url());
    let source = open_source(base_url, settings.fetch_timeout())?;

    print_banner(out)?;
    writeln!(out, "Templates: {}", source.describe())?;

    let config = match args.non_interactive() {
        Some((name, domains)) => {
            ProjectConfig::from_args(name, domains, args.project_type.as_deref())
        }
        None => {
            let default_name = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string());
            interactive_setup(input, out, &default_name)?
        }
    };

    ProjectBootstrap::new(root, source).setup_project(&config, out)
}
