//! Project configuration, from flags or from an interactive session.

use std::io::{self, BufRead, Write};

use super::templates::title_case;

pub const PROJECT_TYPES: &[&str] = &[
    "Web API",
    "Data Pipeline",
    "CLI Tool",
    "Web Application",
    "Library/Package",
    "Custom",
];

/// `git` is always applied and always first.
pub const AVAILABLE_DOMAINS: &[&str] = &["git", "python", "aws", "docker", "database"];

const DEFAULT_DESCRIPTION: &str = "A project following Claude Code best practices";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub project_type: String,
    pub domains: Vec<String>,
    pub description: String,
}

impl ProjectConfig {
    /// Build from `--name`, `--domains` and `--type`.
    pub fn from_args(name: &str, domains: &str, project_type: Option<&str>) -> Self {
        let mut list = vec!["git".to_string()];
        for domain in domains.split(',').map(str::trim) {
            if !domain.is_empty() && !list.iter().any(|d| d == domain) {
                list.push(domain.to_string());
            }
        }
        Self {
            name: name.to_string(),
            project_type: project_type.unwrap_or("Custom").to_string(),
            domains: list,
            description: format!("A {} project", project_type.unwrap_or("custom")),
        }
    }

    pub fn description(&self) -> &str {
        if self.description.trim().is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            &self.description
        }
    }
}

/// Read one line; end of input is an error so a closed stdin cannot loop.
fn ask(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed during interactive setup",
        ));
    }
    Ok(line.trim().to_string())
}

/// Walk the user through name, type, domains and description.
pub fn interactive_setup(
    input: &mut impl BufRead,
    out: &mut impl Write,
    default_name: &str,
) -> io::Result<ProjectConfig> {
    let name = ask(input, out, &format!("📝 Project name [{default_name}]: "))?;
    let name = if name.is_empty() {
        default_name.to_string()
    } else {
        name
    };

    writeln!(out, "\n📁 Project type:")?;
    for (i, kind) in PROJECT_TYPES.iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, kind)?;
    }
    let project_type = loop {
        let answer = ask(input, out, "Select project type [1]: ")?;
        let choice = if answer.is_empty() {
            Some(1)
        } else {
            answer.parse::<usize>().ok()
        };
        match choice {
            Some(n) if (1..=PROJECT_TYPES.len()).contains(&n) => break PROJECT_TYPES[n - 1],
            _ => writeln!(
                out,
                "Invalid choice. Please enter 1-{}",
                PROJECT_TYPES.len()
            )?,
        }
    };

    writeln!(out, "\n🔧 Technology domains:")?;
    writeln!(out, "   ✅ Git (included by default)")?;
    let mut domains = vec!["git".to_string()];
    for domain in &AVAILABLE_DOMAINS[1..] {
        let answer = ask(
            input,
            out,
            &format!("   ❓ Add {}? (y/n) [n]: ", title_case(domain)),
        )?;
        if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            domains.push(domain.to_string());
        }
    }

    let description = ask(input, out, "\n🎯 Project description: ")?;

    Ok(ProjectConfig {
        name,
        project_type: project_type.to_string(),
        domains,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_args() {
        let config = ProjectConfig::from_args("demo", "python, git,,aws,python", None);
        assert_eq!(config.domains, vec!["git", "python", "aws"]);
        assert_eq!(config.project_type, "Custom");
        assert_eq!(config.description, "A custom project");

        let typed = ProjectConfig::from_args("svc", "docker", Some("Web API"));
        assert_eq!(typed.domains, vec!["git", "docker"]);
        assert_eq!(typed.description, "A Web API project");
    }

    #[test]
    fn test_empty_description_falls_back() {
        let mut config = ProjectConfig::from_args("demo", "git", None);
        config.description = "  ".to_string();
        assert_eq!(config.description(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_interactive_defaults() {
        let mut input = Cursor::new("\n\nn\nn\nn\nn\n\n");
        let mut out = Vec::new();
        let config = interactive_setup(&mut input, &mut out, "my-dir").unwrap();
        assert_eq!(config.name, "my-dir");
        assert_eq!(config.project_type, "Web API");
        assert_eq!(config.domains, vec!["git"]);
        assert_eq!(config.description, "");
    }

    #[test]
    fn test_interactive_choices_and_retry() {
        let mut input = Cursor::new("shop\n9\nabc\n3\nyes\nn\nY\nn\nA tiny tool\n");
        let mut out = Vec::new();
        let config = interactive_setup(&mut input, &mut out, "ignored").unwrap();
        assert_eq!(config.name, "shop");
        assert_eq!(config.project_type, "CLI Tool");
        assert_eq!(config.domains, vec!["git", "python", "docker"]);
        assert_eq!(config.description, "A tiny tool");

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Invalid choice. Please enter 1-6").count(), 2);
        assert!(transcript.contains("❓ Add Python? (y/n) [n]: "));
    }

    #[test]
    fn test_interactive_eof_is_error() {
        let mut input = Cursor::new("demo\n");
        let mut out = Vec::new();
        let err = interactive_setup(&mut input, &mut out, "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
