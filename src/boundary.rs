//! Project root detection and path containment.

use once_cell::unsync::OnceCell;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Directory whose presence marks a project root.
pub const DEFAULT_MARKER: &str = ".claude";

/// Where a candidate path sits relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    /// The path could not be resolved; callers treat this as outside.
    Unresolvable,
}

impl Containment {
    pub fn is_inside(self) -> bool {
        self == Containment::Inside
    }
}

/// Finds the project root once and answers containment questions against it.
#[derive(Debug)]
pub struct BoundaryResolver {
    start: PathBuf,
    marker: String,
    root: OnceCell<PathBuf>,
}

impl BoundaryResolver {
    pub fn new(start: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            marker: marker.into(),
            root: OnceCell::new(),
        }
    }

    /// The project root, resolved on first use.
    pub fn root(&self) -> io::Result<&Path> {
        self.root
            .get_or_try_init(|| find_project_root(&self.start, &self.marker))
            .map(PathBuf::as_path)
    }

    /// Check whether `candidate` lies inside the project root.
    pub fn contains(&self, candidate: &str) -> Containment {
        let Ok(root) = self.root() else {
            return Containment::Unresolvable;
        };
        match resolve_path(candidate, &self.start) {
            Ok(resolved) if resolved.starts_with(root) => Containment::Inside,
            Ok(_) => Containment::Outside,
            Err(_) => Containment::Unresolvable,
        }
    }
}

/// Walk up from `start` to the first directory containing `marker`.
///
/// Falls back to `start` itself when no ancestor has the marker.
pub fn find_project_root(start: &Path, marker: &str) -> io::Result<PathBuf> {
    let start = start.canonicalize()?;
    let found = start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf);
    Ok(found.unwrap_or(start))
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Rewrite a path under the home directory as `~/...`.
pub fn contract_tilde(path: &Path) -> Option<String> {
    let home = dirs::home_dir()?;
    let rest = path.strip_prefix(&home).ok()?;
    Some(format!("~/{}", rest.display()))
}

/// Resolve `.` and `..` without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_start = out.as_os_str().is_empty()
                    || matches!(out.components().next_back(), Some(Component::ParentDir));
                if at_start && !out.has_root() {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `path` to an absolute, symlink-free form.
///
/// Components are resolved left to right, so a symlink is followed before any
/// `..` after it is applied. The path does not need to exist: once a component
/// is missing, the rest is joined lexically. A dangling symlink is an error.
pub fn resolve_path(path: &str, base: &Path) -> io::Result<PathBuf> {
    let expanded = expand_tilde(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };

    let mut resolved = PathBuf::new();
    // True while `resolved` is a canonical path that exists.
    let mut canonical = false;
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                resolved.push(component.as_os_str());
                canonical = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
                if !canonical {
                    canonical = resolved.exists();
                }
            }
            Component::Normal(name) => {
                let next = resolved.join(name);
                if !canonical {
                    resolved = next;
                    continue;
                }
                match next.canonicalize() {
                    Ok(real) => resolved = real,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        if next.symlink_metadata().is_ok_and(|m| m.file_type().is_symlink()) {
                            return Err(io::Error::new(
                                io::ErrorKind::NotFound,
                                format!("dangling symlink: {}", next.display()),
                            ));
                        }
                        resolved = next;
                        canonical = false;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }
    Ok(resolved)
}

/// The spellings of a path that rules are matched against: as given, with
/// `~` expanded and dots resolved, and with the home directory shown as `~`.
pub fn path_forms(path: &str) -> Vec<String> {
    let mut forms = vec![path.to_string()];
    if path.is_empty() {
        return forms;
    }
    let expanded = normalize_lexically(&expand_tilde(path));
    let contracted = contract_tilde(&expanded);
    for form in [Some(expanded.to_string_lossy().into_owned()), contracted]
        .into_iter()
        .flatten()
    {
        if !forms.contains(&form) {
            forms.push(form);
        }
    }
    forms
}
