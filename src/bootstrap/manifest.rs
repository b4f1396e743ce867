//! Domain manifests: `{"files": {"<dest dir>": ["<file>", ...]}}`.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Destination directory to file names, fetched in manifest order.
    #[serde(default)]
    pub files: IndexMap<String, Vec<String>>,
}

/// One file a manifest asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the template source.
    pub source: String,
    /// Path relative to the project root.
    pub dest: PathBuf,
}

impl Manifest {
    pub fn parse(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Flatten into fetchable entries for `domain`.
    pub fn entries(&self, domain: &str) -> Vec<ManifestEntry> {
        self.files
            .iter()
            .flat_map(|(dir, names)| {
                names.iter().map(move |name| ManifestEntry {
                    source: format!("domains/{domain}/{dir}/{name}").replace("//", "/"),
                    dest: Path::new(dir).join(name),
                })
            })
            .collect()
    }
}

/// True when `dest` stays below the directory it is joined onto.
pub fn is_contained(dest: &Path) -> bool {
    let mut depth = 0usize;
    for component in dest.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries() {
        let manifest = Manifest::parse(
            br#"{"files": {"": ["Makefile"], "tests": ["conftest.py", "test_example.py"]}}"#,
        )
        .unwrap();
        let entries = manifest.entries("python");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].source, "domains/python/Makefile");
        assert_eq!(entries[0].dest, PathBuf::from("Makefile"));
        assert_eq!(entries[1].source, "domains/python/tests/conftest.py");
        assert_eq!(entries[1].dest, PathBuf::from("tests/conftest.py"));
    }

    #[test]
    fn test_entries_keep_manifest_order() {
        let manifest = Manifest::parse(
            br#"{"files": {"tests": ["conftest.py"], ".claude/commands": ["lint.md"], "": ["Makefile"]}}"#,
        )
        .unwrap();
        let dests: Vec<_> = manifest.entries("python").into_iter().map(|e| e.dest).collect();
        assert_eq!(
            dests,
            [
                PathBuf::from("tests/conftest.py"),
                PathBuf::from(".claude/commands/lint.md"),
                PathBuf::from("Makefile"),
            ]
        );
    }

    #[test]
    fn test_missing_files_field() {
        let manifest = Manifest::parse(b"{}").unwrap();
        assert!(manifest.entries("git").is_empty());
    }

    #[test]
    fn test_containment() {
        assert!(is_contained(Path::new("tests/conftest.py")));
        assert!(is_contained(Path::new("a/../b")));
        assert!(!is_contained(Path::new("../outside")));
        assert!(!is_contained(Path::new("/etc/passwd")));
        assert!(!is_contained(Path::new("a/../../b")));
    }
}
