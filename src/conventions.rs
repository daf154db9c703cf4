//! Per-ecosystem file layout conventions
//!
//! The rule tables never name a concrete manifest or lint config. They ask
//! the active [`Conventions`] for it, so one set of rules covers every
//! supported ecosystem.

use crate::probe::probe;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const README: &str = "README.md";
pub const GITIGNORE: &str = ".gitignore";
pub const CONTRIBUTING: &str = "CONTRIBUTING.md";
pub const LICENSE: &str = "LICENSE";
pub const SECURITY_POLICY: &str = "SECURITY.md";
pub const DOCS_DIR: &str = "docs";
pub const EXAMPLES_DIR: &str = "examples";
pub const CI_WORKFLOW: &str = ".github/workflows/ci.yml";
pub const RELEASE_WORKFLOW: &str = ".github/workflows/release.yml";
pub const BUG_REPORT_TEMPLATE: &str = ".github/ISSUE_TEMPLATE/bug_report.md";
pub const FEATURE_REQUEST_TEMPLATE: &str = ".github/ISSUE_TEMPLATE/feature_request.md";
pub const PR_TEMPLATE: &str = ".github/PULL_REQUEST_TEMPLATE.md";
pub const DEPENDENCY_UPDATE_CONFIG: &str = "renovate.json";

/// Supported project ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Rust,
    Go,
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rust => write!(f, "rust"),
            Self::Go => write!(f, "go"),
        }
    }
}

/// A directory expected in a conventional layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardDir {
    pub path: &'static str,
    pub description: &'static str,
}

/// Concrete paths for one ecosystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    pub ecosystem: Ecosystem,
    pub manifest: &'static str,
    pub lock_file: &'static str,
    pub entry_point_file: &'static str,
    pub entry_point_dir: &'static str,
    pub standard_dirs: [StandardDir; 3],
    /// File name endings that mark a test file
    pub test_suffixes: &'static [&'static str],
    /// Directories in which every source file counts as a test
    pub test_dirs: &'static [&'static str],
    /// Extension of source files, used together with `test_dirs`
    pub source_extension: &'static str,
    pub lint_config: &'static str,
    pub release_config: &'static str,
}

const RUST: Conventions = Conventions {
    ecosystem: Ecosystem::Rust,
    manifest: "Cargo.toml",
    lock_file: "Cargo.lock",
    entry_point_file: "src/main.rs",
    entry_point_dir: "src/bin",
    standard_dirs: [
        StandardDir {
            path: "src",
            description: "Crate sources",
        },
        StandardDir {
            path: "tests",
            description: "Integration tests",
        },
        StandardDir {
            path: "src/bin",
            description: "Binary entry points",
        },
    ],
    test_suffixes: &["_test.rs", "_tests.rs"],
    test_dirs: &["tests"],
    source_extension: "rs",
    lint_config: "clippy.toml",
    release_config: "release-plz.toml",
};

const GO: Conventions = Conventions {
    ecosystem: Ecosystem::Go,
    manifest: "go.mod",
    lock_file: "go.sum",
    entry_point_file: "main.go",
    entry_point_dir: "cmd",
    standard_dirs: [
        StandardDir {
            path: "internal",
            description: "Internal packages",
        },
        StandardDir {
            path: "pkg",
            description: "Public packages",
        },
        StandardDir {
            path: "cmd",
            description: "Entry points",
        },
    ],
    test_suffixes: &["_test.go"],
    test_dirs: &[],
    source_extension: "go",
    lint_config: ".golangci.yml",
    release_config: ".goreleaser.yml",
};

impl Conventions {
    pub fn for_ecosystem(ecosystem: Ecosystem) -> &'static Conventions {
        match ecosystem {
            Ecosystem::Rust => &RUST,
            Ecosystem::Go => &GO,
        }
    }

    /// Name shown for the test-file item, covering both suffix and directory rules
    pub fn test_pattern(&self) -> String {
        let suffix = self.test_suffixes.first().map(|s| format!("*{}", s));
        let dirs = self
            .test_dirs
            .iter()
            .map(|d| format!("{}/*.{}", d, self.source_extension));
        suffix.into_iter().chain(dirs).collect::<Vec<_>>().join(", ")
    }

    /// Whether a path, relative to the project root, marks a test file
    pub fn is_test_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if self.test_suffixes.iter().any(|s| name.ends_with(s)) {
            return true;
        }

        let is_source = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.source_extension);

        is_source
            && path.ancestors().skip(1).any(|dir| {
                dir.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| self.test_dirs.contains(&n))
            })
    }
}

/// Pick the convention set for a project root
///
/// An explicit choice wins. Otherwise a Go module file selects Go and
/// everything else falls back to Rust.
pub fn detect_ecosystem(root: &Path, forced: Option<Ecosystem>) -> Ecosystem {
    if let Some(ecosystem) = forced {
        return ecosystem;
    }

    match probe(root, GO.manifest) {
        Ok(presence) if presence.is_file() => Ecosystem::Go,
        _ => Ecosystem::Rust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_ecosystem() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_ecosystem(dir.path(), None), Ecosystem::Rust);

        fs::write(dir.path().join("go.mod"), "module example.com/x\n").unwrap();
        assert_eq!(detect_ecosystem(dir.path(), None), Ecosystem::Go);
        assert_eq!(
            detect_ecosystem(dir.path(), Some(Ecosystem::Rust)),
            Ecosystem::Rust
        );
    }

    #[test]
    fn test_rust_test_file_rules() {
        let rust = Conventions::for_ecosystem(Ecosystem::Rust);
        assert!(rust.is_test_file(Path::new("src/parser_test.rs")));
        assert!(rust.is_test_file(Path::new("tests/cli.rs")));
        assert!(rust.is_test_file(Path::new("tests/common/mod.rs")));
        assert!(!rust.is_test_file(Path::new("src/lib.rs")));
        assert!(!rust.is_test_file(Path::new("tests/fixtures/data.json")));
        assert_eq!(rust.test_pattern(), "*_test.rs, tests/*.rs");
    }

    #[test]
    fn test_go_test_file_rules() {
        let go = Conventions::for_ecosystem(Ecosystem::Go);
        assert!(go.is_test_file(Path::new("internal/analyzer_test.go")));
        assert!(!go.is_test_file(Path::new("tests/helper.go")));
        assert_eq!(go.test_pattern(), "*_test.go");
    }
}
