//! Project root resolution and project-kind detection

use crate::conventions::Conventions;
use crate::error::{AnalyzerError, Result};
use crate::probe::probe;
use crate::types::ProjectKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve the project root to an absolute, existing, listable directory
pub fn resolve_root(project_path: &Path) -> Result<PathBuf> {
    let root = match project_path.canonicalize() {
        Ok(root) => root,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AnalyzerError::PathNotFound(project_path.to_path_buf()));
        }
        Err(e) => return Err(AnalyzerError::resolution(project_path, e)),
    };

    if !root.is_dir() {
        return Err(AnalyzerError::NotADirectory(root));
    }

    // Probes below the root swallow permission errors, so the root must be
    // both listable and searchable here
    let access = fs::read_dir(&root).and_then(|_| fs::metadata(root.join(".")));
    if let Err(source) = access {
        return Err(AnalyzerError::RootUnreadable { path: root, source });
    }

    Ok(root)
}

/// Get the name of the project from its root directory
pub fn get_project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Classify the project from its entry points and manifest
pub fn detect_project_kind(root: &Path, conventions: &Conventions) -> ProjectKind {
    let exists = |relative: &str| probe(root, relative).map(|p| p.present).unwrap_or(false);

    if exists(conventions.entry_point_file) {
        if exists(conventions.entry_point_dir) {
            ProjectKind::CliTool
        } else {
            ProjectKind::Application
        }
    } else if exists(conventions.manifest) {
        ProjectKind::Library
    } else {
        ProjectKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::Ecosystem;

    #[test]
    fn test_resolve_root_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(
            resolve_root(&missing),
            Err(AnalyzerError::PathNotFound(p)) if p == missing
        ));

        let file = dir.path().join("Cargo.toml");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            resolve_root(&file),
            Err(AnalyzerError::NotADirectory(_))
        ));

        let root = resolve_root(dir.path()).unwrap();
        assert!(root.is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("locked");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("README.md"), "# locked").unwrap();
        fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass permission bits
        let privileged = fs::read_dir(&root).is_ok();
        let result = resolve_root(&root);
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        if privileged {
            return;
        }

        let err = result.unwrap_err();
        assert!(matches!(err, AnalyzerError::RootUnreadable { .. }));
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_project_name_is_last_component() {
        assert_eq!(get_project_name(Path::new("/work/my-tool")), "my-tool");
    }

    #[test]
    fn test_detect_rust_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let rust = Conventions::for_ecosystem(Ecosystem::Rust);

        assert_eq!(detect_project_kind(root, rust), ProjectKind::Unknown);

        fs::write(root.join("Cargo.toml"), "[package]\n").unwrap();
        assert_eq!(detect_project_kind(root, rust), ProjectKind::Library);

        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/main.rs"), "fn main() {}\n").unwrap();
        assert_eq!(detect_project_kind(root, rust), ProjectKind::Application);

        fs::create_dir(root.join("src/bin")).unwrap();
        assert_eq!(detect_project_kind(root, rust), ProjectKind::CliTool);
    }

    #[test]
    fn test_detect_go_cli() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("main.go"), "package main\n").unwrap();
        fs::create_dir(root.join("cmd")).unwrap();

        let go = Conventions::for_ecosystem(Ecosystem::Go);
        assert_eq!(detect_project_kind(root, go), ProjectKind::CliTool);
    }
}
