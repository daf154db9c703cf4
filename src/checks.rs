//! Specialized checkers that each produce one checklist item

use crate::config::TestScanConfig;
use crate::conventions::{Conventions, Ecosystem};
use crate::probe::{probe, Presence};
use crate::types::{Item, ItemStatus};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Everything a checker needs to look at one project
#[derive(Debug, Clone)]
pub struct ScanContext {
    pub root: PathBuf,
    pub conventions: &'static Conventions,
    pub test_scan: TestScanConfig,
}

/// A single kind of check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// A file (or any entry) exists at the path
    File(&'static str),
    /// A directory exists at the path
    Dir(&'static str),
    /// At least one test file exists anywhere in the tree
    TestFiles,
    /// Manifest and lock file are both present
    ManifestWithLock,
    /// The manifest declaring direct dependencies is present
    DirectDependencies,
    /// Not implemented yet, always passes
    Assumed(AssumedCheck),
}

/// Checks that are reported as passing until a real implementation exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssumedCheck {
    VulnerabilityScan,
    ManifestLicenseField,
}

impl AssumedCheck {
    fn name(self) -> &'static str {
        match self {
            Self::VulnerabilityScan => "vulnerability scan",
            Self::ManifestLicenseField => "manifest license field",
        }
    }

    fn hint(self, conventions: &Conventions) -> String {
        match self {
            Self::VulnerabilityScan => match conventions.ecosystem {
                Ecosystem::Rust => "verify with cargo audit".to_string(),
                Ecosystem::Go => "verify with govulncheck".to_string(),
            },
            Self::ManifestLicenseField => format!("verify the license field in {}", conventions.manifest),
        }
    }
}

impl Check {
    /// Run the check and build its item
    pub fn run(&self, ctx: &ScanContext, description: &str, required: bool) -> Item {
        let (name, status, path) = match *self {
            Check::File(relative) => {
                let found = presence(ctx, relative).present;
                (relative.to_string(), status_of(found), Some(full_path(ctx, relative)))
            }
            Check::Dir(relative) => {
                let found = presence(ctx, relative).is_dir();
                (format!("{}/", relative), status_of(found), Some(full_path(ctx, relative)))
            }
            Check::TestFiles => {
                let count = count_test_files(ctx);
                (
                    format!("{} ({} files)", ctx.conventions.test_pattern(), count),
                    status_of(count > 0),
                    None,
                )
            }
            Check::ManifestWithLock => {
                let manifest = presence(ctx, ctx.conventions.manifest).present;
                let lock = presence(ctx, ctx.conventions.lock_file).present;
                let status = match (manifest, lock) {
                    (true, true) => ItemStatus::Present,
                    (true, false) => ItemStatus::Outdated,
                    _ => ItemStatus::Missing,
                };
                (
                    format!("{} + {}", ctx.conventions.manifest, ctx.conventions.lock_file),
                    status,
                    None,
                )
            }
            Check::DirectDependencies => {
                let manifest = ctx.conventions.manifest;
                let found = presence(ctx, manifest).present;
                (
                    "direct dependencies".to_string(),
                    status_of(found),
                    Some(full_path(ctx, manifest)),
                )
            }
            Check::Assumed(assumed) => {
                return Item {
                    name: assumed.name().to_string(),
                    status: ItemStatus::Present,
                    required,
                    description: format!("{} ({})", description, assumed.hint(ctx.conventions)),
                    path: None,
                };
            }
        };

        Item {
            name,
            status,
            required,
            description: description.to_string(),
            path,
        }
    }
}

fn status_of(found: bool) -> ItemStatus {
    if found {
        ItemStatus::Present
    } else {
        ItemStatus::Missing
    }
}

fn full_path(ctx: &ScanContext, relative: &str) -> String {
    ctx.root.join(relative).display().to_string()
}

/// Probe a path, counting any I/O failure as absent
fn presence(ctx: &ScanContext, relative: &str) -> Presence {
    match probe(&ctx.root, relative) {
        Ok(presence) => presence,
        Err(e) => {
            warn!("Could not check {}: {} (treating as missing)", relative, e);
            Presence::ABSENT
        }
    }
}

/// Walk the whole tree once and count test files
///
/// Unreadable entries are skipped. When a deadline is configured and passes,
/// the walk stops and the count so far is returned.
pub fn count_test_files(ctx: &ScanContext) -> usize {
    let deadline = ctx.test_scan.timeout().map(|t| Instant::now() + t);
    let skip_dirs = &ctx.test_scan.skip_dirs;
    let mut count = 0;

    let walker = WalkDir::new(&ctx.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| skip_dirs.iter().any(|s| s == name))
        });

    for entry in walker {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            warn!(
                "Test file scan of {} hit its deadline, using partial count {}",
                ctx.root.display(),
                count
            );
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&ctx.root)
            .unwrap_or_else(|_| Path::new(entry.file_name()));
        if ctx.conventions.is_test_file(relative) {
            count += 1;
        }
    }

    debug!("Found {} test files under {}", count, ctx.root.display());
    count
}
