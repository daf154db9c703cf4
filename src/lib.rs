//! # oss_readiness
//!
//! Audits a repository against an open-source readiness checklist and reports:
//! - **Readiness score**: a 0-100 summary built from six weighted categories
//! - **Category breakdown**: structure, documentation, host integration,
//!   quality tooling, dependency management and licensing
//! - **Missing items**: every absent file, triaged by priority
//! - **Recommendations**: next steps for the weakest areas
//! - **Release gate**: a pre-publication checklist and minimum-score check
//!
//! ## Quick Start
//!
//! ```no_run
//! use oss_readiness::{analyze_project, check_readiness, AnalyzerConfig};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = AnalyzerConfig::default();
//! let result = analyze_project(Path::new("."), &config).await?;
//!
//! for category in &result.categories {
//!     println!("{}: {} ({})", category.name, category.score, category.status);
//! }
//!
//! let gate = check_readiness(&result, &config);
//! println!("ready to publish: {}", gate.passed);
//! # Ok(())
//! # }
//! ```
//!
//! Only file and directory presence is inspected. Nothing is parsed, executed
//! or cached, so two runs over an unchanged tree give identical results.

mod analyze;
mod checklist;
mod checks;
mod config;
mod conventions;
mod detect;
mod error;
mod missing;
mod probe;
mod readiness;
mod recommend;
mod rules;
mod scoring;
mod types;

// Re-export public API
pub use analyze::{analyze_path, analyze_project};
pub use checklist::{generate_checklist, CHECKLIST_LEN};
pub use checks::{AssumedCheck, Check, ScanContext};
pub use config::{
    AnalyzerConfig, AnalyzerConfigBuilder, ChecklistThresholds, ReleaseGate, StatusThresholds, TestScanConfig,
    Threshold,
};
pub use conventions::{Conventions, Ecosystem};
pub use error::{AnalyzerError, Result};
pub use probe::{probe, Presence};
pub use readiness::{check_readiness, ReadinessReport};
pub use rules::{rules_for, Rule};
pub use scoring::{calculate_category_score, calculate_overall_score, determine_status};
pub use types::{
    AnalysisResult, Category, CategoryResult, ChecklistItem, ChecklistStatus, Item, ItemStatus, MissingItem,
    Priority, ProjectKind, Recommendation, Status,
};
