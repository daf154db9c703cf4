//! Release-readiness gate

use crate::checklist::generate_checklist;
use crate::config::AnalyzerConfig;
use crate::conventions;
use crate::types::{AnalysisResult, Category, ChecklistItem, ItemStatus};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Outcome of the release gate for one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub project_name: String,
    pub overall_score: u8,
    pub min_score: u8,
    /// True when there are no blockers
    pub passed: bool,
    /// Reasons the project cannot be released yet
    pub blockers: Vec<String>,
    /// Pre-publication checklist, for display only
    pub checklist: Vec<ChecklistItem>,
}

/// Decide whether an analyzed project may be released
///
/// The gate blocks on the overall score and on a missing license file. The
/// checklist is attached but never affects the verdict.
pub fn check_readiness(result: &AnalysisResult, config: &AnalyzerConfig) -> ReadinessReport {
    let min_score = config.release_gate.min_score;
    let mut blockers = Vec::new();

    if result.overall_score < min_score {
        blockers.push(format!(
            "Readiness score {} is below the required {}; run '{}' first",
            result.overall_score, min_score, config.scaffold_command
        ));
    }

    let license_missing = result
        .category(Category::Licensing)
        .and_then(|c| c.item(conventions::LICENSE))
        .map_or(true, |item| item.status != ItemStatus::Present);
    if license_missing {
        blockers.push(format!("{} file not found", conventions::LICENSE));
    }

    let passed = blockers.is_empty();
    info!(
        "Release gate for '{}': {} (score {}/{})",
        result.project_name,
        if passed { "passed" } else { "blocked" },
        result.overall_score,
        min_score
    );

    ReadinessReport {
        project_name: result.project_name.clone(),
        overall_score: result.overall_score,
        min_score,
        passed,
        blockers,
        checklist: generate_checklist(result, &config.checklist),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryResult, Item, ProjectKind, Status};

    fn result(overall_score: u8, license_present: bool) -> AnalysisResult {
        AnalysisResult {
            project_path: "/tmp/demo".to_string(),
            project_name: "demo".to_string(),
            project_kind: ProjectKind::Library,
            overall_score,
            categories: vec![CategoryResult {
                name: Category::Licensing,
                score: if license_present { 100 } else { 33 },
                status: Status::Good,
                description: String::new(),
                items: vec![Item {
                    name: "LICENSE".to_string(),
                    status: if license_present {
                        ItemStatus::Present
                    } else {
                        ItemStatus::Missing
                    },
                    required: true,
                    description: "License file".to_string(),
                    path: None,
                }],
            }],
            missing: Vec::new(),
            recommendations: Vec::new(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_gate_passes_at_minimum() {
        let report = check_readiness(&result(90, true), &AnalyzerConfig::default());
        assert!(report.passed);
        assert!(report.blockers.is_empty());
        assert_eq!(report.checklist.len(), 10);
    }

    #[test]
    fn test_gate_blocks_below_minimum() {
        let report = check_readiness(&result(89, true), &AnalyzerConfig::default());
        assert!(!report.passed);
        assert_eq!(report.blockers.len(), 1);
        assert!(report.blockers[0].contains("89"));
    }

    #[test]
    fn test_gate_blocks_without_license() {
        let report = check_readiness(&result(95, false), &AnalyzerConfig::default());
        assert!(!report.passed);
        assert_eq!(report.blockers, vec!["LICENSE file not found".to_string()]);
    }

    #[test]
    fn test_custom_minimum() {
        let config = AnalyzerConfig::builder().min_release_score(60).build();
        let report = check_readiness(&result(65, true), &config);
        assert!(report.passed);
        assert_eq!(report.min_score, 60);
    }
}
