//! Declarative rule tables for the six audit categories

use crate::checks::{AssumedCheck, Check, ScanContext};
use crate::config::StatusThresholds;
use crate::conventions::{self, Conventions};
use crate::scoring::{calculate_category_score, determine_status};
use crate::types::{Category, CategoryResult};
use tracing::debug;

/// One row of a category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub check: Check,
    pub description: &'static str,
    pub required: bool,
}

const fn required(check: Check, description: &'static str) -> Rule {
    Rule {
        check,
        description,
        required: true,
    }
}

const fn optional(check: Check, description: &'static str) -> Rule {
    Rule {
        check,
        description,
        required: false,
    }
}

/// The ordered rule table of a category
pub fn rules_for(category: Category, conv: &Conventions) -> Vec<Rule> {
    match category {
        Category::BasicStructure => {
            let mut rules = vec![
                required(Check::File(conv.manifest), "Package manifest"),
                optional(Check::File(conv.lock_file), "Dependency lock file"),
                required(Check::File(conventions::README), "Project description"),
                required(Check::File(conventions::GITIGNORE), "Version control ignore rules"),
            ];
            rules.extend(
                conv.standard_dirs
                    .iter()
                    .map(|dir| optional(Check::Dir(dir.path), dir.description)),
            );
            rules
        }
        Category::Documentation => vec![
            required(Check::File(conventions::README), "Project description"),
            optional(Check::File(conventions::CONTRIBUTING), "Contribution guide"),
            optional(Check::Dir(conventions::DOCS_DIR), "Documentation directory"),
            optional(Check::Dir(conventions::EXAMPLES_DIR), "Usage examples"),
        ],
        Category::HostIntegration => vec![
            optional(Check::File(conventions::CI_WORKFLOW), "CI workflow"),
            optional(Check::File(conventions::RELEASE_WORKFLOW), "Release automation workflow"),
            optional(Check::File(conventions::BUG_REPORT_TEMPLATE), "Bug report template"),
            optional(Check::File(conventions::FEATURE_REQUEST_TEMPLATE), "Feature request template"),
            optional(Check::File(conventions::PR_TEMPLATE), "Pull request template"),
            optional(Check::File(conventions::SECURITY_POLICY), "Security policy"),
        ],
        Category::QualityTooling => vec![
            optional(Check::File(conv.lint_config), "Linter configuration"),
            optional(Check::File(conv.release_config), "Release tooling configuration"),
            required(Check::TestFiles, "Test files"),
            optional(Check::File(conventions::DEPENDENCY_UPDATE_CONFIG), "Automated dependency updates"),
        ],
        Category::Dependencies => vec![
            required(Check::ManifestWithLock, "Manifest and lock file consistency"),
            optional(Check::DirectDependencies, "Direct dependencies declared"),
            required(Check::Assumed(AssumedCheck::VulnerabilityScan), "Known vulnerabilities"),
        ],
        Category::Licensing => vec![
            required(Check::File(conventions::LICENSE), "License file"),
            optional(Check::Assumed(AssumedCheck::ManifestLicenseField), "License declared in manifest"),
        ],
    }
}

/// One-line description of what a category covers
pub fn category_description(category: Category) -> &'static str {
    match category {
        Category::BasicStructure => "Basic directory structure and project files",
        Category::Documentation => "Project documentation completeness",
        Category::HostIntegration => "Integration with source-control host features",
        Category::QualityTooling => "Tools supporting code quality and maintainability",
        Category::Dependencies => "Project dependency management status",
        Category::Licensing => "Project license information",
    }
}

/// Run every rule of a category and score the result
pub fn evaluate_category(
    category: Category,
    ctx: &ScanContext,
    thresholds: &StatusThresholds,
) -> CategoryResult {
    let items: Vec<_> = rules_for(category, ctx.conventions)
        .iter()
        .map(|rule| rule.check.run(ctx, rule.description, rule.required))
        .collect();

    let score = calculate_category_score(&items);
    let status = determine_status(score, thresholds);
    debug!("{}: score {} ({})", category, score, status);

    CategoryResult {
        name: category,
        score,
        status,
        description: category_description(category).to_string(),
        items,
    }
}
