//! Recommendations derived from aggregate scores

use crate::config::StatusThresholds;
use crate::types::{Category, CategoryResult, Priority, Recommendation, Status};

/// Generate recommendations from the overall score and category statuses
///
/// The two rules are independent: a low overall score adds one high-priority
/// scaffolding suggestion, and every category in the error tier adds its own
/// medium-priority suggestion.
pub fn generate_recommendations(
    overall_score: u8,
    categories: &[CategoryResult],
    thresholds: &StatusThresholds,
    scaffold_command: &str,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if overall_score < thresholds.warning {
        recommendations.push(Recommendation {
            title: "Add baseline open-source files".to_string(),
            description: "The project is missing the basic files expected of an open-source repository"
                .to_string(),
            command: Some(scaffold_command.to_string()),
            priority: Priority::High,
        });
    }

    recommendations.extend(
        categories
            .iter()
            .filter(|category| category.status == Status::Error)
            .map(|category| category_recommendation(category.name, scaffold_command)),
    );

    recommendations
}

fn category_recommendation(category: Category, scaffold_command: &str) -> Recommendation {
    let (title, description, command) = match category {
        Category::BasicStructure => (
            "Complete the basic project structure",
            "Add the package manifest, README and ignore rules expected at the project root",
            Some(scaffold_command),
        ),
        Category::Documentation => (
            "Improve documentation",
            "Write a README and add a contribution guide, docs directory and usage examples",
            Some(scaffold_command),
        ),
        Category::HostIntegration => (
            "Improve host integration",
            "Add CI/CD workflows and issue/PR templates to make the most of the hosting platform",
            Some(scaffold_command),
        ),
        Category::QualityTooling => (
            "Adopt quality tooling",
            "Add linter configuration and tests to raise code quality",
            None,
        ),
        Category::Dependencies => (
            "Tidy dependency management",
            "Commit a lock file next to the manifest and check dependencies for known vulnerabilities",
            None,
        ),
        Category::Licensing => (
            "Add a license",
            "Choose an open-source license and add it as a LICENSE file",
            Some(scaffold_command),
        ),
    };

    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        command: command.map(String::from),
        priority: Priority::Medium,
    }
}
