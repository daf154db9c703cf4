//! Extraction of missing items for triage

use crate::types::{CategoryResult, ItemStatus, MissingItem, Priority};

/// Collect every missing item across all categories
///
/// Required items are high priority, everything else is low. Outdated items
/// are partially satisfied and are not reported here.
pub fn extract_missing_items(categories: &[CategoryResult], scaffold_command: &str) -> Vec<MissingItem> {
    categories
        .iter()
        .flat_map(|category| {
            category
                .items
                .iter()
                .filter(|item| item.status == ItemStatus::Missing)
                .map(move |item| MissingItem {
                    name: item.name.clone(),
                    category: category.name,
                    priority: if item.required {
                        Priority::High
                    } else {
                        Priority::Low
                    },
                    description: item.description.clone(),
                    action: format!("Run '{}' to generate missing files", scaffold_command),
                })
        })
        .collect()
}
