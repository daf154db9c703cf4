//! Readiness scoring and status classification

use crate::config::StatusThresholds;
use crate::types::{Item, ItemStatus, Status};

/// Weight of a required item
pub const REQUIRED_WEIGHT: u32 = 2;
/// Weight of an optional item
pub const OPTIONAL_WEIGHT: u32 = 1;

fn weight(item: &Item) -> u32 {
    if item.required {
        REQUIRED_WEIGHT
    } else {
        OPTIONAL_WEIGHT
    }
}

/// Calculate the score of one category from its items
///
/// `floor(100 * present weight / total weight)`, and 0 for an empty category.
pub fn calculate_category_score(items: &[Item]) -> u8 {
    let total: u32 = items.iter().map(weight).sum();
    if total == 0 {
        return 0;
    }

    let present: u32 = items
        .iter()
        .filter(|item| item.status == ItemStatus::Present)
        .map(weight)
        .sum();

    (present * 100 / total) as u8
}

/// Calculate the overall score as the floored mean of category scores
pub fn calculate_overall_score(category_scores: &[u8]) -> u8 {
    if category_scores.is_empty() {
        return 0;
    }

    let total: u32 = category_scores.iter().map(|&s| s as u32).sum();
    (total / category_scores.len() as u32) as u8
}

/// Determine status tier from score
pub fn determine_status(score: u8, thresholds: &StatusThresholds) -> Status {
    if score >= thresholds.good {
        Status::Good
    } else if score >= thresholds.warning {
        Status::Warning
    } else {
        Status::Error
    }
}

/// Wording used for the overall score in summaries
pub fn status_phrase(status: Status) -> &'static str {
    match status {
        Status::Good => "Good",
        Status::Warning => "Room for improvement",
        Status::Error => "Needs improvement",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(required: bool, present: bool) -> Item {
        Item {
            name: "item".to_string(),
            status: if present {
                ItemStatus::Present
            } else {
                ItemStatus::Missing
            },
            required,
            description: String::new(),
            path: None,
        }
    }

    #[test]
    fn test_empty_category_scores_zero() {
        assert_eq!(calculate_category_score(&[]), 0);
    }

    #[test]
    fn test_weighted_score_floors() {
        // 2 + 1 present out of 2 + 1 + 1 + 1
        let items = vec![
            item(true, true),
            item(false, true),
            item(false, false),
            item(false, false),
        ];
        assert_eq!(calculate_category_score(&items), 60);

        // required present only: 2 / 3
        let items = vec![item(true, true), item(false, false)];
        assert_eq!(calculate_category_score(&items), 66);
    }

    #[test]
    fn test_outdated_does_not_count_as_present() {
        let mut outdated = item(true, true);
        outdated.status = ItemStatus::Outdated;
        assert_eq!(calculate_category_score(&[outdated, item(false, true)]), 33);
    }

    #[test]
    fn test_overall_score_is_floored_mean() {
        assert_eq!(calculate_overall_score(&[100, 100, 100, 100, 100, 100]), 100);
        assert_eq!(calculate_overall_score(&[70, 40, 0, 40, 100, 100]), 58);
        assert_eq!(calculate_overall_score(&[0, 0, 0, 0, 40, 33]), 12);
        assert_eq!(calculate_overall_score(&[]), 0);
    }

    #[test]
    fn test_determine_status_boundaries() {
        let thresholds = StatusThresholds::default();

        assert_eq!(determine_status(100, &thresholds), Status::Good);
        assert_eq!(determine_status(80, &thresholds), Status::Good);
        assert_eq!(determine_status(79, &thresholds), Status::Warning);
        assert_eq!(determine_status(50, &thresholds), Status::Warning);
        assert_eq!(determine_status(49, &thresholds), Status::Error);
        assert_eq!(determine_status(0, &thresholds), Status::Error);
    }

    fn items_strategy() -> impl Strategy<Value = Vec<(bool, bool)>> {
        prop::collection::vec((any::<bool>(), any::<bool>()), 0..16)
    }

    proptest! {
        #[test]
        fn prop_category_score_in_range(flags in items_strategy()) {
            let items: Vec<Item> = flags.iter().map(|&(r, p)| item(r, p)).collect();
            prop_assert!(calculate_category_score(&items) <= 100);
        }

        #[test]
        fn prop_category_score_is_monotonic(flags in items_strategy(), index in any::<prop::sample::Index>()) {
            prop_assume!(!flags.is_empty());
            let mut items: Vec<Item> = flags.iter().map(|&(r, p)| item(r, p)).collect();
            let before = calculate_category_score(&items);

            let i = index.index(items.len());
            items[i].status = ItemStatus::Present;
            prop_assert!(calculate_category_score(&items) >= before);
        }

        #[test]
        fn prop_overall_is_floor_of_mean(scores in prop::array::uniform6(0u8..=100)) {
            let sum: u32 = scores.iter().map(|&s| s as u32).sum();
            prop_assert_eq!(calculate_overall_score(&scores) as u32, sum / 6);
            prop_assert!(calculate_overall_score(&scores) <= 100);
        }
    }
}
