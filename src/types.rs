//! Core data types for readiness reporting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete readiness analysis for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Canonical path of the analyzed project
    pub project_path: String,
    /// Name of the analyzed project (last path component)
    pub project_name: String,
    /// Detected kind of project, for display only
    #[serde(rename = "project_type")]
    pub project_kind: ProjectKind,
    /// Overall readiness score (0-100)
    pub overall_score: u8,
    /// Per-category results, in fixed evaluation order
    pub categories: Vec<CategoryResult>,
    /// Items that were checked and found missing
    pub missing: Vec<MissingItem>,
    /// Suggested next steps
    pub recommendations: Vec<Recommendation>,
    /// Human-readable one-paragraph summary
    pub summary: String,
}

/// Result for a single audit category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub name: Category,
    /// Category score (0-100)
    pub score: u8,
    pub status: Status,
    pub description: String,
    pub items: Vec<Item>,
}

/// One atomic checklist entry inside a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub status: ItemStatus,
    /// Required items weigh double and are triaged as high priority
    pub required: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A missing item with its remediation hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingItem {
    pub name: String,
    pub category: Category,
    pub priority: Priority,
    pub description: String,
    pub action: String,
}

/// A suggestion derived from aggregate state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub priority: Priority,
}

/// One entry of the pre-publication checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub title: String,
    pub description: String,
    pub status: ChecklistStatus,
}

/// The six fixed audit dimensions
///
/// Shared by the rule tables and the recommendation engine, so a category
/// can only ever be matched by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Basic Structure")]
    BasicStructure,
    #[serde(rename = "Documentation")]
    Documentation,
    #[serde(rename = "Host Integration")]
    HostIntegration,
    #[serde(rename = "Quality Tooling")]
    QualityTooling,
    #[serde(rename = "Dependency Management")]
    Dependencies,
    #[serde(rename = "Licensing")]
    Licensing,
}

impl Category {
    /// All categories in evaluation order
    pub const ALL: [Category; 6] = [
        Category::BasicStructure,
        Category::Documentation,
        Category::HostIntegration,
        Category::QualityTooling,
        Category::Dependencies,
        Category::Licensing,
    ];

    /// Display label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicStructure => "Basic Structure",
            Self::Documentation => "Documentation",
            Self::HostIntegration => "Host Integration",
            Self::QualityTooling => "Quality Tooling",
            Self::Dependencies => "Dependency Management",
            Self::Licensing => "Licensing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status tier derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// Presence of a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Present,
    Missing,
    /// Partially satisfied, e.g. a manifest without its lock file
    Outdated,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Missing => write!(f, "missing"),
            Self::Outdated => write!(f, "outdated"),
        }
    }
}

/// Remediation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// State of a checklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Done,
    Warning,
    Pending,
}

impl fmt::Display for ChecklistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => write!(f, "done"),
            Self::Warning => write!(f, "warning"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Heuristic project classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    CliTool,
    Application,
    Library,
    Unknown,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliTool => write!(f, "cli-tool"),
            Self::Application => write!(f, "application"),
            Self::Library => write!(f, "library"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl AnalysisResult {
    /// Look up the result for one category
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.name == category)
    }

    /// Score of one category, 0 if it is absent
    pub fn category_score(&self, category: Category) -> u8 {
        self.category(category).map(|c| c.score).unwrap_or(0)
    }

    /// Number of missing items with the given priority
    pub fn missing_count(&self, priority: Priority) -> usize {
        self.missing.iter().filter(|m| m.priority == priority).count()
    }
}

impl CategoryResult {
    /// Look up an item by name
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_label() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&ProjectKind::CliTool).unwrap(), "\"cli-tool\"");
        assert_eq!(serde_json::to_string(&ItemStatus::Outdated).unwrap(), "\"outdated\"");
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&ChecklistStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&Status::Good).unwrap(), "\"good\"");
    }

    #[test]
    fn test_item_path_omitted_when_none() {
        let item = Item {
            name: "vulnerability scan".to_string(),
            status: ItemStatus::Present,
            required: true,
            description: "Known vulnerabilities".to_string(),
            path: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("path").is_none());
        assert_eq!(value["status"], "present");
    }
}
