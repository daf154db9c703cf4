//! Configuration for scoring thresholds and analysis behavior

use crate::conventions::Ecosystem;
use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration for the analysis process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Score boundaries for the good/warning/error tiers
    pub status_thresholds: StatusThresholds,
    /// Per-entry thresholds for the pre-publication checklist
    pub checklist: ChecklistThresholds,
    /// Minimum overall score required before release
    pub release_gate: ReleaseGate,
    /// Force a convention set instead of detecting it from the tree
    pub ecosystem: Option<Ecosystem>,
    /// Bounds for the recursive test-file scan
    pub test_scan: TestScanConfig,
    /// Command suggested to generate missing files
    pub scaffold_command: String,
}

/// Thresholds for classifying a score into a status tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    /// Scores at or above this are good
    pub good: u8,
    /// Scores at or above this (and below `good`) are warnings
    pub warning: u8,
}

/// A done/warning threshold pair for one checklist entry
///
/// A field left out of a TOML table falls back to 80/50, not to the
/// entry's own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Threshold {
    pub done: u8,
    pub warning: u8,
}

/// Thresholds for the score-derived checklist entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistThresholds {
    pub documentation: Threshold,
    pub tests: Threshold,
    pub ci_cd: Threshold,
    pub license: Threshold,
    pub community: Threshold,
    pub dependencies: Threshold,
    pub code_quality: Threshold,
}

/// Release gate settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseGate {
    pub min_score: u8,
}

/// Settings for the recursive test-file scan
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestScanConfig {
    /// Stop walking after this many milliseconds and keep the partial count
    pub timeout_ms: Option<u64>,
    /// Directory names that are never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            status_thresholds: StatusThresholds::default(),
            checklist: ChecklistThresholds::default(),
            release_gate: ReleaseGate::default(),
            ecosystem: None,
            test_scan: TestScanConfig::default(),
            scaffold_command: "ossify .".to_string(),
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            good: 80,
            warning: 50,
        }
    }
}

impl Threshold {
    pub const fn new(done: u8, warning: u8) -> Self {
        Self { done, warning }
    }

    fn validate(&self, name: &str) -> std::result::Result<(), String> {
        if self.done > 100 || self.warning > 100 {
            return Err(format!("{} thresholds must be within 0-100", name));
        }
        if self.warning > self.done {
            return Err(format!(
                "{} warning threshold {} exceeds done threshold {}",
                name, self.warning, self.done
            ));
        }
        Ok(())
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(80, 50)
    }
}

impl Default for ChecklistThresholds {
    fn default() -> Self {
        Self {
            documentation: Threshold::new(80, 50),
            tests: Threshold::new(80, 50),
            ci_cd: Threshold::new(80, 50),
            license: Threshold::new(90, 50),
            community: Threshold::new(80, 50),
            dependencies: Threshold::new(80, 50),
            code_quality: Threshold::new(80, 50),
        }
    }
}

impl Default for ReleaseGate {
    fn default() -> Self {
        Self { min_score: 90 }
    }
}

impl TestScanConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl StatusThresholds {
    /// Validate that both bounds are in range and ordered
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.good > 100 || self.warning > 100 {
            return Err("Status thresholds must be within 0-100".to_string());
        }
        if self.warning > self.good {
            return Err(format!(
                "Warning threshold {} exceeds good threshold {}",
                self.warning, self.good
            ));
        }
        Ok(())
    }
}

impl ChecklistThresholds {
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.documentation.validate("documentation")?;
        self.tests.validate("tests")?;
        self.ci_cd.validate("ci_cd")?;
        self.license.validate("license")?;
        self.community.validate("community")?;
        self.dependencies.validate("dependencies")?;
        self.code_quality.validate("code_quality")
    }
}

impl AnalyzerConfig {
    /// Create a new builder for AnalyzerConfig
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalyzerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every threshold section
    pub fn validate(&self) -> Result<()> {
        self.status_thresholds
            .validate()
            .map_err(AnalyzerError::config)?;
        self.checklist.validate().map_err(AnalyzerError::config)?;
        if self.release_gate.min_score > 100 {
            return Err(AnalyzerError::config(format!(
                "Release gate minimum {} is above 100",
                self.release_gate.min_score
            )));
        }
        Ok(())
    }
}

/// Builder for AnalyzerConfig
#[derive(Default)]
pub struct AnalyzerConfigBuilder {
    status_thresholds: Option<StatusThresholds>,
    checklist: Option<ChecklistThresholds>,
    release_gate: Option<ReleaseGate>,
    ecosystem: Option<Ecosystem>,
    test_scan: Option<TestScanConfig>,
    scaffold_command: Option<String>,
}

impl AnalyzerConfigBuilder {
    pub fn status_thresholds(mut self, thresholds: StatusThresholds) -> Self {
        self.status_thresholds = Some(thresholds);
        self
    }

    pub fn checklist(mut self, thresholds: ChecklistThresholds) -> Self {
        self.checklist = Some(thresholds);
        self
    }

    pub fn min_release_score(mut self, min_score: u8) -> Self {
        self.release_gate = Some(ReleaseGate { min_score });
        self
    }

    pub fn ecosystem(mut self, ecosystem: Ecosystem) -> Self {
        self.ecosystem = Some(ecosystem);
        self
    }

    pub fn test_scan(mut self, test_scan: TestScanConfig) -> Self {
        self.test_scan = Some(test_scan);
        self
    }

    pub fn scaffold_command(mut self, command: impl Into<String>) -> Self {
        self.scaffold_command = Some(command.into());
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        let defaults = AnalyzerConfig::default();
        AnalyzerConfig {
            status_thresholds: self.status_thresholds.unwrap_or_default(),
            checklist: self.checklist.unwrap_or_default(),
            release_gate: self.release_gate.unwrap_or_default(),
            ecosystem: self.ecosystem,
            test_scan: self.test_scan.unwrap_or_default(),
            scaffold_command: self.scaffold_command.unwrap_or(defaults.scaffold_command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.status_thresholds.good, 80);
        assert_eq!(config.status_thresholds.warning, 50);
        assert_eq!(config.checklist.license, Threshold::new(90, 50));
        assert_eq!(config.release_gate.min_score, 90);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = AnalyzerConfig::builder()
            .status_thresholds(StatusThresholds {
                good: 40,
                warning: 60,
            })
            .build();
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_gate() {
        let config = AnalyzerConfig::builder().min_release_score(101).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: AnalyzerConfig = toml::from_str(
            r#"
            ecosystem = "go"

            [release_gate]
            min_score = 75

            [test_scan]
            skip_dirs = ["target", ".git"]
            "#,
        )
        .unwrap();

        assert_eq!(config.ecosystem, Some(Ecosystem::Go));
        assert_eq!(config.release_gate.min_score, 75);
        assert_eq!(config.test_scan.skip_dirs, vec!["target", ".git"]);
        assert_eq!(config.status_thresholds, StatusThresholds::default());
        assert_eq!(config.scaffold_command, "ossify .");
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config: AnalyzerConfig = toml::from_str(
            r#"
            [status_thresholds]
            good = 85

            [release_gate]

            [checklist.tests]
            warning = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.status_thresholds.good, 85);
        assert_eq!(config.status_thresholds.warning, 50);
        assert_eq!(config.release_gate.min_score, 90);
        assert_eq!(config.checklist.tests, Threshold::new(80, 40));
        assert_eq!(config.checklist.license, Threshold::new(90, 50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oss-ready.toml");
        std::fs::write(&path, "scaffold_command = \"make scaffold\"\n").unwrap();

        let config = AnalyzerConfig::from_file(&path).unwrap();
        assert_eq!(config.scaffold_command, "make scaffold");
    }
}
