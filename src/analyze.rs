//! Main analysis orchestration logic

use crate::checks::ScanContext;
use crate::config::AnalyzerConfig;
use crate::conventions::{detect_ecosystem, Conventions};
use crate::detect::{detect_project_kind, get_project_name, resolve_root};
use crate::error::{AnalyzerError, Result};
use crate::missing::extract_missing_items;
use crate::recommend::generate_recommendations;
use crate::rules::evaluate_category;
use crate::scoring::{calculate_overall_score, determine_status, status_phrase};
use crate::types::{AnalysisResult, Category, CategoryResult, ProjectKind};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Prepared inputs shared by every category evaluation
struct Prepared {
    ctx: ScanContext,
    project_name: String,
    project_kind: ProjectKind,
}

fn prepare(project_path: &Path, config: &AnalyzerConfig) -> Result<Prepared> {
    config.validate()?;

    let root = resolve_root(project_path)?;
    let ecosystem = detect_ecosystem(&root, config.ecosystem);
    let conventions = Conventions::for_ecosystem(ecosystem);
    let project_kind = detect_project_kind(&root, conventions);
    let project_name = get_project_name(&root);

    info!(
        "Analyzing '{}' at {} ({} conventions, {})",
        project_name,
        root.display(),
        ecosystem,
        project_kind
    );

    Ok(Prepared {
        ctx: ScanContext {
            root,
            conventions,
            test_scan: config.test_scan.clone(),
        },
        project_name,
        project_kind,
    })
}

/// Analyze a project synchronously, one category after another
pub fn analyze_path(project_path: &Path, config: &AnalyzerConfig) -> Result<AnalysisResult> {
    let prepared = prepare(project_path, config)?;

    let categories = Category::ALL
        .iter()
        .map(|&category| evaluate_category(category, &prepared.ctx, &config.status_thresholds))
        .collect();

    Ok(assemble(prepared, categories, config))
}

/// Analyze a project, evaluating the six categories in parallel
///
/// Each category runs on the blocking pool. Results are joined in the fixed
/// category order, so the outcome is identical to [`analyze_path`].
pub async fn analyze_project(project_path: &Path, config: &AnalyzerConfig) -> Result<AnalysisResult> {
    let prepared = prepare(project_path, config)?;
    let ctx = Arc::new(prepared.ctx.clone());

    let tasks: Vec<_> = Category::ALL
        .iter()
        .map(|&category| {
            let ctx = Arc::clone(&ctx);
            let thresholds = config.status_thresholds;
            tokio::task::spawn_blocking(move || evaluate_category(category, &ctx, &thresholds))
        })
        .collect();

    let mut categories = Vec::with_capacity(tasks.len());
    for (category, task) in Category::ALL.iter().zip(tasks) {
        let result = task
            .await
            .map_err(|e| AnalyzerError::task(format!("{}: {}", category, e)))?;
        categories.push(result);
    }

    Ok(assemble(prepared, categories, config))
}

/// Aggregate category results into the final analysis
fn assemble(prepared: Prepared, categories: Vec<CategoryResult>, config: &AnalyzerConfig) -> AnalysisResult {
    let scores: Vec<u8> = categories.iter().map(|c| c.score).collect();
    let overall_score = calculate_overall_score(&scores);

    let missing = extract_missing_items(&categories, &config.scaffold_command);
    let recommendations = generate_recommendations(
        overall_score,
        &categories,
        &config.status_thresholds,
        &config.scaffold_command,
    );

    let status = determine_status(overall_score, &config.status_thresholds);
    let summary = format!(
        "Project '{}' health: {} (Score: {}/100)\nMissing items: {}, Recommendations: {}",
        prepared.project_name,
        status_phrase(status),
        overall_score,
        missing.len(),
        recommendations.len(),
    );

    debug!("Category scores: {:?}", scores);
    info!(
        "Analysis complete: score {}/100, {} missing, {} recommendations",
        overall_score,
        missing.len(),
        recommendations.len()
    );

    AnalysisResult {
        project_path: prepared.ctx.root.display().to_string(),
        project_name: prepared.project_name,
        project_kind: prepared.project_kind,
        overall_score,
        categories,
        missing,
        recommendations,
        summary,
    }
}
