//! CLI tool for checking open-source readiness of a repository

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use oss_readiness::{
    analyze_project, check_readiness, determine_status, generate_checklist, AnalysisResult, AnalyzerConfig,
    ChecklistItem, ChecklistStatus, Ecosystem, ItemStatus, Priority, Status,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "oss-ready")]
#[command(about = "Check whether a repository is ready to be published as open source", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the project to analyze
    #[arg(short = 'p', long, default_value = ".")]
    project_path: PathBuf,

    /// Path to custom configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Force the layout conventions instead of detecting them (rust, go)
    #[arg(long)]
    ecosystem: Option<EcosystemArg>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze project health and list missing items
    Status {
        /// Output format
        #[arg(short = 'f', long, default_value = "human")]
        format: OutputFormat,

        /// Fail if the overall score is below this threshold (0-100)
        #[arg(long)]
        fail_threshold: Option<u8>,
    },

    /// Show the pre-publication checklist
    Checklist {
        /// Output format
        #[arg(short = 'f', long, default_value = "human")]
        format: OutputFormat,
    },

    /// Check if the project is ready for public release (exit code based)
    Ready {
        /// Output format
        #[arg(short = 'f', long, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

#[derive(Clone, Debug)]
struct EcosystemArg(Ecosystem);

impl std::str::FromStr for EcosystemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" => Ok(EcosystemArg(Ecosystem::Rust)),
            "go" => Ok(EcosystemArg(Ecosystem::Go)),
            _ => Err(format!("Unknown ecosystem: {}", s)),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = if let Some(config_path) = &cli.config {
        match AnalyzerConfig::from_file(config_path)
            .with_context(|| format!("reading {}", config_path.display()))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{} Failed to load config: {:#}", "Error:".red().bold(), e);
                process::exit(1);
            }
        }
    } else {
        AnalyzerConfig::default()
    };

    if let Some(EcosystemArg(ecosystem)) = cli.ecosystem {
        config.ecosystem = Some(ecosystem);
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing project...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = analyze_project(&cli.project_path, &config).await;

    spinner.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{} Analysis failed: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Status {
            format,
            fail_threshold,
        } => {
            match format {
                OutputFormat::Json => print_json(&result),
                OutputFormat::Human => display_status(&result, &config),
            }

            if let Some(threshold) = fail_threshold {
                if result.overall_score < threshold {
                    eprintln!(
                        "\n{} overall score {} is below threshold {}",
                        "Failed:".red().bold(),
                        result.overall_score,
                        threshold
                    );
                    process::exit(1);
                }
            }
        }

        Commands::Checklist { format } => {
            let checklist = generate_checklist(&result, &config.checklist);
            match format {
                OutputFormat::Json => print_json(&checklist),
                OutputFormat::Human => display_checklist(&checklist),
            }
        }

        Commands::Ready { format } => {
            let report = check_readiness(&result, &config);
            let human = matches!(format, OutputFormat::Human);

            match format {
                OutputFormat::Json => print_json(&report),
                OutputFormat::Human => {
                    println!("\n{}", "=== Release Readiness ===".bold());
                    println!("Project: {}", report.project_name.cyan());
                    println!("Readiness score: {}/100 (required: {})", report.overall_score, report.min_score);
                    println!();
                    display_checklist(&report.checklist);
                }
            }

            if report.passed {
                if human {
                    println!(
                        "\n{} Project '{}' is ready for public release!",
                        "Success:".green().bold(),
                        report.project_name
                    );
                }
            } else {
                eprintln!("\n{} {} blockers:", "Failed:".red().bold(), report.blockers.len());
                for blocker in &report.blockers {
                    eprintln!("  - {}", blocker);
                }
                process::exit(1);
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{} Failed to serialize report: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn colored_status(status: Status, text: String) -> ColoredString {
    match status {
        Status::Good => text.green(),
        Status::Warning => text.yellow(),
        Status::Error => text.red(),
    }
}

fn display_status(result: &AnalysisResult, config: &AnalyzerConfig) {
    let overall = determine_status(result.overall_score, &config.status_thresholds);

    println!("\n{}", "=== Readiness Summary ===".bold());
    println!("Project: {} ({})", result.project_name.cyan(), result.project_kind);
    println!(
        "Overall score: {}",
        colored_status(overall, format!("{}/100", result.overall_score))
    );
    println!();

    println!("Categories:");
    for category in &result.categories {
        println!(
            "  {} {}: {}/100",
            colored_status(category.status, "●".to_string()),
            category.name,
            category.score
        );

        if category.status != Status::Good {
            for item in category.items.iter().filter(|i| i.status != ItemStatus::Present) {
                let label = match (item.status, item.required) {
                    (ItemStatus::Outdated, _) => "incomplete".yellow(),
                    (_, true) => "required".red(),
                    (_, false) => "recommended".normal(),
                };
                println!("      - {} ({})", item.name, label);
            }
        }
    }

    if !result.missing.is_empty() {
        println!("\nMissing items ({}):", result.missing.len());
        for missing in &result.missing {
            let priority = match missing.priority {
                Priority::High => missing.priority.to_string().red(),
                Priority::Medium => missing.priority.to_string().yellow(),
                Priority::Low => missing.priority.to_string().green(),
            };
            println!("  [{}] {} - {}", priority, missing.name, missing.description);
        }
    }

    if !result.recommendations.is_empty() {
        println!("\nRecommendations ({}):", result.recommendations.len());
        for rec in &result.recommendations {
            println!("  [{}] {}", rec.priority, rec.title.bold());
            println!("      {}", rec.description);
            if let Some(command) = &rec.command {
                println!("      Run: {}", command.cyan());
            }
        }
    }

    println!("\n{}", result.summary);
}

fn display_checklist(checklist: &[ChecklistItem]) {
    println!("{}", "Pre-publication checklist:".bold());
    for item in checklist {
        let marker = match item.status {
            ChecklistStatus::Done => "[x]".green(),
            ChecklistStatus::Warning => "[~]".yellow(),
            ChecklistStatus::Pending => "[ ]".normal(),
        };
        println!("  {} {} - {}", marker, item.title, item.description);
    }
}
