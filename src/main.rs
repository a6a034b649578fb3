//! @ai:module:intent CLI for the search information density benchmark
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use density_bench::{
    config::{BenchmarkConfig, FilterConfig},
    evaluator::{BpeTokenCounter, DensityCalculator, TokenCounter},
    fixtures::{load_catalog, BenchmarkKind, FixtureCatalog},
    metrics::{BenchmarkAggregator, BenchmarkResults},
    report::ReportGenerator,
    runner::{
        resolve_api_key, CallPacer, MockSearchClient, QueryRunner, SearchClientTrait, SearchDepth,
        TavilyClient,
    },
    setup_check::SetupValidator,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "density-bench")]
#[command(about = "Measure information density of search API responses at basic and advanced depth")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run benchmarks
    Run {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Benchmark to run: all, simpleqa or relevance
        #[arg(short, long, default_value = "all")]
        benchmark: String,

        /// Search depths (comma-separated: basic,advanced)
        #[arg(long)]
        depths: Option<String>,

        /// Maximum results requested per query
        #[arg(long)]
        max_results: Option<u32>,

        /// Filter by categories (comma-separated)
        #[arg(long)]
        categories: Option<String>,

        /// Run against canned responses without network calls
        #[arg(long)]
        dry_run: bool,

        /// Output directory for results
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate reports from existing results
    Report {
        /// Path to results JSON file
        #[arg(short, long)]
        results: PathBuf,

        /// Output directory for reports
        #[arg(short, long, default_value = "reports")]
        output: PathBuf,
    },

    /// List benchmark fixtures
    List {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Filter by benchmark
        #[arg(long)]
        benchmark: Option<String>,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Check credentials, tokenizer and fixtures
    Check {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "benchmark.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("density_bench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            benchmark,
            depths,
            max_results,
            categories,
            dry_run,
            output,
        } => {
            run_benchmarks(RunArgs {
                config,
                benchmark,
                depths,
                max_results,
                categories,
                dry_run,
                output,
            })
            .await
        }
        Commands::Report { results, output } => generate_reports(results, output),
        Commands::List {
            config,
            benchmark,
            category,
        } => list_fixtures(config, benchmark, category),
        Commands::Check { config } => check_setup(config),
        Commands::Init { output } => init_config(output),
    }
}

struct RunArgs {
    config: Option<PathBuf>,
    benchmark: String,
    depths: Option<String>,
    max_results: Option<u32>,
    categories: Option<String>,
    dry_run: bool,
    output: Option<PathBuf>,
}

/// @ai:intent Run the selected benchmarks at each depth and write reports
/// @ai:effects network, fs:write
async fn run_benchmarks(args: RunArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    config.run.dry_run |= args.dry_run;
    if let Some(depths) = args.depths {
        config.run.depths = parse_depths(&depths)?;
    }
    if let Some(max_results) = args.max_results {
        config.run.max_results = max_results;
    }
    config.run.filter = build_filter(&args.benchmark, args.categories, config.run.filter)?;
    config.run.validate()?;

    // The credential is checked before any query so a bad key stops the run.
    let api_key = if config.run.dry_run {
        None
    } else {
        Some(resolve_api_key(&config.api.api_key_env)?)
    };

    let catalog = load_catalog(config.paths.fixtures_dir.as_deref())?.filtered(&config.run.filter);
    if catalog.is_empty() {
        tracing::warn!("No fixtures match the filter criteria");
        return Ok(());
    }
    tracing::info!("Found {} fixtures to run", catalog.len());

    let tokenizer: Arc<dyn TokenCounter> = Arc::new(BpeTokenCounter::for_model(&config.tokenizer.model)?);
    tracing::info!("Counting tokens with {}", tokenizer.vocabulary());

    let timestamp = chrono::Utc::now();
    let output_dir = args
        .output
        .unwrap_or_else(|| config.paths.results_dir.clone())
        .join(timestamp.format("%Y-%m-%d_%H-%M-%S").to_string());
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    tracing::info!("Output directory: {}", output_dir.display());

    let results = match api_key {
        None => {
            tracing::info!("Running in dry-run mode");
            let client = Arc::new(MockSearchClient::dry_run());
            execute_suite(client, tokenizer, &config, &catalog, timestamp.to_rfc3339()).await
        }
        Some(key) => {
            let client = Arc::new(TavilyClient::with_api_key(config.api.clone(), key)?);
            execute_suite(client, tokenizer, &config, &catalog, timestamp.to_rfc3339()).await
        }
    };

    let reports = ReportGenerator::new().generate_all(&results, &output_dir)?;
    print_summary(&results);
    println!("Results saved to {}", reports.json.display());

    Ok(())
}

/// @ai:intent Run every selected benchmark through one client
/// @ai:effects network, time
async fn execute_suite<C: SearchClientTrait>(
    client: Arc<C>,
    tokenizer: Arc<dyn TokenCounter>,
    config: &BenchmarkConfig,
    catalog: &FixtureCatalog,
    timestamp: String,
) -> BenchmarkResults {
    let runner = QueryRunner::new(
        client,
        CallPacer::new(config.run.call_delay()),
        DensityCalculator::new(tokenizer),
    );

    BenchmarkAggregator::new(runner)
        .run_suite(
            catalog,
            &config.api.provider,
            &config.run.depths,
            config.run.max_results,
            timestamp,
        )
        .await
}

/// @ai:intent Regenerate reports from an existing results file
/// @ai:effects fs:read, fs:write
fn generate_reports(results_path: PathBuf, output_dir: PathBuf) -> Result<()> {
    ReportGenerator::new().regenerate(&results_path, &output_dir)?;
    println!("Reports generated in {}", output_dir.display());
    Ok(())
}

/// @ai:intent Print the fixture catalogue
/// @ai:effects fs:read, io
fn list_fixtures(
    config_path: Option<PathBuf>,
    benchmark: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let filter = build_filter(
        benchmark.as_deref().unwrap_or("all"),
        category,
        FilterConfig::default(),
    )?;

    let catalog = load_catalog(config.paths.fixtures_dir.as_deref())?.filtered(&filter);

    println!("Available fixtures ({}):", catalog.len());
    println!();
    println!("{:<20} {:<14} {:<60}", "Benchmark", "Category", "Query");
    println!("{}", "-".repeat(94));

    for fixture in catalog.all() {
        println!(
            "{:<20} {:<14} {:<60}",
            fixture.benchmark.title(),
            fixture.category,
            fixture.text
        );
    }

    Ok(())
}

/// @ai:intent Run the setup self-test; fails when any check fails
/// @ai:effects env:read, fs:read, io
fn check_setup(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let status = SetupValidator::validate(&config);

    println!("Setup check");
    println!("===========");
    for check in &status.checks {
        let mark = if check.passed { "ok" } else { "FAIL" };
        println!("{:<6} {:<10} {}", mark, check.name, check.detail);
        if let Some(hint) = check.hint {
            println!("{:<17} {}", "", hint);
        }
    }

    if !status.all_passed() {
        SetupValidator::log_warnings(&status);
        anyhow::bail!("{} setup check(s) failed", status.failed().count());
    }

    println!();
    println!("All checks passed. Run `density-bench run` to start.");
    Ok(())
}

/// @ai:intent Write the default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = BenchmarkConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load the given config, ./benchmark.toml, or the defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<BenchmarkConfig> {
    match path {
        Some(p) => BenchmarkConfig::load(&p)
            .with_context(|| format!("Failed to load configuration from {}", p.display())),
        None => {
            let default_path = PathBuf::from("benchmark.toml");

            if default_path.exists() {
                BenchmarkConfig::load(&default_path)
            } else {
                Ok(BenchmarkConfig::default())
            }
        }
    }
}

/// @ai:intent Parse a comma-separated depth list
/// @ai:effects pure
fn parse_depths(raw: &str) -> Result<Vec<SearchDepth>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| SearchDepth::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown search depth: {}", s)))
        .collect()
}

/// @ai:intent Merge CLI benchmark/category selection into a filter
/// @ai:effects pure
fn build_filter(
    benchmark: &str,
    categories: Option<String>,
    base: FilterConfig,
) -> Result<FilterConfig> {
    let benchmarks = if benchmark.eq_ignore_ascii_case("all") {
        base.benchmarks
    } else {
        let kind = BenchmarkKind::parse(benchmark)
            .ok_or_else(|| anyhow::anyhow!("Unknown benchmark: {}", benchmark))?;
        Some(vec![kind.as_str().to_string()])
    };

    let categories = categories
        .map(|s| s.split(',').map(|c| c.trim().to_string()).collect())
        .or(base.categories);

    Ok(FilterConfig {
        benchmarks,
        categories,
    })
}

/// @ai:intent Print a console summary per benchmark and configuration
/// @ai:effects io
fn print_summary(results: &BenchmarkResults) {
    println!();
    println!("Search Information Density Results ({})", results.tokenizer);
    println!("==================================");

    for run in &results.benchmarks {
        println!();
        println!("{}", run.benchmark.title());
        println!(
            "{:<20} {:>8} {:>12} {:>10} {:>10} {:>9}",
            "Configuration", "Queries", "Avg tokens", "Relevance", "Density", "Success"
        );
        println!("{}", "-".repeat(74));

        for summary in &run.configurations {
            let relevance = summary
                .avg_relevance_score
                .map(|r| format!("{:.4}", r))
                .unwrap_or_else(|| "-".to_string());

            println!(
                "{:<20} {:>8} {:>12.2} {:>10} {:>10.4} {:>8.1}%",
                summary.configuration_label,
                summary.total_queries,
                summary.avg_tokens_per_query,
                relevance,
                summary.avg_density,
                summary.success_rate * 100.0
            );
        }

        if let Some(delta) = run.depth_comparison() {
            if let Some(pct) = delta.token_delta_percent {
                println!("Advanced vs basic tokens: {:+.1}%", pct);
            }
            println!("Advanced vs basic density: {:+.4}", delta.density_delta);
        }
    }

    let failed: usize = results
        .benchmarks
        .iter()
        .flat_map(|r| &r.configurations)
        .map(|c| c.failed_queries())
        .sum();
    if failed > 0 {
        println!();
        println!("Warnings:");
        println!("  {} queries failed; see results.md for details", failed);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_accepts_config_path() {
        let cli = Cli::try_parse_from(["density-bench", "list", "--config", "custom.toml"]).unwrap();

        match cli.command {
            Commands::List { config, .. } => assert_eq!(config, Some(PathBuf::from("custom.toml"))),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_separator_only_depths_fail_validation() {
        let mut config = BenchmarkConfig::default();
        config.run.depths = parse_depths(",").unwrap();

        assert!(config.run.depths.is_empty());
        assert!(config.run.validate().is_err());
    }

    #[test]
    fn test_parse_depths_rejects_unknown() {
        assert!(parse_depths("basic,deep").is_err());
        assert_eq!(
            parse_depths("advanced, basic").unwrap(),
            vec![SearchDepth::Advanced, SearchDepth::Basic]
        );
    }
}
