use crate::chart;
use crate::model::{AnalysisConfig, DEFAULT_PLOT_FILE, DEFAULT_RESULTS_DIR, LATENCY_COLUMN};
use crate::orchestrator::{self, Analysis};
use crate::text_summary;
use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both tools.
#[derive(Debug, Args, Clone)]
pub struct LogArgs {
    /// Directory holding the benchmark latency logs (*.csv)
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    pub dir: PathBuf,

    /// Name of the CSV column holding per-request latency
    #[arg(long, default_value = LATENCY_COLUMN)]
    pub column: String,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "latency-report",
    version,
    about = "Print mean, p99 and p99.999 latency for every benchmark log"
)]
pub struct ReportCli {
    #[command(flatten)]
    pub logs: LogArgs,

    /// Print per-file results as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "throughput-plot",
    version,
    about = "Plot average latency against the throughput encoded in each log name"
)]
pub struct PlotCli {
    #[command(flatten)]
    pub logs: LogArgs,

    /// Chart file name, written inside the log directory
    #[arg(long, default_value = DEFAULT_PLOT_FILE)]
    pub output: PathBuf,

    /// Also write the plotted series as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Save the chart without opening it in an image viewer
    #[arg(long)]
    pub no_show: bool,
}

/// Build an `AnalysisConfig` from CLI arguments.
pub fn build_config(args: &LogArgs) -> AnalysisConfig {
    AnalysisConfig {
        results_dir: args.dir.clone(),
        column: args.column.clone(),
    }
}

/// Route `log` output to stderr, warnings and up unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

pub fn run_report(args: ReportCli) -> Result<()> {
    let cfg = build_config(&args.logs);
    let analysis = orchestrator::analyze_dir(&cfg);
    for line in report_lines(&analysis, &cfg, args.json)? {
        println!("{line}");
    }
    Ok(())
}

/// Render the report body. JSON mode emits JSON even for an empty batch.
fn report_lines(analysis: &Analysis, cfg: &AnalysisConfig, json: bool) -> Result<Vec<String>> {
    let reports = match analysis {
        Analysis::NoFiles if json => return Ok(vec!["[]".to_string()]),
        Analysis::NoFiles => {
            return Ok(vec![format!(
                "No CSV files found in {}",
                cfg.results_dir.display()
            )])
        }
        Analysis::Reports(reports) => reports,
    };

    if json {
        let out = serde_json::to_string_pretty(reports).context("serialize reports")?;
        return Ok(vec![out]);
    }
    Ok(text_summary::build_text_summary(reports).lines)
}

pub fn run_plot(args: PlotCli) -> Result<()> {
    let cfg = build_config(&args.logs);

    let Some(series) = orchestrator::collect_throughput_points(&cfg) else {
        println!("No CSV files found in {}", cfg.results_dir.display());
        return Ok(());
    };
    for skipped in &series.skipped {
        eprintln!("{}", skipped.to_message());
    }
    if series.points.is_empty() {
        println!("No valid data points to plot");
        return Ok(());
    }

    let output_path = cfg.results_dir.join(&args.output);
    chart::render_throughput_chart(&series.points, &output_path)?;
    println!("Plot saved to {}", output_path.display());

    if let Some(p) = args.export_csv.as_deref() {
        chart::export_points_csv(&series.points, p)?;
        println!("Exported CSV: {}", p.display());
    }

    if !args.no_show {
        if let Err(e) = open::that(&output_path) {
            log::warn!("could not open {}: {e}", output_path.display());
        }
    }
    Ok(())
}
