use anyhow::Result;
use clap::Parser;
use latency_logs::cli;

fn main() -> Result<()> {
    cli::init_logging();
    let args = cli::ReportCli::parse();
    cli::run_report(args)
}
