use anyhow::Result;
use clap::Parser;
use latency_logs::cli;

fn main() -> Result<()> {
    cli::init_logging();
    let args = cli::PlotCli::parse();
    cli::run_plot(args)
}
