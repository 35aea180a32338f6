use std::path::PathBuf;

use anyhow::Context;
use clap::{
    ArgAction,
    Parser,
    ValueEnum
};
use tracing::Level;

use numkernels::bench::benchmarkconfiguration::BenchmarkConfiguration;
use numkernels::bench::benchmarkrunner::BenchmarkRunner;
use numkernels::manager::manager::KernelManager;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json
}

#[derive(Debug, Parser)]
#[command(
    name = "numkernels",
    about = "Run the factorial and x2Integrate kernels from a JSON argument file",
    version
)]
struct Cli {
    /// JSON file with a `functions` array of `{ "function": ..., "args": [...] }`
    #[arg(value_name = "ARGS_JSON")]
    args_path: PathBuf,

    /// Output format for the results
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let configuration = BenchmarkConfiguration::from_reader(&cli.args_path)
        .with_context(|| format!("failed to load arguments from {}", cli.args_path.display()))?;
    let runner = BenchmarkRunner::new(KernelManager::with_builtin_kernels());
    let report = runner.run(&configuration);

    match cli.format {
        OutputFormat::Text => {
            for record in report.records() {
                println!("\n{}", record);
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
