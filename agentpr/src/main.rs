use anyhow::Result;
use clap::{Parser, Subcommand};
use etl_core::{EtlError, StageReport};
use extract::StageSpec;
use std::path::PathBuf;

mod config;
mod logging;

use config::Layout;

#[derive(Debug, Parser)]
#[command(name = "agentpr", version, about = "Flatten agent pull-request snapshots into CSV tables")]
struct Cli {
    /// Optional config file (YAML). If omitted, loads ./agentpr.yaml if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log stage progress to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print version information
    Version,
    /// Task 1: pull requests -> TITLE, ID, AGENTNAME, BODYSTRING, REPOID, REPOURL
    #[command(alias = "task1")]
    PullRequests {
        /// Nothing for defaults, or <input.parquet> <output.csv>
        paths: Vec<PathBuf>,
    },
    /// Task 2: repositories -> REPOID, LANG, STARS, REPOURL
    #[command(alias = "task2")]
    Repositories {
        /// Nothing for defaults, or <input.parquet> <output.csv>
        paths: Vec<PathBuf>,
    },
    /// Task 3: PR task types -> PRID, PRTITLE, PRREASON, PRTYPE, CONFIDENCE
    #[command(alias = "task3")]
    TaskTypes {
        /// Nothing for defaults, or <input.parquet> <output.csv>
        paths: Vec<PathBuf>,
    },
    /// Task 4: PR commit details -> PRID ... PRDIFF (diff text reduced to ASCII)
    #[command(alias = "task4")]
    CommitDetails {
        /// Nothing for defaults, or <input.parquet> <output.csv>
        paths: Vec<PathBuf>,
    },
    /// Task 5: join task 1 and task 3 outputs and add the SECURITY flag
    #[command(alias = "task5")]
    Security {
        /// Nothing for defaults, or <task1_output.csv> <task3_output.csv> <task5_output.csv>
        paths: Vec<PathBuf>,
    },
    /// Run tasks 1-5 in order with default paths
    All,
}

fn extraction_usage(spec: &StageSpec) -> String {
    format!(
        "Usage:\n  agentpr {name}\n  agentpr {name} <input.parquet> <output.csv>",
        name = spec.name
    )
}

fn security_usage() -> String {
    "Usage:\n  agentpr security\n  agentpr security <task1_output.csv> <task3_output.csv> <task5_output.csv>".to_string()
}

fn run_stage(spec: &StageSpec, paths: &[PathBuf], layout: &Layout) -> Result<StageReport> {
    let (input, output) = match paths {
        [] => (layout.input(spec.default_input), layout.output(spec.default_output)),
        [input, output] => (input.clone(), output.clone()),
        _ => return Err(EtlError::Usage(extraction_usage(spec)).into()),
    };
    extract::run_extraction(spec, &input, &output)
}

fn run_security(paths: &[PathBuf], layout: &Layout) -> Result<StageReport> {
    let (prs, task_types, output) = match paths {
        [] => (
            layout.output(extract::PULL_REQUESTS.default_output),
            layout.output(extract::TASK_TYPES.default_output),
            layout.output("task5_output.csv"),
        ),
        [prs, task_types, output] => (prs.clone(), task_types.clone(), output.clone()),
        _ => return Err(EtlError::Usage(security_usage()).into()),
    };
    security_flag::run_security(&prs, &task_types, &output)
}

fn announce(report: &StageReport) {
    println!("{} complete. CSV generated at: {}", report.stage, report.resolved_output().display());
}

fn dispatch(command: Commands, layout: &Layout) -> Result<()> {
    match command {
        Commands::Version => {
            println!("agentpr {} (core {})", env!("CARGO_PKG_VERSION"), etl_core::version());
        }
        Commands::PullRequests { paths } => announce(&run_stage(&extract::PULL_REQUESTS, &paths, layout)?),
        Commands::Repositories { paths } => announce(&run_stage(&extract::REPOSITORIES, &paths, layout)?),
        Commands::TaskTypes { paths } => announce(&run_stage(&extract::TASK_TYPES, &paths, layout)?),
        Commands::CommitDetails { paths } => announce(&run_stage(&extract::COMMIT_DETAILS, &paths, layout)?),
        Commands::Security { paths } => announce(&run_security(&paths, layout)?),
        Commands::All => {
            // task 5 reads what tasks 1 and 3 just wrote
            for spec in &extract::ALL_STAGES {
                announce(&run_stage(spec, &[], layout)?);
            }
            announce(&run_security(&[], layout)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let layout = config::load_config(cli.config.as_deref()).unwrap_or_default().layout();

    if let Err(e) = dispatch(cli.command, &layout) {
        if let Some(EtlError::Usage(text)) = e.downcast_ref::<EtlError>() {
            println!("{text}");
            std::process::exit(1);
        }
        return Err(e);
    }
    Ok(())
}
