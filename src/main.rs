mod cli;
mod input;
mod labels;
mod report;
mod scoring;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "comparison failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let model_records = input::load_records(&cli.model)?;
    let official_records = input::load_records(&cli.official)?;

    if model_records.len() != official_records.len() {
        warn!(
            model = model_records.len(),
            official = official_records.len(),
            "record counts differ; scoring only the overlapping prefix"
        );
    }

    let model_labels = model_records
        .iter()
        .map(labels::is_tool_call)
        .collect::<Vec<bool>>();
    let official_labels = official_records
        .iter()
        .map(labels::is_tool_call)
        .collect::<Vec<bool>>();

    let counts = scoring::score_pairs(&model_labels, &official_labels);
    let agreement_report = report::build_report(counts);

    println!("{}", serde_json::to_string_pretty(&agreement_report)?);

    if let Some(path) = &cli.output_json {
        util::write_json_pretty(path, &agreement_report)?;
        info!(path = %path.display(), "agreement report written");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
