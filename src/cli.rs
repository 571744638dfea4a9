use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "toolcall-agreement",
    version,
    about = "Tool-call agreement scoring between model and official API responses"
)]
pub struct Cli {
    /// JSON Lines file holding the candidate model's responses.
    #[arg(long)]
    pub model: PathBuf,

    /// JSON Lines file holding the official API's responses.
    #[arg(long)]
    pub official: PathBuf,

    /// Also persist the report as pretty-printed JSON at this path.
    #[arg(long)]
    pub output_json: Option<PathBuf>,
}
