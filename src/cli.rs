use std::path::PathBuf;

use clap::Parser;

use crate::commands::{OutputFormat, ReportOptions};

#[derive(Parser)]
#[command(name = "unshroud")]
#[command(about = "Recover a secret from polynomial shares mixed with decoys")]
pub struct Cli {
    /// Share documents to process in order (reads one from stdin if omitted)
    pub files: Vec<PathBuf>,

    /// Also print the vote tally and the shares suspected to be decoys
    #[arg(short, long)]
    pub verbose: bool,

    /// Print one JSON report per document instead of text
    #[arg(long, conflicts_with = "verbose")]
    pub json: bool,
}

impl Cli {
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbose: self.verbose,
        }
    }
}
