use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use unshroud::cli::Cli;
use unshroud::commands::{
    ReportOptions, count_mismatch_warning, recover_document, recover_files, render_report,
};

/// Read one share document from stdin, prompting when a TTY is attached
fn read_document() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Paste a share document, then press Ctrl-D:");
    }

    let mut document = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut document)
        .context("Failed to read share document from stdin")?;

    if document.trim().is_empty() {
        anyhow::bail!("No share document provided");
    }

    Ok(document)
}

fn recover_stdin(options: ReportOptions) -> Result<()> {
    let document = read_document()?;
    let report = recover_document(&document)?;
    if let Some(warning) = count_mismatch_warning(&report, options) {
        eprintln!("{warning}");
    }
    println!("{}", render_report(&report, options)?);
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = cli.report_options();

    if cli.files.is_empty() {
        recover_stdin(options)?;
        return Ok(ExitCode::SUCCESS);
    }

    let summary = recover_files(&cli.files, options, &mut io::stdout(), &mut io::stderr())?;

    if summary.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
