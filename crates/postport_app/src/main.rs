mod cli;
mod report;
mod settings_file;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use postport_engine::{convert_blog, ConversionReport};
use postport_logging::{port_info, port_warn};

use crate::cli::Cli;
use crate::report::{write_report, RunReport};
use crate::settings_file::resolve_settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    postport_logging::initialize(cli.log_destination(), cli.log_level());

    match run(&cli) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                eprintln!("Skipped {} malformed post(s)", report.skipped.len());
            }
            println!("Converted {} posts to {}", report.converted(), cli.target);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ConversionReport> {
    cli.validate()?;
    let settings = resolve_settings(cli)?;

    port_info!(
        "Converting {} -> {} (author {})",
        cli.source,
        cli.target,
        cli.author
    );
    let conversion = convert_blog(
        Path::new(&cli.source),
        Path::new(&cli.target),
        &cli.author,
        &settings,
    )?;

    for doc in &conversion.export.documents {
        if !doc.unmatched_images.is_empty() {
            port_warn!("{}: images not found {:?}", doc.slug, doc.unmatched_images);
        }
    }

    if let Some(path) = &cli.report {
        let report = RunReport::new(&cli.source, &cli.target, &cli.author, &conversion);
        let written = write_report(path, &report)?;
        port_info!("Report written to {:?}", written);
    }
    Ok(conversion)
}
