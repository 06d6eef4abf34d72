use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use excel_diff::cli::{self, Args, Options, OutputFormat};
use excel_diff::diff::{self, DiffReport};
use excel_diff::report::{self, Palette, Sources};

fn main() -> ExitCode {
    let cli_args = Args::parse();

    // Initialize logging on stderr; stdout carries the report
    if cli_args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    match run(&cli_args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("excel-diff: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli_args: &Args) -> Result<u8> {
    let options = cli::build_options(
        cli_args,
        io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    )?;

    // --color always must win over crossterm's own NO_COLOR check
    if options.color {
        crossterm::style::force_color_output(true);
    }

    let invocation = &options.invocation;
    let (old, new) = invocation
        .load_documents()
        .context("Unable to load workbooks")?;

    let report = diff::compare(&old, &new);

    if !options.quiet {
        let old_label = invocation.old_path().display().to_string();
        let new_label = invocation.new_path().display().to_string();
        let sources = Sources {
            old: &old_label,
            new: &new_label,
        };

        match write_report(&options, &report, &sources) {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
            result => result.context("Failed to write report")?,
        }
    }

    Ok(invocation.exit_code(report.has_differences()))
}

fn write_report(options: &Options, report: &DiffReport, sources: &Sources<'_>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match options.format {
        OutputFormat::Text => {
            let palette = if options.color {
                Palette::colored()
            } else {
                Palette::plain()
            };
            report::write_text_report(&mut out, report, sources, palette)?;
        }
        OutputFormat::Json => report::write_json_report(&mut out, report, sources)?,
    }

    out.flush()
}
