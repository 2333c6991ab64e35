//! CLI entrypoint for the web archive extractor.
//!
//! Resolves configuration from defaults, an optional TOML file, and
//! command-line arguments, then runs the extraction pipeline. Progress and
//! the closing summary go to stdout; errors go to stderr with exit code 1.

use clap::Parser;
use std::io::{self, Write};
use webarchive_extractor::archive::PlistArchiveReader;
use webarchive_extractor::cli::Cli;
use webarchive_extractor::error::Result;
use webarchive_extractor::output::{summary_text, write_line};
use webarchive_extractor::pipeline::run_extraction;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Install the logger; `RUST_LOG` overrides the level implied by flags.
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    let config = cli.resolve_config()?;

    let mut quiet_sink = io::sink();
    let progress: &mut dyn Write = if cli.quiet { &mut quiet_sink } else { stdout };

    if !cli.quiet {
        write_stderr_line(stderr, format!("Reading {}", config.archive_path));
    }

    let report = run_extraction(&config, &PlistArchiveReader, progress)?;

    write_line(
        progress,
        summary_text(
            report.extracted_count(),
            &report.output_dir,
            report.manifest_path.as_deref(),
        ),
    )?;
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format!("error: {err}"));
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort output; ignore write failures.
    }
}
