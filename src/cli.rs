// src/cli.rs
use crate::config::options::{AppOptions, ExportFormat};
use crate::error::CliError;
use crate::progress::{ConsoleProgress, Progress};
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(AppOptions),
    Help,
}

/// Parse args (without the program name) and run. Extraction and export
/// problems are logged, not returned; only bad arguments are errors.
pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<Option<RunSummary>, CliError> {
    match parse_args(args)? {
        Command::Help => {
            println!("{HELP}");
            Ok(None)
        }
        Command::Run(opts) => {
            let mut console = ConsoleProgress;
            Ok(Some(runner::run(&opts, Some(&mut console as &mut dyn Progress))))
        }
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, CliError> {
    let mut opts = AppOptions::default();
    let mut out: Option<String> = None;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                opts.scrape.input = args.next().ok_or(CliError::MissingValue("--input"))?.into();
            }
            "-o" | "--out" => out = Some(args.next().ok_or(CliError::MissingValue("--out"))?),
            "--sheet" => opts.export.sheet_name = args.next().ok_or(CliError::MissingValue("--sheet"))?,
            "--format" => {
                let v = args.next().ok_or(CliError::MissingValue("--format"))?;
                opts.export.format = ExportFormat::parse(&v).ok_or(CliError::UnknownFormat(v))?;
            }
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(CliError::UnknownArg(other.to_string())),
        }
    }

    // Applied last so an extension-less -o follows --format wherever it appears.
    if let Some(text) = out {
        opts.export.set_path(&text);
    }

    Ok(Command::Run(opts))
}
