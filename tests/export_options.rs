// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic and argument parsing.
//
use std::path::{Path, PathBuf};

use commencement_export::cli::{parse_args, Command};
use commencement_export::config::options::{AppOptions, ExportFormat, ExportOptions};
use commencement_export::error::CliError;

fn norm(p: &Path) -> PathBuf { p.components().collect() }

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn default_output_is_the_ku_workbook() {
    let opts = ExportOptions::default();
    assert_eq!(opts.format, ExportFormat::Xlsx);
    assert_eq!(opts.out_path(), PathBuf::from("KU_2020_Degree_Candidates.xlsx"));
    assert_eq!(opts.sheet_name, "Candidates");
}

#[test]
fn extension_follows_format_when_not_typed() {
    let mut export = ExportOptions::default();
    export.set_path("out/grads");
    assert_eq!(norm(&export.out_path()), norm(Path::new("out/grads.xlsx")));

    export.format = ExportFormat::Tsv;
    assert!(export.out_path().to_string_lossy().ends_with("grads.tsv"));
}

#[test]
fn format_change_keeps_user_extension() {
    let mut export = ExportOptions::default();
    export.set_path("out/custom.data");
    export.format = ExportFormat::Csv;
    assert!(export.out_path().to_string_lossy().ends_with("custom.data"));
}

#[test]
fn format_names_parse_case_insensitively() {
    assert_eq!(ExportFormat::parse("XLSX"), Some(ExportFormat::Xlsx));
    assert_eq!(ExportFormat::parse(" csv "), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::parse("tsv"), Some(ExportFormat::Tsv));
    assert_eq!(ExportFormat::parse("ods"), None);
    assert_eq!(ExportFormat::Csv.delim(), Some(','));
    assert_eq!(ExportFormat::Xlsx.delim(), None);
}

#[test]
fn no_args_means_defaults() {
    assert_eq!(parse_args(args(&[])).unwrap(), Command::Run(AppOptions::default()));
}

#[test]
fn args_set_input_output_sheet_and_format() {
    let cmd = parse_args(args(&[
        "-o", "exports/grads", "--format", "csv", "-i", "page.html", "--sheet", "2020", "--no-headers",
    ]))
    .unwrap();
    let Command::Run(opts) = cmd else { panic!("expected Run") };

    assert_eq!(opts.scrape.input, PathBuf::from("page.html"));
    assert_eq!(opts.export.format, ExportFormat::Csv);
    assert_eq!(opts.export.sheet_name, "2020");
    assert!(!opts.export.include_headers);
    // -o given before --format still picks up the csv extension
    assert_eq!(norm(&opts.export.out_path()), norm(Path::new("exports/grads.csv")));
}

#[test]
fn bad_args_are_reported() {
    assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::UnknownArg(a)) if a == "--bogus"));
    assert!(matches!(parse_args(args(&["--format", "pdf"])), Err(CliError::UnknownFormat(_))));
    assert!(matches!(parse_args(args(&["-o"])), Err(CliError::MissingValue("--out"))));
    assert_eq!(parse_args(args(&["--help", "--bogus"])).unwrap(), Command::Help);
}
