// src/runner.rs
use crate::{
    config::options::AppOptions,
    file::{self, Written},
    progress::Progress,
    specs::candidates,
};

/// Summary of what a run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub written: Option<Written>,
}

/// Extract → (maybe) export. Never fails: every problem is logged and the
/// run ends normally. `progress` can be None (no UI updates).
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> RunSummary {
    let input = &opts.scrape.input;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Starting data extraction from '{}'...", input.display()));
    }

    let records = candidates::extract(input);
    if let Some(p) = progress.as_deref_mut() {
        p.extracted(records.len());
    }

    let mut summary = RunSummary { records: records.len(), written: None };

    if records.is_empty() {
        logw!("No data was extracted. The output file will not be created.");
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return summary;
    }

    let out = opts.export.out_path();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Saving extracted data to '{}'...", out.display()));
    }

    match file::export_records(&opts.export, &records) {
        Ok(w) => {
            match &w.sheet {
                Some(sheet) => logf!("Data successfully saved to '{}' on sheet '{}'.", w.path.display(), sheet),
                None => logf!("Data successfully saved to '{}'.", w.path.display()),
            }
            summary.written = Some(w);
        }
        Err(e) => loge!("Error saving data to '{}': {e}", out.display()),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}
