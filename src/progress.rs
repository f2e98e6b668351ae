// src/progress.rs
/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status lines to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once extraction is done with the number of records found.
    fn extracted(&mut self, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn extracted(&mut self, count: usize) {
        if count > 0 {
            println!("Extracted {count} candidate entries.");
        }
    }
}
