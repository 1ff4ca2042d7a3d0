use std::io::{self, Write};

use log::info;
use thiserror::Error;

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::input::{self, LoadError};
use crate::report::Reporter;
use crate::scanner::{ScanError, Scanner};

/// Any failure that aborts a run. None of these are recovered; the binary
/// maps them to a non-zero exit status.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("dictionary error: {0}")]
    Dictionary(ScanError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("output error: {0}")]
    Output(io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_scanned: usize,
    pub misses: usize,
}

/// Run one full check: load the dictionary, scan the document, write a
/// `Not found:` record per miss to `out`.
///
/// The dictionary is fully materialized before the first membership test.
/// Misses are written in document order, as the scanner yields them.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    let dictionary =
        Dictionary::load(&config.dictionary_path).map_err(RunError::Dictionary)?;
    info!(
        "dictionary loaded: {} entries from {}",
        dictionary.len(),
        config.dictionary_path.display()
    );

    let reader = input::open_document(&config.document_path)?;
    let mut scanner = Scanner::new(reader, &dictionary);
    let mut reporter = Reporter::new(out);

    for miss in &mut scanner {
        let token = miss?;
        reporter.report(&token).map_err(RunError::Output)?;
    }

    let summary = RunSummary {
        lines_scanned: scanner.lines_scanned(),
        misses: reporter.count(),
    };
    info!(
        "scan complete: {} lines, {} misses",
        summary.lines_scanned, summary.misses
    );
    Ok(summary)
}
