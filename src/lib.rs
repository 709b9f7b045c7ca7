pub mod categoriser;
pub mod category;
pub mod config;
pub mod error;
pub mod mapping;
pub mod report;
pub mod source;
pub mod transaction;


use crate::categoriser::{Categoriser, ReloadPolicy};
use crate::error::CategoriseError;
use crate::report::{ReportFormat, Reporter};
use crate::source::LineSource;
use crate::transaction::Transaction;

use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use crate::category::Category;
pub use crate::mapping::MappingTable;

/// Everything a run needs besides the statement itself.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mapping: PathBuf,
    pub reload: ReloadPolicy,
    pub leading_columns: usize,
    pub format: ReportFormat,
    pub limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mapping: PathBuf::from(mapping::DEFAULT_MAPPING_PATH),
            reload: ReloadPolicy::Once,
            leading_columns: 0,
            format: ReportFormat::Lines,
            limit: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub rows: usize,
    pub categorised: usize,
    pub uncategorised: usize,
    /// Reading ended before the end of the file.
    pub stopped_early: bool,
}

/// Streams the statement at `path` through parsing and categorisation,
/// reporting uncategorised transactions to `out` as they are seen.
pub async fn run<W: Write>(
    path: impl AsRef<Path>,
    settings: &Settings,
    out: W,
) -> Result<Summary, CategoriseError> {
    let mut source = LineSource::open(path).await?;
    let categoriser = Categoriser::open(&settings.mapping, settings.reload).await?;
    debug!(
        "Loaded {} mappings from {}",
        categoriser.table().len(),
        settings.mapping.display()
    );

    let reporter = Reporter::new(settings.format, out);
    let result = process(&mut source, categoriser, reporter, settings).await;
    source.close();
    result
}

async fn process<W: Write>(
    source: &mut LineSource,
    mut categoriser: Categoriser,
    mut reporter: Reporter<W>,
    settings: &Settings,
) -> Result<Summary, CategoriseError> {
    let mut summary = Summary::default();

    if settings.limit == Some(0) {
        summary.stopped_early = true;
        return Ok(summary);
    }

    // The header row is discarded whatever it holds.
    if source.next_line().await?.is_none() {
        reporter.flush()?;
        return Ok(summary);
    }

    while let Some(line) = source.next_line().await? {
        let tx = Transaction::parse_line(&line, settings.leading_columns)?;
        let tx = categoriser.categorise(tx).await?;
        summary.rows += 1;

        if tx.is_categorised() {
            summary.categorised += 1;
            continue;
        }
        summary.uncategorised += 1;

        match reporter.observe(&tx) {
            Ok(_) => {}
            Err(e) if e.is_broken_pipe() => {
                debug!("Output closed, stopping after {} rows", summary.rows);
                summary.stopped_early = true;
                return Ok(summary);
            }
            Err(e) => return Err(e),
        }

        if settings.limit.is_some_and(|limit| reporter.reported() >= limit) {
            debug!("Reached limit of {} uncategorised rows", reporter.reported());
            summary.stopped_early = true;
            break;
        }
    }

    match reporter.flush() {
        Err(e) if e.is_broken_pipe() => summary.stopped_early = true,
        other => other?,
    }

    Ok(summary)
}
