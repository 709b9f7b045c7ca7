use crate::error::CategoriseError;
use crate::transaction::Transaction;

use rust_decimal::Decimal;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One original description per line
    #[default]
    Lines,
    /// Uncategorised rows as CSV with a header
    Csv,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    date: &'a str,
    description: &'a str,
    amount: Decimal,
    running_total: Decimal,
}

enum Sink<W: Write> {
    Lines(W),
    Csv(csv::Writer<W>),
}

/// Writes out every transaction the mapping could not place.
pub struct Reporter<W: Write> {
    sink: Sink<W>,
    reported: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(format: ReportFormat, writer: W) -> Self {
        let sink = match format {
            ReportFormat::Lines => Sink::Lines(writer),
            ReportFormat::Csv => Sink::Csv(csv::WriterBuilder::new().from_writer(writer)),
        };
        Self { sink, reported: 0 }
    }

    /// Reports `tx` if it is uncategorised. Returns whether it was written.
    pub fn observe(&mut self, tx: &Transaction) -> Result<bool, CategoriseError> {
        if tx.is_categorised() {
            return Ok(false);
        }

        match &mut self.sink {
            Sink::Lines(w) => writeln!(w, "{}", tx.description).map_err(CategoriseError::Output)?,
            Sink::Csv(w) => w
                .serialize(ReportRow {
                    date: &tx.date,
                    description: &tx.description,
                    amount: tx.amount,
                    running_total: tx.running_total,
                })
                .map_err(|e| CategoriseError::Output(csv_to_io(e)))?,
        }

        self.reported += 1;
        Ok(true)
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn flush(&mut self) -> Result<(), CategoriseError> {
        match &mut self.sink {
            Sink::Lines(w) => w.flush(),
            Sink::Csv(w) => w.flush(),
        }
        .map_err(CategoriseError::Output)
    }

    pub fn into_inner(mut self) -> Result<W, CategoriseError> {
        self.flush()?;
        match self.sink {
            Sink::Lines(w) => Ok(w),
            Sink::Csv(w) => w
                .into_inner()
                .map_err(|e| CategoriseError::Output(e.into_error())),
        }
    }
}

// Keeps the io kind so a closed pipe is still recognisable.
fn csv_to_io(err: csv::Error) -> io::Error {
    if !matches!(err.kind(), csv::ErrorKind::Io(_)) {
        return io::Error::other(err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::other(format!("{:?}", other)),
    }
}
