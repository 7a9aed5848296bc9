use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::store::{ExceptionTable, ExceptionalWord};
use crate::types::{Pos, Result};

#[derive(Debug, Deserialize)]
struct ExceptionRecord {
    surface: String,
    root: String,
    pos: String,
}

/// Reads an irregular-inflection table from a CSV file with the header
/// `surface,root,pos`. `pos` is one of `Noun`, `Verb`, `Adj`, `Adv`;
/// anything else is read as a noun.
pub fn read_exceptions(path: impl AsRef<Path>) -> Result<ExceptionTable> {
    let reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path.as_ref())?;
    collect(reader)
}

/// [`read_exceptions`] over any reader.
pub fn read_exceptions_from_reader<R: Read>(reader: R) -> Result<ExceptionTable> {
    collect(ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader))
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<ExceptionTable> {
    let mut table = ExceptionTable::new();
    for record in reader.deserialize::<ExceptionRecord>() {
        let record = record?;
        table.insert(ExceptionalWord {
            pos: Pos::from_exception_tag(&record.pos),
            surface: record.surface,
            root: record.root,
        });
    }
    info!(surfaces = table.len() as u64, "codec.exceptions.loaded");
    Ok(table)
}
