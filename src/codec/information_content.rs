use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::similarity::InformationContent;
use crate::types::{LexError, Result};

/// Reads an information-content table: one `synset-id<TAB>value` pair per
/// line, no header. Blank lines and lines starting with `#` are skipped.
pub fn read_information_content(path: impl AsRef<Path>) -> Result<InformationContent> {
    let reader = builder().from_path(path.as_ref())?;
    collect(reader)
}

/// [`read_information_content`] over any reader.
pub fn read_information_content_from_reader<R: Read>(reader: R) -> Result<InformationContent> {
    collect(builder().from_reader(reader))
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All);
    builder
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<InformationContent> {
    let mut table = InformationContent::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let (Some(id), Some(raw)) = (record.get(0), record.get(1)) else {
            return Err(LexError::Serialization(format!(
                "information content row {} needs two columns",
                line + 1
            )));
        };
        let value: f64 = raw.parse().map_err(|_| {
            LexError::Serialization(format!(
                "information content row {}: {raw:?} is not a number",
                line + 1
            ))
        })?;
        table.insert(id, value);
    }
    info!(entries = table.len() as u64, "codec.information_content.loaded");
    Ok(table)
}
