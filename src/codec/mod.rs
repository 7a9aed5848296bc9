//! Readers and writers for the on-disk resources.
//!
//! The synset resource is a JSON document of [`records`] (one record per
//! synset, in store order). The side tables use flat text formats:
//! irregular inflections as CSV, information content as TSV and id
//! mappings as `old->new` lines.

mod exceptions;
mod id_mapping;
mod information_content;
mod records;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::store::WordNet;
use crate::types::Result;

/// CSV reader for the irregular-inflection table.
pub use exceptions::{read_exceptions, read_exceptions_from_reader};
/// Synset id rewrite table.
pub use id_mapping::IdMapping;
/// TSV reader for information-content values.
pub use information_content::{read_information_content, read_information_content_from_reader};

use records::{ResourceDocument, SynSetRecord};

/// Loads a synset resource from `path`.
///
/// Relation targets are not checked; run [`crate::admin::verify`] to find
/// dangling references.
pub fn load(path: impl AsRef<Path>) -> Result<WordNet> {
    let path = path.as_ref();
    let wordnet = load_from_reader(BufReader::new(File::open(path)?))?;
    info!(
        path = %path.display(),
        synsets = wordnet.size() as u64,
        "codec.load.complete"
    );
    Ok(wordnet)
}

/// [`load`] over any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<WordNet> {
    let document: ResourceDocument = serde_json::from_reader(reader)?;
    Ok(document.synsets.into_iter().map(Into::into).collect())
}

/// Writes every synset to `path` in store iteration order.
pub fn save(wordnet: &WordNet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    save_to_writer(wordnet, &mut writer)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        synsets = wordnet.size() as u64,
        "codec.save.complete"
    );
    Ok(())
}

/// [`save`] over any writer.
pub fn save_to_writer<W: Write>(wordnet: &WordNet, writer: W) -> Result<()> {
    let document = ResourceDocument {
        synsets: wordnet.synsets().map(SynSetRecord::from).collect(),
    };
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
