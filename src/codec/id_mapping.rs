use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{info, warn};

use crate::types::{LexError, Result};

const SEPARATOR: &str = "->";

/// Synset id rewrite table, stored as one `old->new` pair per line.
///
/// Keys keep their insertion order so that a mapping written back out
/// diffs cleanly against the file it was read from.
#[derive(Clone, Debug, Default)]
pub struct IdMapping {
    order: Vec<String>,
    map: FxHashMap<String, String>,
}

impl IdMapping {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `old->new` lines from `path`. Blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(File::open(path.as_ref())?)
    }

    /// [`IdMapping::load`] over any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut mapping = Self::new();
        for (line_no, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((from, to)) = line.split_once(SEPARATOR) else {
                return Err(LexError::Serialization(format!(
                    "id mapping line {}: expected `old{SEPARATOR}new`",
                    line_no + 1
                )));
            };
            mapping.add(from.trim(), to.trim());
        }
        info!(entries = mapping.len() as u64, "codec.id_mapping.loaded");
        Ok(mapping)
    }

    /// Writes the mapping to `path`, one pair per line.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// [`IdMapping::save`] over any writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (from, to) in self.iter() {
            writeln!(writer, "{from}{SEPARATOR}{to}")?;
        }
        Ok(())
    }

    /// Adds or replaces `from -> to`.
    pub fn add(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        if !self.map.contains_key(&from) {
            self.order.push(from.clone());
        }
        self.map.insert(from, to.into());
    }

    /// Removes the entry for `from`, returning its target.
    pub fn remove(&mut self, from: &str) -> Option<String> {
        let to = self.map.remove(from)?;
        self.order.retain(|key| key != from);
        Some(to)
    }

    /// Direct target of `id`, without following chains.
    pub fn single_map(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(String::as_str)
    }

    /// Final target of `id` after following `a->b->c` chains.
    ///
    /// Returns `None` when `id` is not mapped. A chain that loops back on
    /// itself stops at the last id before the repeat.
    pub fn map(&self, id: &str) -> Option<&str> {
        let mut current = self.single_map(id)?;
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        seen.insert(id);
        while let Some(next) = self.single_map(current) {
            if !seen.insert(current) {
                warn!(id, at = current, "codec.id_mapping.cycle");
                break;
            }
            if seen.contains(next) {
                warn!(id, at = next, "codec.id_mapping.cycle");
                break;
            }
            current = next;
        }
        Some(current)
    }

    /// Mapped ids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(from, to)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|key| self.map.get(key).map(|to| (key.as_str(), to.as_str())))
    }

    /// Number of mapped ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IdMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = IdMapping::new();
        for (from, to) in iter {
            mapping.add(from, to);
        }
        mapping
    }
}
