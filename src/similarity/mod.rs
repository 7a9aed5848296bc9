//! Semantic similarity metrics over the hypernym hierarchy.
//!
//! Every metric computes both synsets' root paths with
//! [`WordNet::find_path_to_root`] and applies a closed-form formula to the
//! quantities from [`crate::hierarchy`]. None of them mutate the store.

mod information_content;
mod jcn;
mod lch;
mod path;
mod resnik;
mod wu_palmer;

use std::fmt;
use std::str::FromStr;

use crate::lexicon::SynSet;
use crate::store::WordNet;
use crate::types::{LexError, Result};

/// Per-synset information content table used by [`Resnik`] and [`Jcn`].
pub use information_content::InformationContent;
/// Jiang-Conrath distance-based similarity.
pub use jcn::Jcn;
/// Leacock-Chodorow similarity.
pub use lch::Lch;
/// Raw path length between two synsets.
pub use path::SimilarityPath;
/// Resnik information-content similarity.
pub use resnik::Resnik;
/// Wu-Palmer depth-scaled similarity.
pub use wu_palmer::WuPalmer;

/// A similarity (or distance) measure between two synsets.
pub trait Similarity {
    /// Scores the pair. Disconnected pairs and degenerate formulas are
    /// reported as errors unless the metric defines a value for them.
    fn compute_similarity(&self, first: &SynSet, second: &SynSet) -> Result<f64>;
}

fn root_paths(wordnet: &WordNet, first: &SynSet, second: &SynSet) -> (Vec<String>, Vec<String>) {
    (
        wordnet.find_path_to_root(first),
        wordnet.find_path_to_root(second),
    )
}

fn no_common_subsumer(first: &SynSet, second: &SynSet) -> LexError {
    LexError::NoCommonSubsumer {
        first: first.id().to_string(),
        second: second.id().to_string(),
    }
}

/// Selector over the available metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// [`SimilarityPath`]
    Path,
    /// [`WuPalmer`]
    WuPalmer,
    /// [`Lch`]
    Lch,
    /// [`Resnik`]
    Resnik,
    /// [`Jcn`]
    Jcn,
}

impl Metric {
    /// Every metric, in presentation order.
    pub const ALL: [Metric; 5] = [
        Metric::Path,
        Metric::WuPalmer,
        Metric::Lch,
        Metric::Resnik,
        Metric::Jcn,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Path => "path",
            Metric::WuPalmer => "wu-palmer",
            Metric::Lch => "lch",
            Metric::Resnik => "resnik",
            Metric::Jcn => "jcn",
        }
    }

    /// True for metrics that need an [`InformationContent`] table.
    pub fn needs_information_content(self) -> bool {
        matches!(self, Metric::Resnik | Metric::Jcn)
    }

    /// Builds the metric over `wordnet`.
    ///
    /// Fails with [`LexError::InvalidArgument`] when an information-content
    /// metric is requested without a table.
    pub fn build<'a>(
        self,
        wordnet: &'a WordNet,
        information_content: Option<&'a InformationContent>,
    ) -> Result<Box<dyn Similarity + 'a>> {
        let table = || {
            information_content.ok_or_else(|| {
                LexError::invalid_argument(format!(
                    "metric {} requires an information content table",
                    self.as_str()
                ))
            })
        };
        Ok(match self {
            Metric::Path => Box::new(SimilarityPath::new(wordnet)),
            Metric::WuPalmer => Box::new(WuPalmer::new(wordnet)),
            Metric::Lch => Box::new(Lch::new(wordnet)),
            Metric::Resnik => Box::new(Resnik::new(wordnet, table()?)),
            Metric::Jcn => Box::new(Jcn::new(wordnet, table()?)),
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| LexError::invalid_argument(format!("unknown metric {s}")))
    }
}
