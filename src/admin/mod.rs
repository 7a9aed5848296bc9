#![forbid(unsafe_code)]

//! Maintenance passes over a loaded lexical graph.
//!
//! These functions inspect or rewrite a [`crate::store::WordNet`] as a whole:
//! structural verification, repair of what verification finds, aggregate
//! statistics and id-mapping merges.

mod merge;
mod options;
mod repair;
mod stats;
mod verify;

/// Id-mapping merge.
///
/// Folds or renames synsets according to an [`crate::codec::IdMapping`] and
/// rewrites relations that named them.
pub use merge::{merge_with_mapping, MergeReport};

/// Configuration options for the verify and repair passes.
pub use options::{RepairOptions, VerifyOptions, DEFAULT_MAX_FINDINGS};

/// Repair of duplicate and dangling relations.
///
/// Removes what verification reports as fixable and optionally equalizes
/// inverse relations.
pub use repair::{repair, RepairChange, RepairReport};

/// Statistics collection and reporting.
pub use stats::{stats, RelationStatsSection, StatsReport};

/// Structural integrity verification.
///
/// Reports missing data, inconsistent relations and hypernym cycles without
/// modifying the store.
pub use verify::{
    verify, FindingKind, VerifyCounts, VerifyFinding, VerifyLevel, VerifyReport, VerifySeverity,
};
