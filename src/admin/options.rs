use serde::Serialize;

use super::verify::VerifyLevel;

/// Findings kept by a verification pass before the rest are only counted.
pub const DEFAULT_MAX_FINDINGS: usize = 32;

/// Options for [`super::verify`].
#[derive(Clone, Debug, Serialize)]
pub struct VerifyOptions {
    /// Which checks to run.
    pub level: VerifyLevel,
    /// Maximum findings recorded in the report.
    pub max_findings: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            level: VerifyLevel::Full,
            max_findings: DEFAULT_MAX_FINDINGS,
        }
    }
}

/// Options for [`super::repair`]. Passes run in field order.
#[derive(Clone, Debug, Serialize)]
pub struct RepairOptions {
    /// Collapse relations that repeat a target already held by the synset.
    pub remove_duplicates: bool,
    /// Remove semantic relations whose target synset does not exist.
    pub remove_dangling: bool,
    /// Add missing inverse relations after the removals.
    pub equalize: bool,
    /// Drop literal-index handles that no longer resolve.
    pub prune_index: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            remove_dangling: true,
            equalize: false,
            prune_index: true,
        }
    }
}
