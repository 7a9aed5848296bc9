use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::info;

use crate::lexicon::SynSet;
use crate::relation::Relation;
use crate::store::WordNet;

use super::options::VerifyOptions;

/// Specifies the depth of verification checks to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyLevel {
    /// Checks that look at one synset at a time.
    Fast,
    /// Adds store-wide checks: dangling targets, cross-synset literal
    /// senses, literal index consistency and hypernym cycles.
    Full,
}

/// Indicates the severity level of a verification finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifySeverity {
    /// Curation hint; the graph is usable as is.
    Info,
    /// Suspicious data that traversal tolerates.
    Warning,
    /// Structural damage: a broken link or a broken invariant.
    Error,
}

/// Category of a structural anomaly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Synset without a part of speech.
    MissingPos,
    /// Synset without a definition.
    MissingDefinition,
    /// Two relations on one synset name the same target.
    DuplicateRelation,
    /// A semantic relation names a synset that is not stored.
    DanglingRelation,
    /// Two literals of one synset share a surface form.
    DuplicateLiteral,
    /// A literal has sense 0; senses are numbered from 1.
    ZeroSense,
    /// The same surface form and sense appear in two synsets.
    SameLiteralSameSense,
    /// A literal-index handle does not resolve.
    StaleLiteralIndex,
    /// A literal's back-reference differs from its owner's id.
    BackReferenceMismatch,
    /// Following first hypernyms revisits a synset.
    CycleDetected,
}

impl FindingKind {
    /// Severity findings of this kind are reported with.
    pub fn severity(self) -> VerifySeverity {
        match self {
            FindingKind::MissingDefinition => VerifySeverity::Info,
            FindingKind::MissingPos
            | FindingKind::DuplicateRelation
            | FindingKind::DuplicateLiteral
            | FindingKind::ZeroSense
            | FindingKind::SameLiteralSameSense
            | FindingKind::StaleLiteralIndex => VerifySeverity::Warning,
            FindingKind::DanglingRelation
            | FindingKind::BackReferenceMismatch
            | FindingKind::CycleDetected => VerifySeverity::Error,
        }
    }
}

/// Represents a single issue discovered during verification.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyFinding {
    /// The severity level of this finding.
    pub severity: VerifySeverity,
    /// What was found.
    pub kind: FindingKind,
    /// Synset the finding is attached to.
    pub synset_id: String,
    /// Human-readable description of the issue.
    pub message: String,
}

/// Statistics collected during the verification process.
#[derive(Clone, Debug, Default, Serialize)]
pub struct VerifyCounts {
    /// Synsets examined.
    pub synsets: u64,
    /// Literals examined.
    pub literals: u64,
    /// Synset-level and literal-level relations examined.
    pub relations: u64,
    /// Literal-index handles examined.
    pub index_entries: u64,
    /// Findings per kind, including those beyond the recording limit.
    pub by_kind: BTreeMap<FindingKind, u64>,
    /// Findings that were counted but not recorded.
    pub dropped: u64,
}

/// Complete report of a verification operation.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyReport {
    /// The verification level that was performed.
    pub level: VerifyLevel,
    /// True when no error-severity finding was counted.
    pub success: bool,
    /// Recorded findings, in discovery order.
    pub findings: Vec<VerifyFinding>,
    /// Statistics about the data examined.
    pub counts: VerifyCounts,
}

impl VerifyReport {
    /// Total findings of `kind`, recorded or not.
    pub fn count(&self, kind: FindingKind) -> u64 {
        self.counts.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

struct Collector {
    max_findings: usize,
    findings: Vec<VerifyFinding>,
    counts: VerifyCounts,
    errors: u64,
}

impl Collector {
    fn push(&mut self, kind: FindingKind, synset_id: &str, message: impl Into<String>) {
        *self.counts.by_kind.entry(kind).or_default() += 1;
        if kind.severity() == VerifySeverity::Error {
            self.errors += 1;
        }
        if self.findings.len() < self.max_findings {
            self.findings.push(VerifyFinding {
                severity: kind.severity(),
                kind,
                synset_id: synset_id.to_string(),
                message: message.into(),
            });
        } else {
            self.counts.dropped += 1;
        }
    }
}

/// Checks the store for the structural anomalies a hand-curated resource
/// accumulates. Nothing is modified; see [`super::repair`] for the fixes.
pub fn verify(wordnet: &WordNet, opts: &VerifyOptions) -> VerifyReport {
    let mut collector = Collector {
        max_findings: opts.max_findings,
        findings: Vec::new(),
        counts: VerifyCounts::default(),
        errors: 0,
    };

    for synset in wordnet.synsets() {
        check_synset(synset, &mut collector);
        if opts.level == VerifyLevel::Full {
            check_targets(wordnet, synset, &mut collector);
        }
    }
    if opts.level == VerifyLevel::Full {
        check_literal_index(wordnet, &mut collector);
        check_cycles(wordnet, &mut collector);
    }

    info!(
        level = ?opts.level,
        synsets = collector.counts.synsets,
        findings = collector.findings.len() as u64 + collector.counts.dropped,
        errors = collector.errors,
        "admin.verify.complete"
    );
    VerifyReport {
        level: opts.level,
        success: collector.errors == 0,
        findings: collector.findings,
        counts: collector.counts,
    }
}

fn check_synset(synset: &SynSet, collector: &mut Collector) {
    let id = synset.id();
    collector.counts.synsets += 1;
    collector.counts.relations += synset.relation_size() as u64;

    if synset.pos().is_none() {
        collector.push(FindingKind::MissingPos, id, format!("synset {id} has no part of speech"));
    }
    if synset.number_of_definitions() == 0 {
        collector.push(
            FindingKind::MissingDefinition,
            id,
            format!("synset {id} ({}) has no definition", synset.synonym()),
        );
    }

    for index in duplicate_relation_indexes(synset.relations()) {
        if let Some(relation) = synset.relation(index) {
            collector.push(
                FindingKind::DuplicateRelation,
                id,
                format!("synset {id} repeats relation target {}", relation.name()),
            );
        }
    }

    let mut names: FxHashSet<&str> = FxHashSet::default();
    for literal in synset.synonym() {
        collector.counts.literals += 1;
        collector.counts.relations += literal.relation_size() as u64;
        if !names.insert(literal.name()) {
            collector.push(
                FindingKind::DuplicateLiteral,
                id,
                format!("synset {id} lists literal {} more than once", literal.name()),
            );
        }
        if literal.sense() == 0 {
            collector.push(
                FindingKind::ZeroSense,
                id,
                format!("literal {} of synset {id} has sense 0", literal.name()),
            );
        }
        if literal.synset_id() != id {
            collector.push(
                FindingKind::BackReferenceMismatch,
                id,
                format!(
                    "literal {literal} of synset {id} points at {}",
                    literal.synset_id()
                ),
            );
        }
    }
}

/// Positions of relations whose target repeats an earlier one. Interlingual
/// anchors and synset ids are compared separately.
pub(crate) fn duplicate_relation_indexes(relations: &[Relation]) -> Vec<usize> {
    let mut seen: FxHashSet<(bool, &str)> = FxHashSet::default();
    relations
        .iter()
        .enumerate()
        .filter(|(_, relation)| {
            !seen.insert((relation.as_interlingual().is_some(), relation.name()))
        })
        .map(|(index, _)| index)
        .collect()
}

fn check_targets(wordnet: &WordNet, synset: &SynSet, collector: &mut Collector) {
    let id = synset.id();
    for relation in synset.relations().iter().filter_map(Relation::as_semantic) {
        if !wordnet.contains(relation.name()) {
            collector.push(
                FindingKind::DanglingRelation,
                id,
                format!("relation {relation} of synset {id} does not resolve"),
            );
        }
    }
    for literal in synset.synonym() {
        for relation in literal.relations().iter().filter_map(Relation::as_semantic) {
            if !wordnet.contains(relation.name()) {
                collector.push(
                    FindingKind::DanglingRelation,
                    id,
                    format!("relation {relation} of literal {literal} in synset {id} does not resolve"),
                );
            }
        }
    }
}

fn check_literal_index(wordnet: &WordNet, collector: &mut Collector) {
    for (name, handles) in wordnet.literal_index().iter() {
        let mut owners_by_sense: FxHashMap<u32, &str> = FxHashMap::default();
        for handle in handles {
            collector.counts.index_entries += 1;
            if !wordnet.resolves(name, handle) {
                collector.push(
                    FindingKind::StaleLiteralIndex,
                    &handle.synset_id,
                    format!(
                        "index entry {name} {} points at missing literal in {}",
                        handle.sense, handle.synset_id
                    ),
                );
                continue;
            }
            match owners_by_sense.get(&handle.sense) {
                Some(first) if *first != handle.synset_id => collector.push(
                    FindingKind::SameLiteralSameSense,
                    &handle.synset_id,
                    format!(
                        "literal {name} {} appears in {first} and {}",
                        handle.sense, handle.synset_id
                    ),
                ),
                Some(_) => {}
                None => {
                    owners_by_sense.insert(handle.sense, handle.synset_id.as_str());
                }
            }
        }
    }
}

fn check_cycles(wordnet: &WordNet, collector: &mut Collector) {
    // Walk number that first reached each id.
    let mut reached: FxHashMap<&str, usize> = FxHashMap::default();
    for (walk, start) in wordnet.synsets().enumerate() {
        if reached.contains_key(start.id()) {
            continue;
        }
        let mut path: Vec<&str> = Vec::new();
        let mut current = Some(start);
        while let Some(node) = current {
            match reached.get(node.id()) {
                Some(&seen) if seen == walk => {
                    let entry = path.iter().position(|id| *id == node.id()).unwrap_or(0);
                    let members = path[entry..].join(" -> ");
                    collector.push(
                        FindingKind::CycleDetected,
                        node.id(),
                        format!("hypernym cycle {members} -> {}", node.id()),
                    );
                    break;
                }
                Some(_) => break,
                None => {
                    reached.insert(node.id(), walk);
                    path.push(node.id());
                    current = wordnet.percolate_up(node);
                }
            }
        }
    }
}
