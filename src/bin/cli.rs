//! Binary entry point for the lexigraph administrative CLI.
#![forbid(unsafe_code)]

#[path = "cli/config.rs"]
mod config;
#[path = "cli/ui.rs"]
mod ui;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use lexigraph::{
    admin::{
        merge_with_mapping, repair, stats, verify, MergeReport, RepairOptions, RepairReport,
        StatsReport, VerifyLevel, VerifyOptions, VerifyReport, DEFAULT_MAX_FINDINGS,
    },
    codec::{self, read_exceptions, read_information_content, IdMapping},
    similarity::{InformationContent, Metric},
    LexError, Pos, SynSet, WordNet,
};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use config::{CliConfig, ConfigError};
use ui::{Theme, Ui};

#[derive(Parser, Debug)]
#[command(
    name = "lexigraph",
    version,
    about = "Administrative CLI for lexigraph resources",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(flatten)]
    open: OpenArgs,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for structured responses"
    )]
    format: OutputFormat,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = Theme::Auto,
        help = "Color theme for text output"
    )]
    theme: Theme,

    #[arg(
        long,
        global = true,
        env = "LEXIGRAPH_CONFIG",
        value_name = "FILE",
        help = "CLI config file"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct OpenArgs {
    #[arg(
        long,
        short = 'r',
        global = true,
        env = "LEXIGRAPH_RESOURCE",
        value_name = "FILE",
        help = "Synset resource (defaults to [resource] default in the config)"
    )]
    resource: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Irregular inflection CSV used by lookup back-off"
    )]
    exceptions: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print synset, literal and relation statistics")]
    Stats,

    #[command(about = "Check the resource for structural problems")]
    Verify {
        #[arg(
            long,
            value_enum,
            default_value_t = VerifyLevelArg::Full,
            help = "Verification level"
        )]
        level: VerifyLevelArg,

        #[arg(
            long,
            value_name = "N",
            default_value_t = DEFAULT_MAX_FINDINGS,
            help = "Findings to list before only counting"
        )]
        max_findings: usize,
    },

    #[command(about = "Remove duplicate and dangling relations")]
    Repair(RepairCmd),

    #[command(about = "Find synsets containing a word")]
    Lookup {
        #[arg(value_name = "WORD")]
        word: String,

        #[arg(long, value_enum, help = "Part of speech for suffix back-off")]
        pos: Option<PosArg>,

        #[arg(long, help = "Only the literal with this sense number")]
        sense: Option<u32>,
    },

    #[command(about = "Print the hypernym path from a synset to its root")]
    Path {
        #[arg(value_name = "ID")]
        id: String,
    },

    #[command(about = "Score two synsets with a similarity metric")]
    Similarity {
        #[arg(value_name = "ID")]
        first: String,

        #[arg(value_name = "ID")]
        second: String,

        #[arg(long, value_enum, default_value_t = MetricArg::WuPalmer)]
        metric: MetricArg,

        #[arg(
            long,
            value_name = "FILE",
            help = "Information content TSV for resnik/jcn"
        )]
        information_content: Option<PathBuf>,
    },

    #[command(about = "Merge or rename synsets listed in an id mapping")]
    Merge {
        #[arg(long, value_name = "FILE", help = "old->new mapping file")]
        mapping: PathBuf,

        #[arg(long, value_name = "FILE", required = true)]
        output: PathBuf,
    },

    #[command(subcommand, about = "Inspect or edit the CLI config")]
    Config(ConfigCmd),
}

#[derive(Args, Debug)]
struct RepairCmd {
    #[arg(long, value_name = "FILE", required = true, help = "Where to write the repaired resource")]
    output: PathBuf,

    #[arg(long, help = "Keep duplicate relations")]
    keep_duplicates: bool,

    #[arg(long, help = "Keep relations to missing synsets")]
    keep_dangling: bool,

    #[arg(long, help = "Add missing inverse relations")]
    equalize: bool,

    #[arg(long, help = "Leave stale literal-index handles in place")]
    no_prune: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCmd {
    #[command(about = "Print the config file path and contents")]
    Show,

    #[command(about = "Set (or clear) the default resource")]
    SetDefault {
        #[arg(value_name = "PATH", required_unless_present = "clear")]
        path: Option<PathBuf>,

        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum VerifyLevelArg {
    Fast,
    Full,
}

impl From<VerifyLevelArg> for VerifyLevel {
    fn from(level: VerifyLevelArg) -> Self {
        match level {
            VerifyLevelArg::Fast => VerifyLevel::Fast,
            VerifyLevelArg::Full => VerifyLevel::Full,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum MetricArg {
    Path,
    WuPalmer,
    Lch,
    Resnik,
    Jcn,
}

impl From<MetricArg> for Metric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Path => Metric::Path,
            MetricArg::WuPalmer => Metric::WuPalmer,
            MetricArg::Lch => Metric::Lch,
            MetricArg::Resnik => Metric::Resnik,
            MetricArg::Jcn => Metric::Jcn,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum PosArg {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl From<PosArg> for Pos {
    fn from(pos: PosArg) -> Self {
        match pos {
            PosArg::Noun => Pos::Noun,
            PosArg::Verb => Pos::Verb,
            PosArg::Adjective => Pos::Adjective,
            PosArg::Adverb => Pos::Adverb,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut config = CliConfig::load(cli.config.clone())?;
    install_tracing_subscriber(&config);
    let ui = Ui::new(cli.theme);

    match cli.command {
        Command::Stats => {
            let wordnet = open(&cli.open, &config)?;
            let report = stats(&wordnet);
            emit(&cli.format, &report, || print_stats_text(&ui, &report))?;
        }
        Command::Verify {
            level,
            max_findings,
        } => {
            let wordnet = open(&cli.open, &config)?;
            let opts = VerifyOptions {
                level: level.into(),
                max_findings,
            };
            let report = verify(&wordnet, &opts);
            emit(&cli.format, &report, || print_verify_text(&ui, &report))?;
            if !report.success {
                std::process::exit(2);
            }
        }
        Command::Repair(cmd) => {
            let mut wordnet = open(&cli.open, &config)?;
            let opts = RepairOptions {
                remove_duplicates: !cmd.keep_duplicates,
                remove_dangling: !cmd.keep_dangling,
                equalize: cmd.equalize,
                prune_index: !cmd.no_prune,
            };
            let report = repair(&mut wordnet, &opts);
            codec::save(&wordnet, &cmd.output)?;
            emit(&cli.format, &report, || {
                print_repair_text(&ui, &report, &cmd.output)
            })?;
        }
        Command::Lookup { word, pos, sense } => {
            let wordnet = open(&cli.open, &config)?;
            let output = lookup(&wordnet, &word, pos.map(Pos::from), sense);
            emit(&cli.format, &output, || print_lookup_text(&ui, &output))?;
        }
        Command::Path { id } => {
            let wordnet = open(&cli.open, &config)?;
            let synset = find(&wordnet, &id)?;
            let output = PathOutput {
                path: wordnet.find_path_to_root(synset),
                id,
            };
            emit(&cli.format, &output, || {
                ui.list(&format!("Path from {}", output.id), output.path.iter().cloned())
            })?;
        }
        Command::Similarity {
            first,
            second,
            metric,
            information_content,
        } => {
            let wordnet = open(&cli.open, &config)?;
            let metric = Metric::from(metric);
            let table = load_information_content(metric, information_content, &config)?;
            let scorer = metric.build(&wordnet, table.as_ref())?;
            let score = scorer.compute_similarity(find(&wordnet, &first)?, find(&wordnet, &second)?)?;
            let output = SimilarityOutput {
                metric: metric.as_str(),
                first,
                second,
                score,
            };
            emit(&cli.format, &output, || {
                ui.section(
                    "Similarity",
                    [
                        ("metric", output.metric.to_string()),
                        ("first", output.first.clone()),
                        ("second", output.second.clone()),
                        ("score", format!("{:.6}", output.score)),
                    ],
                )
            })?;
        }
        Command::Merge { mapping, output } => {
            let mut wordnet = open(&cli.open, &config)?;
            let mapping = IdMapping::load(&mapping)?;
            let report = merge_with_mapping(&mut wordnet, &mapping)?;
            codec::save(&wordnet, &output)?;
            emit(&cli.format, &report, || print_merge_text(&ui, &report, &output))?;
        }
        Command::Config(cmd) => run_config(cmd, &mut config, &cli.format, &ui)?,
    }

    Ok(())
}

fn install_tracing_subscriber(config: &CliConfig) {
    let filter = EnvFilter::try_from_env("LEXIGRAPH_LOG")
        .or_else(|_| EnvFilter::try_new(config.log_filter().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open(args: &OpenArgs, config: &CliConfig) -> Result<WordNet, Box<dyn Error>> {
    let path = args
        .resource
        .clone()
        .or_else(|| config.default_resource().cloned())
        .ok_or("no resource given; pass --resource or run `config set-default`")?;
    let mut wordnet = codec::load(&path)?;
    if let Some(exceptions) = args.exceptions.as_ref().or(config.exceptions()) {
        wordnet.set_exceptions(read_exceptions(exceptions)?);
    }
    Ok(wordnet)
}

fn find<'a>(wordnet: &'a WordNet, id: &str) -> Result<&'a SynSet, LexError> {
    wordnet
        .synset_with_id(id)
        .ok_or_else(|| LexError::NotFound(format!("synset {id}")))
}

fn load_information_content(
    metric: Metric,
    explicit: Option<PathBuf>,
    config: &CliConfig,
) -> Result<Option<InformationContent>, LexError> {
    if !metric.needs_information_content() {
        return Ok(None);
    }
    match explicit.or_else(|| config.information_content().cloned()) {
        Some(path) => read_information_content(path).map(Some),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize)]
struct SynsetSummary {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pos: Option<Pos>,
    literals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<String>,
}

impl From<&SynSet> for SynsetSummary {
    fn from(synset: &SynSet) -> Self {
        Self {
            id: synset.id().to_string(),
            pos: synset.pos(),
            literals: synset.synonym().iter().map(ToString::to_string).collect(),
            definition: synset.definition(0).map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
struct LookupOutput {
    word: String,
    backed_off: bool,
    synsets: Vec<SynsetSummary>,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    id: String,
    path: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SimilarityOutput {
    metric: &'static str,
    first: String,
    second: String,
    score: f64,
}

fn lookup(wordnet: &WordNet, word: &str, pos: Option<Pos>, sense: Option<u32>) -> LookupOutput {
    let direct: Vec<&SynSet> = match sense {
        Some(sense) => wordnet.synset_with_literal(word, sense).into_iter().collect(),
        None => wordnet.synsets_with_literal(word),
    };
    let backed_off = direct.is_empty();
    let found = if !backed_off {
        direct
    } else if let Some(pos) = pos {
        wordnet.synsets_with_possibly_modified_literal(word, pos)
    } else {
        let mut found: Vec<&SynSet> = Vec::new();
        for candidate in wordnet.literals_with_possible_modified_literal(word) {
            for synset in wordnet.synsets_with_literal(&candidate) {
                if !found.iter().any(|seen| seen.id() == synset.id()) {
                    found.push(synset);
                }
            }
        }
        found
    };
    LookupOutput {
        word: word.to_string(),
        backed_off,
        synsets: found.into_iter().map(SynsetSummary::from).collect(),
    }
}

fn run_config(
    cmd: ConfigCmd,
    config: &mut CliConfig,
    format: &OutputFormat,
    ui: &Ui,
) -> Result<(), Box<dyn Error>> {
    match cmd {
        ConfigCmd::Show => {
            let rendered = config.render()?;
            let path = config
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".to_string());
            match format {
                OutputFormat::Json => {
                    let value: toml::Value = toml::from_str(&rendered)
                        .map_err(|source| ConfigError::Parse {
                            path: PathBuf::from(&path),
                            source,
                        })?;
                    let json = serde_json::json!({ "path": path, "config": value });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => {
                    ui.info(&format!("config: {path}"));
                    print!("{rendered}");
                }
            }
        }
        ConfigCmd::SetDefault { path, clear } => {
            let path = if clear { None } else { path };
            config.set_default_resource(path.clone());
            let written = config.persist()?;
            match path {
                Some(path) => ui.success(&format!(
                    "default resource set to {} in {}",
                    path.display(),
                    written.display()
                )),
                None => ui.success(&format!("default resource cleared in {}", written.display())),
            }
        }
    }
    Ok(())
}

fn emit<T, F>(format: &OutputFormat, value: &T, printer: F) -> Result<(), Box<dyn Error>>
where
    T: Serialize,
    F: Fn(),
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            println!("{json}");
        }
        OutputFormat::Text => printer(),
    }
    Ok(())
}

fn print_stats_text(ui: &Ui, report: &StatsReport) {
    ui.section(
        "Synsets",
        [
            ("synsets", report.synsets),
            ("literals", report.literals),
            ("distinct literals", report.distinct_literals),
            ("without definition", report.synsets_without_definition),
            ("roots", report.roots),
            ("interlingual anchors", report.interlingual_anchors),
        ],
    );
    ui.section(
        "Part of speech",
        report.pos.iter().map(|(pos, count)| (pos.as_str(), *count)),
    );
    let relations = &report.relations;
    ui.section(
        "Relations",
        [
            ("semantic", relations.semantic),
            ("interlingual", relations.interlingual),
            ("plain", relations.plain),
            ("literal level", relations.literal_level),
            ("unresolved", relations.unresolved),
        ],
    );
    ui.section(
        "Relation types",
        relations.by_type.iter().map(|(tag, count)| (tag.as_str(), *count)),
    );
}

fn print_verify_text(ui: &Ui, report: &VerifyReport) {
    let counts = &report.counts;
    ui.section(
        &format!("Verify ({:?})", report.level),
        [
            ("success", report.success.to_string()),
            ("synsets", counts.synsets.to_string()),
            ("literals", counts.literals.to_string()),
            ("relations", counts.relations.to_string()),
            ("index entries", counts.index_entries.to_string()),
            ("unlisted findings", counts.dropped.to_string()),
        ],
    );
    ui.list(
        "Findings",
        report.findings.iter().map(|finding| {
            format!(
                "{:?} {:?} {}: {}",
                finding.severity, finding.kind, finding.synset_id, finding.message
            )
        }),
    );
    if report.success {
        ui.success("no errors found");
    } else {
        ui.warn("verification found errors");
    }
}

fn print_repair_text(ui: &Ui, report: &RepairReport, output: &Path) {
    ui.section(
        "Repair",
        [
            ("duplicates removed", report.duplicates_removed),
            ("dangling removed", report.dangling_removed),
            ("reverse relations added", report.reverse_relations_added),
            ("index entries pruned", report.index_entries_pruned),
        ],
    );
    ui.list(
        "Removed",
        report.changes.iter().map(|change| match &change.literal {
            Some(literal) => format!("{} [{}] {}", change.synset_id, literal, change.relation),
            None => format!("{} {}", change.synset_id, change.relation),
        }),
    );
    ui.success(&format!("wrote {}", output.display()));
}

fn print_merge_text(ui: &Ui, report: &MergeReport, output: &Path) {
    ui.section(
        "Merge",
        [
            ("merged", report.merged),
            ("renamed", report.renamed),
            ("missing", report.missing),
            ("relations retargeted", report.relations_retargeted),
            ("self references removed", report.self_references_removed),
            ("index entries pruned", report.index_entries_pruned),
        ],
    );
    ui.success(&format!("wrote {}", output.display()));
}

fn print_lookup_text(ui: &Ui, output: &LookupOutput) {
    if output.synsets.is_empty() {
        ui.warn(&format!("no synsets for {}", output.word));
        return;
    }
    if output.backed_off {
        ui.info(&format!("{} not found as written; showing root forms", output.word));
    }
    for synset in &output.synsets {
        let pos = synset
            .pos
            .map(|pos| pos.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut rows = vec![("pos", pos), ("literals", synset.literals.join(", "))];
        if let Some(definition) = &synset.definition {
            rows.push(("definition", definition.clone()));
        }
        ui.section(&synset.id, rows);
    }
}
