use clap::{Args, Parser, Subcommand};
use memtopo::core::models::record::SourceMeta;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "memtopo developers",
    version,
    about = "memtopo - Topology analysis and merging of BOCTOPUS2, TMHMM, SignalP and PSORTb prediction outputs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an analysis configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S beta-barrel.min-strand-count=10
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze BOCTOPUS2 topologies, merge them and flag beta-barrel proteins.
    Boctopus2(Boctopus2Args),
    /// Analyze TMHMM annotations, join helix summaries and flag transmembrane proteins.
    Tmhmm(TmhmmArgs),
    /// Extract localization predictions from a PSORTb long-format report.
    Psortb(PsortbArgs),
    /// Concatenate tab-delimited tables, prefixing meta_id and tax_id columns.
    Concat(ConcatArgs),
    /// Concatenate, filter or summarise SignalP outputs.
    Signalp(SignalpArgs),
}

/// Optional provenance stamped onto every output row.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Sample or genome identifier for all records of this run
    #[arg(long, requires = "tax_id", value_name = "ID")]
    pub meta_id: Option<String>,

    /// Taxonomy identifier for all records of this run
    #[arg(long, requires = "meta_id", value_name = "ID")]
    pub tax_id: Option<String>,
}

impl SourceArgs {
    pub fn to_source_meta(&self) -> Option<SourceMeta> {
        match (&self.meta_id, &self.tax_id) {
            (Some(meta_id), Some(tax_id)) => Some(SourceMeta {
                meta_id: meta_id.clone(),
                tax_id: tax_id.clone(),
            }),
            _ => None,
        }
    }
}

/// Arguments for the `boctopus2` subcommand.
#[derive(Args, Debug)]
pub struct Boctopus2Args {
    /// Path of the merged output table (.tsv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,

    /// BOCTOPUS2 result tables. A single quoted, whitespace-separated list is accepted.
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<String>,
}

/// Arguments for the `tmhmm` subcommand.
#[derive(Args, Debug)]
pub struct TmhmmArgs {
    /// TMHMM `.annotation` files.
    #[arg(short, long = "annotation", required = true, num_args = 1.., value_name = "PATH")]
    pub annotations: Vec<String>,

    /// Headerless TMHMM summary files (protein_ID, PredHel, TM_60).
    #[arg(short, long = "summary", required = true, num_args = 1.., value_name = "PATH")]
    pub summaries: Vec<String>,

    /// Path of the merged output table (.tsv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `psortb` subcommand.
#[derive(Args, Debug)]
pub struct PsortbArgs {
    /// PSORTb long-format report. Results go to `<base>_filtered.csv`.
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments shared by the table concatenation commands.
#[derive(Args, Debug)]
pub struct ConcatArgs {
    /// Value of the meta_id column.
    #[arg(short, long, required = true, value_name = "ID")]
    pub meta_id: String,

    /// Value of the tax_id column.
    #[arg(short, long, required = true, value_name = "ID")]
    pub tax_id: String,

    /// Path of the concatenated output table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of leading lines of every input to discard before the header.
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub skip_lines: usize,

    /// Tab-delimited input tables.
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<String>,
}

impl ConcatArgs {
    pub fn source(&self) -> SourceMeta {
        SourceMeta {
            meta_id: self.meta_id.clone(),
            tax_id: self.tax_id.clone(),
        }
    }
}

/// Arguments for the `signalp` subcommand.
#[derive(Args, Debug)]
pub struct SignalpArgs {
    #[command(subcommand)]
    pub command: SignalpCommands,
}

#[derive(Subcommand, Debug)]
pub enum SignalpCommands {
    /// Concatenate SignalP prediction summaries (the first comment line is skipped).
    Concat(SignalpConcatArgs),
    /// Drop predictions labelled with the excluded class. Writes `<base>_filtered<ext>`.
    Filter {
        /// Tab-delimited SignalP prediction summary.
        #[arg(required = true, value_name = "INPUT")]
        input: PathBuf,
    },
    /// Count residues above the probability threshold in per-residue outputs.
    Summarise(SummariseArgs),
}

#[derive(Args, Debug)]
pub struct SignalpConcatArgs {
    /// Value of the meta_id column.
    #[arg(short, long, required = true, value_name = "ID")]
    pub meta_id: String,

    /// Value of the tax_id column.
    #[arg(short, long, required = true, value_name = "ID")]
    pub tax_id: String,

    /// Path of the concatenated output table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// SignalP prediction summary files.
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SummariseArgs {
    /// Value of the meta_id column.
    #[arg(short, long, required = true, value_name = "ID")]
    pub meta_id: String,

    /// Output name; the summary is written to `<NAME>.csv`.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub output: PathBuf,

    /// SignalP per-residue output files.
    #[arg(required = true, num_args = 1.., value_name = "INPUT")]
    pub inputs: Vec<String>,
}
