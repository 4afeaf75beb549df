/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::defaults;

/// mmviewer: locate a gene's coding region, align reads, and render
/// per-sample mutation graphs.
#[derive(Debug, Parser)]
#[command(
    name = "mmviewer",
    about = "Missense Mutation Viewer: per-sample mutation graphs for a target gene",
    long_about = "Missense Mutation Viewer. Run get_target to locate the target gene in the \
                  reference and produce target.bed and cds.gff. Run alignment to map per-sample \
                  reads and produce bam files plus graph_config.csv. Run gen_graph to render \
                  the per-sample mutation graphs.",
    version = defaults::VERSION,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output_format: OutputFormat,

    /// Shorthand for --output-format json.
    #[arg(long, global = true, conflicts_with = "output_format")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
    /// Planned output file paths only, one per line (for piping).
    Path,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Locate the target gene in the reference and prepare target.bed and cds.gff.
    #[command(name = "get_target")]
    GetTarget(GetTargetArgs),
    /// Align per-sample reads against the reference and prepare bam outputs.
    Alignment(AlignmentArgs),
    /// Render per-sample mutation graphs from bam files and the target regions.
    #[command(name = "gen_graph")]
    GenGraph(GenGraphArgs),
}

/// Arguments for `mmviewer get_target`.
#[derive(Debug, Parser)]
pub struct GetTargetArgs {
    /// Complete genome or contig in FASTA format, used as the reference.
    #[arg(short = 'c', long = "complete_seq", value_name = "PATH")]
    pub complete_seq: PathBuf,

    /// Target gene sequence in FASTA format.
    #[arg(short = 'g', long = "gene_sequence", value_name = "PATH")]
    pub gene_sequence: PathBuf,

    /// Output directory.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,

    /// Type of the gene sequence file (nucleotide or amino acid).
    #[arg(
        short = 't',
        long = "gene_seq_type",
        value_name = "TYPE",
        value_enum,
        default_value_t = GeneSeqType::Prot
    )]
    pub gene_seq_type: GeneSeqType,

    /// Additional bases kept upstream of the CDS.
    #[arg(
        short = 'u',
        long = "upper_interval",
        value_name = "N",
        default_value_t = defaults::CDS_INTERVAL
    )]
    pub upper_interval: u64,

    /// Additional bases kept downstream of the CDS.
    #[arg(
        short = 'l',
        long = "lower_interval",
        value_name = "N",
        default_value_t = defaults::CDS_INTERVAL
    )]
    pub lower_interval: u64,
}

/// Type of the target gene sequence file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneSeqType {
    /// Nucleotide sequence.
    Nucl,
    /// Amino-acid sequence.
    Prot,
}

impl GeneSeqType {
    /// The value as it appears on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nucl => "nucl",
            Self::Prot => "prot",
        }
    }
}

/// Arguments for `mmviewer alignment`.
#[derive(Debug, Parser)]
pub struct AlignmentArgs {
    /// Sample table with a header row: sample name, forward-read fastq
    /// (optionally .gz), and an optional reverse-read fastq for paired ends.
    #[arg(short = 'a', long = "alignment_config_file", value_name = "PATH")]
    pub alignment_config_file: PathBuf,

    /// Complete genome or contig in FASTA format, used as the reference.
    #[arg(short = 'c', long = "complete_seq", value_name = "PATH")]
    pub complete_seq: PathBuf,

    /// Output directory.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for `mmviewer gen_graph`.
#[derive(Debug, Parser)]
pub struct GenGraphArgs {
    /// Complete genome or contig in FASTA format, used as the reference.
    #[arg(short = 'c', long = "complete_seq", value_name = "PATH")]
    pub complete_seq: PathBuf,

    /// Output directory.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,

    /// Sample table generated by `mmviewer alignment`: sample name and bam
    /// path, with a header row. Graph order follows the row order.
    #[arg(short = 'a', long = "graph_config", value_name = "PATH")]
    pub graph_config: PathBuf,

    /// Region table generated by `mmviewer get_target`: chrom, chromStart,
    /// chromEnd, name, score, strand, CDS_Start, CDS_End. Rows sharing a name
    /// are drawn on the same graph sheet.
    #[arg(short = 'b', long = "target_bed", value_name = "PATH")]
    pub target_bed: PathBuf,

    /// CDS annotation generated by `mmviewer get_target`.
    #[arg(short = 'd', long = "cds_gff", value_name = "PATH")]
    pub cds_gff: PathBuf,

    /// Minimum read depth for a position to count as mapped.
    #[arg(
        short = 'p',
        long = "min_depth",
        value_name = "N",
        default_value_t = defaults::MIN_DEPTH
    )]
    pub min_depth: i64,
}
