/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are the handoff contract consumed by the pipeline stage
/// engines (aligner, target locator, graph renderer).
use serde::{Deserialize, Serialize};

/// One sample and its planned stage output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePlanOutput {
    /// Sample name, first column of the config table.
    pub sample: String,
    /// Planned output path inside the freshly created stage directory.
    pub path: String,
}

/// Prepared workspace for the `get_target` stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPlanOutput {
    /// Reference genome/contig FASTA path.
    pub reference: String,
    /// Target gene FASTA path.
    pub gene_sequence: String,
    /// Gene sequence type: "nucl" or "prot".
    pub gene_seq_type: String,
    /// Additional bases kept upstream of the CDS.
    pub upper_interval: u64,
    /// Additional bases kept downstream of the CDS.
    pub lower_interval: u64,
    /// Freshly created stage directory.
    pub output_dir: String,
    /// Planned target region table path.
    pub target_bed: String,
    /// Planned CDS annotation path.
    pub cds_gff: String,
}

/// Prepared workspace for the `alignment` stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentPlanOutput {
    /// Reference genome/contig FASTA path.
    pub reference: String,
    /// Sample table the read paths come from.
    pub config: String,
    /// Freshly created stage directory.
    pub output_dir: String,
    /// Planned graph_config.csv path, input to `gen_graph`.
    pub graph_config: String,
    /// One planned bam path per sample, in config order.
    pub samples: Vec<SamplePlanOutput>,
}

/// Prepared workspace for the `gen_graph` stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPlanOutput {
    /// Reference genome/contig FASTA path.
    pub reference: String,
    /// Target region table path.
    pub target_bed: String,
    /// CDS annotation path.
    pub cds_gff: String,
    /// Minimum read depth for a position to count as mapped.
    pub min_depth: i64,
    /// Freshly created stage directory.
    pub output_dir: String,
    /// One planned graph path per sample, in config order.
    pub samples: Vec<SamplePlanOutput>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Underlying cause, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `PipelineError`.
    #[must_use]
    pub fn from_pipeline_error(err: &crate::pipeline::PipelineError) -> Self {
        use std::error::Error;

        use crate::pipeline::PipelineError;
        let code = match err {
            PipelineError::CreateDir { .. } => "create_dir_failed",
            PipelineError::ConfigRead { .. } => "config_read_failed",
            PipelineError::ConfigEmpty { .. } => "config_empty",
            PipelineError::ConfigSample { .. } => "config_bad_sample",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                cause: err.source().map(ToString::to_string),
            },
        }
    }
}
