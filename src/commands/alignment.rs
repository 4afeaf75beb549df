/// `alignment` command: prepare the workspace for per-sample read mapping.
///
/// The aligner maps each sample's reads against the reference and writes one
/// bam file per sample, then a `graph_config.csv` listing them for
/// `gen_graph`. Sample order in all outputs follows the config row order.
use crate::cli::OutputCtx;
use crate::cli::args::AlignmentArgs;
use crate::cli::output::write_alignment_plan;
use crate::commands::ensure_parent;
use crate::pipeline::{PipelineError, config, reserve_dir_with_files};
use crate::types::{AlignmentPlanOutput, SamplePlanOutput};

/// Run `mmviewer alignment`.
///
/// # Errors
///
/// Returns `PipelineError` if the sample table cannot be read or the output
/// directory cannot be created. The table is read before any directory is
/// touched, so a bad config creates nothing.
pub fn run(args: &AlignmentArgs, ctx: &OutputCtx) -> Result<(), PipelineError> {
    let samples = config::read_sample_names(&args.alignment_config_file)?;

    ensure_parent(&args.output)?;
    let (stage_dir, bam_paths) =
        reserve_dir_with_files("alignment", &args.output, &samples, ".bam")?;

    let plan = AlignmentPlanOutput {
        reference: args.complete_seq.display().to_string(),
        config: args.alignment_config_file.display().to_string(),
        output_dir: stage_dir.display().to_string(),
        graph_config: stage_dir.join("graph_config.csv").display().to_string(),
        samples: samples
            .into_iter()
            .zip(&bam_paths)
            .map(|(sample, path)| SamplePlanOutput {
                sample,
                path: path.display().to_string(),
            })
            .collect(),
    };

    write_alignment_plan(&plan, ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::OutputFormat;

    fn ctx() -> OutputCtx {
        OutputCtx {
            format: OutputFormat::Compact,
            no_header: false,
        }
    }

    #[test]
    fn test_run_plans_one_bam_per_sample() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("alignment_config.csv");
        std::fs::write(
            &config,
            "sample_name,forward,reverse\n\
             s1,s1_R1.fastq.gz,s1_R2.fastq.gz\n\
             s2,s2.fastq\n",
        )
        .unwrap();
        let out = tmp.path().join("results");
        let args = AlignmentArgs::parse_from([
            "alignment",
            "-a",
            config.to_str().unwrap(),
            "-c",
            "ref.fa",
            "-o",
            out.to_str().unwrap(),
        ]);

        run(&args, &ctx()).unwrap();
        let stage = out.join("alignment");
        assert!(stage.is_dir());
        // Bam files are planned, not created.
        assert!(!stage.join("s1.bam").exists());
        assert!(!stage.join("s2.bam").exists());
    }

    #[test]
    fn test_bad_config_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("results");
        let args = AlignmentArgs::parse_from([
            "alignment",
            "-a",
            tmp.path().join("absent.csv").to_str().unwrap(),
            "-c",
            "ref.fa",
            "-o",
            out.to_str().unwrap(),
        ]);

        let err = run(&args, &ctx()).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigRead { .. }));
        assert!(!out.exists());
    }
}
