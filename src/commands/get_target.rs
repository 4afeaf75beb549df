/// `get_target` command: prepare the workspace for target-region extraction.
///
/// The stage engine locates the gene's CDS in the reference and writes
/// `target.bed` and `cds.gff` into the directory reserved here.
use crate::cli::OutputCtx;
use crate::cli::args::GetTargetArgs;
use crate::cli::output::write_target_plan;
use crate::commands::ensure_parent;
use crate::pipeline::{PipelineError, reserve_dir};
use crate::types::TargetPlanOutput;

/// Run `mmviewer get_target`.
///
/// # Errors
///
/// Returns `PipelineError::CreateDir` if the output directory cannot be
/// created.
pub fn run(args: &GetTargetArgs, ctx: &OutputCtx) -> Result<(), PipelineError> {
    ensure_parent(&args.output)?;
    let stage_dir = reserve_dir("get_target", &args.output)?;

    let plan = TargetPlanOutput {
        reference: args.complete_seq.display().to_string(),
        gene_sequence: args.gene_sequence.display().to_string(),
        gene_seq_type: args.gene_seq_type.as_str().to_owned(),
        upper_interval: args.upper_interval,
        lower_interval: args.lower_interval,
        output_dir: stage_dir.display().to_string(),
        target_bed: stage_dir.join("target.bed").display().to_string(),
        cds_gff: stage_dir.join("cds.gff").display().to_string(),
    };

    write_target_plan(&plan, ctx);
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

    fn args(output: &std::path::Path) -> GetTargetArgs {
        GetTargetArgs::parse_from([
            "get_target",
            "-c",
            "ref.fa",
            "-g",
            "gene.fa",
            "-o",
            output.to_str().unwrap(),
        ])
    }

    #[test]
    fn test_run_creates_stage_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("results");
        run(&args(&out), &ctx()).unwrap();
        assert!(out.join("get_target").is_dir());
        // Stage products are planned, not created.
        assert!(!out.join("get_target").join("target.bed").exists());
        assert!(!out.join("get_target").join("cds.gff").exists());
    }

    #[test]
    fn test_rerun_gets_suffixed_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("results");
        run(&args(&out), &ctx()).unwrap();
        run(&args(&out), &ctx()).unwrap();
        assert!(out.join("get_target").is_dir());
        assert!(out.join("get_target_1").is_dir());
    }
}
