/// `gen_graph` command: prepare the workspace for mutation-graph rendering.
///
/// The renderer aggregates per-base depth and variants from each sample's
/// bam over the regions in `target.bed`, maps positions through the CDS
/// annotation, and writes one graph per sample into the directory reserved
/// here.
use crate::cli::OutputCtx;
use crate::cli::args::GenGraphArgs;
use crate::cli::output::write_graph_plan;
use crate::commands::ensure_parent;
use crate::pipeline::{PipelineError, config, reserve_dir_with_files};
use crate::types::{GraphPlanOutput, SamplePlanOutput};

/// Run `mmviewer gen_graph`.
///
/// # Errors
///
/// Returns `PipelineError` if the sample table cannot be read or the output
/// directory cannot be created.
pub fn run(args: &GenGraphArgs, ctx: &OutputCtx) -> Result<(), PipelineError> {
    let samples = config::read_sample_names(&args.graph_config)?;

    ensure_parent(&args.output)?;
    let (stage_dir, graph_paths) =
        reserve_dir_with_files("gen_graph", &args.output, &samples, ".svg")?;

    let plan = GraphPlanOutput {
        reference: args.complete_seq.display().to_string(),
        target_bed: args.target_bed.display().to_string(),
        cds_gff: args.cds_gff.display().to_string(),
        min_depth: args.min_depth,
        output_dir: stage_dir.display().to_string(),
        samples: samples
            .into_iter()
            .zip(&graph_paths)
            .map(|(sample, path)| SamplePlanOutput {
                sample,
                path: path.display().to_string(),
            })
            .collect(),
    };

    write_graph_plan(&plan, ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn test_run_plans_one_graph_per_sample() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("graph_config.csv");
        std::fs::write(
            &config,
            "sample_name,bam\n\
             s1,aln/s1.bam\n\
             s2,aln/s2.bam\n",
        )
        .unwrap();
        let out = tmp.path().join("results");
        let args = GenGraphArgs::parse_from([
            "gen_graph",
            "-c",
            "ref.fa",
            "-o",
            out.to_str().unwrap(),
            "-a",
            config.to_str().unwrap(),
            "-b",
            "target.bed",
            "-d",
            "cds.gff",
        ]);
        let ctx = OutputCtx {
            format: OutputFormat::Compact,
            no_header: false,
        };

        run(&args, &ctx).unwrap();
        let stage = out.join("gen_graph");
        assert!(stage.is_dir());
        assert!(!stage.join("s1.svg").exists());
        assert!(!stage.join("s2.svg").exists());
        assert_eq!(args.min_depth, 5);
    }
}
