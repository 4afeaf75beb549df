/// Output formatting: JSON, table, path modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{AlignmentPlanOutput, GraphPlanOutput, SamplePlanOutput, TargetPlanOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

// --- get_target plan ---

/// Write the prepared `get_target` workspace to stdout.
pub fn write_target_plan(plan: &TargetPlanOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(plan),
        OutputFormat::Compact => print_compact_json(plan),
        OutputFormat::Path => {
            println!("{}", plan.target_bed);
            println!("{}", plan.cds_gff);
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let rows = [
                ("reference", plan.reference.as_str()),
                ("gene_sequence", plan.gene_sequence.as_str()),
                ("gene_seq_type", plan.gene_seq_type.as_str()),
                ("output_dir", plan.output_dir.as_str()),
                ("target_bed", plan.target_bed.as_str()),
                ("cds_gff", plan.cds_gff.as_str()),
            ];
            let mut table = settings_table(&rows, ctx);
            table.add_row([
                Cell::new("upper_interval"),
                Cell::new(plan.upper_interval.to_string()),
            ]);
            table.add_row([
                Cell::new("lower_interval"),
                Cell::new(plan.lower_interval.to_string()),
            ]);
            println!("{table}");
        }
    }
}

// --- alignment plan ---

/// Write the prepared `alignment` workspace to stdout.
pub fn write_alignment_plan(plan: &AlignmentPlanOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(plan),
        OutputFormat::Compact => print_compact_json(plan),
        OutputFormat::Path => print_sample_paths(&plan.samples),
        OutputFormat::Table | OutputFormat::Auto => {
            let rows = [
                ("reference", plan.reference.as_str()),
                ("config", plan.config.as_str()),
                ("output_dir", plan.output_dir.as_str()),
                ("graph_config", plan.graph_config.as_str()),
            ];
            println!("{}", settings_table(&rows, ctx));
            println!("{}", samples_table(&plan.samples, "BAM", ctx));
        }
    }
}

// --- gen_graph plan ---

/// Write the prepared `gen_graph` workspace to stdout.
pub fn write_graph_plan(plan: &GraphPlanOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(plan),
        OutputFormat::Compact => print_compact_json(plan),
        OutputFormat::Path => print_sample_paths(&plan.samples),
        OutputFormat::Table | OutputFormat::Auto => {
            let min_depth = plan.min_depth.to_string();
            let rows = [
                ("reference", plan.reference.as_str()),
                ("target_bed", plan.target_bed.as_str()),
                ("cds_gff", plan.cds_gff.as_str()),
                ("min_depth", min_depth.as_str()),
                ("output_dir", plan.output_dir.as_str()),
            ];
            println!("{}", settings_table(&rows, ctx));
            println!("{}", samples_table(&plan.samples, "GRAPH", ctx));
        }
    }
}

// --- Table helpers ---

fn settings_table(rows: &[(&str, &str)], ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["FIELD", "VALUE"]);
    }
    for (field, value) in rows {
        table.add_row([Cell::new(field), Cell::new(value)]);
    }
    table
}

fn samples_table(samples: &[SamplePlanOutput], value_header: &str, ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["SAMPLE", value_header]);
    }
    for sample in samples {
        table.add_row([sample.sample.as_str(), sample.path.as_str()]);
    }
    table
}

fn print_sample_paths(samples: &[SamplePlanOutput]) {
    for sample in samples {
        println!("{}", sample.path);
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(cause) = &err.error.cause {
                let _ = writeln!(out, "  Caused by: {cause}");
            }
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_overrides_format() {
        assert_eq!(
            resolve_format(OutputFormat::Table, true),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(OutputFormat::Auto, true), OutputFormat::Json);
    }

    #[test]
    fn test_explicit_format_is_kept() {
        assert_eq!(
            resolve_format(OutputFormat::Path, false),
            OutputFormat::Path
        );
        assert_eq!(
            resolve_format(OutputFormat::Compact, false),
            OutputFormat::Compact
        );
    }
}
