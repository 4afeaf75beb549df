#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! mmviewer: CLI front-end for the missense-mutation graph pipeline.

mod cli;
mod commands;
mod defaults;
mod pipeline;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output_format, cli.json, cli.no_header);

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_pipeline_error(&err);
            write_error(&error_output, cli.output_format, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
