/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod alignment;
pub mod gen_graph;
pub mod get_target;

use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::pipeline::PipelineError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `PipelineError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), PipelineError> {
    match command {
        Command::GetTarget(args) => get_target::run(args, ctx),
        Command::Alignment(args) => alignment::run(args, ctx),
        Command::GenGraph(args) => gen_graph::run(args, ctx),
    }
}

/// Create the user-supplied output directory (and any missing ancestors) so
/// the stage directory can be reserved inside it.
pub(crate) fn ensure_parent(output: &Path) -> Result<(), PipelineError> {
    std::fs::create_dir_all(output).map_err(|source| PipelineError::CreateDir {
        path: output.to_path_buf(),
        source,
    })
}
