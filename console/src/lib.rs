pub mod gene_ids;
pub mod matrix;
mod strings;
pub mod utils;

/// A configured tool invocation.
pub trait PipelineCommand {
    fn run(&self) -> anyhow::Result<()>;
}
