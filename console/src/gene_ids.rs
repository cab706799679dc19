use std::path::PathBuf;

use anyhow::Context;
use clap::{
    Args,
    Parser,
};
use genecount::prelude::*;
use log::info;

use crate::strings::gene_ids as strings;
use crate::utils::{
    validate_input,
    validate_output,
    UtilsArgs,
};
use crate::PipelineCommand;

#[derive(Debug, Clone, Args)]
pub struct GeneIdsArgs {
    #[arg(short, long, required = true, help = strings::INPUT)]
    input: PathBuf,

    #[arg(short, long, required = true, help = strings::OUTPUT)]
    output: PathBuf,
}

#[derive(Parser, Debug)]
#[command(
    name = "gene-ids",
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = strings::ABOUT,
    long_about = None,)]
pub struct GeneIdsCli {
    #[clap(flatten)]
    pub args:  GeneIdsArgs,
    #[clap(flatten)]
    pub utils: UtilsArgs,
}

impl PipelineCommand for GeneIdsArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_input(&self.input)?;
        validate_output(&self.output)?;
        info!("Annotation: {}", self.input.display());
        info!("Gene id table: {}", self.output.display());

        extract_gene_ids(&self.input, &self.output).with_context(|| {
            format!("Failed to extract gene ids from {}", self.input.display())
        })?;
        Ok(())
    }
}
