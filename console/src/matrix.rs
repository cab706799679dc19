use std::path::PathBuf;

use anyhow::Context;
use clap::{
    Args,
    Parser,
    ValueEnum,
};
use genecount::prelude::*;
use itertools::Itertools;
use log::info;

use crate::strings::matrix as strings;
use crate::utils::{
    expand_wildcards,
    validate_input,
    validate_output,
    UtilsArgs,
};
use crate::PipelineCommand;

#[derive(Debug, Clone, Copy, Default, ValueEnum, Eq, PartialEq)]
pub enum CliAlignMode {
    #[default]
    Strict,
    Join,
}

impl From<CliAlignMode> for AlignMode {
    fn from(value: CliAlignMode) -> Self {
        match value {
            CliAlignMode::Strict => AlignMode::Strict,
            CliAlignMode::Join => AlignMode::Join,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ConcatFilterArgs {
    #[arg(short, long, num_args = 1.., required = true, help = strings::INPUT)]
    input: Vec<String>,

    #[arg(short, long, required = true, help = strings::OUTPUT)]
    output: PathBuf,

    #[arg(short, long, required = true, help = strings::TEMP)]
    temp: PathBuf,

    #[arg(long, value_enum, default_value_t = CliAlignMode::Strict, help = strings::ALIGN)]
    align: CliAlignMode,
}

#[derive(Parser, Debug)]
#[command(
    name = "concatenate-filter",
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = strings::ABOUT,
    long_about = None,)]
pub struct ConcatFilterCli {
    #[clap(flatten)]
    pub args:  ConcatFilterArgs,
    #[clap(flatten)]
    pub utils: UtilsArgs,
}

impl PipelineCommand for ConcatFilterArgs {
    fn run(&self) -> anyhow::Result<()> {
        let inputs = expand_wildcards(&self.input)?;
        for path in inputs.iter() {
            validate_input(path)?;
        }
        validate_output(&self.temp)?;
        validate_output(&self.output)?;

        info!(
            "Input files: {}",
            inputs.iter().map(|path| path.display()).join(", ")
        );
        info!("Unfiltered matrix: {}", self.temp.display());
        info!("Filtered matrix: {}", self.output.display());

        concatenate_filter(inputs.as_slice(), &self.temp, &self.output, self.align.into())
            .with_context(|| {
                format!("Failed to build count matrix {}", self.output.display())
            })?;
        Ok(())
    }
}
