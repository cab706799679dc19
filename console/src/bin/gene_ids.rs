use clap::Parser;
use genecount_cli::gene_ids::GeneIdsCli;
use genecount_cli::PipelineCommand;
use wild::ArgsOs;

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = GeneIdsCli::parse_from(args);

    cli.utils.setup()?;
    cli.args.run()
}
