use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    bail,
};
use clap::Args;
use console::style;
use glob::glob;
use log::{
    debug,
    LevelFilter,
};

use crate::strings::utils as strings;

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct UtilsArgs {
    #[arg(short, long, default_value_t = false, help = strings::VERBOSE)]
    pub verbose: bool,
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose", help = strings::QUIET)]
    pub quiet:   bool,
}

impl UtilsArgs {
    pub fn log_level(&self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => LevelFilter::Debug,
            (false, true) => LevelFilter::Warn,
            (false, false) => LevelFilter::Info,
        }
    }

    pub fn setup(&self) -> anyhow::Result<()> {
        init_logger(self.log_level())
    }
}

/// Initializes the global logger. `RUST_LOG` still takes precedence over
/// the level derived from the command line.
pub fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init()
        .map_err(|e| anyhow!("Failed to set up logger: {e}"))
}

pub fn validate_input(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("Path {} does not exist.", style(path.display()).red());
    }
    if !path.is_file() {
        bail!("Path {} is not a file.", style(path.display()).red());
    }
    Ok(())
}

pub fn validate_output(path: &Path) -> anyhow::Result<()> {
    if path.is_dir() {
        bail!("Output path {} is a directory.", style(path.display()).red());
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            bail!(
                "Directory {} of output path does not exist.",
                style(parent.display()).red()
            )
        },
        _ => Ok(()),
    }
}

/// Expands glob patterns which reached the program unexpanded (e.g. when
/// quoted). Paths without wildcards are passed through unchanged.
pub fn expand_wildcards(paths: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut expanded_paths = Vec::new();

    for path in paths {
        if path.contains('*') || path.contains('?') {
            let before = expanded_paths.len();
            for entry in glob(path)? {
                expanded_paths.push(entry?);
            }
            if expanded_paths.len() == before {
                bail!("Pattern {} matched no files.", style(path).red());
            }
            debug!(
                "Expanded '{}' to {} paths",
                path,
                expanded_paths.len() - before
            );
        }
        else {
            expanded_paths.push(PathBuf::from(path));
        }
    }

    Ok(expanded_paths)
}
