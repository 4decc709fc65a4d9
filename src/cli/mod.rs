use crate::errors::ProjectGenError;
use crate::params::ParameterSet;
use crate::utils::config;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "cmake-projectgen",
    version,
    about = "Generate huge synthetic CMake projects",
    long_about = "Generate a CMake project with many executables, each built from one C file, to stress-test IDE indexers and build-system front ends. A share of the targets gets extra unique preprocessor symbols and include paths on its compiler command line. Output is deterministic: identical parameters produce identical trees."
)]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Project shape flags; unset flags fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct ShapeArgs {
    /// Number of source files / executables to create (default 1000)
    #[arg(short = 'n', long, value_name = "NUMBER")]
    pub targets: Option<u32>,
    /// Percentage of source files with unique preprocessor symbols and include paths (default 15)
    #[arg(short = 'p', long, value_name = "PERCENT")]
    pub percent_unique: Option<u32>,
    /// Number of common preprocessor symbols per source file (default 5)
    #[arg(long, visible_alias = "cD", value_name = "NUMBER")]
    pub common_macros: Option<u32>,
    /// Number of common include paths per source file (default 7)
    #[arg(long, visible_alias = "cI", value_name = "NUMBER")]
    pub common_includes: Option<u32>,
    /// Number of unique preprocessor symbols per unique source file (default 5)
    #[arg(long, visible_alias = "uD", value_name = "NUMBER")]
    pub unique_macros: Option<u32>,
    /// Number of unique include paths per unique source file (default 3)
    #[arg(long, visible_alias = "uI", value_name = "NUMBER")]
    pub unique_includes: Option<u32>,
    /// Directory where to create the project files
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Path to a TOML configuration file with a [project] table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ShapeArgs {
    /// Merge flags over the config file over defaults and validate.
    ///
    /// # Errors
    /// Returns `ProjectGenError::Configuration` if the config file is unusable
    /// or no output directory is given anywhere.
    pub fn resolve(&self) -> Result<ParameterSet, ProjectGenError> {
        self.resolve_with_root(None)
    }

    /// Like [`ShapeArgs::resolve`], but `default_root` is used when neither the
    /// flags nor the config file name an output directory.
    ///
    /// # Errors
    /// Returns `ProjectGenError::Configuration` if the config file is unusable.
    pub fn resolve_with_root(&self, default_root: Option<&Path>) -> Result<ParameterSet, ProjectGenError> {
        let mut builder = ParameterSet::builder();
        if let Some(root) = default_root {
            builder = builder.output_root(root);
        }
        if let Some(path) = self.config.as_ref() {
            builder = config::load_config_at(path)?.apply(builder);
        }
        if let Some(v) = self.targets {
            builder = builder.targets(i64::from(v));
        }
        if let Some(v) = self.percent_unique {
            builder = builder.percent_unique(i64::from(v));
        }
        if let Some(v) = self.common_macros {
            builder = builder.common_macros(i64::from(v));
        }
        if let Some(v) = self.common_includes {
            builder = builder.common_includes(i64::from(v));
        }
        if let Some(v) = self.unique_macros {
            builder = builder.unique_macros_per_target(i64::from(v));
        }
        if let Some(v) = self.unique_includes {
            builder = builder.unique_includes_per_target(i64::from(v));
        }
        if let Some(v) = self.output.as_ref() {
            builder = builder.output_root(v.clone());
        }
        builder.build()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the project to the output directory
    Generate {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Emit targets in parallel (output is identical to a sequential run)
        #[arg(long, default_value_t = false)]
        parallel: bool,
        /// Summary format printed after generation
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the derived project shape and memory estimate without writing files
    Plan {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
