use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use hearth_config::HearthConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hearth` binary.
#[derive(Debug, Parser)]
#[command(
    name = "hearth",
    version,
    about = "Hearth - maintenance requests from plain-language messages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// An explicit `--format` wins over the configured default.
    pub fn global_flags(&self, config: &HearthConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true).map_err(|_| {
                anyhow!(
                    "invalid general.default_format '{}': expected json, table, or raw",
                    config.general.default_format
                )
            })?,
        };

        Ok(GlobalFlags {
            format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
        })
    }
}
