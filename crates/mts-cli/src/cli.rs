//! CLI argument definitions for the mime type settings exporter.

use std::path::PathBuf;

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "mts",
    version,
    about = "Export batch load mime type settings as JSON or CSV",
    long_about = "Export the mime type settings recorded by each batch load of a case.\n\n\
                  Settings are decoded, renamed to the names the processor accepts,\n\
                  and disabled kinds are expanded to their mime types."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

impl Cli {
    /// Logging configuration for these flags.
    ///
    /// `--log-level` wins over `-v`/`-q`; either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level = match self.log_level {
            Some(level) => level.into(),
            None => self.verbosity.tracing_level_filter(),
        };
        let mut config = LogConfig::default()
            .with_level(level)
            .with_format(self.log_format.into())
            .with_timestamps(self.log_timestamps)
            .with_ansi(self.ansi_enabled())
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config
    }

    fn ansi_enabled(&self) -> bool {
        match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one settings file per batch load and format.
    Export(ExportArgs),

    /// Print the normalized settings of a case's batch loads.
    Show(ShowArgs),

    /// List the kinds available for `kind:` references.
    Kinds(KindsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Case file (JSON) holding the batch loads.
    #[arg(value_name = "CASE_FILE")]
    pub case_file: PathBuf,

    /// Output directory for generated files (created if missing).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Output format(s) to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: ExportFormatArg,

    /// Kind catalog (TOML). Defaults to the built-in catalog.
    #[arg(long = "kinds", value_name = "PATH")]
    pub kinds: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Case file (JSON) holding the batch loads.
    #[arg(value_name = "CASE_FILE")]
    pub case_file: PathBuf,

    /// Only show this batch load.
    #[arg(long = "batch", value_name = "ID")]
    pub batch: Option<String>,

    /// Kind catalog (TOML). Defaults to the built-in catalog.
    #[arg(long = "kinds", value_name = "PATH")]
    pub kinds: Option<PathBuf>,
}

#[derive(Parser)]
pub struct KindsArgs {
    /// Kind catalog (TOML). Defaults to the built-in catalog.
    #[arg(long = "kinds", value_name = "PATH")]
    pub kinds: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Csv,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
