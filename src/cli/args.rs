//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: scan sources and locale files, report diagnostics and the health score
//! - `init`: write a default `.intlcheckrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments that override configuration file values.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; the config file is searched from here (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale directory (overrides `messagesRoot`)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Source locale (overrides `sourceLocale`)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Minimum passing health score, 0-100 (overrides `threshold`)
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Show info diagnostics and debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for i18n issues and compute the health score
    Check(CheckCommand),
    /// Initialize a new .intlcheckrc.json configuration file
    Init,
}
