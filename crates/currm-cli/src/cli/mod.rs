//! CLI for currm.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use currm_core::config::{self, DEFAULT_CONFIG_FILE, DEFAULT_RULES_DIR};
use std::path::{Path, PathBuf};

use commands::{run_check, run_pull};

/// Top-level CLI for currm.
#[derive(Debug, Parser)]
#[command(name = "currm")]
#[command(about = "currm: download editor AI rules listed in a YAML file")]
#[command(
    long_about = "currm downloads the rules defined in a YAML file into the .cursor/rules \
                  directory of the current project, optionally pinned to a revision."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct RuleOptions {
    /// Path to configuration file.
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory the rule files live in. Relative paths resolve against the working directory.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RULES_DIR)]
    pub rules_dir: PathBuf,
}

impl RuleOptions {
    /// Rule store as an absolute path. The working directory is only read here.
    fn resolved_rules_dir(&self) -> Result<PathBuf> {
        Ok(absolutize(&std::env::current_dir()?, &self.rules_dir))
    }
}

fn absolutize(cwd: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download rules specified in the configuration file.
    Pull {
        #[command(flatten)]
        opts: RuleOptions,
    },

    /// Check for updates to rules specified in the configuration file.
    Check {
        #[command(flatten)]
        opts: RuleOptions,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Pull { opts } => {
                let cfg = config::load(&opts.config)?;
                run_pull(&cfg, &opts.resolved_rules_dir()?)?;
            }
            CliCommand::Check { opts } => {
                let cfg = config::load(&opts.config)?;
                run_check(&cfg, &opts.resolved_rules_dir()?)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
