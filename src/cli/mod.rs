//! Command-line interface.
//!
//! With no subcommand the binary launches the TUI; the flags here override
//! what the config file says for that run.

mod topics;

use crate::config::Config;
use crate::keymap::KeymapPreset;
use crate::styles::ThemeType;
use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// A terminal flashcard study companion
#[derive(Parser, Debug)]
#[command(name = "remora", version, about, long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial theme (light or dark)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<ThemeType>,

    /// Keymap preset (standard, vim or emacs)
    #[arg(long, value_name = "PRESET")]
    pub keymap: Option<KeymapPreset>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in topics and their flashcards
    Topics {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file this run uses.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Apply the flag overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(preset) = self.keymap {
            config.keymap.preset = preset;
        }
    }

    /// Run a subcommand. Returns false when the TUI should launch instead.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Topics { json }) => topics::print(*json)?,
            Some(Commands::Completions { shell }) => {
                let Some(shell) = (*shell).or_else(Shell::from_env) else {
                    bail!("Could not detect the shell from $SHELL; name one, e.g. `remora completions zsh`");
                };
                write_completions(shell, &mut std::io::stdout());
            }
            None => return Ok(false),
        }
        Ok(true)
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, out);
}
