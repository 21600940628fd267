//! `pokedex completions` command - Shell completion scripts
//!
//! Covers every subcommand and flag, including the `--by` search modes and
//! the `--format` values.
//!
//! ```bash
//! source <(pokedex completions bash)                                  # ~/.bashrc
//! source <(pokedex completions zsh)                                   # ~/.zshrc
//! pokedex completions fish > ~/.config/fish/completions/pokedex.fish
//! pokedex completions powershell >> $PROFILE
//! pokedex completions elvish >> ~/.config/elvish/rc.elv
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;
use std::io;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Binary name the scripts complete
const BIN_NAME: &str = "pokedex";

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}
