//! CLI struct definitions for the admin-nav command-line interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "admin-nav",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render admin back-office navigation trees from a TOML description"
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Build the menu described by a TOML file and print it
    Render(RenderCli),
    /// Print the derived state identifier for a container label
    StateId {
        /// Container label
        label: String,
        /// Container kind the identifier is derived for
        #[clap(long, value_enum, default_value = "section")]
        kind: ContainerKindArg,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct RenderCli {
    /// Path to the navigation TOML file
    pub file: PathBuf,
    /// Output format: 'json' or 'text'.
    #[clap(long, default_value = "json")]
    pub format: String,
    /// Context attribute as key=value (repeatable)
    #[clap(long = "attr")]
    pub attrs: Vec<String>,
    /// Request path placed in the context
    #[clap(long)]
    pub path: Option<String>,
    /// Also resolve the user menu
    #[clap(long)]
    pub user_menu: bool,
    /// Serialize hidden entries too instead of filtering by visibility
    #[clap(long)]
    pub all: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum ContainerKindArg {
    Section,
    Group,
}
