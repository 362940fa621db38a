//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod categories;
pub mod resolve;
pub mod rules;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Resolve(args) => resolve::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Rules(args) => rules::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a resolution pass and print the registries
    Resolve(resolve::ResolveArgs),

    /// List configured resource categories
    Categories(categories::CategoriesArgs),

    /// List entry validation rules
    Rules(rules::RulesArgs),
}
