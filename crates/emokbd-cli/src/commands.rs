use anyhow::Result;

use super::args::{CacheCommand, Cli, Commands};
use super::context::ExecutionContext;
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Pick) {
        Commands::Pick => handlers::pick::handle(&ctx),

        Commands::Search {
            query,
            limit,
            format,
        } => handlers::search::handle(&ctx, &query.join(" "), limit, format),

        Commands::Layouts { format } => handlers::layouts::handle(&ctx, format),

        Commands::Recent { format } => handlers::recent::handle(&ctx, format),

        Commands::Config => handlers::config::handle(&ctx),

        Commands::Cache { command } => match command {
            CacheCommand::Rebuild { format } => handlers::cache::handle_rebuild(&ctx, format),
        },
    }
}
