mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog {
            schema,
            kind,
            search,
            stats,
        } => {
            commands::catalog(&schema, kind.map(Into::into), search.as_deref(), stats)?;
        }

        Commands::Generate {
            schema,
            kind,
            id,
            paint_kit,
            matches,
            seed,
            count,
        } => {
            commands::generate(
                &schema,
                kind.into(),
                id,
                paint_kit,
                matches.as_deref(),
                seed,
                count,
            )?;
        }
    }

    Ok(())
}
