//! CLI argument definitions for skinforge
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use skinforge::CategoryKind;

#[derive(Parser)]
#[command(name = "skinforge", version, about = "Item catalog classifier and instance generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a schema document and list the resulting catalog
    Catalog {
        /// Path to the schema JSON document
        schema: PathBuf,

        /// Only list entries of this category
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Case-insensitive name filter (matched against the search key)
        #[arg(long)]
        search: Option<String>,

        /// Print per-category counts instead of entries
        #[arg(long)]
        stats: bool,
    },

    /// Roll instance attributes for one catalog entry
    Generate {
        /// Path to the schema JSON document
        schema: PathBuf,

        /// Category of the entry
        #[arg(long, value_enum)]
        kind: KindArg,

        /// Entry id (kit id or item definition index, per category)
        #[arg(long)]
        id: u32,

        /// Paint kit id, to pick one finish when a weapon carries several
        /// (skin and gloves categories only)
        #[arg(long)]
        paint_kit: Option<u32>,

        /// Optional tournament match table (JSON)
        #[arg(long)]
        matches: Option<PathBuf>,

        /// Seed for reproducible rolls; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Number of instances to roll
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

/// Category names accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum KindArg {
    Skin,
    Gloves,
    Sticker,
    Patch,
    Graffiti,
    MusicKit,
    Agent,
    Case,
    CaseKey,
    Collectible,
    ServiceMedal,
    TournamentCoin,
    NameTag,
    OperationPass,
    StatTrakSwapTool,
    SouvenirToken,
    ViewerPass,
    StorageUnitTool,
    VanillaKnife,
    VanillaSkin,
}

impl From<KindArg> for CategoryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Skin => Self::Skin,
            KindArg::Gloves => Self::Gloves,
            KindArg::Sticker => Self::Sticker,
            KindArg::Patch => Self::Patch,
            KindArg::Graffiti => Self::Graffiti,
            KindArg::MusicKit => Self::MusicKit,
            KindArg::Agent => Self::Agent,
            KindArg::Case => Self::Case,
            KindArg::CaseKey => Self::CaseKey,
            KindArg::Collectible => Self::Collectible,
            KindArg::ServiceMedal => Self::ServiceMedal,
            KindArg::TournamentCoin => Self::TournamentCoin,
            KindArg::NameTag => Self::NameTag,
            KindArg::OperationPass => Self::OperationPass,
            KindArg::StatTrakSwapTool => Self::StatTrakSwapTool,
            KindArg::SouvenirToken => Self::SouvenirToken,
            KindArg::ViewerPass => Self::ViewerPass,
            KindArg::StorageUnitTool => Self::StorageUnitTool,
            KindArg::VanillaKnife => Self::VanillaKnife,
            KindArg::VanillaSkin => Self::VanillaSkin,
        }
    }
}
