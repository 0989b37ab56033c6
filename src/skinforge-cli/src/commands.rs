//! Command handlers.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;

use skinforge::catalog::{Catalog, CatalogBuilder, CategoryKind};
use skinforge::generate::{InstanceGenerator, RngSource};
use skinforge::schema::{SchemaDocument, Utf8NameEncoder};
use skinforge::tournament::{MatchList, MatchTable, TournamentMap};

/// Load and classify a schema document.
fn load_catalog(schema_path: &Path) -> Result<Catalog> {
    let file = File::open(schema_path)
        .with_context(|| format!("Failed to open schema document {}", schema_path.display()))?;
    let doc = SchemaDocument::from_reader(file)
        .with_context(|| format!("Failed to parse schema document {}", schema_path.display()))?;

    let localizer = doc.localizer();
    Ok(CatalogBuilder::new(&doc, &localizer, &Utf8NameEncoder).build())
}

/// One row of a match-table JSON file.
#[derive(serde::Deserialize)]
struct MatchTableRow {
    event_id: u8,
    map: TournamentMap,
    matches: MatchList,
}

fn load_match_table(path: Option<&Path>) -> Result<MatchTable> {
    let mut table = MatchTable::new();
    let Some(path) = path else {
        return Ok(table);
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open match table {}", path.display()))?;
    let rows: Vec<MatchTableRow> = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse match table {}", path.display()))?;
    for row in rows {
        table.insert(row.event_id, row.map, row.matches);
    }
    Ok(table)
}

/// `skinforge catalog`: classify and list.
pub fn catalog(
    schema_path: &Path,
    kind: Option<CategoryKind>,
    search: Option<&str>,
    stats: bool,
) -> Result<()> {
    let catalog = load_catalog(schema_path)?;

    if stats {
        print_stats(&catalog);
        return Ok(());
    }

    let search_key = search.map(str::to_uppercase);
    let mut shown = 0usize;
    for entry in catalog.entries() {
        if kind.is_some_and(|k| entry.kind() != k) {
            continue;
        }
        if let Some(ref needle) = search_key {
            if !entry.name.for_search.contains(needle.as_str()) {
                continue;
            }
        }
        let name = if entry.name.for_display.is_empty() {
            "-"
        } else {
            entry.name.for_display.as_str()
        };
        println!(
            "{:>6}  {:<18}  {:<12}  {}",
            entry.id,
            format!("{:?}", entry.kind()),
            entry.rarity.name(),
            name
        );
        shown += 1;
    }
    println!("{shown} of {} entries", catalog.len());
    Ok(())
}

fn print_stats(catalog: &Catalog) {
    const KINDS: &[CategoryKind] = &[
        CategoryKind::Skin,
        CategoryKind::Gloves,
        CategoryKind::Sticker,
        CategoryKind::Patch,
        CategoryKind::Graffiti,
        CategoryKind::MusicKit,
        CategoryKind::Agent,
        CategoryKind::Case,
        CategoryKind::CaseKey,
        CategoryKind::Collectible,
        CategoryKind::ServiceMedal,
        CategoryKind::TournamentCoin,
        CategoryKind::NameTag,
        CategoryKind::OperationPass,
        CategoryKind::StatTrakSwapTool,
        CategoryKind::SouvenirToken,
        CategoryKind::ViewerPass,
        CategoryKind::StorageUnitTool,
        CategoryKind::VanillaKnife,
        CategoryKind::VanillaSkin,
    ];

    for &kind in KINDS {
        let count = catalog.iter_kind(kind).count();
        if count > 0 {
            println!("{:<18} {count}", format!("{kind:?}"));
        }
    }
    println!("paint kits         {}", catalog.paint_kits().len());
    println!("total              {}", catalog.len());
}

/// `skinforge generate`: roll instance attributes for one entry.
#[allow(clippy::too_many_arguments)]
pub fn generate(
    schema_path: &Path,
    kind: CategoryKind,
    id: u32,
    paint_kit: Option<u32>,
    matches_path: Option<&Path>,
    seed: Option<u64>,
    count: u32,
) -> Result<()> {
    let catalog = load_catalog(schema_path)?;
    let matches = load_match_table(matches_path)?;

    let entry = match (kind, paint_kit) {
        (CategoryKind::Skin, Some(kit)) => catalog.find_skin(id, kit),
        (CategoryKind::Gloves, Some(kit)) => catalog.find_gloves(id, kit),
        (_, Some(_)) => bail!("--paint-kit only applies to skin and gloves entries"),
        (_, None) => catalog.find(kind, id),
    };
    let Some(entry) = entry else {
        match paint_kit {
            Some(kit) => bail!("No {kind:?} entry with id {id} and paint kit {kit} in the catalog"),
            None => bail!("No {kind:?} entry with id {id} in the catalog"),
        }
    };

    let generator = InstanceGenerator::new(&catalog, &matches);
    let mut rng = match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    for _ in 0..count {
        let instance = generator.generate(entry, &mut rng);
        let row = json!({
            "id": entry.id,
            "kind": entry.kind(),
            "name": entry.name.for_display,
            "rarity": entry.rarity,
            "instance": instance,
        });
        println!("{}", serde_json::to_string_pretty(&row)?);
    }
    Ok(())
}
