//! # skinforge
//!
//! Item schema classification and procedural item-attribute generation.
//!
//! This library provides functionality to:
//! - Classify raw item-schema records (skins, stickers, patches, graffiti,
//!   music kits, agents, cases, tools, medals, coins) into a normalized,
//!   queryable [`Catalog`]
//! - Decode the bit-packed alternate-icon table into paint-kit/weapon
//!   associations
//! - Generate randomized per-instance attributes (wear, seed, tournament
//!   context, issue dates) following the host game's fixed probability rules
//!
//! ## Example
//!
//! ```
//! use skinforge::catalog::{CatalogBuilder, CategoryKind};
//! use skinforge::generate::{InstanceGenerator, RngSource};
//! use skinforge::schema::{SchemaDocument, Utf8NameEncoder};
//! use skinforge::tournament::NoMatches;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = SchemaDocument::from_json(
//!     r##"{
//!         "paint_kits": [
//!             {"id": 44, "item_name": "#PaintKit_cu_fire", "rarity": 4,
//!              "wear_remap_min": 0.06, "wear_remap_max": 0.8}
//!         ],
//!         "items": [{"definition_index": 7, "rarity": 3}],
//!         "alternate_icons": [{"key": 458928, "simple_name": "econ/ak_fire"}],
//!         "strings": {"PaintKit_cu_fire": "Fire Serpent"}
//!     }"##,
//! )?;
//!
//! // Classify the schema into a catalog, then roll an instance.
//! let localizer = doc.localizer();
//! let catalog = CatalogBuilder::new(&doc, &localizer, &Utf8NameEncoder).build();
//! let skin = catalog.find(CategoryKind::Skin, 7).expect("classified skin");
//!
//! let generator = InstanceGenerator::new(&catalog, &NoMatches);
//! let mut rng = RngSource::seeded(42);
//! let instance = generator.generate(skin, &mut rng);
//! println!("{}", serde_json::to_string_pretty(&instance)?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod generate;
pub mod instance;
pub mod schema;
pub mod tournament;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{
    Catalog, CatalogBuilder, CatalogEntry, Category, CategoryKind, ItemName, PaintKit, Rarity,
};
#[doc(inline)]
pub use generate::{InstanceGenerator, RandomSource, RngSource, SkinCondition};
#[doc(inline)]
pub use instance::ItemInstance;
#[doc(inline)]
pub use schema::{Localizer, NameEncoder, SchemaDocument, SchemaError, SchemaProvider};
#[doc(inline)]
pub use tournament::{MatchProvider, MatchSet, TournamentMap};
