//! Raw item schema records and the collaborator interfaces the classifier
//! consumes.
//!
//! The schema itself lives outside this crate (in the host game's process,
//! a dump, or a JSON export). The catalog builder only needs the typed
//! record collections below plus two small text services: a localization
//! resolver and a name encoder. All of them are constructor-injected; the
//! crate holds no process-wide state.

pub mod document;

pub use document::{SchemaDocument, SchemaError};

use serde::{Deserialize, Serialize};

/// A music kit definition from the schema.
///
/// Ids 1 and 2 are reserved default kits and never become catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicKitRecord {
    pub id: u32,
    /// Localization key for the kit's display name.
    pub name_localized: String,
    #[serde(default)]
    pub inventory_image: String,
}

/// A sticker kit definition. The schema stores stickers, patches and
/// graffiti in one collection; classification happens by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerKitRecord {
    pub id: u32,
    /// Raw internal name. May still carry the schema's trailing NUL.
    pub name: String,
    /// Localization key for the display name.
    pub item_name: String,
    pub rarity: u8,
    #[serde(default)]
    pub inventory_image: String,
    #[serde(default)]
    pub tournament_event_id: u8,
    #[serde(default)]
    pub tournament_team_id: u16,
    #[serde(default)]
    pub tournament_player_id: u16,
}

/// A paint kit (skin finish) definition.
///
/// Ids 0 and 9001 are the default/workshop sentinels and are skipped.
/// Kit ids >= 10000 are glove kits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintKitRecord {
    pub id: u32,
    /// Localization key for the display name.
    pub item_name: String,
    pub rarity: u8,
    #[serde(default)]
    pub wear_remap_min: f32,
    #[serde(default = "default_wear_remap_max")]
    pub wear_remap_max: f32,
}

fn default_wear_remap_max() -> f32 {
    1.0
}

/// An entry of the alternate-icon table. The key packs a paint kit id and a
/// weapon id; see [`crate::catalog::builder::KitWeapon::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateIconRecord {
    pub key: u64,
    pub simple_name: String,
}

/// A generic item definition: weapons, cases, tools, collectibles, agents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item definition index ("weapon id" in the schema's terms, even for
    /// non-weapons).
    pub definition_index: u32,
    #[serde(default)]
    pub item_type_name: String,
    #[serde(default)]
    pub item_base_name: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(default)]
    pub quality: u8,
    /// Inventory image path. Items without one never become entries.
    #[serde(default)]
    pub inventory_image: Option<String>,
    /// Present on service medals only.
    #[serde(default)]
    pub service_medal_year: Option<u16>,
    #[serde(default)]
    pub is_tournament_coin: bool,
    #[serde(default)]
    pub tournament_event_id: u8,
    /// Sticker id carried by tournament coins.
    #[serde(default)]
    pub sticker_id: u16,
    /// Crate series number, present on cases.
    #[serde(default)]
    pub crate_series: Option<u16>,
    /// Economic tool sub-type string ("season_pass", "stattrak_swap",
    /// "fantoken", "casket").
    #[serde(default)]
    pub econ_tool: Option<String>,
    /// Capability flag: item accepts patches (agents).
    #[serde(default)]
    pub is_patchable: bool,
    /// Capability flag: item accepts paint kits.
    #[serde(default)]
    pub is_paintable: bool,
}

/// Read access to the schema's typed record collections.
///
/// The builder iterates each collection exactly once; iteration order only
/// affects catalog insertion order, not membership.
pub trait SchemaProvider {
    fn music_kits(&self) -> &[MusicKitRecord];
    fn sticker_kits(&self) -> &[StickerKitRecord];
    fn paint_kits(&self) -> &[PaintKitRecord];
    fn items(&self) -> &[ItemRecord];
    fn alternate_icons(&self) -> &[AlternateIconRecord];

    /// Resolve an item definition by its definition index. Returning `None`
    /// silently skips the association that asked.
    fn item_definition(&self, definition_index: u32) -> Option<&ItemRecord>;
}

/// Localization lookup with a guaranteed non-failing fallback.
pub trait Localizer {
    /// Resolve a localization key to display text. Must not fail; unknown
    /// keys fall back to something displayable (typically the key itself).
    fn resolve(&self, key: &str) -> String;
}

/// Localizer backed by a string table, falling back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct TableLocalizer {
    strings: std::collections::HashMap<String, String>,
}

impl TableLocalizer {
    pub fn new(strings: std::collections::HashMap<String, String>) -> Self {
        Self { strings }
    }
}

impl Localizer for TableLocalizer {
    fn resolve(&self, key: &str) -> String {
        // Schema localization keys conventionally carry a '#' prefix.
        let key = key.strip_prefix('#').unwrap_or(key);
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Converts resolved display text into the two encodings carried by every
/// catalog entry: a portable byte string and an uppercase search key.
pub trait NameEncoder {
    fn to_portable(&self, text: &str) -> String;
    fn to_search_key(&self, text: &str) -> String;
}

/// Default encoder: portable form is the UTF-8 text as-is, search key is
/// its Unicode uppercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8NameEncoder;

impl NameEncoder for Utf8NameEncoder {
    fn to_portable(&self, text: &str) -> String {
        text.to_string()
    }

    fn to_search_key(&self, text: &str) -> String {
        text.to_uppercase()
    }
}
