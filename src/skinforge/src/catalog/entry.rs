//! Catalog entry model: rarity tiers, display names, paint kits and the
//! per-category tagged union.

use serde::{Deserialize, Serialize};

use crate::tournament::TournamentMap;

/// Economy rarity tier, in the schema's numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Rarity {
    Default = 0,
    /// Gray ("consumer grade").
    Common = 1,
    /// Light blue ("industrial grade").
    Uncommon = 2,
    /// Blue ("mil-spec").
    Rare = 3,
    /// Purple ("restricted").
    Mythical = 4,
    /// Pink ("classified").
    Legendary = 5,
    /// Red ("covert"); the knife tier.
    Ancient = 6,
    /// Gold ("contraband"); only reachable through kit rarity 7.
    Immortal = 7,
}

impl Rarity {
    /// Map a raw schema rarity value onto a tier. Out-of-range values
    /// saturate at the top tier.
    pub fn from_schema(value: u8) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::Common,
            2 => Self::Uncommon,
            3 => Self::Rare,
            4 => Self::Mythical,
            5 => Self::Legendary,
            6 => Self::Ancient,
            _ => Self::Immortal,
        }
    }

    /// Effective rarity of a skin: base item rarity combined with the paint
    /// kit's tier. Capped at Ancient unless the kit itself is rarity 7 (the
    /// gold tier stays reachable for immortal kits only), floored at
    /// Default.
    pub fn combined_with_kit(base: u8, kit: u8) -> Self {
        let cap = if kit == 7 { 7 } else { 6 };
        let combined = (i32::from(base) + i32::from(kit) - 1).clamp(0, cap);
        Self::from_schema(combined as u8)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Common => "Consumer Grade",
            Self::Uncommon => "Industrial Grade",
            Self::Rare => "Mil-Spec",
            Self::Mythical => "Restricted",
            Self::Legendary => "Classified",
            Self::Ancient => "Covert",
            Self::Immortal => "Contraband",
        }
    }
}

/// Display name in the two encodings every entry carries: a portable byte
/// string for display and an uppercase key for case-insensitive search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemName {
    pub for_display: String,
    pub for_search: String,
}

impl ItemName {
    pub fn new(for_display: String, for_search: String) -> Self {
        Self {
            for_display,
            for_search,
        }
    }
}

/// A paint kit definition referenced by skin and glove entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintKit {
    pub id: u32,
    pub name: ItemName,
    pub rarity: Rarity,
    /// Lower bound the sampled wear is remapped into. In [0, 1].
    pub wear_remap_min: f32,
    /// Upper bound the sampled wear is remapped into. In [0, 1], >= min.
    pub wear_remap_max: f32,
}

/// Category discriminant, used for predicates and (kind, id) uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
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

/// Category-specific payload of a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Category {
    /// Weapon skin. `paint_kit` indexes the catalog's paint-kit table.
    Skin { paint_kit: usize },
    /// Glove skin, same paint-kit reference.
    Gloves { paint_kit: usize },
    Sticker {
        tournament_event_id: u8,
        tournament_team_id: u16,
        tournament_player_id: u16,
        is_golden: bool,
    },
    Patch,
    Graffiti,
    MusicKit,
    Agent,
    Case {
        crate_series: u16,
        tournament_event_id: u8,
        tournament_map: TournamentMap,
        is_promo: bool,
    },
    CaseKey,
    Collectible { is_original: bool },
    ServiceMedal { year: u16 },
    TournamentCoin {
        tournament_event_id: u8,
        default_sticker_id: u16,
    },
    NameTag,
    OperationPass,
    StatTrakSwapTool,
    SouvenirToken { tournament_event_id: u8 },
    ViewerPass { tournament_event_id: u8 },
    StorageUnitTool,
    VanillaKnife,
    VanillaSkin,
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        match self {
            Self::Skin { .. } => CategoryKind::Skin,
            Self::Gloves { .. } => CategoryKind::Gloves,
            Self::Sticker { .. } => CategoryKind::Sticker,
            Self::Patch => CategoryKind::Patch,
            Self::Graffiti => CategoryKind::Graffiti,
            Self::MusicKit => CategoryKind::MusicKit,
            Self::Agent => CategoryKind::Agent,
            Self::Case { .. } => CategoryKind::Case,
            Self::CaseKey => CategoryKind::CaseKey,
            Self::Collectible { .. } => CategoryKind::Collectible,
            Self::ServiceMedal { .. } => CategoryKind::ServiceMedal,
            Self::TournamentCoin { .. } => CategoryKind::TournamentCoin,
            Self::NameTag => CategoryKind::NameTag,
            Self::OperationPass => CategoryKind::OperationPass,
            Self::StatTrakSwapTool => CategoryKind::StatTrakSwapTool,
            Self::SouvenirToken { .. } => CategoryKind::SouvenirToken,
            Self::ViewerPass { .. } => CategoryKind::ViewerPass,
            Self::StorageUnitTool => CategoryKind::StorageUnitTool,
            Self::VanillaKnife => CategoryKind::VanillaKnife,
            Self::VanillaSkin => CategoryKind::VanillaSkin,
        }
    }
}

/// One classified item definition.
///
/// `id` is the sticker/paint/music kit id for kit-derived categories and
/// the weapon definition index for everything else; entries are unique by
/// (kind, id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: ItemName,
    pub rarity: Rarity,
    pub image: String,
    pub category: Category,
}

impl CatalogEntry {
    pub fn kind(&self) -> CategoryKind {
        self.category.kind()
    }

    pub fn is_skin(&self) -> bool {
        matches!(self.category, Category::Skin { .. })
    }

    pub fn is_gloves(&self) -> bool {
        matches!(self.category, Category::Gloves { .. })
    }

    pub fn is_case(&self) -> bool {
        matches!(self.category, Category::Case { .. })
    }

    pub fn is_service_medal(&self) -> bool {
        matches!(self.category, Category::ServiceMedal { .. })
    }

    /// A souvenir package is a case tagged with a tournament event.
    pub fn is_souvenir_package(&self) -> bool {
        matches!(
            self.category,
            Category::Case {
                tournament_event_id,
                ..
            } if tournament_event_id != 0
        )
    }
}
