//! Per-instance item data: the randomized and user-mutable attributes an
//! owned item carries on top of its catalog entry.
//!
//! Instances are created at acquisition time by the
//! [`crate::generate::InstanceGenerator`], live inside the owning inventory
//! record, and may be mutated afterwards by user customization (name tags,
//! applied stickers, StatTrak swaps).

use serde::{Deserialize, Serialize};

/// One of a skin's five sticker slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StickerSlot {
    pub sticker_id: u16,
    pub wear: f32,
}

/// A painted weapon instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub wear: f32,
    pub seed: i32,
    /// -1 while the item has no StatTrak counter.
    pub stat_trak: i32,
    pub stickers: [StickerSlot; 5],
    pub name_tag: String,
    /// Event the skin dropped at; 0 for non-souvenir skins.
    pub tournament_id: u32,
    pub tournament_stage: u8,
    pub tournament_team1: u16,
    pub tournament_team2: u16,
    pub pro_player: u16,
}

impl Skin {
    /// Whether this skin dropped from a souvenir package.
    pub fn is_souvenir(&self) -> bool {
        self.tournament_id != 0
    }
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            wear: 0.0,
            seed: 1,
            stat_trak: -1,
            stickers: Default::default(),
            name_tag: String::new(),
            tournament_id: 0,
            tournament_stage: 0,
            tournament_team1: 0,
            tournament_team2: 0,
            pro_player: 0,
        }
    }
}

/// A painted glove instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gloves {
    pub wear: f32,
    pub seed: i32,
}

impl Default for Gloves {
    fn default() -> Self {
        Self { wear: 0.0, seed: 1 }
    }
}

/// One of an agent's patch slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSlot {
    pub patch_id: u16,
}

/// An agent instance: patch slots only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub patches: [PatchSlot; 5],
}

/// A music kit instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    /// -1 while the kit has no StatTrak counter.
    pub stat_trak: i32,
}

impl Default for Music {
    fn default() -> Self {
        Self { stat_trak: -1 }
    }
}

/// A souvenir package instance: the historical match it commemorates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SouvenirPackage {
    pub tournament_stage: u8,
    pub tournament_team1: u16,
    pub tournament_team2: u16,
    /// Credited MVP, 0 when the event recorded none.
    pub pro_player: u16,
}

/// A service medal instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMedal {
    pub issue_date_timestamp: u32,
}

/// A tournament coin instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentCoin {
    pub drops_awarded: u32,
}

/// A sealed graffiti instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graffiti {
    /// -1 while sealed; counts down once unsealed.
    pub uses_left: i8,
}

impl Default for Graffiti {
    fn default() -> Self {
        Self { uses_left: -1 }
    }
}

/// A storage unit instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageUnit {
    pub modification_date_timestamp: u32,
    pub item_count: u32,
    pub name: String,
}

/// Instance data, one variant per category carrying any. Categories with no
/// per-instance attributes generate [`ItemInstance::Default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ItemInstance {
    #[default]
    Default,
    Skin(Skin),
    Gloves(Gloves),
    Agent(Agent),
    Music(Music),
    SouvenirPackage(SouvenirPackage),
    ServiceMedal(ServiceMedal),
    TournamentCoin(TournamentCoin),
    Graffiti(Graffiti),
    StorageUnit(StorageUnit),
}
