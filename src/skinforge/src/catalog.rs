//! The normalized item catalog.
//!
//! Built once from the schema by [`builder::CatalogBuilder`], then shared
//! read-only by every generation call. The typed `add_*` operations exist
//! for the builder's four passes; nothing mutates a catalog after
//! [`builder::CatalogBuilder::build`] hands it out.

pub mod builder;
pub mod entry;

pub use builder::CatalogBuilder;
pub use entry::{Category, CategoryKind, CatalogEntry, ItemName, PaintKit, Rarity};

use crate::tournament::TournamentMap;

/// All classified item definitions plus the paint-kit table skin and glove
/// entries reference.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    paint_kits: Vec<PaintKit>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Typed add operations (builder-facing)
    // ------------------------------------------------------------------

    pub(crate) fn add_music(&mut self, id: u32, name: ItemName, image: String) {
        self.push(id, name, Rarity::Rare, image, Category::MusicKit);
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn add_sticker(
        &mut self,
        id: u32,
        name: ItemName,
        rarity: Rarity,
        image: String,
        tournament_event_id: u8,
        tournament_team_id: u16,
        tournament_player_id: u16,
        is_golden: bool,
    ) {
        self.push(
            id,
            name,
            rarity,
            image,
            Category::Sticker {
                tournament_event_id,
                tournament_team_id,
                tournament_player_id,
                is_golden,
            },
        );
    }

    pub(crate) fn add_patch(&mut self, id: u32, name: ItemName, rarity: Rarity, image: String) {
        self.push(id, name, rarity, image, Category::Patch);
    }

    pub(crate) fn add_graffiti(&mut self, id: u32, name: ItemName, rarity: Rarity, image: String) {
        self.push(id, name, rarity, image, Category::Graffiti);
    }

    /// Register a paint kit and return its index for the skin/glove entries
    /// that follow it.
    pub(crate) fn add_paint_kit(&mut self, kit: PaintKit) -> usize {
        self.paint_kits.push(kit);
        self.paint_kits.len() - 1
    }

    pub(crate) fn add_skin(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        paint_kit: usize,
        image: String,
    ) {
        let name = self.paint_kits[paint_kit].name.clone();
        self.push(weapon_id, name, rarity, image, Category::Skin { paint_kit });
    }

    pub(crate) fn add_gloves(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        paint_kit: usize,
        image: String,
    ) {
        let name = self.paint_kits[paint_kit].name.clone();
        self.push(weapon_id, name, rarity, image, Category::Gloves { paint_kit });
    }

    pub(crate) fn add_vanilla_knife(&mut self, weapon_id: u32, image: String) {
        self.push(
            weapon_id,
            ItemName::default(),
            Rarity::Ancient,
            image,
            Category::VanillaKnife,
        );
    }

    pub(crate) fn add_vanilla_skin(&mut self, weapon_id: u32, image: String) {
        self.push(
            weapon_id,
            ItemName::default(),
            Rarity::Default,
            image,
            Category::VanillaSkin,
        );
    }

    pub(crate) fn add_service_medal(
        &mut self,
        rarity: Rarity,
        year: u16,
        weapon_id: u32,
        image: String,
    ) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::ServiceMedal { year },
        );
    }

    pub(crate) fn add_tournament_coin(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        tournament_event_id: u8,
        default_sticker_id: u16,
        image: String,
    ) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::TournamentCoin {
                tournament_event_id,
                default_sticker_id,
            },
        );
    }

    pub(crate) fn add_collectible(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        is_original: bool,
        image: String,
    ) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::Collectible { is_original },
        );
    }

    pub(crate) fn add_name_tag(&mut self, rarity: Rarity, weapon_id: u32, image: String) {
        self.push(weapon_id, ItemName::default(), rarity, image, Category::NameTag);
    }

    pub(crate) fn add_agent(&mut self, rarity: Rarity, weapon_id: u32, image: String) {
        self.push(weapon_id, ItemName::default(), rarity, image, Category::Agent);
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn add_case(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        crate_series: u16,
        tournament_event_id: u8,
        tournament_map: TournamentMap,
        is_promo: bool,
        image: String,
    ) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::Case {
                crate_series,
                tournament_event_id,
                tournament_map,
                is_promo,
            },
        );
    }

    pub(crate) fn add_case_key(&mut self, rarity: Rarity, weapon_id: u32, image: String) {
        self.push(weapon_id, ItemName::default(), rarity, image, Category::CaseKey);
    }

    pub(crate) fn add_operation_pass(&mut self, rarity: Rarity, weapon_id: u32, image: String) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::OperationPass,
        );
    }

    pub(crate) fn add_stattrak_swap_tool(&mut self, rarity: Rarity, weapon_id: u32, image: String) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::StatTrakSwapTool,
        );
    }

    pub(crate) fn add_souvenir_token(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        tournament_event_id: u8,
        image: String,
    ) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::SouvenirToken {
                tournament_event_id,
            },
        );
    }

    pub(crate) fn add_viewer_pass(
        &mut self,
        rarity: Rarity,
        weapon_id: u32,
        tournament_event_id: u8,
        image: String,
    ) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::ViewerPass {
                tournament_event_id,
            },
        );
    }

    pub(crate) fn add_storage_unit(&mut self, rarity: Rarity, weapon_id: u32, image: String) {
        self.push(
            weapon_id,
            ItemName::default(),
            rarity,
            image,
            Category::StorageUnitTool,
        );
    }

    fn push(&mut self, id: u32, name: ItemName, rarity: Rarity, image: String, category: Category) {
        self.entries.push(CatalogEntry {
            id,
            name,
            rarity,
            image,
            category,
        });
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn paint_kits(&self) -> &[PaintKit] {
        &self.paint_kits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry with the given kind and id.
    ///
    /// Skins and gloves carry one entry per (weapon, paint kit) pair, so for
    /// those kinds this returns the first entry on the weapon. Use
    /// [`Catalog::find_skin`] or [`Catalog::find_gloves`] to pick a specific
    /// finish.
    pub fn find(&self, kind: CategoryKind, id: u32) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.kind() == kind && entry.id == id)
    }

    /// Find the skin entry for a weapon with a specific paint kit.
    pub fn find_skin(&self, weapon_id: u32, paint_kit_id: u32) -> Option<&CatalogEntry> {
        self.find_painted(CategoryKind::Skin, weapon_id, paint_kit_id)
    }

    /// Find the glove entry for a glove model with a specific paint kit.
    pub fn find_gloves(&self, weapon_id: u32, paint_kit_id: u32) -> Option<&CatalogEntry> {
        self.find_painted(CategoryKind::Gloves, weapon_id, paint_kit_id)
    }

    fn find_painted(
        &self,
        kind: CategoryKind,
        weapon_id: u32,
        paint_kit_id: u32,
    ) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| {
            entry.kind() == kind
                && entry.id == weapon_id
                && self.paint_kit(entry).is_some_and(|kit| kit.id == paint_kit_id)
        })
    }

    pub fn contains(&self, kind: CategoryKind, id: u32) -> bool {
        self.find(kind, id).is_some()
    }

    /// All entries of one kind.
    pub fn iter_kind(&self, kind: CategoryKind) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Paint kit referenced by a skin or glove entry.
    pub fn paint_kit(&self, entry: &CatalogEntry) -> Option<&PaintKit> {
        match entry.category {
            Category::Skin { paint_kit } | Category::Gloves { paint_kit } => {
                self.paint_kits.get(paint_kit)
            }
            _ => None,
        }
    }

    /// Issue year of a service medal entry.
    pub fn service_medal_year(&self, entry: &CatalogEntry) -> Option<u16> {
        match entry.category {
            Category::ServiceMedal { year } => Some(year),
            _ => None,
        }
    }

    /// Tournament event an entry is tied to, for the categories carrying one.
    pub fn tournament_event_id(&self, entry: &CatalogEntry) -> Option<u8> {
        match entry.category {
            Category::Sticker {
                tournament_event_id,
                ..
            }
            | Category::Case {
                tournament_event_id,
                ..
            }
            | Category::TournamentCoin {
                tournament_event_id,
                ..
            }
            | Category::SouvenirToken {
                tournament_event_id,
            }
            | Category::ViewerPass {
                tournament_event_id,
            } => Some(tournament_event_id),
            _ => None,
        }
    }

    /// Map a souvenir package was issued for.
    pub fn tournament_map(&self, entry: &CatalogEntry) -> Option<TournamentMap> {
        match entry.category {
            Category::Case { tournament_map, .. } => Some(tournament_map),
            _ => None,
        }
    }
}
