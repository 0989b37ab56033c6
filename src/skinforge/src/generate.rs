//! Instance generation: turn a catalog entry into the randomized attribute
//! set a freshly acquired item carries.
//!
//! Generation is a pure function of (catalog, match provider, random
//! source). The generator holds no mutable state, so one generator may
//! serve concurrent calls as long as each call brings its own source.

pub mod attributes;

pub use attributes::{RandomSource, RngSource, SkinCondition};

use crate::catalog::{Catalog, CatalogEntry, CategoryKind, PaintKit};
use crate::instance::{
    Agent, Gloves, Graffiti, ItemInstance, Music, ServiceMedal, Skin, SouvenirPackage,
    StorageUnit, TournamentCoin,
};
use crate::tournament::{MatchProvider, MatchSet};

/// The MP5-SD "Lab Rats" skin ships with a fixed Chicken sticker in its
/// fourth slot.
const MP5SD_WEAPON_ID: u32 = 23;
const LAB_RATS_PAINT_KIT: u32 = 800;
const LAB_RATS_STICKER_SLOT: usize = 3;
const LAB_RATS_STICKER_ID: u16 = 28;

/// Generates per-instance item data from catalog entries.
pub struct InstanceGenerator<'a, M> {
    catalog: &'a Catalog,
    matches: &'a M,
}

impl<'a, M: MatchProvider> InstanceGenerator<'a, M> {
    pub fn new(catalog: &'a Catalog, matches: &'a M) -> Self {
        Self { catalog, matches }
    }

    /// Produce the instance-data variant for `entry`. Categories with no
    /// randomized attributes come back as their default instance (or
    /// [`ItemInstance::Default`] when they carry none at all).
    pub fn generate(&self, entry: &CatalogEntry, rng: &mut dyn RandomSource) -> ItemInstance {
        match entry.kind() {
            CategoryKind::Skin => self.generate_skin(entry, rng),
            CategoryKind::Gloves => self.generate_gloves(entry, rng),
            CategoryKind::ServiceMedal => self.generate_service_medal(entry, rng),
            CategoryKind::Case if entry.is_souvenir_package() => {
                self.generate_souvenir_package(entry, rng)
            }
            CategoryKind::MusicKit => ItemInstance::Music(Music::default()),
            CategoryKind::Agent => ItemInstance::Agent(Agent::default()),
            CategoryKind::Graffiti => ItemInstance::Graffiti(Graffiti::default()),
            CategoryKind::TournamentCoin => {
                ItemInstance::TournamentCoin(TournamentCoin::default())
            }
            CategoryKind::StorageUnitTool => ItemInstance::StorageUnit(StorageUnit::default()),
            _ => ItemInstance::Default,
        }
    }

    fn generate_skin(&self, entry: &CatalogEntry, rng: &mut dyn RandomSource) -> ItemInstance {
        let Some(kit) = self.catalog.paint_kit(entry) else {
            return ItemInstance::Default;
        };

        let mut skin = Skin {
            wear: sample_wear(kit, rng),
            seed: attributes::paint_kit_seed(rng),
            ..Default::default()
        };

        if entry.id == MP5SD_WEAPON_ID && kit.id == LAB_RATS_PAINT_KIT {
            skin.stickers[LAB_RATS_STICKER_SLOT].sticker_id = LAB_RATS_STICKER_ID;
        }

        ItemInstance::Skin(skin)
    }

    fn generate_gloves(&self, entry: &CatalogEntry, rng: &mut dyn RandomSource) -> ItemInstance {
        let Some(kit) = self.catalog.paint_kit(entry) else {
            return ItemInstance::Default;
        };

        ItemInstance::Gloves(Gloves {
            wear: sample_wear(kit, rng),
            seed: attributes::paint_kit_seed(rng),
        })
    }

    fn generate_service_medal(
        &self,
        entry: &CatalogEntry,
        rng: &mut dyn RandomSource,
    ) -> ItemInstance {
        let Some(year) = self.catalog.service_medal_year(entry) else {
            return ItemInstance::Default;
        };

        ItemInstance::ServiceMedal(ServiceMedal {
            issue_date_timestamp: attributes::service_medal_issue_date(rng, year),
        })
    }

    fn generate_souvenir_package(
        &self,
        entry: &CatalogEntry,
        rng: &mut dyn RandomSource,
    ) -> ItemInstance {
        let mut package = SouvenirPackage::default();

        let event = self.catalog.tournament_event_id(entry).unwrap_or_default();
        let map = self.catalog.tournament_map(entry).unwrap_or_default();
        let Some(matches) = self.matches.matches_for(event, map) else {
            return ItemInstance::SouvenirPackage(package);
        };
        if matches.is_empty() {
            return ItemInstance::SouvenirPackage(package);
        }

        let index = rng.uniform_int(0, matches.len() as i64 - 1) as usize;
        match matches {
            MatchSet::Plain(list) => {
                let chosen = &list[index];
                package.tournament_stage = chosen.stage;
                package.tournament_team1 = chosen.team1;
                package.tournament_team2 = chosen.team2;
            }
            MatchSet::WithMvps(list) => {
                let chosen = &list[index];
                package.tournament_stage = chosen.stage;
                package.tournament_team1 = chosen.team1;
                package.tournament_team2 = chosen.team2;
                package.pro_player = chosen.random_mvp(rng).unwrap_or_default();
            }
        }

        ItemInstance::SouvenirPackage(package)
    }
}

/// Sample a skin's wear: the raw draw always comes from the FactoryNew
/// bucket (the default acquisition path hands out near-mint items), then
/// remaps linearly into the kit's bounds.
fn sample_wear(kit: &PaintKit, rng: &mut dyn RandomSource) -> f32 {
    let raw = attributes::paint_kit_wear(rng, SkinCondition::FactoryNew);
    lerp(kit.wear_remap_min, kit.wear_remap_max, raw)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
