//! Schema classification: four passes over the raw record collections,
//! each appending normalized entries to the catalog.
//!
//! Classification is skip-and-continue throughout. The schema comes from an
//! already-validated source, so anomalies (sentinel ids, missing images,
//! unresolvable weapon definitions, unknown tool strings) drop the record
//! silently instead of failing the build.

use crate::schema::{Localizer, NameEncoder, SchemaProvider, StickerKitRecord};

use super::entry::{ItemName, PaintKit, Rarity};
use super::Catalog;

/// Music kit ids reserved for the built-in default kits.
const RESERVED_MUSIC_IDS: [u32; 2] = [1, 2];

/// Paint kit id of the "workshop default" sentinel.
const WORKSHOP_DEFAULT_PAINT_KIT: u32 = 9001;

/// Paint kit ids at or above this belong to gloves.
const GLOVE_PAINT_KIT_FLOOR: u32 = 10_000;

/// Sticker kit 242 ships with a broken localization key upstream; resolve
/// it through the corrected one.
const CORRECTED_STICKER_ID: u32 = 242;
const CORRECTED_STICKER_KEY: &str = "StickerKit_dhw2014_teamdignitas_gold";

/// Item definition indices of per-event souvenir tokens. "fantoken" tools
/// not in this table are viewer passes.
const SOUVENIR_TOKEN_WEAPONS: [u32; 7] = [1349, 1369, 1386, 1390, 1731, 1742, 1763];

/// One alternate-icon association between a paint kit and a weapon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitWeapon {
    pub paint_kit: u32,
    pub weapon_id: u32,
    pub icon_path: String,
}

impl KitWeapon {
    /// Decode a composite alternate-icon key. The low 2 bits are a style
    /// flag and must be clear, the next 14 bits hold the paint kit id and
    /// the high bits hold the weapon id.
    pub fn decode(key: u64, icon_path: &str) -> Option<Self> {
        if key & 3 != 0 {
            return None;
        }
        Some(Self {
            paint_kit: ((key & 0xFFFF) >> 2) as u32,
            weapon_id: (key >> 16) as u32,
            icon_path: icon_path.to_string(),
        })
    }
}

/// Classifies raw schema records into a [`Catalog`].
pub struct CatalogBuilder<'a, S, L, E> {
    schema: &'a S,
    localizer: &'a L,
    encoder: &'a E,
}

impl<'a, S, L, E> CatalogBuilder<'a, S, L, E>
where
    S: SchemaProvider,
    L: Localizer,
    E: NameEncoder,
{
    pub fn new(schema: &'a S, localizer: &'a L, encoder: &'a E) -> Self {
        Self {
            schema,
            localizer,
            encoder,
        }
    }

    /// Run all four classification passes and return the finished catalog.
    ///
    /// Pass order only affects insertion order; final membership is the
    /// same whichever way the passes run.
    pub fn build(self) -> Catalog {
        let mut catalog = Catalog::new();
        self.add_stickers(&mut catalog);
        self.add_music_kits(&mut catalog);
        self.add_skins_and_gloves(&mut catalog);
        self.add_other_items(&mut catalog);
        catalog
    }

    fn add_music_kits(&self, catalog: &mut Catalog) {
        for kit in self.schema.music_kits() {
            if RESERVED_MUSIC_IDS.contains(&kit.id) {
                continue;
            }
            let name = self.resolve_name(&kit.name_localized);
            catalog.add_music(kit.id, name, kit.inventory_image.clone());
        }
    }

    fn add_stickers(&self, catalog: &mut Catalog) {
        for kit in self.schema.sticker_kits() {
            if kit.id == 0 {
                continue;
            }

            let name = kit.name.trim_end_matches('\0');
            let is_patch = name.starts_with("patch") || name.starts_with("stockh2021_teampatch");
            let is_graffiti =
                !is_patch && (name.starts_with("spray") || name.ends_with("graffiti"));

            let rarity = Rarity::from_schema(kit.rarity);
            if is_patch {
                let display = self.resolve_name(&kit.item_name);
                catalog.add_patch(kit.id, display, rarity, kit.inventory_image.clone());
            } else if is_graffiti {
                let display = self.resolve_name(&kit.item_name);
                catalog.add_graffiti(kit.id, display, rarity, kit.inventory_image.clone());
            } else {
                let is_golden = name.ends_with("gold");
                let display = self.resolve_name(sticker_name_key(kit));
                catalog.add_sticker(
                    kit.id,
                    display,
                    rarity,
                    kit.inventory_image.clone(),
                    kit.tournament_event_id,
                    kit.tournament_team_id,
                    kit.tournament_player_id,
                    is_golden,
                );
            }
        }
    }

    fn add_skins_and_gloves(&self, catalog: &mut Catalog) {
        let kits_weapons = self.kit_weapon_index();

        for kit in self.schema.paint_kits() {
            if kit.id == 0 || kit.id == WORKSHOP_DEFAULT_PAINT_KIT {
                continue;
            }

            let paint_kit = catalog.add_paint_kit(PaintKit {
                id: kit.id,
                name: self.resolve_name(&kit.item_name),
                rarity: Rarity::from_schema(kit.rarity),
                wear_remap_min: kit.wear_remap_min,
                wear_remap_max: kit.wear_remap_max,
            });

            let is_glove = kit.id >= GLOVE_PAINT_KIT_FLOOR;
            let start = kits_weapons.partition_point(|assoc| assoc.paint_kit < kit.id);
            for assoc in kits_weapons[start..]
                .iter()
                .take_while(|assoc| assoc.paint_kit == kit.id)
            {
                let Some(item_def) = self.schema.item_definition(assoc.weapon_id) else {
                    continue;
                };

                if is_glove {
                    catalog.add_gloves(
                        Rarity::from_schema(kit.rarity),
                        assoc.weapon_id,
                        paint_kit,
                        assoc.icon_path.clone(),
                    );
                } else {
                    catalog.add_skin(
                        Rarity::combined_with_kit(item_def.rarity, kit.rarity),
                        assoc.weapon_id,
                        paint_kit,
                        assoc.icon_path.clone(),
                    );
                }
            }
        }
    }

    fn add_other_items(&self, catalog: &mut Catalog) {
        for item in self.schema.items() {
            let Some(image) = item.inventory_image.clone().filter(|i| !i.is_empty()) else {
                continue;
            };

            let type_name = item.item_type_name.as_str();
            let rarity = Rarity::from_schema(item.rarity);
            let weapon_id = item.definition_index;

            if type_name == "#CSGO_Type_Knife" && rarity == Rarity::Ancient {
                catalog.add_vanilla_knife(weapon_id, image);
            } else if type_name == "#CSGO_Type_Collectible" {
                if let Some(year) = item.service_medal_year {
                    catalog.add_service_medal(rarity, year, weapon_id, image);
                } else if item.is_tournament_coin {
                    catalog.add_tournament_coin(
                        rarity,
                        weapon_id,
                        item.tournament_event_id,
                        item.sticker_id,
                        image,
                    );
                } else {
                    catalog.add_collectible(rarity, weapon_id, item.quality == 1, image);
                }
            } else if type_name == "#CSGO_Tool_Name_TagTag" {
                catalog.add_name_tag(rarity, weapon_id, image);
            } else if item.is_patchable {
                catalog.add_agent(rarity, weapon_id, image);
            } else if type_name == "#CSGO_Type_WeaponCase" && item.crate_series.is_some() {
                let base_name = item.item_base_name.as_str();
                catalog.add_case(
                    rarity,
                    weapon_id,
                    item.crate_series.unwrap_or_default(),
                    item.tournament_event_id,
                    crate::tournament::TournamentMap::from_base_name(base_name),
                    base_name.contains("promo"),
                    image,
                );
            } else if type_name == "#CSGO_Tool_WeaponCase_KeyTag" {
                catalog.add_case_key(rarity, weapon_id, image);
            } else if let Some(tool) = item.econ_tool.as_deref() {
                match tool {
                    "season_pass" => catalog.add_operation_pass(rarity, weapon_id, image),
                    "stattrak_swap" => catalog.add_stattrak_swap_tool(rarity, weapon_id, image),
                    "fantoken" => {
                        if is_souvenir_token(weapon_id) {
                            catalog.add_souvenir_token(
                                rarity,
                                weapon_id,
                                item.tournament_event_id,
                                image,
                            );
                        } else {
                            catalog.add_viewer_pass(
                                rarity,
                                weapon_id,
                                item.tournament_event_id,
                                image,
                            );
                        }
                    }
                    "casket" => catalog.add_storage_unit(rarity, weapon_id, image),
                    // Unknown tool sub-types produce no entry.
                    _ => {}
                }
            } else if item.is_paintable {
                catalog.add_vanilla_skin(weapon_id, image);
            }
        }
    }

    /// Decode the alternate-icon table into the sorted association index
    /// the paint-kit pass range-scans.
    fn kit_weapon_index(&self) -> Vec<KitWeapon> {
        let mut kits_weapons: Vec<KitWeapon> = self
            .schema
            .alternate_icons()
            .iter()
            .filter_map(|record| KitWeapon::decode(record.key, &record.simple_name))
            .collect();
        kits_weapons.sort_by_key(|assoc| assoc.paint_kit);
        kits_weapons
    }

    fn resolve_name(&self, key: &str) -> ItemName {
        let text = self.localizer.resolve(key);
        ItemName::new(
            self.encoder.to_portable(&text),
            self.encoder.to_search_key(&text),
        )
    }
}

/// Corrected localization key for the one sticker whose upstream data is
/// broken; every other sticker resolves through its own key.
fn sticker_name_key(kit: &StickerKitRecord) -> &str {
    if kit.id == CORRECTED_STICKER_ID {
        CORRECTED_STICKER_KEY
    } else {
        &kit.item_name
    }
}

/// Whether a "fantoken" item definition is a souvenir token rather than a
/// viewer pass.
pub fn is_souvenir_token(weapon_id: u32) -> bool {
    SOUVENIR_TOKEN_WEAPONS.contains(&weapon_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::{Category, CategoryKind};
    use crate::schema::{
        AlternateIconRecord, ItemRecord, MusicKitRecord, PaintKitRecord, SchemaDocument,
        StickerKitRecord, TableLocalizer, Utf8NameEncoder,
    };

    fn build(doc: &SchemaDocument) -> Catalog {
        let localizer = TableLocalizer::default();
        CatalogBuilder::new(doc, &localizer, &Utf8NameEncoder).build()
    }

    fn doc_with_items(items: Vec<ItemRecord>) -> SchemaDocument {
        SchemaDocument::new(vec![], vec![], vec![], items, vec![], Default::default())
    }

    fn sticker_kit(id: u32, name: &str, rarity: u8) -> StickerKitRecord {
        StickerKitRecord {
            id,
            name: name.to_string(),
            item_name: format!("#StickerKit_{name}"),
            rarity,
            inventory_image: format!("econ/stickers/{name}"),
            tournament_event_id: 0,
            tournament_team_id: 0,
            tournament_player_id: 0,
        }
    }

    #[test]
    fn test_kit_weapon_decode() {
        // weapon 7, paint kit 44: key = 7 << 16 | 44 << 2
        let key = (7u64 << 16) | (44 << 2);
        let assoc = KitWeapon::decode(key, "econ/ak_fire").unwrap();
        assert_eq!(assoc.paint_kit, 44);
        assert_eq!(assoc.weapon_id, 7);

        // low bits set: excluded
        assert!(KitWeapon::decode(key | 1, "x").is_none());
        assert!(KitWeapon::decode(key | 2, "x").is_none());
        assert!(KitWeapon::decode(key | 3, "x").is_none());
    }

    #[test]
    fn test_music_kits_skip_reserved() {
        let doc = SchemaDocument::new(
            vec![
                MusicKitRecord {
                    id: 1,
                    name_localized: "#musickit_default".into(),
                    inventory_image: String::new(),
                },
                MusicKitRecord {
                    id: 2,
                    name_localized: "#musickit_defaultct".into(),
                    inventory_image: String::new(),
                },
                MusicKitRecord {
                    id: 3,
                    name_localized: "#musickit_valve_csgo_01".into(),
                    inventory_image: "econ/music".into(),
                },
            ],
            vec![],
            vec![],
            vec![],
            vec![],
            Default::default(),
        );
        let catalog = build(&doc);
        assert_eq!(catalog.iter_kind(CategoryKind::MusicKit).count(), 1);
        assert!(catalog.contains(CategoryKind::MusicKit, 3));
    }

    #[test]
    fn test_sticker_classification_by_name() {
        let doc = SchemaDocument::new(
            vec![],
            vec![
                sticker_kit(0, "default", 0),
                sticker_kit(500, "de_dust2_graffiti", 2),
                sticker_kit(501, "patch_phoenix", 3),
                sticker_kit(502, "stockh2021_teampatch_navi", 3),
                sticker_kit(503, "spray_banana", 1),
                sticker_kit(504, "katowice2014_ibp_gold", 4),
                sticker_kit(505, "cologne2014_fnatic", 3),
            ],
            vec![],
            vec![],
            vec![],
            Default::default(),
        );
        let catalog = build(&doc);

        assert!(!catalog.contains(CategoryKind::Sticker, 0));
        assert!(catalog.contains(CategoryKind::Graffiti, 500));
        assert!(catalog.contains(CategoryKind::Patch, 501));
        assert!(catalog.contains(CategoryKind::Patch, 502));
        assert!(catalog.contains(CategoryKind::Graffiti, 503));

        let golden = catalog.find(CategoryKind::Sticker, 504).unwrap();
        assert!(matches!(
            golden.category,
            Category::Sticker { is_golden: true, .. }
        ));
        assert_eq!(golden.rarity, Rarity::Mythical);

        let plain = catalog.find(CategoryKind::Sticker, 505).unwrap();
        assert!(matches!(
            plain.category,
            Category::Sticker { is_golden: false, .. }
        ));
    }

    #[test]
    fn test_sticker_name_trims_terminator() {
        let mut kit = sticker_kit(600, "patch_card", 1);
        kit.name.push('\0');
        let doc =
            SchemaDocument::new(vec![], vec![kit], vec![], vec![], vec![], Default::default());
        let catalog = build(&doc);
        assert!(catalog.contains(CategoryKind::Patch, 600));
    }

    #[test]
    fn test_corrected_sticker_localization() {
        let mut strings = std::collections::HashMap::new();
        strings.insert(
            CORRECTED_STICKER_KEY.to_string(),
            "Team Dignitas (Gold)".to_string(),
        );
        let mut kit = sticker_kit(242, "dhw2014_teamdignitas_gold", 4);
        kit.item_name = "#StickerKit_broken_key".into();
        let doc =
            SchemaDocument::new(vec![], vec![kit], vec![], vec![], vec![], Default::default());
        let localizer = TableLocalizer::new(strings);
        let catalog = CatalogBuilder::new(&doc, &localizer, &Utf8NameEncoder).build();

        let entry = catalog.find(CategoryKind::Sticker, 242).unwrap();
        assert_eq!(entry.name.for_display, "Team Dignitas (Gold)");
    }

    fn skin_doc() -> SchemaDocument {
        SchemaDocument::new(
            vec![],
            vec![],
            vec![
                PaintKitRecord {
                    id: 0,
                    item_name: "#PaintKit_Default".into(),
                    rarity: 0,
                    wear_remap_min: 0.0,
                    wear_remap_max: 1.0,
                },
                PaintKitRecord {
                    id: 44,
                    item_name: "#PaintKit_cu_fire".into(),
                    rarity: 4,
                    wear_remap_min: 0.06,
                    wear_remap_max: 0.8,
                },
                PaintKitRecord {
                    id: 9001,
                    item_name: "#PaintKit_workshop_default".into(),
                    rarity: 1,
                    wear_remap_min: 0.0,
                    wear_remap_max: 1.0,
                },
                PaintKitRecord {
                    id: 10_006,
                    item_name: "#PaintKit_gloves_king".into(),
                    rarity: 6,
                    wear_remap_min: 0.06,
                    wear_remap_max: 0.8,
                },
            ],
            vec![
                ItemRecord {
                    definition_index: 7,
                    rarity: 3,
                    ..Default::default()
                },
                ItemRecord {
                    definition_index: 5027,
                    rarity: 6,
                    ..Default::default()
                },
            ],
            vec![
                AlternateIconRecord {
                    key: (7 << 16) | (44 << 2),
                    simple_name: "econ/ak_fire".into(),
                },
                // low bits set: not an association
                AlternateIconRecord {
                    key: ((7 << 16) | (44 << 2)) + 1,
                    simple_name: "econ/ak_fire_large".into(),
                },
                // weapon without a resolvable item definition
                AlternateIconRecord {
                    key: (9999 << 16) | (44 << 2),
                    simple_name: "econ/unknown".into(),
                },
                AlternateIconRecord {
                    key: (5027 << 16) | ((10_006 & 0x3FFF) << 2),
                    simple_name: "econ/gloves_king".into(),
                },
            ],
            Default::default(),
        )
    }

    #[test]
    fn test_skin_combined_rarity() {
        let catalog = build(&skin_doc());

        // base 3 + kit 4 - 1 = 6, capped at 6
        let skin = catalog.find(CategoryKind::Skin, 7).unwrap();
        assert_eq!(skin.rarity, Rarity::Ancient);
        assert_eq!(catalog.paint_kit(skin).unwrap().id, 44);
        assert_eq!(skin.image, "econ/ak_fire");

        // exactly one association survives the flag/definition filters
        assert_eq!(catalog.iter_kind(CategoryKind::Skin).count(), 1);
    }

    #[test]
    fn test_sentinel_paint_kits_skipped() {
        let catalog = build(&skin_doc());
        assert!(catalog.paint_kits().iter().all(|kit| kit.id != 0));
        assert!(catalog
            .paint_kits()
            .iter()
            .all(|kit| kit.id != WORKSHOP_DEFAULT_PAINT_KIT));
    }

    #[test]
    fn test_glove_kits_use_kit_rarity() {
        let catalog = build(&skin_doc());
        let gloves = catalog.find(CategoryKind::Gloves, 5027).unwrap();
        assert_eq!(gloves.rarity, Rarity::Ancient);
        assert_eq!(catalog.paint_kit(gloves).unwrap().id, 10_006);
    }

    #[test]
    fn test_other_items_decision_tree() {
        let catalog = build(&doc_with_items(vec![
            // vanilla knife: knife marker + top red tier
            ItemRecord {
                definition_index: 500,
                item_type_name: "#CSGO_Type_Knife".into(),
                rarity: 6,
                inventory_image: Some("econ/knife".into()),
                ..Default::default()
            },
            // knife below the red tier falls through to nothing
            ItemRecord {
                definition_index: 42,
                item_type_name: "#CSGO_Type_Knife".into(),
                rarity: 0,
                inventory_image: Some("econ/knife_default".into()),
                ..Default::default()
            },
            // service medal
            ItemRecord {
                definition_index: 874,
                item_type_name: "#CSGO_Type_Collectible".into(),
                rarity: 5,
                service_medal_year: Some(2015),
                inventory_image: Some("econ/medal".into()),
                ..Default::default()
            },
            // tournament coin
            ItemRecord {
                definition_index: 875,
                item_type_name: "#CSGO_Type_Collectible".into(),
                rarity: 4,
                is_tournament_coin: true,
                tournament_event_id: 6,
                sticker_id: 120,
                inventory_image: Some("econ/coin".into()),
                ..Default::default()
            },
            // generic collectible, original quality
            ItemRecord {
                definition_index: 876,
                item_type_name: "#CSGO_Type_Collectible".into(),
                rarity: 3,
                quality: 1,
                inventory_image: Some("econ/pin".into()),
                ..Default::default()
            },
            // name tag
            ItemRecord {
                definition_index: 1200,
                item_type_name: "#CSGO_Tool_Name_TagTag".into(),
                rarity: 1,
                inventory_image: Some("econ/tag".into()),
                ..Default::default()
            },
            // agent
            ItemRecord {
                definition_index: 4613,
                item_type_name: "#Type_CustomPlayer".into(),
                rarity: 5,
                is_patchable: true,
                inventory_image: Some("econ/agent".into()),
                ..Default::default()
            },
            // souvenir case
            ItemRecord {
                definition_index: 4001,
                item_type_name: "#CSGO_Type_WeaponCase".into(),
                item_base_name: "crate_esl14_promo_de_dust2".into(),
                rarity: 1,
                crate_series: Some(30),
                tournament_event_id: 4,
                inventory_image: Some("econ/case".into()),
                ..Default::default()
            },
            // weapon case without a crate series falls through to nothing
            ItemRecord {
                definition_index: 4002,
                item_type_name: "#CSGO_Type_WeaponCase".into(),
                rarity: 1,
                inventory_image: Some("econ/case_x".into()),
                ..Default::default()
            },
            // case key
            ItemRecord {
                definition_index: 4003,
                item_type_name: "#CSGO_Tool_WeaponCase_KeyTag".into(),
                rarity: 1,
                inventory_image: Some("econ/key".into()),
                ..Default::default()
            },
            // econ tools
            ItemRecord {
                definition_index: 1314,
                econ_tool: Some("season_pass".into()),
                rarity: 1,
                inventory_image: Some("econ/pass".into()),
                ..Default::default()
            },
            ItemRecord {
                definition_index: 1324,
                econ_tool: Some("stattrak_swap".into()),
                rarity: 5,
                inventory_image: Some("econ/swap".into()),
                ..Default::default()
            },
            ItemRecord {
                definition_index: 1349,
                econ_tool: Some("fantoken".into()),
                rarity: 1,
                tournament_event_id: 12,
                inventory_image: Some("econ/token".into()),
                ..Default::default()
            },
            ItemRecord {
                definition_index: 1352,
                econ_tool: Some("fantoken".into()),
                rarity: 1,
                tournament_event_id: 12,
                inventory_image: Some("econ/viewerpass".into()),
                ..Default::default()
            },
            ItemRecord {
                definition_index: 1201,
                econ_tool: Some("casket".into()),
                rarity: 1,
                inventory_image: Some("econ/casket".into()),
                ..Default::default()
            },
            // unknown tool sub-type: dropped
            ItemRecord {
                definition_index: 1202,
                econ_tool: Some("mystery_tool".into()),
                rarity: 1,
                inventory_image: Some("econ/mystery".into()),
                ..Default::default()
            },
            // vanilla skin: paintable, nothing else matched
            ItemRecord {
                definition_index: 9,
                item_type_name: "#CSGO_Type_Rifle".into(),
                rarity: 2,
                is_paintable: true,
                inventory_image: Some("econ/awp".into()),
                ..Default::default()
            },
            // no inventory image: dropped before classification
            ItemRecord {
                definition_index: 9000,
                item_type_name: "#CSGO_Type_Collectible".into(),
                rarity: 3,
                ..Default::default()
            },
        ]));

        assert!(catalog.contains(CategoryKind::VanillaKnife, 500));
        assert!(!catalog.contains(CategoryKind::VanillaKnife, 42));

        let medal = catalog.find(CategoryKind::ServiceMedal, 874).unwrap();
        assert_eq!(catalog.service_medal_year(medal), Some(2015));

        let coin = catalog.find(CategoryKind::TournamentCoin, 875).unwrap();
        assert!(matches!(
            coin.category,
            Category::TournamentCoin {
                tournament_event_id: 6,
                default_sticker_id: 120,
            }
        ));

        let pin = catalog.find(CategoryKind::Collectible, 876).unwrap();
        assert!(matches!(
            pin.category,
            Category::Collectible { is_original: true }
        ));

        assert!(catalog.contains(CategoryKind::NameTag, 1200));
        assert!(catalog.contains(CategoryKind::Agent, 4613));

        let case = catalog.find(CategoryKind::Case, 4001).unwrap();
        assert!(matches!(
            case.category,
            Category::Case {
                crate_series: 30,
                tournament_event_id: 4,
                tournament_map: crate::tournament::TournamentMap::Dust2,
                is_promo: true,
            }
        ));
        assert!(case.is_souvenir_package());
        assert!(!catalog.contains(CategoryKind::Case, 4002));

        assert!(catalog.contains(CategoryKind::CaseKey, 4003));
        assert!(catalog.contains(CategoryKind::OperationPass, 1314));
        assert!(catalog.contains(CategoryKind::StatTrakSwapTool, 1324));
        assert!(catalog.contains(CategoryKind::SouvenirToken, 1349));
        assert!(catalog.contains(CategoryKind::ViewerPass, 1352));
        assert!(catalog.contains(CategoryKind::StorageUnitTool, 1201));
        assert!(!catalog.contains(CategoryKind::OperationPass, 1202));
        assert!(catalog.contains(CategoryKind::VanillaSkin, 9));

        // the imageless collectible never became an entry
        assert!(!catalog.contains(CategoryKind::Collectible, 9000));
    }

    fn two_finish_doc() -> SchemaDocument {
        SchemaDocument::new(
            vec![],
            vec![],
            vec![
                PaintKitRecord {
                    id: 44,
                    item_name: "#PaintKit_cu_fire".into(),
                    rarity: 4,
                    wear_remap_min: 0.06,
                    wear_remap_max: 0.8,
                },
                PaintKitRecord {
                    id: 180,
                    item_name: "#PaintKit_cu_rebel".into(),
                    rarity: 5,
                    wear_remap_min: 0.05,
                    wear_remap_max: 0.5,
                },
            ],
            vec![ItemRecord {
                definition_index: 7,
                rarity: 3,
                ..Default::default()
            }],
            vec![
                AlternateIconRecord {
                    key: (7 << 16) | (44 << 2),
                    simple_name: "econ/ak_fire".into(),
                },
                AlternateIconRecord {
                    key: (7 << 16) | (180 << 2),
                    simple_name: "econ/ak_rebel".into(),
                },
            ],
            Default::default(),
        )
    }

    #[test]
    fn test_entries_unique_by_kind_id_and_kit() {
        // one weapon, two finishes: both survive as distinct entries
        let catalog = build(&two_finish_doc());
        assert_eq!(catalog.iter_kind(CategoryKind::Skin).count(), 2);
        assert!(catalog.find_skin(7, 44).is_some());
        assert!(catalog.find_skin(7, 180).is_some());

        let mut seen = std::collections::HashSet::new();
        for entry in catalog.entries() {
            let kit = catalog.paint_kit(entry).map(|kit| kit.id);
            assert!(seen.insert((entry.kind(), entry.id, kit)));
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let doc = skin_doc();
        let a = build(&doc);
        let b = build(&doc);
        assert_eq!(a.entries(), b.entries());
        assert_eq!(a.paint_kits(), b.paint_kits());
    }
}
