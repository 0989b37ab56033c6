//! JSON-backed schema provider.
//!
//! A `SchemaDocument` is a flat JSON export of the schema collections plus
//! an optional localization string table. It exists so the library has one
//! concrete [`SchemaProvider`] without linking against a game process.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{
    AlternateIconRecord, ItemRecord, MusicKitRecord, PaintKitRecord, SchemaProvider,
    StickerKitRecord, TableLocalizer,
};

/// Errors that can occur while loading a schema document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Failed to read schema document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed schema document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A complete schema export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub music_kits: Vec<MusicKitRecord>,
    #[serde(default)]
    pub sticker_kits: Vec<StickerKitRecord>,
    #[serde(default)]
    pub paint_kits: Vec<PaintKitRecord>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub alternate_icons: Vec<AlternateIconRecord>,
    /// Localization table keyed without the '#' prefix.
    #[serde(default)]
    pub strings: HashMap<String, String>,

    /// Definition-index lookup, built lazily on load.
    #[serde(skip)]
    item_index: HashMap<u32, usize>,
}

impl SchemaDocument {
    /// Assemble a document from already-parsed collections.
    pub fn new(
        music_kits: Vec<MusicKitRecord>,
        sticker_kits: Vec<StickerKitRecord>,
        paint_kits: Vec<PaintKitRecord>,
        items: Vec<ItemRecord>,
        alternate_icons: Vec<AlternateIconRecord>,
        strings: HashMap<String, String>,
    ) -> Self {
        let mut doc = Self {
            music_kits,
            sticker_kits,
            paint_kits,
            items,
            alternate_icons,
            strings,
            item_index: HashMap::new(),
        };
        doc.reindex();
        doc
    }

    /// Parse a schema document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let mut doc: SchemaDocument = serde_json::from_str(json)?;
        doc.reindex();
        Ok(doc)
    }

    /// Parse a schema document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, SchemaError> {
        let mut doc: SchemaDocument = serde_json::from_reader(reader)?;
        doc.reindex();
        Ok(doc)
    }

    /// Localizer over the document's embedded string table.
    pub fn localizer(&self) -> TableLocalizer {
        TableLocalizer::new(self.strings.clone())
    }

    fn reindex(&mut self) {
        self.item_index = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.definition_index, i))
            .collect();
    }
}

impl SchemaProvider for SchemaDocument {
    fn music_kits(&self) -> &[MusicKitRecord] {
        &self.music_kits
    }

    fn sticker_kits(&self) -> &[StickerKitRecord] {
        &self.sticker_kits
    }

    fn paint_kits(&self) -> &[PaintKitRecord] {
        &self.paint_kits
    }

    fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    fn alternate_icons(&self) -> &[AlternateIconRecord] {
        &self.alternate_icons
    }

    fn item_definition(&self, definition_index: u32) -> Option<&ItemRecord> {
        self.item_index
            .get(&definition_index)
            .map(|&i| &self.items[i])
    }
}
