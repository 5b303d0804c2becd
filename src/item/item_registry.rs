use crate::config::ConfigError;
use crate::item::{BodyPartGroupDef, Item, ItemDef, ItemId};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Body part groups shipped with the base game, with their list orders
pub const TORSO: (&str, i32) = ("Torso", 10);
pub const LEGS: (&str, i32) = ("Legs", 8);
pub const FULL_HEAD: (&str, i32) = ("FullHead", 5);
pub const UPPER_HEAD: (&str, i32) = ("UpperHead", 5);
pub const HANDS: (&str, i32) = ("Hands", 5);
pub const FEET: (&str, i32) = ("Feet", 3);

#[derive(Debug, Deserialize)]
struct DefFile {
    #[serde(default)]
    defs: Vec<ItemDef>,
}

/// Registry for item definitions, keyed by def name
pub struct ItemDefRegistry {
    defs: FxHashMap<String, Arc<ItemDef>>,
    next_item_id: u32,
}

impl ItemDefRegistry {
    pub fn new() -> Self {
        Self {
            defs: FxHashMap::default(),
            next_item_id: 1,
        }
    }

    /// Register a definition, replacing any previous def with the same name
    pub fn register(&mut self, def: ItemDef) -> Arc<ItemDef> {
        let def = Arc::new(def);
        if self
            .defs
            .insert(def.def_name.clone(), Arc::clone(&def))
            .is_some()
        {
            log::debug!("[ItemDefRegistry] replaced def {}", def.def_name);
        }
        def
    }

    /// Get a definition by name
    pub fn get_def(&self, def_name: &str) -> Option<Arc<ItemDef>> {
        self.defs.get(def_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Spawn a fresh item instance of the named def
    pub fn spawn(&mut self, def_name: &str) -> Option<Item> {
        let def = self.get_def(def_name)?;
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        Some(Item::new(id, def))
    }

    /// Register every def in a TOML document of the form `[[defs]] ...`
    pub fn load_toml_str(&mut self, raw: &str) -> Result<usize, ConfigError> {
        let file: DefFile = toml::from_str(raw).map_err(|e| ConfigError::Parse {
            source_name: "item defs".to_string(),
            message: e.to_string(),
        })?;
        let count = file.defs.len();
        for def in file.defs {
            self.register(def);
        }
        log::debug!("[ItemDefRegistry] loaded {} defs", count);
        Ok(count)
    }

    /// Register every def in a TOML def file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_toml_str(&raw)
    }

    /// Initialize with default defs
    pub fn init_default_defs(&mut self) {
        let group = |(name, order): (&str, i32)| BodyPartGroupDef::new(name, order);

        // Weapons
        self.register(ItemDef::weapon("Gun_BoltActionRifle", "bolt-action rifle"));
        self.register(ItemDef::weapon("Bow_Short", "short bow"));
        self.register(ItemDef::weapon("MeleeWeapon_LongSword", "longsword"));
        self.register(ItemDef::weapon("MeleeWeapon_Knife", "knife"));

        // Apparel
        self.register(ItemDef::apparel(
            "Apparel_Parka",
            "parka",
            vec![group(TORSO), group(LEGS)],
        ));
        self.register(ItemDef::apparel("Apparel_BasicShirt", "button-down shirt", vec![group(TORSO)]));
        self.register(ItemDef::apparel("Apparel_Pants", "pants", vec![group(LEGS)]));
        self.register(ItemDef::apparel("Apparel_CowboyHat", "cowboy hat", vec![group(UPPER_HEAD)]));
        self.register(ItemDef::apparel(
            "Apparel_SimpleHelmet",
            "simple helmet",
            vec![group(FULL_HEAD)],
        ));
        self.register(ItemDef::apparel("Apparel_Gloves", "gloves", vec![group(HANDS)]));
        self.register(ItemDef::apparel("Apparel_Boots", "boots", vec![group(FEET)]));

        // Miscellaneous
        self.register(ItemDef::miscellaneous("MealSimple", "simple meal"));
        self.register(ItemDef::miscellaneous("MedicineHerbal", "herbal medicine"));
        self.register(ItemDef::miscellaneous("Canteen", "canteen"));
        self.register(ItemDef::miscellaneous("Silver", "silver"));
    }
}

impl Default for ItemDefRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.init_default_defs();
        registry
    }
}
