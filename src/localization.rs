//! Translation lookup for the overview's display strings

use crate::config::ConfigError;
use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Translation keys used by the overview window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    LoadoutTab,
    InventoryTab,
    LoadoutTabTip1,
    LoadoutTabTip2,
    Tips,
    Weapons,
    Apparels,
    Miscellaneous,
    NoLoadouts,
    EmptyInventory,
    /// Used to measure the initial window width
    TenCharsString,
}

impl UiText {
    pub fn key(self) -> &'static str {
        match self {
            UiText::LoadoutTab => "AwesomeInventory_LoadoutTab",
            UiText::InventoryTab => "AwesomeInventory_InventoryTab",
            UiText::LoadoutTabTip1 => "AwesomeInventory_LoadoutTabTip1",
            UiText::LoadoutTabTip2 => "AwesomeInventory_LoadoutTabTip2",
            UiText::Tips => "AwesomeInventory_Tips",
            UiText::Weapons => "AwesomeInventory_Weapons",
            UiText::Apparels => "AwesomeInventory_Apparels",
            UiText::Miscellaneous => "AwesomeInventory_Miscellaneous",
            UiText::NoLoadouts => "AwesomeInventory_NoLoadouts",
            UiText::EmptyInventory => "AwesomeInventory_EmptyInventory",
            UiText::TenCharsString => "AwesomeInventory_TenCharsString",
        }
    }
}

/// Host translation lookup
pub trait Translator {
    /// Resolve a key, or `None` if the host has no entry for it
    fn translate(&self, key: &str) -> Option<String>;

    /// Resolve a key, falling back to the key itself
    fn translate_or_key(&self, key: &str) -> String {
        self.translate(key).unwrap_or_else(|| key.to_string())
    }

    fn text(&self, text: UiText) -> String {
        self.translate_or_key(text.key())
    }

    /// Resolve a key and substitute `{0}`, `{1}`... with `args`
    fn format_key(&self, key: &str, args: &[&str]) -> String {
        let mut resolved = self.translate_or_key(key);
        for (index, arg) in args.iter().enumerate() {
            resolved = resolved.replace(&format!("{{{}}}", index), arg);
        }
        resolved
    }
}

/// In-memory translation table, usually loaded from a TOML file of strings
#[derive(Debug, Default)]
pub struct TranslationTable {
    entries: FxHashMap<String, String>,
    // Keys already reported as missing, so each is logged once
    reported_missing: Mutex<FxHashSet<String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// English strings for every [`UiText`] key
    pub fn english() -> Self {
        let mut table = Self::new();
        table.insert(UiText::LoadoutTab.key(), "Loadouts");
        table.insert(UiText::InventoryTab.key(), "Inventory");
        table.insert(
            UiText::LoadoutTabTip1.key(),
            "Loadouts are checked against what the character carries right now.",
        );
        table.insert(
            UiText::LoadoutTabTip2.key(),
            "Switch tabs to refresh the overview after changing gear.",
        );
        table.insert(UiText::Tips.key(), "Tip: {0}");
        table.insert(UiText::Weapons.key(), "Weapons");
        table.insert(UiText::Apparels.key(), "Apparel");
        table.insert(UiText::Miscellaneous.key(), "Miscellaneous");
        table.insert(UiText::NoLoadouts.key(), "No loadouts defined.");
        table.insert(UiText::EmptyInventory.key(), "Carrying nothing.");
        table.insert(UiText::TenCharsString.key(), "abcdefghij");
        table
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a flat TOML table of `key = "text"` entries
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let entries: FxHashMap<String, String> = toml::from_str(raw).map_err(|e| ConfigError::Parse {
            source_name: "translations".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            entries,
            reported_missing: Mutex::new(FxHashSet::default()),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = Self::from_toml_str(&raw)?;
        log::debug!("[TranslationTable] loaded {} keys from {}", table.len(), path.display());
        Ok(table)
    }
}

impl Translator for TranslationTable {
    fn translate(&self, key: &str) -> Option<String> {
        let found = self.entries.get(key).cloned();
        if found.is_none() && self.reported_missing.lock().insert(key.to_string()) {
            log::warn!("[TranslationTable] missing translation for {}", key);
        }
        found
    }
}
