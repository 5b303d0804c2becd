use super::source::CharacterInventory;
use serde::{Deserialize, Serialize};

/// One wanted def in a loadout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutEntry {
    pub def_name: String,
    pub count: u32,
}

impl LoadoutEntry {
    pub fn new(def_name: impl Into<String>, count: u32) -> Self {
        Self {
            def_name: def_name.into(),
            count,
        }
    }
}

/// A named set of items a character should carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<LoadoutEntry>,
}

/// How far an inventory satisfies one loadout entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStatus {
    pub def_name: String,
    pub wanted: u32,
    pub held: u32,
}

impl EntryStatus {
    pub fn is_satisfied(&self) -> bool {
        self.held >= self.wanted
    }
}

impl Loadout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, def_name: impl Into<String>, count: u32) -> Self {
        self.entries.push(LoadoutEntry::new(def_name, count));
        self
    }

    /// Compare each entry against what the inventory holds
    pub fn status(&self, inventory: &CharacterInventory) -> Vec<EntryStatus> {
        self.entries
            .iter()
            .map(|entry| EntryStatus {
                def_name: entry.def_name.clone(),
                wanted: entry.count,
                held: inventory.count_def(&entry.def_name),
            })
            .collect()
    }

    pub fn is_satisfied_by(&self, inventory: &CharacterInventory) -> bool {
        self.status(inventory).iter().all(EntryStatus::is_satisfied)
    }
}
