use crate::item::{Item, ItemCategory, ItemId};

/// Host-side view of a character's possessions, already classified
pub trait InventorySource {
    /// Equipped and carried weapons
    fn weapons(&self) -> Vec<Item>;
    /// Worn and carried apparel
    fn apparels(&self) -> Vec<Item>;
    /// Everything else
    fn miscellaneous(&self) -> Vec<Item>;
}

/// Possessions of one character, kept in the order they were added
#[derive(Debug, Clone, Default)]
pub struct CharacterInventory {
    name: String,
    weapons: Vec<Item>,
    apparels: Vec<Item>,
    miscellaneous: Vec<Item>,
}

impl CharacterInventory {
    /// Create an empty inventory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an item to the sequence matching its category
    pub fn add_item(&mut self, item: Item) {
        self.items_mut(item.category()).push(item);
    }

    /// Remove an item by id, returning it if it was held
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        for category in ItemCategory::ALL {
            let items = self.items_mut(category);
            if let Some(index) = items.iter().position(|item| item.id == id) {
                return Some(items.remove(index));
            }
        }
        None
    }

    /// Count items of a def, summing stack counts
    pub fn count_def(&self, def_name: &str) -> u32 {
        self.weapons
            .iter()
            .chain(&self.apparels)
            .chain(&self.miscellaneous)
            .filter(|item| item.def.def_name == def_name)
            .map(|item| item.stack_count)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.weapons.len() + self.apparels.len() + self.miscellaneous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all items
    pub fn clear(&mut self) {
        self.weapons.clear();
        self.apparels.clear();
        self.miscellaneous.clear();
    }

    fn items_mut(&mut self, category: ItemCategory) -> &mut Vec<Item> {
        match category {
            ItemCategory::Weapon => &mut self.weapons,
            ItemCategory::Apparel => &mut self.apparels,
            ItemCategory::Miscellaneous => &mut self.miscellaneous,
        }
    }
}

impl InventorySource for CharacterInventory {
    fn weapons(&self) -> Vec<Item> {
        self.weapons.clone()
    }

    fn apparels(&self) -> Vec<Item> {
        self.apparels.clone()
    }

    fn miscellaneous(&self) -> Vec<Item> {
        self.miscellaneous.clone()
    }
}
