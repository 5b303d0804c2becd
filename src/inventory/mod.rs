pub mod grouped;
pub mod loadout;
pub mod source;

pub use grouped::{build_grouped_inventory, CategoryCounts, GroupedInventory};
pub use loadout::{EntryStatus, Loadout, LoadoutEntry};
pub use source::{CharacterInventory, InventorySource};

use crate::item::{ItemCategory, ItemId};

/// Result type for grouping operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Structural problems in the items handed to the grouping model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Apparel {item} ({def_name}) has no body part group to sort by")]
    MalformedApparel { item: ItemId, def_name: String },

    #[error("Item {item} is a {found} but was supplied as a {expected}")]
    CategoryMismatch {
        item: ItemId,
        expected: ItemCategory,
        found: ItemCategory,
    },
}
