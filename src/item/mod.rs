pub mod item_type;
pub mod item_registry;

pub use item_type::{ApparelProperties, BodyPartGroupDef, Item, ItemCategory, ItemDef, ItemId};
pub use item_registry::ItemDefRegistry;
