pub mod inventory_tab;
pub mod loadout_tab;

pub use inventory_tab::InventoryTab;
pub use loadout_tab::LoadoutTab;
