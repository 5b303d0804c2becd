pub mod config;
pub mod inventory;
pub mod item;
pub mod localization;
pub mod ui;

use parking_lot::RwLock;
use std::sync::Arc;

pub use config::{ConfigError, OverviewConfig};
pub use inventory::{
    build_grouped_inventory, CharacterInventory, GroupedInventory, InventoryError, InventoryResult,
    InventorySource, Loadout,
};
pub use item::{BodyPartGroupDef, Item, ItemCategory, ItemDef, ItemDefRegistry, ItemId};
pub use localization::{TranslationTable, Translator, UiText};
pub use ui::{
    DrawSurface, InventoryOverviewDialog, OverviewTab, RenderOutcome, TabError, TabId, TabRegistry,
    UIRect, UIRenderer,
};

/// Register the standard overview tabs, loadouts first
pub fn register_default_tabs(
    registry: &mut TabRegistry,
    inventory: Arc<RwLock<CharacterInventory>>,
    loadouts: Arc<RwLock<Vec<Loadout>>>,
    translator: Arc<dyn Translator>,
    config: &OverviewConfig,
) -> ui::RegistryResult<(TabId, TabId)> {
    let loadout_tab = registry.register_tab(Box::new(ui::LoadoutTab::new(
        loadouts,
        Arc::clone(&inventory),
        Arc::clone(&translator),
        config.list_spacing,
    )))?;
    let inventory_tab = registry.register_tab(Box::new(ui::InventoryTab::new(
        inventory,
        translator,
        config.list_spacing,
    )))?;
    Ok((loadout_tab, inventory_tab))
}
