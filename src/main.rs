//! Inventory overview demo
//! Builds a sample character, opens the overview window on a recording
//! surface, clicks through both tabs and prints each frame's draw calls.
//!
//! Usage: inventory-overview [overview.toml] [translations.toml]

use anyhow::{Context, Result};
use inventory_overview::inventory::Loadout;
use inventory_overview::ui::UIRenderer;
use inventory_overview::{
    register_default_tabs, CharacterInventory, InventoryOverviewDialog, ItemDefRegistry, OverviewConfig,
    TabRegistry, TranslationTable, Translator, UIRect,
};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

const SCREEN_WIDTH: f32 = 1600.0;
const SCREEN_HEIGHT: f32 = 900.0;

fn sample_inventory(defs: &mut ItemDefRegistry) -> Result<CharacterInventory> {
    let mut inventory = CharacterInventory::new("Tynan");
    for (def_name, count) in [
        ("MeleeWeapon_Knife", 1),
        ("Apparel_CowboyHat", 1),
        ("Apparel_Parka", 1),
        ("MealSimple", 4),
        ("Apparel_Gloves", 1),
        ("Gun_BoltActionRifle", 1),
        ("Silver", 120),
        ("Apparel_Pants", 1),
    ] {
        let item = defs
            .spawn(def_name)
            .with_context(|| format!("unknown item def {}", def_name))?;
        inventory.add_item(item.with_stack_count(count));
    }
    Ok(inventory)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,inventory_overview=debug"))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => OverviewConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => OverviewConfig::default(),
    };
    let translator: Arc<dyn Translator> = match args.next() {
        Some(path) => Arc::new(TranslationTable::load(&path).with_context(|| format!("loading {}", path))?),
        None => Arc::new(TranslationTable::english()),
    };

    let mut defs = ItemDefRegistry::default();
    let inventory = Arc::new(RwLock::new(sample_inventory(&mut defs)?));
    let loadouts = Arc::new(RwLock::new(vec![
        Loadout::new("Caravan")
            .with_entry("MealSimple", 6)
            .with_entry("Apparel_Parka", 1),
        Loadout::new("Hunting").with_entry("Gun_BoltActionRifle", 1),
    ]));

    let mut registry = TabRegistry::new();
    let (_, inventory_tab) = register_default_tabs(
        &mut registry,
        inventory,
        loadouts,
        Arc::clone(&translator),
        &config,
    )?;

    let mut surface = UIRenderer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut dialog = InventoryOverviewDialog::new(config, translator);
    let size = dialog.initial_size(&surface);
    let in_rect = UIRect::new(0.0, 0.0, size.x, size.y);
    log::info!("Opening overview at {}x{}", size.x, size.y);

    for (id, e) in dialog.pre_open(&mut registry) {
        log::warn!("{} will render blank: {}", id, e);
    }

    // Frame 0 shows loadouts; before frame 1 the inventory tab button is clicked
    for frame in 0..2 {
        surface.begin_frame();
        if frame == 1 {
            let button = dialog
                .tab_buttons(&registry, &surface, in_rect)
                .into_iter()
                .find(|(id, _, _)| *id == inventory_tab)
                .map(|(_, _, rect)| rect)
                .context("inventory tab has no button")?;
            surface.click_at(button.x + 1.0, button.y + 1.0);
        }

        let report = dialog.do_window_contents(&mut registry, &mut surface, in_rect, Instant::now());
        log::info!(
            "Frame {}: active {:?}, outcome {:?}",
            frame,
            registry.active_label(),
            report.outcome
        );
        println!("{}", serde_json::to_string_pretty(surface.elements())?);
    }

    Ok(())
}
