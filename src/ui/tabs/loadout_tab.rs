use crate::inventory::{CharacterInventory, EntryStatus, Loadout};
use crate::localization::{Translator, UiText};
use crate::ui::draw::{DrawSurface, UIColor, UIRect};
use crate::ui::tab::{OverviewTab, TabResult};
use parking_lot::RwLock;
use std::sync::Arc;

const ENTRY_INDENT: f32 = 12.0;
const MISSING_MARKER_WIDTH: f32 = 4.0;

struct LoadoutRow {
    name: String,
    entries: Vec<EntryStatus>,
}

/// Shows each loadout and how much of it the character carries
pub struct LoadoutTab {
    loadouts: Arc<RwLock<Vec<Loadout>>>,
    inventory: Arc<RwLock<CharacterInventory>>,
    translator: Arc<dyn Translator>,
    row_height: f32,
    rows: Vec<LoadoutRow>,
}

impl LoadoutTab {
    pub fn new(
        loadouts: Arc<RwLock<Vec<Loadout>>>,
        inventory: Arc<RwLock<CharacterInventory>>,
        translator: Arc<dyn Translator>,
        row_height: f32,
    ) -> Self {
        Self {
            loadouts,
            inventory,
            translator,
            row_height,
            rows: Vec::new(),
        }
    }

    fn refresh(&mut self) {
        let inventory = self.inventory.read();
        self.rows = self
            .loadouts
            .read()
            .iter()
            .map(|loadout| LoadoutRow {
                name: loadout.name.clone(),
                entries: loadout.status(&inventory),
            })
            .collect();
    }
}

impl OverviewTab for LoadoutTab {
    fn label(&self) -> String {
        self.translator.text(UiText::LoadoutTab)
    }

    fn pre_open(&mut self) -> TabResult<()> {
        self.refresh();
        Ok(())
    }

    fn pre_switch(&mut self) -> TabResult<()> {
        self.refresh();
        Ok(())
    }

    fn draw_content(&mut self, surface: &mut dyn DrawSurface, region: UIRect) -> TabResult<()> {
        let row = |y: f32, indent: f32| UIRect::new(region.x + indent, y, region.width - indent, self.row_height);
        let fits = |y: f32| y + self.row_height <= region.y_max();

        if self.rows.is_empty() {
            if fits(region.y) {
                surface.label(row(region.y, 0.0), &self.translator.text(UiText::NoLoadouts));
            }
            return Ok(());
        }

        let mut y = region.y;
        'loadouts: for loadout in &self.rows {
            if !fits(y) {
                break;
            }
            let satisfied = loadout.entries.iter().filter(|entry| entry.is_satisfied()).count();
            surface.label(
                row(y, 0.0),
                &format!("{} ({}/{})", loadout.name, satisfied, loadout.entries.len()),
            );
            y += self.row_height;

            for entry in &loadout.entries {
                if !fits(y) {
                    break 'loadouts;
                }
                if !entry.is_satisfied() {
                    surface.draw_rect(
                        UIRect::new(region.x, y, MISSING_MARKER_WIDTH, self.row_height),
                        UIColor::new(0.8, 0.2, 0.2, 1.0),
                    );
                }
                surface.label(
                    row(y, ENTRY_INDENT),
                    &format!("{} {}/{}", entry.def_name, entry.held, entry.wanted),
                );
                y += self.row_height;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDefRegistry;
    use crate::localization::TranslationTable;
    use crate::ui::draw::{UIElement, UIRenderer};

    #[test]
    fn test_draws_loadout_status() {
        let mut registry = ItemDefRegistry::default();
        let mut inventory = CharacterInventory::new("Hunter");
        inventory.add_item(registry.spawn("Bow_Short").expect("default def"));

        let loadouts = vec![Loadout::new("Hunting")
            .with_entry("Bow_Short", 1)
            .with_entry("MealSimple", 2)];
        let mut tab = LoadoutTab::new(
            Arc::new(RwLock::new(loadouts)),
            Arc::new(RwLock::new(inventory)),
            Arc::new(TranslationTable::english()),
            20.0,
        );
        let mut renderer = UIRenderer::new(800.0, 600.0);

        tab.pre_open().expect("refresh never fails");
        tab.draw_content(&mut renderer, UIRect::new(0.0, 0.0, 300.0, 200.0))
            .expect("draws");

        assert_eq!(
            renderer.label_texts(),
            vec!["Hunting (1/2)", "Bow_Short 1/1", "MealSimple 0/2"]
        );
        let markers = renderer
            .elements()
            .iter()
            .filter(|element| matches!(element, UIElement::Rect { .. }))
            .count();
        assert_eq!(markers, 1);
    }

    #[test]
    fn test_no_loadouts_message() {
        let mut tab = LoadoutTab::new(
            Arc::new(RwLock::new(Vec::new())),
            Arc::new(RwLock::new(CharacterInventory::new("Idle"))),
            Arc::new(TranslationTable::english()),
            20.0,
        );
        let mut renderer = UIRenderer::new(800.0, 600.0);
        tab.pre_open().expect("refresh never fails");
        tab.draw_content(&mut renderer, UIRect::new(0.0, 0.0, 300.0, 200.0))
            .expect("draws");
        assert_eq!(renderer.label_texts(), vec!["No loadouts defined."]);
    }

    #[test]
    fn test_pre_switch_sees_new_items() {
        let mut registry = ItemDefRegistry::default();
        let inventory = Arc::new(RwLock::new(CharacterInventory::new("Hauler")));
        let mut tab = LoadoutTab::new(
            Arc::new(RwLock::new(vec![Loadout::new("Trade").with_entry("Silver", 100)])),
            Arc::clone(&inventory),
            Arc::new(TranslationTable::english()),
            20.0,
        );
        tab.pre_open().expect("refresh never fails");
        assert_eq!(tab.rows[0].entries[0].held, 0);

        inventory
            .write()
            .add_item(registry.spawn("Silver").expect("default def").with_stack_count(100));
        tab.pre_switch().expect("refresh never fails");
        assert!(tab.rows[0].entries[0].is_satisfied());
    }
}
