use crate::inventory::{GroupedInventory, InventorySource};
use crate::item::ItemCategory;
use crate::localization::{Translator, UiText};
use crate::ui::draw::{DrawSurface, UIRect};
use crate::ui::tab::{OverviewTab, TabError, TabResult};
use parking_lot::RwLock;
use std::sync::Arc;

const ITEM_INDENT: f32 = 12.0;

/// Lists everything a character holds, grouped by category
pub struct InventoryTab<S: InventorySource> {
    source: Arc<RwLock<S>>,
    translator: Arc<dyn Translator>,
    row_height: f32,
    grouped: Option<GroupedInventory>,
}

impl<S: InventorySource> InventoryTab<S> {
    pub fn new(source: Arc<RwLock<S>>, translator: Arc<dyn Translator>, row_height: f32) -> Self {
        Self {
            source,
            translator,
            row_height,
            grouped: None,
        }
    }

    /// Grouping built by the last successful refresh
    pub fn grouped(&self) -> Option<&GroupedInventory> {
        self.grouped.as_ref()
    }

    fn refresh(&mut self) -> Result<(), TabError> {
        // Drop the stale grouping first so a failure never shows old data
        self.grouped = None;
        let grouped = GroupedInventory::from_source(&*self.source.read())?;
        log::debug!("[InventoryTab] regrouped {} items", grouped.len());
        self.grouped = Some(grouped);
        Ok(())
    }

    fn header(&self, category: ItemCategory) -> String {
        let text = match category {
            ItemCategory::Weapon => UiText::Weapons,
            ItemCategory::Apparel => UiText::Apparels,
            ItemCategory::Miscellaneous => UiText::Miscellaneous,
        };
        self.translator.text(text)
    }
}

impl<S: InventorySource> OverviewTab for InventoryTab<S> {
    fn label(&self) -> String {
        self.translator.text(UiText::InventoryTab)
    }

    fn pre_open(&mut self) -> TabResult<()> {
        self.refresh().map_err(|e| TabError::PreOpen {
            tab: self.label(),
            message: e.to_string(),
        })
    }

    fn pre_switch(&mut self) -> TabResult<()> {
        self.refresh().map_err(|e| TabError::PreSwitch {
            tab: self.label(),
            message: e.to_string(),
        })
    }

    fn draw_content(&mut self, surface: &mut dyn DrawSurface, region: UIRect) -> TabResult<()> {
        if self.grouped.is_none() {
            self.refresh()?;
        }
        let Some(grouped) = self.grouped.as_ref() else {
            return Ok(());
        };

        let mut rows: Vec<(f32, String)> = Vec::with_capacity(grouped.len() + ItemCategory::ALL.len());
        if grouped.is_empty() {
            rows.push((0.0, self.translator.text(UiText::EmptyInventory)));
        }
        let mut current_category = None;
        for item in grouped.iter_ordered() {
            if current_category != Some(item.category()) {
                current_category = Some(item.category());
                rows.push((0.0, self.header(item.category())));
            }
            let text = if item.stack_count > 1 {
                format!("{} x{}", item.label(), item.stack_count)
            } else {
                item.label().to_string()
            };
            rows.push((ITEM_INDENT, text));
        }

        let mut y = region.y;
        for (indent, text) in rows {
            if y + self.row_height > region.y_max() {
                break;
            }
            surface.label(
                UIRect::new(region.x + indent, y, region.width - indent, self.row_height),
                &text,
            );
            y += self.row_height;
        }
        Ok(())
    }
}
