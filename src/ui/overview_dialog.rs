//! The inventory overview window: a row of tab buttons, a separator, the
//! active tab's content, and a rotating tip along the bottom edge.

use crate::config::OverviewConfig;
use crate::localization::{Translator, UiText};
use crate::ui::draw::{DrawSurface, UIRect};
use crate::ui::tab::TabError;
use crate::ui::tab_registry::{RenderOutcome, TabId, TabRegistry};
use crate::ui::tip_displayer::TipDisplayer;
use glam::Vec2;
use std::sync::Arc;
use std::time::Instant;

/// Window behaviour flags requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSettings {
    pub close_button: bool,
    pub force_pause: bool,
    pub absorb_input_around_window: bool,
    pub close_on_clicked_outside: bool,
    pub resizeable: bool,
    pub draggable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            close_button: true,
            force_pause: true,
            absorb_input_around_window: true,
            close_on_clicked_outside: true,
            resizeable: true,
            draggable: true,
        }
    }
}

/// Result of drawing one frame of the window
#[derive(Debug)]
pub struct FrameReport {
    /// Tab that became active through a button click this frame
    pub selected: Option<TabId>,
    /// Region handed to the active tab
    pub content_region: UIRect,
    pub outcome: RenderOutcome,
}

pub struct InventoryOverviewDialog {
    settings: WindowSettings,
    config: OverviewConfig,
    translator: Arc<dyn Translator>,
    tips: TipDisplayer,
}

impl InventoryOverviewDialog {
    pub fn new(config: OverviewConfig, translator: Arc<dyn Translator>) -> Self {
        let tips = TipDisplayer::new(
            vec![
                translator.text(UiText::LoadoutTabTip1),
                translator.text(UiText::LoadoutTabTip2),
            ],
            config.tip_interval(),
        );
        Self {
            settings: WindowSettings::default(),
            config,
            translator,
            tips,
        }
    }

    pub fn settings(&self) -> WindowSettings {
        self.settings
    }

    /// Eleven ten-character strings wide, half the screen high
    pub fn initial_size(&self, surface: &dyn DrawSurface) -> Vec2 {
        let ten_chars = self.translator.text(UiText::TenCharsString);
        let width = surface.text_width(&ten_chars.repeat(self.config.width_in_ten_char_strings as usize));
        Vec2::new(width, surface.screen_size().y * self.config.height_fraction)
    }

    /// Called once before the window becomes visible
    pub fn pre_open(&mut self, registry: &mut TabRegistry) -> Vec<(TabId, TabError)> {
        registry.pre_open()
    }

    /// Tab buttons laid out left to right along the top of `in_rect`,
    /// wrapping to a new row when a button would pass the right edge
    pub fn tab_buttons(
        &self,
        registry: &TabRegistry,
        surface: &dyn DrawSurface,
        in_rect: UIRect,
    ) -> Vec<(TabId, String, UIRect)> {
        let spacing = self.config.list_spacing;
        let (mut x, mut y) = (in_rect.x, in_rect.y);
        registry
            .labels()
            .into_iter()
            .map(|(id, label)| {
                let width = surface.text_width(&label) + self.config.tab_button_padding;
                if x > in_rect.x && x + width > in_rect.x_max() {
                    x = in_rect.x;
                    y += spacing;
                }
                let rect = UIRect::new(x, y, width, spacing);
                x += width;
                (id, label, rect)
            })
            .collect()
    }

    /// Draw the window contents into `in_rect`
    pub fn do_window_contents(
        &mut self,
        registry: &mut TabRegistry,
        surface: &mut dyn DrawSurface,
        in_rect: UIRect,
        now: Instant,
    ) -> FrameReport {
        let spacing = self.config.list_spacing;

        let mut clicked = None;
        let mut row_bottom = in_rect.y + spacing;
        for (id, label, rect) in self.tab_buttons(registry, &*surface, in_rect) {
            row_bottom = row_bottom.max(rect.y_max());
            if surface.button_text(rect, &label) {
                clicked = Some(id);
            }
        }

        let mut selected = None;
        if let Some(id) = clicked {
            let previous = registry.active_tab();
            match registry.select_tab(id) {
                Ok(()) if previous != Some(id) => selected = Some(id),
                Ok(()) => {}
                Err(e) => log::error!("[InventoryOverviewDialog] {}", e),
            }
        }

        let rolling_y = row_bottom + spacing;
        surface.line_horizontal(in_rect.x, rolling_y, in_rect.width);

        let content_region = in_rect
            .with_y_min(rolling_y + self.config.gap_tiny)
            .with_y_max(in_rect.y_max() - spacing);
        let outcome = registry.render_active_tab(surface, content_region);

        let tip = self.tips.current_tip(now).to_string();
        let tip_line = self.translator.format_key(UiText::Tips.key(), &[tip.as_str()]);
        surface.label(
            UIRect::new(in_rect.x, in_rect.y_max() - spacing, in_rect.width, spacing),
            &tip_line,
        );

        FrameReport {
            selected,
            content_region,
            outcome,
        }
    }
}
