use crate::inventory::InventoryError;
use crate::ui::draw::{DrawSurface, UIRect};

/// Result type for tab hooks and rendering
pub type TabResult<T> = Result<T, TabError>;

/// A tab failed to refresh or draw
#[derive(Debug, thiserror::Error)]
pub enum TabError {
    #[error("Tab '{tab}' failed to refresh before opening: {message}")]
    PreOpen { tab: String, message: String },

    #[error("Tab '{tab}' failed to prepare for switching: {message}")]
    PreSwitch { tab: String, message: String },

    #[error("Tab '{tab}' failed to render: {message}")]
    Render { tab: String, message: String },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// A pluggable section of the overview window
pub trait OverviewTab {
    /// Display label for the tab button
    fn label(&self) -> String;

    /// Called on every tab when the window is about to open
    fn pre_open(&mut self) -> TabResult<()>;

    /// Called on a tab right before it becomes the active tab
    fn pre_switch(&mut self) -> TabResult<()>;

    /// Draw the tab's content inside `region`
    fn draw_content(&mut self, surface: &mut dyn DrawSurface, region: UIRect) -> TabResult<()>;
}
