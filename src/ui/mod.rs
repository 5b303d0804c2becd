pub mod draw;
pub mod overview_dialog;
pub mod tab;
pub mod tab_registry;
pub mod tabs;
pub mod tip_displayer;

pub use draw::{DrawSurface, UIColor, UIElement, UIRect, UIRenderer};
pub use overview_dialog::{FrameReport, InventoryOverviewDialog, WindowSettings};
pub use tab::{OverviewTab, TabError, TabResult};
pub use tab_registry::{RegistryError, RegistryResult, RenderOutcome, TabId, TabRegistry};
pub use tabs::{InventoryTab, LoadoutTab};
pub use tip_displayer::TipDisplayer;
