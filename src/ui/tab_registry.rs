//! Ordered set of overview tabs and the single active tab.
//!
//! The registry owns its tabs for the lifetime of the application and keeps
//! an index to the active one. Hook and render failures are logged and kept
//! local to the failing tab; the active index always stays valid.

use crate::ui::draw::{DrawSurface, UIRect};
use crate::ui::tab::{OverviewTab, TabError};
use std::fmt;

/// Position of a tab in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub usize);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab {}", self.0)
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("No tab registered as {0}")]
    UnknownTab(TabId),

    #[error("Tabs cannot be registered after the first render")]
    RegistrationClosed,
}

/// What happened when the active tab was asked to render
#[derive(Debug)]
pub enum RenderOutcome {
    Rendered(TabId),
    /// The tab's last refresh failed, so nothing was drawn
    Degraded(TabId),
    Failed(TabId, TabError),
    NoActiveTab,
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}

struct TabSlot {
    tab: Box<dyn OverviewTab>,
    degraded: bool,
}

/// Registry of overview tabs with one active tab
#[derive(Default)]
pub struct TabRegistry {
    slots: Vec<TabSlot>,
    active: Option<usize>,
    registration_closed: bool,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab. The first tab registered becomes active.
    pub fn register_tab(&mut self, tab: Box<dyn OverviewTab>) -> RegistryResult<TabId> {
        if self.registration_closed {
            return Err(RegistryError::RegistrationClosed);
        }

        let id = TabId(self.slots.len());
        log::debug!("[TabRegistry] registered '{}' as {}", tab.label(), id);
        self.slots.push(TabSlot { tab, degraded: false });
        if self.active.is_none() {
            self.active = Some(id.0);
        }
        Ok(id)
    }

    /// Let every tab refresh before the window is shown.
    ///
    /// Returns the failures; failing tabs render blank until a later
    /// refresh succeeds.
    pub fn pre_open(&mut self) -> Vec<(TabId, TabError)> {
        let mut failures = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            match slot.tab.pre_open() {
                Ok(()) => slot.degraded = false,
                Err(e) => {
                    log::error!("[TabRegistry] {}", e);
                    slot.degraded = true;
                    failures.push((TabId(index), e));
                }
            }
        }
        failures
    }

    /// Make `id` the active tab, running its pre-switch hook first.
    ///
    /// Selecting the active tab again does nothing. A failing hook leaves the
    /// tab active but degraded.
    pub fn select_tab(&mut self, id: TabId) -> RegistryResult<()> {
        let slot = self.slots.get_mut(id.0).ok_or(RegistryError::UnknownTab(id))?;
        if self.active == Some(id.0) {
            return Ok(());
        }

        match slot.tab.pre_switch() {
            Ok(()) => slot.degraded = false,
            Err(e) => {
                log::error!("[TabRegistry] {}", e);
                slot.degraded = true;
            }
        }
        log::debug!("[TabRegistry] switched to '{}'", slot.tab.label());
        self.active = Some(id.0);
        Ok(())
    }

    /// Draw the active tab into exactly `region`
    pub fn render_active_tab(&mut self, surface: &mut dyn DrawSurface, region: UIRect) -> RenderOutcome {
        self.registration_closed = true;

        let Some(index) = self.active else {
            return RenderOutcome::NoActiveTab;
        };
        let id = TabId(index);
        let slot = &mut self.slots[index];
        if slot.degraded {
            return RenderOutcome::Degraded(id);
        }

        match slot.tab.draw_content(surface, region) {
            Ok(()) => RenderOutcome::Rendered(id),
            Err(e) => {
                log::error!("[TabRegistry] {}", e);
                RenderOutcome::Failed(id, e)
            }
        }
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active.map(TabId)
    }

    pub fn active_label(&self) -> Option<String> {
        self.active.map(|index| self.slots[index].tab.label())
    }

    /// Labels in registration order
    pub fn labels(&self) -> Vec<(TabId, String)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (TabId(index), slot.tab.label()))
            .collect()
    }

    pub fn tab_ids(&self) -> impl Iterator<Item = TabId> {
        (0..self.slots.len()).map(TabId)
    }

    pub fn is_degraded(&self, id: TabId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.degraded)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
