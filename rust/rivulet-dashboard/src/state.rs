use rivulet_catalog::{CatalogEntity, CatalogKind};

use crate::{NotificationCenter, Notifier};

mod detail;
pub use detail::*;

mod loader;
pub use loader::*;

mod pane;
pub use pane::*;

/// Top-level state for the dashboard: the catalog pages, the detail
/// viewer and the notification center.
///
/// Invariant: `pages` is non-empty and `active` always indexes into it.
pub struct DashboardState {
    /// Catalog pages, in tab order.
    pub pages: Vec<CatalogPane>,
    /// Index of the active page.
    pub active: usize,
    /// Detail viewer state.
    pub detail: DetailState,
    /// Currently displayed notifications.
    pub notifications: NotificationCenter,
    notifier: Notifier,
}

impl DashboardState {
    /// Creates the dashboard state and triggers the first page's initial
    /// fetch.
    pub fn new(pages: Vec<CatalogPane>) -> Self {
        let (notifications, notifier) = NotificationCenter::new();

        let mut state = Self {
            pages,
            active: 0,
            detail: DetailState::default(),
            notifications,
            notifier,
        };
        if let Some(pane) = state.pages.get_mut(0) {
            pane.visit();
        }

        state
    }

    /// Applies settled fetches and expires notifications. Called once per
    /// render pass.
    pub fn sync(&mut self) {
        for pane in &mut self.pages {
            pane.loader.sync(&self.notifier);
        }
        self.notifications.sync();
    }

    /// The active page.
    pub fn active_pane(&self) -> &CatalogPane {
        &self.pages[self.active]
    }

    /// The active page, mutably.
    pub fn active_pane_mut(&mut self) -> &mut CatalogPane {
        &mut self.pages[self.active]
    }

    /// Switches to the page for one catalog kind, fetching its collection
    /// if this is the first visit.
    pub fn activate(&mut self, kind: CatalogKind) {
        if let Some(index) = self.pages.iter().position(|pane| pane.kind == kind) {
            self.active = index;
            self.pages[index].visit();
        }
    }

    /// Cycles to the next page.
    pub fn next_page(&mut self) {
        self.active = (self.active + 1) % self.pages.len();
        self.active_pane_mut().visit();
    }

    /// Cycles to the previous page.
    pub fn previous_page(&mut self) {
        self.active = (self.active + self.pages.len() - 1) % self.pages.len();
        self.active_pane_mut().visit();
    }

    /// Starts a fresh fetch of the active page's collection.
    pub fn reload(&mut self) {
        self.active_pane_mut().reload();
    }

    /// Activates the row identifier under the cursor: selects that row's
    /// entity and opens the detail viewer on it.
    pub fn open_detail(&mut self) {
        let Some(entity) = self.active_pane().selected_entity().cloned() else {
            return;
        };
        self.detail.open(&entity);
    }

    /// Closes the detail viewer. The loaded collection is untouched.
    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// The entity the detail viewer is showing, looked up by identifier in
    /// the active page's collection.
    pub fn detail_entity(&self) -> Option<&CatalogEntity> {
        self.active_pane().entity(self.detail.selected()?)
    }

    /// Expands or collapses the tree node under the viewer's cursor.
    pub fn detail_toggle(&mut self) {
        if let Some(entity) = self.detail_entity().cloned() {
            self.detail.toggle(&entity);
        }
    }

    /// Moves the viewer's tree cursor down.
    pub fn detail_next(&mut self) {
        if let Some(entity) = self.detail_entity().cloned() {
            self.detail.select_next(&entity);
        }
    }
}
