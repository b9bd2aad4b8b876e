use ratatui::widgets::TableState;
use rivulet_catalog::{CatalogEntity, CatalogKind};
use throbber_widgets_tui::ThrobberState;

use crate::{CollectionLoader, ColumnDescriptor};

/// One catalog page: a kind, its extra columns, its loader and its view
/// state. Collections and cursors are owned by exactly one pane; nothing
/// is shared across pages.
pub struct CatalogPane {
    /// Which catalog kind this page lists.
    pub kind: CatalogKind,
    /// Extra columns, in display order.
    pub descriptors: Vec<ColumnDescriptor>,
    /// The page's collection loader.
    pub loader: CollectionLoader<CatalogEntity>,
    /// Table cursor and scroll state.
    pub table: TableState,
    /// Spinner state while a fetch is in flight.
    pub throbber: ThrobberState,
    visited: bool,
}

impl CatalogPane {
    /// Creates a pane around a fetch function for one catalog kind.
    pub fn new<F, Fut>(kind: CatalogKind, descriptors: Vec<ColumnDescriptor>, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Vec<CatalogEntity>>> + Send + 'static,
    {
        Self {
            kind,
            descriptors,
            loader: CollectionLoader::new(fetch),
            table: TableState::default(),
            throbber: ThrobberState::default(),
            visited: false,
        }
    }

    /// The page title.
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Triggers the page's first fetch the first time it becomes visible.
    pub fn visit(&mut self) {
        if !self.visited {
            self.visited = true;
            self.loader.load();
        }
    }

    /// Starts a fresh fetch of the page's collection.
    pub fn reload(&mut self) {
        self.loader.load();
    }

    /// The loaded entities, in fetch order.
    pub fn entities(&self) -> &[CatalogEntity] {
        self.loader.entities()
    }

    /// Looks an entity up by identifier.
    pub fn entity(&self, id: u32) -> Option<&CatalogEntity> {
        self.entities().iter().find(|entity| entity.id == id)
    }

    /// The entity under the row cursor.
    pub fn selected_entity(&self) -> Option<&CatalogEntity> {
        self.entities().get(self.table.selected()?)
    }

    /// Moves the row cursor down, clamping at the last row.
    pub fn select_next(&mut self) {
        let count = self.entities().len();
        if count == 0 {
            return;
        }

        let next = match self.table.selected() {
            Some(index) => index.saturating_add(1).min(count - 1),
            None => 0,
        };
        self.table.select(Some(next));
    }

    /// Moves the row cursor up, clamping at the first row.
    pub fn select_previous(&mut self) {
        if self.entities().is_empty() {
            return;
        }

        let previous = match self.table.selected() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.table.select(Some(previous));
    }
}
