use std::collections::BTreeSet;

use once_cell::sync::OnceCell;
use rivulet_catalog::CatalogEntity;
use serde_json::Value;

use crate::{TreeLine, ValueTreeRenderer};

/// The complete raw representation of an entity, as displayed by the
/// detail viewer.
pub fn raw_representation(entity: &CatalogEntity) -> Value {
    serde_json::to_value(entity).unwrap_or(Value::Null)
}

/// View state for the detail viewer.
///
/// The selection is a lookup by identifier, not ownership: the entity
/// itself stays in its page's collection, and a selection can dangle if a
/// refetch drops the entity. Expansion state resets every time the viewer
/// opens, so reopening the same entity always shows the same tree.
#[derive(Default)]
pub struct DetailState {
    selected: Option<u32>,
    /// Paths currently expanded in the tree.
    pub expanded: BTreeSet<String>,
    /// Cursor into the flattened tree lines.
    pub cursor: usize,
    /// Scroll offset of the tree list.
    pub scroll: usize,
    renderer: OnceCell<ValueTreeRenderer>,
}

impl DetailState {
    /// The structured-value renderer, constructed on first use and cached
    /// for the rest of the session.
    pub fn renderer(&self) -> &ValueTreeRenderer {
        self.renderer.get_or_init(ValueTreeRenderer::session)
    }

    /// Opens the viewer on one entity. Opening while already open
    /// replaces the selection; the viewer never stacks.
    pub fn open(&mut self, entity: &CatalogEntity) {
        self.selected = Some(entity.id);
        let seed = self.renderer().initial_expansion(&raw_representation(entity));
        self.expanded = seed;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Closes the viewer and clears the selection.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The selected entity's identifier, while the viewer is open.
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Whether the viewer is open.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The flattened tree lines for the given entity.
    pub fn lines(&self, entity: &CatalogEntity) -> Vec<TreeLine> {
        self.renderer()
            .flatten(&raw_representation(entity), &self.expanded)
    }

    /// Expands or collapses the node under the cursor.
    pub fn toggle(&mut self, entity: &CatalogEntity) {
        let lines = self.lines(entity);
        let Some(line) = lines.get(self.cursor) else {
            return;
        };
        if !line.expandable {
            return;
        }

        if !self.expanded.remove(&line.path) {
            self.expanded.insert(line.path.clone());
        }
    }

    /// Moves the tree cursor down, clamping at the last line.
    pub fn select_next(&mut self, entity: &CatalogEntity) {
        let count = self.lines(entity).len();
        if count > 0 {
            self.cursor = (self.cursor + 1).min(count - 1);
        }
    }

    /// Moves the tree cursor up, clamping at the first line.
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
