use ratatui::prelude::*;
use throbber_widgets_tui::Throbber;

use crate::CatalogPane;

mod table;
pub use table::*;

/// One catalog page: a heading, a loading indicator while a fetch is in
/// flight, and the listing table.
pub struct CatalogPage {}

impl StatefulWidget for &CatalogPage {
    type State = CatalogPane;

    fn render(self, area: Rect, buf: &mut Buffer, pane: &mut Self::State) {
        let vertical = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]);
        let [heading_area, table_area] = vertical.areas(area);

        let horizontal = Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]);
        let [title_area, throbber_area] = horizontal.areas(heading_area);

        pane.title().bold().render(title_area, buf);

        if pane.loader.loading() {
            pane.throbber.calc_next();
            let throbber = Throbber::default()
                .label("Loading...")
                .throbber_set(throbber_widgets_tui::BRAILLE_SIX);
            StatefulWidget::render(throbber, throbber_area, buf, &mut pane.throbber);
        }

        // A shrinking refetch can leave the cursor past the end.
        let count = pane.loader.entities().len();
        if let Some(selected) = pane.table.selected() {
            if count > 0 && selected >= count {
                pane.table.select(Some(count - 1));
            }
        }

        CatalogTable {
            entities: pane.loader.entities(),
            descriptors: &pane.descriptors,
        }
        .render(table_area, buf, &mut pane.table);
    }
}
