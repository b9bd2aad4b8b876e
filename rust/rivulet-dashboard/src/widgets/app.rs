//! Main application widget for the dashboard TUI.

use ratatui::{prelude::*, widgets::Tabs};

use crate::{CatalogPage, DashboardState, DetailModal, ToastStack};

/// Main application widget that renders the overall TUI layout.
///
/// This widget handles the top-level layout including:
/// - Header with page tabs
/// - Content area for the active catalog page
/// - Footer with help text
/// - Toast and detail-viewer overlays, drawn above the content
pub struct DashboardApp {}

impl StatefulWidget for &DashboardApp {
    type State = DashboardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.sync();

        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let [header_area, inner_area, footer_area] = vertical.areas(area);

        let horizontal = Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]);
        let [tabs_area, title_area] = horizontal.areas(header_area);

        "Rivulet Dashboard".bold().render(title_area, buf);

        let highlight_style = (Color::default(), Color::DarkGray);

        Tabs::new(state.pages.iter().map(|pane| pane.title()))
            .highlight_style(highlight_style)
            .select(state.active)
            .padding("", "")
            .divider(" ")
            .render(tabs_area, buf);

        Line::raw("Tab to change page | Enter to inspect | r to reload | q to quit")
            .centered()
            .render(footer_area, buf);

        let active = state.active;
        CatalogPage {}.render(inner_area, buf, &mut state.pages[active]);

        ToastStack {}.render(area, buf, &mut state.notifications);

        if let Some(id) = state.detail.selected() {
            let entity = state.pages[active].entity(id).cloned();
            DetailModal {
                id,
                entity: entity.as_ref(),
            }
            .render(area, buf, &mut state.detail);
        }
    }
}
