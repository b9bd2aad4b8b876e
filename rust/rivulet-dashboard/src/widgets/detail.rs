use ratatui::{
    prelude::*,
    widgets::{Block, Clear, List, ListState, Paragraph, Wrap},
};
use rivulet_catalog::CatalogEntity;

use crate::DetailState;

/// The detail viewer: a modal over the page showing one entity's complete
/// raw representation as a navigable tree.
///
/// The entity is looked up by identifier at render time; when a refetch
/// has dropped it from the collection, the modal says so instead of
/// rendering a stale copy.
pub struct DetailModal<'a> {
    /// The selected entity's identifier.
    pub id: u32,
    /// The entity, when it is still present in the collection.
    pub entity: Option<&'a CatalogEntity>,
}

impl StatefulWidget for DetailModal<'_> {
    type State = DetailState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = centered(area, 80, 70);
        Clear.render(area, buf);

        let title = match self.entity {
            Some(entity) => format!("Catalog of {} - {}", entity.id, entity.name),
            None => format!("Catalog of {}", self.id),
        };

        let block = Block::bordered()
            .title(Line::from(title).bold())
            .title_bottom(Line::raw(" Enter expand/collapse · Esc close ").centered());
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(entity) = self.entity else {
            Paragraph::new("Entity is no longer present in the catalog.")
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        };

        let lines = state.lines(entity);
        if state.cursor >= lines.len() {
            state.cursor = lines.len().saturating_sub(1);
        }

        // Keep the cursor line inside the visible window.
        let height = inner.height as usize;
        if state.cursor < state.scroll {
            state.scroll = state.cursor;
        } else if height > 0 && state.cursor >= state.scroll + height {
            state.scroll = state.cursor + 1 - height;
        }

        let rendered: Vec<Line<'_>> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let bullet = match (line.expandable, line.expanded) {
                    (true, true) => " − ",
                    (true, false) => " + ",
                    (false, _) => " • ",
                };

                let mut rendered = Line::from(vec![
                    Span::raw("  ".repeat(line.depth)),
                    Span::from(bullet).style(Style::new().fg(Color::Yellow)).bold(),
                    Span::raw(line.text.clone()),
                ]);
                if index == state.cursor {
                    rendered = rendered.style(Style::new().bg(Color::DarkGray));
                }

                rendered
            })
            .collect();

        let list = List::new(rendered);
        let mut list_state = ListState::default().with_offset(state.scroll);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ]);
    let [_, middle, _] = vertical.areas(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ]);
    let [_, rect, _] = horizontal.areas(middle);

    rect
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rivulet_catalog::ColumnDefinition;

    use super::*;

    fn orders() -> CatalogEntity {
        CatalogEntity {
            id: 1,
            name: "orders".into(),
            owner: "root".into(),
            columns: vec![ColumnDefinition {
                name: "id".into(),
                type_name: "int4".into(),
                is_hidden: false,
            }],
            pk: vec![],
            properties: BTreeMap::new(),
            row_format: None,
        }
    }

    fn rendered(modal: DetailModal<'_>, state: &mut DetailState) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        modal.render(area, &mut buf, state);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn title_shows_identifier_and_name() {
        let entity = orders();
        let mut state = DetailState::default();
        state.open(&entity);

        let lines = rendered(
            DetailModal {
                id: 1,
                entity: Some(&entity),
            },
            &mut state,
        );
        let all = lines.join("\n");
        assert!(all.contains("Catalog of 1 - orders"));
    }

    #[test]
    fn body_shows_the_collapsed_tree() {
        let entity = orders();
        let mut state = DetailState::default();
        state.open(&entity);

        let all = rendered(
            DetailModal {
                id: 1,
                entity: Some(&entity),
            },
            &mut state,
        )
        .join("\n");

        assert!(all.contains("columns (1 items)"));
        assert!(all.contains("name: \"orders\""));
        // Collapsed children stay hidden.
        assert!(!all.contains("typeName"));
    }

    #[test]
    fn dangling_selection_renders_a_note_instead_of_a_tree() {
        let mut state = DetailState::default();
        state.open(&orders());

        let all = rendered(DetailModal { id: 1, entity: None }, &mut state).join("\n");
        assert!(all.contains("Catalog of 1"));
        assert!(all.contains("no longer present"));
    }
}
