use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table, TableState},
};
use rivulet_catalog::CatalogEntity;

use crate::{CellValue, ColumnDescriptor, wrap_words};

/// The catalog listing table.
///
/// Composes the fixed columns (Id, Name, Owner, Visible Columns) with the
/// caller-supplied descriptors: header order is Id, Name, Owner, one cell
/// per descriptor, then Visible Columns. One body row per entity, in
/// collection order. The row identifier doubles as the interactive
/// control that opens the detail viewer, so it is styled as a link.
pub struct CatalogTable<'a> {
    /// The loaded collection, in fetch order.
    pub entities: &'a [CatalogEntity],
    /// Extra columns, in display order.
    pub descriptors: &'a [ColumnDescriptor],
}

impl StatefulWidget for CatalogTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut constraints = vec![
            Constraint::Fill(3),
            Constraint::Fill(5),
            Constraint::Fill(3),
        ];
        constraints.extend(
            self.descriptors
                .iter()
                .map(|descriptor| Constraint::Fill(descriptor.width)),
        );
        constraints.push(Constraint::Fill(8));

        let mut header_cells = vec![Cell::from("Id"), Cell::from("Name"), Cell::from("Owner")];
        header_cells.extend(
            self.descriptors
                .iter()
                .map(|descriptor| Cell::from(descriptor.name)),
        );
        header_cells.push(Cell::from("Visible Columns"));
        let header = Row::new(header_cells).style(Style::new().bold()).height(1);

        // Resolve the final column's width up front so its contents wrap
        // instead of clipping.
        let columns = Layout::horizontal(constraints.clone())
            .spacing(1)
            .split(Rect::new(0, 0, area.width, 1));
        let summary_width = columns
            .last()
            .map(|rect| rect.width.max(1) as usize)
            .unwrap_or(16);

        let rows: Vec<Row<'_>> = self
            .entities
            .iter()
            .enumerate()
            .map(|(i, entity)| {
                let stripe = match i % 2 {
                    0 => Color::Black,
                    _ => Color::Reset,
                };

                let summary = wrap_words(&entity.visible_columns(), summary_width);
                let height = summary.len().max(1) as u16;

                let mut cells = vec![
                    Cell::from(entity.id.to_string()).style(link_style()),
                    Cell::from(entity.name.clone()),
                    Cell::from(entity.owner.clone()),
                ];
                cells.extend(self.descriptors.iter().map(|descriptor| {
                    match (descriptor.content)(entity) {
                        CellValue::Text(text) => Cell::from(text),
                        CellValue::Link { label, .. } => Cell::from(label).style(link_style()),
                    }
                }));
                cells.push(Cell::from(Text::from(summary.join("\n"))));

                Row::new(cells)
                    .height(height)
                    .style(Style::new().bg(stripe))
            })
            .collect();

        let table = Table::new(rows, constraints)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(Style::new().bg(Color::DarkGray));

        StatefulWidget::render(table, area, buf, state);
    }
}

fn link_style() -> Style {
    Style::new()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rivulet_catalog::{ColumnDefinition, PkColumn};

    use crate::connector_column;

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
            pk: vec![PkColumn { index: 0 }],
            properties: BTreeMap::from([("connector".to_string(), "kafka".to_string())]),
            row_format: None,
        }
    }

    fn rendered(entities: &[CatalogEntity], descriptors: &[ColumnDescriptor]) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default();

        CatalogTable {
            entities,
            descriptors,
        }
        .render(area, &mut buf, &mut state);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn renders_the_worked_scenario_row() {
        let lines = rendered(&[orders()], &[connector_column()]);

        let header = &lines[0];
        assert!(header.contains("Id"));
        assert!(header.contains("Name"));
        assert!(header.contains("Owner"));
        assert!(header.contains("Connector"));
        assert!(header.contains("Visible Columns"));

        let row = &lines[1];
        assert!(row.contains('1'));
        assert!(row.contains("orders"));
        assert!(row.contains("root"));
        assert!(row.contains("kafka"));
        assert!(row.contains("id (int4)"));
    }

    #[test]
    fn renders_one_row_per_entity_in_collection_order() {
        let mut second = orders();
        second.id = 2;
        second.name = "users".into();

        let lines = rendered(&[orders(), second], &[]);
        assert!(lines[1].contains("orders"));
        assert!(lines[2].contains("users"));
        assert!(lines[3].trim().is_empty());
    }

    #[test]
    fn zero_visible_columns_renders_an_empty_cell() {
        let mut entity = orders();
        entity.columns[0].is_hidden = true;

        let lines = rendered(&[entity], &[]);
        assert!(lines[1].contains("orders"));
        assert!(!lines[1].contains("id (int4)"));
    }

    #[test]
    fn empty_collection_renders_an_empty_body() {
        let lines = rendered(&[], &[]);
        assert!(lines[0].contains("Id"));
        assert!(lines[1..].iter().all(|line| line.trim().is_empty()));
    }
}
