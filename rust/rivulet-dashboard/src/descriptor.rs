//! The pluggable column contract for catalog tables.
//!
//! A page extends the fixed table columns (Id, Name, Owner, Visible
//! Columns) with descriptors: one display label, a relative width hint and
//! a pure content function per extra column. The table invokes a content
//! function once per row per render pass; content functions must be total
//! and must not mutate the entity.

use rivulet_catalog::CatalogEntity;

/// The value a column descriptor produces for one table cell: plain text,
/// or a link to another dashboard page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    /// Plain text, rendered as-is.
    Text(String),
    /// A navigation link. The href is constructed here but not validated;
    /// target pages are collaborators of the dashboard, not part of it.
    Link {
        /// Short display label.
        label: String,
        /// Target location, parameterized by entity id.
        href: String,
    },
}

impl CellValue {
    /// The text shown in the cell.
    pub fn label(&self) -> &str {
        match self {
            CellValue::Text(text) => text,
            CellValue::Link { label, .. } => label,
        }
    }
}

/// A caller-supplied column extending the catalog table.
pub struct ColumnDescriptor {
    /// Display label, unique within one table.
    pub name: &'static str,
    /// Relative width hint, positive.
    pub width: u16,
    /// Pure function from entity to cell value.
    pub content: fn(&CatalogEntity) -> CellValue,
}

/// Href of the streaming graph page, filtered to one entity's dependents.
pub fn graph_href(id: u32) -> String {
    format!("/streaming_graph/?id={id}")
}

/// Href of the streaming plan page, filtered to one entity's fragments.
pub fn plan_href(id: u32) -> String {
    format!("/streaming_plan/?id={id}")
}

/// A "D" link to the entity's dependents in the streaming graph.
pub fn depends_column() -> ColumnDescriptor {
    ColumnDescriptor {
        name: "Depends",
        width: 1,
        content: |entity| CellValue::Link {
            label: "D".to_string(),
            href: graph_href(entity.id),
        },
    }
}

/// An "F" link to the entity's fragments in the streaming plan.
pub fn fragments_column() -> ColumnDescriptor {
    ColumnDescriptor {
        name: "Fragments",
        width: 1,
        content: |entity| CellValue::Link {
            label: "F".to_string(),
            href: plan_href(entity.id),
        },
    }
}

/// The entity's primary key columns in `"name (type)"` form.
pub fn primary_key_column() -> ColumnDescriptor {
    ColumnDescriptor {
        name: "Primary Key",
        width: 1,
        content: |entity| CellValue::Text(entity.primary_key()),
    }
}

/// The entity's connector name, or `"unknown"` when it has none.
pub fn connector_column() -> ColumnDescriptor {
    ColumnDescriptor {
        name: "Connector",
        width: 3,
        content: |entity| CellValue::Text(entity.connector().unwrap_or("unknown").to_string()),
    }
}

/// The entity's row-encoding format, or `"unknown"` when it has none.
pub fn row_format_column() -> ColumnDescriptor {
    ColumnDescriptor {
        name: "Row Format",
        width: 3,
        content: |entity| {
            CellValue::Text(entity.row_format.clone().unwrap_or_else(|| "unknown".to_string()))
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rivulet_catalog::{ColumnDefinition, PkColumn};

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

    #[test]
    fn connector_reads_the_property() {
        let cell = (connector_column().content)(&orders());
        assert_eq!(cell, CellValue::Text("kafka".to_string()));
    }

    #[test]
    fn connector_falls_back_to_the_literal_unknown() {
        let mut entity = orders();
        entity.properties.clear();
        let cell = (connector_column().content)(&entity);
        assert_eq!(cell, CellValue::Text("unknown".to_string()));
    }

    #[test]
    fn row_format_falls_back_to_the_literal_unknown() {
        let cell = (row_format_column().content)(&orders());
        assert_eq!(cell, CellValue::Text("unknown".to_string()));

        let mut entity = orders();
        entity.row_format = Some("json".to_string());
        let cell = (row_format_column().content)(&entity);
        assert_eq!(cell, CellValue::Text("json".to_string()));
    }

    #[test]
    fn primary_key_lists_key_columns() {
        let cell = (primary_key_column().content)(&orders());
        assert_eq!(cell, CellValue::Text("id (int4)".to_string()));
    }

    #[test]
    fn link_columns_parameterize_hrefs_by_id() {
        let depends = (depends_column().content)(&orders());
        assert_eq!(
            depends,
            CellValue::Link {
                label: "D".to_string(),
                href: "/streaming_graph/?id=1".to_string(),
            }
        );

        let fragments = (fragments_column().content)(&orders());
        assert_eq!(
            fragments,
            CellValue::Link {
                label: "F".to_string(),
                href: "/streaming_plan/?id=1".to_string(),
            }
        );
    }
}
