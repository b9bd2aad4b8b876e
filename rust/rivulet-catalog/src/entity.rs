use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ColumnDefinition, RivuletCatalogError};

/// One component of an entity's primary key, referencing a position in the
/// entity's column list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkColumn {
    /// Position of the key column within [`CatalogEntity::columns`].
    pub index: usize,
}

/// One described object in the metadata catalog of a streaming deployment.
///
/// An entity's identifier is unique within one loaded collection. The
/// `properties` mapping is free-form connector configuration; well-known
/// keys (such as `connector`) have accessors. Kind-specific extras that are
/// not plain properties, like the row-encoding format of a source, get
/// their own optional fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntity {
    /// Catalog-wide identifier.
    pub id: u32,
    /// Entity name.
    pub name: String,
    /// Name of the owning user.
    pub owner: String,
    /// The entity's schema, in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    /// Primary key components, in key order. Empty when the entity has no
    /// primary key.
    #[serde(default)]
    pub pk: Vec<PkColumn>,
    /// Free-form `WITH`-style properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Row-encoding format, for entities that ingest encoded rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_format: Option<String>,
}

impl CatalogEntity {
    /// Checks the entity's internal invariants: every primary key component
    /// must reference a valid position in the column list.
    pub fn validate(&self) -> Result<(), RivuletCatalogError> {
        for pk in &self.pk {
            if pk.index >= self.columns.len() {
                return Err(RivuletCatalogError::PrimaryKeyOutOfRange {
                    index: pk.index,
                    columns: self.columns.len(),
                });
            }
        }

        Ok(())
    }

    /// The `"name (type)"` forms of every column not marked hidden, joined
    /// in column order. Empty when no column is visible.
    pub fn visible_columns(&self) -> String {
        self.columns
            .iter()
            .filter(|column| !column.is_hidden)
            .map(ColumnDefinition::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The `"name (type)"` forms of the primary key columns, resolved
    /// through the key's column indices. Out-of-range indices are skipped
    /// rather than panicking; [`CatalogEntity::validate`] reports them.
    pub fn primary_key(&self) -> String {
        self.pk
            .iter()
            .filter_map(|pk| self.columns.get(pk.index))
            .map(ColumnDefinition::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The connector name, when the entity is connector-backed.
    pub fn connector(&self) -> Option<&str> {
        self.properties.get("connector").map(String::as_str)
    }
}
