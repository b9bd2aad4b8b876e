use serde::{Deserialize, Serialize};

use crate::{CatalogEntity, CatalogKind, RivuletCatalogError};

/// A complete picture of a deployment's catalog at one moment: one entity
/// collection per catalog kind.
///
/// This is the document the dashboard's bundled fetch collaborator reads
/// from disk. Collections are served wholesale; there is no delta protocol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub sources: Vec<CatalogEntity>,
    #[serde(default)]
    pub tables: Vec<CatalogEntity>,
    #[serde(default)]
    pub materialized_views: Vec<CatalogEntity>,
    #[serde(default)]
    pub sinks: Vec<CatalogEntity>,
    #[serde(default)]
    pub indexes: Vec<CatalogEntity>,
}

impl CatalogSnapshot {
    /// Parses a snapshot document and validates every entity in it, so a
    /// malformed snapshot surfaces as a load failure rather than a render
    /// time surprise.
    pub fn parse(bytes: &[u8]) -> Result<Self, RivuletCatalogError> {
        let snapshot: Self = serde_json::from_slice(bytes)?;

        for kind in CatalogKind::ALL {
            for entity in snapshot.collection(kind) {
                entity.validate()?;
            }
        }

        Ok(snapshot)
    }

    /// The collection for one catalog kind, in snapshot order.
    pub fn collection(&self, kind: CatalogKind) -> &[CatalogEntity] {
        match kind {
            CatalogKind::Source => &self.sources,
            CatalogKind::Table => &self.tables,
            CatalogKind::MaterializedView => &self.materialized_views,
            CatalogKind::Sink => &self.sinks,
            CatalogKind::Index => &self.indexes,
        }
    }
}
