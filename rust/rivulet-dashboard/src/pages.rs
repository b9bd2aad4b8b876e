//! The dashboard's pages: one per catalog kind, each supplying a fetch
//! function and the kind-specific columns for its table.

use rivulet_catalog::CatalogKind;

use crate::{
    CatalogPane, ColumnDescriptor, SnapshotCatalog, connector_column, depends_column,
    fragments_column, primary_key_column, row_format_column,
};

/// The extra columns one catalog kind's page carries, in display order.
pub fn descriptors_for(kind: CatalogKind) -> Vec<ColumnDescriptor> {
    match kind {
        CatalogKind::Source => vec![connector_column(), row_format_column(), depends_column()],
        CatalogKind::Table => vec![
            primary_key_column(),
            connector_column(),
            depends_column(),
            fragments_column(),
        ],
        CatalogKind::MaterializedView => {
            vec![primary_key_column(), depends_column(), fragments_column()]
        }
        CatalogKind::Sink => vec![connector_column(), depends_column(), fragments_column()],
        CatalogKind::Index => vec![primary_key_column(), depends_column()],
    }
}

/// One pane per catalog kind, all fetching from the same snapshot.
pub fn standard_pages(catalog: &SnapshotCatalog) -> Vec<CatalogPane> {
    CatalogKind::ALL
        .into_iter()
        .map(|kind| {
            let catalog = catalog.clone();
            CatalogPane::new(kind, descriptors_for(kind), move || {
                let catalog = catalog.clone();
                async move { catalog.fetch(kind).await }
            })
        })
        .collect()
}
