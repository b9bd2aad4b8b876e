use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use rivulet_catalog::{CatalogEntity, CatalogKind, CatalogSnapshot};

/// Fetch collaborator that serves catalog collections from a snapshot
/// document on disk.
///
/// Every fetch re-reads the file, so edits to the snapshot show up on
/// reload. Read and parse failures surface through the loader's failure
/// path as fetch failures.
#[derive(Clone)]
pub struct SnapshotCatalog {
    path: Arc<PathBuf>,
}

impl SnapshotCatalog {
    /// Creates a collaborator reading from the given snapshot path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
        }
    }

    /// Fetches the full replacement collection for one catalog kind.
    pub async fn fetch(&self, kind: CatalogKind) -> anyhow::Result<Vec<CatalogEntity>> {
        let bytes = tokio::fs::read(self.path.as_ref())
            .await
            .with_context(|| format!("reading catalog snapshot {}", self.path.display()))?;
        let snapshot = CatalogSnapshot::parse(&bytes)?;

        Ok(snapshot.collection(kind).to_vec())
    }
}
