use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RivuletCatalogError;

/// The kinds of entity the catalog describes. Each kind gets its own
/// dashboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Source,
    Table,
    MaterializedView,
    Sink,
    Index,
}

impl CatalogKind {
    /// Every kind, in dashboard page order.
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Source,
        CatalogKind::Table,
        CatalogKind::MaterializedView,
        CatalogKind::Sink,
        CatalogKind::Index,
    ];

    /// The page title for this kind.
    pub fn title(&self) -> &'static str {
        match self {
            CatalogKind::Source => "Data Sources",
            CatalogKind::Table => "Tables",
            CatalogKind::MaterializedView => "Materialized Views",
            CatalogKind::Sink => "Sinks",
            CatalogKind::Index => "Indexes",
        }
    }

    /// The snake_case name used on the wire and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogKind::Source => "sources",
            CatalogKind::Table => "tables",
            CatalogKind::MaterializedView => "materialized_views",
            CatalogKind::Sink => "sinks",
            CatalogKind::Index => "indexes",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CatalogKind {
    type Err = RivuletCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| RivuletCatalogError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in CatalogKind::ALL {
            assert_eq!(kind.name().parse::<CatalogKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            "schemas".parse::<CatalogKind>(),
            Err(RivuletCatalogError::UnknownKind(_))
        ));
    }
}
