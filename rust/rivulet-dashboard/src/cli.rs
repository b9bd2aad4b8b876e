use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rivulet_catalog::CatalogKind;

/// Command line arguments for the dashboard binary.
#[derive(Debug, Parser)]
#[command(name = "dashboard")]
#[command(bin_name = "dashboard")]
#[command(about = "Catalog dashboard for Rivulet deployments", long_about = None)]
pub struct DashboardCli {
    /// Page to open at startup (sources, tables, materialized_views,
    /// sinks or indexes).
    #[arg(short, long, value_parser = parse_page)]
    pub page: Option<CatalogKind>,

    /// Path to a catalog snapshot document.
    pub snapshot: PathBuf,
}

fn parse_page(value: &str) -> Result<CatalogKind, String> {
    CatalogKind::from_str(value).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_path_and_page() {
        let cli = DashboardCli::parse_from(["dashboard", "--page", "tables", "catalog.json"]);
        assert_eq!(cli.page, Some(CatalogKind::Table));
        assert_eq!(cli.snapshot, PathBuf::from("catalog.json"));
    }

    #[test]
    fn rejects_unknown_pages() {
        let result =
            DashboardCli::try_parse_from(["dashboard", "--page", "fragments", "catalog.json"]);
        assert!(result.is_err());
    }
}
