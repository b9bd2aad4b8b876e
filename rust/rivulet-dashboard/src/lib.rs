#![warn(missing_docs)]

//! # Rivulet Dashboard
//!
//! A Terminal User Interface (TUI) for browsing the metadata catalog of a
//! Rivulet streaming deployment. One page per catalog kind lists the
//! deployment's entities in a table, and any entity's full structured
//! definition can be inspected in a navigable tree view.
//!
//! ## Features
//!
//! - **Catalog pages**: Data Sources, Tables, Materialized Views, Sinks
//!   and Indexes, each with its own kind-specific columns
//! - **Detail viewer**: Inspect one entity's complete raw representation
//!   as an expandable tree
//! - **Background loading**: Collections load asynchronously; a failed
//!   fetch keeps the previous collection and raises a dismissible toast
//!
//! ## Usage
//!
//! The dashboard is run as a binary against a catalog snapshot file:
//!
//! ```bash
//! cargo run --bin dashboard -- demos/catalog.json
//! ```
//!
//! Or opened directly on one page:
//!
//! ```bash
//! cargo run --bin dashboard -- --page tables demos/catalog.json
//! ```
//!
//! ## Key Bindings
//!
//! - `q` - Quit the application
//! - `Tab` / `BackTab` - Cycle through catalog pages
//! - `Up`/`Down` - Move the row cursor
//! - `Enter` - Inspect the selected entity (in the viewer: expand or
//!   collapse the selected node)
//! - `Esc` - Close the detail viewer
//! - `r` - Reload the current page
//! - `d` - Dismiss the newest notification

mod cli;
pub use cli::*;

mod descriptor;
pub use descriptor::*;

mod notify;
pub use notify::*;

mod pages;
pub use pages::*;

mod promise;
pub use promise::*;

mod snapshot;
pub use snapshot::*;

mod state;
pub use state::*;

mod tree;
pub use tree::*;

mod widgets;
pub use widgets::*;
