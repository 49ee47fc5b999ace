//! Living Backup Pages - browser glue for the documentation site
//!
//! The generated site is static HTML: an index page with navigation links and
//! a content frame, plus table pages listing entities and integrations. This
//! crate adds the interactive parts, compiled to WebAssembly:
//!
//! - [`tables`]: click-to-sort headers, a text search box and category filter
//!   buttons for one or more tables, with a visible-row count
//! - [`loader`]: opens navigation targets in the content frame, fetching YAML
//!   files and showing them as escaped text
//! - [`dom`]: the element-tree abstraction both are written against
//! - [`config`]: JSON configuration accepted by the entry points
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     App[mountNavigation / mountTables] --> Loader[ContentLoader]
//!     App --> Page[TablePage]
//!     Loader -->|frame ready| Frame[FrameTables]
//!     Frame --> Page
//!     Page --> State[living_backup_tables::TableState]
//!     Loader --> Dom[Document]
//!     Page --> Dom
//! ```
//!
//! Everything except the entry points runs natively against
//! [`MemoryDocument`](dom::MemoryDocument):
//!
//! ```rust
//! use living_backup_pages::dom::{Document, MemoryDocument, el};
//! use living_backup_pages::tables::{TablePage, TablesConfig};
//!
//! let doc = MemoryDocument::new(
//!     el("body")
//!         .child(el("input").id("searchBox").value("lamp"))
//!         .child(
//!             el("table").id("entitiesTable").child(
//!                 el("tbody")
//!                     .child(el("tr").child(el("td").text("light.lamp")))
//!                     .child(el("tr").child(el("td").text("switch.fan"))),
//!             ),
//!         ),
//! );
//! let mut page = TablePage::new(doc, TablesConfig::default());
//! page.init();
//! assert_eq!(page.visible_count(), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

// Logging macros must be declared before the modules using them
mod logging;

pub mod config;
pub mod dom;
pub mod error;
pub mod loader;
pub mod tables;

#[cfg(target_arch = "wasm32")]
pub mod app;

// Re-exports for convenience
pub use config::SiteConfig;
pub use dom::{Document, MemoryDocument};
pub use error::{ConfigError, LoaderError, Result};
pub use loader::{ContentLoader, LoaderConfig, Resource, ResourceKind, TextFetcher};
pub use tables::{FrameTables, TableConfig, TablePage, TablesConfig};

#[cfg(target_arch = "wasm32")]
pub use app::{mount_navigation, mount_tables};
#[cfg(target_arch = "wasm32")]
pub use dom::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use loader::HttpFetcher;
