//! # Living Backup
//!
//! Interactive glue for the statically generated Living Backup documentation
//! site.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - browser glue: [`pages`] module, compiled to WASM
//! - `console_error_panic_hook` - readable panics in the browser console
//! - `debug-hooks` - `debug_log!` output in debug builds
//!
//! ## Crates
//!
//! - [`tables`]: sort and filter state of a single table, no DOM access
//! - `pages`: table controller and content loader over a DOM abstraction
//!
//! ## Example
//!
//! ```rust
//! use living_backup::tables::{CategoryRule, TableState};
//!
//! let mut state = TableState::new(CategoryRule::Prefix);
//! state.set_query("lamp");
//! assert!(state.matches(&["light.lamp", "Kitchen lamp"]));
//! assert!(!state.matches(&["switch.fan", "Fan"]));
//! ```

#![warn(missing_docs)]

/// Table sort and filter state
pub use living_backup_tables as tables;

/// Browser glue for navigation and tables
#[cfg(feature = "pages")]
pub use living_backup_pages as pages;

#[cfg(feature = "pages")]
pub use living_backup_pages::{ContentLoader, LoaderConfig, SiteConfig, TablePage, TablesConfig};
pub use living_backup_tables::{Category, CategoryRule, SortDirection, TableState};
