//! Table sorting and filtering over a [`Document`](crate::dom::Document)
//!
//! - [`TablePage`]: controller for the tables of one document
//! - [`FrameTables`]: rebinds a controller whenever the content frame reloads
//! - [`TablesConfig`]: which tables, search boxes and filter buttons belong together

pub mod config;
pub mod controller;
pub mod frame;

pub use config::{TableConfig, TablesConfig};
pub use controller::{CATEGORY_ATTRIBUTE, ORDER_ATTRIBUTE, TablePage};
pub use frame::{FrameTables, MountHook, SharedTablePage};
