//! Error types for table state parsing

use thiserror::Error;

/// Errors raised while interpreting markers found in rendered tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// A sort marker that is neither `asc` nor `desc`
	#[error("Unknown sort direction: {0}")]
	UnknownSortDirection(String),
}
