//! Error types

use thiserror::Error;

/// Result type alias for content loading
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Failures of a navigation request
///
/// None of these are fatal: the loader logs them and leaves the displayed
/// content as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
	/// A link or query parameter carried no resource identifier
	#[error("Navigation identifier is missing or empty")]
	MissingIdentifier,

	/// The frame that displays content is not in the document
	#[error("Content frame '{0}' not found")]
	MissingFrame(String),

	/// A resource path could not be turned into a URL
	#[error("Invalid resource URL '{url}': {source}")]
	InvalidUrl {
		/// Path as requested
		url: String,
		/// Parse failure
		#[source]
		source: url::ParseError,
	},

	/// The request did not complete (network failure, CORS, aborted body)
	#[error("Failed to fetch {url}: {message}")]
	Fetch {
		/// Requested URL
		url: String,
		/// Transport error description
		message: String,
	},

	/// The server answered with a non-success status
	#[error("Fetching {url} returned HTTP {status}")]
	Status {
		/// Requested URL
		url: String,
		/// HTTP status code
		status: u16,
	},
}

/// Failures parsing page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Configuration JSON did not match the expected shape
	#[error("Invalid page configuration: {0}")]
	Json(#[from] serde_json::Error),
}
