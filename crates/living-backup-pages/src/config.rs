//! Page-level configuration passed to the WASM entry points

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loader::LoaderConfig;
use crate::tables::TablesConfig;

/// Configuration of a navigation page
///
/// Loader fields sit at the top level; `frame_tables` enables sorting and
/// filtering of tables inside the content frame.
///
/// ```rust
/// use living_backup_pages::config::SiteConfig;
///
/// let config = SiteConfig::from_json(
///     r#"{"download_id": "download-btn", "frame_tables": {"tables": [{"table_id": "entitiesTable"}]}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.loader.download_id.as_deref(), Some("download-btn"));
/// assert_eq!(config.frame_tables.unwrap().tables.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
	/// Content loader settings
	#[serde(flatten)]
	pub loader: LoaderConfig,
	/// Tables to bind inside the content frame
	#[serde(default)]
	pub frame_tables: Option<TablesConfig>,
}

impl SiteConfig {
	/// Parses a configuration from JSON, filling in defaults
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}
}
