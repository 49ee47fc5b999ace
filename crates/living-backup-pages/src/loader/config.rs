//! Content loader configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where navigation links point and how their targets are displayed
///
/// Every field has a default, so `{}` is a valid configuration:
///
/// ```rust
/// use living_backup_pages::loader::LoaderConfig;
///
/// let config = LoaderConfig::from_json(r#"{"nested_marker": "/community/"}"#).unwrap();
/// assert_eq!(config.frame_id, "content-frame");
/// assert!(config.is_raw_text("devices/lamp.YAML"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
	/// `id` of the iframe that displays content
	pub frame_id: String,
	/// Attribute naming the resource a navigation link opens
	pub link_attribute: String,
	/// Resource shown when the page URL does not name one
	pub default_target: String,
	/// Query parameter that overrides `default_target`
	pub query_param: String,
	/// File suffixes fetched and shown as escaped text instead of navigated to
	pub raw_text_suffixes: Vec<String>,
	/// Path fragment marking pages one directory below the content root
	pub nested_marker: Option<String>,
	/// `id` of the download link kept in sync with the displayed resource
	pub download_id: Option<String>,
	/// Class of the `<pre>` wrapping raw text
	pub raw_text_class: String,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			frame_id: "content-frame".to_string(),
			link_attribute: "data-file".to_string(),
			default_target: "entities.html".to_string(),
			query_param: "file".to_string(),
			raw_text_suffixes: vec![".yaml".to_string(), ".yml".to_string()],
			nested_marker: None,
			download_id: None,
			raw_text_class: "yaml-content".to_string(),
		}
	}
}

impl LoaderConfig {
	/// Parses a configuration from JSON, filling in defaults
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Sets the nested-page marker
	pub fn nested_marker(mut self, marker: impl Into<String>) -> Self {
		self.nested_marker = Some(marker.into());
		self
	}

	/// Sets the download link id
	pub fn download_id(mut self, id: impl Into<String>) -> Self {
		self.download_id = Some(id.into());
		self
	}

	/// Returns true when `identifier` names a raw-text resource
	///
	/// The suffix check ignores case and any query or fragment.
	pub fn is_raw_text(&self, identifier: &str) -> bool {
		let path = identifier
			.split(['?', '#'])
			.next()
			.unwrap_or_default()
			.to_ascii_lowercase();
		self.raw_text_suffixes
			.iter()
			.any(|suffix| path.ends_with(&suffix.to_ascii_lowercase()))
	}
}
