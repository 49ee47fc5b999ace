//! Resource identifiers and the paths derived from them

use std::collections::HashMap;

use url::Url;

use super::config::LoaderConfig;
use crate::error::{LoaderError, Result};
use crate::logging::warn_log;

/// How a resource is displayed in the content frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
	/// Navigated to through the frame's `src`
	Page,
	/// Fetched and written into the frame's `srcdoc` as escaped text
	RawText,
}

/// A navigation target resolved against the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
	/// Identifier as written on the link or in the query string
	pub identifier: String,
	/// Path the frame or fetcher actually requests
	pub path: String,
	/// Display strategy
	pub kind: ResourceKind,
}

impl Resource {
	/// Resolves an identifier for a page whose path is `current_path`
	///
	/// ```rust
	/// use living_backup_pages::loader::{LoaderConfig, Resource, ResourceKind};
	///
	/// let config = LoaderConfig::default().nested_marker("/community/");
	/// let resource = Resource::resolve("lamp.yaml", &config, "/docs/community/index.html").unwrap();
	/// assert_eq!(resource.path, "../lamp.yaml");
	/// assert_eq!(resource.kind, ResourceKind::RawText);
	/// ```
	pub fn resolve(identifier: &str, config: &LoaderConfig, current_path: &str) -> Result<Self> {
		let identifier = identifier.trim();
		if identifier.is_empty() {
			return Err(LoaderError::MissingIdentifier);
		}

		let kind = if config.is_raw_text(identifier) {
			ResourceKind::RawText
		} else {
			ResourceKind::Page
		};
		let nested = config
			.nested_marker
			.as_deref()
			.is_some_and(|marker| !marker.is_empty() && current_path.contains(marker));
		let path = if nested && is_relative(identifier) {
			format!("../{identifier}")
		} else {
			identifier.to_string()
		};

		Ok(Self {
			identifier: identifier.to_string(),
			path,
			kind,
		})
	}

	/// Returns true for resources displayed as escaped text
	pub fn is_raw_text(&self) -> bool {
		self.kind == ResourceKind::RawText
	}
}

/// Relative paths have neither a leading `/` nor a URL scheme
fn is_relative(path: &str) -> bool {
	!path.starts_with('/') && Url::parse(path).is_err()
}

/// Returns the resource named by the page's query string, or the default target
///
/// `search` is the location's query component, with or without the leading `?`.
pub fn initial_target(search: &str, config: &LoaderConfig) -> String {
	let query = search.strip_prefix('?').unwrap_or(search);
	let params: HashMap<String, String> = match serde_urlencoded::from_str(query) {
		Ok(params) => params,
		Err(err) => {
			warn_log!("Ignoring malformed query string '{}': {}", search, err);
			HashMap::new()
		}
	};
	params
		.get(&config.query_param)
		.map(|value| value.trim())
		.filter(|value| !value.is_empty())
		.unwrap_or(config.default_target.as_str())
		.to_string()
}

/// Target of the download link for a displayed resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
	/// Value for the link's `href`
	pub href: String,
	/// Value for the link's `download` attribute
	pub filename: String,
}

impl DownloadLink {
	/// Derives the download for a resource
	///
	/// Raw text downloads itself and `.html` pages download their `.json`
	/// sibling. Other pages have nothing to download.
	pub fn for_resource(resource: &Resource) -> Option<Self> {
		let href = match resource.kind {
			ResourceKind::RawText => resource.path.clone(),
			ResourceKind::Page => {
				let stem = resource.path.strip_suffix(".html")?;
				format!("{stem}.json")
			}
		};
		let filename = href.rsplit('/').next().unwrap_or_default().to_string();
		Some(Self { href, filename })
	}
}
