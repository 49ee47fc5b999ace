//! Fetching raw-text resources

use std::future::Future;

use crate::error::Result;

/// Retrieves the body of a resource as text
///
/// The loader only needs this one operation, which keeps it testable with an
/// in-memory implementation on native targets.
pub trait TextFetcher {
	/// Fetches `url`, failing on transport errors and non-success statuses
	fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>>;
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpFetcher;

#[cfg(target_arch = "wasm32")]
mod http {
	use url::Url;

	use super::TextFetcher;
	use crate::error::{LoaderError, Result};
	use crate::logging::debug_log;

	/// `reqwest` backed fetcher resolving relative paths against the page URL
	#[derive(Debug, Clone)]
	pub struct HttpFetcher {
		client: reqwest::Client,
		base: Option<Url>,
	}

	impl HttpFetcher {
		/// Creates a fetcher based on the current window location
		pub fn new() -> Self {
			let base = web_sys::window()
				.and_then(|window| window.location().href().ok())
				.and_then(|href| Url::parse(&href).ok());
			Self {
				client: reqwest::Client::new(),
				base,
			}
		}

		/// Creates a fetcher resolving against an explicit base URL
		pub fn with_base(base: Url) -> Self {
			Self {
				client: reqwest::Client::new(),
				base: Some(base),
			}
		}

		fn resolve(&self, path: &str) -> Result<Url> {
			let parsed = match &self.base {
				Some(base) => base.join(path),
				None => Url::parse(path),
			};
			parsed.map_err(|source| LoaderError::InvalidUrl {
				url: path.to_string(),
				source,
			})
		}
	}

	impl Default for HttpFetcher {
		fn default() -> Self {
			Self::new()
		}
	}

	impl TextFetcher for HttpFetcher {
		async fn fetch_text(&self, path: &str) -> Result<String> {
			let url = self.resolve(path)?;
			debug_log!("Fetching {}", url);

			let fetch_error = |err: reqwest::Error| LoaderError::Fetch {
				url: url.to_string(),
				message: err.to_string(),
			};
			let response = self
				.client
				.get(url.clone())
				.send()
				.await
				.map_err(fetch_error)?;

			let status = response.status();
			if !status.is_success() {
				return Err(LoaderError::Status {
					url: url.to_string(),
					status: status.as_u16(),
				});
			}
			response.text().await.map_err(fetch_error)
		}
	}
}
