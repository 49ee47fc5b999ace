//! The content frame and what it currently shows
//!
//! A frame shows either a page (through `src`) or escaped raw text (through
//! `srcdoc`). Browsers give `srcdoc` precedence, so switching modes removes
//! the attribute of the previous mode before the new one is written.
//!
//! Navigations are not cancelled: when two raw-text fetches overlap, whichever
//! completes last is displayed.

use std::cell::RefCell;
use std::rc::Rc;

use super::config::LoaderConfig;
use super::fetch::TextFetcher;
use super::links::NavLinks;
use super::resource::{DownloadLink, Resource, ResourceKind, initial_target};
use crate::dom::Document;
use crate::error::{LoaderError, Result};
use crate::logging::{debug_log, error_log, warn_log};

/// What the content frame currently displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Displayed {
	/// Nothing has been loaded by the loader yet
	#[default]
	Nothing,
	/// A page navigated to through `src`
	Page(Resource),
	/// Raw text written into `srcdoc`
	RawText(Resource),
}

impl Displayed {
	/// Returns the displayed resource
	pub fn resource(&self) -> Option<&Resource> {
		match self {
			Self::Nothing => None,
			Self::Page(resource) | Self::RawText(resource) => Some(resource),
		}
	}
}

/// Readiness event delivered after the frame finished loading
#[derive(Debug, Clone)]
pub struct FrameReady<D: Document> {
	/// The frame's document, when it is reachable (same origin)
	pub document: Option<D>,
	/// What the loader last displayed
	pub displayed: Displayed,
}

/// Listener invoked on every [`FrameReady`] event
pub type FrameListener<D> = Rc<dyn Fn(&FrameReady<D>)>;

/// Loads navigation targets into the content frame
pub struct ContentLoader<D: Document, F: TextFetcher> {
	document: D,
	fetcher: F,
	config: LoaderConfig,
	displayed: RefCell<Displayed>,
	listeners: RefCell<Vec<FrameListener<D>>>,
}

impl<D: Document, F: TextFetcher> ContentLoader<D, F> {
	/// Creates a loader for the frame configured in `config`
	pub fn new(document: D, fetcher: F, config: LoaderConfig) -> Self {
		Self {
			document,
			fetcher,
			config,
			displayed: RefCell::new(Displayed::Nothing),
			listeners: RefCell::new(Vec::new()),
		}
	}

	/// Returns the loader configuration
	pub fn config(&self) -> &LoaderConfig {
		&self.config
	}

	/// Returns the outer document
	pub fn document(&self) -> &D {
		&self.document
	}

	/// Returns what the frame currently displays
	pub fn displayed(&self) -> Displayed {
		self.displayed.borrow().clone()
	}

	/// Resolves an identifier against the outer document's location
	pub fn resolve(&self, identifier: &str) -> Result<Resource> {
		Resource::resolve(identifier, &self.config, &self.document.location_path())
	}

	/// Displays the resource named by `identifier`
	///
	/// Failures are logged and returned; the frame keeps its previous content.
	pub async fn navigate(&self, identifier: &str) -> Result<()> {
		let result = self.try_navigate(identifier).await;
		if let Err(err) = &result {
			error_log!("Navigation to '{}' failed: {}", identifier, err);
		}
		result
	}

	async fn try_navigate(&self, identifier: &str) -> Result<()> {
		let resource = self.resolve(identifier)?;
		let frame = self.frame()?;
		match resource.kind {
			ResourceKind::Page => self.show_page(&frame, resource),
			ResourceKind::RawText => {
				let text = self.fetcher.fetch_text(&resource.path).await?;
				self.show_raw_text(&frame, resource, &text);
			}
		}
		Ok(())
	}

	/// Navigates to the resource named by the query string, or the default target
	pub async fn load_initial(&self) -> Result<()> {
		let target = initial_target(&self.document.location_search(), &self.config);
		debug_log!("Initial content: {}", target);
		self.navigate(&target).await
	}

	/// Navigates to the resource named by a link's attribute
	pub async fn follow(&self, link: &D::Element) -> Result<()> {
		let identifier = self
			.document
			.attribute(link, &self.config.link_attribute)
			.unwrap_or_default();
		if identifier.trim().is_empty() {
			warn_log!("Link has an empty {} attribute", self.config.link_attribute);
			return Err(LoaderError::MissingIdentifier);
		}
		self.navigate(&identifier).await
	}

	/// Returns the navigation links of the outer document
	pub fn links(&self) -> NavLinks<D> {
		NavLinks::collect(&self.document, &self.config.link_attribute)
	}

	/// Registers a listener for frame readiness
	pub fn on_frame_ready(&self, listener: impl Fn(&FrameReady<D>) + 'static) {
		self.listeners.borrow_mut().push(Rc::new(listener));
	}

	/// Signals that the frame finished loading its current content
	pub fn frame_loaded(&self) {
		let document = self
			.frame()
			.ok()
			.and_then(|frame| self.document.frame_document(&frame));
		let ready = FrameReady {
			document,
			displayed: self.displayed(),
		};
		let listeners: Vec<FrameListener<D>> = self.listeners.borrow().clone();
		for listener in listeners {
			listener(&ready);
		}
	}

	/// Renders raw text as the document written into `srcdoc`
	pub fn raw_text_document(&self, text: &str) -> String {
		format!(
			r#"<pre class="{}" style="white-space: pre-wrap; font-family: monospace; overflow: auto;">{}</pre>"#,
			html_escape(&self.config.raw_text_class),
			html_escape(text)
		)
	}

	fn frame(&self) -> Result<D::Element> {
		self.document
			.element_by_id(&self.config.frame_id)
			.ok_or_else(|| LoaderError::MissingFrame(self.config.frame_id.clone()))
	}

	fn show_page(&self, frame: &D::Element, resource: Resource) {
		if self.document.attribute(frame, "srcdoc").is_some() {
			self.document.remove_attribute(frame, "srcdoc");
		}
		self.document.set_attribute(frame, "src", &resource.path);
		self.update_download(&resource);
		*self.displayed.borrow_mut() = Displayed::Page(resource);
	}

	fn show_raw_text(&self, frame: &D::Element, resource: Resource, text: &str) {
		if self.document.attribute(frame, "src").is_some() {
			self.document.remove_attribute(frame, "src");
		}
		self.document
			.set_attribute(frame, "srcdoc", &self.raw_text_document(text));
		self.update_download(&resource);
		*self.displayed.borrow_mut() = Displayed::RawText(resource);
	}

	/// Points the download link at the displayed resource, or clears it
	fn update_download(&self, resource: &Resource) {
		let Some(link) = self
			.config
			.download_id
			.as_deref()
			.and_then(|id| self.document.element_by_id(id))
		else {
			return;
		};
		match DownloadLink::for_resource(resource) {
			Some(download) => {
				self.document.set_attribute(&link, "href", &download.href);
				self.document
					.set_attribute(&link, "download", &download.filename);
			}
			None => {
				self.document.remove_attribute(&link, "href");
				self.document.remove_attribute(&link, "download");
			}
		}
	}
}

/// Escapes text for inclusion in HTML content or a quoted attribute
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
