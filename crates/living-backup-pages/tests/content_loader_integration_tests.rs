//! Content Loader Integration Tests
//!
//! Runs [`ContentLoader`] against an in-memory index page and a fetcher
//! serving canned files.
//!
//! Test Categories:
//! - Category 1: Pages and raw text
//! - Category 2: Failures
//! - Category 3: Path resolution and initial target
//! - Category 4: Links and readiness

#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use living_backup_pages::dom::{Document, MemoryDocument, el};
use living_backup_pages::error::{LoaderError, Result};
use living_backup_pages::loader::{
	ContentLoader, Displayed, LoaderConfig, ResourceKind, TextFetcher,
};
use rstest::{fixture, rstest};

// ============================================================================
// Fixtures
// ============================================================================

/// Serves files from a map and records every request
#[derive(Clone, Default)]
struct MockFetcher {
	files: Rc<HashMap<String, String>>,
	requests: Rc<RefCell<Vec<String>>>,
}

impl MockFetcher {
	fn with_files(files: &[(&str, &str)]) -> Self {
		Self {
			files: Rc::new(
				files
					.iter()
					.map(|(path, body)| (path.to_string(), body.to_string()))
					.collect(),
			),
			requests: Rc::default(),
		}
	}

	fn requests(&self) -> Vec<String> {
		self.requests.borrow().clone()
	}
}

impl TextFetcher for MockFetcher {
	async fn fetch_text(&self, url: &str) -> Result<String> {
		self.requests.borrow_mut().push(url.to_string());
		self.files.get(url).cloned().ok_or(LoaderError::Status {
			url: url.to_string(),
			status: 404,
		})
	}
}

const DEVICE_YAML: &str = "name: <Kitchen & Hall>\nicon: \"mdi:lamp\"\n";

fn index_page() -> MemoryDocument {
	MemoryDocument::new(
		el("body")
			.child(
				el("nav")
					.child(el("a").id("entitiesLink").attr("data-file", "entities.html"))
					.child(el("a").id("deviceLink").attr("data-file", "device.yaml"))
					.child(el("a").id("brokenLink").attr("data-file", " ")),
			)
			.child(el("a").id("download-btn"))
			.child(el("iframe").id("content-frame")),
	)
}

fn config() -> LoaderConfig {
	LoaderConfig::default()
		.nested_marker("/community/")
		.download_id("download-btn")
}

#[fixture]
fn fetcher() -> MockFetcher {
	MockFetcher::with_files(&[("device.yaml", DEVICE_YAML), ("../device.yaml", DEVICE_YAML)])
}

#[fixture]
fn loader(fetcher: MockFetcher) -> ContentLoader<MemoryDocument, MockFetcher> {
	ContentLoader::new(index_page(), fetcher, config())
}

fn frame_attr(loader: &ContentLoader<MemoryDocument, MockFetcher>, name: &str) -> Option<String> {
	let doc = loader.document();
	doc.attribute(&doc.element_by_id("content-frame").unwrap(), name)
}

fn download(loader: &ContentLoader<MemoryDocument, MockFetcher>) -> (Option<String>, Option<String>) {
	let doc = loader.document();
	let link = doc.element_by_id("download-btn").unwrap();
	(doc.attribute(&link, "href"), doc.attribute(&link, "download"))
}

// ============================================================================
// Category 1: Pages and raw text
// ============================================================================

/// Pages are opened through the frame's src
#[rstest]
#[tokio::test]
async fn test_navigate_page(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	loader.navigate("entities.html").await.unwrap();

	assert_eq!(frame_attr(&loader, "src").as_deref(), Some("entities.html"));
	assert_eq!(frame_attr(&loader, "srcdoc"), None);
	assert!(matches!(loader.displayed(), Displayed::Page(ref r) if r.path == "entities.html"));
}

/// Raw text is fetched, escaped and written to srcdoc
#[rstest]
#[tokio::test]
async fn test_navigate_raw_text(fetcher: MockFetcher) {
	let loader = ContentLoader::new(index_page(), fetcher.clone(), config());
	loader.navigate("device.yaml").await.unwrap();

	let srcdoc = frame_attr(&loader, "srcdoc").unwrap();
	assert!(srcdoc.starts_with(r#"<pre class="yaml-content""#));
	assert!(srcdoc.contains("monospace"));
	assert!(srcdoc.contains("name: &lt;Kitchen &amp; Hall&gt;"));
	assert!(srcdoc.contains("icon: &quot;mdi:lamp&quot;"));
	assert!(srcdoc.ends_with("</pre>"));
	assert_eq!(fetcher.requests(), vec!["device.yaml"]);
	assert_eq!(loader.displayed().resource().unwrap().kind, ResourceKind::RawText);
}

/// Switching from a page to raw text drops src, and back again drops srcdoc
#[rstest]
#[tokio::test]
async fn test_switching_modes_clears_previous_attribute(
	loader: ContentLoader<MemoryDocument, MockFetcher>,
) {
	loader.navigate("entities.html").await.unwrap();
	loader.navigate("device.yaml").await.unwrap();
	assert_eq!(frame_attr(&loader, "src"), None);
	assert!(frame_attr(&loader, "srcdoc").is_some());

	loader.navigate("integrations.html").await.unwrap();
	assert_eq!(frame_attr(&loader, "srcdoc"), None);
	assert_eq!(frame_attr(&loader, "src").as_deref(), Some("integrations.html"));
}

/// The download link follows the displayed resource
#[rstest]
#[tokio::test]
async fn test_download_link(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	loader.navigate("entities.html").await.unwrap();
	assert_eq!(
		download(&loader),
		(Some("entities.json".to_string()), Some("entities.json".to_string()))
	);

	loader.navigate("device.yaml").await.unwrap();
	assert_eq!(
		download(&loader),
		(Some("device.yaml".to_string()), Some("device.yaml".to_string()))
	);

	loader.navigate("about").await.unwrap();
	assert_eq!(download(&loader), (None, None));
}

// ============================================================================
// Category 2: Failures
// ============================================================================

/// A failed fetch leaves the frame and download link as they were
#[rstest]
#[tokio::test]
async fn test_failed_fetch_keeps_content(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	loader.navigate("entities.html").await.unwrap();
	let before = loader.displayed();

	let err = loader.navigate("missing.yaml").await.unwrap_err();

	assert_eq!(
		err,
		LoaderError::Status {
			url: "missing.yaml".to_string(),
			status: 404
		}
	);
	assert_eq!(frame_attr(&loader, "src").as_deref(), Some("entities.html"));
	assert_eq!(frame_attr(&loader, "srcdoc"), None);
	assert_eq!(loader.displayed(), before);
	assert_eq!(download(&loader).0.as_deref(), Some("entities.json"));
}

/// Empty identifiers never reach the fetcher
#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn test_empty_identifier(fetcher: MockFetcher, #[case] identifier: &str) {
	let loader = ContentLoader::new(index_page(), fetcher.clone(), config());

	assert_eq!(
		loader.navigate(identifier).await,
		Err(LoaderError::MissingIdentifier)
	);
	assert!(fetcher.requests().is_empty());
	assert_eq!(loader.displayed(), Displayed::Nothing);
}

/// A page without the content frame reports it
#[rstest]
#[tokio::test]
async fn test_missing_frame(fetcher: MockFetcher) {
	let doc = MemoryDocument::new(el("body"));
	let loader = ContentLoader::new(doc, fetcher, config());

	assert_eq!(
		loader.navigate("entities.html").await,
		Err(LoaderError::MissingFrame("content-frame".to_string()))
	);
}

// ============================================================================
// Category 3: Path resolution and initial target
// ============================================================================

/// Pages under the nested marker reach the content root through ../
#[rstest]
#[tokio::test]
async fn test_nested_page_prefixes_paths(fetcher: MockFetcher) {
	let doc = index_page().with_location("/site/community/index.html", "");
	let loader = ContentLoader::new(doc, fetcher.clone(), config());

	loader.navigate("device.yaml").await.unwrap();
	assert_eq!(fetcher.requests(), vec!["../device.yaml"]);

	loader.navigate("entities.html").await.unwrap();
	assert_eq!(frame_attr(&loader, "src").as_deref(), Some("../entities.html"));
	assert_eq!(download(&loader).0.as_deref(), Some("../entities.json"));
	assert_eq!(download(&loader).1.as_deref(), Some("entities.json"));
}

/// The query parameter overrides the default target
#[rstest]
#[case("", Some("entities.html"), None)]
#[case("?file=integrations.html", Some("integrations.html"), None)]
#[case("?file=device.yaml", None, Some("device.yaml"))]
#[tokio::test]
async fn test_load_initial(
	fetcher: MockFetcher,
	#[case] search: &str,
	#[case] src: Option<&str>,
	#[case] raw_text: Option<&str>,
) {
	let doc = index_page().with_location("/index.html", search);
	let loader = ContentLoader::new(doc, fetcher, config());

	loader.load_initial().await.unwrap();

	assert_eq!(frame_attr(&loader, "src").as_deref(), src);
	let shown = match loader.displayed() {
		Displayed::RawText(resource) => Some(resource.identifier),
		_ => None,
	};
	assert_eq!(shown.as_deref(), raw_text);
}

// ============================================================================
// Category 4: Links and readiness
// ============================================================================

/// Links with an empty attribute are skipped
#[rstest]
fn test_links(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	let doc = loader.document();
	let links: Vec<_> = loader.links().into_iter().collect();

	assert_eq!(
		links,
		vec![
			doc.element_by_id("entitiesLink").unwrap(),
			doc.element_by_id("deviceLink").unwrap(),
		]
	);
}

/// Following a link navigates to its attribute value
#[rstest]
#[tokio::test]
async fn test_follow(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	let doc = loader.document().clone();

	loader
		.follow(&doc.element_by_id("deviceLink").unwrap())
		.await
		.unwrap();
	assert!(loader.displayed().resource().unwrap().is_raw_text());

	let broken = doc.element_by_id("brokenLink").unwrap();
	assert_eq!(
		loader.follow(&broken).await,
		Err(LoaderError::MissingIdentifier)
	);
	assert!(loader.displayed().resource().unwrap().is_raw_text());
}

/// Listeners receive the frame document and what was displayed
#[rstest]
#[tokio::test]
async fn test_frame_ready_listeners(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	let inner = MemoryDocument::new(el("table").id("entitiesTable"));
	let frame = loader.document().element_by_id("content-frame").unwrap();
	loader.document().attach_frame_document(&frame, inner.clone());

	let events: Rc<RefCell<Vec<(bool, Displayed)>>> = Rc::default();
	for _ in 0..2 {
		let events = Rc::clone(&events);
		let inner = inner.clone();
		loader.on_frame_ready(move |ready| {
			let same_document = ready.document.as_ref() == Some(&inner);
			events.borrow_mut().push((same_document, ready.displayed.clone()));
		});
	}

	loader.navigate("entities.html").await.unwrap();
	loader.frame_loaded();

	let events = events.borrow();
	assert_eq!(events.len(), 2);
	for (same_document, displayed) in events.iter() {
		assert!(same_document);
		assert!(matches!(displayed, Displayed::Page(r) if r.identifier == "entities.html"));
	}
}

/// Readiness without a frame document still notifies listeners
#[rstest]
fn test_frame_ready_without_document(loader: ContentLoader<MemoryDocument, MockFetcher>) {
	let called = Rc::new(RefCell::new(None));
	let sink = Rc::clone(&called);
	loader.on_frame_ready(move |ready| {
		*sink.borrow_mut() = Some(ready.document.is_none());
	});

	loader.frame_loaded();
	assert_eq!(*called.borrow(), Some(true));
}
