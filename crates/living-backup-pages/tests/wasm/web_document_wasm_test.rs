//! WebDocument tests in a real browser
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use living_backup_pages::dom::{Document, WebDocument};
use living_backup_pages::tables::{TablePage, TablesConfig};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> WebDocument {
	let document = WebDocument::current().unwrap();
	document.inner().body().unwrap().set_inner_html(html);
	document
}

#[wasm_bindgen_test]
fn test_lookup_and_attributes() {
	let doc = mount(r#"<a id="link" data-file="entities.html" class="nav">Entities</a>"#);
	let link = doc.element_by_id("link").unwrap();

	assert_eq!(doc.tag_name(&link), "a");
	assert_eq!(doc.attribute(&link, "data-file").as_deref(), Some("entities.html"));
	assert_eq!(doc.elements_with_attribute("data-file").len(), 1);

	doc.add_class(&link, "active");
	assert!(doc.has_class(&link, "active"));
	doc.remove_attribute(&link, "data-file");
	assert!(doc.elements_with_attribute("data-file").is_empty());
}

#[wasm_bindgen_test]
fn test_display_toggle() {
	let doc = mount(r#"<div id="wrap"><span id="inner">x</span></div>"#);
	let wrap = doc.element_by_id("wrap").unwrap();
	let inner = doc.element_by_id("inner").unwrap();

	doc.set_displayed(&wrap, false);
	assert!(doc.is_displayed(&inner));
	assert!(!doc.is_rendered(&inner));

	doc.set_displayed(&wrap, true);
	assert!(doc.is_rendered(&inner));
}

#[wasm_bindgen_test]
fn test_table_page_sorts_rows() {
	let doc = mount(
		r#"<input id="searchBox">
		<table id="entitiesTable">
			<thead><tr><th>ID</th></tr></thead>
			<tbody><tr><td>b</td></tr><tr><td>c</td></tr><tr><td>a</td></tr></tbody>
		</table>"#,
	);
	let mut page = TablePage::new(doc.clone(), TablesConfig::default());
	page.init();
	page.sort("entitiesTable", 0);

	let table = doc.element_by_id("entitiesTable").unwrap();
	let order: Vec<String> = doc
		.descendants_by_tag(&table, "td")
		.iter()
		.map(|td| doc.text_content(td))
		.collect();
	assert_eq!(order, vec!["a", "b", "c"]);
	assert_eq!(page.visible_count(), Some(3));
}
