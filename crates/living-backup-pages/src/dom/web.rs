//! `web_sys` backed [`Document`]

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCollection, HtmlElement, HtmlIFrameElement, HtmlInputElement};

use super::Document;
use crate::logging::warn_log;

/// Browser document handle
#[derive(Debug, Clone, PartialEq)]
pub struct WebDocument {
	document: web_sys::Document,
}

impl WebDocument {
	/// Wraps an existing document, e.g. the content document of an iframe
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Returns the document of the current window
	pub fn current() -> Option<Self> {
		web_sys::window()?.document().map(Self::new)
	}

	/// Returns the wrapped `web_sys::Document`
	pub fn inner(&self) -> &web_sys::Document {
		&self.document
	}
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
	(0..collection.length())
		.filter_map(|index| collection.item(index))
		.collect()
}

impl Document for WebDocument {
	type Element = Element;

	fn element_by_id(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}

	fn elements_by_class(&self, class: &str) -> Vec<Element> {
		collect(self.document.get_elements_by_class_name(class))
	}

	fn elements_with_attribute(&self, name: &str) -> Vec<Element> {
		let Ok(nodes) = self.document.query_selector_all(&format!("[{name}]")) else {
			warn_log!("Invalid attribute selector: {}", name);
			return Vec::new();
		};
		(0..nodes.length())
			.filter_map(|index| nodes.item(index))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn tag_name(&self, element: &Element) -> String {
		element.tag_name().to_ascii_lowercase()
	}

	fn children(&self, parent: &Element) -> Vec<Element> {
		collect(parent.children())
	}

	fn children_by_tag(&self, parent: &Element, tag: &str) -> Vec<Element> {
		collect(parent.children())
			.into_iter()
			.filter(|child| child.tag_name().eq_ignore_ascii_case(tag))
			.collect()
	}

	fn descendants_by_tag(&self, root: &Element, tag: &str) -> Vec<Element> {
		collect(root.get_elements_by_tag_name(tag))
	}

	fn text_content(&self, element: &Element) -> String {
		element.text_content().unwrap_or_default()
	}

	fn set_text_content(&self, element: &Element, text: &str) {
		element.set_text_content(Some(text));
	}

	fn attribute(&self, element: &Element, name: &str) -> Option<String> {
		element.get_attribute(name)
	}

	fn set_attribute(&self, element: &Element, name: &str, value: &str) {
		if element.set_attribute(name, value).is_err() {
			warn_log!("Failed to set attribute {}", name);
		}
	}

	fn remove_attribute(&self, element: &Element, name: &str) {
		let _ = element.remove_attribute(name);
	}

	fn has_class(&self, element: &Element, class: &str) -> bool {
		element.class_list().contains(class)
	}

	fn add_class(&self, element: &Element, class: &str) {
		let _ = element.class_list().add_1(class);
	}

	fn remove_class(&self, element: &Element, class: &str) {
		let _ = element.class_list().remove_1(class);
	}

	fn set_style(&self, element: &Element, property: &str, value: &str) {
		let Some(html) = element.dyn_ref::<HtmlElement>() else {
			return;
		};
		let style = html.style();
		let result = if value.is_empty() {
			style.remove_property(property).map(|_| ())
		} else {
			style.set_property(property, value)
		};
		if result.is_err() {
			warn_log!("Failed to set style {}", property);
		}
	}

	fn style(&self, element: &Element, property: &str) -> Option<String> {
		element
			.dyn_ref::<HtmlElement>()
			.and_then(|html| html.style().get_property_value(property).ok())
			.filter(|value| !value.is_empty())
	}

	fn input_value(&self, element: &Element) -> String {
		element
			.dyn_ref::<HtmlInputElement>()
			.map(HtmlInputElement::value)
			.unwrap_or_default()
	}

	fn append_child(&self, parent: &Element, child: &Element) {
		if parent.append_child(child).is_err() {
			warn_log!("Failed to move <{}> element", child.tag_name());
		}
	}

	fn parent(&self, element: &Element) -> Option<Element> {
		element.parent_element()
	}

	fn location_path(&self) -> String {
		self.document
			.location()
			.and_then(|location| location.pathname().ok())
			.unwrap_or_default()
	}

	fn location_search(&self) -> String {
		self.document
			.location()
			.and_then(|location| location.search().ok())
			.unwrap_or_default()
	}

	fn frame_document(&self, frame: &Element) -> Option<Self> {
		frame
			.dyn_ref::<HtmlIFrameElement>()?
			.content_document()
			.map(Self::new)
	}
}
