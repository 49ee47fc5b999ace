//! DOM abstraction layer
//!
//! Table and loader logic is written against [`Document`], a handle onto a
//! tree of display elements. Two implementations exist:
//!
//! - [`MemoryDocument`]: an arena-backed tree used on native targets and in
//!   tests
//! - `WebDocument` (WASM only): a thin wrapper over `web_sys::Document`
//!
//! Handles have browser semantics: cloning a document or an element yields
//! another reference to the same node, and every mutation goes through `&self`.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{ElementBuilder, MemoryDocument, NodeId, el};
#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;

/// A document whose elements the table controller and content loader mutate.
pub trait Document: Clone + 'static {
	/// Handle to a single element
	type Element: Clone + PartialEq + std::fmt::Debug;

	/// Returns the element with the given `id` attribute
	fn element_by_id(&self, id: &str) -> Option<Self::Element>;

	/// Returns every element carrying `class`, in document order
	fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

	/// Returns every element carrying the attribute `name`, in document order
	fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element>;

	/// Returns the lower-cased tag name of an element
	fn tag_name(&self, element: &Self::Element) -> String;

	/// Returns the direct element children of `parent`
	fn children(&self, parent: &Self::Element) -> Vec<Self::Element>;

	/// Returns the direct children of `parent` whose tag is `tag`
	fn children_by_tag(&self, parent: &Self::Element, tag: &str) -> Vec<Self::Element>;

	/// Returns the descendants of `root` whose tag is `tag`, in document order
	fn descendants_by_tag(&self, root: &Self::Element, tag: &str) -> Vec<Self::Element>;

	/// Returns the concatenated text of the element and its descendants
	fn text_content(&self, element: &Self::Element) -> String;

	/// Replaces the element's children with a single text node
	fn set_text_content(&self, element: &Self::Element, text: &str);

	/// Returns an attribute value
	fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

	/// Sets an attribute value
	fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

	/// Removes an attribute; a missing attribute is not an error
	fn remove_attribute(&self, element: &Self::Element, name: &str);

	/// Returns true when the element's class list contains `class`
	fn has_class(&self, element: &Self::Element, class: &str) -> bool;

	/// Adds `class` to the element's class list
	fn add_class(&self, element: &Self::Element, class: &str);

	/// Removes `class` from the element's class list
	fn remove_class(&self, element: &Self::Element, class: &str);

	/// Sets an inline style property
	fn set_style(&self, element: &Self::Element, property: &str, value: &str);

	/// Returns an inline style property
	fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

	/// Returns the current value of an input element (empty for other elements)
	fn input_value(&self, element: &Self::Element) -> String;

	/// Moves `child` to the end of `parent`'s children
	fn append_child(&self, parent: &Self::Element, child: &Self::Element);

	/// Returns the parent element, if any
	fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

	/// Returns the path component of the document location
	fn location_path(&self) -> String;

	/// Returns the query component of the document location, including `?`
	fn location_search(&self) -> String;

	/// Returns the document loaded inside a frame element
	fn frame_document(&self, frame: &Self::Element) -> Option<Self>;

	/// Shows or hides an element through its inline `display` property
	fn set_displayed(&self, element: &Self::Element, displayed: bool) {
		if displayed {
			self.set_style(element, "display", "");
		} else {
			self.set_style(element, "display", "none");
		}
	}

	/// Returns false when the element's own inline `display` is `none`
	fn is_displayed(&self, element: &Self::Element) -> bool {
		self.style(element, "display").as_deref() != Some("none")
	}

	/// Returns true when neither the element nor any ancestor is hidden
	fn is_rendered(&self, element: &Self::Element) -> bool {
		let mut current = Some(element.clone());
		while let Some(node) = current {
			if !self.is_displayed(&node) {
				return false;
			}
			current = self.parent(&node);
		}
		true
	}
}
