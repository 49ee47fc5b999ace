//! Navigation links

use crate::dom::Document;
use crate::logging::warn_log;

/// Elements whose link attribute names a resource to open in the content frame
#[derive(Debug, Clone)]
pub struct NavLinks<D: Document> {
	links: Vec<D::Element>,
}

impl<D: Document> NavLinks<D> {
	/// Collects the elements carrying `attribute`, skipping empty values
	pub fn collect(document: &D, attribute: &str) -> Self {
		let links = document
			.elements_with_attribute(attribute)
			.into_iter()
			.filter(|link| {
				let value = document.attribute(link, attribute).unwrap_or_default();
				if value.trim().is_empty() {
					warn_log!("Ignoring link with an empty {} attribute", attribute);
					return false;
				}
				true
			})
			.collect();
		Self { links }
	}

	/// Returns the number of links
	pub fn len(&self) -> usize {
		self.links.len()
	}

	/// Returns true when the document has no links
	pub fn is_empty(&self) -> bool {
		self.links.is_empty()
	}

	/// Iterates over the link elements
	pub fn iter(&self) -> std::slice::Iter<'_, D::Element> {
		self.links.iter()
	}
}

impl<D: Document> IntoIterator for NavLinks<D> {
	type Item = D::Element;
	type IntoIter = std::vec::IntoIter<D::Element>;

	fn into_iter(self) -> Self::IntoIter {
		self.links.into_iter()
	}
}
