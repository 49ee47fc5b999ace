//! In-memory element tree
//!
//! [`MemoryDocument`] mirrors the subset of browser DOM behaviour the table
//! controller and content loader rely on: id/class/attribute lookup, text
//! content, inline styles, input values, moving nodes with `append_child`, and
//! frames that host a sub-document.
//!
//! ```rust
//! use living_backup_pages::dom::{Document, MemoryDocument, el};
//!
//! let doc = MemoryDocument::new(
//!     el("body").child(el("input").id("searchBox").value("light")),
//! );
//! let input = doc.element_by_id("searchBox").unwrap();
//! assert_eq!(doc.input_value(&input), "light");
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::Document;

/// Handle to an element of a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
	tag: String,
	attributes: BTreeMap<String, String>,
	style: BTreeMap<String, String>,
	text: String,
	value: String,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	frame: Option<MemoryDocument>,
}

#[derive(Debug)]
struct Tree {
	nodes: Vec<Node>,
	root: NodeId,
	path: String,
	search: String,
}

impl Tree {
	fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}

	fn node_mut(&mut self, id: NodeId) -> &mut Node {
		&mut self.nodes[id.0]
	}

	/// Preorder walk starting at `start`
	fn walk(&self, start: NodeId) -> Vec<NodeId> {
		let mut order = Vec::new();
		let mut stack = vec![start];
		while let Some(id) = stack.pop() {
			order.push(id);
			stack.extend(self.node(id).children.iter().rev().copied());
		}
		order
	}

	fn text(&self, id: NodeId) -> String {
		let node = self.node(id);
		let mut text = node.text.clone();
		for &child in &node.children {
			text.push_str(&self.text(child));
		}
		text
	}

	fn is_ancestor(&self, ancestor: NodeId, of: NodeId) -> bool {
		let mut current = Some(of);
		while let Some(id) = current {
			if id == ancestor {
				return true;
			}
			current = self.node(id).parent;
		}
		false
	}

	fn detach(&mut self, id: NodeId) {
		if let Some(parent) = self.node(id).parent {
			self.node_mut(parent).children.retain(|&child| child != id);
		}
		self.node_mut(id).parent = None;
	}

	fn classes(&self, id: NodeId) -> Vec<String> {
		self.node(id)
			.attributes
			.get("class")
			.map(|list| list.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default()
	}

	fn set_classes(&mut self, id: NodeId, classes: &[String]) {
		self.node_mut(id)
			.attributes
			.insert("class".to_string(), classes.join(" "));
	}

	fn insert(&mut self, builder: ElementBuilder, parent: Option<NodeId>) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node {
			tag: builder.tag,
			attributes: builder.attributes,
			style: builder.style,
			text: builder.text,
			value: builder.value,
			parent,
			children: Vec::new(),
			frame: None,
		});
		for child in builder.children {
			let child_id = self.insert(child, Some(id));
			self.node_mut(id).children.push(child_id);
		}
		id
	}
}

/// Declarative description of an element subtree
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
	tag: String,
	attributes: BTreeMap<String, String>,
	style: BTreeMap<String, String>,
	text: String,
	value: String,
	children: Vec<ElementBuilder>,
}

/// Starts building an element with the given tag
pub fn el(tag: &str) -> ElementBuilder {
	ElementBuilder {
		tag: tag.to_ascii_lowercase(),
		..ElementBuilder::default()
	}
}

impl ElementBuilder {
	/// Sets the `id` attribute
	pub fn id(self, id: &str) -> Self {
		self.attr("id", id)
	}

	/// Appends a class to the `class` attribute
	pub fn class(mut self, class: &str) -> Self {
		let entry = self.attributes.entry("class".to_string()).or_default();
		if !entry.is_empty() {
			entry.push(' ');
		}
		entry.push_str(class);
		self
	}

	/// Sets an arbitrary attribute
	pub fn attr(mut self, name: &str, value: &str) -> Self {
		self.attributes.insert(name.to_string(), value.to_string());
		self
	}

	/// Sets an inline style property
	pub fn style(mut self, property: &str, value: &str) -> Self {
		self.style.insert(property.to_string(), value.to_string());
		self
	}

	/// Sets the element's own text, rendered before its children
	pub fn text(mut self, text: &str) -> Self {
		self.text = text.to_string();
		self
	}

	/// Sets the current value of an input element
	pub fn value(mut self, value: &str) -> Self {
		self.value = value.to_string();
		self
	}

	/// Appends a child element
	pub fn child(mut self, child: ElementBuilder) -> Self {
		self.children.push(child);
		self
	}

	/// Appends several child elements
	pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
		self.children.extend(children);
		self
	}
}

/// Arena-backed [`Document`] implementation
#[derive(Clone)]
pub struct MemoryDocument {
	tree: Rc<RefCell<Tree>>,
}

impl fmt::Debug for MemoryDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tree = self.tree.borrow();
		f.debug_struct("MemoryDocument")
			.field("path", &tree.path)
			.field("nodes", &tree.nodes.len())
			.finish_non_exhaustive()
	}
}

impl PartialEq for MemoryDocument {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.tree, &other.tree)
	}
}

impl MemoryDocument {
	/// Creates a document whose root element is built from `root`
	pub fn new(root: ElementBuilder) -> Self {
		let mut tree = Tree {
			nodes: Vec::new(),
			root: NodeId(0),
			path: "/".to_string(),
			search: String::new(),
		};
		tree.root = tree.insert(root, None);
		Self {
			tree: Rc::new(RefCell::new(tree)),
		}
	}

	/// Sets the location the document reports, e.g. `("/community/index.html", "?file=a.yaml")`
	pub fn with_location(self, path: &str, search: &str) -> Self {
		{
			let mut tree = self.tree.borrow_mut();
			tree.path = path.to_string();
			tree.search = search.to_string();
		}
		self
	}

	/// Returns the root element
	pub fn root(&self) -> NodeId {
		self.tree.borrow().root
	}

	/// Builds a subtree and appends it to `parent`
	pub fn insert(&self, parent: &NodeId, builder: ElementBuilder) -> NodeId {
		let mut tree = self.tree.borrow_mut();
		let id = tree.insert(builder, Some(*parent));
		tree.node_mut(*parent).children.push(id);
		id
	}

	/// Simulates the user typing into an input element
	pub fn set_input_value(&self, element: &NodeId, value: &str) {
		self.tree.borrow_mut().node_mut(*element).value = value.to_string();
	}

	/// Makes `document` the content of the frame element
	pub fn attach_frame_document(&self, frame: &NodeId, document: MemoryDocument) {
		self.tree.borrow_mut().node_mut(*frame).frame = Some(document);
	}
}

impl Document for MemoryDocument {
	type Element = NodeId;

	fn element_by_id(&self, id: &str) -> Option<NodeId> {
		let tree = self.tree.borrow();
		tree.walk(tree.root)
			.into_iter()
			.find(|&node| tree.node(node).attributes.get("id").map(String::as_str) == Some(id))
	}

	fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
		let tree = self.tree.borrow();
		tree.walk(tree.root)
			.into_iter()
			.filter(|&node| tree.classes(node).iter().any(|c| c == class))
			.collect()
	}

	fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
		let tree = self.tree.borrow();
		tree.walk(tree.root)
			.into_iter()
			.filter(|&node| tree.node(node).attributes.contains_key(name))
			.collect()
	}

	fn tag_name(&self, element: &NodeId) -> String {
		self.tree.borrow().node(*element).tag.clone()
	}

	fn children(&self, parent: &NodeId) -> Vec<NodeId> {
		self.tree.borrow().node(*parent).children.clone()
	}

	fn children_by_tag(&self, parent: &NodeId, tag: &str) -> Vec<NodeId> {
		let tree = self.tree.borrow();
		tree.node(*parent)
			.children
			.iter()
			.copied()
			.filter(|&child| tree.node(child).tag.eq_ignore_ascii_case(tag))
			.collect()
	}

	fn descendants_by_tag(&self, root: &NodeId, tag: &str) -> Vec<NodeId> {
		let tree = self.tree.borrow();
		tree.walk(*root)
			.into_iter()
			.skip(1)
			.filter(|&node| tree.node(node).tag.eq_ignore_ascii_case(tag))
			.collect()
	}

	fn text_content(&self, element: &NodeId) -> String {
		self.tree.borrow().text(*element)
	}

	fn set_text_content(&self, element: &NodeId, text: &str) {
		let mut tree = self.tree.borrow_mut();
		let children = std::mem::take(&mut tree.node_mut(*element).children);
		for child in children {
			tree.node_mut(child).parent = None;
		}
		tree.node_mut(*element).text = text.to_string();
	}

	fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
		self.tree.borrow().node(*element).attributes.get(name).cloned()
	}

	fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
		self.tree
			.borrow_mut()
			.node_mut(*element)
			.attributes
			.insert(name.to_string(), value.to_string());
	}

	fn remove_attribute(&self, element: &NodeId, name: &str) {
		self.tree
			.borrow_mut()
			.node_mut(*element)
			.attributes
			.remove(name);
	}

	fn has_class(&self, element: &NodeId, class: &str) -> bool {
		self.tree
			.borrow()
			.classes(*element)
			.iter()
			.any(|c| c == class)
	}

	fn add_class(&self, element: &NodeId, class: &str) {
		let mut tree = self.tree.borrow_mut();
		let mut classes = tree.classes(*element);
		if !classes.iter().any(|c| c == class) {
			classes.push(class.to_string());
			tree.set_classes(*element, &classes);
		}
	}

	fn remove_class(&self, element: &NodeId, class: &str) {
		let mut tree = self.tree.borrow_mut();
		let mut classes = tree.classes(*element);
		let before = classes.len();
		classes.retain(|c| c != class);
		if classes.len() != before {
			tree.set_classes(*element, &classes);
		}
	}

	fn set_style(&self, element: &NodeId, property: &str, value: &str) {
		let mut tree = self.tree.borrow_mut();
		let style = &mut tree.node_mut(*element).style;
		if value.is_empty() {
			style.remove(property);
		} else {
			style.insert(property.to_string(), value.to_string());
		}
	}

	fn style(&self, element: &NodeId, property: &str) -> Option<String> {
		self.tree.borrow().node(*element).style.get(property).cloned()
	}

	fn input_value(&self, element: &NodeId) -> String {
		let tree = self.tree.borrow();
		let node = tree.node(*element);
		if node.tag == "input" || node.tag == "textarea" {
			node.value.clone()
		} else {
			String::new()
		}
	}

	fn append_child(&self, parent: &NodeId, child: &NodeId) {
		let mut tree = self.tree.borrow_mut();
		// Appending an ancestor would create a cycle; the DOM rejects it too.
		if tree.is_ancestor(*child, *parent) {
			return;
		}
		tree.detach(*child);
		tree.node_mut(*parent).children.push(*child);
		tree.node_mut(*child).parent = Some(*parent);
	}

	fn parent(&self, element: &NodeId) -> Option<NodeId> {
		self.tree.borrow().node(*element).parent
	}

	fn location_path(&self) -> String {
		self.tree.borrow().path.clone()
	}

	fn location_search(&self) -> String {
		self.tree.borrow().search.clone()
	}

	fn frame_document(&self, frame: &NodeId) -> Option<Self> {
		self.tree.borrow().node(*frame).frame.clone()
	}
}
