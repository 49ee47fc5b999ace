//! Sorting and filtering of rendered tables
//!
//! [`TablePage`] owns one [`TableState`] per configured table and applies it to
//! the rows found in the document. Every operation re-renders directly into
//! the document (row order through `append_child`, visibility through the
//! rows' `display` style) and then refreshes the visible-row count.

use living_backup_tables::{Category, SortDirection, TableState, sort_permutation};

use super::config::{TableConfig, TablesConfig};
use crate::dom::Document;
use crate::logging::{debug_log, warn_log};

/// Attribute on `<th>` elements recording the direction of the last sort
pub const ORDER_ATTRIBUTE: &str = "data-order";

/// Attribute on filter buttons naming their category explicitly
pub const CATEGORY_ATTRIBUTE: &str = "data-category";

#[derive(Debug)]
struct TableBinding {
	config: TableConfig,
	state: TableState,
}

/// Sort/filter controller for the tables of one document
#[derive(Debug)]
pub struct TablePage<D: Document> {
	document: D,
	config: TablesConfig,
	tables: Vec<TableBinding>,
}

impl<D: Document> TablePage<D> {
	/// Creates a controller; nothing is touched until [`TablePage::init`]
	pub fn new(document: D, config: TablesConfig) -> Self {
		let tables = config
			.tables
			.iter()
			.map(|table| TableBinding {
				config: table.clone(),
				state: TableState::new(table.category_rule),
			})
			.collect();
		Self {
			document,
			config,
			tables,
		}
	}

	/// Returns the document the controller operates on
	pub fn document(&self) -> &D {
		&self.document
	}

	/// Returns the page configuration
	pub fn config(&self) -> &TablesConfig {
		&self.config
	}

	/// Returns the state of a configured table
	pub fn state(&self, table_id: &str) -> Option<&TableState> {
		self.binding(table_id).map(|binding| &binding.state)
	}

	/// Returns true when at least one configured table exists in the document
	pub fn has_tables(&self) -> bool {
		self.tables
			.iter()
			.any(|binding| self.document.element_by_id(&binding.config.table_id).is_some())
	}

	/// Prepares headers, picks up pre-filled search boxes and runs a first filter pass
	///
	/// A header already carrying a `data-order` marker seeds its column's
	/// direction, so the next click on it flips the rendered order.
	pub fn init(&mut self) {
		for index in 0..self.tables.len() {
			let headers = self.headers(&self.tables[index].config.table_id);
			for (column, header) in headers.iter().enumerate() {
				self.document.set_style(header, "cursor", "pointer");
				let Some(marker) = self.document.attribute(header, ORDER_ATTRIBUTE) else {
					continue;
				};
				match marker.parse::<SortDirection>() {
					Ok(direction) => self.tables[index].state.sort.restore(column, direction),
					Err(err) => warn_log!(
						"Ignoring {} on column {} of {}: {}",
						ORDER_ATTRIBUTE,
						column,
						self.tables[index].config.table_id,
						err
					),
				}
			}
		}

		let inputs: Vec<String> = self
			.config
			.search_inputs()
			.into_iter()
			.map(str::to_string)
			.collect();
		for input_id in &inputs {
			self.read_query(input_id);
		}
		self.apply_filters();
	}

	/// Returns the header cells of a table, in column order
	///
	/// Only the first row of `<thead>` counts, or the table's first row when
	/// there is no `<thead>`. Row headers inside `<tbody>` are not columns.
	pub fn headers(&self, table_id: &str) -> Vec<D::Element> {
		let Some(table) = self.document.element_by_id(table_id) else {
			return Vec::new();
		};
		let head = self
			.document
			.descendants_by_tag(&table, "thead")
			.into_iter()
			.next()
			.unwrap_or(table);
		self.document
			.descendants_by_tag(&head, "tr")
			.into_iter()
			.next()
			.map(|row| self.document.children_by_tag(&row, "th"))
			.unwrap_or_default()
	}

	/// Returns the filter buttons carrying `filter_class`
	pub fn filter_buttons(&self, filter_class: &str) -> Vec<D::Element> {
		self.document.elements_by_class(filter_class)
	}

	/// Sorts a table by the text of `column`, toggling that column's direction
	///
	/// Returns the direction applied, or `None` when the table, its body or the
	/// header for `column` does not exist.
	pub fn sort(&mut self, table_id: &str, column: usize) -> Option<SortDirection> {
		let table = self.document.element_by_id(table_id)?;
		let header = self.headers(table_id).into_iter().nth(column)?;
		let (body, rows) = self.rows(&table);
		let binding = self.binding_mut(table_id)?;

		let direction = binding.state.toggle_sort(column);
		self.document
			.set_attribute(&header, ORDER_ATTRIBUTE, direction.as_str());

		let cells: Vec<Vec<String>> = rows.iter().map(|row| self.cells(row)).collect();
		for index in sort_permutation(&cells, column, direction) {
			self.document.append_child(&body, &rows[index]);
		}
		debug_log!("Sorted {} by column {} ({})", table_id, column, direction.as_str());

		self.report_count();
		Some(direction)
	}

	/// Re-reads a search box and re-filters every table it drives
	pub fn search_changed(&mut self, input_id: &str) {
		if self.read_query(input_id) {
			let document = &self.document;
			for binding in &self.tables {
				if binding.config.search_input_id.as_deref() == Some(input_id) {
					Self::filter_rows(document, binding);
				}
			}
		}
		self.report_count();
	}

	/// Activates a filter button and re-filters every table sharing its class
	pub fn select_category(&mut self, filter_class: &str, button: &D::Element) {
		let active_class = self.config.active_class.clone();
		for other in self.document.elements_by_class(filter_class) {
			self.document.remove_class(&other, &active_class);
		}
		self.document.add_class(button, &active_class);

		let label = self
			.document
			.attribute(button, CATEGORY_ATTRIBUTE)
			.unwrap_or_else(|| self.document.text_content(button));
		let category = Category::named(label);

		let document = &self.document;
		for binding in &mut self.tables {
			if binding.config.filter_class.as_deref() == Some(filter_class) {
				binding.state.set_category(category.clone());
				Self::filter_rows(document, binding);
			}
		}
		self.report_count();
	}

	/// Recomputes the visibility of every row of every table
	pub fn apply_filters(&mut self) {
		for binding in &self.tables {
			Self::filter_rows(&self.document, binding);
		}
		self.report_count();
	}

	/// Counts the displayed rows of the active table
	///
	/// The active table is the first configured table that exists and is not
	/// hidden, itself or through an ancestor.
	pub fn visible_count(&self) -> Option<usize> {
		let table = self.tables.iter().find_map(|binding| {
			self.document
				.element_by_id(&binding.config.table_id)
				.filter(|table| self.document.is_rendered(table))
		})?;
		let (_, rows) = self.rows(&table);
		Some(
			rows.iter()
				.filter(|row| self.document.is_displayed(row))
				.count(),
		)
	}

	fn report_count(&self) {
		let Some(id) = self.config.count_id.as_deref() else {
			return;
		};
		let (Some(target), Some(count)) = (self.document.element_by_id(id), self.visible_count())
		else {
			return;
		};
		self.document.set_text_content(&target, &count.to_string());
	}

	/// Stores the input's value as the query of the tables it drives
	///
	/// Returns false when the input does not exist.
	fn read_query(&mut self, input_id: &str) -> bool {
		let Some(input) = self.document.element_by_id(input_id) else {
			return false;
		};
		let query = self.document.input_value(&input);
		for binding in &mut self.tables {
			if binding.config.search_input_id.as_deref() == Some(input_id) {
				binding.state.set_query(query.clone());
			}
		}
		true
	}

	fn filter_rows(document: &D, binding: &TableBinding) {
		let Some(table) = document.element_by_id(&binding.config.table_id) else {
			return;
		};
		let (_, rows) = Self::rows_of(document, &table);
		for row in rows {
			let cells = Self::cells_of(document, &row);
			document.set_displayed(&row, binding.state.matches(&cells));
		}
	}

	fn rows(&self, table: &D::Element) -> (D::Element, Vec<D::Element>) {
		Self::rows_of(&self.document, table)
	}

	/// Body rows of a table; the header row lives in `<thead>` and is skipped
	fn rows_of(document: &D, table: &D::Element) -> (D::Element, Vec<D::Element>) {
		let body = document
			.descendants_by_tag(table, "tbody")
			.into_iter()
			.next()
			.unwrap_or_else(|| table.clone());
		let rows = document.children_by_tag(&body, "tr");
		(body, rows)
	}

	fn cells(&self, row: &D::Element) -> Vec<String> {
		Self::cells_of(&self.document, row)
	}

	fn cells_of(document: &D, row: &D::Element) -> Vec<String> {
		document
			.children(row)
			.into_iter()
			.filter(|cell| matches!(document.tag_name(cell).as_str(), "td" | "th"))
			.map(|cell| document.text_content(&cell))
			.collect()
	}

	fn binding(&self, table_id: &str) -> Option<&TableBinding> {
		self.tables
			.iter()
			.find(|binding| binding.config.table_id == table_id)
	}

	fn binding_mut(&mut self, table_id: &str) -> Option<&mut TableBinding> {
		self.tables
			.iter_mut()
			.find(|binding| binding.config.table_id == table_id)
	}
}
