//! Per-table state

use crate::filtering::{Category, CategoryRule, FilterState};
use crate::sorting::{SortDirection, SortState};

/// Sort and filter state owned by a single rendered table
///
/// Lives as long as the page does; nothing is persisted across reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
	/// Remembered sort directions
	pub sort: SortState,
	/// Active category and text query
	pub filter: FilterState,
	/// Rule used to match the category against row identifiers
	pub rule: CategoryRule,
}

impl TableState {
	/// Creates a state that shows every row in source order
	pub fn new(rule: CategoryRule) -> Self {
		Self {
			sort: SortState::new(),
			filter: FilterState::new(),
			rule,
		}
	}

	/// Returns true when the row passes the active category and query
	pub fn matches<S: AsRef<str>>(&self, cells: &[S]) -> bool {
		self.filter.matches(cells, self.rule)
	}

	/// Replaces the text query, returning true if it changed
	pub fn set_query(&mut self, query: impl Into<String>) -> bool {
		let query = query.into();
		if self.filter.query == query {
			return false;
		}
		self.filter.query = query;
		true
	}

	/// Replaces the category, returning true if it changed
	pub fn set_category(&mut self, category: Category) -> bool {
		if self.filter.category == category {
			return false;
		}
		self.filter.category = category;
		true
	}

	/// Records a sort request on `column` and returns its direction
	pub fn toggle_sort(&mut self, column: usize) -> SortDirection {
		self.sort.next_direction(column)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_set_query_reports_change() {
		let mut state = TableState::default();
		assert!(state.set_query("light"));
		assert!(!state.set_query("light"));
		assert_eq!(state.filter.query, "light");
	}

	#[rstest]
	fn test_category_and_query_combine() {
		let mut state = TableState::new(CategoryRule::Prefix);
		state.set_category(Category::named("sensor"));
		state.set_query("temp");

		assert!(state.matches(&["sensor.living_temp", "Living Temperature"]));
		assert!(!state.matches(&["sensor.humidity", "Humidity"]));
		assert!(!state.matches(&["climate.temp", "Thermostat"]));
	}
}
