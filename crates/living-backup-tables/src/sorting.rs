//! Sorting functionality for tables

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::TableError;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the marker written to a header's `data-order` attribute
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Applies this direction to an ascending comparison result
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Ascending),
			"desc" | "descending" => Ok(Self::Descending),
			other => Err(TableError::UnknownSortDirection(other.to_string())),
		}
	}
}

/// Remembered sort directions of one table
///
/// Selecting a column that was never sorted yields
/// [`SortDirection::Ascending`], selecting it again flips whatever it used
/// last. [`SortState::restore`] seeds a column from a marker already present
/// in the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
	directions: HashMap<usize, SortDirection>,
	active: Option<usize>,
}

impl SortState {
	/// Creates an empty sort state
	pub fn new() -> Self {
		Self::default()
	}

	/// Computes, records and returns the direction for the next sort on `column`
	pub fn next_direction(&mut self, column: usize) -> SortDirection {
		let next = match self.directions.get(&column) {
			Some(last) => last.toggle(),
			None => SortDirection::Ascending,
		};
		self.directions.insert(column, next);
		self.active = Some(column);
		next
	}

	/// Records `direction` as the last sort applied to `column`
	///
	/// The next [`SortState::next_direction`] on that column flips it.
	pub fn restore(&mut self, column: usize, direction: SortDirection) {
		self.directions.insert(column, direction);
		self.active = Some(column);
	}

	/// Returns the last direction used for `column`
	pub fn direction(&self, column: usize) -> Option<SortDirection> {
		self.directions.get(&column).copied()
	}

	/// Returns the most recently sorted column and its direction
	pub fn current_sort(&self) -> Option<(usize, SortDirection)> {
		let column = self.active?;
		self.direction(column).map(|direction| (column, direction))
	}
}

/// Normalizes cell text into its sort key
pub fn sort_key(text: &str) -> String {
	text.trim().to_lowercase()
}

/// Returns the order in which `rows` should be displayed
///
/// The result is a permutation of `0..rows.len()`. Keys are compared
/// case-insensitively on trimmed text; a row without the requested column
/// sorts as an empty cell. The sort is stable and the direction reverses the
/// comparator, so equal keys keep the relative order they arrived in.
pub fn sort_permutation<R, S>(rows: &[R], column: usize, direction: SortDirection) -> Vec<usize>
where
	R: AsRef<[S]>,
	S: AsRef<str>,
{
	let keys: Vec<String> = rows
		.iter()
		.map(|row| {
			row.as_ref()
				.get(column)
				.map(|cell| sort_key(cell.as_ref()))
				.unwrap_or_default()
		})
		.collect();

	let mut order: Vec<usize> = (0..rows.len()).collect();
	order.sort_by(|&a, &b| direction.apply(keys[a].cmp(&keys[b])));
	order
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_toggle() {
		assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
		assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
	}

	#[rstest]
	#[case("asc", SortDirection::Ascending)]
	#[case("DESC", SortDirection::Descending)]
	#[case(" descending ", SortDirection::Descending)]
	fn test_parse_marker(#[case] marker: &str, #[case] expected: SortDirection) {
		assert_eq!(marker.parse::<SortDirection>().unwrap(), expected);
	}

	#[rstest]
	fn test_parse_unknown_marker() {
		let err = "sideways".parse::<SortDirection>().unwrap_err();
		assert_eq!(err, TableError::UnknownSortDirection("sideways".into()));
	}

	#[rstest]
	fn test_first_sort_is_ascending_then_toggles() {
		let mut state = SortState::new();
		assert_eq!(state.next_direction(2), SortDirection::Ascending);
		assert_eq!(state.next_direction(2), SortDirection::Descending);
		assert_eq!(state.next_direction(2), SortDirection::Ascending);
	}

	#[rstest]
	fn test_columns_toggle_independently() {
		let mut state = SortState::new();
		state.next_direction(0);
		state.next_direction(0);
		assert_eq!(state.next_direction(1), SortDirection::Ascending);
		assert_eq!(state.direction(0), Some(SortDirection::Descending));
		assert_eq!(state.current_sort(), Some((1, SortDirection::Ascending)));
	}

	#[rstest]
	fn test_restored_direction_flips_on_next_sort() {
		let mut state = SortState::new();
		state.restore(3, SortDirection::Ascending);
		assert_eq!(state.current_sort(), Some((3, SortDirection::Ascending)));
		assert_eq!(state.next_direction(3), SortDirection::Descending);
		assert_eq!(state.next_direction(0), SortDirection::Ascending);
	}

	#[rstest]
	fn test_sort_key_trims_and_lowercases() {
		assert_eq!(sort_key("  Light.Kitchen \n"), "light.kitchen");
	}

	#[rstest]
	fn test_missing_cell_sorts_first_ascending() {
		let rows = vec![vec!["b", "x"], vec!["a"], vec!["c", "a"]];
		assert_eq!(
			sort_permutation(&rows, 1, SortDirection::Ascending),
			vec![1, 2, 0]
		);
	}
}
