//! Filtering functionality for tables
//!
//! A row is visible when it satisfies both the active [`Category`] and the
//! free-text query held in [`FilterState`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the category that disables category narrowing
pub const ALL_CATEGORY: &str = "All";

/// Category selected with a filter button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Category {
	/// No narrowing
	#[default]
	All,
	/// Narrow to rows whose identifier matches this category
	Named(String),
}

impl Category {
	/// Creates a named category, mapping `All` and blank labels to [`Category::All`]
	pub fn named(label: impl AsRef<str>) -> Self {
		let label = label.as_ref().trim();
		if label.is_empty() || label.eq_ignore_ascii_case(ALL_CATEGORY) {
			Self::All
		} else {
			Self::Named(label.to_string())
		}
	}

	/// Returns the label shown on the filter button
	pub fn label(&self) -> &str {
		match self {
			Self::All => ALL_CATEGORY,
			Self::Named(label) => label,
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// How a named category is matched against a row identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryRule {
	/// The identifier starts with the category, ignoring case
	///
	/// Entity identifiers carry their domain as a prefix (`light.kitchen`
	/// belongs to `light`), so this is the default.
	#[default]
	Prefix,
	/// The identifier's first character equals the category, ignoring case
	FirstChar,
}

impl CategoryRule {
	/// Tests `identifier` against a named category
	pub fn matches(&self, identifier: &str, category: &str) -> bool {
		let identifier = identifier.trim();
		match self {
			Self::Prefix => identifier
				.to_lowercase()
				.starts_with(&category.trim().to_lowercase()),
			Self::FirstChar => {
				let first = identifier.chars().next().map(|c| c.to_uppercase().to_string());
				first.is_some_and(|first| first == category.trim().to_uppercase())
			}
		}
	}
}

/// Active category and text query of one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
	/// Selected category, `All` until a filter button is clicked
	pub category: Category,
	/// Current search text as typed
	pub query: String,
}

impl FilterState {
	/// Creates a filter state that shows every row
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true when the row identifier satisfies the category
	pub fn matches_category(&self, identifier: &str, rule: CategoryRule) -> bool {
		match &self.category {
			Category::All => true,
			Category::Named(category) => rule.matches(identifier, category),
		}
	}

	/// Returns true when any cell contains the query, ignoring case
	pub fn matches_query<S: AsRef<str>>(&self, cells: &[S]) -> bool {
		let query = self.query.to_lowercase();
		cells
			.iter()
			.any(|cell| cell.as_ref().to_lowercase().contains(&query))
	}

	/// Returns true when the row should be displayed
	///
	/// The first cell is the row identifier. A row without cells never
	/// matches a named category and only matches an empty query when it has
	/// at least one cell, mirroring "some cell contains the query".
	pub fn matches<S: AsRef<str>>(&self, cells: &[S], rule: CategoryRule) -> bool {
		let identifier = cells.first().map(|cell| cell.as_ref()).unwrap_or("");
		self.matches_category(identifier, rule) && self.matches_query(cells)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("All", Category::All)]
	#[case("  all ", Category::All)]
	#[case("", Category::All)]
	#[case(" light ", Category::Named("light".into()))]
	fn test_category_from_label(#[case] label: &str, #[case] expected: Category) {
		assert_eq!(Category::named(label), expected);
	}

	#[rstest]
	#[case(CategoryRule::Prefix, "light.kitchen", "light", true)]
	#[case(CategoryRule::Prefix, " Light.Kitchen", "LIGHT", true)]
	#[case(CategoryRule::Prefix, "switch.light", "light", false)]
	#[case(CategoryRule::Prefix, "B-101", "B", true)]
	#[case(CategoryRule::FirstChar, "b-101", "B", true)]
	#[case(CategoryRule::FirstChar, "light.kitchen", "light", false)]
	#[case(CategoryRule::FirstChar, "", "B", false)]
	fn test_rule_matches(
		#[case] rule: CategoryRule,
		#[case] identifier: &str,
		#[case] category: &str,
		#[case] expected: bool,
	) {
		assert_eq!(rule.matches(identifier, category), expected);
	}

	#[rstest]
	fn test_rule_deserialize() {
		let rule: CategoryRule = serde_json::from_str("\"first-char\"").unwrap();
		assert_eq!(rule, CategoryRule::FirstChar);
	}

	#[rstest]
	fn test_query_is_case_insensitive_substring() {
		let filter = FilterState {
			category: Category::All,
			query: "KITCH".into(),
		};
		assert!(filter.matches(&["light.kitchen", "Kitchen Light"], CategoryRule::Prefix));
		assert!(!filter.matches(&["light.porch", "Porch"], CategoryRule::Prefix));
	}

	#[rstest]
	fn test_empty_row_is_hidden() {
		let filter = FilterState::new();
		let cells: [&str; 0] = [];
		assert!(!filter.matches(&cells, CategoryRule::Prefix));
	}
}
