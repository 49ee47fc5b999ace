//! Table page configuration

use living_backup_tables::CategoryRule;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_filter_class() -> Option<String> {
	Some("filter".to_string())
}

fn default_active_class() -> String {
	"active".to_string()
}

/// Wiring of one table to its search box and filter buttons
///
/// Tables that name the same `search_input_id` are searched together; tables
/// that name the same `filter_class` share the category buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
	/// `id` of the `<table>` element
	pub table_id: String,
	/// `id` of the text input driving the query
	#[serde(default)]
	pub search_input_id: Option<String>,
	/// Class shared by this table's category buttons
	#[serde(default = "default_filter_class")]
	pub filter_class: Option<String>,
	/// How the selected category is matched against row identifiers
	#[serde(default)]
	pub category_rule: CategoryRule,
}

impl TableConfig {
	/// Creates a configuration with the default filter class and no search box
	pub fn new(table_id: impl Into<String>) -> Self {
		Self {
			table_id: table_id.into(),
			search_input_id: None,
			filter_class: default_filter_class(),
			category_rule: CategoryRule::default(),
		}
	}

	/// Sets the search input id
	pub fn search_input(mut self, id: impl Into<String>) -> Self {
		self.search_input_id = Some(id.into());
		self
	}

	/// Sets the filter button class, `None` disables category filtering
	pub fn filter_class(mut self, class: Option<&str>) -> Self {
		self.filter_class = class.map(str::to_string);
		self
	}

	/// Sets the category rule
	pub fn category_rule(mut self, rule: CategoryRule) -> Self {
		self.category_rule = rule;
		self
	}
}

/// Configuration of every table rendered on one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesConfig {
	/// Tables on the page, in the order they are checked for visibility
	pub tables: Vec<TableConfig>,
	/// `id` of the element that receives the visible-row count
	#[serde(default)]
	pub count_id: Option<String>,
	/// Class marking the selected filter button
	#[serde(default = "default_active_class")]
	pub active_class: String,
}

impl TablesConfig {
	/// Creates a configuration for the given tables
	pub fn new(tables: Vec<TableConfig>) -> Self {
		Self {
			tables,
			count_id: None,
			active_class: default_active_class(),
		}
	}

	/// Tables driven jointly by one search box and one set of filter buttons
	pub fn joint<I, S>(table_ids: I, search_input_id: &str) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(
			table_ids
				.into_iter()
				.map(|id| TableConfig::new(id).search_input(search_input_id))
				.collect(),
		)
	}

	/// Sets the element that displays the visible-row count
	pub fn count(mut self, id: impl Into<String>) -> Self {
		self.count_id = Some(id.into());
		self
	}

	/// Parses a configuration from JSON
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Returns the distinct search input ids, in configuration order
	pub fn search_inputs(&self) -> Vec<&str> {
		let mut ids: Vec<&str> = Vec::new();
		for id in self.tables.iter().filter_map(|t| t.search_input_id.as_deref()) {
			if !ids.contains(&id) {
				ids.push(id);
			}
		}
		ids
	}

	/// Returns the distinct filter button classes, in configuration order
	pub fn filter_classes(&self) -> Vec<&str> {
		let mut classes: Vec<&str> = Vec::new();
		for class in self.tables.iter().filter_map(|t| t.filter_class.as_deref()) {
			if !classes.contains(&class) {
				classes.push(class);
			}
		}
		classes
	}
}

impl Default for TablesConfig {
	/// The entities and integrations tables sharing `searchBox` and `.filter`
	fn default() -> Self {
		Self::joint(["entitiesTable", "integrationsTable"], "searchBox")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_json_defaults() {
		let config = TablesConfig::from_json(r#"{"tables":[{"table_id":"entitiesTable"}]}"#).unwrap();
		let table = &config.tables[0];
		assert_eq!(table.filter_class.as_deref(), Some("filter"));
		assert_eq!(table.search_input_id, None);
		assert_eq!(table.category_rule, CategoryRule::Prefix);
		assert_eq!(config.active_class, "active");
		assert_eq!(config.count_id, None);
	}

	#[rstest]
	fn test_json_independent_tables() {
		let config = TablesConfig::from_json(
			r#"{
				"tables": [
					{"table_id": "entitiesTable", "search_input_id": "entitySearch",
					 "filter_class": "entity-filter"},
					{"table_id": "integrationsTable", "search_input_id": "integrationSearch",
					 "filter_class": "integration-filter", "category_rule": "first-char"}
				],
				"count_id": "rowCount"
			}"#,
		)
		.unwrap();
		assert_eq!(config.search_inputs(), vec!["entitySearch", "integrationSearch"]);
		assert_eq!(config.filter_classes(), vec!["entity-filter", "integration-filter"]);
		assert_eq!(config.tables[1].category_rule, CategoryRule::FirstChar);
		assert_eq!(config.count_id.as_deref(), Some("rowCount"));
	}

	#[rstest]
	fn test_default_is_joint() {
		let config = TablesConfig::default();
		assert_eq!(config.tables.len(), 2);
		assert_eq!(config.search_inputs(), vec!["searchBox"]);
		assert_eq!(config.filter_classes(), vec!["filter"]);
	}

	#[rstest]
	fn test_invalid_json() {
		assert!(TablesConfig::from_json(r#"{"tables": 3}"#).is_err());
	}
}
