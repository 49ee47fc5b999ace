//! Sort and filter state for Living Backup data tables
//!
//! The entity and integration pages each render a plain HTML table. This crate
//! holds everything about those tables that does not touch the DOM:
//!
//! - **Sorting**: per-column direction toggling and a stable sort permutation
//!   over the rows' cell text
//! - **Filtering**: category selection (`All` or a named category matched by a
//!   [`CategoryRule`]) combined with a case-insensitive text query
//! - **State**: [`TableState`], one instance per rendered table
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableState] --> B[SortState]
//!     A --> C[FilterState]
//!     B --> D[sort_permutation]
//!     C --> E[Category]
//!     C --> F[CategoryRule]
//! ```
//!
//! # Example
//!
//! ```rust
//! use living_backup_tables::{Category, CategoryRule, TableState, sort_permutation};
//!
//! let rows = vec![
//!     vec!["B-101".to_string()],
//!     vec!["B-102".to_string()],
//!     vec!["A-200".to_string()],
//! ];
//!
//! let mut state = TableState::new(CategoryRule::Prefix);
//! let direction = state.sort.next_direction(0);
//! assert_eq!(sort_permutation(&rows, 0, direction), vec![2, 0, 1]);
//!
//! state.filter.category = Category::named("B");
//! let visible = rows.iter().filter(|row| state.matches(row)).count();
//! assert_eq!(visible, 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod filtering;
pub mod sorting;
pub mod state;

// Re-exports for convenience
pub use error::TableError;
pub use filtering::{Category, CategoryRule, FilterState};
pub use sorting::{SortDirection, SortState, sort_permutation};
pub use state::TableState;
