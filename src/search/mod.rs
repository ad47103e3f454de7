//! Free-text search, input debouncing and table ordering

pub mod debounce;
pub mod matcher;
pub mod sort;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use matcher::{matches_query, search_people};
pub use sort::{SortColumn, SortDirection, SortOrder, compare_alumni, sort_people};
