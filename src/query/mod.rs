// Search / filter / sort pipeline over an indexed candidate set.

pub mod filters;
pub mod pipeline;
pub mod sort;

// Re-exports
pub use filters::{filter_recipes, SearchFilters, DEFAULT_SORT};
pub use pipeline::search_and_filter;
pub use sort::{sort_recipes, SortKey};
