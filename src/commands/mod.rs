//! Command implementations

pub mod categories;
pub mod play;
pub mod query;

pub use categories::list_categories;
pub use play::{PlayConfig, run_play};
pub use query::{parse_query, query_in_mode, query_word};
