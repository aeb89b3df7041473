//! gamecodes library: download, flatten, and query the GameCodeBase feed.

pub mod data;
pub mod model;
pub mod query;
pub mod transform;

pub use data::{FetchError, fetch_feed};
pub use model::{CodeStatus, CodeType, Feed, GameCode};
pub use query::{SortBy, TypeFilter, filter_by_game, filter_by_type, game_list, search_codes, sort_codes};
pub use transform::flatten;
