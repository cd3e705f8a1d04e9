//! Value objects - immutable types that represent domain concepts

mod coordinate;
mod filter_level;
mod ids;
mod sort_order;

pub use coordinate::Coordinate;
pub use filter_level::FilterLevel;
pub use ids::{MessageId, UserId};
pub use sort_order::SortOrder;
