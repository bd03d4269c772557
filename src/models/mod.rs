//! Data models for Roomdesk

pub mod enums;
pub mod page;
pub mod room;

// Re-export commonly used types
pub use enums::RoomType;
pub use page::{Page, PageRequest};
pub use room::{PriceQuery, PriceQuote, RoomDto};
