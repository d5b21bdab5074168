//! Read-only projections over the record store: new-card listings, the
//! studied-on audit, and the upcoming calendar.

pub mod error;
pub mod new_items;
pub mod studied;
pub mod upcoming;

pub use error::{ReportError, Result};
pub use new_items::list_new_cards;
pub use studied::{StudiedRow, resolve_target_date, studied_on};
pub use upcoming::{UpcomingEntry, upcoming_by_date};
