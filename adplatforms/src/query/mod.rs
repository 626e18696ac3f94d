//! Paginated platform queries.
//!
//! The [`QueryEngine`] turns a page number and an optional location filter
//! into a [`PlatformPage`]: resolve candidates (ancestor lookup or full
//! catalog), sort by name, then slice with [`PageWindow`].

mod engine;
mod filter;
mod page;

pub use engine::{QueryEngine, QueryError};
pub use filter::{PlatformFilter, PlatformPage, PlatformRecord};
pub use page::{PageWindow, DEFAULT_PAGE_SIZE};
