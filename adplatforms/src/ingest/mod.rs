//! Ingestion of platform listings.
//!
//! A listing is plain text with one platform per line:
//!
//! ```text
//! Yandex.Direct: /ru
//! Revda worker: /ru/svrd/revda, /ru/svrd/pervik
//! ```
//!
//! [`parse_platform_lines`] inverts it into a location → platforms
//! [`PlatformMapping`](crate::location::PlatformMapping) ready for
//! [`LocationIndex::replace`](crate::location::LocationIndex::replace).
//! [`PlatformSource`] abstracts where the text comes from.

mod error;
mod parser;
mod source;

pub use error::IngestError;
pub use parser::{parse_platform_lines, ParseOutcome};
pub use source::{FileSource, MemorySource, PlatformSource};
