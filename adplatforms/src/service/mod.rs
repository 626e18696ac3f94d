//! High-level service facade for platform lookups.
//!
//! [`PlatformService`] is the single entry point a transport (HTTP, CLI,
//! interactive shell) talks to. It owns the wiring between the location
//! index, the query engine, and the listing source, and reports every
//! outcome as a [`ServiceResponse`].
//!
//! | Operation | Transport mapping |
//! |---|---|
//! | [`PlatformService::get_platforms`] | `GET /api/AdvertisingPlatform/GetPlatforms?location=&page=` |
//! | [`PlatformService::update_platforms`] | `PUT /api/AdvertisingPlatform/UpdatePlatforms` |
//!
//! [`ResponseStatus::http_code`] gives the status code such a transport
//! would answer with.

mod config;
mod error;
mod facade;
mod response;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::ServiceError;
pub use facade::PlatformService;
pub use response::{ResponseStatus, ServiceResponse};
