//! adplatforms - hierarchical location → advertising platform lookup
//!
//! This library answers "which advertising platforms apply to this
//! location?" for locations written as paths like `/ru/svrd/revda`. A
//! platform registered at a location applies to every location beneath it.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```
//! use std::sync::Arc;
//! use adplatforms::ingest::MemorySource;
//! use adplatforms::location::{LocationIndex, PlatformMapping};
//! use adplatforms::query::PlatformFilter;
//! use adplatforms::service::PlatformService;
//!
//! let index = Arc::new(LocationIndex::new());
//! let service = PlatformService::with_source(index, Arc::new(MemorySource::default()), 10);
//!
//! let mut mapping = PlatformMapping::new();
//! mapping.insert("/ru".to_string(), vec!["Yandex.Direct".to_string()]);
//! mapping.insert("/ru/svrd".to_string(), vec!["Cool ads".to_string()]);
//! assert!(service.update_with(mapping).is_ok());
//!
//! let response = service.get_platforms(1, &PlatformFilter::for_location("/ru/svrd/revda"));
//! assert_eq!(response.value.unwrap().total_items, 2);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ingest;
pub mod location;
pub mod logging;
pub mod query;
pub mod service;

/// Version of the adplatforms library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
