//! Client core for a remote book catalog (Gutendex-style API).
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and layers an async
//! [`Catalog`] on top that drives any [`Transport`].
//!
//! # Design
//! - `Query` is a closed set of filter intents; each maps to fixed query
//!   parameters.
//! - `CatalogClient` is stateless. It holds only `base_url`, and every
//!   operation is split into `build_*` (request) and `parse_*` (response).
//! - Wire records (`RawWork`) are decoded permissively and then validated
//!   into `Work`, whose id is always positive.
//! - `Catalog` owns no mutable state, so calls may run concurrently.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod transport;
pub mod types;

pub use catalog::Catalog;
pub use client::{CatalogClient, Envelope, DEFAULT_BASE_URL, IMAGE_JPEG, TEXT_PLAIN, TEXT_PLAIN_ASCII};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use http::{HttpRequest, HttpResponse};
pub use query::{Query, SortOrder};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Contributor, RawContributor, RawWork, Work};
