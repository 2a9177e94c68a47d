//! Purpose: Define the public surface for turning Graph responses into typed objects.
//! Exports: Entities, the paginated list, the per-cycle `Materializer`, and raw-json retention types.
//! Role: Public, additive-only surface; field coercion helpers stay under `core`.
//! Invariants: Every returned object is complete and immutable; failures return `Error`.
//! Invariants: Raw-json retention state lives in a caller-owned `RawJsonStore`, never a global.

mod factory;
mod insight;
mod list;
mod materialize;
mod object;
mod response;

pub use crate::core::config::{Config, JSON_STORE_ENV};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::store::{Handle, RawJsonStore, StoreState, Tracked};
pub use factory::{create_insight, create_insight_list, create_list, create_object};
pub use insight::{Insight, InsightValue};
pub use list::{Cursors, Paging, ResponseList};
pub use materialize::Materializer;
pub use object::GraphObject;
pub use response::Response;

pub type ApiResult<T> = Result<T, Error>;
