//! Purpose: Build entities straight from raw JSON text outside a response cycle.
//! Exports: `create_object`, `create_list`, `create_insight`, `create_insight_list`.
//! Role: Entry point for callers replaying cached or logged payloads.
//! Invariants: Factory construction never touches a `RawJsonStore`.
#![allow(clippy::result_large_err)]

use super::object::GraphObject;
use super::{ApiResult, Insight, Response, ResponseList};

pub fn create_object<T: GraphObject>(raw_json: &str) -> ApiResult<T> {
    let json = Response::new(raw_json).as_json_object()?;
    T::from_json(&json)
}

pub fn create_list<T: GraphObject>(raw_json: &str) -> ApiResult<ResponseList<T>> {
    let json = Response::new(raw_json).as_json_object()?;
    ResponseList::from_json(&json)
}

pub fn create_insight(raw_json: &str) -> ApiResult<Insight> {
    create_object(raw_json)
}

pub fn create_insight_list(raw_json: &str) -> ApiResult<ResponseList<Insight>> {
    create_list(raw_json)
}
