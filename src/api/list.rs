//! Purpose: Paginated collection of materialized entities plus its paging cursors.
//! Exports: `ResponseList`, `Paging`, `Cursors`.
//! Role: Shape of every `{"data": [...], "paging": {...}}` Graph response.
//! Invariants: Length equals the `data` array length; order equals array order.
//! Invariants: Any element failure fails the whole list; no partial lists exist.
//! Invariants: The list has its own handle, distinct from its elements' handles.
#![allow(clippy::result_large_err)]

use super::ApiResult;
use super::object::GraphObject;
use crate::core::fields::{JsonObject, collect_objects, get_object, get_raw_string};
use crate::core::store::{Handle, Tracked};
use serde::Serialize;
use std::ops::Deref;

pub(crate) const DATA_FIELD: &str = "data";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Cursors {
    pub before: Option<String>,
    pub after: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Paging {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub cursors: Option<Cursors>,
}

impl Paging {
    fn from_json(json: &JsonObject) -> ApiResult<Option<Self>> {
        let Some(paging) = get_object("paging", json)? else {
            return Ok(None);
        };
        let cursors = match get_object("cursors", paging)? {
            Some(cursors) => Some(Cursors {
                before: get_raw_string("before", cursors)?,
                after: get_raw_string("after", cursors)?,
            }),
            None => None,
        };
        Ok(Some(Self {
            previous: get_raw_string("previous", paging)?,
            next: get_raw_string("next", paging)?,
            cursors,
        }))
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ResponseList<T> {
    #[serde(skip)]
    handle: Handle,
    data: Vec<T>,
    paging: Option<Paging>,
}

impl<T: GraphObject> ResponseList<T> {
    /// Build from a paged response node without touching any raw-json store.
    pub fn from_json(json: &JsonObject) -> ApiResult<Self> {
        let data = collect_objects(DATA_FIELD, json, T::from_json)?;
        let paging = Paging::from_json(json)?;
        Ok(Self {
            handle: Handle::next(),
            data,
            paging,
        })
    }
}

impl<T> ResponseList<T> {
    pub fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Tracked for ResponseList<T> {
    fn handle(&self) -> Handle {
        self.handle
    }
}

impl<T> Deref for ResponseList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T: PartialEq> PartialEq for ResponseList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.paging == other.paging
    }
}

impl<T> IntoIterator for ResponseList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResponseList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
