//! Purpose: Run one response cycle: decode, construct, and optionally retain raw json.
//! Exports: `Materializer`.
//! Role: Top-level construction path binding `Config` and a caller-owned `RawJsonStore`.
//! Invariants: Retention is active only when the config enables it and a store is attached.
//! Invariants: With retention active the store is cleared before construction starts.
//! Invariants: Exactly one entry is registered per returned object; lists register the list, not elements.
//! Invariants: Failed cycles register nothing.
#![allow(clippy::result_large_err)]

use super::object::GraphObject;
use super::{ApiResult, Insight, Response, ResponseList};
use crate::core::config::Config;
use crate::core::fields::JsonObject;
use crate::core::store::{RawJsonStore, Tracked};
use serde_json::Value;

pub struct Materializer<'a> {
    config: Config,
    store: Option<&'a mut RawJsonStore>,
}

impl<'a> Materializer<'a> {
    pub fn new(config: &Config) -> Self {
        Self {
            config: *config,
            store: None,
        }
    }

    pub fn with_store(mut self, store: &'a mut RawJsonStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Materialize a single-object response.
    pub fn object<T: GraphObject>(&mut self, response: &Response) -> ApiResult<T> {
        let retain = self.begin_cycle(T::KIND);
        let json = response.as_json_object()?;
        self.build_object(retain, json)
    }

    /// Materialize a paged `{"data": [...]}` response.
    pub fn list<T: GraphObject>(&mut self, response: &Response) -> ApiResult<ResponseList<T>> {
        let retain = self.begin_cycle(T::KIND);
        let json = response.as_json_object()?;
        self.build_list(retain, json)
    }

    pub fn insight(&mut self, response: &Response) -> ApiResult<Insight> {
        self.object(response)
    }

    pub fn insight_list(&mut self, response: &Response) -> ApiResult<ResponseList<Insight>> {
        self.list(response)
    }

    /// Same cycle as `object`, for callers that already hold a decoded node.
    pub fn object_from_json<T: GraphObject>(&mut self, json: JsonObject) -> ApiResult<T> {
        let retain = self.begin_cycle(T::KIND);
        self.build_object(retain, json)
    }

    pub fn list_from_json<T: GraphObject>(&mut self, json: JsonObject) -> ApiResult<ResponseList<T>> {
        let retain = self.begin_cycle(T::KIND);
        self.build_list(retain, json)
    }

    fn build_object<T: GraphObject>(&mut self, retain: bool, json: JsonObject) -> ApiResult<T> {
        let object = T::from_json(&json)?;
        self.finish_cycle(retain, &object, json);
        tracing::debug!(kind = T::KIND, handle = %object.handle(), "materialized object");
        Ok(object)
    }

    fn build_list<T: GraphObject>(
        &mut self,
        retain: bool,
        json: JsonObject,
    ) -> ApiResult<ResponseList<T>> {
        let list = ResponseList::<T>::from_json(&json)?;
        self.finish_cycle(retain, &list, json);
        tracing::debug!(
            kind = T::KIND,
            count = list.len(),
            handle = %list.handle(),
            "materialized list"
        );
        Ok(list)
    }

    fn begin_cycle(&mut self, kind: &str) -> bool {
        let enabled = self.config.is_json_store_enabled();
        let retain = match self.store.as_deref_mut() {
            Some(store) if enabled => {
                store.clear();
                true
            }
            None if enabled => {
                tracing::debug!(kind, "json store enabled but no store attached");
                false
            }
            _ => false,
        };
        tracing::debug!(kind, retain, "materialization cycle started");
        retain
    }

    fn finish_cycle<O: Tracked>(&mut self, retain: bool, object: &O, json: JsonObject) {
        if !retain {
            return;
        }
        if let Some(store) = self.store.as_deref_mut() {
            store.register(object.handle(), Value::Object(json));
        }
    }
}
