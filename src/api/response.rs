//! Purpose: Hold an already-fetched response body and expose it as a JSON tree.
//! Exports: `Response`.
//! Role: Hand-off point from the (external) transport to the materializers.
//! Invariants: Body text is decoded only through the `json::parse` boundary.
//! Invariants: Decode failures surface as `MalformedResponse` with a category hint.
//! Notes: Status codes stay with the transport; only the body reaches materialization.
#![allow(clippy::result_large_err)]

use super::ApiResult;
use crate::core::error::Error;
use crate::core::fields::JsonObject;
use crate::json::parse;
use serde_json::Value;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    body: String,
}

impl Response {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn as_json(&self) -> ApiResult<Value> {
        parse::from_str::<Value>(&self.body).map_err(|err| {
            let hint = parse::hint_for_error(&err, "response body");
            Error::malformed("invalid response json")
                .with_hint(hint)
                .with_source(err)
        })
    }

    pub fn as_json_object(&self) -> ApiResult<JsonObject> {
        match self.as_json()? {
            Value::Object(object) => Ok(object),
            _ => Err(Error::malformed("response body is not a json object")),
        }
    }
}
