//! Purpose: Shared construction contract for Graph entities.
//! Exports: `GraphObject`.
//! Role: Lets collection and cycle code stay generic while each entity owns its field mapping.
//! Invariants: `from_json` either returns a complete object or an error; never a partial one.

use super::ApiResult;
use crate::core::fields::JsonObject;
use crate::core::store::Tracked;

pub trait GraphObject: Tracked + Sized {
    /// Short label used in logs.
    const KIND: &'static str;

    /// Build from one JSON object node without touching any raw-json store.
    fn from_json(json: &JsonObject) -> ApiResult<Self>;
}
