//! Purpose: Typed field getters over a single JSON object node.
//! Exports: `JsonObject`, `get_*`/`require_*` getters, `get_array`, `collect_objects`.
//! Role: The only place payload scalars are coerced into Rust types.
//! Invariants: Absent and `null` fields read as `None`; `require_*` turns that into an error.
//! Invariants: Shape or coercion failures are `MalformedResponse` naming the field, with the cause as source.
//! Invariants: Timestamps accept only `YYYY-MM-DDTHH:MM:SS±HHMM` and are normalized to UTC.
//! Invariants: A normalized timestamp always has a year in 0..=9999, so RFC 3339 can render it.
//! Notes: Count strings such as `"100+"` are capped values and decode to cap + 1.
#![allow(clippy::result_large_err)]

use crate::core::error::Error;
use serde_json::{Map, Value};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub type JsonObject = Map<String, Value>;

type FieldResult<T> = Result<T, Error>;

const GRAPH_DATETIME: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
);

const RENDERABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

pub fn get_raw_string(name: &str, json: &JsonObject) -> FieldResult<Option<String>> {
    match json.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(Value::Bool(value)) => Ok(Some(value.to_string())),
        Some(other) => Err(type_mismatch(name, "string", other)),
    }
}

pub fn require_string(name: &str, json: &JsonObject) -> FieldResult<String> {
    required(name, get_raw_string(name, json)?)
}

pub fn get_long(name: &str, json: &JsonObject) -> FieldResult<Option<i64>> {
    match json.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(value)) => value.as_i64().map(Some).ok_or_else(|| {
            Error::malformed(format!("number {value} is not a 64-bit integer")).with_field(name)
        }),
        Some(Value::String(value)) => parse_long_text(name, value),
        Some(other) => Err(type_mismatch(name, "integer", other)),
    }
}

pub fn require_long(name: &str, json: &JsonObject) -> FieldResult<i64> {
    required(name, get_long(name, json)?)
}

pub fn get_int(name: &str, json: &JsonObject) -> FieldResult<Option<i32>> {
    let Some(value) = get_long(name, json)? else {
        return Ok(None);
    };
    i32::try_from(value).map(Some).map_err(|err| {
        Error::malformed(format!("integer {value} out of range"))
            .with_field(name)
            .with_source(err)
    })
}

pub fn require_int(name: &str, json: &JsonObject) -> FieldResult<i32> {
    required(name, get_int(name, json)?)
}

pub fn get_bool(name: &str, json: &JsonObject) -> FieldResult<Option<bool>> {
    match json.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(Value::String(value)) => match value.trim() {
            "" | "null" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(Error::malformed(format!("invalid boolean {other:?}")).with_field(name)),
        },
        Some(other) => Err(type_mismatch(name, "boolean", other)),
    }
}

pub fn require_bool(name: &str, json: &JsonObject) -> FieldResult<bool> {
    required(name, get_bool(name, json)?)
}

pub fn get_datetime(name: &str, json: &JsonObject) -> FieldResult<Option<OffsetDateTime>> {
    match json.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.is_empty() || value == "null" => Ok(None),
        Some(Value::String(value)) => parse_datetime(name, value).map(Some),
        Some(other) => Err(type_mismatch(name, "datetime string", other)),
    }
}

pub fn require_datetime(name: &str, json: &JsonObject) -> FieldResult<OffsetDateTime> {
    required(name, get_datetime(name, json)?)
}

pub fn get_object<'a>(name: &str, json: &'a JsonObject) -> FieldResult<Option<&'a JsonObject>> {
    match json.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(object)) => Ok(Some(object)),
        Some(other) => Err(type_mismatch(name, "object", other)),
    }
}

/// Locate a required array field.
pub fn get_array<'a>(name: &str, json: &'a JsonObject) -> FieldResult<&'a [Value]> {
    match json.get(name) {
        None | Some(Value::Null) => {
            Err(Error::malformed("missing required array").with_field(name))
        }
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(type_mismatch(name, "array", other)),
    }
}

/// Build one `T` per object element of the array `name`, in array order.
/// The first failing element aborts the whole array.
pub fn collect_objects<T, F>(name: &str, json: &JsonObject, mut build: F) -> FieldResult<Vec<T>>
where
    F: FnMut(&JsonObject) -> FieldResult<T>,
{
    let items = get_array(name, json)?;
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            return Err(Error::malformed(format!(
                "array element is {}, expected object",
                value_kind(item)
            ))
            .within(name, index));
        };
        out.push(build(object).map_err(|err| err.within(name, index))?);
    }
    Ok(out)
}

fn required<T>(name: &str, value: Option<T>) -> FieldResult<T> {
    value.ok_or_else(|| Error::malformed("missing required field").with_field(name))
}

fn parse_long_text(name: &str, text: &str) -> FieldResult<Option<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    let invalid = |err: std::num::ParseIntError| {
        Error::malformed(format!("invalid integer {trimmed:?}"))
            .with_field(name)
            .with_source(err)
    };
    if let Some(capped) = trimmed.strip_suffix('+') {
        let cap = capped.parse::<i64>().map_err(invalid)?;
        return cap.checked_add(1).map(Some).ok_or_else(|| {
            Error::malformed(format!("capped count {trimmed:?} overflows")).with_field(name)
        });
    }
    trimmed.parse::<i64>().map(Some).map_err(invalid)
}

fn parse_datetime(name: &str, text: &str) -> FieldResult<OffsetDateTime> {
    let parsed = OffsetDateTime::parse(text, GRAPH_DATETIME).map_err(|err| {
        Error::malformed(format!("unexpected datetime format {text:?}"))
            .with_field(name)
            .with_source(err)
    })?;
    parsed
        .checked_to_offset(UtcOffset::UTC)
        .filter(|utc| RENDERABLE_YEARS.contains(&utc.year()))
        .ok_or_else(|| Error::malformed(format!("datetime {text:?} out of range")).with_field(name))
}

fn type_mismatch(name: &str, expected: &str, found: &Value) -> Error {
    Error::malformed(format!("expected {expected}, found {}", value_kind(found))).with_field(name)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
