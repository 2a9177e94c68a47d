//! Purpose: Define the `Insight` entity and its per-period measurement values.
//! Exports: `Insight`, `InsightValue`.
//! Role: Reference mapping from a Graph insight node to an immutable typed object.
//! Invariants: `id`, `name`, `period`, and `values` are required; `title`/`description` may be absent.
//! Invariants: `values` keeps payload order; one bad element fails the whole insight.
//! Invariants: Equality compares attributes only, never the construction handle.
#![allow(clippy::result_large_err)]

use super::ApiResult;
use super::object::GraphObject;
use crate::core::fields::{
    JsonObject, collect_objects, get_raw_string, require_datetime, require_long, require_string,
};
use crate::core::store::{Handle, Tracked};
use serde::Serialize;
use std::fmt;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InsightValue {
    value: i64,
    #[serde(with = "time::serde::rfc3339")]
    end_time: OffsetDateTime,
}

impl InsightValue {
    fn from_json(json: &JsonObject) -> ApiResult<Self> {
        Ok(Self {
            value: require_long("value", json)?,
            end_time: require_datetime("end_time", json)?,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// End of the measured period, in UTC.
    pub fn end_time(&self) -> OffsetDateTime {
        self.end_time
    }
}

impl fmt::Display for InsightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end_time = self.end_time.format(&Rfc3339).map_err(|_| fmt::Error)?;
        write!(f, "({}, {end_time})", self.value)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Insight {
    #[serde(skip)]
    handle: Handle,
    id: String,
    name: String,
    period: String,
    title: Option<String>,
    description: Option<String>,
    values: Vec<InsightValue>,
}

impl Insight {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Metric name, e.g. `page_views`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aggregation period label, e.g. `day`, `week`, `lifetime`.
    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn values(&self) -> &[InsightValue] {
        &self.values
    }
}

impl GraphObject for Insight {
    const KIND: &'static str = "insight";

    fn from_json(json: &JsonObject) -> ApiResult<Self> {
        let id = require_string("id", json)?;
        let name = require_string("name", json)?;
        let period = require_string("period", json)?;
        let values = collect_objects("values", json, InsightValue::from_json)?;
        let title = get_raw_string("title", json)?;
        let description = get_raw_string("description", json)?;
        Ok(Self {
            handle: Handle::next(),
            id,
            name,
            period,
            title,
            description,
            values,
        })
    }
}

impl Tracked for Insight {
    fn handle(&self) -> Handle {
        self.handle
    }
}

impl PartialEq for Insight {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.period == other.period
            && self.title == other.title
            && self.description == other.description
            && self.values == other.values
    }
}

impl Eq for Insight {}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Insight [id={}, name={}, period={}, values=[",
            self.id, self.name, self.period
        )?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(
            f,
            "], title={}, description={}]",
            self.title.as_deref().unwrap_or("-"),
            self.description.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphObject, Insight};
    use crate::core::error::ErrorKind;
    use crate::core::fields::JsonObject;
    use crate::core::store::Tracked;
    use serde_json::{Value, json};
    use time::macros::datetime;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    fn page_views() -> JsonObject {
        object(json!({
            "id": "1",
            "name": "page_views",
            "period": "day",
            "values": [{"value": 5, "end_time": "2013-01-01T00:00:00+0000"}],
            "title": "T",
            "description": "D"
        }))
    }

    #[test]
    fn from_json_maps_every_attribute() {
        let insight = Insight::from_json(&page_views()).expect("insight");
        assert_eq!(insight.id(), "1");
        assert_eq!(insight.name(), "page_views");
        assert_eq!(insight.period(), "day");
        assert_eq!(insight.title(), Some("T"));
        assert_eq!(insight.description(), Some("D"));
        assert_eq!(insight.values().len(), 1);
        assert_eq!(insight.values()[0].value(), 5);
        assert_eq!(
            insight.values()[0].end_time(),
            datetime!(2013-01-01 00:00:00 UTC)
        );
    }

    #[test]
    fn values_keep_payload_order() {
        let json = object(json!({
            "id": "1", "name": "n", "period": "week",
            "values": [
                {"value": 10, "end_time": "2013-01-01T00:00:00+0000"},
                {"value": 20, "end_time": "2013-01-08T00:00:00+0000"}
            ]
        }));
        let insight = Insight::from_json(&json).expect("insight");
        let pairs: Vec<_> = insight
            .values()
            .iter()
            .map(|value| (value.value(), value.end_time()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (10, datetime!(2013-01-01 00:00:00 UTC)),
                (20, datetime!(2013-01-08 00:00:00 UTC)),
            ]
        );
    }

    #[test]
    fn optional_text_fields_may_be_absent() {
        let mut json = page_views();
        json.remove("title");
        json.insert("description".to_string(), Value::Null);
        let insight = Insight::from_json(&json).expect("insight");
        assert_eq!(insight.title(), None);
        assert_eq!(insight.description(), None);
    }

    #[test]
    fn missing_required_field_fails() {
        for field in ["id", "name", "period", "values"] {
            let mut json = page_views();
            json.remove(field);
            let err = Insight::from_json(&json).expect_err(field);
            assert_eq!(err.kind(), ErrorKind::MalformedResponse);
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn bad_nested_value_fails_whole_insight() {
        let mut json = page_views();
        json.insert(
            "values".to_string(),
            json!([
                {"value": 1, "end_time": "2013-01-01T00:00:00+0000"},
                {"value": 2, "end_time": "yesterday"}
            ]),
        );
        let err = Insight::from_json(&json).expect_err("bad end_time");
        assert_eq!(err.field(), Some("values[1].end_time"));
        assert_eq!(err.index(), Some(1));
    }

    #[test]
    fn unrenderable_end_time_fails_before_display() {
        let mut json = page_views();
        json.insert(
            "values".to_string(),
            json!([{"value": 1, "end_time": "0000-01-01T00:00:00+0100"}]),
        );
        let err = Insight::from_json(&json).expect_err("year -1 in UTC");
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.field(), Some("values[0].end_time"));

        json.insert(
            "values".to_string(),
            json!([{"value": 1, "end_time": "0000-01-01T00:00:00+0000"}]),
        );
        let insight = Insight::from_json(&json).expect("year 0");
        assert!(insight.to_string().contains("(1, 0000-01-01T00:00:00Z)"));
        assert!(serde_json::to_value(&insight).is_ok());
    }

    #[test]
    fn equality_ignores_handle() {
        let a = Insight::from_json(&page_views()).expect("a");
        let b = Insight::from_json(&page_views()).expect("b");
        assert_ne!(a.handle(), b.handle());
        assert_eq!(a, b);
    }

    #[test]
    fn display_lists_values_in_order() {
        let insight = Insight::from_json(&page_views()).expect("insight");
        assert_eq!(
            insight.to_string(),
            "Insight [id=1, name=page_views, period=day, values=[(5, 2013-01-01T00:00:00Z)], title=T, description=D]"
        );
    }

    #[test]
    fn serializes_without_handle() {
        let insight = Insight::from_json(&page_views()).expect("insight");
        let value = serde_json::to_value(&insight).expect("serialize");
        assert!(value.get("handle").is_none());
        assert_eq!(value["values"][0]["end_time"], json!("2013-01-01T00:00:00Z"));
    }
}
