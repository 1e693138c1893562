//! Event models: read-only notifications of server-side state changes.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StripeResult;
use crate::form::{FormParams, ListOptions};

/// A state change recorded by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub object: Option<String>,
    /// Dotted event type, e.g. `charge.succeeded`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub livemode: bool,
    pub pending_webhooks: u32,
    pub data: EventData,
}

/// The resource an event is about, kept as a JSON document until the caller
/// knows which type to expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventData {
    pub object: Value,
    pub previous_attributes: Option<Value>,
}

impl EventData {
    /// The embedded object's `object` tag, e.g. `charge`.
    pub fn object_type(&self) -> Option<&str> {
        self.object.get("object").and_then(Value::as_str)
    }

    /// Look up a value by JSON pointer, e.g. `/card/last4`.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.object.pointer(path)
    }

    /// Decode the embedded object as a concrete resource.
    pub fn object_as<T: DeserializeOwned>(&self) -> StripeResult<T> {
        Ok(serde_json::from_value(self.object.clone())?)
    }
}

/// Comparison applied to an event's creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Lt,
    Gt,
    Lte,
    Gte,
    Eq,
}

/// Creation-time filter rendered as `created[op]=ts`, or `created=ts` for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedFilter {
    pub comparator: Comparator,
    pub timestamp: i64,
}

impl CreatedFilter {
    /// Compare creation time against `at`, truncated to whole seconds.
    pub fn new(comparator: Comparator, at: DateTime<Utc>) -> Self {
        Self {
            comparator,
            timestamp: at.timestamp(),
        }
    }

    fn key(&self) -> &'static str {
        match self.comparator {
            Comparator::Lt => "created[lt]",
            Comparator::Gt => "created[gt]",
            Comparator::Lte => "created[lte]",
            Comparator::Gte => "created[gte]",
            Comparator::Eq => "created",
        }
    }
}

/// Filter for `GET /events`.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub options: ListOptions,
    pub kind: Option<String>,
    pub created: Option<CreatedFilter>,
}

impl EventQuery {
    /// Every event type, server-default paging.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Only events of this type.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn created(mut self, comparator: Comparator, at: DateTime<Utc>) -> Self {
        self.created = Some(CreatedFilter::new(comparator, at));
        self
    }

    pub(crate) fn values(&self) -> FormParams {
        let mut params = self.options.to_params();
        params.set_str("type", self.kind.as_deref());
        if let Some(created) = &self.created {
            params.set(created.key(), created.timestamp);
        }
        params
    }
}
