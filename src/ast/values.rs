//! Runtime values carried by constants and insert rows.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A concrete runtime value, serialized to QL literal syntax on demand.
///
/// Map entries keep their source iteration order, so serialization is
/// deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KsqlValue {
    Null,
    Bool(bool),
    Int(i32),
    BigInt(i64),
    Double(f64),
    Decimal(Decimal),
    String(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(DateTime<FixedOffset>),
    Array(Vec<KsqlValue>),
    Map(Vec<(KsqlValue, KsqlValue)>),
    Struct(Vec<(String, KsqlValue)>),
}

impl KsqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, KsqlValue::Null)
    }
}

impl From<bool> for KsqlValue {
    fn from(b: bool) -> Self {
        KsqlValue::Bool(b)
    }
}

impl From<i32> for KsqlValue {
    fn from(n: i32) -> Self {
        KsqlValue::Int(n)
    }
}

impl From<i64> for KsqlValue {
    fn from(n: i64) -> Self {
        KsqlValue::BigInt(n)
    }
}

impl From<f64> for KsqlValue {
    fn from(n: f64) -> Self {
        KsqlValue::Double(n)
    }
}

impl From<Decimal> for KsqlValue {
    fn from(d: Decimal) -> Self {
        KsqlValue::Decimal(d)
    }
}

impl From<&str> for KsqlValue {
    fn from(s: &str) -> Self {
        KsqlValue::String(s.to_string())
    }
}

impl From<String> for KsqlValue {
    fn from(s: String) -> Self {
        KsqlValue::String(s)
    }
}

impl From<Uuid> for KsqlValue {
    fn from(u: Uuid) -> Self {
        KsqlValue::Uuid(u)
    }
}

impl From<NaiveDate> for KsqlValue {
    fn from(d: NaiveDate) -> Self {
        KsqlValue::Date(d)
    }
}

impl From<NaiveTime> for KsqlValue {
    fn from(t: NaiveTime) -> Self {
        KsqlValue::Time(t)
    }
}

impl From<DateTime<FixedOffset>> for KsqlValue {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        KsqlValue::Timestamp(ts)
    }
}

impl<T> From<Option<T>> for KsqlValue
where
    T: Into<KsqlValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => KsqlValue::Null,
        }
    }
}

impl<T> From<Vec<T>> for KsqlValue
where
    T: Into<KsqlValue>,
{
    fn from(items: Vec<T>) -> Self {
        KsqlValue::Array(items.into_iter().map(|v| v.into()).collect())
    }
}
