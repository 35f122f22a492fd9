use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single stored entry.
///
/// Fields missing from the input JSON fall back to their zero value and
/// unknown fields are ignored, so partially specified items still load.
/// Field names match regardless of ASCII case; a repeated key keeps its
/// last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: String,
    pub email: String,
    pub age: i8,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i8) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let mut record = Record::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                record.id = map.next_value()?;
            } else if key.eq_ignore_ascii_case("email") {
                record.email = map.next_value()?;
            } else if key.eq_ignore_ascii_case("age") {
                record.age = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(record)
    }
}
