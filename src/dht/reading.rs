use std::fmt;

use anyhow::{Context as _, Result};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dht::Timestamp;

/// One temperature/humidity sample as reported by the DHT API.
///
/// Serializes in the API's PascalCase form. Decoding follows the API's own
/// serializer: field names match regardless of ASCII case, the last
/// duplicate wins, and missing members take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SensorReading {
    #[serde(rename = "Id")]
    pub id: Option<String>,

    #[serde(rename = "Temperature")]
    pub temperature: f64,

    #[serde(rename = "Humidity")]
    pub humidity: f64,

    #[serde(rename = "Timestamp")]
    pub timestamp: Timestamp,
}

impl SensorReading {
    pub fn measured_at(&self, timezone: Tz) -> Result<DateTime<Tz>> {
        self.timestamp.in_timezone(timezone)
    }
}

impl<'de> Deserialize<'de> for SensorReading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SensorReadingVisitor)
    }
}

struct SensorReadingVisitor;

impl<'de> Visitor<'de> for SensorReadingVisitor {
    type Value = SensorReading;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sensor reading object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut reading = SensorReading::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                reading.id = map.next_value::<Option<Scalar>>()?.map(Scalar::into_text);
            } else if key.eq_ignore_ascii_case("temperature") {
                reading.temperature = map
                    .next_value::<Scalar>()?
                    .to_f64()
                    .map_err(|e| de::Error::custom(format!("Temperature: {e:#}")))?;
            } else if key.eq_ignore_ascii_case("humidity") {
                reading.humidity = map
                    .next_value::<Scalar>()?
                    .to_f64()
                    .map_err(|e| de::Error::custom(format!("Humidity: {e:#}")))?;
            } else if key.eq_ignore_ascii_case("timestamp") {
                reading.timestamp = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(reading)
    }
}

/// A JSON number, or a string standing in for one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }

    fn to_f64(&self) -> Result<f64> {
        match self {
            Scalar::Number(n) => n
                .as_f64()
                .with_context(|| format!("number out of range: {n}")),
            Scalar::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("failed to parse number: {s:?}")),
        }
    }
}
