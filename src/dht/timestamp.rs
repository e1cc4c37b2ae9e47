use std::str::FromStr;

use anyhow::{Context as _, Error, Result, bail};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// When a reading was taken, as the API wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time without an offset.
    Local(NaiveDateTime),

    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// The instant in `timezone`. `Local` values are read as wall time
    /// there; an ambiguous time resolves to the earlier instant.
    pub fn in_timezone(&self, timezone: Tz) -> Result<DateTime<Tz>> {
        match self {
            Timestamp::Local(naive) => match naive.and_local_timezone(timezone) {
                LocalResult::Single(dt) => Ok(dt),
                LocalResult::Ambiguous(dt, _) => Ok(dt),
                LocalResult::None => bail!("invalid timestamp in {timezone}: {naive}"),
            },
            Timestamp::Offset(dt) => Ok(dt.with_timezone(&timezone)),
        }
    }
}

/// `0001-01-01T00:00:00`, for readings that carry no timestamp.
impl Default for Timestamp {
    fn default() -> Self {
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default();
        Timestamp::Local(date.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Local(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp::Offset(dt)
    }
}

/// Accepts `2024-01-01T00:00:00[.fff]` or RFC 3339 with an offset.
impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(naive) = s.parse::<NaiveDateTime>() {
            return Ok(Timestamp::Local(naive));
        }

        DateTime::parse_from_rfc3339(s)
            .map(Timestamp::Offset)
            .with_context(|| format!("failed to parse timestamp: {s}"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Local(naive) => naive.serialize(serializer),
            Timestamp::Offset(dt) => dt.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e: Error| serde::de::Error::custom(format!("{e:#}")))
    }
}
