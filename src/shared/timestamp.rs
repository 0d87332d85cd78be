//! `updatedAt` is written the way JavaScript's `Date.toISOString` prints it:
//! UTC, millisecond precision, `Z` suffix.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current time truncated to what the wire format can carry.
pub fn now() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(3)
}

pub fn serialize<S>(
  value: &DateTime<Utc>,
  serializer: S,
) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer)?;
  DateTime::parse_from_rfc3339(&raw)
    .map(|timestamp| timestamp.with_timezone(&Utc))
    .map_err(serde::de::Error::custom)
}
