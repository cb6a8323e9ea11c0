//! Liveness status reported by the health endpoint.
//!
//! `HealthStatus` is built fresh for every request and serialized straight into
//! the response body. It holds exactly two fields, `status` and `timestamp`.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Format string for naive local timestamps, e.g. `2024-01-01T12:00:00.000000`.
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Liveness state. A running process only ever reports `Healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
}

/// How the `timestamp` field is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// Server local time without an offset.
    #[default]
    Local,
    /// RFC 3339 in UTC with an explicit `+00:00` offset.
    Utc,
}

impl TimestampFormat {
    /// Render an instant as an ISO-8601 string with microsecond precision.
    pub fn render(self, instant: DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Local => instant
                .with_timezone(&Local)
                .naive_local()
                .format(LOCAL_TIMESTAMP_FORMAT)
                .to_string(),
            TimestampFormat::Utc => instant.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: Status,
    pub timestamp: String,
}

impl HealthStatus {
    /// Status stamped with the current wall-clock time.
    pub fn now(format: TimestampFormat) -> Self {
        Self::at(format, Utc::now())
    }

    pub fn at(format: TimestampFormat, instant: DateTime<Utc>) -> Self {
        Self {
            status: Status::Healthy,
            timestamp: format.render(instant),
        }
    }
}
