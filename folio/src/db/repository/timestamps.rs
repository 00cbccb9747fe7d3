use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{FolioError, Result};

/// Fixed-width RFC 3339 so lexical order in SQL matches chronological order.
pub(crate) fn encode(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn decode(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FolioError::Internal(format!("Invalid stored timestamp {raw:?}: {e}")))
}
