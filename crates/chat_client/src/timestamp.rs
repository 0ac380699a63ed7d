//! Message timestamps: wire form, parsing and display.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub const TIME_NOT_AVAILABLE: &str = "Time not available";

/// A timestamp as the server sends it: an RFC 3339 string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    EpochMillis(i64),
    Text(String),
}

impl Timestamp {
    pub fn parse(&self) -> Option<OffsetDateTime> {
        match self {
            Timestamp::Text(text) => OffsetDateTime::parse(text.trim(), &Rfc3339).ok(),
            Timestamp::EpochMillis(millis) => {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(*millis) * 1_000_000).ok()
            }
        }
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

/// `DD/MM/YYYY HH:mm` in `offset`, or [`TIME_NOT_AVAILABLE`] when the timestamp is invalid.
pub fn format_timestamp(timestamp: &Timestamp, offset: UtcOffset) -> String {
    let Some(moment) = timestamp.parse() else {
        return TIME_NOT_AVAILABLE.to_string();
    };
    let layout = format_description!("[day]/[month]/[year] [hour]:[minute]");
    moment
        .to_offset(offset)
        .format(layout)
        .unwrap_or_else(|_| TIME_NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::offset;
    use time::UtcOffset;

    use super::{format_timestamp, Timestamp, TIME_NOT_AVAILABLE};

    #[test]
    fn rfc3339_formats_day_first() {
        let ts = Timestamp::from("2024-03-05T07:08:09.123Z");
        assert_eq!(format_timestamp(&ts, UtcOffset::UTC), "05/03/2024 07:08");
    }

    #[test]
    fn offset_shifts_the_clock() {
        let ts = Timestamp::from("2024-12-31T23:30:00Z");
        assert_eq!(format_timestamp(&ts, offset!(+02:00)), "01/01/2025 01:30");
    }

    #[test]
    fn epoch_millis_are_accepted() {
        let ts = Timestamp::EpochMillis(0);
        assert_eq!(format_timestamp(&ts, UtcOffset::UTC), "01/01/1970 00:00");
    }

    #[test]
    fn garbage_is_not_available() {
        for ts in [Timestamp::from("yesterday"), Timestamp::from("")] {
            assert_eq!(format_timestamp(&ts, UtcOffset::UTC), TIME_NOT_AVAILABLE);
        }
    }

    #[test]
    fn wire_form_is_untagged() {
        let parsed: Vec<Timestamp> =
            serde_json::from_str(r#"["2024-01-01T00:00:00Z", 1700000000000]"#).expect("json");
        assert_eq!(
            parsed,
            vec![
                Timestamp::from("2024-01-01T00:00:00Z"),
                Timestamp::EpochMillis(1_700_000_000_000)
            ]
        );
    }
}
