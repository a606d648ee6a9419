//! Display formatting for a single quake: severity buckets, location splitting
//! and date/time strings.
//!
//! Everything in here is total: odd input is clamped or defaulted, never rejected.

use std::fmt;

use serde::{Serialize, Serializer};
use time::{
    format_description::FormatItem, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

/// Token that separates a distance phrase from the place name ("5km N of Tokyo").
pub const LOCATION_SEPARATOR: &str = " of ";
/// Offset label used when a location carries no distance phrase.
pub const NEAR_THE: &str = "near the";

const DATE_FORMAT: &[FormatItem] = format_description!("[month repr:short] [day], [year]");
const TIME_FORMAT: &[FormatItem] =
    format_description!("[hour repr:12 padding:none]:[minute] [period]");

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Severity class of a magnitude, `1` to `9` or `10+`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MagnitudeBucket(u8);

impl MagnitudeBucket {
    pub const MIN: MagnitudeBucket = MagnitudeBucket(1);
    pub const TEN_PLUS: MagnitudeBucket = MagnitudeBucket(10);

    /// Floors the magnitude and clamps it into `1..=10`, where `10` stands for `10+`.
    /// NaN lands in the lowest bucket.
    pub fn from_magnitude(magnitude: f64) -> Self {
        // `as` saturates on infinities and maps NaN to 0
        let floor = magnitude.floor() as i64;
        MagnitudeBucket(floor.clamp(Self::MIN.0 as i64, Self::TEN_PLUS.0 as i64) as u8)
    }

    /// Numeric level, `10` for the open-ended top bucket.
    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_ten_plus(self) -> bool {
        self == Self::TEN_PLUS
    }
}

impl fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ten_plus() {
            write!(f, "10+")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for MagnitudeBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A location string cut into its offset label and primary place name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocationParts<'a> {
    pub offset: &'a str,
    pub primary: &'a str,
}

/// Splits `location` at the first [`LOCATION_SEPARATOR`].
///
/// On a match the offset keeps the trailing "of" and both halves are trimmed.
/// Without a separator the offset is `default_offset` and the location is
/// returned untouched.
pub fn split_location<'a>(location: &'a str, default_offset: &'a str) -> LocationParts<'a> {
    match location.find(LOCATION_SEPARATOR) {
        Some(pos) => {
            // keep "of", drop the trailing space
            let end = pos + LOCATION_SEPARATOR.len() - 1;
            LocationParts {
                offset: location[..end].trim(),
                primary: location[end..].trim(),
            }
        }
        None => LocationParts {
            offset: default_offset,
            primary: location,
        },
    }
}

/// One decimal place, e.g. `6.0`.
#[inline]
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{:.1}", magnitude)
}

/// Converts a millisecond timestamp into a date-time at `offset`, clamping to
/// the representable range.
fn to_datetime(millis: i64, offset: UtcOffset) -> OffsetDateTime {
    let utc = OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * NANOS_PER_MILLI)
        .unwrap_or_else(|_| {
            if millis < 0 {
                PrimitiveDateTime::MIN.assume_utc()
            } else {
                PrimitiveDateTime::MAX.assume_utc()
            }
        });

    utc.checked_to_offset(offset).unwrap_or(utc)
}

/// Calendar date such as `Feb 02, 2016`.
pub fn format_date(millis: i64, offset: UtcOffset) -> String {
    to_datetime(millis, offset)
        .format(&DATE_FORMAT)
        .unwrap_or_default()
}

/// Clock time such as `4:30 PM`.
pub fn format_time(millis: i64, offset: UtcOffset) -> String {
    to_datetime(millis, offset)
        .format(&TIME_FORMAT)
        .unwrap_or_default()
}

#[test]
fn test_bucket_low_clamp() {
    for m in [0.999, 0.5, 0.0, -0.1, -7.3, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(
            MagnitudeBucket::from_magnitude(m),
            MagnitudeBucket::from_magnitude(1.0)
        );
    }
    assert_eq!(MagnitudeBucket::from_magnitude(1.0), MagnitudeBucket::MIN);
}

#[test]
fn test_bucket_high_clamp() {
    for m in [10.0, 10.5, 12.0, 1e9, f64::INFINITY] {
        let bucket = MagnitudeBucket::from_magnitude(m);
        assert!(bucket.is_ten_plus());
        assert_eq!(bucket.to_string(), "10+");
    }
    assert!(!MagnitudeBucket::from_magnitude(9.999).is_ten_plus());
}

#[test]
fn test_bucket_integer_levels() {
    for k in 1..=9u8 {
        let m = k as f64;
        assert_eq!(MagnitudeBucket::from_magnitude(m).level(), k);
        assert_eq!(MagnitudeBucket::from_magnitude(m + 0.999).level(), k);
        assert_eq!(MagnitudeBucket::from_magnitude(m).to_string(), k.to_string());
    }
}

#[test]
fn test_bucket_serialize() {
    assert_eq!(
        serde_json::to_string(&MagnitudeBucket::TEN_PLUS).unwrap(),
        "\"10+\""
    );
    assert_eq!(
        serde_json::to_string(&MagnitudeBucket::from_magnitude(4.4)).unwrap(),
        "\"4\""
    );
}

#[test]
fn test_split_location() {
    assert_eq!(
        split_location("5km of San Francisco", NEAR_THE),
        LocationParts {
            offset: "5km of",
            primary: "San Francisco"
        }
    );
    assert_eq!(
        split_location("88km N of Yelizovo, Russia", NEAR_THE),
        LocationParts {
            offset: "88km N of",
            primary: "Yelizovo, Russia"
        }
    );
}

#[test]
fn test_split_location_without_separator() {
    assert_eq!(
        split_location("Tokyo", NEAR_THE),
        LocationParts {
            offset: "near the",
            primary: "Tokyo"
        }
    );
    // "of" inside a word is not a separator
    assert_eq!(
        split_location("Sofia, Bulgaria", NEAR_THE).primary,
        "Sofia, Bulgaria"
    );
    assert_eq!(
        split_location("  Pacific-Antarctic Ridge ", NEAR_THE).primary,
        "  Pacific-Antarctic Ridge "
    );
    assert_eq!(split_location("", "nahe").offset, "nahe");
}

#[test]
fn test_split_location_first_separator_only() {
    let parts = split_location("10km SW of Isle of Man  ", NEAR_THE);
    assert_eq!(parts.offset, "10km SW of");
    assert_eq!(parts.primary, "Isle of Man");
}

#[test]
fn test_format_magnitude() {
    assert_eq!(format_magnitude(7.2), "7.2");
    assert_eq!(format_magnitude(6.0), "6.0");
    assert_eq!(format_magnitude(4.449), "4.4");
}

#[test]
fn test_format_epoch() {
    assert_eq!(format_date(0, UtcOffset::UTC), "Jan 01, 1970");
    assert_eq!(format_time(0, UtcOffset::UTC), "12:00 AM");
}

#[test]
fn test_format_with_offset() {
    let offset = UtcOffset::from_hms(-8, 0, 0).unwrap();
    // 2016-01-30T03:25:12Z
    let t = 1454124312220;
    assert_eq!(format_date(t, UtcOffset::UTC), "Jan 30, 2016");
    assert_eq!(format_time(t, UtcOffset::UTC), "3:25 AM");
    assert_eq!(format_date(t, offset), "Jan 29, 2016");
    assert_eq!(format_time(t, offset), "7:25 PM");
}

#[test]
fn test_format_extreme_timestamps() {
    assert!(!format_date(i64::MAX, UtcOffset::UTC).is_empty());
    assert!(!format_date(i64::MIN, UtcOffset::UTC).is_empty());
    assert!(!format_time(i64::MIN, UtcOffset::from_hms(-12, 0, 0).unwrap()).is_empty());
}
