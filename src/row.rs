use serde::Serialize;
use time::UtcOffset;

use crate::formatter::{self, MagnitudeBucket};
use crate::quake::Quake;

/// Everything a frontend needs to draw one quake.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuakeRow {
    pub magnitude: String,
    pub bucket: MagnitudeBucket,
    pub location_offset: String,
    pub primary_location: String,
    pub date: String,
    pub time: String,
    /// Source values, kept for sorting.
    #[serde(skip)]
    pub raw_magnitude: f64,
    #[serde(skip)]
    pub raw_time: i64,
}

impl QuakeRow {
    /// `near_the` is the (possibly localized) label for locations without a
    /// distance phrase.
    pub fn new(quake: &Quake, offset: UtcOffset, near_the: &str) -> Self {
        let location = formatter::split_location(quake.location(), near_the);

        Self {
            magnitude: formatter::format_magnitude(quake.magnitude()),
            bucket: MagnitudeBucket::from_magnitude(quake.magnitude()),
            location_offset: location.offset.to_string(),
            primary_location: location.primary.to_string(),
            date: formatter::format_date(quake.time(), offset),
            time: formatter::format_time(quake.time(), offset),
            raw_magnitude: quake.magnitude(),
            raw_time: quake.time(),
        }
    }
}

pub fn build_rows(quakes: &[Quake], offset: UtcOffset, near_the: &str) -> Vec<QuakeRow> {
    quakes
        .iter()
        .map(|q| QuakeRow::new(q, offset, near_the))
        .collect()
}

#[test]
fn test_row_with_offset_phrase() {
    let quake = Quake::new(7.2, "5km of San Francisco", 0);
    let row = QuakeRow::new(&quake, UtcOffset::UTC, formatter::NEAR_THE);
    assert_eq!(row.magnitude, "7.2");
    assert_eq!(row.bucket.level(), 7);
    assert_eq!(row.location_offset, "5km of");
    assert_eq!(row.primary_location, "San Francisco");
    assert_eq!(row.date, "Jan 01, 1970");
    assert_eq!(row.time, "12:00 AM");
}

#[test]
fn test_row_without_offset_phrase() {
    let quake = Quake::new(11.0, "Tokyo", 1454124312220);
    let row = QuakeRow::new(&quake, UtcOffset::UTC, "near the");
    assert_eq!(row.location_offset, "near the");
    assert_eq!(row.primary_location, "Tokyo");
    assert!(row.bucket.is_ten_plus());
    assert_eq!(row.raw_time, 1454124312220);
}

#[test]
fn test_row_json() {
    let quake = Quake::new(2.0, "Tokyo", 0);
    let row = QuakeRow::new(&quake, UtcOffset::UTC, "near the");
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["magnitude"], "2.0");
    assert_eq!(value["bucket"], "2");
    assert_eq!(value["location_offset"], "near the");
    assert!(value.get("raw_time").is_none());
}
