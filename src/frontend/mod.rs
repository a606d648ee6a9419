use anyhow::Result;
use time::UtcOffset;

use crate::{fl, row::QuakeRow, source::FeedSource};

pub mod cli;
pub mod tui;

/// Options shared by every frontend.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: FeedSource,
    pub offset: UtcOffset,
}

impl Settings {
    pub(crate) fn from_args(args: &cli::QuakeReport) -> Result<Self> {
        if let Some(lang) = &args.lang {
            crate::i18n::select_language(lang)?;
        }

        Ok(Self {
            source: FeedSource::from_options(args.file.clone(), args.url.clone())?,
            offset: resolve_offset(args.utc),
        })
    }
}

/// Local UTC offset, or UTC when asked for or when the platform cannot tell.
///
/// Must run before any other thread is spawned.
pub fn resolve_offset(force_utc: bool) -> UtcOffset {
    if force_utc {
        return UtcOffset::UTC;
    }
    match UtcOffset::current_local_offset() {
        Ok(offset) => offset,
        Err(e) => {
            log::warn!("local time zone unavailable, using UTC: {}", e);
            UtcOffset::UTC
        }
    }
}

pub(crate) fn load_rows(settings: &Settings) -> Result<Vec<QuakeRow>> {
    let quakes = settings.source.load()?;

    Ok(crate::row::build_rows(
        &quakes,
        settings.offset,
        &fl!("near-the"),
    ))
}

#[test]
fn test_resolve_offset_forced_utc() {
    assert_eq!(resolve_offset(true), UtcOffset::UTC);
}

#[test]
fn test_load_rows_sample() {
    let settings = Settings {
        source: FeedSource::Sample,
        offset: UtcOffset::UTC,
    };
    let rows = load_rows(&settings).unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].location_offset, "88km N of");
    assert_eq!(rows[0].primary_location, "Yelizovo, Russia");
    assert_eq!(rows[0].date, "Jan 30, 2016");
}
