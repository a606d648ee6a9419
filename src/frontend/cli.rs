use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use argh::FromArgs;
use tabwriter::TabWriter;
use unic_langid::LanguageIdentifier;

use super::Settings;
use crate::{fl, palette, row::QuakeRow};

#[derive(FromArgs, PartialEq, Debug)]
/// print all earthquakes and exit
#[argh(subcommand, name = "list")]
pub(crate) struct QuakeList {
    /// print JSON instead of a table
    #[argh(switch)]
    pub json: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum QuakeCommand {
    List(QuakeList),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Earthquake Report
pub(crate) struct QuakeReport {
    /// read the feed from a GeoJSON file
    #[argh(option, short = 'f')]
    pub file: Option<PathBuf>,
    /// download the feed from a URL
    #[argh(option, short = 'u')]
    pub url: Option<String>,
    /// show times in UTC instead of the local time zone
    #[argh(switch)]
    pub utc: bool,
    /// interface language, e.g. zh-CN
    #[argh(option)]
    pub lang: Option<LanguageIdentifier>,
    #[argh(subcommand)]
    pub command: Option<QuakeCommand>,
}

// === end of argh constructs

pub(crate) fn cli_main(command: QuakeCommand, settings: &Settings) -> Result<()> {
    match command {
        QuakeCommand::List(list) => {
            let rows = super::load_rows(settings)?;
            let stdout = std::io::stdout();
            if list.json {
                write_json(stdout.lock(), &rows)
            } else {
                let color = stdout.is_terminal();
                write_table(stdout.lock(), &rows, color)
            }
        }
    }
}

fn write_json<W: Write>(mut out: W, rows: &[QuakeRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;

    Ok(())
}

fn write_table<W: Write>(out: W, rows: &[QuakeRow], color: bool) -> Result<()> {
    let mut tw = TabWriter::new(out).ansi(color);
    writeln!(
        tw,
        "{}\t{}\t{}\t{}\t{}",
        fl!("magnitude"),
        fl!("location-offset"),
        fl!("location"),
        fl!("date"),
        fl!("time")
    )?;
    for row in rows {
        let magnitude = if color {
            palette::ansi_paint(row.bucket, &row.magnitude)
        } else {
            row.magnitude.clone()
        };
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}",
            magnitude, row.location_offset, row.primary_location, row.date, row.time
        )?;
    }
    tw.flush()?;

    Ok(())
}

#[cfg(test)]
fn sample_rows() -> Vec<QuakeRow> {
    use crate::{quake::Quake, row::build_rows};

    let quakes = vec![
        Quake::new(7.2, "5km of San Francisco", 1454124312220),
        Quake::new(3.9, "Tokyo", 0),
    ];
    build_rows(&quakes, time::UtcOffset::UTC, "near the")
}

#[test]
fn test_write_table() {
    let mut out = Vec::new();
    write_table(&mut out, &sample_rows(), false).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("7.2"));
    assert!(lines[1].contains("San Francisco"));
    assert!(lines[1].contains("Jan 30, 2016"));
    assert!(lines[2].contains("near the"));
    assert!(lines[2].ends_with("12:00 AM"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_write_table_colored() {
    let mut out = Vec::new();
    write_table(&mut out, &sample_rows(), true).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("\x1b[38;2;231;95;64m7.2\x1b[0m"));
}

#[test]
fn test_write_json() {
    let mut out = Vec::new();
    write_json(&mut out, &sample_rows()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["primary_location"], "Tokyo");
    assert_eq!(value[0]["bucket"], "7");
}

#[test]
fn test_parse_args() {
    let args = QuakeReport::from_args(&["quakereport"], &["--utc", "-f", "feed.json", "list"]).unwrap();
    assert!(args.utc);
    assert_eq!(args.file, Some(PathBuf::from("feed.json")));
    assert_eq!(
        args.command,
        Some(QuakeCommand::List(QuakeList { json: false }))
    );

    let args = QuakeReport::from_args(&["quakereport"], &["--lang", "zh-CN"]).unwrap();
    assert_eq!(args.lang, Some("zh-CN".parse().unwrap()));
    assert!(args.command.is_none());
}

#[test]
fn test_conflicting_sources() {
    let args = QuakeReport::from_args(
        &["quakereport"],
        &["--file", "feed.json", "--url", "https://example.com/feed", "list"],
    )
    .unwrap();
    assert!(Settings::from_args(&args).is_err());
}
