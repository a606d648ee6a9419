use std::cmp::Ordering;

use cursive::theme::{Color, ColorStyle};
use cursive::utils::markup::StyledString;
use cursive::{align::HAlign, traits::*, views::Dialog, views::TextView, Cursive};
use cursive_async_view::AsyncView;
use cursive_table_view::{TableView, TableViewItem};

use super::Settings;
use crate::{fl, palette, row::QuakeRow};

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
enum QuakeColumn {
    Magnitude,
    Offset,
    Location,
    Date,
    Time,
}

impl TableViewItem<QuakeColumn> for QuakeRow {
    fn to_column(&self, column: QuakeColumn) -> String {
        match column {
            QuakeColumn::Magnitude => self.magnitude.clone(),
            QuakeColumn::Offset => self.location_offset.clone(),
            QuakeColumn::Location => self.primary_location.clone(),
            QuakeColumn::Date => self.date.clone(),
            QuakeColumn::Time => self.time.clone(),
        }
    }

    fn cmp(&self, other: &Self, column: QuakeColumn) -> Ordering
    where
        Self: Sized,
    {
        match column {
            QuakeColumn::Magnitude => self.raw_magnitude.total_cmp(&other.raw_magnitude),
            QuakeColumn::Offset => self.location_offset.cmp(&other.location_offset),
            QuakeColumn::Location => self.primary_location.cmp(&other.primary_location),
            QuakeColumn::Date | QuakeColumn::Time => self.raw_time.cmp(&other.raw_time),
        }
    }
}

/// Magnitude badge in its bucket color, followed by the location and time.
fn describe(row: &QuakeRow) -> StyledString {
    let (r, g, b) = palette::bucket_rgb(row.bucket);
    let mut text = StyledString::styled(
        format!(" {} ", row.magnitude),
        ColorStyle::new(Color::Rgb(255, 255, 255), Color::Rgb(r, g, b)),
    );
    text.append_plain(format!(
        "  {}\n\n{}\n{}\n\n{}  {}",
        fl!("severity", level = row.bucket.to_string()),
        row.location_offset,
        row.primary_location,
        row.date,
        row.time
    ));

    text
}

fn show_details(siv: &mut Cursive, row: &QuakeRow) {
    siv.add_layer(
        Dialog::around(TextView::new(describe(row)))
            .title(fl!("details"))
            .button(fl!("ok"), |s| {
                s.pop_layer();
            })
            .padding_lrtb(2, 2, 1, 1),
    );
}

fn quake_table(rows: Vec<QuakeRow>) -> Dialog {
    let count = rows.len();
    let view = TableView::<QuakeRow, QuakeColumn>::new()
        .column(QuakeColumn::Magnitude, fl!("magnitude"), |c| {
            c.align(HAlign::Right).width(6)
        })
        .column(QuakeColumn::Offset, fl!("location-offset"), |c| c.width(14))
        .column(QuakeColumn::Location, fl!("location"), |c| c)
        .column(QuakeColumn::Date, fl!("date"), |c| c.width(14))
        .column(QuakeColumn::Time, fl!("time"), |c| c.width(10))
        .items(rows)
        .on_submit(|siv, _, index| {
            let row = siv
                .call_on_name("quakes", |v: &mut TableView<QuakeRow, QuakeColumn>| {
                    v.borrow_item(index).cloned()
                })
                .flatten();
            if let Some(row) = row {
                show_details(siv, &row);
            }
        })
        .with_name("quakes")
        .min_width(90)
        .min_height(20);

    Dialog::around(view)
        .title(format!(
            "{} ({})",
            fl!("quake-report"),
            fl!("quake-count", count = count)
        ))
        .button(fl!("exit"), |siv| siv.quit())
        .padding_lrtb(2, 2, 1, 1)
}

fn error_dialog(msg: &str) -> Dialog {
    Dialog::around(TextView::new(msg))
        .title(fl!("error"))
        .button(fl!("exit"), |s| s.quit())
        .padding_lrtb(2, 2, 1, 1)
}

fn loaded_view(result: Result<Vec<QuakeRow>, String>) -> Dialog {
    match result {
        Ok(rows) => quake_table(rows),
        Err(e) => error_dialog(&e),
    }
}

pub fn tui_main(settings: Settings) {
    let mut siv = cursive::default();
    let loader = AsyncView::new_with_bg_creator(
        &mut siv,
        move || {
            // load failures end up in `loaded_view`, not in the async view
            Ok(super::load_rows(&settings)
                .map_err(|e| fl!("load-error", error = format!("{:#}", e))))
        },
        loaded_view,
    )
    .with_width(90);
    siv.add_layer(loader);
    siv.add_global_callback('q', |s| s.quit());
    siv.run();
}

#[cfg(test)]
fn row(magnitude: f64, location: &str, time: i64) -> QuakeRow {
    QuakeRow::new(
        &crate::quake::Quake::new(magnitude, location, time),
        time::UtcOffset::UTC,
        "near the",
    )
}

#[test]
fn test_columns() {
    let r = row(6.1, "Pacific-Antarctic Ridge", 0);
    assert_eq!(r.to_column(QuakeColumn::Magnitude), "6.1");
    assert_eq!(r.to_column(QuakeColumn::Offset), "near the");
    assert_eq!(r.to_column(QuakeColumn::Location), "Pacific-Antarctic Ridge");
    assert_eq!(r.to_column(QuakeColumn::Date), "Jan 01, 1970");
    assert_eq!(r.to_column(QuakeColumn::Time), "12:00 AM");
}

#[test]
fn test_column_ordering() {
    let small = row(2.8, "Moscow", 1000);
    let large = row(10.4, "Amsterdam", 0);
    assert_eq!(
        TableViewItem::cmp(&small, &large, QuakeColumn::Magnitude),
        Ordering::Less
    );
    assert_eq!(
        TableViewItem::cmp(&small, &large, QuakeColumn::Location),
        Ordering::Greater
    );
    assert_eq!(
        TableViewItem::cmp(&small, &large, QuakeColumn::Time),
        Ordering::Greater
    );
}

#[test]
fn test_describe() {
    let text = describe(&row(4.4, "5km of San Francisco", 0));
    let source = text.source();
    assert!(source.starts_with(" 4.4 "));
    assert!(source.contains("5km of\nSan Francisco"));
}

#[test]
fn test_load_failure_dialog() {
    let dialog = loaded_view(Err("unable to read feed.json".to_string()));
    assert_eq!(dialog.get_title(), fl!("error"));
    assert_eq!(dialog.buttons_len(), 1);
}

#[test]
fn test_loaded_table_dialog() {
    let dialog = loaded_view(Ok(vec![row(7.2, "Tokyo", 0)]));
    assert!(dialog.get_title().starts_with(&fl!("quake-report")));
    assert_eq!(dialog.buttons_len(), 1);
}
