use super::PersistenceResult;
use crate::roster::Roster;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Roster";

/// Write the roster as a single-sheet workbook: a `Date`/`Day` header row
/// followed by one row per entry, dates as YYYY-MM-DD text. Overwrites any
/// existing file at `path`.
pub fn save_roster_to_xlsx<P: AsRef<Path>>(roster: &Roster, path: P) -> PersistenceResult<()> {
    let entries = roster.entries()?;
    super::validate_roster(&entries)?;

    let mut workbook = Workbook::new();

    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(0x4472C4)
        .set_font_color(0xFFFFFF)
        .set_border(FormatBorder::Thin);
    let cell = Format::new().set_border(FormatBorder::Thin);

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    sheet.write_with_format(0, 0, "Date", &header)?;
    sheet.write_with_format(0, 1, "Day", &header)?;
    sheet.set_column_width(0, 12).ok();
    sheet.set_column_width(1, 10).ok();

    for (idx, entry) in entries.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_with_format(row, 0, entry.date.format("%Y-%m-%d").to_string(), &cell)?;
        sheet.write_with_format(row, 1, entry.duty.as_str(), &cell)?;
    }

    workbook.save(path)?;
    Ok(())
}
