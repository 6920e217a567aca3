use crate::config::{Config, SourceLocation};
use crate::domain::equipment::AllowList;
use crate::loader::SourceFormat;
use chrono::NaiveDate;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use scraper::{Html, Selector};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const CSV_HEADER: &str = "Name,Boom Lift ID,Completion time,Builder,Site,Hours,Oil Level,Gas Level,General Issues,Continue to Maintenance or Complete,Oil Change,Oil Change Cost,Annual Inspection,Annual Inspection Cost,NDT,NDT Cost,Radiator Repair,Radiator Repair Cost,Other Work,Other Work Cost";

/// Three allow-listed submissions and two that must be dropped.
pub const SAMPLE_CSV: &str = "\
Name,Boom Lift ID,Completion time,Builder,Site,Hours,Oil Level,Gas Level,General Issues,Continue to Maintenance or Complete,Oil Change,Oil Change Cost,Annual Inspection,Annual Inspection Cost,NDT,NDT Cost,Radiator Repair,Radiator Repair Cost,Other Work,Other Work Cost
Ana,Boom Lift 1,2025-01-06 08:00:00,Acme Homes,Lot 4,100,Full,Half,,Complete,TRUE,85,,,,,,,,
Ben,Boom Lift 1,2025-01-13 09:15:00,Acme Homes,Lot 4,112,Full,Full,Squeaky basket,Complete,,,,,,,,,,
Cy,Boom Lift 2,2025-01-14 07:45:00,Zenith Builders,Lot 9,,Half,Full,,Continue to Maintenance,,,TRUE,350,,,,,Replaced mirror,20
Dee,Boom Lift 99,2025-01-14 10:00:00,Acme Homes,Lot 1,5,Full,Full,,Complete,,,,,,,,,,
Eve,Boom Lift 1x,2025-01-14 11:00:00,Acme Homes,Lot 1,5,Full,Full,,Complete,,,,,,,,,,
";

/// A fresh, empty output directory unique to this test.
pub fn temp_output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "boomlift_report_{}_{}",
        name,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Config pinned to 2025-01-13 (first day of pay period 1) writing into `output_dir`.
pub fn test_config(output_dir: PathBuf, format: SourceFormat) -> Config {
    Config {
        source: SourceLocation::File("unused".into()),
        format,
        sheet_name: "Sheet1".to_string(),
        fetch_timeout: Duration::from_secs(10),
        output_dir,
        equipment: AllowList::default(),
        report_date: NaiveDate::from_ymd_opt(2025, 1, 13),
        form_action: None,
    }
}

pub struct SheetRow<'a> {
    pub name: &'a str,
    pub lift: &'a str,
    pub completed: &'a str,
    pub hours: f64,
    pub work: &'a str,
    pub cost: f64,
}

/// An .xlsx in the free-text maintenance layout. Timestamps are written as
/// real Excel datetimes except ones ending in `!`, which stay text.
pub fn xlsx_bytes(sheet: &str, rows: &[SheetRow]) -> Vec<u8> {
    let headers = [
        "Name",
        "Boom Lift ID",
        "Completion time",
        "Builder",
        "Site",
        "Hours",
        "Oil Level",
        "Gas Level",
        "General Issues",
        "Continue to Maintenance or Complete",
        "Maintenance Work",
        "Cost of Maintenance",
    ];

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm");

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, row.name).unwrap();
        worksheet.write_string(r, 1, row.lift).unwrap();
        match row.completed.strip_suffix('!') {
            Some(text) => {
                worksheet.write_string(r, 2, text).unwrap();
            }
            None => {
                let dt = ExcelDateTime::parse_from_str(row.completed).unwrap();
                worksheet
                    .write_datetime_with_format(r, 2, &dt, &date_format)
                    .unwrap();
            }
        }
        worksheet.write_string(r, 3, "Acme Homes").unwrap();
        worksheet.write_number(r, 5, row.hours).unwrap();
        worksheet.write_string(r, 6, "Full").unwrap();
        worksheet.write_string(r, 7, "Full").unwrap();
        if !row.work.is_empty() {
            worksheet.write_string(r, 10, row.work).unwrap();
        }
        if row.cost != 0.0 {
            worksheet.write_number(r, 11, row.cost).unwrap();
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Text of every cell in `selector`'s rows, e.g. `#full-data-table tbody tr`.
pub fn table_rows(html: &str, selector: &str) -> Vec<Vec<String>> {
    let doc = Html::parse_document(html);
    let rows = Selector::parse(selector).unwrap();
    let cells = Selector::parse("td").unwrap();
    doc.select(&rows)
        .map(|row| {
            row.select(&cells)
                .map(|td| td.text().collect::<String>())
                .collect()
        })
        .collect()
}

pub fn count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

pub fn read(dir: &std::path::Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("{name}: {e}"))
}
