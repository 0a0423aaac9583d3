use bka::{AccountReport, Result};

use csv::Writer;

/// Serializes the report as a csv document with a header row
pub fn write_report(report: &AccountReport) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.serialize(report)?;

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
