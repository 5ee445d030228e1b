use crate::error::Result;
use crate::models::DerivedRow;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Export column order; must match the DerivedRow field list.
const HEADER: [&str; 6] = [
    "CROP",
    "DISTRICT",
    "MONTH",
    "Suggested Spray Month",
    "Rainy Season",
    "Manual Spray Month",
];

/// Serialize the derived table as UTF-8 CSV. The header row is written even
/// for an empty table.
pub fn write_csv<W: Write>(rows: &[DerivedRow], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.write_record([
            row.crop.as_str(),
            row.district.as_str(),
            row.month.as_str(),
            row.suggested_spray_month.as_str(),
            row.rainy_season.as_str(),
            row.manual_spray_month.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file(rows: &[DerivedRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(rows, file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported spray plan");
    Ok(())
}
