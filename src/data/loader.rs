use crate::error::{Result, SprayPlanError};
use crate::models::CropRecord;
use csv::ReaderBuilder;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["CROP", "DISTRICT", "MONTH"];

/// Load a region's sowing-record dataset.
///
/// Headers are trimmed before matching; a dataset missing any of CROP,
/// DISTRICT, MONTH is rejected here, before the engine runs. Fully blank
/// rows are skipped. Files that are not valid UTF-8 are retried as
/// ISO-8859-1, matching the deployment's legacy exports.
pub fn load_records(path: &Path) -> Result<Vec<CropRecord>> {
    if !path.exists() {
        return Err(SprayPlanError::Dataset(format!(
            "dataset not found at {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    let content = decode(bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                SprayPlanError::Dataset(format!(
                    "dataset {} is missing required column '{}'",
                    path.display(),
                    name
                ))
            })
    };
    let crop_col = column(REQUIRED_COLUMNS[0])?;
    let district_col = column(REQUIRED_COLUMNS[1])?;
    let month_col = column(REQUIRED_COLUMNS[2])?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let field = |idx: usize| row.get(idx).unwrap_or("");
        records.push(CropRecord::new(
            field(crop_col),
            field(district_col),
            field(month_col),
        ));
    }

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "loaded sowing records"
    );
    Ok(records)
}

/// UTF-8 first, ISO-8859-1 as the fallback. Latin-1 bytes map one-to-one
/// onto the first 256 code points, so the fallback cannot fail.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn loads_and_cleans_records() {
        let file = write_dataset(
            b"CROP ,DISTRICT, MONTH\nPaddy , Chennai ,\"Monsoon ,Nov\"\n,,\nCotton,Madurai,Jan\n",
        );
        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].crop, "Paddy");
        assert_eq!(records[0].month, "Monsoon, Nov");
        assert_eq!(records[1].district, "Madurai");
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let file = write_dataset(b"CROP,DISTRICT\nPaddy,Chennai\n");
        match load_records(file.path()) {
            Err(SprayPlanError::Dataset(msg)) => assert!(msg.contains("MONTH")),
            other => panic!("expected Dataset error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_records(Path::new("no/such/dataset.csv")).unwrap_err();
        assert!(matches!(err, SprayPlanError::Dataset(_)));
    }

    #[test]
    fn latin1_dataset_falls_back() {
        // 0xE9 is 'é' in ISO-8859-1 and invalid as a standalone UTF-8 byte.
        let file = write_dataset(b"CROP,DISTRICT,MONTH\nCaf\xe9,Chennai,Jan\n");
        let records = load_records(file.path()).unwrap();
        assert_eq!(records[0].crop, "Café");
    }
}
