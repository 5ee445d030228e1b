use super::month::Month;
use serde::{Deserialize, Serialize};

/// One sowing record as loaded from a region dataset. Fields are trimmed at
/// construction; an empty month field after cleaning means "absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecord {
    pub crop: String,
    pub district: String,
    /// Raw month/season field: comma-separated season and/or month tokens.
    pub month: String,
}

impl CropRecord {
    pub fn new(crop: &str, district: &str, month: &str) -> Self {
        Self {
            crop: crop.trim().to_string(),
            district: district.trim().to_string(),
            month: clean_month_field(month),
        }
    }
}

/// Normalize separator whitespace in a month/season field to `", "` and trim
/// the ends. Token case is left alone; the resolver matches insensitively.
pub fn clean_month_field(raw: &str) -> String {
    let re = regex_lite::Regex::new(r"\s*,\s*").unwrap();
    re.replace_all(raw.trim(), ", ").to_string()
}

/// A CropRecord with the engine's derived columns attached. This is the unit
/// the presentation layer displays and the export writer serializes; the
/// serialized field names are the export header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRow {
    #[serde(rename = "CROP")]
    pub crop: String,
    #[serde(rename = "DISTRICT")]
    pub district: String,
    #[serde(rename = "MONTH")]
    pub month: String,
    #[serde(rename = "Suggested Spray Month")]
    pub suggested_spray_month: String,
    #[serde(rename = "Rainy Season")]
    pub rainy_season: String,
    /// Operator-entered override. The engine always emits it empty; the
    /// presentation layer owns its contents.
    #[serde(rename = "Manual Spray Month")]
    pub manual_spray_month: String,
    /// Resolved sowing months, calendar-ordered. Engine-internal.
    #[serde(skip)]
    pub sowing_months: Vec<Month>,
    /// Suggested spray months before rendering. Engine-internal.
    #[serde(skip)]
    pub spray_months: Vec<Month>,
}
