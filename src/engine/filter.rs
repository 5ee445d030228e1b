use super::resolver::SeasonResolver;
use crate::models::{CropRecord, Month};

/// Operator-chosen crop/district/month subsets. An empty list means the
/// operator cleared every checkbox, which falls back to "select all" rather
/// than matching nothing.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub crops: Vec<String>,
    pub districts: Vec<String>,
    pub months: Vec<Month>,
}

impl Selection {
    /// Selects everything: the fallback domain for empty selections.
    pub fn all() -> Self {
        Self::default()
    }

    fn crop_matches(&self, crop: &str) -> bool {
        self.crops.is_empty() || self.crops.iter().any(|c| c == crop)
    }

    fn district_matches(&self, district: &str) -> bool {
        self.districts.is_empty() || self.districts.iter().any(|d| d == district)
    }

    /// Month predicate runs against the season-expanded field, not the raw
    /// tokens: selecting "Jul" matches a record sown in "Monsoon".
    fn months_match(&self, resolved: &[Month]) -> bool {
        self.months.is_empty() || self.months.iter().any(|m| resolved.contains(m))
    }
}

/// Select records matching all three predicates. Borrows the source set and
/// never mutates it; callers rebuild derived tables from the survivors.
pub fn filter_records<'a>(
    records: &'a [CropRecord],
    selection: &Selection,
    resolver: &SeasonResolver<'_>,
) -> Vec<&'a CropRecord> {
    records
        .iter()
        .filter(|r| {
            selection.crop_matches(&r.crop)
                && selection.district_matches(&r.district)
                && selection.months_match(&resolver.resolve(&r.month))
        })
        .collect()
}
