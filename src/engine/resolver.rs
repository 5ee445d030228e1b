use crate::models::{join_months, Month, Region};

/// Expands a raw month/season field into concrete calendar months.
///
/// Tokens are matched case-insensitively: a season name expands to the
/// region's month list for it, a month label (either vocabulary) stands for
/// itself, and anything else is dropped without comment. The result is
/// deduplicated and sorted by calendar position, which downstream scheduling
/// and charting rely on.
pub struct SeasonResolver<'a> {
    region: &'a Region,
}

impl<'a> SeasonResolver<'a> {
    pub fn new(region: &'a Region) -> Self {
        Self { region }
    }

    /// Resolve a raw field to calendar-ordered, deduplicated months.
    /// Empty or fully-unparseable input yields an empty set, not an error.
    pub fn resolve(&self, raw: &str) -> Vec<Month> {
        let mut months: Vec<Month> = Vec::new();
        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Some(season) = self.region.season_months(token) {
                months.extend_from_slice(season);
            } else if let Some(month) = Month::parse_token(token) {
                months.push(month);
            }
            // unmatched tokens are dropped silently
        }
        months.sort();
        months.dedup();
        months
    }

    /// Resolve and render in the region's canonical vocabulary.
    pub fn resolve_to_string(&self, raw: &str) -> String {
        join_months(&self.resolve(raw), self.region.vocabulary)
    }
}
