use super::filter::{filter_records, Selection};
use super::rainy::{rainy_match, rainy_match_count};
use super::resolver::SeasonResolver;
use super::scheduler::{schedule, OffsetMap};
use crate::error::Result;
use crate::models::{join_months, CropRecord, DerivedRow, Month, Region};
use std::collections::BTreeMap;

/// Runs the full pipeline: resolve, filter, schedule, rainy-match. The whole
/// table is rebuilt from scratch on every invocation; there is no incremental
/// state between runs.
pub struct SprayPlanner<'a> {
    region: &'a Region,
    offsets: &'a OffsetMap,
}

impl<'a> SprayPlanner<'a> {
    pub fn new(region: &'a Region, offsets: &'a OffsetMap) -> Self {
        Self { region, offsets }
    }

    /// Build the derived table for the given records and selection.
    ///
    /// Offset coverage over the filtered crop set is verified up front, so a
    /// missing crop fails before any row is derived.
    pub fn plan(&self, records: &[CropRecord], selection: &Selection) -> Result<Vec<DerivedRow>> {
        let resolver = SeasonResolver::new(self.region);
        let filtered = filter_records(records, selection, &resolver);

        for record in &filtered {
            self.offsets.get(&record.crop)?;
        }

        let vocabulary = self.region.vocabulary;
        let mut rows = Vec::with_capacity(filtered.len());
        for record in filtered {
            let sowing_months = resolver.resolve(&record.month);
            let offset = self.offsets.get(&record.crop)?;
            let spray_months = schedule(&sowing_months, offset);
            let rainy = rainy_match(&spray_months, &record.district, self.region);

            rows.push(DerivedRow {
                crop: record.crop.clone(),
                district: record.district.clone(),
                month: record.month.clone(),
                suggested_spray_month: join_months(&spray_months, vocabulary),
                rainy_season: rainy.render(vocabulary),
                manual_spray_month: String::new(),
                sowing_months,
                spray_months,
            });
        }
        tracing::debug!(
            region = %self.region.name,
            rows = rows.len(),
            "derived spray plan table"
        );
        Ok(rows)
    }
}

/// Which month list of a derived row to explode over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthColumn {
    Sowing,
    SuggestedSpray,
}

/// Flatten rows into (row, single-month) pairs for the chosen column.
/// Lazy and restartable; rows with no months contribute nothing.
pub fn explode(
    rows: &[DerivedRow],
    column: MonthColumn,
) -> impl Iterator<Item = (&DerivedRow, Month)> {
    rows.iter().flat_map(move |row| {
        let months = match column {
            MonthColumn::Sowing => &row.sowing_months,
            MonthColumn::SuggestedSpray => &row.spray_months,
        };
        months.iter().map(move |m| (row, *m))
    })
}

/// Row count per month for the chosen column, in calendar order. Months with
/// no rows are omitted; an empty table means nothing to display, not an error.
pub fn monthly_counts(rows: &[DerivedRow], column: MonthColumn) -> Vec<(Month, usize)> {
    let mut counts = [0usize; 12];
    for (_, month) in explode(rows, column) {
        counts[month.index()] += 1;
    }
    Month::all()
        .iter()
        .filter(|m| counts[m.index()] > 0)
        .map(|m| (*m, counts[m.index()]))
        .collect()
}

/// Total rainy-window overlaps per district, from the rendered column so the
/// sentinel branch is honored.
pub fn district_rainy_counts(rows: &[DerivedRow]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.district.clone()).or_insert(0) += rainy_match_count(&row.rainy_season);
    }
    counts
}
