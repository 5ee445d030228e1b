use super::month::{Month, Vocabulary};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A configured agricultural jurisdiction: its month vocabulary, its
/// season-to-months table, and its district rainy calendar. Immutable for
/// the duration of a run; switching regions starts a fresh pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub vocabulary: Vocabulary,
    /// Season name -> ordered months. Seasons may overlap (Nov sits in both
    /// Winter and Monsoon in the shipped catalogs).
    pub seasons: HashMap<String, Vec<Month>>,
    /// District -> rainy window. Districts absent here have no rainy months.
    #[serde(default)]
    pub rainy: HashMap<String, Vec<Month>>,
    /// Path of the region's sowing-record dataset.
    pub dataset: PathBuf,
}

impl Region {
    /// Case-insensitive season lookup.
    pub fn season_months(&self, token: &str) -> Option<&[Month]> {
        let token = token.trim();
        self.seasons
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|(_, months)| months.as_slice())
    }

    /// Rainy window for a district; unknown districts get the empty window.
    pub fn rainy_months(&self, district: &str) -> &[Month] {
        self.rainy
            .get(district)
            .map(|m| m.as_slice())
            .unwrap_or(&[])
    }
}

/// Fixture region used across the engine's test modules.
#[cfg(test)]
pub(crate) fn test_region() -> Region {
    let mut seasons = HashMap::new();
    seasons.insert("Autumn".to_string(), vec![Month::Oct, Month::Nov]);
    seasons.insert(
        "Monsoon".to_string(),
        vec![
            Month::Jun,
            Month::Jul,
            Month::Aug,
            Month::Sep,
            Month::Oct,
            Month::Nov,
        ],
    );
    let mut rainy = HashMap::new();
    rainy.insert(
        "Chennai".to_string(),
        vec![Month::Oct, Month::Nov, Month::Dec],
    );
    Region {
        name: "Tamil Nadu".to_string(),
        vocabulary: Vocabulary::Abbreviated,
        seasons,
        rainy,
        dataset: PathBuf::from("data/tamilnadu.csv"),
    }
}
