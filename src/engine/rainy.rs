use crate::models::{join_months, Month, Region, Vocabulary};

/// Marker for a row whose suggested spray months never touch the district's
/// rainy window. Callers branch on this exact string, so it is distinct from
/// an empty list.
pub const NO_POSSIBILITY: &str = "No Possibility";

/// Overlap between suggested spray months and a district's rainy window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RainyMatch {
    Overlap(Vec<Month>),
    NoPossibility,
}

impl RainyMatch {
    pub fn render(&self, vocabulary: Vocabulary) -> String {
        match self {
            RainyMatch::Overlap(months) => join_months(months, vocabulary),
            RainyMatch::NoPossibility => NO_POSSIBILITY.to_string(),
        }
    }
}

/// Intersect the suggested spray months with the district's rainy window.
/// Order follows `suggested_months`; unknown districts have no rainy months,
/// so they always come out as `NoPossibility`.
pub fn rainy_match(suggested_months: &[Month], district: &str, region: &Region) -> RainyMatch {
    let rainy = region.rainy_months(district);
    let matches: Vec<Month> = suggested_months
        .iter()
        .copied()
        .filter(|m| rainy.contains(m))
        .collect();
    if matches.is_empty() {
        RainyMatch::NoPossibility
    } else {
        RainyMatch::Overlap(matches)
    }
}

/// Count of rainy overlaps from the rendered column value. The sentinel is
/// detected by string equality, matching how consumers branch on it.
pub fn rainy_match_count(rendered: &str) -> usize {
    if rendered == NO_POSSIBILITY || rendered.is_empty() {
        return 0;
    }
    rendered.split(',').filter(|s| !s.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::region::test_region;

    #[test]
    fn rainy_match_intersects_in_suggested_order() {
        let region = test_region();
        let m = rainy_match(&[Month::Jun, Month::Dec], "Chennai", &region);
        assert_eq!(m, RainyMatch::Overlap(vec![Month::Dec]));
        assert_eq!(m.render(Vocabulary::Abbreviated), "Dec");
    }

    #[test]
    fn rainy_match_empty_suggestions_is_sentinel() {
        let region = test_region();
        let m = rainy_match(&[], "Chennai", &region);
        assert_eq!(m, RainyMatch::NoPossibility);
        assert_eq!(m.render(Vocabulary::Abbreviated), NO_POSSIBILITY);
    }

    #[test]
    fn rainy_match_unknown_district_is_sentinel() {
        let region = test_region();
        let m = rainy_match(&[Month::Oct, Month::Nov], "Atlantis", &region);
        assert_eq!(m, RainyMatch::NoPossibility);
    }

    #[test]
    fn rainy_match_multi_month_overlap() {
        let region = test_region();
        let m = rainy_match(
            &[Month::Sep, Month::Oct, Month::Nov],
            "Chennai",
            &region,
        );
        assert_eq!(m, RainyMatch::Overlap(vec![Month::Oct, Month::Nov]));
    }

    #[test]
    fn count_branches_on_the_sentinel_string() {
        assert_eq!(rainy_match_count(NO_POSSIBILITY), 0);
        assert_eq!(rainy_match_count(""), 0);
        assert_eq!(rainy_match_count("Dec"), 1);
        assert_eq!(rainy_match_count("Oct, Nov, Dec"), 3);
    }
}
