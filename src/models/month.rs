use chrono::{Datelike, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which month-label vocabulary a region uses for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Abbreviated,
    Full,
}

/// A calendar month, ordered by calendar position (Jan = 0 .. Dec = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

const ABBREVIATED: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    pub fn all() -> &'static [Month; 12] {
        use Month::*;
        &[Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec]
    }

    /// Calendar position, 0-11.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Month {
        Month::all()[index % 12]
    }

    pub fn label(&self, vocabulary: Vocabulary) -> &'static str {
        match vocabulary {
            Vocabulary::Abbreviated => ABBREVIATED[self.index()],
            Vocabulary::Full => FULL[self.index()],
        }
    }

    /// Parse a single token against both vocabularies, case-insensitively.
    /// Returns None for anything that is not a month label.
    pub fn parse_token(token: &str) -> Option<Month> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        ABBREVIATED
            .iter()
            .position(|l| l.eq_ignore_ascii_case(token))
            .or_else(|| FULL.iter().position(|l| l.eq_ignore_ascii_case(token)))
            .map(Month::from_index)
    }

    /// Shift forward by `offset` months with calendar wraparound.
    pub fn add(&self, offset: u8) -> Month {
        Month::from_index(self.index() + offset as usize)
    }

    /// The month containing today's date.
    pub fn current() -> Month {
        Month::from_index(Local::now().month0() as usize)
    }

    /// Successor with wraparound (Dec -> Jan).
    pub fn next(&self) -> Month {
        self.add(1)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Vocabulary::Abbreviated))
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label(Vocabulary::Abbreviated))
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        Month::parse_token(&s)
            .ok_or_else(|| D::Error::custom(format!("'{}' is not a month label", s)))
    }
}

/// Render a month list in a region's canonical vocabulary, comma-joined.
pub fn join_months(months: &[Month], vocabulary: Vocabulary) -> String {
    months
        .iter()
        .map(|m| m.label(vocabulary))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_label_round_trip() {
        for (i, month) in Month::all().iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), *month);
            assert_eq!(
                Month::parse_token(month.label(Vocabulary::Abbreviated)),
                Some(*month)
            );
            assert_eq!(
                Month::parse_token(month.label(Vocabulary::Full)),
                Some(*month)
            );
        }
    }

    #[test]
    fn parse_token_case_insensitive() {
        assert_eq!(Month::parse_token("jan"), Some(Month::Jan));
        assert_eq!(Month::parse_token("SEPTEMBER"), Some(Month::Sep));
        assert_eq!(Month::parse_token("  Oct "), Some(Month::Oct));
    }

    #[test]
    fn parse_token_invalid() {
        assert_eq!(Month::parse_token(""), None);
        assert_eq!(Month::parse_token("Monsoon"), None);
        assert_eq!(Month::parse_token("Janu"), None);
    }

    #[test]
    fn add_wraps_around() {
        assert_eq!(Month::Nov.add(2), Month::Jan);
        assert_eq!(Month::Dec.add(1), Month::Jan);
        assert_eq!(Month::Dec.add(12), Month::Dec);
        assert_eq!(Month::Mar.add(3), Month::Jun);
    }

    #[test]
    fn next_is_successor() {
        assert_eq!(Month::Jan.next(), Month::Feb);
        assert_eq!(Month::Dec.next(), Month::Jan);
        assert_eq!(Month::current().next(), Month::current().add(1));
    }

    #[test]
    fn join_months_uses_vocabulary() {
        let months = [Month::Jun, Month::Dec];
        assert_eq!(join_months(&months, Vocabulary::Abbreviated), "Jun, Dec");
        assert_eq!(join_months(&months, Vocabulary::Full), "June, December");
        assert_eq!(join_months(&[], Vocabulary::Full), "");
    }
}
