use crate::error::{Result, SprayPlanError};
use crate::models::Month;
use std::collections::HashMap;

/// Per-crop spray offsets in months, each in 1..=12.
///
/// The configuration layer must cover every crop it intends to schedule;
/// `get` refuses to default a missing entry because a silently-defaulted
/// offset would corrupt the agronomic calculation.
#[derive(Debug, Clone, Default)]
pub struct OffsetMap {
    offsets: HashMap<String, u8>,
}

impl OffsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map covering `crops` at `default`. The configuration layer
    /// uses this to seed every crop before applying operator overrides.
    pub fn with_default<I, S>(crops: I, default: u8) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for crop in crops {
            map.set(crop.into(), default as i64)?;
        }
        Ok(map)
    }

    pub fn set(&mut self, crop: String, offset: i64) -> Result<()> {
        if !(1..=12).contains(&offset) {
            return Err(SprayPlanError::InvalidOffset { crop, offset });
        }
        self.offsets.insert(crop, offset as u8);
        Ok(())
    }

    pub fn get(&self, crop: &str) -> Result<u8> {
        self.offsets
            .get(crop)
            .copied()
            .ok_or_else(|| SprayPlanError::MissingOffset(crop.to_string()))
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.offsets.contains_key(crop)
    }
}

/// Shift each resolved month forward by `offset` with calendar wraparound.
/// Order follows the input iteration; an empty input is an empty output.
/// Only resolver output goes in here, never raw season tokens.
pub fn schedule(resolved_months: &[Month], offset: u8) -> Vec<Month> {
    resolved_months.iter().map(|m| m.add(offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_shifts_with_wraparound() {
        assert_eq!(schedule(&[Month::Nov], 2), vec![Month::Jan]);
        assert_eq!(
            schedule(&[Month::Jun, Month::Dec], 1),
            vec![Month::Jul, Month::Jan]
        );
    }

    #[test]
    fn schedule_composes_without_wraparound() {
        let input = [Month::Jan, Month::Mar];
        assert_eq!(
            schedule(&schedule(&input, 2), 3),
            schedule(&input, 5)
        );
    }

    #[test]
    fn schedule_empty_is_empty() {
        assert!(schedule(&[], 4).is_empty());
    }

    #[test]
    fn schedule_preserves_input_order() {
        // Wraparound can break calendar order; the contract is input order.
        assert_eq!(
            schedule(&[Month::Oct, Month::Nov, Month::Dec], 2),
            vec![Month::Dec, Month::Jan, Month::Feb]
        );
    }

    #[test]
    fn offset_map_missing_crop_is_an_error() {
        let map = OffsetMap::with_default(["Paddy"], 1).unwrap();
        assert_eq!(map.get("Paddy").unwrap(), 1);
        match map.get("Cotton") {
            Err(SprayPlanError::MissingOffset(crop)) => assert_eq!(crop, "Cotton"),
            other => panic!("expected MissingOffset, got {:?}", other),
        }
    }

    #[test]
    fn offset_map_rejects_out_of_range() {
        let mut map = OffsetMap::new();
        assert!(map.set("Paddy".into(), 0).is_err());
        assert!(map.set("Paddy".into(), 13).is_err());
        assert!(map.set("Paddy".into(), 12).is_ok());
        assert_eq!(map.get("Paddy").unwrap(), 12);
    }
}
