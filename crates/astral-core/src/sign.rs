use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The twelve zodiac signs. A user's sign is computed once at signup from
/// their birthdate and stored as a snapshot; it is never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Error)]
#[error("unknown zodiac sign: {0}")]
pub struct ParseSignError(String);

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Classify a calendar day into its zodiac sign. Each range spans the
    /// tail of one month and the head of the next, boundaries inclusive.
    ///
    /// Returns `None` only for (month, day) pairs outside any range, which
    /// cannot happen for a real calendar date — the partition property is
    /// covered by tests rather than handled at runtime.
    pub fn from_month_day(month: u32, day: u32) -> Option<Sign> {
        let sign = match (month, day) {
            (3, 21..) | (4, ..=19) => Sign::Aries,
            (4, 20..) | (5, ..=20) => Sign::Taurus,
            (5, 21..) | (6, ..=20) => Sign::Gemini,
            (6, 21..) | (7, ..=22) => Sign::Cancer,
            (7, 23..) | (8, ..=22) => Sign::Leo,
            (8, 23..) | (9, ..=22) => Sign::Virgo,
            (9, 23..) | (10, ..=22) => Sign::Libra,
            (10, 23..) | (11, ..=21) => Sign::Scorpio,
            (11, 22..) | (12, ..=21) => Sign::Sagittarius,
            (12, 22..) | (1, ..=19) => Sign::Capricorn,
            (1, 20..) | (2, ..=18) => Sign::Aquarius,
            (2, 19..) | (3, ..=20) => Sign::Pisces,
            _ => return None,
        };
        Some(sign)
    }

    pub fn from_birthdate(date: NaiveDate) -> Option<Sign> {
        Sign::from_month_day(date.month(), date.day())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == s)
            .ok_or_else(|| ParseSignError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_calendar_day_has_a_sign() {
        for month in 1..=12u32 {
            for day in 1..=31u32 {
                assert!(
                    Sign::from_month_day(month, day).is_some(),
                    "no sign for month={month} day={day}"
                );
            }
        }
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(Sign::from_month_day(3, 20), Some(Sign::Pisces));
        assert_eq!(Sign::from_month_day(3, 21), Some(Sign::Aries));
        assert_eq!(Sign::from_month_day(12, 21), Some(Sign::Sagittarius));
        assert_eq!(Sign::from_month_day(12, 22), Some(Sign::Capricorn));
        assert_eq!(Sign::from_month_day(1, 19), Some(Sign::Capricorn));
        assert_eq!(Sign::from_month_day(1, 20), Some(Sign::Aquarius));
        assert_eq!(Sign::from_month_day(7, 22), Some(Sign::Cancer));
        assert_eq!(Sign::from_month_day(7, 23), Some(Sign::Leo));
    }

    #[test]
    fn birthdate_classification() {
        let date = NaiveDate::from_ymd_opt(2000, 7, 15).unwrap();
        assert_eq!(Sign::from_birthdate(date), Some(Sign::Cancer));
    }

    #[test]
    fn name_roundtrip() {
        for sign in Sign::ALL {
            assert_eq!(sign.as_str().parse::<Sign>().unwrap(), sign);
        }
        assert!("Ophiuchus".parse::<Sign>().is_err());
    }
}
