use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::selector;
use crate::sign::Sign;

/// One day of horoscope history: either a persisted row or an entry
/// recomputed on the fly by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub sign: Sign,
    pub horoscope: String,
}

/// Merge stored history with recomputed entries into the trailing window of
/// `window_days` calendar days ending at `reference` (inclusive).
///
/// Stored entries win over synthesized ones for the same date; the first
/// stored entry wins if storage ever holds duplicates for a date. Output is
/// sorted descending by date, has at most one entry per date, and never
/// exceeds `window_days` entries. Synthesized entries are not persisted —
/// callers that want today's entry durable write it themselves.
pub fn reconcile(
    stored: &[HistoryEntry],
    sign: Sign,
    window_days: usize,
    reference: NaiveDate,
) -> Vec<HistoryEntry> {
    let window_start = reference - Duration::days(window_days as i64);

    let mut by_date: BTreeMap<NaiveDate, HistoryEntry> = BTreeMap::new();
    for entry in stored {
        if entry.date >= window_start && entry.date <= reference {
            by_date.entry(entry.date).or_insert_with(|| entry.clone());
        }
    }

    for offset in 0..window_days as i64 {
        let day = reference - Duration::days(offset);
        by_date.entry(day).or_insert_with(|| HistoryEntry {
            date: day,
            sign,
            horoscope: selector::select(sign, day).to_string(),
        });
    }

    by_date.into_values().rev().take(window_days).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored(day: NaiveDate, text: &str) -> HistoryEntry {
        HistoryEntry {
            date: day,
            sign: Sign::Gemini,
            horoscope: text.to_string(),
        }
    }

    #[test]
    fn empty_storage_yields_full_synthesized_window() {
        let today = date(2025, 8, 20);
        let result = reconcile(&[], Sign::Gemini, 7, today);

        assert_eq!(result.len(), 7);
        assert_eq!(result[0].date, today);
        assert_eq!(result[6].date, date(2025, 8, 14));
        for entry in &result {
            assert_eq!(entry.horoscope, selector::select(Sign::Gemini, entry.date));
        }
    }

    #[test]
    fn stored_entries_override_synthesized() {
        let today = date(2025, 8, 20);
        let records = vec![stored(date(2025, 8, 18), "saved text")];
        let result = reconcile(&records, Sign::Gemini, 7, today);

        assert_eq!(result.len(), 7);
        let kept = result.iter().find(|e| e.date == date(2025, 8, 18)).unwrap();
        assert_eq!(kept.horoscope, "saved text");
    }

    #[test]
    fn output_is_strictly_descending_with_unique_dates() {
        let today = date(2025, 8, 20);
        let records = vec![
            stored(date(2025, 8, 19), "a"),
            stored(date(2025, 8, 19), "b"),
            stored(date(2025, 8, 15), "c"),
        ];
        let result = reconcile(&records, Sign::Gemini, 7, today);

        assert_eq!(result.len(), 7);
        for pair in result.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
        // First stored duplicate wins.
        let kept = result.iter().find(|e| e.date == date(2025, 8, 19)).unwrap();
        assert_eq!(kept.horoscope, "a");
    }

    #[test]
    fn entries_outside_window_are_dropped() {
        let today = date(2025, 8, 20);
        let records = vec![stored(date(2025, 1, 1), "ancient")];
        let result = reconcile(&records, Sign::Gemini, 7, today);

        assert!(result.iter().all(|e| e.horoscope != "ancient"));
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let today = date(2025, 8, 20);
        let records = vec![
            stored(date(2025, 8, 20), "today"),
            stored(date(2025, 8, 16), "older"),
        ];
        let first = reconcile(&records, Sign::Gemini, 7, today);
        let second = reconcile(&records, Sign::Gemini, 7, today);
        assert_eq!(first, second);
    }

    #[test]
    fn window_length_is_respected_for_other_sizes() {
        let today = date(2025, 8, 20);
        let result = reconcile(&[], Sign::Gemini, 30, today);
        assert_eq!(result.len(), 30);
        let result = reconcile(&[], Sign::Gemini, 1, today);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, today);
    }
}
