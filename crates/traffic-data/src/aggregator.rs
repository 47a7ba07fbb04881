//! The four traffic analyses over an ordered slice of readings.
//!
//! Every function here is pure: the input slice is never reordered and the
//! results are freshly built values.

use std::collections::HashMap;

use chrono::NaiveDate;
use traffic_core::error::{Result, TrafficError};
use traffic_core::models::{DailyTotal, Reading};

// ── TrafficAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that derives summary views from a reading sequence.
pub struct TrafficAggregator;

impl TrafficAggregator {
    /// Total number of cars across all readings.
    pub fn total_cars(readings: &[Reading]) -> u64 {
        readings.iter().map(Reading::count).sum()
    }

    /// Cars per calendar day.
    ///
    /// Days appear in the order they are first seen in `readings`, not in
    /// date order.
    pub fn daily_totals(readings: &[Reading]) -> Vec<DailyTotal> {
        let mut totals: Vec<DailyTotal> = Vec::new();
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();

        for reading in readings {
            let day = reading.day();
            let slot = *index.entry(day).or_insert_with(|| {
                totals.push(DailyTotal {
                    date: day,
                    count: 0,
                });
                totals.len() - 1
            });
            totals[slot].count += reading.count();
        }

        totals
    }

    /// Up to `n` readings with the highest counts, busiest first.
    ///
    /// Readings with equal counts keep their input order.
    pub fn top_periods(readings: &[Reading], n: usize) -> Vec<Reading> {
        let mut sorted = readings.to_vec();
        // sort_by is stable
        sorted.sort_by(|a, b| b.count().cmp(&a.count()));
        sorted.truncate(n);
        sorted
    }

    /// The `window` contiguous readings with the smallest combined count.
    ///
    /// When several windows tie, the earliest one wins. A `window` of zero
    /// yields an empty period.
    ///
    /// # Errors
    ///
    /// [`TrafficError::InsufficientData`] when fewer than `window` readings
    /// are available.
    pub fn least_busy_period(readings: &[Reading], window: usize) -> Result<Vec<Reading>> {
        if readings.len() < window {
            return Err(TrafficError::InsufficientData {
                required: window,
                actual: readings.len(),
            });
        }
        if window == 0 {
            return Ok(Vec::new());
        }

        // min_by_key keeps the first of several equal minima.
        let least = readings
            .windows(window)
            .min_by_key(|period| Self::total_cars(period))
            .unwrap_or(&[]);

        Ok(least.to_vec())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date}T{time}"), "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn record(date: &str, time: &str, count: u64) -> Reading {
        Reading::new(at(date, time), count)
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn counts(readings: &[Reading]) -> Vec<u64> {
        readings.iter().map(Reading::count).collect()
    }

    fn sample_records() -> Vec<Reading> {
        vec![
            record("2021-12-01", "05:00:00", 5),
            record("2021-12-01", "05:30:00", 12),
            record("2021-12-01", "06:00:00", 14),
            record("2021-12-01", "06:30:00", 15),
            record("2021-12-01", "07:00:00", 25),
            record("2021-12-01", "07:30:00", 46),
            record("2021-12-01", "08:00:00", 42),
            record("2021-12-01", "15:00:00", 9),
            record("2021-12-01", "15:30:00", 11),
            record("2021-12-01", "23:30:00", 0),
            record("2021-12-05", "09:30:00", 18),
            record("2021-12-05", "10:30:00", 15),
            record("2021-12-05", "11:30:00", 7),
            record("2021-12-05", "12:30:00", 6),
            record("2021-12-05", "13:30:00", 9),
            record("2021-12-05", "14:30:00", 11),
            record("2021-12-05", "15:30:00", 15),
            record("2021-12-08", "18:00:00", 33),
            record("2021-12-08", "19:00:00", 28),
            record("2021-12-08", "20:00:00", 25),
            record("2021-12-08", "21:00:00", 21),
            record("2021-12-08", "22:00:00", 16),
            record("2021-12-08", "23:00:00", 11),
            record("2021-12-09", "00:00:00", 4),
        ]
    }

    // ── total_cars ────────────────────────────────────────────────────────────

    #[test]
    fn test_total_empty() {
        assert_eq!(TrafficAggregator::total_cars(&[]), 0);
    }

    #[test]
    fn test_total_single_record() {
        let records = [record("2021-12-01", "05:00:00", 5)];
        assert_eq!(TrafficAggregator::total_cars(&records), 5);
    }

    #[test]
    fn test_total_sample_data() {
        assert_eq!(TrafficAggregator::total_cars(&sample_records()), 398);
    }

    #[test]
    fn test_total_includes_zero_counts() {
        let records = [
            record("2021-12-01", "05:00:00", 0),
            record("2021-12-01", "05:30:00", 10),
        ];
        assert_eq!(TrafficAggregator::total_cars(&records), 10);
    }

    // ── daily_totals ──────────────────────────────────────────────────────────

    #[test]
    fn test_daily_empty() {
        assert!(TrafficAggregator::daily_totals(&[]).is_empty());
    }

    #[test]
    fn test_daily_single_day() {
        let records = [
            record("2021-12-01", "05:00:00", 5),
            record("2021-12-01", "05:30:00", 12),
        ];
        assert_eq!(
            TrafficAggregator::daily_totals(&records),
            vec![DailyTotal {
                date: day("2021-12-01"),
                count: 17
            }]
        );
    }

    #[test]
    fn test_daily_sample_data() {
        let daily = TrafficAggregator::daily_totals(&sample_records());
        let pairs: Vec<(NaiveDate, u64)> = daily.iter().map(|d| (d.date, d.count)).collect();
        assert_eq!(
            pairs,
            vec![
                (day("2021-12-01"), 179),
                (day("2021-12-05"), 81),
                (day("2021-12-08"), 134),
                (day("2021-12-09"), 4),
            ]
        );
    }

    #[test]
    fn test_daily_first_encounter_order() {
        let records = [
            record("2021-12-05", "09:30:00", 18),
            record("2021-12-01", "05:00:00", 5),
            record("2021-12-05", "10:30:00", 2),
            record("2021-12-03", "05:00:00", 1),
            record("2021-12-01", "06:00:00", 7),
        ];
        let daily = TrafficAggregator::daily_totals(&records);
        let dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![day("2021-12-05"), day("2021-12-01"), day("2021-12-03")]
        );
        assert_eq!(daily[0].count, 20);
        assert_eq!(daily[1].count, 12);
        assert_eq!(daily[2].count, 1);
    }

    #[test]
    fn test_daily_sums_to_total() {
        let records = sample_records();
        let daily_sum: u64 = TrafficAggregator::daily_totals(&records)
            .iter()
            .map(|d| d.count)
            .sum();
        assert_eq!(daily_sum, TrafficAggregator::total_cars(&records));
    }

    // ── top_periods ───────────────────────────────────────────────────────────

    #[test]
    fn test_top_3_sample_data() {
        let top3 = TrafficAggregator::top_periods(&sample_records(), 3);
        assert_eq!(counts(&top3), vec![46, 42, 33]);
        assert_eq!(top3[0].timestamp(), at("2021-12-01", "07:30:00"));
        assert_eq!(top3[1].timestamp(), at("2021-12-01", "08:00:00"));
        assert_eq!(top3[2].timestamp(), at("2021-12-08", "18:00:00"));
    }

    #[test]
    fn test_top_1() {
        let top1 = TrafficAggregator::top_periods(&sample_records(), 1);
        assert_eq!(top1, vec![record("2021-12-01", "07:30:00", 46)]);
    }

    #[test]
    fn test_top_zero() {
        assert!(TrafficAggregator::top_periods(&sample_records(), 0).is_empty());
    }

    #[test]
    fn test_top_empty_input() {
        assert!(TrafficAggregator::top_periods(&[], 3).is_empty());
    }

    #[test]
    fn test_top_fewer_records_than_n() {
        let records = [
            record("2021-12-01", "05:00:00", 5),
            record("2021-12-01", "05:30:00", 12),
        ];
        let result = TrafficAggregator::top_periods(&records, 3);
        assert_eq!(counts(&result), vec![12, 5]);
    }

    #[test]
    fn test_top_ties_keep_input_order() {
        let records = [
            record("2021-12-01", "05:00:00", 7),
            record("2021-12-01", "05:30:00", 9),
            record("2021-12-01", "06:00:00", 7),
            record("2021-12-01", "06:30:00", 9),
            record("2021-12-01", "07:00:00", 7),
        ];
        let result = TrafficAggregator::top_periods(&records, records.len());
        assert_eq!(
            result,
            vec![records[1], records[3], records[0], records[2], records[4]]
        );
    }

    #[test]
    fn test_top_does_not_reorder_input() {
        let records = sample_records();
        let before = records.clone();
        let _ = TrafficAggregator::top_periods(&records, 5);
        assert_eq!(records, before);
    }

    // ── least_busy_period ─────────────────────────────────────────────────────

    #[test]
    fn test_least_busy_sample_data_window_3() {
        let records = sample_records();
        let result = TrafficAggregator::least_busy_period(&records, 3).unwrap();
        assert_eq!(result.len(), 3);

        let brute_force_min = (0..=records.len() - 3)
            .map(|i| TrafficAggregator::total_cars(&records[i..i + 3]))
            .min()
            .unwrap();
        assert_eq!(TrafficAggregator::total_cars(&result), brute_force_min);
        assert_eq!(counts(&result), vec![9, 11, 0]);
        assert_eq!(result[0].timestamp(), at("2021-12-01", "15:00:00"));
    }

    #[test]
    fn test_least_busy_window_equals_length() {
        let records = [
            record("2021-12-01", "05:00:00", 5),
            record("2021-12-01", "05:30:00", 12),
            record("2021-12-01", "06:00:00", 14),
        ];
        let result = TrafficAggregator::least_busy_period(&records, 3).unwrap();
        assert_eq!(result, records.to_vec());
    }

    #[test]
    fn test_least_busy_custom_window() {
        let records = [
            record("2021-12-01", "05:00:00", 10),
            record("2021-12-01", "05:30:00", 1),
            record("2021-12-01", "06:00:00", 2),
            record("2021-12-01", "06:30:00", 20),
        ];
        let result = TrafficAggregator::least_busy_period(&records, 2).unwrap();
        assert_eq!(counts(&result), vec![1, 2]);
    }

    #[test]
    fn test_least_busy_first_tie_wins() {
        let records = [
            record("2021-12-01", "05:00:00", 3),
            record("2021-12-01", "05:30:00", 1),
            record("2021-12-01", "06:00:00", 9),
            record("2021-12-01", "06:30:00", 2),
            record("2021-12-01", "07:00:00", 2),
        ];
        // Windows [3,1] and [2,2] both sum to 4.
        let result = TrafficAggregator::least_busy_period(&records, 2).unwrap();
        assert_eq!(result, vec![records[0], records[1]]);
    }

    #[test]
    fn test_least_busy_window_of_one_picks_first_minimum() {
        let records = [
            record("2021-12-01", "05:00:00", 4),
            record("2021-12-01", "05:30:00", 0),
            record("2021-12-01", "06:00:00", 0),
        ];
        let result = TrafficAggregator::least_busy_period(&records, 1).unwrap();
        assert_eq!(result, vec![records[1]]);
    }

    #[test]
    fn test_least_busy_insufficient_records() {
        let records = [
            record("2021-12-01", "05:00:00", 5),
            record("2021-12-01", "05:30:00", 12),
        ];
        let err = TrafficAggregator::least_busy_period(&records, 3).unwrap_err();
        assert!(err.is_insufficient_data());
        match err {
            TrafficError::InsufficientData { required, actual } => {
                assert_eq!(required, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_least_busy_empty_input() {
        let err = TrafficAggregator::least_busy_period(&[], 3).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_least_busy_zero_window() {
        let result = TrafficAggregator::least_busy_period(&sample_records(), 0).unwrap();
        assert!(result.is_empty());
    }
}
