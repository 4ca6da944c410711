//! Forecast bucketing over a time-ordered series of 3-hour samples
//!
//! Two independent selections over one vendor series: a contiguous window
//! of upcoming samples aligned to the nearest 3-hour boundary, and one
//! representative sample per calendar day.

use crate::Result;
use crate::config::ForecastConfig;
use crate::models::ForecastSample;
use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

/// Samples per calendar day in a 3-hour series (8 x 3h = 24h)
const SAMPLES_PER_DAY: usize = 8;

/// Hourly/daily bucket selection over a 3-hour forecast series
#[derive(Debug, Clone)]
pub struct ForecastBucketSelector {
    tz: Tz,
    hourly_window: usize,
    daily_limit: usize,
}

impl ForecastBucketSelector {
    /// Create a selector with explicit limits
    #[must_use]
    pub fn new(tz: Tz, hourly_window: usize, daily_limit: usize) -> Self {
        Self {
            tz,
            hourly_window,
            daily_limit,
        }
    }

    /// Create a selector from pipeline configuration
    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        Ok(Self::new(
            config.parsed_timezone()?,
            config.hourly_window,
            config.daily_limit,
        ))
    }

    /// Upcoming samples starting at the nearest 3-hour boundary to `now`
    ///
    /// The start is the first sample whose local hour equals
    /// `(hour(now) / 3) * 3`; if no sample matches, the series start is
    /// used. Returning a subslice keeps the result a contiguous,
    /// order-preserving part of the input, never longer than the
    /// configured window.
    #[must_use]
    pub fn select_upcoming<'a>(
        &self,
        samples: &'a [ForecastSample],
        now: DateTime<Utc>,
    ) -> &'a [ForecastSample] {
        if samples.is_empty() {
            return samples;
        }

        let nearest_hour = (now.with_timezone(&self.tz).hour() / 3) * 3;
        let start = samples
            .iter()
            .position(|s| s.timestamp.with_timezone(&self.tz).hour() == nearest_hour)
            .unwrap_or(0);

        let len = self.hourly_window.min(samples.len() - start);
        &samples[start..start + len]
    }

    /// One sample per distinct calendar day, up to the configured limit
    ///
    /// Walks the series in strides of 8 samples (one per day at 3-hour
    /// granularity). A stride hit whose calendar day was already collected
    /// is skipped, guarding against duplicate-day collisions from
    /// irregular feeds. Chronological order of first occurrence is kept.
    #[must_use]
    pub fn select_daily<'a>(&self, samples: &'a [ForecastSample]) -> Vec<&'a ForecastSample> {
        let mut picked: Vec<&ForecastSample> = Vec::new();
        let mut seen_days: Vec<NaiveDate> = Vec::new();

        for sample in samples.iter().step_by(SAMPLES_PER_DAY) {
            let day = sample.timestamp.with_timezone(&self.tz).date_naive();
            if seen_days.contains(&day) {
                continue;
            }
            seen_days.push(day);
            picked.push(sample);
            if picked.len() == self.daily_limit {
                break;
            }
        }

        picked
    }

    /// Whether a weekday label names the current day
    ///
    /// Presentation flag only, used to highlight the "today" row.
    #[must_use]
    pub fn is_today(&self, day_label: &str, now: DateTime<Utc>) -> bool {
        now.with_timezone(&self.tz).format("%A").to_string() == day_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use chrono_tz::UTC;

    fn series(start: DateTime<Utc>, count: usize) -> Vec<ForecastSample> {
        (0..count)
            .map(|i| ForecastSample {
                timestamp: start + Duration::hours(3 * i as i64),
                temperature: 20.0 + i as f64,
                condition_code: "01d".to_string(),
            })
            .collect()
    }

    fn selector() -> ForecastBucketSelector {
        ForecastBucketSelector::new(UTC, 6, 7)
    }

    #[test]
    fn test_upcoming_aligns_to_nearest_three_hour_boundary() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let samples = series(start, 16);

        // 10:20 rounds down to hour 9, the fourth sample
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 10, 20, 0).unwrap();
        let upcoming = selector().select_upcoming(&samples, now);

        assert_eq!(upcoming.len(), 6);
        assert_eq!(upcoming[0].timestamp, samples[3].timestamp);
        assert_eq!(upcoming[0].temperature, 23.0);
    }

    #[test]
    fn test_upcoming_falls_back_to_series_start() {
        // Series only covers hours 0..9, now is in the evening
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let samples = series(start, 4);

        let now = Utc.with_ymd_and_hms(2024, 6, 15, 22, 0, 0).unwrap();
        let upcoming = selector().select_upcoming(&samples, now);

        assert_eq!(upcoming[0].timestamp, samples[0].timestamp);
        assert_eq!(upcoming.len(), 4);
    }

    #[test]
    fn test_upcoming_never_exceeds_window() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let samples = series(start, 40);
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

        let upcoming = selector().select_upcoming(&samples, now);
        assert_eq!(upcoming.len(), 6);
    }

    #[test]
    fn test_upcoming_empty_input() {
        let now = Utc::now();
        assert!(selector().select_upcoming(&[], now).is_empty());
    }

    #[test]
    fn test_upcoming_respects_timezone() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let samples = series(start, 16);

        // 01:00 UTC is 10:00 in Seoul, so alignment lands on local hour 9,
        // which sample 0 (00:00 UTC = 09:00 KST) carries
        let seoul: Tz = "Asia/Seoul".parse().unwrap();
        let selector = ForecastBucketSelector::new(seoul, 6, 7);
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 1, 0, 0).unwrap();

        let upcoming = selector.select_upcoming(&samples, now);
        assert_eq!(upcoming[0].timestamp, samples[0].timestamp);
    }

    #[test]
    fn test_daily_one_per_day() {
        // 40 samples from hour 0 of day one: exactly 5 calendar days
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let samples = series(start, 40);

        let daily = selector().select_daily(&samples);
        assert_eq!(daily.len(), 5);

        let days: Vec<NaiveDate> = daily.iter().map(|s| s.timestamp.date_naive()).collect();
        let mut sorted = days.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(days, sorted);
    }

    #[test]
    fn test_daily_caps_at_limit() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let samples = series(start, 80); // 10 days of data

        let daily = selector().select_daily(&samples);
        assert_eq!(daily.len(), 7);
    }

    #[test]
    fn test_daily_short_input() {
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

        assert!(selector().select_daily(&[]).is_empty());
        assert_eq!(selector().select_daily(&series(start, 3)).len(), 1);
    }

    #[test]
    fn test_daily_skips_duplicate_days() {
        // Irregular feed where the second stride lands on the same day again
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let mut samples = series(start, 8);
        samples.extend(series(start + Duration::hours(1), 8));
        samples.extend(series(start + Duration::days(1), 8));

        let daily = selector().select_daily(&samples);
        assert_eq!(daily.len(), 2);
    }

    #[test]
    fn test_is_today() {
        let selector = selector();
        // 2024-06-15 was a Saturday
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert!(selector.is_today("Saturday", now));
        assert!(!selector.is_today("Monday", now));
    }
}
