//! Study statistics engine.
//!
//! Pure fold of completed sessions into the per-user aggregate. The caller
//! owns persistence; `db::Database::record_session` wraps one call of this
//! function together with the session insert in a single transaction.

use crate::models::{weekday_index, StudyStats};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors from the stats engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("session duration must be at least one minute")]
    InvalidDuration,
}

/// Fold one completed session into the aggregate and return the new value.
///
/// The streak decision is made against the previous `last_study_date` before
/// any totals move: a repeat session on the same day leaves the streak
/// unchanged, a session on the following day extends it, and anything else
/// (first session ever, or a gap of two or more days) restarts it at 1.
///
/// Calls must be made in non-decreasing date order; a late-arriving session
/// for an earlier date would corrupt the streak.
pub fn record_session_completion(
    stats: &StudyStats,
    duration_mins: u32,
    today: NaiveDate,
) -> Result<StudyStats, StatsError> {
    if duration_mins == 0 {
        return Err(StatsError::InvalidDuration);
    }

    let mut next = stats.clone();

    next.current_streak = match stats.last_study_date {
        Some(last) if last == today => stats.current_streak,
        Some(last) if last.succ_opt() == Some(today) => stats.current_streak + 1,
        _ => 1,
    };
    next.longest_streak = next.longest_streak.max(next.current_streak);

    let hours = duration_mins as f64 / 60.0;
    next.total_hours += hours;
    next.total_sessions += 1;
    // Buckets accumulate across weeks; slots are cumulative per weekday.
    next.weekly_hours[weekday_index(today)] += hours;
    next.last_study_date = Some(today);

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_session() {
        let stats = StudyStats::default();
        let result = record_session_completion(&stats, 90, date(2024, 1, 15)).unwrap();

        assert_eq!(result.total_hours, 1.5);
        assert_eq!(result.total_sessions, 1);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 1);
        assert_eq!(result.last_study_date, Some(date(2024, 1, 15)));
        // Jan 15, 2024 is a Monday
        assert_eq!(result.weekly_hours[1], 1.5);
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let stats = StudyStats::default();
        let day1 = record_session_completion(&stats, 90, date(2024, 1, 15)).unwrap();
        let day2 = record_session_completion(&day1, 60, date(2024, 1, 16)).unwrap();

        assert_eq!(day2.current_streak, 2);
        assert_eq!(day2.longest_streak, 2);
        assert_eq!(day2.total_hours, 2.5);
        assert_eq!(day2.total_sessions, 2);
    }

    #[test]
    fn test_gap_resets_streak_but_keeps_longest() {
        let stats = StudyStats::default();
        let day1 = record_session_completion(&stats, 90, date(2024, 1, 15)).unwrap();
        let day2 = record_session_completion(&day1, 60, date(2024, 1, 16)).unwrap();
        let later = record_session_completion(&day2, 30, date(2024, 1, 20)).unwrap();

        assert_eq!(later.current_streak, 1);
        assert_eq!(later.longest_streak, 2);
    }

    #[test]
    fn test_same_day_repeat_leaves_streak_unchanged() {
        let stats = StudyStats::default();
        let first = record_session_completion(&stats, 30, date(2024, 1, 15)).unwrap();
        let second = record_session_completion(&first, 30, date(2024, 1, 15)).unwrap();

        assert_eq!(second.current_streak, 1);
        assert_eq!(second.total_sessions, 2);
        assert_eq!(second.total_hours, 1.0);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let stats = StudyStats {
            current_streak: 3,
            longest_streak: 3,
            last_study_date: Some(date(2024, 1, 31)),
            ..StudyStats::default()
        };
        let result = record_session_completion(&stats, 45, date(2024, 2, 1)).unwrap();
        assert_eq!(result.current_streak, 4);
    }

    #[test]
    fn test_totals_never_decrease() {
        let mut stats = StudyStats::default();
        let days = [
            date(2024, 1, 15),
            date(2024, 1, 15),
            date(2024, 1, 16),
            date(2024, 1, 19),
            date(2024, 1, 20),
        ];

        for (i, day) in days.iter().enumerate() {
            let next = record_session_completion(&stats, 25, *day).unwrap();
            assert!(next.total_hours >= stats.total_hours);
            assert!(next.total_sessions > stats.total_sessions);
            assert!(next.longest_streak >= next.current_streak);
            assert_eq!(next.total_sessions, i as u32 + 1);
            stats = next;
        }
    }

    #[test]
    fn test_zero_duration_rejected() {
        let stats = StudyStats::default();
        let err = record_session_completion(&stats, 0, date(2024, 1, 15)).unwrap_err();
        assert_eq!(err, StatsError::InvalidDuration);
    }

    #[test]
    fn test_weekday_buckets_accumulate_across_weeks() {
        let stats = StudyStats::default();
        // Two Mondays a week apart both land in slot 1.
        let week1 = record_session_completion(&stats, 60, date(2024, 1, 15)).unwrap();
        let week2 = record_session_completion(&week1, 60, date(2024, 1, 22)).unwrap();

        assert_eq!(week2.weekly_hours[1], 2.0);
        assert_eq!(week2.weekly_total(), 2.0);
        // The gap between the Mondays reset the streak.
        assert_eq!(week2.current_streak, 1);
    }

    #[test]
    fn test_input_stats_not_mutated() {
        let stats = StudyStats::default();
        let _ = record_session_completion(&stats, 60, date(2024, 1, 15)).unwrap();
        assert_eq!(stats, StudyStats::default());
    }
}
