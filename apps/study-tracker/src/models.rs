//! Data models for study tracking.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique subject identifier.
pub type SubjectId = Uuid;
/// Unique session identifier.
pub type SessionId = Uuid;
/// Unique task identifier.
pub type TaskId = Uuid;
/// Unique note identifier.
pub type NoteId = Uuid;

/// Day-of-week index, 0=Sunday..6=Saturday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// A study subject to schedule sessions for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier.
    pub id: SubjectId,
    /// Subject name.
    pub name: String,
    /// Display color.
    pub color: Option<String>,
    /// Target length of one reading session, in minutes.
    pub target_mins: u32,
    /// Scheduled days of week (0=Sun..6=Sat). Empty means every day.
    pub scheduled_days: Vec<u8>,
    /// Whether the subject is archived.
    pub archived: bool,
    /// When the subject was created.
    pub created_at: DateTime<Utc>,
}

impl Subject {
    /// Create a new subject scheduled every day.
    pub fn new(name: impl Into<String>, target_mins: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: None,
            target_mins,
            scheduled_days: Vec::new(),
            archived: false,
            created_at: Utc::now(),
        }
    }

    /// Restrict the subject to specific days of week.
    pub fn with_days(mut self, days: Vec<u8>) -> Self {
        self.scheduled_days = days;
        self
    }

    /// Check if the subject is scheduled on a given date.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.scheduled_days.is_empty()
            || self.scheduled_days.contains(&(weekday_index(date) as u8))
    }

    /// Get display string for the schedule.
    pub fn schedule_display(&self) -> String {
        if self.scheduled_days.is_empty() {
            return "Daily".to_string();
        }
        let names: Vec<&str> = self
            .scheduled_days
            .iter()
            .map(|d| match d {
                0 => "Sun",
                1 => "Mon",
                2 => "Tue",
                3 => "Wed",
                4 => "Thu",
                5 => "Fri",
                _ => "Sat",
            })
            .collect();
        names.join(", ")
    }
}

/// A completed (or abandoned) reading session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// Unique identifier.
    pub id: SessionId,
    /// Subject studied.
    pub subject_id: SubjectId,
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Session length in minutes.
    pub duration_mins: u32,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// Whether the session ran to completion.
    pub completed: bool,
}

impl StudySession {
    /// Create a completed session record for a date.
    pub fn completed(subject_id: SubjectId, date: NaiveDate, duration_mins: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id,
            date,
            duration_mins,
            started_at: Utc::now(),
            completed: true,
        }
    }

    /// Session length as hours.
    pub fn hours(&self) -> f64 {
        self.duration_mins as f64 / 60.0
    }
}

/// A to-do item, optionally tied to a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub subject_id: Option<SubjectId>,
    pub title: String,
    pub done: bool,
    pub due: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id: None,
            title: title.into(),
            done: false,
            due: None,
            created_at: Utc::now(),
        }
    }

    /// Flip completion state.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Check if the task is overdue relative to a date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due.map_or(false, |d| d < today)
    }
}

/// A free-form note, optionally tied to a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub subject_id: Option<SubjectId>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id: None,
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// Per-user aggregate study statistics.
///
/// `weekly_hours` buckets hours by day of week (0=Sun..6=Sat) and is never
/// reset; each slot is the cumulative total ever studied on that weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyStats {
    /// Cumulative studied hours.
    pub total_hours: f64,
    /// Count of completed sessions.
    pub total_sessions: u32,
    /// Consecutive calendar days with at least one completed session.
    pub current_streak: u32,
    /// Historical maximum of `current_streak`.
    pub longest_streak: u32,
    /// Hours bucketed by day of week.
    pub weekly_hours: [f64; 7],
    /// Date of the most recent session.
    pub last_study_date: Option<NaiveDate>,
}

impl Default for StudyStats {
    fn default() -> Self {
        Self {
            total_hours: 0.0,
            total_sessions: 0,
            current_streak: 0,
            longest_streak: 0,
            weekly_hours: [0.0; 7],
            last_study_date: None,
        }
    }
}

impl StudyStats {
    /// Sum of all weekday buckets.
    pub fn weekly_total(&self) -> f64 {
        self.weekly_hours.iter().sum()
    }
}

/// An achievement earned by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarnedAchievement {
    /// Catalog id of the achievement.
    pub achievement_id: String,
    /// When it was unlocked.
    pub earned_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index() {
        // 2024-01-14 is a Sunday
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()), 0);
        // 2024-01-15 is a Monday
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), 1);
        // 2024-01-20 is a Saturday
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()), 6);
    }

    #[test]
    fn test_subject_due_every_day_by_default() {
        let subject = Subject::new("Mathematics", 25);
        assert!(subject.is_due_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(subject.is_due_on(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()));
    }

    #[test]
    fn test_subject_scheduled_days() {
        // Mon, Wed, Fri
        let subject = Subject::new("History", 30).with_days(vec![1, 3, 5]);

        // Jan 15, 2024 is Monday
        assert!(subject.is_due_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        // Jan 16, 2024 is Tuesday
        assert!(!subject.is_due_on(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()));
        // Jan 17, 2024 is Wednesday
        assert!(subject.is_due_on(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()));
    }

    #[test]
    fn test_session_hours() {
        let subject = Subject::new("Physics", 25);
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let session = StudySession::completed(subject.id, date, 90);
        assert_eq!(session.hours(), 1.5);
        assert!(session.completed);
    }

    #[test]
    fn test_task_toggle_and_overdue() {
        let mut task = Task::new("Read chapter 4");
        assert!(!task.done);

        task.due = Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert!(task.is_overdue(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));

        task.toggle();
        assert!(task.done);
        assert!(!task.is_overdue(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_stats_default_is_zeroed() {
        let stats = StudyStats::default();
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.weekly_total(), 0.0);
        assert!(stats.last_study_date.is_none());
    }
}
