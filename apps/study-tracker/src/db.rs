//! Database operations for study tracking.

use crate::achievements::{self, Achievement};
use crate::models::{
    EarnedAchievement, Note, NoteId, StudySession, StudyStats, Subject, SubjectId, Task, TaskId,
};
use crate::stats::{record_session_completion, StatsError};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Result as SqlResult};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at path.
    pub fn open(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema.
    fn init(&self) -> DbResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS subjects (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                color TEXT,
                target_mins INTEGER NOT NULL,
                scheduled_days TEXT NOT NULL,
                archived INTEGER DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS sessions (
                id TEXT PRIMARY KEY,
                subject_id TEXT NOT NULL REFERENCES subjects(id),
                date TEXT NOT NULL,
                duration_mins INTEGER NOT NULL,
                started_at TEXT NOT NULL,
                completed INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                subject_id TEXT REFERENCES subjects(id),
                title TEXT NOT NULL,
                done INTEGER DEFAULT 0,
                due TEXT,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                subject_id TEXT REFERENCES subjects(id),
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS study_stats (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                total_hours REAL NOT NULL,
                total_sessions INTEGER NOT NULL,
                current_streak INTEGER NOT NULL,
                longest_streak INTEGER NOT NULL,
                weekly_hours TEXT NOT NULL,
                last_study_date TEXT
            );

            CREATE TABLE IF NOT EXISTS achievements (
                achievement_id TEXT PRIMARY KEY,
                earned_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
            CREATE INDEX IF NOT EXISTS idx_sessions_subject ON sessions(subject_id);
            CREATE INDEX IF NOT EXISTS idx_tasks_due ON tasks(due);
            "#,
        )?;
        Ok(())
    }

    // Subject operations

    /// Insert a new subject.
    pub fn insert_subject(&self, subject: &Subject) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO subjects (id, name, color, target_mins, scheduled_days, archived, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                subject.id.to_string(),
                subject.name,
                subject.color,
                subject.target_mins,
                serde_json::to_string(&subject.scheduled_days)?,
                subject.archived as i32,
                subject.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Update an existing subject.
    pub fn update_subject(&self, subject: &Subject) -> DbResult<()> {
        self.conn.execute(
            r#"
            UPDATE subjects SET
                name = ?2, color = ?3, target_mins = ?4, scheduled_days = ?5, archived = ?6
            WHERE id = ?1
            "#,
            params![
                subject.id.to_string(),
                subject.name,
                subject.color,
                subject.target_mins,
                serde_json::to_string(&subject.scheduled_days)?,
                subject.archived as i32,
            ],
        )?;
        Ok(())
    }

    /// Delete a subject, its sessions, and detach its tasks and notes.
    pub fn delete_subject(&self, id: SubjectId) -> DbResult<()> {
        self.conn.execute(
            "DELETE FROM sessions WHERE subject_id = ?1",
            params![id.to_string()],
        )?;
        self.conn.execute(
            "UPDATE tasks SET subject_id = NULL WHERE subject_id = ?1",
            params![id.to_string()],
        )?;
        self.conn.execute(
            "UPDATE notes SET subject_id = NULL WHERE subject_id = ?1",
            params![id.to_string()],
        )?;
        self.conn
            .execute("DELETE FROM subjects WHERE id = ?1", params![id.to_string()])?;
        Ok(())
    }

    /// Get a subject by ID.
    pub fn get_subject(&self, id: SubjectId) -> DbResult<Option<Subject>> {
        let mut stmt = self.conn.prepare("SELECT * FROM subjects WHERE id = ?1")?;
        let subject = stmt.query_row(params![id.to_string()], |row| Ok(parse_subject_row(row)?));
        match subject {
            Ok(s) => Ok(Some(s)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all subjects (optionally including archived).
    pub fn list_subjects(&self, include_archived: bool) -> DbResult<Vec<Subject>> {
        let sql = if include_archived {
            "SELECT * FROM subjects ORDER BY created_at"
        } else {
            "SELECT * FROM subjects WHERE archived = 0 ORDER BY created_at"
        };
        let mut stmt = self.conn.prepare(sql)?;
        let subjects = stmt
            .query_map([], |row| Ok(parse_subject_row(row)?))?
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(subjects)
    }

    /// Get subjects scheduled on a specific date.
    pub fn subjects_due_on(&self, date: NaiveDate) -> DbResult<Vec<Subject>> {
        let all = self.list_subjects(false)?;
        Ok(all.into_iter().filter(|s| s.is_due_on(date)).collect())
    }

    /// Total hours ever studied for a subject.
    pub fn subject_hours(&self, id: SubjectId) -> DbResult<f64> {
        let mut stmt = self.conn.prepare(
            "SELECT COALESCE(SUM(duration_mins), 0) FROM sessions WHERE subject_id = ?1 AND completed = 1",
        )?;
        let mins: i64 = stmt.query_row(params![id.to_string()], |row| row.get(0))?;
        Ok(mins as f64 / 60.0)
    }

    // Session operations

    /// Get all sessions for a date, most recent first.
    pub fn sessions_on(&self, date: NaiveDate) -> DbResult<Vec<StudySession>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM sessions WHERE date = ?1 ORDER BY started_at DESC",
        )?;
        let sessions = stmt
            .query_map(params![date.to_string()], |row| Ok(parse_session_row(row)?))?
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(sessions)
    }

    /// Get the most recent completed sessions.
    pub fn recent_sessions(&self, limit: usize) -> DbResult<Vec<StudySession>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM sessions WHERE completed = 1 ORDER BY started_at DESC LIMIT ?1",
        )?;
        let sessions = stmt
            .query_map(params![limit as i64], |row| Ok(parse_session_row(row)?))?
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(sessions)
    }

    /// Record a completed session: insert it, fold it into the aggregate
    /// stats, and award any newly unlocked achievements — all in one
    /// transaction so the stats fields can never move independently.
    ///
    /// Returns the updated stats and the newly earned achievements, which the
    /// caller surfaces as notifications.
    pub fn record_session(
        &mut self,
        session: &StudySession,
        weekly_hours_target: f64,
    ) -> DbResult<(StudyStats, Vec<&'static Achievement>)> {
        let tx = self.conn.transaction()?;

        tx.execute(
            r#"
            INSERT INTO sessions (id, subject_id, date, duration_mins, started_at, completed)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                session.id.to_string(),
                session.subject_id.to_string(),
                session.date.to_string(),
                session.duration_mins,
                session.started_at.to_rfc3339(),
                session.completed as i32,
            ],
        )?;

        let stats = load_stats(&tx)?;
        let updated = record_session_completion(&stats, session.duration_mins, session.date)?;
        save_stats(&tx, &updated)?;

        let existing = earned_ids(&tx)?;
        let newly = achievements::evaluate(&updated, weekly_hours_target, &existing);
        let now = Utc::now().to_rfc3339();
        for achievement in &newly {
            tx.execute(
                "INSERT INTO achievements (achievement_id, earned_at) VALUES (?1, ?2)",
                params![achievement.id, now],
            )?;
        }

        tx.commit()?;
        Ok((updated, newly))
    }

    // Stats and achievement operations

    /// Load the aggregate stats (zeroed if never written).
    pub fn load_stats(&self) -> DbResult<StudyStats> {
        load_stats(&self.conn)
    }

    /// All earned achievements with their unlock timestamps.
    pub fn list_earned_achievements(&self) -> DbResult<Vec<EarnedAchievement>> {
        let mut stmt = self
            .conn
            .prepare("SELECT achievement_id, earned_at FROM achievements ORDER BY earned_at")?;
        let earned = stmt
            .query_map([], |row| {
                let earned_str: String = row.get(1)?;
                Ok(EarnedAchievement {
                    achievement_id: row.get(0)?,
                    earned_at: DateTime::parse_from_rfc3339(&earned_str)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                })
            })?
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(earned)
    }

    // Task operations

    /// Insert a new task.
    pub fn insert_task(&self, task: &Task) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO tasks (id, subject_id, title, done, due, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                task.id.to_string(),
                task.subject_id.map(|id| id.to_string()),
                task.title,
                task.done as i32,
                task.due.map(|d| d.to_string()),
                task.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Update an existing task.
    pub fn update_task(&self, task: &Task) -> DbResult<()> {
        self.conn.execute(
            "UPDATE tasks SET subject_id = ?2, title = ?3, done = ?4, due = ?5 WHERE id = ?1",
            params![
                task.id.to_string(),
                task.subject_id.map(|id| id.to_string()),
                task.title,
                task.done as i32,
                task.due.map(|d| d.to_string()),
            ],
        )?;
        Ok(())
    }

    /// Delete a task.
    pub fn delete_task(&self, id: TaskId) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id.to_string()])?;
        Ok(())
    }

    /// List tasks, open ones first.
    pub fn list_tasks(&self) -> DbResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM tasks ORDER BY done, due IS NULL, due, created_at",
        )?;
        let tasks = stmt
            .query_map([], |row| Ok(parse_task_row(row)?))?
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(tasks)
    }

    // Note operations

    /// Insert a new note.
    pub fn insert_note(&self, note: &Note) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO notes (id, subject_id, body, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                note.id.to_string(),
                note.subject_id.map(|id| id.to_string()),
                note.body,
                note.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Delete a note.
    pub fn delete_note(&self, id: NoteId) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id.to_string()])?;
        Ok(())
    }

    /// List notes, most recent first.
    pub fn list_notes(&self) -> DbResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM notes ORDER BY created_at DESC")?;
        let notes = stmt
            .query_map([], |row| Ok(parse_note_row(row)?))?
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(notes)
    }
}

// Helper functions

fn load_stats(conn: &Connection) -> DbResult<StudyStats> {
    let mut stmt = conn.prepare("SELECT * FROM study_stats WHERE id = 1")?;
    let stats = stmt.query_row([], |row| {
        let weekly_str: String = row.get("weekly_hours")?;
        let last_str: Option<String> = row.get("last_study_date")?;
        Ok((
            StudyStats {
                total_hours: row.get("total_hours")?,
                total_sessions: row.get::<_, i64>("total_sessions")? as u32,
                current_streak: row.get::<_, i64>("current_streak")? as u32,
                longest_streak: row.get::<_, i64>("longest_streak")? as u32,
                weekly_hours: [0.0; 7],
                last_study_date: last_str
                    .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
            },
            weekly_str,
        ))
    });

    match stats {
        Ok((mut stats, weekly_str)) => {
            stats.weekly_hours = serde_json::from_str(&weekly_str)?;
            Ok(stats)
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(StudyStats::default()),
        Err(e) => Err(e.into()),
    }
}

fn save_stats(conn: &Connection, stats: &StudyStats) -> DbResult<()> {
    conn.execute(
        r#"
        INSERT INTO study_stats (id, total_hours, total_sessions, current_streak, longest_streak, weekly_hours, last_study_date)
        VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT(id) DO UPDATE SET
            total_hours = excluded.total_hours,
            total_sessions = excluded.total_sessions,
            current_streak = excluded.current_streak,
            longest_streak = excluded.longest_streak,
            weekly_hours = excluded.weekly_hours,
            last_study_date = excluded.last_study_date
        "#,
        params![
            stats.total_hours,
            stats.total_sessions,
            stats.current_streak,
            stats.longest_streak,
            serde_json::to_string(&stats.weekly_hours.to_vec())?,
            stats.last_study_date.map(|d| d.to_string()),
        ],
    )?;
    Ok(())
}

fn earned_ids(conn: &Connection) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT achievement_id FROM achievements ORDER BY earned_at")?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<SqlResult<Vec<String>>>()?;
    Ok(ids)
}

fn parse_subject_row(row: &rusqlite::Row) -> SqlResult<Subject> {
    let id_str: String = row.get("id")?;
    let days_str: String = row.get("scheduled_days")?;
    let created_str: String = row.get("created_at")?;
    let archived: i32 = row.get("archived")?;

    Ok(Subject {
        id: Uuid::parse_str(&id_str).unwrap(),
        name: row.get("name")?,
        color: row.get("color")?,
        target_mins: row.get::<_, i64>("target_mins")? as u32,
        scheduled_days: serde_json::from_str(&days_str).unwrap_or_default(),
        archived: archived != 0,
        created_at: DateTime::parse_from_rfc3339(&created_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

fn parse_session_row(row: &rusqlite::Row) -> SqlResult<StudySession> {
    let id_str: String = row.get("id")?;
    let subject_id_str: String = row.get("subject_id")?;
    let date_str: String = row.get("date")?;
    let started_str: String = row.get("started_at")?;
    let completed: i32 = row.get("completed")?;

    Ok(StudySession {
        id: Uuid::parse_str(&id_str).unwrap(),
        subject_id: Uuid::parse_str(&subject_id_str).unwrap(),
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap(),
        duration_mins: row.get::<_, i64>("duration_mins")? as u32,
        started_at: DateTime::parse_from_rfc3339(&started_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
        completed: completed != 0,
    })
}

fn parse_task_row(row: &rusqlite::Row) -> SqlResult<Task> {
    let id_str: String = row.get("id")?;
    let subject_id_str: Option<String> = row.get("subject_id")?;
    let due_str: Option<String> = row.get("due")?;
    let created_str: String = row.get("created_at")?;
    let done: i32 = row.get("done")?;

    Ok(Task {
        id: Uuid::parse_str(&id_str).unwrap(),
        subject_id: subject_id_str.and_then(|s| Uuid::parse_str(&s).ok()),
        title: row.get("title")?,
        done: done != 0,
        due: due_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        created_at: DateTime::parse_from_rfc3339(&created_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

fn parse_note_row(row: &rusqlite::Row) -> SqlResult<Note> {
    let id_str: String = row.get("id")?;
    let subject_id_str: Option<String> = row.get("subject_id")?;
    let created_str: String = row.get("created_at")?;

    Ok(Note {
        id: Uuid::parse_str(&id_str).unwrap(),
        subject_id: subject_id_str.and_then(|s| Uuid::parse_str(&s).ok()),
        body: row.get("body")?,
        created_at: DateTime::parse_from_rfc3339(&created_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_subject_crud() {
        let db = Database::in_memory().unwrap();

        let subject = Subject::new("Mathematics", 25).with_days(vec![1, 3, 5]);
        db.insert_subject(&subject).unwrap();

        let loaded = db.get_subject(subject.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Mathematics");
        assert_eq!(loaded.scheduled_days, vec![1, 3, 5]);

        let mut edited = loaded;
        edited.name = "Maths".to_string();
        db.update_subject(&edited).unwrap();
        assert_eq!(db.get_subject(subject.id).unwrap().unwrap().name, "Maths");

        db.delete_subject(subject.id).unwrap();
        assert!(db.get_subject(subject.id).unwrap().is_none());
    }

    #[test]
    fn test_subjects_due_on() {
        let db = Database::in_memory().unwrap();

        db.insert_subject(&Subject::new("Every day", 25)).unwrap();
        db.insert_subject(&Subject::new("Mondays", 25).with_days(vec![1]))
            .unwrap();

        // Jan 15, 2024 is a Monday; Jan 16 a Tuesday.
        assert_eq!(db.subjects_due_on(date(2024, 1, 15)).unwrap().len(), 2);
        assert_eq!(db.subjects_due_on(date(2024, 1, 16)).unwrap().len(), 1);
    }

    #[test]
    fn test_record_session_updates_stats_and_awards() {
        let mut db = Database::in_memory().unwrap();
        let subject = Subject::new("Physics", 25);
        db.insert_subject(&subject).unwrap();

        let session = StudySession::completed(subject.id, date(2024, 1, 15), 90);
        let (stats, newly) = db.record_session(&session, 14.0).unwrap();

        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.total_hours, 1.5);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(newly.len(), 1);
        assert_eq!(newly[0].id, "first_session");

        // Reload from disk: the transaction persisted everything.
        let reloaded = db.load_stats().unwrap();
        assert_eq!(reloaded, stats);

        let earned = db.list_earned_achievements().unwrap();
        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].achievement_id, "first_session");
    }

    #[test]
    fn test_achievement_awarded_only_once() {
        let mut db = Database::in_memory().unwrap();
        let subject = Subject::new("Physics", 25);
        db.insert_subject(&subject).unwrap();

        let first = StudySession::completed(subject.id, date(2024, 1, 15), 30);
        let (_, newly) = db.record_session(&first, 14.0).unwrap();
        assert_eq!(newly.len(), 1);

        let second = StudySession::completed(subject.id, date(2024, 1, 15), 30);
        let (_, newly) = db.record_session(&second, 14.0).unwrap();
        assert!(newly.is_empty());

        assert_eq!(db.list_earned_achievements().unwrap().len(), 1);
    }

    #[test]
    fn test_record_session_rejects_zero_duration() {
        let mut db = Database::in_memory().unwrap();
        let subject = Subject::new("Physics", 25);
        db.insert_subject(&subject).unwrap();

        let session = StudySession::completed(subject.id, date(2024, 1, 15), 0);
        let result = db.record_session(&session, 14.0);
        assert!(matches!(result, Err(DbError::Stats(_))));

        // The rolled-back transaction left no session behind.
        assert!(db.sessions_on(date(2024, 1, 15)).unwrap().is_empty());
        assert_eq!(db.load_stats().unwrap(), StudyStats::default());
    }

    #[test]
    fn test_streak_persists_across_days() {
        let mut db = Database::in_memory().unwrap();
        let subject = Subject::new("History", 25);
        db.insert_subject(&subject).unwrap();

        for day in 15..=21 {
            let session = StudySession::completed(subject.id, date(2024, 1, day), 60);
            db.record_session(&session, 14.0).unwrap();
        }

        let stats = db.load_stats().unwrap();
        assert_eq!(stats.current_streak, 7);
        assert!(db
            .list_earned_achievements()
            .unwrap()
            .iter()
            .any(|e| e.achievement_id == "streak_7"));
    }

    #[test]
    fn test_subject_hours() {
        let mut db = Database::in_memory().unwrap();
        let subject = Subject::new("Chemistry", 25);
        db.insert_subject(&subject).unwrap();

        let session = StudySession::completed(subject.id, date(2024, 1, 15), 90);
        db.record_session(&session, 14.0).unwrap();

        assert_eq!(db.subject_hours(subject.id).unwrap(), 1.5);
    }

    #[test]
    fn test_task_crud() {
        let db = Database::in_memory().unwrap();

        let mut task = Task::new("Read chapter 4");
        db.insert_task(&task).unwrap();

        task.toggle();
        db.update_task(&task).unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].done);

        db.delete_task(task.id).unwrap();
        assert!(db.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_open_tasks_sort_first() {
        let db = Database::in_memory().unwrap();

        let mut done = Task::new("Done task");
        done.done = true;
        db.insert_task(&done).unwrap();
        db.insert_task(&Task::new("Open task")).unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks[0].title, "Open task");
        assert_eq!(tasks[1].title, "Done task");
    }

    #[test]
    fn test_note_crud() {
        let db = Database::in_memory().unwrap();

        let note = Note::new("Derivatives are rates of change");
        db.insert_note(&note).unwrap();

        let notes = db.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].body, "Derivatives are rates of change");

        db.delete_note(note.id).unwrap();
        assert!(db.list_notes().unwrap().is_empty());
    }
}
