//! Application state and logic.

use crate::config::Config;
use crate::db::{Database, DbResult};
use crate::models::{
    EarnedAchievement, Note, NoteId, StudySession, StudyStats, Subject, SubjectId, Task, TaskId,
};
use crate::timer::StudyTimer;
use chrono::{NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;

/// A reading session in progress.
pub struct ActiveSession {
    /// Subject being studied.
    pub subject: Subject,
    /// Countdown timer.
    pub timer: StudyTimer,
}

/// Application state.
pub struct App {
    /// Database connection.
    pub db: Database,
    /// Configuration.
    pub config: Config,
    /// Current view.
    pub view: View,
    /// Today's date.
    pub today: NaiveDate,
    /// Subjects for current view (due today, or all).
    pub subjects: Vec<Subject>,
    /// Sessions completed today.
    pub sessions_today: Vec<StudySession>,
    /// Most recent completed sessions, for the stats view.
    pub recent_sessions: Vec<StudySession>,
    /// All tasks.
    pub tasks: Vec<Task>,
    /// All notes.
    pub notes: Vec<Note>,
    /// Aggregate study statistics.
    pub stats: StudyStats,
    /// Total hours per subject.
    pub hours_cache: HashMap<SubjectId, f64>,
    /// Earned achievements.
    pub earned: Vec<EarnedAchievement>,
    /// Running session, if any.
    pub active: Option<ActiveSession>,
    /// Selected item index.
    pub selected_index: usize,
    /// Whether in editing mode.
    pub editing: bool,
    /// Whether editing an existing item rather than adding.
    pub editing_existing: bool,
    /// Input buffer for editing.
    pub input_buffer: String,
    /// Editing field.
    pub editing_field: EditField,
    /// Message to display.
    pub message: Option<(String, MessageType)>,
    /// Show help popup.
    pub show_help: bool,
    /// Confirmation dialog.
    pub confirm_dialog: Option<ConfirmDialog>,
}

/// Current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Subjects due today plus the session timer.
    Today,
    /// All subjects.
    Subjects,
    /// Task list.
    Tasks,
    /// Note list.
    Notes,
    /// Aggregate statistics.
    Stats,
    /// Achievement board.
    Achievements,
}

/// Editing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    None,
    SubjectName,
    TaskTitle,
    NoteBody,
}

/// Message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

/// Confirmation dialog.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

/// Confirm action type.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteSubject(SubjectId),
    DeleteTask(TaskId),
    DeleteNote(NoteId),
}

impl App {
    /// Create new application.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load();
        // Write the defaults on first run so the file is there to edit.
        if Config::config_path().is_some_and(|p| !p.exists()) {
            let _ = config.save();
        }

        let db_path = Config::db_path().unwrap_or_else(|| "study.db".into());
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::open(&db_path)?;

        let mut app = Self {
            db,
            config,
            view: View::Today,
            today: Utc::now().date_naive(),
            subjects: Vec::new(),
            sessions_today: Vec::new(),
            recent_sessions: Vec::new(),
            tasks: Vec::new(),
            notes: Vec::new(),
            stats: StudyStats::default(),
            hours_cache: HashMap::new(),
            earned: Vec::new(),
            active: None,
            selected_index: 0,
            editing: false,
            editing_existing: false,
            input_buffer: String::new(),
            editing_field: EditField::None,
            message: None,
            show_help: false,
            confirm_dialog: None,
        };

        app.refresh()?;
        Ok(app)
    }

    /// Refresh data from database.
    pub fn refresh(&mut self) -> DbResult<()> {
        self.today = Utc::now().date_naive();

        self.subjects = match self.view {
            View::Today => self.db.subjects_due_on(self.today)?,
            _ => self.db.list_subjects(false)?,
        };
        self.sessions_today = self.db.sessions_on(self.today)?;
        self.recent_sessions = self.db.recent_sessions(10)?;
        self.tasks = self.db.list_tasks()?;
        self.notes = self.db.list_notes()?;
        self.stats = self.db.load_stats()?;
        self.earned = self.db.list_earned_achievements()?;

        self.hours_cache.clear();
        for subject in &self.subjects {
            if let Ok(hours) = self.db.subject_hours(subject.id) {
                self.hours_cache.insert(subject.id, hours);
            }
        }

        let len = self.current_list_len();
        if self.selected_index >= len && len > 0 {
            self.selected_index = len - 1;
        }

        Ok(())
    }

    /// Length of the list the current view navigates.
    fn current_list_len(&self) -> usize {
        match self.view {
            View::Today | View::Subjects => self.subjects.len(),
            View::Tasks => self.tasks.len(),
            View::Notes => self.notes.len(),
            View::Stats | View::Achievements => 0,
        }
    }

    /// Check if in editing mode.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Get selected subject.
    pub fn selected_subject(&self) -> Option<&Subject> {
        self.subjects.get(self.selected_index)
    }

    /// Check if a subject already has a completed session today.
    pub fn studied_today(&self, id: SubjectId) -> bool {
        self.sessions_today
            .iter()
            .any(|s| s.subject_id == id && s.completed)
    }

    /// Advance the timer; called each frame. Records the session when the
    /// countdown finishes.
    pub fn tick(&mut self) {
        let finished = self
            .active
            .as_mut()
            .map_or(false, |active| active.timer.tick());
        if finished {
            if let Some(active) = self.active.take() {
                self.record_completed(&active.subject, active.timer.target_mins());
            }
        }
    }

    /// Handle key input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle confirmation dialog
        if let Some(dialog) = &self.confirm_dialog.clone() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.execute_confirm(dialog.action.clone());
                    self.confirm_dialog = None;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_dialog = None;
                }
                _ => {}
            }
            return;
        }

        // Handle help popup
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Clear message on any key
        self.message = None;

        // Handle editing mode
        if self.editing {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') if key.modifiers.is_empty() => self.selected_index = 0,
            KeyCode::Char('G') => {
                let len = self.current_list_len();
                if len > 0 {
                    self.selected_index = len - 1;
                }
            }

            // Views
            KeyCode::Char('1') => self.switch_view(View::Today),
            KeyCode::Char('2') => self.switch_view(View::Subjects),
            KeyCode::Char('3') => self.switch_view(View::Tasks),
            KeyCode::Char('4') => self.switch_view(View::Notes),
            KeyCode::Char('5') => self.switch_view(View::Stats),
            KeyCode::Char('6') => self.switch_view(View::Achievements),

            // Primary action
            KeyCode::Char(' ') | KeyCode::Enter => self.primary_action(),

            // Timer control
            KeyCode::Char('p') => self.pause_timer(),
            KeyCode::Char('f') => self.finish_session_early(),
            KeyCode::Char('x') => self.cancel_session(),

            // Item actions
            KeyCode::Char('a') => self.start_add(),
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('d') => self.confirm_delete(),

            // Help
            KeyCode::Char('?') => self.show_help = true,

            _ => {}
        }
    }

    /// Handle editing keys.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                self.input_buffer.clear();
                self.editing_field = EditField::None;
            }
            KeyCode::Enter => self.finish_editing(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Switch view and refresh.
    fn switch_view(&mut self, view: View) {
        self.view = view;
        self.selected_index = 0;
        let _ = self.refresh();
    }

    /// Move selection by delta.
    fn move_selection(&mut self, delta: i32) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let new_index = self.selected_index as i32 + delta;
        self.selected_index = new_index.clamp(0, len as i32 - 1) as usize;
    }

    /// Space/Enter: start a session in Today view, toggle a task in Tasks.
    fn primary_action(&mut self) {
        match self.view {
            View::Today => self.start_session(),
            View::Tasks => self.toggle_task(),
            _ => {}
        }
    }

    /// Start a reading session for the selected subject.
    fn start_session(&mut self) {
        if self.active.is_some() {
            self.message = Some((
                "A session is already running. p:pause f:finish x:cancel".to_string(),
                MessageType::Warning,
            ));
            return;
        }

        let Some(subject) = self.selected_subject().cloned() else {
            return;
        };

        let target = if subject.target_mins > 0 {
            subject.target_mins
        } else {
            self.config.timer.default_session_mins
        };

        let mut timer = StudyTimer::new(target);
        timer.start();
        self.message = Some((
            format!("Studying {} for {} min", subject.name, target),
            MessageType::Info,
        ));
        self.active = Some(ActiveSession { subject, timer });
    }

    /// Pause or resume the running session.
    fn pause_timer(&mut self) {
        if let Some(active) = &mut self.active {
            active.timer.toggle();
            let state = if active.timer.is_active() {
                "resumed"
            } else {
                "paused"
            };
            self.message = Some((format!("Session {}", state), MessageType::Info));
        }
    }

    /// Record the running session with the time spent so far.
    fn finish_session_early(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let mins = active.timer.elapsed_mins();
        if mins == 0 {
            self.message = Some((
                "Less than a minute in; nothing to record yet".to_string(),
                MessageType::Warning,
            ));
            self.active = Some(active);
            return;
        }

        self.record_completed(&active.subject, mins);
    }

    /// Abandon the running session without recording it.
    fn cancel_session(&mut self) {
        if self.active.take().is_some() {
            self.message = Some(("Session cancelled".to_string(), MessageType::Info));
        }
    }

    /// Persist a completed session and surface any achievement unlocks.
    fn record_completed(&mut self, subject: &Subject, duration_mins: u32) {
        let session = StudySession::completed(subject.id, self.today, duration_mins);

        match self
            .db
            .record_session(&session, self.config.goals.weekly_hours_target)
        {
            Ok((stats, newly)) => {
                let text = if newly.is_empty() {
                    format!(
                        "{} +{} min (streak: {} days)",
                        subject.name, duration_mins, stats.current_streak
                    )
                } else {
                    let titles: Vec<&str> = newly.iter().map(|a| a.title).collect();
                    format!("Achievement unlocked: {}", titles.join(", "))
                };
                self.message = Some((text, MessageType::Success));
                let _ = self.refresh();
            }
            Err(e) => {
                self.message = Some((format!("Failed to record session: {}", e), MessageType::Error));
            }
        }
    }

    /// Toggle the selected task.
    fn toggle_task(&mut self) {
        let Some(task) = self.tasks.get_mut(self.selected_index) else {
            return;
        };
        task.toggle();
        let _ = self.db.update_task(task);
        let _ = self.refresh();
    }

    /// Start adding an item for the current view.
    fn start_add(&mut self) {
        let field = match self.view {
            View::Today | View::Subjects => EditField::SubjectName,
            View::Tasks => EditField::TaskTitle,
            View::Notes => EditField::NoteBody,
            _ => return,
        };
        self.editing = true;
        self.editing_existing = false;
        self.editing_field = field;
        self.input_buffer.clear();
    }

    /// Start editing the selected item.
    fn start_edit(&mut self) {
        match self.view {
            View::Today | View::Subjects => {
                if let Some(subject) = self.selected_subject() {
                    self.input_buffer = subject.name.clone();
                    self.editing_field = EditField::SubjectName;
                } else {
                    return;
                }
            }
            View::Tasks => {
                if let Some(task) = self.tasks.get(self.selected_index) {
                    self.input_buffer = task.title.clone();
                    self.editing_field = EditField::TaskTitle;
                } else {
                    return;
                }
            }
            _ => return,
        }
        self.editing = true;
        self.editing_existing = true;
    }

    /// Confirm delete for the selected item.
    fn confirm_delete(&mut self) {
        let dialog = match self.view {
            View::Today | View::Subjects => self.selected_subject().map(|s| ConfirmDialog {
                title: "Delete Subject".to_string(),
                message: format!(
                    "Delete '{}' and its session history? This cannot be undone. (y/n)",
                    s.name
                ),
                action: ConfirmAction::DeleteSubject(s.id),
            }),
            View::Tasks => self.tasks.get(self.selected_index).map(|t| ConfirmDialog {
                title: "Delete Task".to_string(),
                message: format!("Delete '{}'? (y/n)", t.title),
                action: ConfirmAction::DeleteTask(t.id),
            }),
            View::Notes => self.notes.get(self.selected_index).map(|n| ConfirmDialog {
                title: "Delete Note".to_string(),
                message: "Delete this note? (y/n)".to_string(),
                action: ConfirmAction::DeleteNote(n.id),
            }),
            _ => None,
        };
        self.confirm_dialog = dialog;
    }

    /// Execute confirmed action.
    fn execute_confirm(&mut self, action: ConfirmAction) {
        let result = match action {
            ConfirmAction::DeleteSubject(id) => self.db.delete_subject(id).map(|_| "Subject deleted"),
            ConfirmAction::DeleteTask(id) => self.db.delete_task(id).map(|_| "Task deleted"),
            ConfirmAction::DeleteNote(id) => self.db.delete_note(id).map(|_| "Note deleted"),
        };

        if let Ok(msg) = result {
            self.message = Some((msg.to_string(), MessageType::Success));
            let _ = self.refresh();
        }
    }

    /// Finish editing and save.
    fn finish_editing(&mut self) {
        if !self.input_buffer.is_empty() {
            match self.editing_field {
                EditField::SubjectName => {
                    if self.editing_existing {
                        if let Some(subject) = self.subjects.get_mut(self.selected_index) {
                            subject.name = self.input_buffer.clone();
                            let _ = self.db.update_subject(subject);
                        }
                    } else {
                        let subject = Subject::new(
                            &self.input_buffer,
                            self.config.timer.default_session_mins,
                        );
                        if self.db.insert_subject(&subject).is_ok() {
                            self.message =
                                Some(("Subject created".to_string(), MessageType::Success));
                        }
                    }
                }
                EditField::TaskTitle => {
                    if self.editing_existing {
                        if let Some(task) = self.tasks.get_mut(self.selected_index) {
                            task.title = self.input_buffer.clone();
                            let _ = self.db.update_task(task);
                        }
                    } else {
                        let task = Task::new(&self.input_buffer);
                        if self.db.insert_task(&task).is_ok() {
                            self.message = Some(("Task created".to_string(), MessageType::Success));
                        }
                    }
                }
                EditField::NoteBody => {
                    let note = Note::new(&self.input_buffer);
                    if self.db.insert_note(&note).is_ok() {
                        self.message = Some(("Note saved".to_string(), MessageType::Success));
                    }
                }
                EditField::None => {}
            }
            let _ = self.refresh();
        }

        self.editing = false;
        self.editing_existing = false;
        self.input_buffer.clear();
        self.editing_field = EditField::None;
    }

    /// Get view title.
    pub fn view_title(&self) -> &str {
        match self.view {
            View::Today => "Today",
            View::Subjects => "Subjects",
            View::Tasks => "Tasks",
            View::Notes => "Notes",
            View::Stats => "Statistics",
            View::Achievements => "Achievements",
        }
    }
}
