//! UI rendering for study tracker.

use crate::achievements::CATALOG;
use crate::app::{App, EditField, MessageType, View};
use crate::config::WeekStart;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Draw the application.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer/status
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);

    // Draw popups
    if app.show_help {
        draw_help_popup(f);
    }

    if let Some(dialog) = &app.confirm_dialog {
        draw_confirm_dialog(f, dialog);
    }

    if app.editing {
        draw_edit_dialog(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let date_str = app.today.format("%A, %B %d, %Y").to_string();
    let title = format!(" {} - {} ", app.view_title(), date_str);

    // View tabs
    let tabs: Vec<Span> = vec![
        styled_tab("1:Today", app.view == View::Today),
        Span::raw(" "),
        styled_tab("2:Subjects", app.view == View::Subjects),
        Span::raw(" "),
        styled_tab("3:Tasks", app.view == View::Tasks),
        Span::raw(" "),
        styled_tab("4:Notes", app.view == View::Notes),
        Span::raw(" "),
        styled_tab("5:Stats", app.view == View::Stats),
        Span::raw(" "),
        styled_tab("6:Achievements", app.view == View::Achievements),
    ];

    let header = Paragraph::new(Line::from(tabs))
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}

fn styled_tab(label: &str, active: bool) -> Span {
    if active {
        Span::styled(
            format!("[{}]", label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
    }
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Today => draw_today_view(f, app, area),
        View::Subjects => draw_subjects_view(f, app, area),
        View::Tasks => draw_tasks_view(f, app, area),
        View::Notes => draw_notes_view(f, app, area),
        View::Stats => draw_stats_view(f, app, area),
        View::Achievements => draw_achievements_view(f, app, area),
    }
}

fn draw_today_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    draw_timer_panel(f, app, chunks[0]);

    if app.subjects.is_empty() {
        let msg = Paragraph::new("No subjects due today. Press 'a' to add a subject.")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(msg, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let studied = app.studied_today(subject.id);
            let checkbox = if studied { "[x]" } else { "[ ]" };

            let mut spans = vec![
                Span::styled(
                    checkbox,
                    Style::default().fg(if studied { Color::Green } else { Color::Gray }),
                ),
                Span::raw(" "),
            ];

            let name_style = if studied {
                Style::default().fg(Color::DarkGray)
            } else if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(&subject.name, name_style));

            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{} min]", subject.target_mins),
                Style::default().fg(Color::Cyan),
            ));

            let style = if i == app.selected_index {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let done = app
        .subjects
        .iter()
        .filter(|s| app.studied_today(s.id))
        .count();
    let title = format!(" Today's Subjects ({}/{} studied) ", done, app.subjects.len());

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, chunks[1]);
}

fn draw_timer_panel(f: &mut Frame, app: &App, area: Rect) {
    let Some(active) = &app.active else {
        let hint = Paragraph::new("No session running. Select a subject and press Enter to start.")
            .block(Block::default().borders(Borders::ALL).title(" Session "))
            .alignment(Alignment::Center);
        f.render_widget(hint, area);
        return;
    };

    let state = if active.timer.is_active() {
        ""
    } else {
        " (paused)"
    };
    let label = format!(
        "{} - {} left{}",
        active.subject.name,
        active.timer.format_remaining(),
        state
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Session "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(active.timer.progress())
        .label(label);

    f.render_widget(gauge, area);
}

fn draw_subjects_view(f: &mut Frame, app: &App, area: Rect) {
    if app.subjects.is_empty() {
        let msg = Paragraph::new("No subjects yet. Press 'a' to add one.")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(vec!["Subject", "Schedule", "Session", "Total Hours"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let hours = app.hours_cache.get(&subject.id).copied().unwrap_or(0.0);
            let row = Row::new(vec![
                subject.name.clone(),
                subject.schedule_display(),
                format!("{} min", subject.target_mins),
                format!("{:.1}h", hours),
            ]);
            if i == app.selected_index {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Subjects "));

    f.render_widget(table, area);
}

fn draw_tasks_view(f: &mut Frame, app: &App, area: Rect) {
    if app.tasks.is_empty() {
        let msg = Paragraph::new("No tasks. Press 'a' to add one.")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let checkbox = if task.done { "[x]" } else { "[ ]" };

            let mut spans = vec![
                Span::styled(
                    checkbox,
                    Style::default().fg(if task.done { Color::Green } else { Color::Gray }),
                ),
                Span::raw(" "),
            ];

            let title_style = if task.done {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if task.is_overdue(app.today) {
                Style::default().fg(Color::Red)
            } else if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(&task.title, title_style));

            if let Some(due) = task.due {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!("(due {})", due),
                    Style::default().fg(Color::Cyan),
                ));
            }

            let style = if i == app.selected_index {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let open = app.tasks.iter().filter(|t| !t.done).count();
    let title = format!(" Tasks ({} open) ", open);

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

fn draw_notes_view(f: &mut Frame, app: &App, area: Rect) {
    if app.notes.is_empty() {
        let msg = Paragraph::new("No notes. Press 'a' to add one.")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let date = note
                .created_at
                .format(&app.config.display.date_format)
                .to_string();
            let spans = vec![
                Span::styled(date, Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(
                    &note.body,
                    if i == app.selected_index {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
            ];

            let style = if i == app.selected_index {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Notes "));

    f.render_widget(list, area);
}

fn draw_stats_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let stats = &app.stats;
    let last = stats
        .last_study_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "never".to_string());

    let overview = format!(
        "Total Hours: {:.1}\nTotal Sessions: {}\nCurrent Streak: {} days\nLongest Streak: {} days\nWeekly Target: {:.0}h\nLast Studied: {}",
        stats.total_hours,
        stats.total_sessions,
        stats.current_streak,
        stats.longest_streak,
        app.config.goals.weekly_hours_target,
        last,
    );

    let overview_widget = Paragraph::new(overview)
        .block(Block::default().borders(Borders::ALL).title(" Overview "))
        .wrap(Wrap { trim: true });

    f.render_widget(overview_widget, chunks[0]);

    // Weekday bars scaled against the busiest day.
    let max = stats
        .weekly_hours
        .iter()
        .fold(0.0_f64, |acc, h| acc.max(*h));

    // Rows follow the configured first day of week; slots stay 0=Sun.
    let order: [usize; 7] = match app.config.display.week_start {
        WeekStart::Sunday => [0, 1, 2, 3, 4, 5, 6],
        WeekStart::Monday => [1, 2, 3, 4, 5, 6, 0],
    };

    let lines: Vec<Line> = order
        .iter()
        .map(|&i| {
            let label = WEEKDAY_LABELS[i];
            let hours = stats.weekly_hours[i];
            let width = if max > 0.0 {
                ((hours / max) * 30.0).round() as usize
            } else {
                0
            };
            Line::from(vec![
                Span::raw(format!("{} ", label)),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {:.1}h", hours)),
            ])
        })
        .collect();

    let bars = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Hours by Weekday "));

    f.render_widget(bars, chunks[1]);

    // Recent sessions, with subject names looked up from the loaded list.
    let items: Vec<ListItem> = app
        .recent_sessions
        .iter()
        .map(|session| {
            let name = app
                .subjects
                .iter()
                .find(|s| s.id == session.subject_id)
                .map(|s| s.name.as_str())
                .unwrap_or("(deleted)");

            ListItem::new(Line::from(vec![
                Span::styled(session.date.to_string(), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::raw(name.to_string()),
                Span::styled(
                    format!("  {:.1}h", session.hours()),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Recent Sessions "));

    f.render_widget(list, chunks[2]);
}

fn draw_achievements_view(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = CATALOG
        .iter()
        .map(|achievement| {
            let earned = app
                .earned
                .iter()
                .find(|e| e.achievement_id == achievement.id);

            let spans = if let Some(earned) = earned {
                vec![
                    Span::raw(format!("{} ", achievement.icon)),
                    Span::styled(
                        achievement.title,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::raw(achievement.description),
                    Span::styled(
                        format!("  (earned {})", earned.earned_at.format("%Y-%m-%d")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]
            } else {
                vec![
                    Span::raw("🔒 "),
                    Span::styled(achievement.title, Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!(" - {}", achievement.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]
            };

            ListItem::new(Line::from(spans))
        })
        .collect();

    let earned_count = app.earned.len();
    let title = format!(" Achievements ({}/{}) ", earned_count, CATALOG.len());

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let (msg, style) = if let Some((ref message, msg_type)) = app.message {
        let color = match msg_type {
            MessageType::Info => Color::Blue,
            MessageType::Success => Color::Green,
            MessageType::Warning => Color::Yellow,
            MessageType::Error => Color::Red,
        };
        (message.clone(), Style::default().fg(color))
    } else {
        let help = match app.view {
            View::Today => {
                "j/k:Navigate  Enter:Start session  p:Pause  f:Finish  x:Cancel  a:Add  ?:Help  q:Quit"
            }
            View::Subjects => "j/k:Navigate  a:Add  e:Edit  d:Delete  ?:Help  q:Quit",
            View::Tasks => "j/k:Navigate  Space:Toggle  a:Add  e:Edit  d:Delete  ?:Help  q:Quit",
            View::Notes => "j/k:Navigate  a:Add  d:Delete  ?:Help  q:Quit",
            View::Stats | View::Achievements => "1-6:Views  ?:Help  q:Quit",
        };
        (help.to_string(), Style::default().fg(Color::DarkGray))
    };

    let footer = Paragraph::new(msg)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let help_text = r#"
Study Tracker Keybindings

Navigation:
  j/k, Up/Down    Move selection
  g/G             Jump to first/last

Views:
  1               Today
  2               Subjects
  3               Tasks
  4               Notes
  5               Statistics
  6               Achievements

Session:
  Enter, Space    Start session for subject
  p               Pause/resume session
  f               Finish early (records time spent)
  x               Cancel without recording

Items:
  a               Add subject/task/note
  e               Edit selected
  d               Delete selected
  Space           Toggle task done

General:
  ?               Show this help
  q               Quit

Press any key to close
"#;

    let popup = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(popup, area);
}

fn draw_confirm_dialog(f: &mut Frame, dialog: &crate::app::ConfirmDialog) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let text = Paragraph::new(dialog.message.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", dialog.title)),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    f.render_widget(text, area);
}

fn draw_edit_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let title = match app.editing_field {
        EditField::SubjectName => "Enter subject name",
        EditField::TaskTitle => "Enter task title",
        EditField::NoteBody => "Enter note",
        EditField::None => "",
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .style(Style::default().fg(Color::Yellow));

    f.render_widget(input, area);

    // Show cursor
    f.set_cursor_position((
        area.x + 1 + app.input_buffer.len() as u16,
        area.y + 1,
    ));
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
