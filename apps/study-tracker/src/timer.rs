//! Reading-session countdown timer.

use chrono::{DateTime, Duration, Utc};

/// Countdown timer for a single reading session.
#[derive(Debug, Clone)]
pub struct StudyTimer {
    /// Target session length in minutes.
    target_mins: u32,
    /// When the countdown (re)started (None if paused).
    started_at: Option<DateTime<Utc>>,
    /// Time remaining when paused.
    paused_remaining: Option<Duration>,
    /// Whether the timer is running.
    active: bool,
}

impl StudyTimer {
    /// Create a stopped timer for a target length.
    pub fn new(target_mins: u32) -> Self {
        Self {
            target_mins,
            started_at: None,
            paused_remaining: None,
            active: false,
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.started_at = Some(Utc::now());
        }
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        if self.active {
            self.paused_remaining = Some(self.remaining());
            self.started_at = None;
            self.active = false;
        }
    }

    /// Toggle between running and paused.
    pub fn toggle(&mut self) {
        if self.active {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Target session length.
    pub fn target_duration(&self) -> Duration {
        Duration::minutes(self.target_mins as i64)
    }

    /// Target session length in minutes.
    pub fn target_mins(&self) -> u32 {
        self.target_mins
    }

    /// Time left on the countdown.
    pub fn remaining(&self) -> Duration {
        if let Some(remaining) = self.paused_remaining {
            return remaining;
        }

        let Some(started) = self.started_at else {
            return self.target_duration();
        };

        let elapsed = Utc::now().signed_duration_since(started);
        let remaining = self.target_duration() - elapsed;

        if remaining < Duration::zero() {
            Duration::zero()
        } else {
            remaining
        }
    }

    /// Time spent so far.
    pub fn elapsed(&self) -> Duration {
        self.target_duration() - self.remaining()
    }

    /// Whole minutes spent so far, for recording a session cut short.
    pub fn elapsed_mins(&self) -> u32 {
        self.elapsed().num_minutes().max(0) as u32
    }

    /// Progress from 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        let total = self.target_duration().num_seconds() as f64;
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = self.elapsed().num_seconds() as f64;
        (elapsed / total).min(1.0)
    }

    /// Check if the countdown reached zero.
    pub fn is_complete(&self) -> bool {
        self.remaining() <= Duration::zero()
    }

    /// Check if running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tick the timer (call each frame). Returns true once the countdown
    /// finishes while running.
    pub fn tick(&mut self) -> bool {
        if self.active && self.is_complete() {
            self.active = false;
            self.paused_remaining = Some(Duration::zero());
            self.started_at = None;
            return true;
        }
        false
    }

    /// Format remaining time as MM:SS.
    pub fn format_remaining(&self) -> String {
        let remaining = self.remaining();
        let mins = remaining.num_minutes();
        let secs = remaining.num_seconds() % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_creation() {
        let timer = StudyTimer::new(25);
        assert!(!timer.is_active());
        assert!(!timer.is_complete());
        assert_eq!(timer.remaining(), Duration::minutes(25));
    }

    #[test]
    fn test_timer_toggle() {
        let mut timer = StudyTimer::new(25);

        timer.toggle();
        assert!(timer.is_active());

        timer.toggle();
        assert!(!timer.is_active());
    }

    #[test]
    fn test_paused_timer_holds_remaining() {
        let mut timer = StudyTimer::new(25);
        timer.start();
        timer.pause();

        let held = timer.remaining();
        assert!(held <= Duration::minutes(25));
        assert_eq!(timer.remaining(), held);
    }

    #[test]
    fn test_zero_target_completes_immediately() {
        let mut timer = StudyTimer::new(0);
        timer.start();
        assert!(timer.tick());
        assert!(!timer.is_active());
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_format_remaining() {
        let timer = StudyTimer::new(25);
        assert_eq!(timer.format_remaining(), "25:00");
    }
}
