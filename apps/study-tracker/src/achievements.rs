//! Achievement catalog and evaluator.

use crate::models::StudyStats;

/// A one-time-unlockable milestone defined over the aggregate stats.
pub struct Achievement {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Display description.
    pub description: &'static str,
    /// Display icon.
    pub icon: &'static str,
    condition: fn(&StudyStats, f64) -> bool,
}

impl Achievement {
    /// Check the unlock condition against stats and the weekly-hours target.
    pub fn is_unlocked(&self, stats: &StudyStats, weekly_hours_target: f64) -> bool {
        (self.condition)(stats, weekly_hours_target)
    }
}

/// The fixed catalog, in display/evaluation order.
///
/// The last three entries need per-session start times, which the aggregate
/// does not carry; their conditions are fixed false and they stay locked.
pub static CATALOG: [Achievement; 8] = [
    Achievement {
        id: "first_session",
        title: "First Steps",
        description: "Complete your first study session",
        icon: "🎯",
        condition: |stats, _| stats.total_sessions >= 1,
    },
    Achievement {
        id: "streak_7",
        title: "Week Warrior",
        description: "Study 7 days in a row",
        icon: "🔥",
        condition: |stats, _| stats.current_streak >= 7,
    },
    Achievement {
        id: "consistent_reader",
        title: "Consistent Reader",
        description: "Complete 20 study sessions",
        icon: "📚",
        condition: |stats, _| stats.total_sessions >= 20,
    },
    Achievement {
        id: "goal_crusher",
        title: "Goal Crusher",
        description: "Study 150% of your weekly hours target",
        icon: "💪",
        condition: |stats, target| stats.weekly_total() >= target * 1.5,
    },
    Achievement {
        id: "dedication",
        title: "Dedication",
        description: "Study 30 days in a row",
        icon: "🏆",
        condition: |stats, _| stats.current_streak >= 30,
    },
    Achievement {
        id: "early_bird",
        title: "Early Bird",
        description: "Finish a session before 8am",
        icon: "🌅",
        condition: |_, _| false,
    },
    Achievement {
        id: "night_owl",
        title: "Night Owl",
        description: "Finish a session after 10pm",
        icon: "🦉",
        condition: |_, _| false,
    },
    Achievement {
        id: "deep_focus",
        title: "Deep Focus",
        description: "Complete a two-hour session without a break",
        icon: "🧠",
        condition: |_, _| false,
    },
];

/// Evaluate the catalog against the stats and return newly-earned entries.
///
/// Pure; the caller persists the new records and raises the notifications.
/// Output preserves catalog order.
pub fn evaluate(
    stats: &StudyStats,
    weekly_hours_target: f64,
    existing_ids: &[String],
) -> Vec<&'static Achievement> {
    CATALOG
        .iter()
        .filter(|a| a.is_unlocked(stats, weekly_hours_target))
        .filter(|a| !existing_ids.iter().any(|e| e == a.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(earned: &[&'static Achievement]) -> Vec<&'static str> {
        earned.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_session_milestones() {
        let stats = StudyStats {
            total_sessions: 20,
            current_streak: 3,
            ..StudyStats::default()
        };

        let earned = evaluate(&stats, 14.0, &[]);
        let earned = ids(&earned);

        assert!(earned.contains(&"first_session"));
        assert!(earned.contains(&"consistent_reader"));
        assert!(!earned.contains(&"streak_7"));
    }

    #[test]
    fn test_goal_crusher_boundary_is_inclusive() {
        let mut stats = StudyStats::default();
        stats.weekly_hours[0] = 21.0; // exactly 14 * 1.5

        let earned = evaluate(&stats, 14.0, &[]);
        assert!(ids(&earned).contains(&"goal_crusher"));

        stats.weekly_hours[0] = 20.9;
        let earned = evaluate(&stats, 14.0, &[]);
        assert!(!ids(&earned).contains(&"goal_crusher"));
    }

    #[test]
    fn test_streak_achievements() {
        let stats = StudyStats {
            total_sessions: 30,
            current_streak: 30,
            longest_streak: 30,
            ..StudyStats::default()
        };

        let earned = evaluate(&stats, 14.0, &[]);
        let earned = ids(&earned);
        assert!(earned.contains(&"streak_7"));
        assert!(earned.contains(&"dedication"));
    }

    #[test]
    fn test_already_earned_never_returned_again() {
        let stats = StudyStats {
            total_sessions: 5,
            ..StudyStats::default()
        };

        let first_pass = evaluate(&stats, 14.0, &[]);
        assert_eq!(ids(&first_pass), vec!["first_session"]);

        let existing: Vec<String> = first_pass.iter().map(|a| a.id.to_string()).collect();
        let second_pass = evaluate(&stats, 14.0, &existing);
        assert!(second_pass.is_empty());
    }

    #[test]
    fn test_unreachable_trio_never_fires() {
        // Maxed-out stats still cannot unlock the entries that need
        // per-session start times.
        let stats = StudyStats {
            total_hours: 10_000.0,
            total_sessions: u32::MAX,
            current_streak: u32::MAX,
            longest_streak: u32::MAX,
            weekly_hours: [f64::MAX; 7],
            last_study_date: None,
        };

        let earned = evaluate(&stats, 0.0, &[]);
        let earned = ids(&earned);
        assert!(!earned.contains(&"early_bird"));
        assert!(!earned.contains(&"night_owl"));
        assert!(!earned.contains(&"deep_focus"));
    }

    #[test]
    fn test_output_preserves_catalog_order() {
        let stats = StudyStats {
            total_sessions: 25,
            current_streak: 10,
            ..StudyStats::default()
        };

        let earned = evaluate(&stats, 14.0, &[]);
        assert_eq!(ids(&earned), vec!["first_session", "streak_7", "consistent_reader"]);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(!CATALOG[i + 1..].iter().any(|b| b.id == a.id), "{}", a.id);
        }
    }
}
