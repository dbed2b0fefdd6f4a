//! Notification system for the GUI
//!
//! Notification entries feed both the transient toast and the history popup.

use std::time::Duration;

/// How long the toast stays on screen before auto-dismissing
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A notification entry with message and timestamp
#[derive(Clone)]
pub struct NotificationEntry {
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl NotificationEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: chrono::Local::now(),
        }
    }

    pub fn time_ago(&self) -> String {
        let now = chrono::Local::now();
        let duration = now.signed_duration_since(self.timestamp);
        if duration.num_seconds() < 60 {
            "just now".to_string()
        } else if duration.num_minutes() < 60 {
            format!("{}m ago", duration.num_minutes())
        } else if duration.num_hours() < 24 {
            format!("{}h ago", duration.num_hours())
        } else {
            self.timestamp.format("%m/%d %H:%M").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_keeps_message() {
        let entry = NotificationEntry::new("Expense added!");
        assert_eq!(entry.message, "Expense added!");
    }

    #[test]
    fn test_fresh_entry_reads_just_now() {
        let entry = NotificationEntry::new("x");
        assert_eq!(entry.time_ago(), "just now");
    }

    #[test]
    fn test_older_entry_reads_minutes() {
        let mut entry = NotificationEntry::new("x");
        entry.timestamp = chrono::Local::now() - chrono::Duration::minutes(5);
        assert_eq!(entry.time_ago(), "5m ago");
    }
}
