//! System notifications for focus session events

use chrono::{DateTime, Local};
use notify_rust::Notification;
use tracing::warn;

pub fn completion_body(finished_at: DateTime<Local>) -> String {
    format!("Focus session complete at {}", finished_at.format("%H:%M"))
}

/// Send a notification when the countdown reaches zero
pub fn notify_session_complete(finished_at: DateTime<Local>) {
    let result = Notification::new()
        .summary("ZenFocus")
        .body(&completion_body(finished_at))
        .show();
    if let Err(err) = result {
        warn!(%err, "could not show completion notification");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_mention_local_finish_time() {
        let finished_at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap();

        assert_eq!(
            completion_body(finished_at),
            "Focus session complete at 14:05"
        );
    }
}
