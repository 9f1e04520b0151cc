//! Status line
//!
//! One line of transient feedback shared by the admin operations. A single
//! manager owns a single hide deadline: posting a message replaces text,
//! level and deadline together, so a deadline scheduled for an old message
//! can never hide a newer one.

use std::time::{Duration, Instant};

/// How long a message stays visible.
pub const STATUS_VISIBLE_FOR: Duration = Duration::from_secs(3);

/// Message severity, which also picks the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Rendered green.
    Success,
    /// Rendered red.
    Error,
}

#[derive(Debug, Clone)]
struct Message {
    text: String,
    level: StatusLevel,
    hide_at: Instant,
}

/// The shared status line.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: Option<Message>,
}

impl StatusLine {
    /// Show a message until `now + STATUS_VISIBLE_FOR`.
    pub fn post(&mut self, level: StatusLevel, text: impl Into<String>, now: Instant) {
        self.current = Some(Message {
            text: text.into(),
            level,
            hide_at: now + STATUS_VISIBLE_FOR,
        });
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.post(StatusLevel::Success, text, now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.post(StatusLevel::Error, text, now);
    }

    /// Hide the message once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|m| now >= m.hide_at) {
            self.current = None;
        }
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<(&str, StatusLevel)> {
        self.current
            .as_ref()
            .map(|message| (message.text.as_str(), message.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_hides_after_the_interval() {
        let t0 = Instant::now();
        let mut line = StatusLine::default();
        line.success("添加成功", t0);

        line.tick(t0 + Duration::from_millis(2999));
        assert_eq!(line.current(), Some(("添加成功", StatusLevel::Success)));

        line.tick(t0 + Duration::from_secs(3));
        assert_eq!(line.current(), None);
    }

    #[test]
    fn newer_message_outlives_the_older_deadline() {
        let t0 = Instant::now();
        let mut line = StatusLine::default();
        line.error("删除失败：订单不存在", t0);
        line.success("删除成功", t0 + Duration::from_secs(2));

        // The first message's deadline passing must not hide the second.
        line.tick(t0 + Duration::from_millis(3500));
        assert_eq!(line.current(), Some(("删除成功", StatusLevel::Success)));

        line.tick(t0 + Duration::from_secs(5));
        assert_eq!(line.current(), None);
    }
}
