//! Single-slot message area shared by every error and status the controller reports.

use std::fmt;

/// Red, as used for alert text
const FG_RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Problem the user should notice; announced to assistive technology
    Alert(String),
    /// Neutral progress text, e.g. while waiting for a location fix
    Status(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Alert(m) | Notice::Status(m) => m,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Notice::Alert(_))
    }

    /// ARIA role carried by the message region while this notice is shown.
    pub fn role(&self) -> Option<&'static str> {
        self.is_alert().then_some("alert")
    }

    /// ARIA live-region politeness while this notice is shown.
    pub fn aria_live(&self) -> Option<&'static str> {
        self.is_alert().then_some("polite")
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Alert(m) => write!(f, "{}{}! {}{}", FG_RED, BOLD, m, RESET),
            Notice::Status(m) => write!(f, "{}{}{}", DIM, m, RESET),
        }
    }
}

/// Holds at most one notice. Setting replaces, clearing removes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
}

impl NoticeSlot {
    pub fn set(&mut self, notice: Notice) {
        // empty text behaves like a clear so the region never announces nothing
        if notice.message().is_empty() {
            self.current = None;
        } else {
            self.current = Some(notice);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn message(&self) -> &str {
        self.current.as_ref().map_or("", Notice::message)
    }

    pub fn is_alert(&self) -> bool {
        self.current.as_ref().is_some_and(Notice::is_alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous() {
        let mut slot = NoticeSlot::default();
        slot.set(Notice::Alert("first".into()));
        slot.set(Notice::Alert("second".into()));
        assert_eq!(slot.message(), "second");
    }

    #[test]
    fn clear_removes_role() {
        let mut slot = NoticeSlot::default();
        slot.set(Notice::Alert("boom".into()));
        assert_eq!(slot.current().and_then(Notice::role), Some("alert"));
        slot.clear();
        assert_eq!(slot.current(), None);
        assert_eq!(slot.message(), "");
        assert!(!slot.is_alert());
    }

    #[test]
    fn status_is_not_announced() {
        let status = Notice::Status("Getting your location...".into());
        assert_eq!(status.role(), None);
        assert_eq!(status.aria_live(), None);
        let alert = Notice::Alert("nope".into());
        assert_eq!(alert.aria_live(), Some("polite"));
    }

    #[test]
    fn empty_message_clears() {
        let mut slot = NoticeSlot::default();
        slot.set(Notice::Alert("x".into()));
        slot.set(Notice::Alert(String::new()));
        assert!(slot.current().is_none());
    }

    #[test]
    fn alerts_render_in_red() {
        let rendered = Notice::Alert("bad".into()).to_string();
        assert!(rendered.starts_with(FG_RED));
        assert!(rendered.contains("! bad"));
    }
}
