//! Toast notification slot.
//!
//! Errors caught at a form boundary end up here; the toast component renders
//! the current notice and dismisses it after a delay.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Single-slot toast state. A newer notice replaces the older one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show `message` and return the id to dismiss it by.
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, kind, message: message.into() });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Success, message)
    }

    pub fn error(&mut self, err: &ClientError) -> u64 {
        self.show(NoticeKind::Error, err.user_message())
    }

    /// Dismiss notice `id`; a newer notice is left alone.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}
