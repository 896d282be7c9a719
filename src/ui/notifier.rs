//! Notification surface used by the clock service.

use crate::ui::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Fire-and-forget user feedback.
pub trait Notifier {
    fn notify(&mut self, level: Level, message: &str);
}

/// Prints toasts on the terminal through `ui::messages`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => messages::info(message),
            Level::Success => messages::success(message),
            Level::Warning => messages::warning(message),
            Level::Error => messages::error(message),
        }
    }
}

/// Keeps every notice in memory (tests, embedding in other front ends).
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub notices: Vec<(Level, String)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(Level, String)> {
        self.notices.last()
    }

    pub fn count(&self, level: Level) -> usize {
        self.notices.iter().filter(|(l, _)| *l == level).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        self.notices.push((level, message.to_string()));
    }
}
