use chrono::{DateTime, Local, TimeDelta};
use std::collections::VecDeque;
use tracing::{info, warn};

const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub level: NotificationLevel,
    pub timestamp: DateTime<Local>,
}

/// In-app replacement for push notifications: a toast stack plus a short history.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCenter {
    active: Vec<Notification>,
    history: VecDeque<Notification>,
    ttl: TimeDelta,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            active: Vec::new(),
            history: VecDeque::new(),
            ttl: i64::try_from(ttl_secs)
                .ok()
                .and_then(TimeDelta::try_seconds)
                .unwrap_or(TimeDelta::MAX),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, title: &str, body: &str) {
        match level {
            NotificationLevel::Error => warn!(title, body, "notification"),
            _ => info!(title, body, "notification"),
        }
        let notification = Notification {
            title: title.to_string(),
            body: body.to_string(),
            level,
            timestamp: Local::now(),
        };
        self.active.push(notification.clone());
        self.history.push_back(notification);
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    pub fn success(&mut self, title: &str, body: &str) {
        self.notify(NotificationLevel::Success, title, body);
    }

    pub fn error(&mut self, title: &str, body: &str) {
        self.notify(NotificationLevel::Error, title, body);
    }

    pub fn info(&mut self, title: &str, body: &str) {
        self.notify(NotificationLevel::Info, title, body);
    }

    /// Toasts still on screen, oldest first.
    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Everything shown recently, newest first.
    #[must_use]
    pub fn history(&self) -> impl Iterator<Item = &Notification> {
        self.history.iter().rev()
    }

    #[must_use]
    pub fn count(&self, level: NotificationLevel) -> usize {
        self.history.iter().filter(|n| n.level == level).count()
    }

    pub fn expire(&mut self, now: DateTime<Local>) {
        let ttl = self.ttl;
        self.active.retain(|n| now - n.timestamp < ttl);
    }

    pub fn dismiss_all(&mut self) {
        self.active.clear();
    }
}
