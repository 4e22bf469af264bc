/// Notification banners shown above the workspace
use uuid::Uuid;

const MAX_VISIBLE: usize = 3;

/// Milliseconds before a banner dismisses itself; errors stay until closed
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, NotificationKind::Error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a banner, dropping the oldest once more than a few are visible
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let original_len = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < original_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notes = Notifications::new();
        let first = Notification::new(NotificationKind::Info, "Copied!");
        let second = Notification::new(NotificationKind::Error, "Failed to generate tool ideas.");
        let (first_id, second_id) = (first.id, second.id);
        notes.push(first);
        notes.push(second);
        let (first, second) = (first_id, second_id);

        assert_eq!(notes.iter().count(), 2);
        assert!(notes.dismiss(first));
        assert!(!notes.dismiss(first));
        assert_eq!(notes.iter().next().map(|n| n.id), Some(second));
        assert!(notes.dismiss(second));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut notes = Notifications::new();
        assert!(notes.is_empty());
        for i in 0..5 {
            notes.push(Notification::new(NotificationKind::Info, format!("note {}", i)));
        }

        let messages: Vec<&str> = notes.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["note 2", "note 3", "note 4"]);
    }

    #[test]
    fn test_errors_do_not_auto_dismiss() {
        assert!(NotificationKind::Success.auto_dismiss());
        assert!(!NotificationKind::Error.auto_dismiss());
    }
}
