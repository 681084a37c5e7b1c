use leptos::*;
use uuid::Uuid;

/// Older notifications are dropped once this many are on screen.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A dismissible message shown by the toaster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Handle to the app-wide notification list, provided through context.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    entries: RwSignal<Vec<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
        }
    }

    /// The notifier provided by the app shell.
    pub fn from_context() -> Self {
        expect_context::<Notifier>()
    }

    pub fn success(&self, title: &str, message: &str) -> String {
        self.push(NotificationKind::Success, title, message)
    }

    pub fn error(&self, title: &str, message: &str) -> String {
        self.push(NotificationKind::Error, title, message)
    }

    pub fn dismiss(&self, id: &str) {
        self.entries.update(|entries| entries.retain(|n| n.id != id));
    }

    pub fn entries(&self) -> Signal<Vec<Notification>> {
        self.entries.into()
    }

    fn push(&self, kind: NotificationKind, title: &str, message: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.update(|entries| {
            entries.push(Notification {
                id: id.clone(),
                kind,
                title: title.to_string(),
                message: message.to_string(),
            });
            let overflow = entries.len().saturating_sub(MAX_VISIBLE);
            entries.drain(..overflow);
        });
        id
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let runtime = create_runtime();

        let notifier = Notifier::new();
        let saved = notifier.success("Book created", "The book was added to the catalog.");
        let failed = notifier.error("Could not create book", "Please try again.");

        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, NotificationKind::Success);
        assert_eq!(entries[1].kind, NotificationKind::Error);

        notifier.dismiss(&saved);
        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, failed);

        runtime.dispose();
    }

    #[test]
    fn oldest_notifications_are_dropped() {
        let runtime = create_runtime();

        let notifier = Notifier::new();
        let first = notifier.error("Could not load books", "Try again later.");
        for _ in 0..MAX_VISIBLE {
            notifier.error("Could not load books", "Try again later.");
        }

        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), MAX_VISIBLE);
        assert!(entries.iter().all(|n| n.id != first));

        runtime.dispose();
    }
}
