// src/notify.rs
use tokio::sync::broadcast;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient, non-blocking notification addressed to the presentation
/// layer. Controllers publish one per reportable outcome; they never block
/// on delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Broadcast hub for controller notifications. Cheap to clone; every clone
/// publishes into the same channel.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        // Subscribers more than 100 notifications behind lose the oldest ones.
        let (tx, _) = broadcast::channel(100);
        Self { tx }
    }

    /// Subscribe to notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: &str) {
        self.publish(NotificationLevel::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.publish(NotificationLevel::Error, message);
    }

    fn publish(&self, level: NotificationLevel, message: &str) {
        // A send error only means nobody is subscribed right now.
        let _ = self.tx.send(Notification {
            level,
            message: message.to_string(),
        });
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

    #[tokio::test]
    async fn delivers_notifications_in_publish_order() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.success("loaded");
        notifier.error("failed");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.level, NotificationLevel::Success);
        assert_eq!(first.message, "loaded");

        let second = rx.recv().await.unwrap();
        assert_eq!(second.level, NotificationLevel::Error);
        assert_eq!(second.message, "failed");
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let notifier = Notifier::new();
        notifier.success("nobody listening");
        notifier.error("still nobody");
    }
}
