//! Change notifications for the rendering layer.

use std::sync::mpsc;

use solpad_state::{FileId, ThemeMode, ViewMode};

/// One completed session mutation.
///
/// Every public mutation sends exactly one event. Changes it implies
/// (new active file, fallback to edit mode) are read from the next
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    // === Files ===
    /// File opened; it is now the active file
    FileOpened(FileId),
    /// File closed, with the file that became active
    FileClosed { id: FileId, active: Option<FileId> },
    /// Switch between already open files
    ActiveChanged(FileId),
    CodeChanged(FileId),

    // === View ===
    ViewModeChanged(ViewMode),
    BaselineChanged(FileId),
    ThemeChanged(ThemeMode),

    /// Explorer, terminal or window geometry changed
    LayoutChanged,
}

/// Fan-out of events to subscribers.
///
/// Subscribers whose receiver was dropped are pruned on the next send.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Vec<mpsc::Sender<SessionEvent>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> mpsc::Receiver<SessionEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let mut bus = EventBus::default();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(SessionEvent::LayoutChanged);
        assert_eq!(first.try_recv(), Ok(SessionEvent::LayoutChanged));
        assert_eq!(second.try_recv(), Ok(SessionEvent::LayoutChanged));
    }

    #[test]
    fn test_dropped_receivers_are_pruned() {
        let mut bus = EventBus::default();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(SessionEvent::ThemeChanged(ThemeMode::Dark));
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv(), Ok(SessionEvent::ThemeChanged(ThemeMode::Dark)));
    }
}
