//! Notification center — the toast queue shown by the storefront chrome.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use servicebay_domain::notification::Notification;

/// How many toasts are kept before the oldest is dropped.
pub const MAX_PENDING: usize = 5;

/// A queued notification with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

#[derive(Debug, Default)]
struct Queue {
    next_id: u32,
    toasts: VecDeque<Toast>,
}

/// Bounded queue of pending toasts.
///
/// Server-rendered pages drain it with [`take_all`](Self::take_all) so each
/// toast is displayed once (flash semantics).
#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: Mutex<Queue>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification and return its id.
    pub fn push(&self, notification: Notification) -> u32 {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        let id = queue.next_id;
        queue.next_id = queue.next_id.wrapping_add(1);

        tracing::debug!(id, kind = notification.kind.as_str(), message = %notification.message, "toast");
        queue.toasts.push_back(Toast { id, notification });
        while queue.toasts.len() > MAX_PENDING {
            queue.toasts.pop_front();
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u32 {
        self.push(Notification::success(message))
    }

    pub fn error(&self, message: impl Into<String>) -> u32 {
        self.push(Notification::error(message))
    }

    /// Remove a toast before it is displayed.
    pub fn dismiss(&self, id: u32) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .toasts
            .retain(|toast| toast.id != id);
    }

    /// Pending toasts, oldest first, without removing them.
    #[must_use]
    pub fn pending(&self) -> Vec<Toast> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .toasts
            .iter()
            .cloned()
            .collect()
    }

    /// Remove and return all pending toasts.
    pub fn take_all(&self) -> Vec<Toast> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .toasts
            .drain(..)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicebay_domain::notification::NotificationKind;

    #[test]
    fn should_queue_toasts_in_order() {
        let center = NotificationCenter::new();
        center.success("first");
        center.error("second");

        let pending = center.pending();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].notification.message, "first");
        assert_eq!(pending[1].notification.kind, NotificationKind::Error);
    }

    #[test]
    fn should_assign_increasing_ids() {
        let center = NotificationCenter::new();
        let a = center.success("a");
        let b = center.success("b");
        assert_eq!(b, a + 1);
    }

    #[test]
    fn should_dismiss_by_id() {
        let center = NotificationCenter::new();
        let a = center.success("a");
        center.success("b");

        center.dismiss(a);

        let pending = center.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].notification.message, "b");
    }

    #[test]
    fn should_drain_on_take_all() {
        let center = NotificationCenter::new();
        center.success("a");

        assert_eq!(center.take_all().len(), 1);
        assert!(center.take_all().is_empty());
    }

    #[test]
    fn should_drop_oldest_beyond_capacity() {
        let center = NotificationCenter::new();
        for n in 0..(MAX_PENDING + 2) {
            center.success(format!("toast {n}"));
        }

        let pending = center.pending();
        assert_eq!(pending.len(), MAX_PENDING);
        assert_eq!(pending[0].notification.message, "toast 2");
    }
}
