//! Toast notifications
//!
//! Application services return [`Notification`]s; this module queues them
//! for display until their duration runs out.

use dioxus::prelude::*;
use survive_player::Notification;

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub notification: Notification,
}

/// Ordered queue of visible toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<ActiveToast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(ActiveToast { id, notification });
        id
    }

    /// Remove a toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[ActiveToast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ToastState {
    queue: Signal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        let id = self.queue.write().push(notification);
        tracing::trace!(toast = id, "Toast shown");
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    /// Snapshot of visible toasts (subscribes the caller)
    pub fn active(&self) -> Vec<ActiveToast> {
        self.queue.read().toasts().to_vec()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_arrival_order() {
        let mut queue = ToastQueue::default();
        queue.push(Notification::health_lost(20));
        queue.push(Notification::day_complete(1));
        queue.push(Notification::game_over());

        let titles: Vec<_> = queue
            .toasts()
            .iter()
            .map(|t| t.notification.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Bad Choice!", "Day Complete!", "Game Over"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::health_lost(20));
        let second = queue.push(Notification::game_over());

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Notification::game_over());
        queue.dismiss(a);
        let b = queue.push(Notification::game_over());
        assert_ne!(a, b);
        assert!(!queue.is_empty());
    }
}
