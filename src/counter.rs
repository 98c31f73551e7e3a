use std::sync::atomic::{AtomicU32, Ordering};

/// A monotonic source of protocol message identifiers.
///
/// Counter values are taken with a single atomic increment, so a shared
/// instance hands out unique ids across threads.
#[derive(Debug, Default)]
pub struct MessageCounter {
    message_id: AtomicU32,
}

impl MessageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next message id, formatted as `<n>`.
    pub fn message_id(&self) -> String {
        self.message_id.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// The next message id, formatted as `<prefix>-<n>`.
    ///
    /// # Panics
    ///
    /// Panics when `prefix` is empty.
    pub fn prefixed_message_id(&self, prefix: &str) -> String {
        assert!(!prefix.is_empty(), "empty message-id prefix");
        format!("{}-{}", prefix, self.message_id())
    }
}
