//! Typed notifications a text control sends to whoever embeds it.
//!
//! Observers are plain closures registered on the control. They run
//! synchronously, in registration order, after the state change that caused
//! the notification has fully completed.

/// Something observable happened to a text control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The document text changed.
    TextChanged,
    /// The cursor or selection moved. Sent after `TextChanged` when an edit
    /// also moved the cursor.
    SelectionChanged,
    /// The viewport offset changed.
    Scrolled,
    /// Return was pressed in a single-line control.
    Activated,
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Notification)>;

/// Ordered list of notification observers.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, notification: Notification) {
        for (_, observer) in &mut self.entries {
            observer(&notification);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
