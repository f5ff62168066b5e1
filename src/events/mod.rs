//! Event notifications for the presentation layer.
//!
//! Listeners are registered on the controller and called in registration
//! order, synchronously, after each state change. Any `FnMut(&GameEvent)`
//! closure is a listener.

pub mod event;

pub use event::GameEvent;

/// Receives match events.
pub trait EventListener: Send {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Ordered fan-out of events to listeners, with a per-match journal.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn EventListener>>,
    journal: Vec<GameEvent>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe<L: EventListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Record `event` and deliver it to every listener.
    pub fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        self.journal.push(event);
    }

    /// Events emitted since the journal was last cleared.
    #[must_use]
    pub fn journal(&self) -> &[GameEvent] {
        &self.journal
    }

    /// Forget journaled events. Listeners stay registered.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("journal", &self.journal)
            .finish()
    }
}
