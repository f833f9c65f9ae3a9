use std::mem;

use crate::events::OutcomeEvent;

/// An ordered log of outcome events.
///
/// Events are appended in the order they happened. A reader drains new events with
/// [`EventLog::read_out`] for playback, while the full history stays available.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<OutcomeEvent>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain events added since the last call to [`Self::read_out`]?
    pub fn has_new_events(&self) -> bool {
        self.last_read < self.events.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: OutcomeEvent) {
        self.events.push(event)
    }

    /// Pushes multiple events to the log.
    pub fn push_extend<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = OutcomeEvent>,
    {
        self.events.extend(iterable)
    }

    /// All events.
    pub fn all(&self) -> &[OutcomeEvent] {
        &self.events
    }

    /// Reads out events added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> &[OutcomeEvent] {
        let i = mem::replace(&mut self.last_read, self.events.len());
        &self.events[i..]
    }
}
