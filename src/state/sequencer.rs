// ============================================================================
// REQUEST SEQUENCER - Latest-issued-wins gating for async completions
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

/// Ticket taken when a request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// One per logical operation. A completion may commit only if its ticket is
/// still the newest one and the view has not been torn down.
#[derive(Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
    retired: Rc<Cell<bool>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.retired.get() && ticket.0 == self.latest.get()
    }

    /// After this no ticket is ever current again
    pub fn retire(&self) {
        self.retired.set(true);
    }

    pub fn is_retired(&self) -> bool {
        self.retired.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_is_current() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn retired_sequencer_rejects_everything() {
        let seq = RequestSequencer::new();
        let ticket = seq.issue();
        seq.clone().retire();
        assert!(seq.is_retired());
        assert!(!seq.is_current(ticket));
        assert!(!seq.is_current(seq.issue()));
    }
}
