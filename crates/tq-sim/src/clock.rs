//! `EventClock` — the three pending timers of a run.
//!
//! Each [`EventKind`] has at most one pending firing time.  An unscheduled
//! timer is `None`; there is no infinity sentinel.  [`EventClock::pop`]
//! removes and returns the earliest pending event, breaking exact ties by
//! `EventKind` order (arrival, then Server 1, then Server 2).

use tq_core::{EventKind, SimTime};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventClock {
    timers: [Option<SimTime>; 3],
}

impl EventClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the firing time of `kind`.
    #[inline]
    pub fn schedule(&mut self, kind: EventKind, at: SimTime) {
        self.timers[kind.index()] = Some(at);
    }

    /// Mark `kind` as unscheduled.
    #[inline]
    pub fn cancel(&mut self, kind: EventKind) {
        self.timers[kind.index()] = None;
    }

    /// Pending firing time of `kind`, if any.
    #[inline]
    pub fn get(&self, kind: EventKind) -> Option<SimTime> {
        self.timers[kind.index()]
    }

    /// The earliest pending event without removing it.
    pub fn peek(&self) -> Option<(SimTime, EventKind)> {
        let mut next: Option<(SimTime, EventKind)> = None;
        // A later kind replaces the best only when strictly earlier.
        for kind in EventKind::ALL {
            if let Some(at) = self.get(kind) {
                match next {
                    Some((best, _)) if at >= best => {}
                    _ => next = Some((at, kind)),
                }
            }
        }
        next
    }

    /// Remove and return the earliest pending event.
    pub fn pop(&mut self) -> Option<(SimTime, EventKind)> {
        let next = self.peek()?;
        self.cancel(next.1);
        Some(next)
    }

    /// Nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.timers.iter().all(Option::is_none)
    }
}
