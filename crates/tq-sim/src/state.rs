//! `NetworkState` and the three transition rules.
//!
//! Transitions only touch the queue lengths.  They report what each server's
//! completion timer must do next as a [`Transition`], and the run loop
//! applies that to the [`EventClock`][crate::EventClock] using fresh draws.

use tq_core::{EventKind, SimTime, Snapshot};

use crate::{SimError, SimResult};

/// What a transition requires of one server's completion timer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TimerAction {
    /// Leave the timer as it is.
    Keep,
    /// A new service starts now: draw a fresh completion time.
    Redraw,
    /// The server went idle: unschedule the timer.
    Cancel,
}

/// Timer follow-ups produced by one transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Transition {
    pub server1: TimerAction,
    pub server2: TimerAction,
}

/// Queue lengths and current time of one run.
///
/// `queue1` counts customers waiting for or in service at Server 1, and
/// `queue2` likewise for Server 2.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkState {
    pub queue1: u32,
    pub queue2: u32,
    pub now:    SimTime,
}

impl NetworkState {
    /// State at t = 0 with `initial_queue1` customers at Server 1.
    pub fn new(initial_queue1: u32) -> Self {
        Self { queue1: initial_queue1, queue2: 0, now: SimTime::ZERO }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.now, self.queue1, self.queue2)
    }

    /// Apply the transition for `kind` at the current time.
    pub fn apply(&mut self, kind: EventKind) -> SimResult<Transition> {
        match kind {
            EventKind::Arrival         => self.arrive(),
            EventKind::Server1Finished => self.finish_server1(),
            EventKind::Server2Finished => self.finish_server2(),
        }
    }

    /// A customer joins Server 1.  An idle server starts serving at once.
    pub fn arrive(&mut self) -> SimResult<Transition> {
        self.queue1 = self
            .queue1
            .checked_add(1)
            .ok_or(SimError::QueueOverflow { time: self.now })?;
        Ok(Transition {
            server1: if self.queue1 == 1 { TimerAction::Redraw } else { TimerAction::Keep },
            server2: TimerAction::Keep,
        })
    }

    /// Server 1 hands a customer to Server 2.
    pub fn finish_server1(&mut self) -> SimResult<Transition> {
        self.queue1 = self.queue1.checked_sub(1).ok_or(SimError::EmptyQueue {
            kind: EventKind::Server1Finished,
            time: self.now,
        })?;
        self.queue2 = self
            .queue2
            .checked_add(1)
            .ok_or(SimError::QueueOverflow { time: self.now })?;
        Ok(Transition {
            server1: if self.queue1 > 0 { TimerAction::Redraw } else { TimerAction::Cancel },
            server2: if self.queue2 == 1 { TimerAction::Redraw } else { TimerAction::Keep },
        })
    }

    /// A customer leaves the network from Server 2.
    pub fn finish_server2(&mut self) -> SimResult<Transition> {
        self.queue2 = self.queue2.checked_sub(1).ok_or(SimError::EmptyQueue {
            kind: EventKind::Server2Finished,
            time: self.now,
        })?;
        Ok(Transition {
            server1: TimerAction::Keep,
            server2: if self.queue2 > 0 { TimerAction::Redraw } else { TimerAction::Cancel },
        })
    }
}
