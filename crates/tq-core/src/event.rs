//! Event kinds and occupancy snapshots.

use std::fmt;

use crate::SimTime;

/// The three state transitions of the tandem network.
///
/// The declaration order is the tie-break precedence used when two timers
/// fire at exactly the same instant: arrival first, then Server 1, then
/// Server 2.  `Ord` follows that order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Arrival,
    Server1Finished,
    Server2Finished,
}

impl EventKind {
    /// All kinds in tie-break precedence order.
    pub const ALL: [EventKind; 3] = [
        EventKind::Arrival,
        EventKind::Server1Finished,
        EventKind::Server2Finished,
    ];

    /// Dense index, usable for per-kind arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Arrival         => "Arrival",
            EventKind::Server1Finished => "Service-1 Finished",
            EventKind::Server2Finished => "Service-2 Finished",
        };
        f.write_str(s)
    }
}

/// Queue lengths as they stand from `time` until the next snapshot.
///
/// A run's snapshot sequence starts with `(0, initial_q1, 0)` and is the sole
/// input to time-weighted averaging.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub time:   SimTime,
    pub queue1: u32,
    pub queue2: u32,
}

impl Snapshot {
    #[inline]
    pub fn new(time: SimTime, queue1: u32, queue2: u32) -> Self {
        Self { time, queue1, queue2 }
    }

    /// Customers anywhere in the network.
    #[inline]
    pub fn total(&self) -> u64 {
        self.queue1 as u64 + self.queue2 as u64
    }
}
