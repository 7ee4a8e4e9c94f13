//! Simulation observer trait — the engine's log sink.

use tq_core::{EventKind, QueueParams, SimTime};

use crate::RunResult;

/// One applied event, with the queue lengths as they stood when it fired
/// (before its transition).  The post-event state is the run's next snapshot.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EventRecord {
    /// Index of the run within its batch.
    pub run:    usize,
    pub time:   SimTime,
    pub kind:   EventKind,
    pub queue1: u32,
    pub queue2: u32,
}

/// Callbacks invoked by [`Run::run`][crate::Run::run] and
/// [`run_batch`][crate::run_batch].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Within one run, callbacks arrive in
/// strictly non-decreasing time order.
///
/// # Example — event counter
///
/// ```rust,ignore
/// struct Counter(u64);
///
/// impl SimObserver for Counter {
///     fn on_event(&mut self, _event: &EventRecord) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the first event of a run.
    fn on_run_start(&mut self, _run: usize, _params: &QueueParams) {}

    /// Called once per applied event.
    fn on_event(&mut self, _event: &EventRecord) {}

    /// Called after the run's average has been computed.
    fn on_run_end(&mut self, _run: usize, _result: &RunResult) {}

    /// Whether this observer looks at `on_event` at all.  The parallel batch
    /// path skips buffering events for observers that return `false`.
    fn wants_events(&self) -> bool {
        true
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {
    fn wants_events(&self) -> bool {
        false
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_run_start(&mut self, run: usize, params: &QueueParams) {
        (**self).on_run_start(run, params);
    }

    fn on_event(&mut self, event: &EventRecord) {
        (**self).on_event(event);
    }

    fn on_run_end(&mut self, run: usize, result: &RunResult) {
        (**self).on_run_end(run, result);
    }

    fn wants_events(&self) -> bool {
        (**self).wants_events()
    }
}
