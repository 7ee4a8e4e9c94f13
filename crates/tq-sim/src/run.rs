//! `Run` — one timeline from t = 0 to the horizon.
//!
//! # Event loop
//!
//! ```text
//! while now < T and a timer is pending:
//!   ① pop the earliest (time, kind) from the clock; ties → Arrival,
//!      Server 1, Server 2
//!   ② now ← time; apply the transition for `kind`
//!   ③ Arrival            → redraw the arrival timer, censored at T
//!      Transition actions → redraw / cancel the server timers
//!   ④ record a snapshot (time, q1, q2); notify the observer with the
//!      queue lengths as they stood when the event fired
//! ```
//!
//! Only arrivals are censored at the horizon.  A service completion that was
//! scheduled before `T` but fires after it is still applied when it is the
//! first event past `T`, so the final snapshot may be stamped slightly after
//! `T`.  The average is still divided by `T`.

use tracing::{debug, trace};

use tq_core::{DurationSource, EventKind, QueueParams, SimTime, Snapshot};
use tq_model::time_weighted_average;

use crate::state::{NetworkState, TimerAction};
use crate::{EventClock, EventRecord, SimObserver, SimResult};

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Time-weighted mean of `queue1 + queue2` over the run, divided by `T`.
    pub average:   f64,
    /// Occupancy trajectory; starts at `(0, initial_q1, 0)`.
    pub snapshots: Vec<Snapshot>,
    /// Number of events applied.
    pub events:    u64,
    /// Simulated time of the last applied event (0 if none).
    pub end_time:  SimTime,
}

/// A single simulation run.
///
/// `D` supplies the exponential holding times; use
/// [`tq_core::VariateSource`] for real runs.
pub struct Run<D: DurationSource> {
    params:    QueueParams,
    index:     usize,
    state:     NetworkState,
    clock:     EventClock,
    source:    D,
    snapshots: Vec<Snapshot>,
    events:    u64,
}

impl<D: DurationSource> Run<D> {
    /// Set up the t = 0 state: the first arrival is drawn (and censored),
    /// and Server 1 starts serving if it begins with a backlog.
    pub fn new(params: &QueueParams, source: D) -> Self {
        let state = NetworkState::new(params.initial_queue1());
        let mut run = Self {
            params:    params.clone(),
            index:     0,
            snapshots: vec![state.snapshot()],
            state,
            clock:     EventClock::new(),
            source,
            events:    0,
        };
        run.schedule_arrival();
        if run.state.queue1 > 0 {
            run.redraw(EventKind::Server1Finished);
        }
        run
    }

    /// Tag this run with its index within a batch (reported to observers).
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn state(&self) -> &NetworkState {
        &self.state
    }

    pub fn clock(&self) -> &EventClock {
        &self.clock
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The horizon has been reached or nothing remains scheduled.
    pub fn is_finished(&self) -> bool {
        self.state.now >= self.params.horizon() || self.clock.is_idle()
    }

    /// Apply the next event.  Returns `None` once the run is finished.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<EventRecord>> {
        if self.state.now >= self.params.horizon() {
            return Ok(None);
        }
        let Some((at, kind)) = self.clock.pop() else {
            return Ok(None);
        };
        debug_assert!(at >= self.state.now, "clock moved backwards");
        self.state.now = at;
        let (queue1, queue2) = (self.state.queue1, self.state.queue2);

        let transition = self.state.apply(kind)?;
        if kind == EventKind::Arrival {
            self.schedule_arrival();
        }
        self.follow(EventKind::Server1Finished, transition.server1);
        self.follow(EventKind::Server2Finished, transition.server2);

        self.record_snapshot();
        self.events += 1;

        let record = EventRecord {
            run:    self.index,
            time:   at,
            kind,
            queue1,
            queue2,
        };
        trace!(
            run = self.index,
            time = at.value(),
            %kind,
            queue1 = record.queue1,
            queue2 = record.queue2,
            "event"
        );
        observer.on_event(&record);
        Ok(Some(record))
    }

    /// Drive the run to completion and reduce it to a [`RunResult`].
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<RunResult> {
        observer.on_run_start(self.index, &self.params);
        while self.step(observer)?.is_some() {}

        let index = self.index;
        let result = RunResult {
            average:   time_weighted_average(&self.snapshots, self.params.horizon()),
            end_time:  self.state.now,
            events:    self.events,
            snapshots: self.snapshots,
        };
        debug!(
            run = index,
            events = result.events,
            snapshots = result.snapshots.len(),
            end_time = result.end_time.value(),
            average = result.average,
            "run finished"
        );
        observer.on_run_end(index, &result);
        Ok(result)
    }

    // ── Timer maintenance ─────────────────────────────────────────────────

    /// Draw the next arrival.  Arrivals at or past the horizon are dropped,
    /// leaving the arrival timer unscheduled for the rest of the run.
    fn schedule_arrival(&mut self) {
        let at = self.state.now + self.source.draw(self.params.arrival_rate());
        if at < self.params.horizon() {
            self.clock.schedule(EventKind::Arrival, at);
        } else {
            self.clock.cancel(EventKind::Arrival);
        }
    }

    /// Start a fresh service period for the server behind `kind`.
    fn redraw(&mut self, kind: EventKind) {
        let rate = match kind {
            EventKind::Arrival         => self.params.arrival_rate(),
            EventKind::Server1Finished => self.params.service_rate_1(),
            EventKind::Server2Finished => self.params.service_rate_2(),
        };
        let at = self.state.now + self.source.draw(rate);
        self.clock.schedule(kind, at);
    }

    fn follow(&mut self, kind: EventKind, action: TimerAction) {
        match action {
            TimerAction::Keep   => {}
            TimerAction::Redraw => self.redraw(kind),
            TimerAction::Cancel => self.clock.cancel(kind),
        }
    }

    /// Append the post-event state.  Events at exactly the same instant
    /// collapse onto one snapshot so timestamps stay strictly increasing;
    /// the initial `(0, q1, 0)` snapshot is never replaced.
    fn record_snapshot(&mut self) {
        let snap = self.state.snapshot();
        let replaceable = self.snapshots.len() > 1;
        match self.snapshots.last_mut() {
            Some(last) if replaceable && last.time == snap.time => *last = snap,
            _ => self.snapshots.push(snap),
        }
    }
}

/// Build and run a single timeline with index 0.
pub fn simulate_run<D, O>(params: &QueueParams, source: D, observer: &mut O) -> SimResult<RunResult>
where
    D: DurationSource,
    O: SimObserver,
{
    Run::new(params, source).run(observer)
}
