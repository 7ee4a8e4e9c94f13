//! Unit and integration tests for tq-sim.

use std::collections::VecDeque;

use tq_core::{DurationSource, QueueParams, Rate, SimTime, Snapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Hands out pre-set durations in draw order and remembers the rates asked for.
struct Scripted {
    durations: VecDeque<f64>,
    rates:     Vec<f64>,
}

impl Scripted {
    fn new(durations: &[f64]) -> Self {
        Self { durations: durations.iter().copied().collect(), rates: Vec::new() }
    }
}

impl DurationSource for Scripted {
    fn draw(&mut self, rate: Rate) -> f64 {
        self.rates.push(rate.get());
        self.durations.pop_front().expect("duration script exhausted")
    }
}

fn params(lambda: f64, mu1: f64, mu2: f64, horizon: f64, q1: u32) -> QueueParams {
    QueueParams::new(lambda, mu1, mu2, horizon, q1).unwrap()
}

fn snap(t: f64, q1: u32, q2: u32) -> Snapshot {
    Snapshot::new(SimTime(t), q1, q2)
}

// ── EventClock ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock_tests {
    use tq_core::{EventKind, SimTime};

    use crate::EventClock;

    #[test]
    fn empty_clock_is_idle() {
        let mut clock = EventClock::new();
        assert!(clock.is_idle());
        assert_eq!(clock.peek(), None);
        assert_eq!(clock.pop(), None);
    }

    #[test]
    fn pops_earliest_first() {
        let mut clock = EventClock::new();
        clock.schedule(EventKind::Arrival, SimTime(3.0));
        clock.schedule(EventKind::Server1Finished, SimTime(1.0));
        clock.schedule(EventKind::Server2Finished, SimTime(2.0));
        assert_eq!(clock.pop(), Some((SimTime(1.0), EventKind::Server1Finished)));
        assert_eq!(clock.pop(), Some((SimTime(2.0), EventKind::Server2Finished)));
        assert_eq!(clock.pop(), Some((SimTime(3.0), EventKind::Arrival)));
        assert!(clock.is_idle());
    }

    #[test]
    fn exact_ties_follow_precedence() {
        let mut clock = EventClock::new();
        clock.schedule(EventKind::Server2Finished, SimTime(5.0));
        clock.schedule(EventKind::Server1Finished, SimTime(5.0));
        clock.schedule(EventKind::Arrival, SimTime(5.0));
        let order: Vec<_> = std::iter::from_fn(|| clock.pop()).map(|(_, k)| k).collect();
        assert_eq!(
            order,
            [EventKind::Arrival, EventKind::Server1Finished, EventKind::Server2Finished]
        );
    }

    #[test]
    fn cancel_and_reschedule() {
        let mut clock = EventClock::new();
        clock.schedule(EventKind::Arrival, SimTime(1.0));
        clock.schedule(EventKind::Arrival, SimTime(4.0));
        assert_eq!(clock.get(EventKind::Arrival), Some(SimTime(4.0)));
        clock.cancel(EventKind::Arrival);
        assert_eq!(clock.get(EventKind::Arrival), None);
        assert!(clock.is_idle());
    }
}

// ── NetworkState transitions ──────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use tq_core::EventKind;

    use crate::{NetworkState, SimError, TimerAction, Transition};

    #[test]
    fn arrival_to_idle_server_starts_service() {
        let mut s = NetworkState::new(0);
        let t = s.arrive().unwrap();
        assert_eq!((s.queue1, s.queue2), (1, 0));
        assert_eq!(t, Transition { server1: TimerAction::Redraw, server2: TimerAction::Keep });
    }

    #[test]
    fn arrival_to_busy_server_just_queues() {
        let mut s = NetworkState::new(2);
        let t = s.apply(EventKind::Arrival).unwrap();
        assert_eq!(s.queue1, 3);
        assert_eq!(t.server1, TimerAction::Keep);
    }

    #[test]
    fn server1_completion_moves_customer_downstream() {
        let mut s = NetworkState::new(1);
        let t = s.finish_server1().unwrap();
        assert_eq!((s.queue1, s.queue2), (0, 1));
        assert_eq!(t, Transition { server1: TimerAction::Cancel, server2: TimerAction::Redraw });

        let mut busy = NetworkState { queue1: 3, queue2: 2, now: Default::default() };
        let t = busy.finish_server1().unwrap();
        assert_eq!((busy.queue1, busy.queue2), (2, 3));
        assert_eq!(t, Transition { server1: TimerAction::Redraw, server2: TimerAction::Keep });
    }

    #[test]
    fn server2_completion_leaves_network() {
        let mut s = NetworkState { queue1: 0, queue2: 2, now: Default::default() };
        assert_eq!(s.finish_server2().unwrap().server2, TimerAction::Redraw);
        assert_eq!(s.finish_server2().unwrap().server2, TimerAction::Cancel);
        assert_eq!(s.queue2, 0);
    }

    #[test]
    fn completion_on_empty_queue_is_an_error() {
        let mut s = NetworkState::new(0);
        assert!(matches!(
            s.finish_server1(),
            Err(SimError::EmptyQueue { kind: EventKind::Server1Finished, .. })
        ));
        assert!(matches!(
            s.apply(EventKind::Server2Finished),
            Err(SimError::EmptyQueue { kind: EventKind::Server2Finished, .. })
        ));
        assert_eq!((s.queue1, s.queue2), (0, 0), "failed transitions leave state untouched");
    }
}

// ── Run: scripted timelines ───────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use tq_core::{EventKind, SimTime};

    use super::*;
    use crate::{EventRecord, NoopObserver, Run, SimObserver, simulate_run};

    #[derive(Default)]
    struct Recorder {
        events: Vec<EventRecord>,
        starts: usize,
        ends:   usize,
    }

    impl SimObserver for Recorder {
        fn on_run_start(&mut self, _run: usize, _p: &QueueParams) { self.starts += 1; }
        fn on_event(&mut self, e: &EventRecord) { self.events.push(*e); }
        fn on_run_end(&mut self, _run: usize, _r: &crate::RunResult) { self.ends += 1; }
    }

    #[test]
    fn single_customer_passes_through() {
        // arrival@1, next arrival censored (21 ≥ 10), S1 done@3, S2 done@7.
        let mut script = Scripted::new(&[1.0, 20.0, 2.0, 4.0]);
        let mut obs = Recorder::default();
        let result = simulate_run(&params(1.0, 2.0, 3.0, 10.0, 0), &mut script, &mut obs).unwrap();

        assert_eq!(
            result.snapshots,
            [snap(0.0, 0, 0), snap(1.0, 1, 0), snap(3.0, 0, 1), snap(7.0, 0, 0)]
        );
        assert_eq!(result.events, 3);
        assert_eq!(result.end_time, SimTime(7.0));
        // (1 * 2 + 1 * 4) / 10
        assert!((result.average - 0.6).abs() < 1e-12, "got {}", result.average);
        assert_eq!(script.rates, [1.0, 1.0, 2.0, 3.0], "λ, λ, μ1, μ2 in draw order");

        let kinds: Vec<_> = obs.events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [EventKind::Arrival, EventKind::Server1Finished, EventKind::Server2Finished]
        );
        assert_eq!((obs.starts, obs.ends), (1, 1));
    }

    #[test]
    fn event_records_carry_lengths_before_the_event() {
        let mut script = Scripted::new(&[1.0, 20.0, 2.0, 4.0]);
        let mut obs = Recorder::default();
        let result = simulate_run(&params(1.0, 2.0, 3.0, 10.0, 0), &mut script, &mut obs).unwrap();

        let logged: Vec<_> = obs.events.iter().map(|e| (e.kind, e.queue1, e.queue2)).collect();
        assert_eq!(
            logged,
            [
                (EventKind::Arrival, 0, 0),
                (EventKind::Server1Finished, 1, 0),
                (EventKind::Server2Finished, 0, 1),
            ]
        );
        // Each record's lengths are the state held by the preceding snapshot.
        for (e, before) in obs.events.iter().zip(&result.snapshots) {
            assert_eq!((e.queue1, e.queue2), (before.queue1, before.queue2));
        }
    }

    #[test]
    fn no_arrivals_and_empty_start_averages_zero() {
        let mut script = Scripted::new(&[100.0]);
        let result = simulate_run(&params(1.0, 2.0, 3.0, 10.0, 0), &mut script, &mut NoopObserver).unwrap();
        assert_eq!(result.snapshots, [snap(0.0, 0, 0)]);
        assert_eq!(result.events, 0);
        assert_eq!(result.average, 0.0);
    }

    #[test]
    fn completion_past_horizon_is_applied() {
        // arrival@9, S1 done@9.5, S2 done@10.5 > T = 10.
        let mut script = Scripted::new(&[9.0, 5.0, 0.5, 1.0]);
        let result = simulate_run(&params(1.0, 2.0, 3.0, 10.0, 0), &mut script, &mut NoopObserver).unwrap();
        let last = *result.snapshots.last().unwrap();
        assert_eq!(last, snap(10.5, 0, 0));
        assert!(last.time > SimTime(10.0));
        // (1 * 0.5 + 1 * 1.0) / 10
        assert!((result.average - 0.15).abs() < 1e-12, "got {}", result.average);
    }

    #[test]
    fn stops_at_first_event_past_horizon() {
        // Backlog of 3; arrivals censored from the start.
        // S1@0.5 → (2,1); S1@1.25 → (1,2) crosses T = 1 and ends the run.
        let mut script = Scripted::new(&[5.0, 0.5, 0.75, 2.0, 9.0]);
        let p = params(1.0, 2.0, 3.0, 1.0, 3);
        let mut run = Run::new(&p, &mut script);
        assert_eq!(run.clock().get(EventKind::Arrival), None, "first arrival censored");

        while run.step(&mut NoopObserver).unwrap().is_some() {}
        assert!(run.is_finished());
        assert_eq!(run.state().now, SimTime(1.25));
        assert_eq!(run.snapshots(), [snap(0.0, 3, 0), snap(0.5, 2, 1), snap(1.25, 1, 2)]);
        // Pending completions beyond the horizon stay unapplied.
        assert_eq!(run.clock().get(EventKind::Server2Finished), Some(SimTime(2.5)));
        assert!(run.step(&mut NoopObserver).unwrap().is_none());
    }

    #[test]
    fn simultaneous_events_apply_in_precedence_and_share_a_snapshot() {
        // Arrival and S1 completion both at t = 2.
        let mut script = Scripted::new(&[2.0, 2.0, 50.0, 3.0, 1.0, 1.0]);
        let mut obs = Recorder::default();
        let result = simulate_run(&params(1.0, 2.0, 3.0, 10.0, 1), &mut script, &mut obs).unwrap();

        let kinds: Vec<_> = obs.events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                EventKind::Arrival,
                EventKind::Server1Finished,
                EventKind::Server2Finished,
                EventKind::Server1Finished,
                EventKind::Server2Finished,
            ]
        );
        assert_eq!(
            result.snapshots,
            [snap(0.0, 1, 0), snap(2.0, 1, 1), snap(3.0, 1, 0), snap(5.0, 0, 1), snap(6.0, 0, 0)]
        );
        assert!((result.average - 0.7).abs() < 1e-12, "got {}", result.average);
    }

    #[test]
    fn backlog_starts_server1_immediately() {
        let mut script = Scripted::new(&[50.0, 0.25]);
        let run = Run::new(&params(1.0, 2.0, 3.0, 10.0, 4), &mut script);
        assert_eq!(run.clock().get(EventKind::Server1Finished), Some(SimTime(0.25)));
        assert_eq!(run.clock().get(EventKind::Server2Finished), None);
        assert_eq!(run.snapshots(), [snap(0.0, 4, 0)]);
    }
}

// ── Run: random timelines ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use tq_core::{EventKind, VariateSource};

    use super::*;
    use crate::{EventRecord, SimObserver, simulate_run};

    struct OrderedLog {
        events:        Vec<EventRecord>,
        last_time:     f64,
    }

    impl SimObserver for OrderedLog {
        fn on_event(&mut self, e: &EventRecord) {
            assert!(e.time.value() >= self.last_time, "events out of order");
            self.last_time = e.time.value();
            self.events.push(*e);
        }
    }

    #[test]
    fn snapshots_strictly_increase_from_initial_state() {
        for seed in 0..20 {
            let p = params(3.0, 4.0, 3.5, 200.0, 5);
            let result = simulate_run(&p, VariateSource::new(seed), &mut crate::NoopObserver).unwrap();
            assert_eq!(result.snapshots[0], snap(0.0, 5, 0));
            for w in result.snapshots.windows(2) {
                assert!(w[1].time > w[0].time, "seed {seed}: {:?} then {:?}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn queues_match_event_accounting() {
        let p = params(2.0, 3.0, 3.0, 500.0, 0);
        let mut obs = OrderedLog { events: Vec::new(), last_time: 0.0 };
        let result = simulate_run(&p, VariateSource::new(11), &mut obs).unwrap();

        // Replay the log: each record carries the lengths before its event.
        let (mut q1, mut q2) = (0i64, 0i64);
        for e in &obs.events {
            assert_eq!((q1, q2), (e.queue1 as i64, e.queue2 as i64));
            match e.kind {
                EventKind::Arrival         => q1 += 1,
                EventKind::Server1Finished => { q1 -= 1; q2 += 1; }
                EventKind::Server2Finished => q2 -= 1,
            }
            assert!(q1 >= 0 && q2 >= 0);
        }
        assert_eq!(obs.events.len() as u64, result.events);
    }

    #[test]
    fn no_arrivals_over_horizon_gives_zero() {
        // λ so small an arrival before T = 10 is practically impossible.
        let p = params(1e-12, 2.0, 3.0, 10.0, 0);
        let result = simulate_run(&p, VariateSource::new(3), &mut crate::NoopObserver).unwrap();
        assert_eq!(result.average, 0.0);
        assert_eq!(result.snapshots.len(), 1);
    }
}

// ── Batches ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use tq_core::RunConfig;
    use tq_model::expected_occupancy_for;

    use super::*;
    use crate::{EventRecord, NoopObserver, RunResult, SimObserver, run_batch};

    #[test]
    fn converges_to_theory() {
        let p = params(1.0, 2.0, 3.0, 1_000.0, 0);
        let cfg = RunConfig::new(100, Some(42)).unwrap();
        let batch = run_batch(&p, &cfg, &mut NoopObserver).unwrap();
        let theory = expected_occupancy_for(&p).unwrap();
        assert!((theory - 1.5).abs() < 1e-12);
        let rel = (batch.mean - theory).abs() / theory;
        assert!(rel < 0.15, "simulated {} vs theory {theory}", batch.mean);
    }

    #[test]
    fn seeded_batches_reproduce() {
        let p = params(5.0, 8.0, 6.0, 50.0, 0);
        let cfg = RunConfig::new(8, Some(7)).unwrap();
        let a = run_batch(&p, &cfg, &mut NoopObserver).unwrap();
        let b = run_batch(&p, &cfg, &mut NoopObserver).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.root_seed, 7);

        let other = run_batch(&p, &RunConfig::new(8, Some(8)).unwrap(), &mut NoopObserver).unwrap();
        assert_ne!(a.run_averages, other.run_averages);
    }

    #[test]
    fn unseeded_batch_reports_replayable_seed() {
        let p = params(1.0, 2.0, 3.0, 20.0, 0);
        let first = run_batch(&p, &RunConfig::new(3, None).unwrap(), &mut NoopObserver).unwrap();
        let replay = run_batch(
            &p,
            &RunConfig::new(3, Some(first.root_seed)).unwrap(),
            &mut NoopObserver,
        )
        .unwrap();
        assert_eq!(first.run_averages, replay.run_averages);
    }

    #[test]
    fn mean_and_trajectories_line_up() {
        let p = params(1.0, 2.0, 3.0, 30.0, 2);
        let batch = run_batch(&p, &RunConfig::new(5, Some(1)).unwrap(), &mut NoopObserver).unwrap();
        assert_eq!(batch.run_averages.len(), 5);
        assert_eq!(batch.trajectories.len(), 5);
        let mean = batch.run_averages.iter().sum::<f64>() / 5.0;
        assert!((batch.mean - mean).abs() < 1e-12);
        assert!(batch.trajectories.iter().all(|t| t[0] == snap(0.0, 2, 0)));

        let (m, t) = batch.into_parts();
        assert_eq!(m, mean);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn observer_sees_runs_in_order() {
        #[derive(Default)]
        struct Order {
            log:    Vec<(usize, char)>,
            events: usize,
        }
        impl SimObserver for Order {
            fn on_run_start(&mut self, run: usize, _p: &QueueParams) { self.log.push((run, 's')); }
            fn on_event(&mut self, e: &EventRecord) {
                assert_eq!(self.log.last().map(|l| l.0), Some(e.run));
                self.events += 1;
            }
            fn on_run_end(&mut self, run: usize, _r: &RunResult) { self.log.push((run, 'e')); }
        }

        let p = params(1.0, 2.0, 3.0, 10.0, 0);
        let mut obs = Order::default();
        run_batch(&p, &RunConfig::new(3, Some(5)).unwrap(), &mut obs).unwrap();
        assert_eq!(obs.log, [(0, 's'), (0, 'e'), (1, 's'), (1, 'e'), (2, 's'), (2, 'e')]);
        assert!(obs.events > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batch_matches_serial_replay() {
        use tq_core::VariateSource;

        use crate::Run;

        #[derive(Default)]
        struct Log(Vec<EventRecord>);
        impl SimObserver for Log {
            fn on_event(&mut self, e: &EventRecord) { self.0.push(*e); }
        }

        let p = params(2.0, 3.0, 4.0, 100.0, 1);
        let mut pooled = Log::default();
        let batch = run_batch(&p, &RunConfig::new(16, Some(21)).unwrap(), &mut pooled).unwrap();

        let mut replayed = Log::default();
        for i in 0..16 {
            let run = Run::new(&p, VariateSource::for_run(21, i as u64))
                .with_index(i)
                .run(&mut replayed)
                .unwrap();
            assert_eq!(run.average, batch.run_averages[i], "run {i}");
            assert_eq!(run.snapshots, batch.trajectories[i], "run {i}");
        }
        assert_eq!(pooled.0, replayed.0);
    }
}
