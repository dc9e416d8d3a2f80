//! Integration tests for kmc-sim.

use kmc_core::{Dims, Direction, KmcConfig, KmcError, KmcResult, PhysicalParams, PolicyKind, RunConfig, Site, SimClock, SimRng};
use kmc_events::{AnyPolicy, AtomDriven, Event, EventList, EventPolicy, SurfaceRefinement, VacancyDriven};
use kmc_lattice::Lattice;
use kmc_rates::{NamedRates, NamedTransition, RateTable};

use crate::{MoveRecord, NoopObserver, RunSummary, Sim, SimBuilder, SimObserver, StallReason, StepOutcome, StopReason, select_index};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(kind: PolicyKind, dims: Dims, seed: u64) -> KmcConfig {
    KmcConfig {
        dims,
        physics: PhysicalParams::default(),
        policy: kind,
        seed,
        run: RunConfig::default(),
    }
}

fn sim_for(kind: PolicyKind, dims: Dims, seed: u64) -> Sim<AnyPolicy> {
    SimBuilder::from_config(&config(kind, dims, seed)).unwrap().build().unwrap()
}

/// Same geometry rules as `sim_for`, but every transition runs at 1/s so
/// waiting times stay comparable to the elapsed time.
fn uniform_sim(kind: PolicyKind, dims: Dims, seed: u64) -> Sim<AnyPolicy> {
    let policy = match kind {
        PolicyKind::Vacancy => AnyPolicy::from(VacancyDriven::new(RateTable::uniform(1.0).unwrap())),
        PolicyKind::AtomFixed => AnyPolicy::from(AtomDriven::new(
            NamedRates::uniform(1.0).unwrap(),
            SurfaceRefinement::Fixed,
        )),
        PolicyKind::AtomRefined => AnyPolicy::from(AtomDriven::new(
            NamedRates::uniform(1.0).unwrap(),
            SurfaceRefinement::ByDestination,
        )),
    };
    SimBuilder::new(policy, seed).dimensions(dims).build().unwrap()
}

const ALL_KINDS: [PolicyKind; 3] = [PolicyKind::Vacancy, PolicyKind::AtomFixed, PolicyKind::AtomRefined];

fn step_records<P: EventPolicy>(sim: &mut Sim<P>, n: usize) -> Vec<MoveRecord> {
    (0..n)
        .map_while(|_| sim.step().unwrap().record().copied())
        .collect()
}

/// Observer that records every callback.
#[derive(Default)]
struct Recorder {
    steps:     Vec<MoveRecord>,
    snapshots: Vec<u64>,
    stalls:    Vec<StallReason>,
    ends:      Vec<RunSummary>,
}

impl SimObserver for Recorder {
    fn on_step(&mut self, record: &MoveRecord, _lattice: &Lattice) {
        self.steps.push(*record);
    }
    fn on_snapshot(&mut self, clock: &SimClock, _lattice: &Lattice) {
        self.snapshots.push(clock.steps());
    }
    fn on_stall(&mut self, _clock: &SimClock, reason: StallReason) {
        self.stalls.push(reason);
    }
    fn on_run_end(&mut self, summary: &RunSummary) {
        self.ends.push(*summary);
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn first_cumulative_strictly_above_draw() {
        let rates = [1.0, 2.0, 3.0];
        let cum = [1.0, 3.0, 6.0];
        assert_eq!(select_index(&cum, &rates, 0.0), Some(0));
        assert_eq!(select_index(&cum, &rates, 0.999), Some(0));
        // A draw equal to a boundary belongs to the next candidate.
        assert_eq!(select_index(&cum, &rates, 1.0), Some(1));
        assert_eq!(select_index(&cum, &rates, 5.999), Some(2));
    }

    #[test]
    fn zero_rate_candidates_never_win() {
        let rates = [0.0, 1.0, 0.0, 1.0, 0.0];
        let cum = [0.0, 1.0, 1.0, 2.0, 2.0];
        assert_eq!(select_index(&cum, &rates, 0.0), Some(1));
        assert_eq!(select_index(&cum, &rates, 1.0), Some(3));
    }

    #[test]
    fn rounding_past_the_end_picks_last_positive_rate() {
        let rates = [1.0, 1.0, 0.0];
        let cum = [1.0, 2.0, 2.0];
        assert_eq!(select_index(&cum, &rates, 2.0), Some(1));
    }

    #[test]
    fn all_zero_is_none() {
        assert_eq!(select_index(&[0.0, 0.0], &[0.0, 0.0], 0.0), None);
        assert_eq!(select_index(&[], &[], 0.0), None);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_initial_slab_from_config() {
        let sim = sim_for(PolicyKind::Vacancy, Dims::new(6, 3), 1);
        assert_eq!(sim.lattice().atom_count(), 18);
        assert_eq!(sim.lattice().guard_atom_count(), 0);
        assert_eq!(sim.elapsed(), 0.0);
        assert_eq!(sim.steps(), 0);
        assert_eq!(sim.policy().name(), "vacancy");
    }

    #[test]
    fn zero_dimensions_rejected() {
        let cfg = config(PolicyKind::Vacancy, Dims::new(0, 3), 1);
        assert!(matches!(SimBuilder::from_config(&cfg), Err(KmcError::Config(_))));
        let cfg = config(PolicyKind::Vacancy, Dims::new(3, 0), 1);
        assert!(SimBuilder::from_config(&cfg).is_err());
    }

    #[test]
    fn bad_physics_rejected() {
        let mut cfg = config(PolicyKind::AtomRefined, Dims::new(3, 3), 1);
        cfg.physics.temperature = -1.0;
        assert!(matches!(SimBuilder::from_config(&cfg), Err(KmcError::Config(_))));
    }

    #[test]
    fn occupied_guard_row_rejected() {
        let lattice = Lattice::from_rows(&["#..", "###", "..."]).unwrap();
        let policy = VacancyDriven::new(RateTable::uniform(1.0).unwrap());
        let result = SimBuilder::new(policy, 0).lattice(lattice).build();
        assert!(matches!(result, Err(KmcError::Config(_))));
    }

    #[test]
    fn lattice_dimension_mismatch_rejected() {
        let lattice = Lattice::slab(Dims::new(3, 2)).unwrap();
        let policy = VacancyDriven::new(RateTable::uniform(1.0).unwrap());
        let result = SimBuilder::new(policy, 0)
            .lattice(lattice)
            .dimensions(Dims::new(4, 2))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_lattice_rejected() {
        let policy = VacancyDriven::new(RateTable::uniform(1.0).unwrap());
        assert!(SimBuilder::new(policy, 0).build().is_err());
    }
}

// ── Single steps ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn three_by_one_slab_example() {
        // Width 3, height 1: every atom has 2 bonds through the wrap and hops
        // Up into the top guard row.  Only the edge transition has a rate.
        let r = 2.5;
        let rates = NamedRates::empty().with_rate(NamedTransition::Edge, r).unwrap();
        let policy = AtomDriven::new(rates, SurfaceRefinement::Fixed);
        let seed = 11;
        let mut sim = SimBuilder::new(policy, seed)
            .dimensions(Dims::new(3, 1))
            .build()
            .unwrap();

        let candidates = sim.candidates().unwrap();
        assert_eq!(candidates.len(), 3);
        assert!(candidates.rates().iter().all(|&x| x == r));

        let record = *sim.step().unwrap().record().expect("moved");
        assert_eq!(record.candidates, 3);
        assert_eq!(record.total_rate, 3.0 * r);
        assert_eq!(sim.lattice().atom_count(), 3);

        // Replay the two draws of the step.
        let mut rng = SimRng::new(seed);
        let u = rng.open01();
        let u_time = rng.open01();
        assert_eq!(record.source, Site::new(1, (u * 3.0) as usize));
        assert_eq!(record.direction, Direction::Up);
        assert_eq!(record.destination, Site::new(0, record.source.col));
        let expected = -u_time.ln() / (3.0 * r);
        assert!((sim.elapsed() - expected).abs() <= 1e-12 * expected);
        assert_eq!(record.dt, sim.elapsed());
    }

    #[test]
    fn empty_lattice_stalls_without_crashing() {
        let lattice = Lattice::empty(Dims::new(4, 2)).unwrap();
        for kind in ALL_KINDS {
            let policy = AnyPolicy::from_kind(kind, &PhysicalParams::default()).unwrap();
            let mut sim = SimBuilder::new(policy, 3).lattice(lattice.clone()).build().unwrap();
            let outcome = sim.step().unwrap();
            assert_eq!(outcome, StepOutcome::Stalled(StallReason::NoCandidates));
            assert!(outcome.is_stalled());
            assert_eq!(sim.elapsed(), 0.0);
            assert_eq!(sim.steps(), 0);
        }
    }

    #[test]
    fn zero_total_rate_stalls() {
        let policy = VacancyDriven::new(RateTable::uniform(0.0).unwrap());
        let mut sim = SimBuilder::new(policy, 3).dimensions(Dims::new(4, 2)).build().unwrap();
        let before = sim.lattice().clone();
        assert_eq!(sim.step().unwrap(), StepOutcome::Stalled(StallReason::ZeroTotalRate));
        assert_eq!(sim.lattice(), &before);
        assert_eq!(sim.elapsed(), 0.0);
    }

    #[test]
    fn last_events_reflect_pre_move_lattice() {
        let mut sim = sim_for(PolicyKind::Vacancy, Dims::new(5, 2), 8);
        let expected = sim.candidates().unwrap().len();
        let record = *sim.step().unwrap().record().unwrap();
        assert_eq!(sim.last_events().len(), expected);
        assert_eq!(record.candidates, expected);
    }

    #[test]
    fn width_one_lattice_never_moves_horizontally() {
        let lattice = Lattice::from_rows(&[".", "#", "."]).unwrap();
        for kind in ALL_KINDS {
            let policy = AnyPolicy::from_kind(kind, &PhysicalParams::default()).unwrap();
            let mut sim = SimBuilder::new(policy, 5).lattice(lattice.clone()).build().unwrap();
            for record in step_records(&mut sim, 20) {
                assert!(!record.direction.is_horizontal());
                assert_eq!(sim.lattice().atom_count(), 1);
            }
        }
    }

    /// Proposes the same illegal move every time: straight down into the bulk.
    struct Broken;

    impl EventPolicy for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }
        fn propose(&self, lattice: &Lattice, site: Site, out: &mut EventList) -> KmcResult<()> {
            if site == Site::new(1, 0) && lattice.is_occupied(site) {
                out.push(Event { site, direction: Direction::Down, rate: 1.0 });
            }
            Ok(())
        }
    }

    #[test]
    fn occupied_destination_is_fatal() {
        let mut sim = SimBuilder::new(Broken, 0).dimensions(Dims::new(3, 2)).build().unwrap();
        assert!(matches!(sim.step(), Err(KmcError::InvariantViolation(_))));
    }
}

// ── Properties over many steps ────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn occupancy_is_conserved() {
        for kind in ALL_KINDS {
            let mut sim = sim_for(kind, Dims::new(12, 4), 21);
            let atoms = sim.lattice().atom_count();
            for _ in 0..300 {
                if sim.step().unwrap().is_stalled() {
                    break;
                }
                assert_eq!(sim.lattice().atom_count(), atoms);
            }
        }
    }

    #[test]
    fn moves_follow_the_direction_transform() {
        for kind in ALL_KINDS {
            let mut sim = sim_for(kind, Dims::new(8, 3), 4);
            let dims = sim.lattice().dims();
            for record in step_records(&mut sim, 200) {
                // Rows never wrap: the destination is always one row away
                // (or the same row for horizontal hops).
                assert_eq!(record.direction.step(record.source, dims), Some(record.destination));
                assert!(record.destination.row < dims.rows());
            }
        }
    }

    #[test]
    fn clock_is_strictly_increasing() {
        for kind in ALL_KINDS {
            let mut sim = uniform_sim(kind, Dims::new(10, 3), 17);
            let mut last = sim.elapsed();
            for record in step_records(&mut sim, 200) {
                assert!(record.dt > 0.0);
                assert!(record.elapsed > last, "{} !> {last}", record.elapsed);
                last = record.elapsed;
            }
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        for kind in ALL_KINDS {
            let mut a = sim_for(kind, Dims::new(10, 4), 1234);
            let mut b = sim_for(kind, Dims::new(10, 4), 1234);
            let ra = step_records(&mut a, 150);
            let rb = step_records(&mut b, 150);
            assert_eq!(ra, rb);
            assert_eq!(a.lattice(), b.lattice());
            assert_eq!(a.elapsed().to_bits(), b.elapsed().to_bits());
        }
    }

    #[test]
    fn different_seed_different_trajectory() {
        let mut a = sim_for(PolicyKind::Vacancy, Dims::new(20, 4), 1);
        let mut b = sim_for(PolicyKind::Vacancy, Dims::new(20, 4), 2);
        let ra = step_records(&mut a, 50);
        let rb = step_records(&mut b, 50);
        assert_ne!(ra, rb);
    }
}

// ── Run loops ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_max_steps() {
        let mut cfg = config(PolicyKind::Vacancy, Dims::new(10, 3), 9);
        cfg.run.max_steps = 40;
        let mut sim = SimBuilder::from_config(&cfg).unwrap().build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.stop, StopReason::StepLimit);
        assert_eq!(summary.steps, 40);
        assert_eq!(summary.total_steps, 40);
        assert_eq!(sim.steps(), 40);

        // Already at the limit: a second run does nothing.
        let again = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(again.steps, 0);
    }

    #[test]
    fn run_steps_is_relative() {
        let mut sim = sim_for(PolicyKind::AtomRefined, Dims::new(10, 3), 9);
        sim.run_steps(5, &mut NoopObserver).unwrap();
        let summary = sim.run_steps(3, &mut NoopObserver).unwrap();
        assert_eq!(summary.steps, 3);
        assert_eq!(summary.total_steps, 8);
    }

    #[test]
    fn run_stops_at_max_time() {
        let mut cfg = config(PolicyKind::Vacancy, Dims::new(10, 3), 9);
        cfg.run.max_time = Some(f64::MIN_POSITIVE);
        let mut sim = SimBuilder::from_config(&cfg).unwrap().build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.stop, StopReason::TimeLimit);
        assert_eq!(summary.steps, 1);
        assert!(summary.elapsed >= f64::MIN_POSITIVE);
    }

    #[test]
    fn run_ends_cleanly_on_stall() {
        let policy = VacancyDriven::new(RateTable::uniform(1.0).unwrap());
        let mut sim = SimBuilder::new(policy, 0)
            .lattice(Lattice::empty(Dims::new(3, 3)).unwrap())
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        let summary = sim.run(&mut obs).unwrap();
        assert_eq!(summary.stop, StopReason::Stalled(StallReason::NoCandidates));
        assert_eq!(summary.steps, 0);
        assert_eq!(obs.stalls, [StallReason::NoCandidates]);
        assert_eq!(obs.ends.len(), 1);
    }

    #[test]
    fn observer_sees_every_step_and_snapshots() {
        let mut cfg = config(PolicyKind::AtomFixed, Dims::new(10, 3), 2);
        cfg.run.max_steps = 30;
        cfg.run.output_interval_steps = 10;
        let mut sim = SimBuilder::from_config(&cfg).unwrap().build().unwrap();
        let mut obs = Recorder::default();
        let summary = sim.run(&mut obs).unwrap();

        assert_eq!(obs.steps.len() as u64, summary.steps);
        let indices: Vec<u64> = obs.steps.iter().map(|r| r.step).collect();
        assert_eq!(indices, (1..=summary.steps).collect::<Vec<_>>());
        if summary.stop == StopReason::StepLimit {
            assert_eq!(obs.snapshots, [0, 10, 20, 30]);
        }
        assert_eq!(obs.ends, [summary]);
    }
}
