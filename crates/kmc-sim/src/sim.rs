//! The `Sim` struct and its step loop.

use log::{info, trace, warn};

use kmc_core::{KmcError, KmcResult, RunConfig, SimClock, SimRng};
use kmc_events::{Enumerator, EventList, EventPolicy};
use kmc_lattice::Lattice;

use crate::{
    MoveRecord, RunSummary, SimObserver, StallReason, StepOutcome, StopReason, select_index,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The KMC stepper.
///
/// `Sim<P>` owns the lattice, the clock, the RNG and the enumerator; nothing
/// else can mutate them.  Each [`step`][Self::step] is atomic: it either
/// applies exactly one move and advances the clock once, or reports a stall
/// and changes nothing.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: EventPolicy> {
    pub(crate) lattice:    Lattice,
    pub(crate) enumerator: Enumerator<P>,
    pub(crate) clock:      SimClock,
    pub(crate) rng:        SimRng,
    pub(crate) run:        RunConfig,

    /// Candidates of the most recent enumeration (reused allocation).
    pub(crate) events:     EventList,
    /// Running sum of `events.rates()` (reused allocation).
    pub(crate) cumulative: Vec<f64>,
    /// Atom count at build time; conserved by every move.
    pub(crate) atoms:      usize,
}

impl<P: EventPolicy> Sim<P> {
    // ── Query surface ─────────────────────────────────────────────────────

    /// Current occupancy grid.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Elapsed simulated time, s.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Accepted steps since build.
    pub fn steps(&self) -> u64 {
        self.clock.steps()
    }

    /// Candidates enumerated by the most recent [`step`][Self::step].
    ///
    /// Reflects the lattice *before* that step's move was applied.
    pub fn last_events(&self) -> &EventList {
        &self.events
    }

    pub fn policy(&self) -> &P {
        self.enumerator.policy()
    }

    pub fn run_config(&self) -> &RunConfig {
        &self.run
    }

    /// Enumerate candidates for the current lattice without stepping.
    pub fn candidates(&self) -> KmcResult<EventList> {
        self.enumerator.enumerate(&self.lattice)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Perform one KMC step.
    ///
    /// # Errors
    /// Rate lookups without a configured entry, or an invariant violation
    /// while applying the selected move.  A stall is `Ok(Stalled(..))`.
    pub fn step(&mut self) -> KmcResult<StepOutcome> {
        // ① Enumerate.
        self.enumerator.enumerate_into(&self.lattice, &mut self.events)?;
        if self.events.is_empty() {
            return Ok(StepOutcome::Stalled(StallReason::NoCandidates));
        }

        self.cumulative.clear();
        let mut total_rate = 0.0;
        for &rate in self.events.rates() {
            total_rate += rate;
            self.cumulative.push(total_rate);
        }
        if total_rate <= 0.0 {
            return Ok(StepOutcome::Stalled(StallReason::ZeroTotalRate));
        }
        if !total_rate.is_finite() {
            return Err(KmcError::InvariantViolation(format!(
                "total event rate is not finite ({total_rate})"
            )));
        }

        // ② Select.
        let u = self.rng.open01();
        let index = select_index(&self.cumulative, self.events.rates(), u * total_rate)
            .ok_or_else(|| KmcError::InvariantViolation("no selectable event".into()))?;
        let event = self
            .events
            .get(index)
            .ok_or_else(|| KmcError::InvariantViolation(format!("event {index} out of range")))?;

        // ③ Apply.
        let destination = self.lattice.apply_move(event.site, event.direction)?;
        if self.lattice.atom_count() != self.atoms {
            return Err(KmcError::InvariantViolation(format!(
                "atom count changed from {} to {}",
                self.atoms,
                self.lattice.atom_count()
            )));
        }

        // ④ Advance time.
        let u_time = self.rng.open01();
        let dt = SimClock::waiting_time(u_time, total_rate);
        self.clock.advance(dt);

        let record = MoveRecord {
            step:        self.clock.steps(),
            source:      event.site,
            destination,
            direction:   event.direction,
            rate:        event.rate,
            total_rate,
            candidates:  self.events.len(),
            dt,
            elapsed:     self.clock.elapsed(),
        };
        trace!(
            "step {}: {} → {} ({}) rate {:.3e}/{:.3e}, dt {:.3e}",
            record.step, record.source, record.destination, record.direction,
            record.rate, record.total_rate, record.dt,
        );
        Ok(StepOutcome::Moved(record))
    }

    // ── Run loops ─────────────────────────────────────────────────────────

    /// Run until `RunConfig::max_steps` total steps, `max_time` elapsed
    /// seconds, or a stall, whichever comes first.
    ///
    /// Calls observer hooks after every step.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> KmcResult<RunSummary> {
        let target = self.run.max_steps;
        let max_time = self.run.max_time;
        self.drive(target, max_time, observer)
    }

    /// Run at most `n` more steps from the current position (ignores the
    /// configured limits).  Stops early on a stall.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> KmcResult<RunSummary> {
        let target = self.clock.steps().saturating_add(n);
        self.drive(target, None, observer)
    }

    fn drive<O: SimObserver>(
        &mut self,
        target_steps: u64,
        max_time:     Option<f64>,
        observer:     &mut O,
    ) -> KmcResult<RunSummary> {
        let start = self.clock.steps();
        let interval = self.run.output_interval_steps;
        if interval > 0 && start == 0 {
            observer.on_snapshot(&self.clock, &self.lattice);
        }

        let stop = loop {
            if self.clock.steps() >= target_steps {
                break StopReason::StepLimit;
            }
            if max_time.is_some_and(|t| self.clock.elapsed() >= t) {
                break StopReason::TimeLimit;
            }
            match self.step()? {
                StepOutcome::Moved(record) => {
                    observer.on_step(&record, &self.lattice);
                    if interval > 0 && record.step % interval == 0 {
                        observer.on_snapshot(&self.clock, &self.lattice);
                    }
                }
                StepOutcome::Stalled(reason) => {
                    warn!("stalled at {}: {reason}", self.clock);
                    observer.on_stall(&self.clock, reason);
                    break StopReason::Stalled(reason);
                }
            }
        };

        let summary = RunSummary {
            steps:       self.clock.steps() - start,
            total_steps: self.clock.steps(),
            elapsed:     self.clock.elapsed(),
            stop,
        };
        match stop {
            StopReason::Stalled(_) => info!("run ended on stall after {} steps", summary.steps),
            _ => info!(
                "run finished: {} steps, t = {:.6e} s ({:?})",
                summary.steps, summary.elapsed, stop
            ),
        }
        observer.on_run_end(&summary);
        Ok(summary)
    }
}
