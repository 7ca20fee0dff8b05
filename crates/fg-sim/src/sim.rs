//! The `Sim` struct and its day loop.

use fg_agent::{AgentStore, ForagerAgent, SurvivalParams};
use fg_behavior::ActivityPolicy;
use fg_core::{AgentId, AgentStatus, Cell, Day, PatchId, ResourceId, SimClock, SimRng};
use fg_grid::{Grid, Occupant};
use fg_resource::{PatchStore, ResourceCatalog, ResourcePatch, SpawnTable};
use tracing::{info, warn};

use crate::{DaySummary, RunOutcome, SimConfig, SimObserver, SimResult, StopReason};

/// The main simulation runner.
///
/// `Sim<P>` owns the world, the population, and the shared random stream,
/// and drives the three-phase day:
///
/// 1. **Spawn pass**: every cell without a patch may grow one, so patches
///    appearing today are harvestable today.
/// 2. **Activation pass**: every living agent takes one turn, in an order
///    freshly shuffled each day (see [`day`](crate::day)).  Agents that die
///    are only marked.
/// 3. **Cleanup**: agents that died today leave the grid and their
///    positions are cleared; depleted patches are swept.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: ActivityPolicy> {
    pub(crate) config:       SimConfig,
    pub(crate) clock:        SimClock,
    pub(crate) rng:          SimRng,
    pub(crate) grid:         Grid,
    pub(crate) agents:       AgentStore,
    pub(crate) patches:      PatchStore,
    pub(crate) catalog:      ResourceCatalog,
    pub(crate) spawn_table:  SpawnTable,
    pub(crate) activities:   Vec<ResourceId>,
    pub(crate) params:       SurvivalParams,
    pub(crate) policy:       P,
    pub(crate) last_summary: Option<DaySummary>,
}

impl<P: ActivityPolicy> Sim<P> {
    // ── Step control ──────────────────────────────────────────────────────

    /// Simulate exactly one day and return its summary.
    ///
    /// A day with nobody alive still runs the spawn pass and cleanup; it is
    /// not an error.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DaySummary> {
        let day = self.clock.current_day;
        observer.on_day_start(day);

        // ── Phase 1: spawn pass ───────────────────────────────────────────
        let spawned = self.patches.spawn_pass(&mut self.grid, &self.spawn_table, &mut self.rng)?;

        // ── Phase 2: activation pass ──────────────────────────────────────
        //
        // Agents that die here stay on the grid until phase 3, so nothing
        // is removed from a structure while the pass is still running.
        let mut order = self.agents.living_ids();
        self.rng.shuffle(&mut order);

        let mut fallen = Vec::new();
        for id in order {
            let Some(record) = self.agent_day(id, day)? else {
                continue;
            };
            if record.status == AgentStatus::Dead {
                fallen.push(id);
            }
            observer.on_agent_day(&record);
        }

        // ── Phase 3: cleanup ──────────────────────────────────────────────
        for &id in &fallen {
            self.grid.remove(Occupant::Agent(id));
            if let Some(agent) = self.agents.get_mut(id) {
                agent.clear_position();
            }
        }
        let swept = self.patches.sweep_depleted(&mut self.grid);

        self.clock.advance();
        let summary = self.census(day);
        info!(
            %day,
            alive = summary.alive,
            dead = summary.dead,
            injured = summary.injured,
            weak = summary.weak,
            mean_energy = summary.mean_energy,
            spawned,
            swept = swept.len(),
            died = fallen.len(),
            "day complete"
        );
        self.last_summary = Some(summary);
        observer.on_day_end(&summary);
        Ok(summary)
    }

    /// Simulate up to `days` days, stopping early once nobody is alive.
    pub fn run<O: SimObserver>(&mut self, days: u64, observer: &mut O) -> SimResult<RunOutcome> {
        let mut days_run = 0;
        while days_run < days && !self.is_extinct() {
            self.step(observer)?;
            days_run += 1;
        }

        let stopped = if self.is_extinct() {
            warn!(days_run, day = %self.clock.current_day, "population extinct, stopping run");
            StopReason::Extinct
        } else {
            StopReason::StepsExhausted
        };
        let outcome = RunOutcome { days_run, stopped };
        observer.on_run_end(&outcome);
        Ok(outcome)
    }

    /// [`run`](Self::run) for `config.steps_per_run` days.
    pub fn run_to_end<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunOutcome> {
        self.run(self.config.steps_per_run, observer)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Days completed so far.
    #[inline]
    pub fn days_elapsed(&self) -> u64 {
        self.clock.days_elapsed()
    }

    /// The next day to be simulated.
    #[inline]
    pub fn current_day(&self) -> Day {
        self.clock.current_day
    }

    /// `true` once no agent is alive.
    pub fn is_extinct(&self) -> bool {
        self.agents.alive_count() == 0
    }

    /// Summary returned by the most recent [`step`](Self::step).
    #[inline]
    pub fn summary(&self) -> Option<&DaySummary> {
        self.last_summary.as_ref()
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&ForagerAgent> {
        self.agents.get(id)
    }

    /// Every agent ever created, dead ones included.
    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    #[inline]
    pub fn patch(&self, id: PatchId) -> Option<&ResourcePatch> {
        self.patches.get(id)
    }

    /// Active patches.
    #[inline]
    pub fn patches(&self) -> &PatchStore {
        &self.patches
    }

    /// What stands on `cell`.
    pub fn occupants_at(&self, cell: Cell) -> SimResult<&[Occupant]> {
        Ok(self.grid.occupants_at(cell)?)
    }

    /// Configuration the run was built from.  Read-only once built.
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Resolved activity set, in configuration order.
    #[inline]
    pub fn activities(&self) -> &[ResourceId] {
        &self.activities
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ── Interventions ─────────────────────────────────────────────────────

    /// Mark a living agent pregnant (or not).  Returns `false` for an
    /// unknown or dead agent.
    pub fn set_pregnant(&mut self, id: AgentId, pregnant: bool) -> bool {
        match self.agents.get_mut(id) {
            Some(agent) if agent.is_alive() => {
                agent.set_pregnant(pregnant);
                true
            }
            _ => false,
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn census(&self, day: Day) -> DaySummary {
        DaySummary {
            day,
            alive:       self.agents.alive_count(),
            dead:        self.agents.count_with(AgentStatus::Dead),
            injured:     self.agents.count_with(AgentStatus::Injured),
            weak:        self.agents.count_with(AgentStatus::Weak),
            mean_energy: self.agents.mean_living_energy(),
            patches:     self.patches.len(),
            spawned:     self.patches.spawned_total(),
            swept:       self.patches.swept_total(),
        }
    }
}
