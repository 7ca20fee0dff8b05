//! Fluent builder for constructing a [`Sim`].

use fg_agent::AgentStoreBuilder;
use fg_behavior::{ActivityPolicy, UniformPolicy};
use fg_core::{ResourceId, SimClock, SimRng};
use fg_grid::{Grid, Occupant};
use fg_resource::{PatchStore, ResourceCatalog, SpawnTable};
use tracing::debug;

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                      |
/// |--------------------|----------------------------------------------|
/// | `.catalog(c)`      | `ResourceCatalog::standard()`                |
/// | `.policy(p)`       | `UniformPolicy`                              |
/// | `.spawn_table(t)`  | resolved from `config.spawn_probabilities`   |
///
/// # Initialization order
///
/// Everything is drawn from one `SimRng` seeded with `config.seed`:
///
/// 1. per agent, in id order: foraging skill, hunting skill, sex, risk
///    tolerance, starting cell (x then y);
/// 2. the seeding spawn pass over every cell.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .policy(RiskWeightedPolicy::default())
///     .build()?;
/// sim.run_to_end(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: ActivityPolicy> {
    config:      SimConfig,
    catalog:     ResourceCatalog,
    policy:      P,
    spawn_table: Option<SpawnTable>,
}

impl SimBuilder<UniformPolicy> {
    /// Start from `config` with the standard catalog and uniform choice.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            catalog:     ResourceCatalog::standard(),
            policy:      UniformPolicy,
            spawn_table: None,
        }
    }
}

impl<P: ActivityPolicy> SimBuilder<P> {
    /// Replace the resource catalog.  Names in the configuration are
    /// resolved against it at build time.
    pub fn catalog(mut self, catalog: ResourceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the activity policy.
    pub fn policy<Q: ActivityPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:      self.config,
            catalog:     self.catalog,
            policy,
            spawn_table: self.spawn_table,
        }
    }

    /// Use `table` instead of `config.spawn_probabilities`.  It must have
    /// been built against the same catalog.
    pub fn spawn_table(mut self, table: SpawnTable) -> Self {
        self.spawn_table = Some(table);
        self
    }

    /// Validate inputs, create and place the population, seed the world,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        // ── Resolve names against the catalog ─────────────────────────────
        let activities = self
            .config
            .activities
            .iter()
            .map(|name| self.catalog.require(name))
            .collect::<Result<Vec<ResourceId>, _>>()?;
        if activities.is_empty() {
            return Err(SimError::Config("at least one activity must be configured".into()));
        }

        let spawn_table = match self.spawn_table {
            Some(t) => t,
            None => {
                let entries: Vec<(&str, f64)> = self
                    .config
                    .spawn_probabilities
                    .iter()
                    .map(|(name, p)| (name.as_str(), *p))
                    .collect();
                SpawnTable::from_names(&self.catalog, &entries)?
            }
        };

        // ── Population and placement ──────────────────────────────────────
        let mut rng = SimRng::new(self.config.seed);
        let mut grid = Grid::new(self.config.width, self.config.height)?;

        let agents = AgentStoreBuilder::new(self.config.initial_population)
            .starting_energy(self.config.starting_energy)
            .foraging_skill_range(self.config.foraging_skill.0, self.config.foraging_skill.1)
            .hunting_skill_range(self.config.hunting_skill.0, self.config.hunting_skill.1)
            .build_with(&mut rng, |agent, rng| {
                let cell = grid.random_cell(rng);
                grid.place(Occupant::Agent(agent.id()), cell)?;
                agent.relocate(cell);
                Ok::<(), SimError>(())
            })?;

        // ── Seed the world ────────────────────────────────────────────────
        let mut patches = PatchStore::new();
        let seeded = patches.seed(&mut grid, &spawn_table, &mut rng)?;
        debug!(
            agents = agents.count(),
            patches = seeded,
            width = grid.width(),
            height = grid.height(),
            "simulation initialised"
        );

        Ok(Sim {
            params:       self.config.survival_params(),
            config:       self.config,
            clock:        SimClock::new(),
            rng,
            grid,
            agents,
            patches,
            catalog:      self.catalog,
            spawn_table,
            activities,
            policy:       self.policy,
            last_summary: None,
        })
    }
}
