//! Fluent builder for the initial population.
//!
//! # Usage
//!
//! ```rust
//! use fg_agent::AgentStoreBuilder;
//! use fg_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(10)
//!     .starting_energy(3_000)
//!     .foraging_skill_range(0, 4)
//!     .hunting_skill_range(0, 8)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.count(), 10);
//! ```

use fg_core::{AgentId, CoreError, CoreResult, Sex, SimRng};

use crate::{AgentStore, ForagerAgent};

/// Fluent builder for [`AgentStore`].
///
/// Per agent, in id order, draws: foraging skill, hunting skill, sex, risk
/// tolerance.  Placement on the grid is left to the caller (see
/// [`build_with`](Self::build_with)).
pub struct AgentStoreBuilder {
    count:           usize,
    starting_energy: i64,
    foraging:        (u32, u32),
    hunting:         (u32, u32),
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            starting_energy: 3_000,
            foraging:        (0, 4),
            hunting:         (0, 8),
        }
    }

    pub fn starting_energy(mut self, kcal: i64) -> Self {
        self.starting_energy = kcal;
        self
    }

    /// Inclusive range foraging skill is drawn from.
    pub fn foraging_skill_range(mut self, min: u32, max: u32) -> Self {
        self.foraging = (min, max);
        self
    }

    /// Inclusive range hunting skill is drawn from.
    pub fn hunting_skill_range(mut self, min: u32, max: u32) -> Self {
        self.hunting = (min, max);
        self
    }

    /// Draw every agent from `rng`.
    ///
    /// # Errors
    ///
    /// `CoreError::InvalidConfiguration` for an empty skill range or a
    /// population too large for `AgentId`.
    pub fn build(self, rng: &mut SimRng) -> CoreResult<AgentStore> {
        self.build_with(rng, |_, _| Ok::<(), CoreError>(()))
    }

    /// Like [`build`](Self::build), but calls `place` on each agent right
    /// after its traits are drawn, before the next agent is drawn.
    ///
    /// The simulation uses this to draw each agent's starting cell from the
    /// same stream, interleaved with the trait draws.
    pub fn build_with<E, F>(self, rng: &mut SimRng, mut place: F) -> Result<AgentStore, E>
    where
        E: From<CoreError>,
        F: FnMut(&mut ForagerAgent, &mut SimRng) -> Result<(), E>,
    {
        for (label, (min, max)) in [("foraging", self.foraging), ("hunting", self.hunting)] {
            if min > max {
                return Err(CoreError::InvalidConfiguration(format!(
                    "{label} skill range {min}..={max} is empty"
                ))
                .into());
            }
        }
        let last = u32::try_from(self.count)
            .ok()
            .and_then(|n| n.checked_add(AgentId::FIRST.0))
            .ok_or_else(|| {
                CoreError::InvalidConfiguration(format!("population of {} is too large", self.count))
            })?;

        let mut agents = Vec::with_capacity(self.count);
        for raw in AgentId::FIRST.0..last {
            let foraging = rng.gen_range(self.foraging.0..=self.foraging.1);
            let hunting = rng.gen_range(self.hunting.0..=self.hunting.1);
            let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
            let tolerance: f64 = rng.random();
            let mut agent = ForagerAgent::new(AgentId(raw), self.starting_energy, foraging, hunting)
                .with_traits(sex, tolerance);
            place(&mut agent, rng)?;
            agents.push(agent);
        }

        Ok(AgentStore::new(agents))
    }
}
