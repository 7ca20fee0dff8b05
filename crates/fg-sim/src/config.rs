//! Run configuration.

use fg_agent::SurvivalParams;

use crate::{SimError, SimResult};

/// Everything needed to initialise a run, apart from the resource catalog
/// and the activity policy.
///
/// Activities and spawn probabilities refer to resources by name; the
/// builder resolves them against the catalog and rejects unknown names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub width:  u32,
    pub height: u32,

    /// Agents created at initialization.
    pub initial_population: usize,
    /// kcal each agent starts with.
    pub starting_energy:    i64,

    /// kcal burned per day.
    pub daily_requirement:           i64,
    /// Consecutive weak days survived; one more is fatal.
    pub max_weak_days:               u32,
    /// Yield multiplier for a weak harvester, in `[0, 1]`.
    pub weak_multiplier:             f64,
    /// Share of the daily requirement burned on an injured rest day.
    pub injury_rest_fraction:        f64,
    /// Extra daily kcal for a pregnant agent.
    pub pregnancy_extra_requirement: i64,

    /// Inclusive `(min, max)` range foraging skill is drawn from.
    pub foraging_skill: (u32, u32),
    /// Inclusive `(min, max)` range hunting skill is drawn from.
    pub hunting_skill:  (u32, u32),

    /// Resource names an agent may choose between each day.
    pub activities:          Vec<String>,
    /// `(resource name, probability)` checked per empty cell, in order.
    pub spawn_probabilities: Vec<(String, f64)>,

    /// Seed of the shared random stream.
    pub seed:          u64,
    /// Days simulated by [`Sim::run_to_end`][crate::Sim::run_to_end].
    pub steps_per_run: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                       10,
            height:                      10,
            initial_population:          10,
            starting_energy:             3_000,
            daily_requirement:           50,
            max_weak_days:               20,
            weak_multiplier:             0.5,
            injury_rest_fraction:        0.5,
            pregnancy_extra_requirement: 0,
            foraging_skill:              (0, 4),
            hunting_skill:               (0, 8),
            activities:                  vec![
                "plants".into(),
                "small_game".into(),
                "large_game".into(),
            ],
            spawn_probabilities:         vec![
                ("plants".into(), 0.02),
                ("small_game".into(), 0.005),
                ("large_game".into(), 0.001),
            ],
            seed:                        42,
            steps_per_run:               100,
        }
    }
}

impl SimConfig {
    /// Reject values that cannot be simulated.  Resource names are checked
    /// later, against the catalog.
    pub fn validate(&self) -> SimResult<()> {
        let fail = |msg: String| -> SimResult<()> { Err(SimError::Config(msg)) };

        if self.width == 0 || self.height == 0 {
            return fail(format!("grid must be at least 1×1, got {}×{}", self.width, self.height));
        }
        if self.daily_requirement < 0 {
            return fail(format!("daily requirement must be ≥ 0, got {}", self.daily_requirement));
        }
        if self.pregnancy_extra_requirement < 0 {
            return fail(format!(
                "pregnancy extra requirement must be ≥ 0, got {}",
                self.pregnancy_extra_requirement
            ));
        }
        if !(0.0..=1.0).contains(&self.weak_multiplier) {
            return fail(format!("weak multiplier must lie in [0, 1], got {}", self.weak_multiplier));
        }
        if !(0.0..=1.0).contains(&self.injury_rest_fraction) {
            return fail(format!(
                "injury rest fraction must lie in [0, 1], got {}",
                self.injury_rest_fraction
            ));
        }
        for (label, (min, max)) in [("foraging", self.foraging_skill), ("hunting", self.hunting_skill)] {
            if min > max {
                return fail(format!("{label} skill range {min}..={max} is empty"));
            }
        }
        Ok(())
    }

    /// The energy-balance subset of the configuration.
    pub fn survival_params(&self) -> SurvivalParams {
        SurvivalParams {
            daily_requirement:           self.daily_requirement,
            max_weak_days:               self.max_weak_days,
            injury_rest_fraction:        self.injury_rest_fraction,
            pregnancy_extra_requirement: self.pregnancy_extra_requirement,
        }
    }
}
