//! Harvest outcome resolution.
//!
//! # Draw order
//!
//! A qualified attempt always consumes, in this order:
//!
//! 1. one normal draw for the energy yield (two uniforms, see
//!    [`SimRng::normal`]),
//! 2. one uniform risk draw on `[0, 1)`.
//!
//! Both are taken whichever branch wins, so the stream position after a
//! harvest never depends on its result.

use fg_core::SimRng;

use crate::ResourceDefinition;

/// Everything the resolver needs to know about one harvest.
#[derive(Clone, Copy, Debug)]
pub struct HarvestAttempt<'a> {
    pub definition:      &'a ResourceDefinition,
    /// The harvester's level in `definition.skill`.
    pub skill:           u32,
    /// `true` if the harvester is currently weak.
    pub weak:            bool,
    /// Yield multiplier applied while weak.
    pub weak_multiplier: f64,
}

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarvestOutcome {
    /// Skill below the requirement.  Nothing drawn, nothing changed.
    Unqualified,
    Died,
    Injured { days: u32 },
    /// Energy gained, in kcal, after the weak multiplier.
    Harvested { energy: i64 },
}

/// Resolve one harvest attempt against the shared stream.
pub fn resolve_harvest(attempt: &HarvestAttempt<'_>, rng: &mut SimRng) -> HarvestOutcome {
    let def = attempt.definition;
    if attempt.skill < def.skill_required {
        return HarvestOutcome::Unqualified;
    }

    let sampled = rng.normal(def.mean_energy, def.std_dev()).max(0.0);
    let risk: f64 = rng.random();

    if risk < def.risk_death {
        return HarvestOutcome::Died;
    }
    if risk < def.risk_death + def.risk_injury {
        return HarvestOutcome::Injured { days: def.injury_days.max(1) };
    }

    let multiplier = if attempt.weak { attempt.weak_multiplier } else { 1.0 };
    // Float-to-int casts saturate, so huge means clamp to i64::MAX.
    HarvestOutcome::Harvested { energy: (sampled * multiplier).round() as i64 }
}
