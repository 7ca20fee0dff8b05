//! Per-resource-type parameters.

use fg_core::SkillKind;

use crate::{ResourceError, ResourceResult};

/// Immutable parameters of one resource type.
///
/// Risk is resolved against a single uniform draw: `[0, risk_death)` kills,
/// `[risk_death, risk_death + risk_injury)` injures.  The two bands are
/// mutually exclusive, so their sum may not exceed 1.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDefinition {
    /// Activity name, e.g. `"plants"`.  Unique within a catalog.
    pub name: String,
    /// Mean energy yield in kcal.
    pub mean_energy: f64,
    /// Variance of the energy yield (kcal²).
    pub energy_variance: f64,
    /// Which skill the harvester is judged on.
    pub skill: SkillKind,
    /// Minimum skill level needed to attempt a harvest.
    pub skill_required: u32,
    pub risk_death: f64,
    pub risk_injury: f64,
    /// Days an injury from this resource lasts.  Values below 1 are treated
    /// as 1 when an injury is resolved.
    pub injury_days: u32,
    /// Energy paid up front each time an agent chooses this activity,
    /// whether or not a patch is found.
    pub activity_cost: i64,
}

impl ResourceDefinition {
    /// Standard deviation of the energy yield.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.energy_variance.sqrt()
    }

    /// Probability that one harvest ends in death or injury.
    #[inline]
    pub fn total_risk(&self) -> f64 {
        self.risk_death + self.risk_injury
    }

    /// Reject definitions that cannot be simulated.
    pub fn validate(&self) -> ResourceResult<()> {
        let fail = |reason: String| -> ResourceResult<()> {
            Err(ResourceError::InvalidDefinition { name: self.name.clone(), reason })
        };

        if self.name.trim().is_empty() {
            return fail("name must not be empty".into());
        }
        if !self.mean_energy.is_finite() {
            return fail(format!("mean energy must be finite, got {}", self.mean_energy));
        }
        if !self.energy_variance.is_finite() || self.energy_variance < 0.0 {
            return fail(format!(
                "energy variance must be finite and non-negative, got {}",
                self.energy_variance
            ));
        }
        for (label, p) in [("risk of death", self.risk_death), ("risk of injury", self.risk_injury)] {
            if !(0.0..=1.0).contains(&p) {
                return fail(format!("{label} must lie in [0, 1], got {p}"));
            }
        }
        if self.total_risk() > 1.0 {
            return fail(format!(
                "risk of death + risk of injury must not exceed 1, got {}",
                self.total_risk()
            ));
        }
        if self.activity_cost < 0 {
            return fail(format!("activity cost must be non-negative, got {}", self.activity_cost));
        }
        Ok(())
    }
}
