//! Activity choice weighted by the agent's appetite for risk.
//!
//! Each activity gets weight `(1 - total_risk)^caution`, where
//!
//! ```text
//! caution = sex_factor * (1 - risk_tolerance) * tolerance_scale
//! ```
//!
//! A fully risk-tolerant agent (caution 0) weighs every activity equally; a
//! cautious one is pushed towards safe resources.  One uniform draw selects
//! from the cumulative weights.  If every weight is zero the draw falls back
//! to a uniform index so the stream still advances by exactly one value.

use fg_agent::ForagerAgent;
use fg_core::{ResourceId, Sex, SimRng};

use crate::{ActivityPolicy, BehaviorError, BehaviorResult, PolicyContext};

/// Risk-averse activity choice driven by sex and risk tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskWeightedPolicy {
    female_caution:  f64,
    male_caution:    f64,
    tolerance_scale: f64,
}

impl Default for RiskWeightedPolicy {
    fn default() -> Self {
        Self {
            female_caution:  1.5,
            male_caution:    1.0,
            tolerance_scale: 4.0,
        }
    }
}

impl RiskWeightedPolicy {
    /// # Errors
    ///
    /// [`BehaviorError::Config`] if any factor is negative or not finite.
    pub fn new(female_caution: f64, male_caution: f64, tolerance_scale: f64) -> BehaviorResult<Self> {
        for (label, v) in [
            ("female caution", female_caution),
            ("male caution", male_caution),
            ("tolerance scale", tolerance_scale),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BehaviorError::Config(format!(
                    "{label} must be a non-negative finite number, got {v}"
                )));
            }
        }
        Ok(Self { female_caution, male_caution, tolerance_scale })
    }

    /// Exponent applied to each activity's survival probability.
    pub fn caution(&self, agent: &ForagerAgent) -> f64 {
        let sex_factor = match agent.sex() {
            Sex::Female => self.female_caution,
            Sex::Male   => self.male_caution,
        };
        sex_factor * (1.0 - agent.risk_tolerance()) * self.tolerance_scale
    }

    /// Unnormalised weight of each activity in `ctx.activities`, in order.
    pub fn weights(&self, agent: &ForagerAgent, ctx: &PolicyContext<'_>) -> Vec<f64> {
        let caution = self.caution(agent);
        ctx.activities
            .iter()
            .map(|&id| {
                let safety = ctx
                    .catalog
                    .get(id)
                    .map_or(0.0, |def| (1.0 - def.total_risk()).clamp(0.0, 1.0));
                safety.powf(caution)
            })
            .collect()
    }
}

impl ActivityPolicy for RiskWeightedPolicy {
    fn choose(
        &self,
        agent: &ForagerAgent,
        ctx:   &PolicyContext<'_>,
        rng:   &mut SimRng,
    ) -> Option<ResourceId> {
        if ctx.activities.is_empty() {
            return None;
        }
        let weights = self.weights(agent, ctx);
        let total: f64 = weights.iter().sum();
        let u: f64 = rng.random();

        if total <= 0.0 {
            let i = ((u * ctx.activities.len() as f64) as usize).min(ctx.activities.len() - 1);
            return ctx.activities.get(i).copied();
        }

        let target = u * total;
        let mut acc = 0.0;
        for (&id, &w) in ctx.activities.iter().zip(&weights) {
            acc += w;
            if target < acc {
                return Some(id);
            }
        }
        // Rounding left `target` at the very top: take the last weighted entry.
        ctx.activities
            .iter()
            .zip(&weights)
            .rev()
            .find(|(_, w)| **w > 0.0)
            .map(|(&id, _)| id)
    }
}
