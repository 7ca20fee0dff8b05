//! The `ActivityPolicy` trait, the extension point for agent decisions.

use fg_agent::ForagerAgent;
use fg_core::{ResourceId, SimRng};

use crate::PolicyContext;

/// Chooses which activity a healthy or weak agent attempts today.
///
/// Called once per acting agent per day, in activation order.  The
/// implementation must draw only from `rng` so that a run stays
/// reproducible from its seed.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysFirst;
///
/// impl ActivityPolicy for AlwaysFirst {
///     fn choose(&self, _: &ForagerAgent, ctx: &PolicyContext<'_>, _: &mut SimRng) -> Option<ResourceId> {
///         ctx.activities.first().copied()
///     }
/// }
/// ```
pub trait ActivityPolicy: Send + Sync + 'static {
    /// Return the chosen activity, or `None` when `ctx.activities` is empty.
    fn choose(
        &self,
        agent: &ForagerAgent,
        ctx:   &PolicyContext<'_>,
        rng:   &mut SimRng,
    ) -> Option<ResourceId>;
}
