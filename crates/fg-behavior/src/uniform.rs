//! Uniform activity choice.

use fg_agent::ForagerAgent;
use fg_core::{ResourceId, SimRng};

use crate::{ActivityPolicy, PolicyContext};

/// Picks any configured activity with equal probability, ignoring the agent.
///
/// Takes one draw per call when activities exist, none otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl ActivityPolicy for UniformPolicy {
    fn choose(
        &self,
        _agent: &ForagerAgent,
        ctx:    &PolicyContext<'_>,
        rng:    &mut SimRng,
    ) -> Option<ResourceId> {
        rng.choose(ctx.activities).copied()
    }
}
