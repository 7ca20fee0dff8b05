//! One agent's day.
//!
//! ```text
//! injured?  ── yes ─► rest: count down, burn the reduced requirement,
//!    │                 recover to healthy/weak at zero.  End of turn.
//!    no
//!    ▼
//! choose activity ─► pay its cost ─► move to a random neighbor cell
//!    ─► matching patch here? ─ no ─► (nothing found)
//!    ─► skill ≥ requirement? ─ no ─► (too unskilled, patch untouched)
//!    ─► resolve: died ─► Dead, turn ends at once
//!                injured ─► patch used up, Injured, no energy
//!                harvested ─► patch used up, energy gained
//!    ─► burn daily requirement ─► survival update ─► days_alive += 1
//! ```
//!
//! A dead agent is only marked here.  The caller removes it from the grid
//! during cleanup.

use fg_agent::{ForagerAgent, SurvivalParams};
use fg_behavior::{ActivityPolicy, PolicyContext};
use fg_core::{AgentId, AgentStatus, Day, ResourceId, SimRng, SkillKind};
use fg_grid::{Grid, Occupant};
use fg_resource::{
    HarvestAttempt, HarvestOutcome, PatchStore, ResourceCatalog, ResourceError, resolve_harvest,
};
use tracing::debug;

use crate::{AgentDayRecord, Sim, SimError, SimResult};

/// The parts of the world an acting agent touches.
struct Surroundings<'a> {
    grid:            &'a mut Grid,
    patches:         &'a mut PatchStore,
    catalog:         &'a ResourceCatalog,
    rng:             &'a mut SimRng,
    weak_multiplier: f64,
}

impl<P: ActivityPolicy> Sim<P> {
    /// Run agent `id`'s turn for `day`.  `None` if the agent is unknown or
    /// already dead.
    pub(crate) fn agent_day(&mut self, id: AgentId, day: Day) -> SimResult<Option<AgentDayRecord>> {
        let Some(agent) = self.agents.get_mut(id) else {
            return Ok(None);
        };
        if !agent.is_alive() {
            return Ok(None);
        }

        if agent.status() == AgentStatus::Injured {
            agent.rest_injured(&self.params);
            return Ok(Some(record(agent, day, None)));
        }

        let ctx = PolicyContext::new(day, &self.catalog, &self.activities);
        let chosen = self.policy.choose(agent, &ctx, &mut self.rng);

        match chosen {
            Some(kind) => {
                let mut here = Surroundings {
                    grid:            &mut self.grid,
                    patches:         &mut self.patches,
                    catalog:         &self.catalog,
                    rng:             &mut self.rng,
                    weak_multiplier: self.config.weak_multiplier,
                };
                attempt_activity(agent, kind, &mut here)?;
            }
            None => agent.set_reasoning("had nothing to do"),
        }

        if agent.is_alive() {
            end_of_day(agent, &self.params);
        }
        Ok(Some(record(agent, day, chosen)))
    }
}

/// Pay, move, and try to harvest `kind` on the destination cell.
fn attempt_activity(
    agent: &mut ForagerAgent,
    kind:  ResourceId,
    here:  &mut Surroundings<'_>,
) -> SimResult<()> {
    let catalog = here.catalog;
    let def = catalog
        .get(kind)
        .ok_or_else(|| ResourceError::UnknownResource(kind.to_string()))?;
    let name = def.name.as_str();

    agent.pay_activity_cost(def.activity_cost);

    let me = Occupant::Agent(agent.id());
    let from = here.grid.position_of(me).ok_or(SimError::AgentNotPlaced(agent.id()))?;
    let to = here.grid.random_neighbor(from, here.rng)?;
    here.grid.move_to(me, to)?;
    agent.relocate(to);

    let Some(patch) = here.patches.find_harvestable(here.grid, to, kind)? else {
        agent.set_reasoning(format!("found no {name}"));
        return Ok(());
    };

    let attempt = HarvestAttempt {
        definition:      def,
        skill:           agent.skill(def.skill),
        weak:            agent.status() == AgentStatus::Weak,
        weak_multiplier: here.weak_multiplier,
    };
    let verb = match def.skill {
        SkillKind::Foraging => "gathering",
        SkillKind::Hunting  => "hunting",
    };

    match resolve_harvest(&attempt, here.rng) {
        HarvestOutcome::Unqualified => {
            agent.set_reasoning(format!("skill too low for {name}"));
        }
        HarvestOutcome::Died => {
            agent.die(format!("killed {verb} {name}"));
        }
        HarvestOutcome::Injured { days } => {
            here.patches.harvest(patch);
            agent.become_injured(days);
            agent.set_reasoning(format!("injured {verb} {name}, {days} days to recover"));
        }
        HarvestOutcome::Harvested { energy } => {
            here.patches.harvest(patch);
            agent.gain(kind, energy);
            agent.set_reasoning(format!("harvested {energy} kcal of {name}"));
            debug!(agent = %agent.id(), %patch, energy, resource = name, "harvested");
        }
    }
    Ok(())
}

/// Daily requirement, survival update, and the day count.
fn end_of_day(agent: &mut ForagerAgent, params: &SurvivalParams) {
    agent.consume_daily(params);
    agent.update_survival(params);
    agent.finish_day();
}

fn record(agent: &ForagerAgent, day: Day, activity: Option<ResourceId>) -> AgentDayRecord {
    AgentDayRecord {
        day,
        agent:    agent.id(),
        name:     agent.name().to_owned(),
        sex:      agent.sex(),
        status:   agent.status(),
        energy:   agent.energy(),
        position: agent.position(),
        activity,
        cause:    agent.reasoning().to_owned(),
        consumed: agent.consumed().clone(),
    }
}
