//! Unit tests for fg-behavior.

use fg_agent::ForagerAgent;
use fg_core::{AgentId, Day, ResourceId, Sex, SimRng, SkillKind};
use fg_resource::{ResourceCatalog, ResourceDefinition};

use crate::{ActivityPolicy, PolicyContext, RiskWeightedPolicy, UniformPolicy};

fn agent(sex: Sex, tolerance: f64) -> ForagerAgent {
    ForagerAgent::new(AgentId(1), 1_000, 4, 8).with_traits(sex, tolerance)
}

fn definition(name: &str, risk_death: f64, risk_injury: f64) -> ResourceDefinition {
    ResourceDefinition {
        name:            name.into(),
        mean_energy:     500.0,
        energy_variance: 10.0,
        skill:           SkillKind::Foraging,
        skill_required:  0,
        risk_death,
        risk_injury,
        injury_days:     1,
        activity_cost:   0,
    }
}

fn tally<P: ActivityPolicy>(policy: &P, agent: &ForagerAgent, ctx: &PolicyContext<'_>, n: usize) -> Vec<usize> {
    let mut rng = SimRng::new(7);
    let mut counts = vec![0; ctx.activities.len()];
    for _ in 0..n {
        let id = policy.choose(agent, ctx, &mut rng).unwrap();
        let slot = ctx.activities.iter().position(|&a| a == id).unwrap();
        counts[slot] += 1;
    }
    counts
}

// ── UniformPolicy ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod uniform {
    use super::*;

    #[test]
    fn empty_activity_set_chooses_nothing() {
        let catalog = ResourceCatalog::standard();
        let ctx = PolicyContext::new(Day::ZERO, &catalog, &[]);
        let mut rng = SimRng::new(1);
        assert_eq!(UniformPolicy.choose(&agent(Sex::Male, 0.5), &ctx, &mut rng), None);
    }

    #[test]
    fn covers_every_activity() {
        let catalog = ResourceCatalog::standard();
        let ids: Vec<ResourceId> = catalog.ids().collect();
        let ctx = PolicyContext::new(Day::ZERO, &catalog, &ids);
        let counts = tally(&UniformPolicy, &agent(Sex::Female, 0.0), &ctx, 3_000);
        assert!(counts.iter().all(|&c| c > 800), "{counts:?}");
    }

    #[test]
    fn deterministic_for_same_seed() {
        let catalog = ResourceCatalog::standard();
        let ids: Vec<ResourceId> = catalog.ids().collect();
        let ctx = PolicyContext::new(Day(3), &catalog, &ids);
        let a = agent(Sex::Male, 0.2);
        let run = |seed| {
            let mut rng = SimRng::new(seed);
            (0..50).map(|_| UniformPolicy.choose(&a, &ctx, &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}

// ── RiskWeightedPolicy ────────────────────────────────────────────────────────

#[cfg(test)]
mod weighted {
    use super::*;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new(vec![
            definition("safe", 0.0, 0.0),
            definition("risky", 0.2, 0.3),
            definition("deadly", 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_negative_factors() {
        assert!(RiskWeightedPolicy::new(-1.0, 1.0, 1.0).is_err());
        assert!(RiskWeightedPolicy::new(1.0, f64::NAN, 1.0).is_err());
        assert!(RiskWeightedPolicy::new(1.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn fearless_agent_weighs_all_equally() {
        let catalog = catalog();
        let ids: Vec<ResourceId> = catalog.ids().collect();
        let ctx = PolicyContext::new(Day::ZERO, &catalog, &ids);
        let policy = RiskWeightedPolicy::default();
        let a = agent(Sex::Male, 1.0);
        assert_eq!(policy.caution(&a), 0.0);
        assert_eq!(policy.weights(&a, &ctx), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn cautious_agent_never_picks_certain_death() {
        let catalog = catalog();
        let ids: Vec<ResourceId> = catalog.ids().collect();
        let ctx = PolicyContext::new(Day::ZERO, &catalog, &ids);
        let counts = tally(&RiskWeightedPolicy::default(), &agent(Sex::Female, 0.0), &ctx, 2_000);
        assert_eq!(counts[2], 0);
        assert!(counts[0] > counts[1], "{counts:?}");
    }

    #[test]
    fn females_more_cautious_than_males() {
        let policy = RiskWeightedPolicy::default();
        assert!(policy.caution(&agent(Sex::Female, 0.3)) > policy.caution(&agent(Sex::Male, 0.3)));
    }

    #[test]
    fn all_zero_weights_still_choose() {
        let catalog = ResourceCatalog::new(vec![definition("deadly", 1.0, 0.0)]).unwrap();
        let ids: Vec<ResourceId> = catalog.ids().collect();
        let ctx = PolicyContext::new(Day::ZERO, &catalog, &ids);
        let mut rng = SimRng::new(3);
        let chosen = RiskWeightedPolicy::default().choose(&agent(Sex::Female, 0.0), &ctx, &mut rng);
        assert_eq!(chosen, Some(ResourceId(0)));
    }

    #[test]
    fn one_draw_per_choice() {
        let catalog = catalog();
        let ids: Vec<ResourceId> = catalog.ids().collect();
        let ctx = PolicyContext::new(Day::ZERO, &catalog, &ids);
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        RiskWeightedPolicy::default().choose(&agent(Sex::Male, 0.4), &ctx, &mut a);
        let _: f64 = b.random();
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
