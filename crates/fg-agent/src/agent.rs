//! The forager record.

use std::collections::BTreeMap;

use fg_core::{AgentId, AgentStatus, Cell, ResourceId, Sex, SkillKind};

/// One forager.
///
/// Fields are read through accessors; every change goes through the
/// transition methods in [`survival`](crate::survival) so that a dead agent
/// can never be revived.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForagerAgent {
    pub(crate) id:                    AgentId,
    pub(crate) name:                  String,
    pub(crate) energy:                i64,
    pub(crate) status:                AgentStatus,
    pub(crate) foraging_skill:        u32,
    pub(crate) hunting_skill:         u32,
    pub(crate) sex:                   Sex,
    pub(crate) risk_tolerance:        f64,
    pub(crate) pregnant:              bool,
    pub(crate) weak_days:             u32,
    pub(crate) injury_days_remaining: u32,
    pub(crate) days_alive:            u64,
    pub(crate) position:              Option<Cell>,
    pub(crate) reasoning:             String,
    pub(crate) consumed:              BTreeMap<ResourceId, u32>,
}

impl ForagerAgent {
    /// A healthy agent named `Agent_<id>` with `energy` kcal and no position.
    pub fn new(id: AgentId, energy: i64, foraging_skill: u32, hunting_skill: u32) -> Self {
        Self {
            id,
            name: format!("Agent_{}", id.0),
            energy,
            status: AgentStatus::Healthy,
            foraging_skill,
            hunting_skill,
            sex: Sex::default(),
            risk_tolerance: 0.5,
            pregnant: false,
            weak_days: 0,
            injury_days_remaining: 0,
            days_alive: 0,
            position: None,
            reasoning: String::new(),
            consumed: BTreeMap::new(),
        }
    }

    /// Set sex and risk tolerance (clamped to `[0, 1]`).
    pub fn with_traits(mut self, sex: Sex, risk_tolerance: f64) -> Self {
        self.sex = sex;
        self.risk_tolerance = risk_tolerance.clamp(0.0, 1.0);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current energy in kcal.  May be negative.
    #[inline]
    pub fn energy(&self) -> i64 {
        self.energy
    }

    #[inline]
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    #[inline]
    pub fn foraging_skill(&self) -> u32 {
        self.foraging_skill
    }

    #[inline]
    pub fn hunting_skill(&self) -> u32 {
        self.hunting_skill
    }

    /// The agent's level in `kind`.
    pub fn skill(&self, kind: SkillKind) -> u32 {
        match kind {
            SkillKind::Foraging => self.foraging_skill,
            SkillKind::Hunting  => self.hunting_skill,
        }
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn risk_tolerance(&self) -> f64 {
        self.risk_tolerance
    }

    #[inline]
    pub fn is_pregnant(&self) -> bool {
        self.pregnant
    }

    /// Consecutive days ended below the daily requirement.
    #[inline]
    pub fn weak_days(&self) -> u32 {
        self.weak_days
    }

    #[inline]
    pub fn injury_days_remaining(&self) -> u32 {
        self.injury_days_remaining
    }

    #[inline]
    pub fn days_alive(&self) -> u64 {
        self.days_alive
    }

    /// Cell the agent stands on, `None` once removed from the grid.
    #[inline]
    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    /// Human-readable account of the agent's last day (or cause of death).
    #[inline]
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Lifetime harvest counts per resource type.
    #[inline]
    pub fn consumed(&self) -> &BTreeMap<ResourceId, u32> {
        &self.consumed
    }

    /// Lifetime harvests of `kind`.
    pub fn consumed_of(&self, kind: ResourceId) -> u32 {
        self.consumed.get(&kind).copied().unwrap_or(0)
    }
}
