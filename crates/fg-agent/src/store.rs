//! `AgentStore`: the population, living and dead.

use fg_core::{AgentId, AgentStatus};

use crate::ForagerAgent;

/// Every agent created for a run, indexed by `AgentId`.
///
/// Dead agents are never removed: their final record stays queryable for
/// the lifetime of the simulation.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<ForagerAgent>,
}

impl AgentStore {
    pub(crate) fn new(agents: Vec<ForagerAgent>) -> Self {
        Self { agents }
    }

    /// Agents ever created.
    #[inline]
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    fn slot(id: AgentId) -> Option<usize> {
        id.index().checked_sub(AgentId::FIRST.index())
    }

    pub fn get(&self, id: AgentId) -> Option<&ForagerAgent> {
        Self::slot(id).and_then(|i| self.agents.get(i))
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut ForagerAgent> {
        Self::slot(id).and_then(move |i| self.agents.get_mut(i))
    }

    /// All agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ForagerAgent> + '_ {
        self.agents.iter()
    }

    /// Ids of living agents, ascending.
    pub fn living_ids(&self) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|a| a.is_alive())
            .map(ForagerAgent::id)
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_alive()).count()
    }

    pub fn count_with(&self, status: AgentStatus) -> usize {
        self.agents.iter().filter(|a| a.status() == status).count()
    }

    /// Mean energy of living agents; 0.0 with nobody alive.
    ///
    /// Summed in `i128`, which cannot overflow for any `i64` population.
    pub fn mean_living_energy(&self) -> f64 {
        let (sum, n) = self
            .agents
            .iter()
            .filter(|a| a.is_alive())
            .fold((0i128, 0usize), |(s, n), a| (s + i128::from(a.energy()), n + 1));
        sum as f64 / n.max(1) as f64
    }
}
