//! Survival transitions.
//!
//! These are the building blocks of one agent day; the day itself is
//! sequenced by `fg-sim`.  Each method mutates only the agent it is called
//! on and does nothing once that agent is dead.

use fg_core::{AgentStatus, Cell, ResourceId};
use tracing::debug;

use crate::ForagerAgent;

/// Energy-balance parameters shared by every agent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurvivalParams {
    /// kcal consumed per day, and the threshold below which an agent is weak.
    pub daily_requirement:           i64,
    /// Consecutive weak days survived; one more is fatal.
    pub max_weak_days:               u32,
    /// Share of the daily requirement consumed on an injured rest day.
    pub injury_rest_fraction:        f64,
    /// Added to the daily requirement of a pregnant agent.
    pub pregnancy_extra_requirement: i64,
}

impl Default for SurvivalParams {
    fn default() -> Self {
        Self {
            daily_requirement:           50,
            max_weak_days:               20,
            injury_rest_fraction:        0.5,
            pregnancy_extra_requirement: 0,
        }
    }
}

impl SurvivalParams {
    /// kcal burned on an injured rest day.
    pub fn rest_requirement(&self) -> i64 {
        (self.daily_requirement as f64 * self.injury_rest_fraction).round() as i64
    }
}

/// Result of an injured agent's rest day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestOutcome {
    /// Agent was not injured (or is dead); nothing happened.
    NotResting,
    StillInjured { days_remaining: u32 },
    Recovered(AgentStatus),
}

/// Result of the end-of-day survival check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurvivalChange {
    /// Dead agent; nothing checked.
    Skipped,
    Fed,
    Weakened { weak_days: u32 },
    Starved { weak_days: u32 },
}

impl ForagerAgent {
    /// Injured rest day: count down the injury, burn the reduced
    /// requirement, and leave `Injured` once the countdown reaches zero.
    ///
    /// Also counts the day towards `days_alive`.  The agent neither moves
    /// nor forages on a rest day.
    pub fn rest_injured(&mut self, params: &SurvivalParams) -> RestOutcome {
        if self.status != AgentStatus::Injured {
            return RestOutcome::NotResting;
        }
        self.injury_days_remaining = self.injury_days_remaining.saturating_sub(1);
        self.energy = self.energy.saturating_sub(params.rest_requirement());
        self.days_alive += 1;

        if self.injury_days_remaining > 0 {
            self.reasoning = format!("resting, {} injury days left", self.injury_days_remaining);
            return RestOutcome::StillInjured { days_remaining: self.injury_days_remaining };
        }

        self.status = if self.energy >= params.daily_requirement {
            AgentStatus::Healthy
        } else {
            AgentStatus::Weak
        };
        self.reasoning = format!("recovered from injury, now {}", self.status);
        debug!(agent = %self.id, status = %self.status, energy = self.energy, "recovered");
        RestOutcome::Recovered(self.status)
    }

    /// Pay the up-front energy cost of an activity.
    pub fn pay_activity_cost(&mut self, cost: i64) {
        if self.is_alive() {
            self.energy = self.energy.saturating_sub(cost);
        }
    }

    /// Add a successful harvest of `kind`.
    pub fn gain(&mut self, kind: ResourceId, energy: i64) {
        if !self.is_alive() {
            return;
        }
        self.energy = self.energy.saturating_add(energy);
        *self.consumed.entry(kind).or_insert(0) += 1;
    }

    /// Enter `Injured` for `days` (at least one) days.
    pub fn become_injured(&mut self, days: u32) {
        if !self.is_alive() {
            return;
        }
        self.status = AgentStatus::Injured;
        self.injury_days_remaining = days.max(1);
        debug!(agent = %self.id, days = self.injury_days_remaining, "injured");
    }

    /// Enter the terminal `Dead` state, recording `cause`.
    ///
    /// Returns `false` if the agent was already dead.
    pub fn die(&mut self, cause: impl Into<String>) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.status = AgentStatus::Dead;
        self.injury_days_remaining = 0;
        self.reasoning = cause.into();
        debug!(agent = %self.id, cause = %self.reasoning, days_alive = self.days_alive, "died");
        true
    }

    /// Burn the day's requirement, plus the pregnancy surcharge if pregnant.
    pub fn consume_daily(&mut self, params: &SurvivalParams) {
        if !self.is_alive() {
            return;
        }
        let mut requirement = params.daily_requirement;
        if self.pregnant {
            requirement = requirement.saturating_add(params.pregnancy_extra_requirement);
        }
        self.energy = self.energy.saturating_sub(requirement);
    }

    /// End-of-day survival check.
    ///
    /// Below the requirement the weak-day streak grows, and the agent dies
    /// once it exceeds `max_weak_days`.  At or above the requirement the
    /// streak resets.  An agent injured earlier today stays `Injured` unless
    /// it starves.
    pub fn update_survival(&mut self, params: &SurvivalParams) -> SurvivalChange {
        if !self.is_alive() {
            return SurvivalChange::Skipped;
        }
        if self.energy < params.daily_requirement {
            self.weak_days += 1;
            if self.weak_days > params.max_weak_days {
                let weak_days = self.weak_days;
                self.die(format!("starved after {weak_days} weak days"));
                return SurvivalChange::Starved { weak_days };
            }
            if self.status != AgentStatus::Injured {
                self.status = AgentStatus::Weak;
            }
            return SurvivalChange::Weakened { weak_days: self.weak_days };
        }
        self.weak_days = 0;
        if self.status != AgentStatus::Injured {
            self.status = AgentStatus::Healthy;
        }
        SurvivalChange::Fed
    }

    /// Count a completed day towards `days_alive`.
    pub fn finish_day(&mut self) {
        if self.is_alive() {
            self.days_alive += 1;
        }
    }

    /// Record why the day went the way it did.
    pub fn set_reasoning(&mut self, reasoning: impl Into<String>) {
        if self.is_alive() {
            self.reasoning = reasoning.into();
        }
    }

    /// Mark the agent pregnant (or not).  Ignored for dead agents.
    pub fn set_pregnant(&mut self, pregnant: bool) {
        if self.is_alive() {
            self.pregnant = pregnant;
        }
    }

    /// Mirror a grid move.  Ignored for dead agents, which only ever leave
    /// the grid.
    pub fn relocate(&mut self, cell: Cell) {
        if self.is_alive() {
            self.position = Some(cell);
        }
    }

    /// Mirror removal from the grid.
    pub fn clear_position(&mut self) {
        self.position = None;
    }
}
