//! Simulation observer trait for reporting and data collection.

use fg_core::{AgentId, Day};

use crate::{AgentDayRecord, DaySummary, RunOutcome};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the day loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The core never persists anything
/// itself; writers and renderers hook in here.
///
/// # Example: survivor printer
///
/// ```rust,ignore
/// struct Survivors;
///
/// impl SimObserver for Survivors {
///     fn on_day_end(&mut self, summary: &DaySummary) {
///         println!("{}: {} alive", summary.day, summary.alive);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each day, before the spawn pass.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after each agent's turn, in activation order.
    fn on_agent_day(&mut self, _record: &AgentDayRecord) {}

    /// Called once the cleanup phase has finished.
    fn on_day_end(&mut self, _summary: &DaySummary) {}

    /// Called when [`Sim::run`][crate::Sim::run] returns.
    fn on_run_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// In-memory history of every agent day and day summary.
///
/// A status feed can poll [`recent`](Self::recent); a writer can drain the
/// whole log after a run.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    records:   Vec<AgentDayRecord>,
    summaries: Vec<DaySummary>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every agent-day record, oldest first.
    #[inline]
    pub fn records(&self) -> &[AgentDayRecord] {
        &self.records
    }

    /// Every day summary, oldest first.
    #[inline]
    pub fn summaries(&self) -> &[DaySummary] {
        &self.summaries
    }

    /// The last `n` records (fewer if the log is shorter).
    pub fn recent(&self, n: usize) -> &[AgentDayRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Records for one agent, oldest first.
    pub fn for_agent(&self, agent: AgentId) -> impl Iterator<Item = &AgentDayRecord> + '_ {
        self.records.iter().filter(move |r| r.agent == agent)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand over the accumulated records and summaries, leaving the log empty.
    pub fn drain(&mut self) -> (Vec<AgentDayRecord>, Vec<DaySummary>) {
        (std::mem::take(&mut self.records), std::mem::take(&mut self.summaries))
    }
}

impl SimObserver for EventLog {
    fn on_agent_day(&mut self, record: &AgentDayRecord) {
        self.records.push(record.clone());
    }

    fn on_day_end(&mut self, summary: &DaySummary) {
        self.summaries.push(*summary);
    }
}
