//! `PatchStore`: creation, lookup, harvest and removal of patches.
//!
//! The store owns every active patch; the [`Grid`] records where each one
//! sits.  Depleted patches stay in the store (and on the grid) until
//! [`PatchStore::sweep_depleted`] runs in the cleanup phase, so nothing is
//! removed from under an agent mid-pass.

use std::collections::BTreeMap;

use fg_core::{Cell, PatchId, ResourceId, SimRng};
use fg_grid::{Grid, Occupant};
use tracing::trace;

use crate::{ResourcePatch, ResourceResult, SpawnTable};

/// All active resource patches, keyed by id.
pub struct PatchStore {
    patches:       BTreeMap<PatchId, ResourcePatch>,
    next_id:       PatchId,
    spawned_total: u64,
    swept_total:   u64,
}

impl Default for PatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchStore {
    pub fn new() -> Self {
        Self {
            patches:       BTreeMap::new(),
            next_id:       PatchId::FIRST,
            spawned_total: 0,
            swept_total:   0,
        }
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Populate the world at initialization.  Returns the number of patches
    /// created.
    pub fn seed(&mut self, grid: &mut Grid, table: &SpawnTable, rng: &mut SimRng) -> ResourceResult<usize> {
        let created = self.spawn_pass(grid, table, rng)?;
        trace!(created, "seeded resource patches");
        Ok(created)
    }

    /// Run the spawn check over every cell (`x` outer, `y` inner).  Returns
    /// the number of patches created.
    pub fn spawn_pass(&mut self, grid: &mut Grid, table: &SpawnTable, rng: &mut SimRng) -> ResourceResult<usize> {
        let cells: Vec<Cell> = grid.cells().collect();
        let mut created = 0;
        for cell in cells {
            if self.try_spawn(grid, cell, table, rng)?.is_some() {
                created += 1;
            }
        }
        Ok(created)
    }

    /// Spawn check for one cell.
    ///
    /// A cell that already holds any patch is skipped without drawing.
    /// Otherwise one uniform value is drawn per table entry, in order, until
    /// one falls below its probability; that entry's patch is created and
    /// no further entries are checked.
    pub fn try_spawn(
        &mut self,
        grid:  &mut Grid,
        cell:  Cell,
        table: &SpawnTable,
        rng:   &mut SimRng,
    ) -> ResourceResult<Option<PatchId>> {
        if grid.has_patch(cell)? {
            return Ok(None);
        }
        for &(kind, probability) in table.entries() {
            let roll: f64 = rng.random();
            if roll < probability {
                let id = self.insert(grid, cell, kind)?;
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    /// Create a patch of `kind` at `cell` unconditionally.
    pub fn insert(&mut self, grid: &mut Grid, cell: Cell, kind: ResourceId) -> ResourceResult<PatchId> {
        let id = self.next_id;
        grid.place(Occupant::Patch(id), cell)?;
        self.next_id = PatchId(id.0 + 1);
        self.patches.insert(id, ResourcePatch::new(id, kind));
        self.spawned_total += 1;
        trace!(patch = %id, %cell, kind = kind.0, "patch spawned");
        Ok(id)
    }

    // ── Harvest ───────────────────────────────────────────────────────────

    /// The first patch at `cell` of type `kind` with amount left.
    pub fn find_harvestable(&self, grid: &Grid, cell: Cell, kind: ResourceId) -> ResourceResult<Option<PatchId>> {
        let found = grid
            .occupants_at(cell)?
            .iter()
            .filter_map(|o| o.as_patch())
            .find(|id| {
                self.patches
                    .get(id)
                    .is_some_and(|p| p.kind == kind && !p.is_depleted())
            });
        Ok(found)
    }

    /// Take one unit from patch `id`.  Returns `false` if the patch is
    /// unknown or already depleted; both are benign.
    pub fn harvest(&mut self, id: PatchId) -> bool {
        self.patches.get_mut(&id).is_some_and(ResourcePatch::take_one)
    }

    // ── Cleanup ───────────────────────────────────────────────────────────

    /// Remove every depleted patch from the store and the grid.  Returns
    /// the removed ids in ascending order.
    pub fn sweep_depleted(&mut self, grid: &mut Grid) -> Vec<PatchId> {
        let depleted: Vec<PatchId> = self
            .patches
            .values()
            .filter(|p| p.is_depleted())
            .map(|p| p.id)
            .collect();
        for &id in &depleted {
            self.patches.remove(&id);
            grid.remove(Occupant::Patch(id));
        }
        self.swept_total += depleted.len() as u64;
        if !depleted.is_empty() {
            trace!(removed = depleted.len(), "swept depleted patches");
        }
        depleted
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, id: PatchId) -> Option<&ResourcePatch> {
        self.patches.get(&id)
    }

    /// Active patches in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourcePatch> + '_ {
        self.patches.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Active patches of type `kind`.
    pub fn count_of(&self, kind: ResourceId) -> usize {
        self.patches.values().filter(|p| p.kind == kind).count()
    }

    /// Patches created since the store was built.
    #[inline]
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Patches removed by sweeps since the store was built.
    #[inline]
    pub fn swept_total(&self) -> u64 {
        self.swept_total
    }
}
