//! The resource catalog and the per-type spawn table.

use fg_core::{ResourceId, SkillKind};

use crate::{ResourceDefinition, ResourceError, ResourceResult};

// ── ResourceCatalog ───────────────────────────────────────────────────────────

/// Read-only registry of resource types, indexed by [`ResourceId`].
///
/// Built once at initialization; every definition has been validated.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResourceCatalog {
    definitions: Vec<ResourceDefinition>,
}

impl ResourceCatalog {
    /// Validate and index `definitions`.  `ResourceId(i)` refers to
    /// `definitions[i]`.
    pub fn new(definitions: Vec<ResourceDefinition>) -> ResourceResult<Self> {
        if definitions.is_empty() {
            return Err(ResourceError::EmptyCatalog);
        }
        if definitions.len() > usize::from(u16::MAX) {
            return Err(ResourceError::InvalidDefinition {
                name:   String::new(),
                reason: format!("at most {} resource types are supported", u16::MAX),
            });
        }
        for (i, def) in definitions.iter().enumerate() {
            def.validate()?;
            if definitions[..i].iter().any(|d| d.name == def.name) {
                return Err(ResourceError::DuplicateName(def.name.clone()));
            }
        }
        Ok(Self { definitions })
    }

    /// The three resource types of the starter model: gathered plants, small
    /// game, and large game.
    pub fn standard() -> Self {
        Self {
            definitions: vec![
                ResourceDefinition {
                    name:            "plants".into(),
                    mean_energy:     400.0,
                    energy_variance: 50.0,
                    skill:           SkillKind::Foraging,
                    skill_required:  0,
                    risk_death:      0.0,
                    risk_injury:     0.0,
                    injury_days:     0,
                    activity_cost:   50,
                },
                ResourceDefinition {
                    name:            "small_game".into(),
                    mean_energy:     1_200.0,
                    energy_variance: 300.0,
                    skill:           SkillKind::Hunting,
                    skill_required:  3,
                    risk_death:      0.01,
                    risk_injury:     0.05,
                    injury_days:     3,
                    activity_cost:   250,
                },
                ResourceDefinition {
                    name:            "large_game".into(),
                    mean_energy:     8_000.0,
                    energy_variance: 4_000.0,
                    skill:           SkillKind::Hunting,
                    skill_required:  7,
                    risk_death:      0.05,
                    risk_injury:     0.15,
                    injury_days:     10,
                    activity_cost:   500,
                },
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ResourceId) -> Option<&ResourceDefinition> {
        self.definitions.get(id.index())
    }

    /// Look up a resource type by name.
    pub fn id_of(&self, name: &str) -> Option<ResourceId> {
        self.definitions
            .iter()
            .position(|d| d.name == name)
            .map(|i| ResourceId(i as u16))
    }

    /// Like [`id_of`](Self::id_of) but an unknown name is an error.
    pub fn require(&self, name: &str) -> ResourceResult<ResourceId> {
        self.id_of(name)
            .ok_or_else(|| ResourceError::UnknownResource(name.to_owned()))
    }

    /// Display name for `id`, or `"?"` for an id outside the catalog.
    pub fn name(&self, id: ResourceId) -> &str {
        self.get(id).map_or("?", |d| d.name.as_str())
    }

    /// All ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ResourceId> + '_ {
        (0..self.definitions.len()).map(|i| ResourceId(i as u16))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &ResourceDefinition)> + '_ {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (ResourceId(i as u16), d))
    }
}

// ── SpawnTable ────────────────────────────────────────────────────────────────

/// Per-type spawn probabilities, checked in table order.
///
/// Order matters: spawn checks short-circuit per cell, so an earlier entry
/// wins whenever both would have spawned.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnTable {
    entries: Vec<(ResourceId, f64)>,
}

impl SpawnTable {
    /// Build a table from `(id, probability)` pairs, validated against
    /// `catalog`.
    pub fn new(catalog: &ResourceCatalog, entries: Vec<(ResourceId, f64)>) -> ResourceResult<Self> {
        for &(id, probability) in &entries {
            let Some(def) = catalog.get(id) else {
                return Err(ResourceError::UnknownResource(id.to_string()));
            };
            if !(0.0..=1.0).contains(&probability) {
                return Err(ResourceError::InvalidSpawnProbability {
                    name: def.name.clone(),
                    probability,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a table from `(name, probability)` pairs.
    pub fn from_names(catalog: &ResourceCatalog, entries: &[(&str, f64)]) -> ResourceResult<Self> {
        let resolved = entries
            .iter()
            .map(|&(name, p)| catalog.require(name).map(|id| (id, p)))
            .collect::<ResourceResult<Vec<_>>>()?;
        Self::new(catalog, resolved)
    }

    /// The starter-model rates for [`ResourceCatalog::standard`]:
    /// plants 0.02, small game 0.005, large game 0.001 per empty cell per day.
    pub fn standard(catalog: &ResourceCatalog) -> ResourceResult<Self> {
        Self::from_names(
            catalog,
            &[("plants", 0.02), ("small_game", 0.005), ("large_game", 0.001)],
        )
    }

    /// A table that never spawns anything.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn entries(&self) -> &[(ResourceId, f64)] {
        &self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
