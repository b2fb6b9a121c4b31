// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{AreaId, CriterionId};
use std::collections::BTreeSet;

/// The rating upper bound used when a criterion does not specify one.
pub const DEFAULT_MAX_LEVEL: u8 = 5;

/// One rated sub-dimension within an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    /// The criterion id, unique within its parent area.
    id: CriterionId,
    /// The display label.
    name: String,
    /// The integer upper bound for ratings on this criterion.
    max_level: u8,
}

impl Criterion {
    /// Creates a new `Criterion`.
    ///
    /// # Arguments
    ///
    /// * `id` - The criterion id
    /// * `name` - The display label
    /// * `max_level` - The rating upper bound, normally 5
    #[must_use]
    pub fn new(id: &str, name: &str, max_level: u8) -> Self {
        Self {
            id: CriterionId::new(id),
            name: name.to_owned(),
            max_level,
        }
    }

    /// Returns the criterion id.
    #[must_use]
    pub const fn id(&self) -> &CriterionId {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rating upper bound.
    #[must_use]
    pub const fn max_level(&self) -> u8 {
        self.max_level
    }
}

/// A top-level capability category being assessed.
///
/// Areas are catalog-defined and immutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// The area id, unique across the catalog.
    id: AreaId,
    /// The display name.
    name: String,
    /// The display description.
    description: String,
    /// Opaque reference to a visual asset, resolved by the UI layer.
    icon: String,
    /// The ordered criteria for this area. Never empty in a valid catalog.
    criteria: Vec<Criterion>,
}

impl Area {
    /// Creates a new `Area`.
    ///
    /// # Arguments
    ///
    /// * `id` - The area id
    /// * `name` - The display name
    /// * `description` - The display description
    /// * `icon` - Opaque icon reference
    /// * `criteria` - The ordered criteria
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str, icon: &str, criteria: Vec<Criterion>) -> Self {
        Self {
            id: AreaId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            criteria,
        }
    }

    /// Returns the area id.
    #[must_use]
    pub const fn id(&self) -> &AreaId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the icon reference.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the ordered criteria.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Looks up a criterion by id.
    #[must_use]
    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id() == id)
    }
}

/// The fixed set of assessable areas.
///
/// The catalog is the single source of truth for validating that selections
/// and responses reference real entities, and for the "every question
/// answered" completion check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// The areas, in display order.
    areas: Vec<Area>,
}

impl Catalog {
    /// Creates a catalog from a list of areas, validating its invariants.
    ///
    /// # Arguments
    ///
    /// * `areas` - The areas, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if an area id is duplicated, a criterion id is
    /// duplicated within an area, an area has no criteria, or a criterion
    /// declares a zero maximum level.
    pub fn new(areas: Vec<Area>) -> Result<Self, DomainError> {
        let mut seen_areas: BTreeSet<&AreaId> = BTreeSet::new();
        for area in &areas {
            if !seen_areas.insert(area.id()) {
                return Err(DomainError::DuplicateAreaId(area.id().value().to_owned()));
            }
            if area.criteria().is_empty() {
                return Err(DomainError::EmptyCriteria(area.id().value().to_owned()));
            }
            let mut seen_criteria: BTreeSet<&CriterionId> = BTreeSet::new();
            for criterion in area.criteria() {
                if !seen_criteria.insert(criterion.id()) {
                    return Err(DomainError::DuplicateCriterionId {
                        area: area.id().value().to_owned(),
                        criterion: criterion.id().value().to_owned(),
                    });
                }
                if criterion.max_level() == 0 {
                    return Err(DomainError::InvalidMaxLevel {
                        area: area.id().value().to_owned(),
                        criterion: criterion.id().value().to_owned(),
                    });
                }
            }
        }
        Ok(Self { areas })
    }

    /// Returns the production catalog: the five smart-factory areas with
    /// five maturity criteria each.
    #[must_use]
    pub fn builtin() -> Self {
        // Construction bypasses `new` because the data below is static and
        // upholds the catalog invariants; the tests assert as much.
        Self {
            areas: vec![
                Area::new(
                    "organization",
                    "Smart organisation",
                    "Company readiness for the digital transformation",
                    "organization",
                    vec![
                        Criterion::new("processes", "Level 1 - Processes, standards and tools", DEFAULT_MAX_LEVEL),
                        Criterion::new("capabilities", "Level 2 - Capabilities assessment and training program", DEFAULT_MAX_LEVEL),
                        Criterion::new("continuous", "Level 3 - Continuous improvement/World Class Manufacturing program", DEFAULT_MAX_LEVEL),
                        Criterion::new("digital", "Level 4 - Digital strategy", DEFAULT_MAX_LEVEL),
                        Criterion::new("communication", "Level 5 - Communication, implementation & governance strategy", DEFAULT_MAX_LEVEL),
                    ],
                ),
                Area::new(
                    "workforce",
                    "Smart workforce",
                    "High adoption of digital tools and best practices to enhance workforce efficiency",
                    "workforce",
                    vec![
                        Criterion::new("interface", "Level 1 - Human to Machine interface to operate equipment", DEFAULT_MAX_LEVEL),
                        Criterion::new("learning", "Level 2 - Anytime learning & access to best practices", DEFAULT_MAX_LEVEL),
                        Criterion::new("communication", "Level 3 - Communication & collaboration", DEFAULT_MAX_LEVEL),
                        Criterion::new("guidance", "Level 4 - Operator guidance - digital SOPs", DEFAULT_MAX_LEVEL),
                        Criterion::new("lean", "Level 5 - Digital lean - learn best practices", DEFAULT_MAX_LEVEL),
                    ],
                ),
                Area::new(
                    "operations",
                    "Smart operations",
                    "Technology-enabled continuous improvement in areas like production, maintenance, quality and sustainability",
                    "operations",
                    vec![
                        Criterion::new("quality", "Level 1 - Quality control", DEFAULT_MAX_LEVEL),
                        Criterion::new("production", "Level 2 - Production management & operations reporting", DEFAULT_MAX_LEVEL),
                        Criterion::new("maintenance", "Level 3 - Maintenance management", DEFAULT_MAX_LEVEL),
                        Criterion::new("traceability", "Level 4 - Traceability management", DEFAULT_MAX_LEVEL),
                        Criterion::new("sustainability", "Level 5 - Sustainability management", DEFAULT_MAX_LEVEL),
                    ],
                ),
                Area::new(
                    "factory",
                    "Smart factory",
                    "Factory's level of automation, integration and usage of data",
                    "factory",
                    vec![
                        Criterion::new("practices", "Level 1 - Best Practices/Obsolescence", DEFAULT_MAX_LEVEL),
                        Criterion::new("data", "Level 2 - Data collection: connected equipment & plant", DEFAULT_MAX_LEVEL),
                        Criterion::new("ot", "Level 3 - OT (MES/MOM)", DEFAULT_MAX_LEVEL),
                        Criterion::new("integration", "Level 4 - Integration, connectivity, cybersecurity", DEFAULT_MAX_LEVEL),
                        Criterion::new("analytics", "Level 5 - Analytics and big data", DEFAULT_MAX_LEVEL),
                    ],
                ),
                Area::new(
                    "supply-chain",
                    "Smart supply chain",
                    "Ensure product transparency, manage distribution and claims, engage with consumers and gain insights",
                    "supply-chain",
                    vec![
                        Criterion::new("transparency", "Level 1 - Plant product transparency", DEFAULT_MAX_LEVEL),
                        Criterion::new("claims", "Level 2 - Claims management", DEFAULT_MAX_LEVEL),
                        Criterion::new("distribution", "Level 3 - Distribution management", DEFAULT_MAX_LEVEL),
                        Criterion::new("engagement", "Level 4 - Digital consumer engagement", DEFAULT_MAX_LEVEL),
                        Criterion::new("insights", "Level 5 - Consumer insight and analytics", DEFAULT_MAX_LEVEL),
                    ],
                ),
            ],
        }
    }

    /// Returns the areas in display order.
    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Looks up an area by id.
    #[must_use]
    pub fn area(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|area| area.id() == id)
    }
}
