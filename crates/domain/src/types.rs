// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifies a capability area within the catalog.
///
/// Area ids are stable string keys (e.g. `"organization"`, `"workforce"`)
/// and are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId {
    /// The id value.
    value: String,
}

impl AreaId {
    /// Creates a new `AreaId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The id value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for AreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a criterion within an area.
///
/// Criterion ids are unique within their parent area but not globally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionId {
    /// The id value.
    value: String,
}

impl CriterionId {
    /// Creates a new `CriterionId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The id value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

fn default_assessment_location() -> String {
    String::from("Lund Automation Room")
}

/// Company context captured at the start of a working session.
///
/// No field is required for the store to function; absence is represented
/// as an empty string or empty set, never as a missing-field failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// The company name.
    pub name: String,
    /// The factory location (city/country).
    pub factory_location: String,
    /// The location where the assessment is held.
    pub assessment_location: String,
    /// Number of production lines, free text.
    pub production_lines: String,
    /// Production volume, free text or numeric-as-text.
    pub production_volume: String,
    /// Selected product category keys. Insertion order is irrelevant and
    /// duplicates are impossible by construction.
    pub product_types: BTreeSet<String>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            factory_location: String::new(),
            assessment_location: default_assessment_location(),
            production_lines: String::new(),
            production_volume: String::new(),
            product_types: BTreeSet::new(),
        }
    }
}

/// A single criterion's recorded ratings.
///
/// `None` means "unanswered", which is explicitly distinct from any numeric
/// rating. Partial entries (only one side set) are valid intermediate states
/// while the user works through a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseEntry {
    /// The self-rated present maturity level, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u8>,
    /// The self-rated target maturity level, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired: Option<u8>,
}

impl ResponseEntry {
    /// Returns whether both the current and desired ratings are recorded.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.current.is_some() && self.desired.is_some()
    }
}

/// All recorded ratings, keyed by area id and then criterion id.
///
/// Responses may reference areas that are no longer selected; deselection
/// does not purge answers. Completion checks and derived results only
/// consult the current selection.
pub type Responses = BTreeMap<AreaId, BTreeMap<CriterionId, ResponseEntry>>;

/// An immutable record of a completed assessment session.
///
/// Created once per completed session by the archival operation and never
/// mutated afterwards. It persists independently of the working draft's
/// reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    /// The company context at completion time.
    pub company_info: CompanyInfo,
    /// The areas selected for the session, in selection order.
    pub selected_areas: Vec<AreaId>,
    /// All recorded ratings.
    pub responses: Responses,
    /// Completion timestamp, RFC 3339.
    pub completed_at: String,
}
