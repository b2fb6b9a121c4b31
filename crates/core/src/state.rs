// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maturity_bench_domain::{
    AreaId, Catalog, CompanyInfo, CriterionId, DEFAULT_MAX_LEVEL, ResponseEntry, Responses,
};
use serde::{Deserialize, Serialize};

/// The mutable working draft of one assessment session.
///
/// This is the single serializable shape the persistence layer autosaves
/// on every mutation and restores on startup. Deserialization is permissive:
/// every field falls back to its default when missing, so malformed or
/// partial saved data degrades to an empty draft instead of failing.
///
/// There is exactly one instance per active session; callers pass a handle
/// rather than reaching for process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentState {
    /// Company context for the session.
    pub company_info: CompanyInfo,
    /// Selected area ids, in selection order, no duplicates.
    pub selected_areas: Vec<AreaId>,
    /// All recorded ratings, including those for deselected areas.
    pub responses: Responses,
}

impl AssessmentState {
    /// Creates an empty working draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the company info wholesale.
    ///
    /// Field merging is the caller's concern; no constraints are enforced
    /// at this layer.
    pub fn set_company_info(&mut self, info: CompanyInfo) {
        self.company_info = info;
    }

    /// Toggles an area in the selection.
    ///
    /// If the id is already selected it is removed, preserving the relative
    /// order of the remaining ids; otherwise it is appended at the end.
    ///
    /// Ids unknown to the catalog are accepted and recorded as-is;
    /// validating selections against the catalog is the caller's concern,
    /// not a hard error here. Deselecting an area does not purge its
    /// recorded responses.
    ///
    /// # Arguments
    ///
    /// * `area_id` - The area to toggle
    pub fn toggle_area_selection(&mut self, area_id: AreaId) {
        if let Some(index) = self.selected_areas.iter().position(|id| *id == area_id) {
            self.selected_areas.remove(index);
        } else {
            self.selected_areas.push(area_id);
        }
    }

    /// Upserts the rating pair for one criterion.
    ///
    /// A value of `0` means "not yet rated" and maps to the unanswered
    /// sentinel. Nonzero values are clamped into `[1, max_level]`, where
    /// `max_level` comes from the catalog entry for the criterion and falls
    /// back to 5 when the area or criterion is unknown. Clamping rather
    /// than rejecting keeps the store infallible; strict range enforcement
    /// belongs to the input layer.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The area catalog, consulted for the rating bound
    /// * `area_id` - The area being rated
    /// * `criterion_id` - The criterion being rated
    /// * `current` - The current maturity rating, `0` for unanswered
    /// * `desired` - The desired maturity rating, `0` for unanswered
    pub fn set_response(
        &mut self,
        catalog: &Catalog,
        area_id: &AreaId,
        criterion_id: &CriterionId,
        current: u8,
        desired: u8,
    ) {
        let max_level = catalog
            .area(area_id)
            .and_then(|area| area.criterion(criterion_id))
            .map_or(DEFAULT_MAX_LEVEL, |criterion| criterion.max_level());

        let entry = self
            .responses
            .entry(area_id.clone())
            .or_default()
            .entry(criterion_id.clone())
            .or_default();
        entry.current = clamp_rating(current, max_level);
        entry.desired = clamp_rating(desired, max_level);
    }

    /// Returns whether every selected area is fully answered.
    ///
    /// True iff every selected area id that resolves to a catalog area has
    /// both a current and a desired rating recorded for every criterion.
    /// A selected id that no longer resolves is treated as trivially
    /// satisfied; a dangling reference must not block completion.
    #[must_use]
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.selected_areas.iter().all(|area_id| {
            catalog.area(area_id).is_none_or(|area| {
                area.criteria().iter().all(|criterion| {
                    self.responses
                        .get(area_id)
                        .and_then(|area_responses| area_responses.get(criterion.id()))
                        .is_some_and(ResponseEntry::is_answered)
                })
            })
        })
    }

    /// Returns the area selected after `current`, if any.
    ///
    /// Read-only; returns `None` at the end of the selection or when
    /// `current` is not selected. The navigation layer decides where
    /// "no neighbor" redirects.
    #[must_use]
    pub fn next_area(&self, current: &AreaId) -> Option<&AreaId> {
        let index = self.selected_areas.iter().position(|id| id == current)?;
        self.selected_areas.get(index + 1)
    }

    /// Returns the area selected before `current`, if any.
    ///
    /// Read-only; returns `None` at the start of the selection or when
    /// `current` is not selected.
    #[must_use]
    pub fn previous_area(&self, current: &AreaId) -> Option<&AreaId> {
        let index = self.selected_areas.iter().position(|id| id == current)?;
        index.checked_sub(1).and_then(|i| self.selected_areas.get(i))
    }

    /// Returns whether the draft holds no assessment data.
    ///
    /// Company info alone does not count: archiving a session with no
    /// selections and no responses is pointless and is skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_areas.is_empty() && self.responses.is_empty()
    }

    /// Resets the draft to initial values.
    pub fn clear(&mut self) {
        self.company_info = CompanyInfo::default();
        self.selected_areas.clear();
        self.responses.clear();
    }

    /// Repairs ratings after a permissive restore.
    ///
    /// Persisted data may carry ratings outside `[1, max_level]` (including
    /// the legacy `0` encoding of "unanswered"); those are mapped back to
    /// the unanswered sentinel rather than silently reinterpreted.
    pub fn normalize(&mut self, catalog: &Catalog) {
        for (area_id, area_responses) in &mut self.responses {
            let area = catalog.area(area_id);
            for (criterion_id, entry) in area_responses.iter_mut() {
                let max_level = area
                    .and_then(|a| a.criterion(criterion_id))
                    .map_or(DEFAULT_MAX_LEVEL, |criterion| criterion.max_level());
                entry.current = entry.current.filter(|v| (1..=max_level).contains(v));
                entry.desired = entry.desired.filter(|v| (1..=max_level).contains(v));
            }
        }
    }
}

/// Maps a raw rating to the stored representation.
///
/// `0` is the unanswered sentinel; nonzero values clamp to `[1, max_level]`.
fn clamp_rating(value: u8, max_level: u8) -> Option<u8> {
    if value == 0 {
        None
    } else {
        Some(value.min(max_level))
    }
}
