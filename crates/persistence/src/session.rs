// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::StorageBackend;
use crate::ident;
use maturity_bench::AssessmentState;
use maturity_bench_domain::{
    AreaId, AreaScore, AssessmentSnapshot, Catalog, CompanyInfo, CriterionId, compute_results,
};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// The fixed storage key holding the working draft.
///
/// Stable across the application's lifetime; changing it would orphan
/// in-progress sessions on upgrade.
pub const DRAFT_KEY: &str = "maturity_assessment_draft";

/// The key prefix under which archived snapshots are stored. The full key
/// is this prefix followed by the generated identifier, so archives never
/// collide with the draft or with each other.
pub const ARCHIVE_KEY_PREFIX: &str = "maturity_assessment/";

/// One active assessment session: the working draft plus its storage.
///
/// The session owns the catalog, the single working-draft state instance,
/// and a storage backend. Every mutation autosaves the full draft
/// best-effort; storage failures are logged and never fail the mutation,
/// since the in-memory state remains authoritative while the process runs.
pub struct Session {
    backend: Box<dyn StorageBackend>,
    catalog: Catalog,
    state: AssessmentState,
}

impl Session {
    /// Opens a session over the builtin catalog, restoring any saved draft.
    ///
    /// On any parse failure or absence of saved data the session starts
    /// from empty defaults; a corrupt draft is never surfaced as an error.
    #[must_use]
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        Self::open_with_catalog(backend, Catalog::builtin())
    }

    /// Opens a session over a custom catalog, restoring any saved draft.
    ///
    /// # Arguments
    ///
    /// * `backend` - The storage backend
    /// * `catalog` - The area catalog to assess against
    #[must_use]
    pub fn open_with_catalog(backend: Box<dyn StorageBackend>, catalog: Catalog) -> Self {
        let state = match backend.get(DRAFT_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<AssessmentState>(&blob) {
                Ok(mut state) => {
                    state.normalize(&catalog);
                    state
                }
                Err(err) => {
                    tracing::warn!(error = %err, "discarding malformed saved draft");
                    AssessmentState::default()
                }
            },
            Ok(None) => AssessmentState::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read saved draft, starting empty");
                AssessmentState::default()
            }
        };

        Self {
            backend,
            catalog,
            state,
        }
    }

    /// Returns the working-draft state.
    #[must_use]
    pub const fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Returns the area catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the company info and autosaves.
    pub fn set_company_info(&mut self, info: CompanyInfo) {
        self.state.set_company_info(info);
        self.autosave();
    }

    /// Toggles an area selection and autosaves.
    pub fn toggle_area_selection(&mut self, area_id: AreaId) {
        self.state.toggle_area_selection(area_id);
        self.autosave();
    }

    /// Upserts one criterion's rating pair and autosaves.
    pub fn set_response(
        &mut self,
        area_id: &AreaId,
        criterion_id: &CriterionId,
        current: u8,
        desired: u8,
    ) {
        self.state
            .set_response(&self.catalog, area_id, criterion_id, current, desired);
        self.autosave();
    }

    /// Computes the per-area current/desired averages for display.
    #[must_use]
    pub fn results(&self) -> BTreeMap<AreaId, AreaScore> {
        compute_results(&self.state.selected_areas, &self.state.responses, &self.catalog)
    }

    /// Returns whether every selected area is fully answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(&self.catalog)
    }

    /// Returns the area selected after `current`, if any.
    #[must_use]
    pub fn next_area(&self, current: &AreaId) -> Option<&AreaId> {
        self.state.next_area(current)
    }

    /// Returns the area selected before `current`, if any.
    #[must_use]
    pub fn previous_area(&self, current: &AreaId) -> Option<&AreaId> {
        self.state.previous_area(current)
    }

    /// Archives the current state as an immutable snapshot.
    ///
    /// Returns the generated identifier, or `None` without writing anything
    /// when the session holds no selections and no responses. The working
    /// draft is left untouched; clearing it is `reset`'s responsibility.
    /// Storage failures are logged and reported as `None`.
    pub fn archive(&mut self) -> Option<String> {
        if self.state.is_empty() {
            return None;
        }

        let snapshot = AssessmentSnapshot {
            company_info: self.state.company_info.clone(),
            selected_areas: self.state.selected_areas.clone(),
            responses: self.state.responses.clone(),
            completed_at: now_rfc3339(),
        };

        let blob = match serde_json::to_string(&snapshot) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize snapshot, archive skipped");
                return None;
            }
        };

        let id = ident::generate_assessment_id();
        let key = format!("{ARCHIVE_KEY_PREFIX}{id}");
        match self.backend.set(&key, &blob) {
            Ok(()) => {
                tracing::debug!(id = %id, "assessment archived");
                Some(id)
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not write snapshot, archive skipped");
                None
            }
        }
    }

    /// Reads back an archived snapshot by identifier.
    ///
    /// Returns `None` when the identifier is unknown, the storage read
    /// fails, or the stored blob does not parse.
    #[must_use]
    pub fn load_archived(&self, id: &str) -> Option<AssessmentSnapshot> {
        let key = format!("{ARCHIVE_KEY_PREFIX}{id}");
        match self.backend.get(&key) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    tracing::warn!(error = %err, id = %id, "archived snapshot is malformed");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, id = %id, "could not read archived snapshot");
                None
            }
        }
    }

    /// Resets the session to an empty draft.
    ///
    /// With `archive_first`, the current state is archived before clearing
    /// (a no-op on an empty session, see `archive`). The in-memory state is
    /// then unconditionally cleared and the draft entry removed from
    /// storage, best-effort.
    ///
    /// Returns the identifier of the archive produced, if any.
    ///
    /// # Arguments
    ///
    /// * `archive_first` - Whether to snapshot the state before clearing
    pub fn reset(&mut self, archive_first: bool) -> Option<String> {
        let archived = if archive_first { self.archive() } else { None };

        self.state.clear();
        if let Err(err) = self.backend.remove(DRAFT_KEY) {
            tracing::warn!(error = %err, "could not remove saved draft");
        }

        archived
    }

    /// Serializes and stores the working draft, best-effort.
    fn autosave(&mut self) {
        let blob = match serde_json::to_string(&self.state) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize draft, autosave skipped");
                return;
            }
        };
        match self.backend.set(DRAFT_KEY, &blob) {
            Ok(()) => tracing::debug!("draft autosaved"),
            Err(err) => {
                tracing::warn!(error = %err, "draft autosave failed, in-memory state remains authoritative");
            }
        }
    }
}

/// The current instant as an RFC 3339 string.
fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}
