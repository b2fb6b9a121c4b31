// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::types::{AreaId, Responses};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated current/desired averages for one area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaScore {
    /// Average current maturity across the answered criteria.
    pub current: f64,
    /// Average desired maturity across the answered criteria.
    pub desired: f64,
}

/// Computes per-area current/desired averages from raw responses.
///
/// For each area id in `selected_areas` that resolves in the catalog, the
/// `current` and `desired` values of every fully answered criterion (both
/// sides recorded) are averaged. Areas with zero answered criteria are
/// omitted from the result entirely; callers must treat a missing key as
/// "no data yet", not as a zero score.
///
/// Averages are rounded to one decimal place, half away from zero, so that
/// results land on the discrete gridlines of the comparison diagram.
///
/// Pure function of its inputs; callable at any time, including with an
/// empty selection.
///
/// # Arguments
///
/// * `selected_areas` - The selected area ids, in selection order
/// * `responses` - All recorded ratings
/// * `catalog` - The area catalog
#[must_use]
pub fn compute_results(
    selected_areas: &[AreaId],
    responses: &Responses,
    catalog: &Catalog,
) -> BTreeMap<AreaId, AreaScore> {
    let mut results: BTreeMap<AreaId, AreaScore> = BTreeMap::new();

    for area_id in selected_areas {
        let Some(area) = catalog.area(area_id) else {
            continue;
        };

        let mut sum_current: u32 = 0;
        let mut sum_desired: u32 = 0;
        let mut answered: u32 = 0;

        if let Some(area_responses) = responses.get(area_id) {
            for criterion in area.criteria() {
                let Some(entry) = area_responses.get(criterion.id()) else {
                    continue;
                };
                if let (Some(current), Some(desired)) = (entry.current, entry.desired) {
                    sum_current += u32::from(current);
                    sum_desired += u32::from(desired);
                    answered += 1;
                }
            }
        }

        if answered > 0 {
            results.insert(
                area_id.clone(),
                AreaScore {
                    current: round_to_tenth(f64::from(sum_current) / f64::from(answered)),
                    desired: round_to_tenth(f64::from(sum_desired) / f64::from(answered)),
                },
            );
        }
    }

    results
}

/// Rounds to one decimal place, half away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
