// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ExportError;
use maturity_bench_domain::{AreaId, AreaScore, Catalog, GapPriority, gap};
use std::collections::BTreeMap;

/// Renders computed per-area results as a CSV document.
///
/// One row per area that has a result, in catalog display order, using the
/// catalog's display names. Areas without a result (nothing answered yet)
/// are left out rather than rendered as zero rows.
///
/// # Arguments
///
/// * `results` - Per-area averages as produced by the results engine
/// * `catalog` - The area catalog, for display names and ordering
///
/// # Errors
///
/// Returns an error if CSV serialization fails or the rendered document is
/// not valid UTF-8.
pub fn results_to_csv(
    results: &BTreeMap<AreaId, AreaScore>,
    catalog: &Catalog,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["Area", "Current State", "Desired State", "Gap", "Gap Priority"])?;

    for area in catalog.areas() {
        let Some(score) = results.get(area.id()) else {
            continue;
        };
        let gap_value = gap(score.current, score.desired);
        writer.write_record([
            area.name(),
            &score.current.to_string(),
            &score.desired.to_string(),
            &gap_value.to_string(),
            GapPriority::from_gap(gap_value).as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::CsvError(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
