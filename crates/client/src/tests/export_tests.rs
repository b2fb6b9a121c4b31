// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::export::results_to_csv;
use maturity_bench_domain::{AreaId, AreaScore, Catalog};
use std::collections::BTreeMap;

fn score(current: f64, desired: f64) -> AreaScore {
    AreaScore { current, desired }
}

#[test]
fn test_csv_header_and_row_layout() {
    let mut results: BTreeMap<AreaId, AreaScore> = BTreeMap::new();
    results.insert(AreaId::new("workforce"), score(2.5, 4.5));

    let csv: String = results_to_csv(&results, &Catalog::builtin()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Area,Current State,Desired State,Gap,Gap Priority");
    assert_eq!(lines[1], "Smart workforce,2.5,4.5,2,Medium");
}

#[test]
fn test_rows_follow_catalog_order_not_map_order() {
    let mut results: BTreeMap<AreaId, AreaScore> = BTreeMap::new();
    // BTreeMap iteration would put "factory" before "organization"; the
    // export must follow catalog display order instead.
    results.insert(AreaId::new("factory"), score(3.0, 3.0));
    results.insert(AreaId::new("organization"), score(1.0, 5.0));

    let csv: String = results_to_csv(&results, &Catalog::builtin()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Smart organisation,"));
    assert!(lines[2].starts_with("Smart factory,"));
}

#[test]
fn test_gap_and_priority_columns() {
    let mut results: BTreeMap<AreaId, AreaScore> = BTreeMap::new();
    results.insert(AreaId::new("organization"), score(1.0, 5.0));
    results.insert(AreaId::new("operations"), score(4.0, 3.0));

    let csv: String = results_to_csv(&results, &Catalog::builtin()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    // A four-point shortfall is High priority.
    assert_eq!(lines[1], "Smart organisation,1,5,4,High");
    // A desired state below the current one clamps the gap to zero.
    assert_eq!(lines[2], "Smart operations,4,3,0,Low");
}

#[test]
fn test_areas_without_results_are_omitted() {
    let results: BTreeMap<AreaId, AreaScore> = BTreeMap::new();

    let csv: String = results_to_csv(&results, &Catalog::builtin()).unwrap();

    assert_eq!(csv.lines().count(), 1);
}
