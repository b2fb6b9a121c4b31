// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AreaId, AreaScore, Catalog, CriterionId, ResponseEntry, Responses, compute_results};
use std::collections::BTreeMap;

fn record(
    responses: &mut Responses,
    area: &str,
    criterion: &str,
    current: Option<u8>,
    desired: Option<u8>,
) {
    responses
        .entry(AreaId::new(area))
        .or_default()
        .insert(CriterionId::new(criterion), ResponseEntry { current, desired });
}

#[test]
fn test_averaging_over_answered_criteria() {
    let catalog: Catalog = Catalog::builtin();
    let selected: Vec<AreaId> = vec![AreaId::new("workforce")];
    let mut responses: Responses = Responses::new();
    record(&mut responses, "workforce", "interface", Some(2), Some(3));
    record(&mut responses, "workforce", "learning", Some(4), Some(5));

    let results: BTreeMap<AreaId, AreaScore> = compute_results(&selected, &responses, &catalog);

    let score: &AreaScore = results.get(&AreaId::new("workforce")).unwrap();
    assert!((score.current - 3.0).abs() < f64::EPSILON);
    assert!((score.desired - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_rounding_to_one_decimal_half_away_from_zero() {
    let catalog: Catalog = Catalog::builtin();
    let selected: Vec<AreaId> = vec![AreaId::new("operations")];
    let mut responses: Responses = Responses::new();
    // 1 + 2 + 2 = 5 over 3 answered criteria: 1.666... rounds to 1.7.
    // 2 + 3 + 4 = 9 over 3: exactly 3.0.
    record(&mut responses, "operations", "quality", Some(1), Some(2));
    record(&mut responses, "operations", "production", Some(2), Some(3));
    record(&mut responses, "operations", "maintenance", Some(2), Some(4));

    let results: BTreeMap<AreaId, AreaScore> = compute_results(&selected, &responses, &catalog);

    let score: &AreaScore = results.get(&AreaId::new("operations")).unwrap();
    assert!((score.current - 1.7).abs() < 1e-9);
    assert!((score.desired - 3.0).abs() < 1e-9);
}

#[test]
fn test_area_with_no_answered_criteria_is_omitted() {
    let catalog: Catalog = Catalog::builtin();
    let selected: Vec<AreaId> = vec![AreaId::new("operations")];
    let responses: Responses = Responses::new();

    let results: BTreeMap<AreaId, AreaScore> = compute_results(&selected, &responses, &catalog);

    assert!(!results.contains_key(&AreaId::new("operations")));
    assert!(results.is_empty());
}

#[test]
fn test_partially_answered_entry_does_not_count() {
    let catalog: Catalog = Catalog::builtin();
    let selected: Vec<AreaId> = vec![AreaId::new("factory")];
    let mut responses: Responses = Responses::new();
    record(&mut responses, "factory", "practices", Some(3), None);

    let results: BTreeMap<AreaId, AreaScore> = compute_results(&selected, &responses, &catalog);

    assert!(results.is_empty());
}

#[test]
fn test_unselected_area_responses_are_ignored() {
    let catalog: Catalog = Catalog::builtin();
    let selected: Vec<AreaId> = vec![AreaId::new("workforce")];
    let mut responses: Responses = Responses::new();
    record(&mut responses, "workforce", "interface", Some(2), Some(2));
    record(&mut responses, "operations", "quality", Some(5), Some(5));

    let results: BTreeMap<AreaId, AreaScore> = compute_results(&selected, &responses, &catalog);

    assert_eq!(results.len(), 1);
    assert!(results.contains_key(&AreaId::new("workforce")));
}

#[test]
fn test_unresolvable_area_id_is_skipped() {
    let catalog: Catalog = Catalog::builtin();
    let selected: Vec<AreaId> = vec![AreaId::new("retired-area")];
    let mut responses: Responses = Responses::new();
    record(&mut responses, "retired-area", "anything", Some(4), Some(4));

    let results: BTreeMap<AreaId, AreaScore> = compute_results(&selected, &responses, &catalog);

    assert!(results.is_empty());
}

#[test]
fn test_empty_selection_yields_empty_results() {
    let catalog: Catalog = Catalog::builtin();

    let results: BTreeMap<AreaId, AreaScore> =
        compute_results(&[], &Responses::new(), &catalog);

    assert!(results.is_empty());
}
