// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AssessmentState;
use maturity_bench_domain::AreaId;

fn three_selected() -> AssessmentState {
    let mut state: AssessmentState = AssessmentState::new();
    state.toggle_area_selection(AreaId::new("organization"));
    state.toggle_area_selection(AreaId::new("workforce"));
    state.toggle_area_selection(AreaId::new("factory"));
    state
}

#[test]
fn test_next_area_follows_selection_order() {
    let state: AssessmentState = three_selected();

    assert_eq!(
        state.next_area(&AreaId::new("organization")),
        Some(&AreaId::new("workforce"))
    );
    assert_eq!(
        state.next_area(&AreaId::new("workforce")),
        Some(&AreaId::new("factory"))
    );
}

#[test]
fn test_next_area_none_at_the_end() {
    let state: AssessmentState = three_selected();

    assert_eq!(state.next_area(&AreaId::new("factory")), None);
}

#[test]
fn test_previous_area_follows_selection_order() {
    let state: AssessmentState = three_selected();

    assert_eq!(
        state.previous_area(&AreaId::new("factory")),
        Some(&AreaId::new("workforce"))
    );
}

#[test]
fn test_previous_area_none_at_the_start() {
    let state: AssessmentState = three_selected();

    assert_eq!(state.previous_area(&AreaId::new("organization")), None);
}

#[test]
fn test_navigation_from_unselected_area_yields_none() {
    let state: AssessmentState = three_selected();

    assert_eq!(state.next_area(&AreaId::new("supply-chain")), None);
    assert_eq!(state.previous_area(&AreaId::new("supply-chain")), None);
}

#[test]
fn test_navigation_never_mutates_state() {
    let state: AssessmentState = three_selected();
    let before: AssessmentState = state.clone();

    let _ = state.next_area(&AreaId::new("workforce"));
    let _ = state.previous_area(&AreaId::new("workforce"));

    assert_eq!(state, before);
}
