// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::generate_assessment_id;
use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

#[test]
fn test_identifier_shape() {
    let id: String = generate_assessment_id();

    // 12 hex chars of millisecond timestamp, a dash, 16 hex chars of
    // random suffix.
    assert_eq!(id.len(), 29);
    let (prefix, suffix) = id.split_once('-').unwrap();
    assert_eq!(prefix.len(), 12);
    assert_eq!(suffix.len(), 16);
    assert!(prefix.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_identifiers_separated_in_time_sort_lexicographically() {
    let earlier: String = generate_assessment_id();
    thread::sleep(Duration::from_millis(5));
    let later: String = generate_assessment_id();

    assert!(later > earlier);
}

#[test]
fn test_identifiers_are_unique() {
    let ids: BTreeSet<String> = (0..1000).map(|_| generate_assessment_id()).collect();

    assert_eq!(ids.len(), 1000);
}
