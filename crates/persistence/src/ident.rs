// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Generates a time-sortable unique identifier for an archived assessment.
///
/// The identifier is a fixed-width millisecond Unix timestamp in hex,
/// followed by a random 64-bit suffix:
/// `{millis:012x}-{random:016x}`. The fixed-width timestamp prefix makes
/// identifiers sort lexicographically by creation time, also across process
/// restarts; the random suffix makes collisions overwhelmingly improbable.
///
/// Callers depend only on this function, so it can be swapped for a
/// standard sortable-UUID generator without touching call sites.
#[must_use]
pub fn generate_assessment_id() -> String {
    let millis = unix_millis();
    let suffix: u64 = rand::random();
    format!("{millis:012x}-{suffix:016x}")
}

/// Milliseconds since the Unix epoch, saturating at zero for pre-epoch
/// clocks.
fn unix_millis() -> u64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    u64::try_from(nanos / 1_000_000).unwrap_or(0)
}
