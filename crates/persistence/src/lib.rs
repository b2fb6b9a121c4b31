// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the maturity benchmark tool.
//!
//! Two independent storage roles share one string-keyed key/value surface:
//!
//! - **Working-draft autosave** — the in-progress session is serialized as
//!   one JSON blob under a fixed key on every mutation and restored on
//!   startup. Restore is permissive: absent or malformed data silently
//!   degrades to an empty draft.
//! - **Archival snapshots** — completed sessions are frozen under a fixed
//!   key prefix plus a time-sortable unique identifier, so archives never
//!   collide with the draft or with each other.
//!
//! Both roles are best-effort: storage failures are logged and reported as
//! soft failures, never as a crash of the mutation that triggered them. The
//! in-memory state stays authoritative for the running session.
//!
//! Backends:
//!
//! - `SqliteBackend` — durable single-file storage, one `kv_entries` table
//! - `MemoryBackend` — ephemeral storage for tests and throwaway sessions

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;
mod ident;
mod session;

#[cfg(test)]
mod tests;

pub use backend::{MemoryBackend, SqliteBackend, StorageBackend};
pub use error::StorageError;
pub use ident::generate_assessment_id;
pub use session::{ARCHIVE_KEY_PREFIX, DRAFT_KEY, Session};
