// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Optional remote services and result export for the maturity benchmark
//! tool.
//!
//! The remote side is deliberately forgiving: every call against the
//! assessment API degrades to a static fallback when the endpoint is
//! unreachable, unresponsive, or returns garbage. Callers never see an
//! error from this surface; failures are logged and the fallback data is
//! returned instead, so the tool keeps working fully offline.
//!
//! Export is local-only: [`results_to_csv`] renders computed per-area
//! results as a CSV document for spreadsheet hand-off.

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

mod api;
mod error;
mod export;

#[cfg(test)]
mod tests;

pub use api::{RemoteClient, SaveResponse};
pub use error::ExportError;
pub use export::results_to_csv;
