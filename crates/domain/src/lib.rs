// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod benchmark;
mod catalog;
mod error;
mod results;
mod types;

#[cfg(test)]
mod tests;

pub use benchmark::{GapPriority, MaturityLevel, gap, industry_standard};
pub use catalog::{Area, Catalog, Criterion, DEFAULT_MAX_LEVEL};
pub use error::DomainError;
pub use results::{AreaScore, compute_results};
pub use types::{
    AreaId, AssessmentSnapshot, CompanyInfo, CriterionId, ResponseEntry, Responses,
};
