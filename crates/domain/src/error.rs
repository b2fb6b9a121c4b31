// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during catalog construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Two areas in the catalog share the same id.
    DuplicateAreaId(String),
    /// Two criteria within one area share the same id.
    DuplicateCriterionId {
        /// The area containing the duplicate.
        area: String,
        /// The duplicate criterion id.
        criterion: String,
    },
    /// An area was defined without any criteria.
    EmptyCriteria(String),
    /// A criterion was defined with a zero maximum level.
    InvalidMaxLevel {
        /// The area containing the criterion.
        area: String,
        /// The offending criterion id.
        criterion: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAreaId(id) => {
                write!(f, "Area id '{id}' appears more than once in the catalog")
            }
            Self::DuplicateCriterionId { area, criterion } => {
                write!(
                    f,
                    "Criterion id '{criterion}' appears more than once in area '{area}'"
                )
            }
            Self::EmptyCriteria(id) => {
                write!(f, "Area '{id}' has no criteria")
            }
            Self::InvalidMaxLevel { area, criterion } => {
                write!(
                    f,
                    "Criterion '{criterion}' in area '{area}' has a zero maximum level"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
