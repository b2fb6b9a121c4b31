// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::AreaId;

/// Fixed industry-standard reference maturity per known area, one integer
/// in 1-5. Rendered alongside computed results; the core treats these as
/// opaque reference data.
const INDUSTRY_STANDARDS: [(&str, u8); 5] = [
    ("organization", 2),
    ("workforce", 1),
    ("operations", 3),
    ("factory", 3),
    ("supply-chain", 4),
];

/// Returns the industry-standard maturity value for an area, if known.
#[must_use]
pub fn industry_standard(area_id: &AreaId) -> Option<u8> {
    INDUSTRY_STANDARDS
        .iter()
        .find(|(id, _)| *id == area_id.value())
        .map(|(_, value)| *value)
}

/// Maturity level band for a 1-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaturityLevel {
    /// Score at or below 1.5.
    Basic,
    /// Score at or below 2.5.
    Developing,
    /// Score at or below 3.5.
    Intermediate,
    /// Score at or below 4.5.
    Advanced,
    /// Score above 4.5.
    Optimized,
}

impl MaturityLevel {
    /// Classifies a score into its maturity band.
    ///
    /// # Arguments
    ///
    /// * `score` - A score between 1 and 5
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= 1.5 {
            Self::Basic
        } else if score <= 2.5 {
            Self::Developing
        } else if score <= 3.5 {
            Self::Intermediate
        } else if score <= 4.5 {
            Self::Advanced
        } else {
            Self::Optimized
        }
    }

    /// Returns the display label for this band.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Developing => "Developing",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Optimized => "Optimized",
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computes the gap between the current and desired state scores.
///
/// A desired state below the current state yields a gap of zero, not a
/// negative value.
#[must_use]
pub fn gap(current: f64, desired: f64) -> f64 {
    (desired - current).max(0.0)
}

/// Priority classification for a maturity gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapPriority {
    /// Gap below 2.
    Low,
    /// Gap of at least 2.
    Medium,
    /// Gap of at least 3.
    High,
}

impl GapPriority {
    /// Classifies a gap value into its priority level.
    ///
    /// # Arguments
    ///
    /// * `gap` - The gap between desired and current scores
    #[must_use]
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 3.0 {
            Self::High
        } else if gap >= 2.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the display label for this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for GapPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
