// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fiscal month value is outside 1..=12.
    InvalidFiscalMonth {
        /// The rejected month value.
        month: u8,
    },
    /// Fiscal year is outside the accepted window.
    FiscalYearOutOfRange {
        /// The rejected year.
        year: i32,
        /// The smallest accepted year.
        min: i32,
        /// The largest accepted year.
        max: i32,
    },
    /// Role key does not name one of the five responsibility roles.
    UnknownRole(String),
    /// Assignment status filter value is not recognised.
    InvalidAssignmentStatusFilter(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFiscalMonth { month } => {
                write!(f, "Invalid fiscal month: {month}. Must be between 1 and 12")
            }
            Self::FiscalYearOutOfRange { year, min, max } => {
                write!(
                    f,
                    "Fiscal year {year} is out of range. Must be between {min} and {max}"
                )
            }
            Self::UnknownRole(role) => write!(f, "Unknown responsibility role: '{role}'"),
            Self::InvalidAssignmentStatusFilter(value) => {
                write!(
                    f,
                    "Invalid assignment status filter '{value}' (must be all, assigned, or unassigned)"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
