// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Referential integrity of proposed rows.
//!
//! Builds must exist in the client directory and every assignee must be in
//! the catalog of the role they are assigned to.

use crate::option_catalog::{OptionCatalog, RoleCatalogs};
use crate::types::{EligibleCompany, ProposedRow, RoleKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Why a proposed row cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    /// The build code is blank.
    BuildRequired,
    /// The build code is not in the client directory.
    BuildNotFound {
        /// The unknown build.
        build: String,
    },
    /// An assignee is not in the role's catalog.
    EmployeeNotFound {
        /// The role being checked.
        role: RoleKey,
        /// The unknown employee id.
        employee_id: String,
    },
}

impl std::fmt::Display for EligibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuildRequired => write!(f, "Build code is required"),
            Self::BuildNotFound { .. } => write!(f, "Build code not found in system"),
            Self::EmployeeNotFound { role, .. } => {
                write!(f, "{role}: Employee ID not found in system")
            }
        }
    }
}

impl std::error::Error for EligibilityError {}

/// Checks that a build is present and known.
///
/// # Errors
///
/// Returns an error if:
/// - The build is blank
/// - No company in `companies` has this build
pub fn validate_build(build: &str, companies: &[EligibleCompany]) -> Result<(), EligibilityError> {
    if build.trim().is_empty() {
        return Err(EligibilityError::BuildRequired);
    }
    if !companies.iter().any(|company| company.build == build) {
        return Err(EligibilityError::BuildNotFound {
            build: build.to_string(),
        });
    }
    Ok(())
}

/// Checks that an assignee is in the role's catalog.
///
/// An unassigned role is valid here; completeness is checked separately.
///
/// # Errors
///
/// Returns `EligibilityError::EmployeeNotFound` if the id is not in `catalog`.
pub fn validate_employee(
    employee_id: Option<&str>,
    role: RoleKey,
    catalog: &OptionCatalog,
) -> Result<(), EligibilityError> {
    match employee_id {
        Some(id) if !catalog.contains(id) => Err(EligibilityError::EmployeeNotFound {
            role,
            employee_id: id.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Validates one row: the build first, then each role in order.
///
/// Stops at the first failure.
///
/// # Errors
///
/// Returns the first `EligibilityError` encountered.
pub fn validate_row(
    row: &ProposedRow,
    companies: &[EligibleCompany],
    catalogs: &RoleCatalogs,
) -> Result<(), EligibilityError> {
    validate_build(&row.build, companies)?;
    for role in RoleKey::ALL {
        validate_employee(row.assignee(role), role, &catalogs[role])?;
    }
    Ok(())
}

/// A row rejected by batch validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    /// Build code of the row.
    pub build: String,
    /// Human readable reason.
    pub reason: String,
}

/// Result of validating a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchValidation {
    /// Rows that passed.
    pub valid_rows: Vec<ProposedRow>,
    /// Rows that failed, one reason each.
    pub invalid_rows: Vec<InvalidRow>,
}

/// Validates every row of a batch.
///
/// Only the first failing check of a row is reported.
#[must_use]
pub fn validate_batch(
    rows: &[ProposedRow],
    companies: &[EligibleCompany],
    catalogs: &RoleCatalogs,
) -> BatchValidation {
    let mut result: BatchValidation = BatchValidation::default();
    for row in rows {
        match validate_row(row, companies, catalogs) {
            Ok(()) => result.valid_rows.push(row.clone()),
            Err(err) => result.invalid_rows.push(InvalidRow {
                build: row.build.clone(),
                reason: err.to_string(),
            }),
        }
    }
    result
}

/// Returns warnings about the batch as a whole.
///
/// Every row repeating a build seen earlier in the batch is reported first,
/// then every row whose build no longer exists in the client directory. Both
/// passes follow row order.
#[must_use]
pub fn check_integrity(rows: &[ProposedRow], companies: &[EligibleCompany]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let duplicates = rows
        .iter()
        .filter(|row| !seen.insert(row.build.as_str()))
        .map(|row| format!("Build {} appears more than once in preview", row.build));

    let known: HashSet<&str> = companies.iter().map(|c| c.build.as_str()).collect();
    let vanished = rows
        .iter()
        .filter(|row| !known.contains(row.build.as_str()))
        .map(|row| format!("Build {} no longer exists in the client directory", row.build));

    duplicates.chain(vanished).collect()
}
