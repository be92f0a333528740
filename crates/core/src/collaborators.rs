// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! External systems the reconciliation engine reads from and writes to.
//!
//! The engine owns none of these. Implementations live with the transport
//! (a REST client in production, in-memory fakes in tests).

use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, FiscalMonth, ProposedRow, RoleAssignments,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// A failed call to an external collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{operation} failed: {message}")]
pub struct CollaboratorError {
    /// The operation that failed, e.g. `list_by_fiscal_month`.
    pub operation: String,
    /// The collaborator's error message.
    pub message: String,
}

impl CollaboratorError {
    /// Creates a new `CollaboratorError`.
    #[must_use]
    pub fn new(operation: &str, message: impl Into<String>) -> Self {
        Self {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

/// A roster row to be created by the assignment store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssignment {
    /// Build code of the company.
    pub build: String,
    /// The fiscal month of the row.
    pub fiscal_month: FiscalMonth,
    /// Assignee per role; unfilled roles are stored as null.
    pub role_assignments: RoleAssignments,
}

impl From<&ProposedRow> for NewAssignment {
    fn from(row: &ProposedRow) -> Self {
        Self {
            build: row.build.clone(),
            fiscal_month: row.target_fiscal_month,
            role_assignments: row.new_role_assignments.normalized(),
        }
    }
}

/// The client directory.
pub trait CompanyDirectory {
    /// Lists companies with the given engagement status.
    fn list_eligible(
        &self,
        status: &str,
    ) -> impl Future<Output = Result<Vec<EligibleCompany>, CollaboratorError>> + Send;
}

/// The persisted roster.
pub trait AssignmentStore {
    /// Lists every record of a fiscal month.
    fn list_by_fiscal_month(
        &self,
        month: FiscalMonth,
    ) -> impl Future<Output = Result<Vec<AssignmentRecord>, CollaboratorError>> + Send;

    /// Lists the records of a fiscal month for the given builds.
    fn list_by_builds_and_month(
        &self,
        builds: &[String],
        month: FiscalMonth,
    ) -> impl Future<Output = Result<Vec<AssignmentRecord>, CollaboratorError>> + Send;

    /// Creates a record.
    fn create(
        &self,
        assignment: NewAssignment,
    ) -> impl Future<Output = Result<AssignmentRecord, CollaboratorError>> + Send;

    /// Marks a record inactive.
    fn soft_delete(&self, id: &str) -> impl Future<Output = Result<(), CollaboratorError>> + Send;
}

/// The employee directory.
pub trait EmployeeDirectory {
    /// Lists employees belonging to any of the given taxonomies.
    fn list_by_taxonomy(
        &self,
        taxonomies: &[&'static str],
    ) -> impl Future<Output = Result<Vec<EmployeeRecord>, CollaboratorError>> + Send;
}
