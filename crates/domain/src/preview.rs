// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Proposed roster construction.
//!
//! A preview holds one [`ProposedRow`] per eligible company for the target
//! month, pre-filled with whoever held each role in the previous month.
//! Nothing in a preview is persisted until a save.

use crate::error::DomainError;
use crate::option_catalog::{RoleCatalogs, resolve_label};
use crate::types::{
    AssignmentRecord, EligibleCompany, FiscalMonth, PerRole, PreviousAssignee, ProposedRow,
    RoleAssignments, RoleKey,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Company engagement statuses offered by the client directory.
pub const ALL_COMPANY_STATUSES: [&str; 5] = [
    "รายเดือน",
    "รายเดือน / วางมือ",
    "รายเดือน / จ่ายรายปี",
    "รายเดือน / เดือนสุดท้าย",
    "ยกเลิกทำ",
];

/// Selector value standing for every status in [`ALL_COMPANY_STATUSES`].
pub const ALL_STATUSES_SELECTOR: &str = "all";

/// Everything the preview builder reads.
///
/// All collections are borrowed; the builder never mutates its inputs.
#[derive(Debug, Clone, Copy)]
pub struct PreviewInputs<'a> {
    /// The month the roster is being prepared for.
    pub target: FiscalMonth,
    /// The month whose assignees are carried forward.
    pub previous: FiscalMonth,
    /// Eligible companies, already filtered by status.
    pub companies: &'a [EligibleCompany],
    /// Records of the previous month.
    pub previous_records: &'a [AssignmentRecord],
    /// Records already stored for the target month.
    pub target_records: &'a [AssignmentRecord],
    /// Role catalogs used to resolve carried-forward names.
    pub catalogs: &'a RoleCatalogs,
}

fn find_record<'a>(
    records: &'a [AssignmentRecord],
    build: &str,
    month: FiscalMonth,
) -> Option<&'a AssignmentRecord> {
    records
        .iter()
        .find(|record| record.build == build && record.is_for(month))
}

/// Builds one proposed row per eligible company, in input order.
///
/// Each role is defaulted to the previous month's assignee. Rows whose
/// company already has a target-month record are flagged and carry a copy of
/// that record's assignees for reference.
///
/// # Arguments
///
/// * `inputs` - The target month, source collections and catalogs
///
/// # Returns
///
/// The proposed rows. An empty company list yields an empty preview.
#[must_use]
pub fn build_preview(inputs: &PreviewInputs<'_>) -> Vec<ProposedRow> {
    inputs
        .companies
        .iter()
        .map(|company| {
            let previous: Option<&AssignmentRecord> =
                find_record(inputs.previous_records, &company.build, inputs.previous);
            let existing: Option<&AssignmentRecord> =
                find_record(inputs.target_records, &company.build, inputs.target);

            let carried: RoleAssignments = previous
                .map(|record| record.role_assignments.normalized())
                .unwrap_or_default();

            let previous_role_assignments: PerRole<Option<PreviousAssignee>> =
                carried.map(|role, id| {
                    id.as_ref().map(|employee_id| PreviousAssignee {
                        employee_id: employee_id.clone(),
                        employee_name: resolve_label(Some(employee_id), role, inputs.catalogs),
                    })
                });

            ProposedRow {
                build: company.build.clone(),
                company_name: company.company_name.clone(),
                legal_entity_number: company.legal_entity_number.clone(),
                vat_status: company.vat_status,
                company_status: company.company_status.clone(),
                target_fiscal_month: inputs.target,
                is_already_assigned: existing.is_some(),
                existing_assignment_id: existing.map(|record| record.id.clone()),
                existing_role_assignments: existing
                    .map(|record| record.role_assignments.normalized()),
                previous_role_assignments,
                new_role_assignments: carried,
            }
        })
        .collect()
}

/// Carries user edits from an earlier preview into a rebuilt one.
///
/// For every rebuilt row whose build and target month match a row of the
/// earlier batch, each role the earlier row had filled overrides the rebuilt
/// default. Rows only present in the earlier batch are dropped.
#[must_use]
pub fn merge_preserving_edits(
    previous_batch: &[ProposedRow],
    rebuilt: Vec<ProposedRow>,
) -> Vec<ProposedRow> {
    rebuilt
        .into_iter()
        .map(|mut row| {
            let earlier: Option<&ProposedRow> = previous_batch.iter().find(|earlier| {
                earlier.build == row.build && earlier.target_fiscal_month == row.target_fiscal_month
            });
            if let Some(earlier) = earlier {
                for role in RoleKey::ALL {
                    if let Some(edit) = earlier.assignee(role) {
                        row.new_role_assignments[role] = Some(edit.to_string());
                    }
                }
            }
            row
        })
        .collect()
}

/// Which rows to keep by whether a target-month record already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatusFilter {
    /// Keep every row.
    #[default]
    All,
    /// Keep rows that already have a target-month record.
    Assigned,
    /// Keep rows with no target-month record.
    Unassigned,
}

impl FromStr for AssignmentStatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "assigned" => Ok(Self::Assigned),
            "unassigned" => Ok(Self::Unassigned),
            _ => Err(DomainError::InvalidAssignmentStatusFilter(s.to_string())),
        }
    }
}

/// Narrows a preview for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewFilter {
    /// Assignment status to keep.
    #[serde(default)]
    pub assignment_status: AssignmentStatusFilter,
    /// Required proposed assignee per role; `None` leaves a role unfiltered.
    #[serde(default)]
    pub assignees: RoleAssignments,
}

impl PreviewFilter {
    /// Returns whether a row passes the status filter and every role filter.
    #[must_use]
    pub fn matches(&self, row: &ProposedRow) -> bool {
        let status_ok: bool = match self.assignment_status {
            AssignmentStatusFilter::All => true,
            AssignmentStatusFilter::Assigned => row.is_already_assigned,
            AssignmentStatusFilter::Unassigned => !row.is_already_assigned,
        };

        status_ok
            && self
                .assignees
                .iter()
                .all(|(role, wanted)| wanted.as_deref().is_none_or(|id| row.assignee(role) == Some(id)))
    }
}

/// Returns the rows that pass a filter, in order.
#[must_use]
pub fn filter_preview<'a>(rows: &'a [ProposedRow], filter: &PreviewFilter) -> Vec<&'a ProposedRow> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}

/// Expands a status selection into the statuses to query.
///
/// The [`ALL_STATUSES_SELECTOR`] stands for every known status. Repeated
/// selections are queried once.
#[must_use]
pub fn expand_status_selection(selected: &[String]) -> Vec<String> {
    if selected.iter().any(|s| s == ALL_STATUSES_SELECTOR) {
        return ALL_COMPANY_STATUSES.iter().map(|s| (*s).to_string()).collect();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    selected
        .iter()
        .filter(|s| seen.insert(s.as_str()))
        .cloned()
        .collect()
}

/// Concatenates per-status directory results, keeping the first company seen
/// for each build.
#[must_use]
pub fn select_eligible_companies(results_per_status: Vec<Vec<EligibleCompany>>) -> Vec<EligibleCompany> {
    let mut seen: HashSet<String> = HashSet::new();
    results_per_status
        .into_iter()
        .flatten()
        .filter(|company| seen.insert(company.build.clone()))
        .collect()
}
