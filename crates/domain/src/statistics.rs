// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workload statistics.
//!
//! The same counting runs over persisted records and over proposed rows. A
//! [`RoleFieldMap`] tells the aggregator where each role's assignee and the
//! VAT status live on the source type.
//!
//! Statistics are always recomputed from the full source set.

use crate::option_catalog::{RoleCatalogs, resolve_label};
use crate::types::{AssignmentRecord, ProposedRow, RoleKey, VatStatus};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Accessors for the role assignees and VAT status of a source type.
pub struct RoleFieldMap<T> {
    fields: Vec<(RoleKey, &'static str)>,
    assignee: fn(&T, RoleKey) -> Option<&str>,
    vat_status: fn(&T) -> VatStatus,
}

fn record_assignee(record: &AssignmentRecord, role: RoleKey) -> Option<&str> {
    record.role_assignments.assignee(role)
}

const fn record_vat_status(record: &AssignmentRecord) -> VatStatus {
    record.vat_status
}

fn proposed_assignee(row: &ProposedRow, role: RoleKey) -> Option<&str> {
    row.assignee(role)
}

fn carried_assignee(row: &ProposedRow, role: RoleKey) -> Option<&str> {
    row.previous_assignee(role)
}

const fn row_vat_status(row: &ProposedRow) -> VatStatus {
    row.vat_status
}

impl RoleFieldMap<AssignmentRecord> {
    /// Field map for persisted assignment records.
    #[must_use]
    pub fn persisted() -> Self {
        Self {
            fields: RoleKey::ALL
                .into_iter()
                .map(|role| (role, role.persisted_field()))
                .collect(),
            assignee: record_assignee,
            vat_status: record_vat_status,
        }
    }
}

impl RoleFieldMap<ProposedRow> {
    /// Field map for the editable assignees of proposed rows.
    #[must_use]
    pub fn proposed() -> Self {
        Self {
            fields: RoleKey::ALL
                .into_iter()
                .map(|role| (role, role.proposed_field()))
                .collect(),
            assignee: proposed_assignee,
            vat_status: row_vat_status,
        }
    }

    /// Field map for the carried-forward assignees of proposed rows.
    #[must_use]
    pub fn carried_forward() -> Self {
        Self {
            fields: RoleKey::ALL
                .into_iter()
                .map(|role| (role, role.previous_field()))
                .collect(),
            assignee: carried_assignee,
            vat_status: row_vat_status,
        }
    }
}

impl<T> RoleFieldMap<T> {
    /// Limits the map to the given roles, keeping the map's order.
    #[must_use]
    pub fn restricted_to(mut self, roles: &[RoleKey]) -> Self {
        self.fields.retain(|(role, _)| roles.contains(role));
        self
    }

    /// Returns the `(role, wire field name)` pairs in order.
    #[must_use]
    pub fn fields(&self) -> &[(RoleKey, &'static str)] {
        &self.fields
    }

    /// Returns the wire field name of a role, if mapped.
    #[must_use]
    pub fn field_name(&self, role: RoleKey) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(mapped, _)| *mapped == role)
            .map(|(_, name)| *name)
    }

    /// Returns the assignee of a role on a source item.
    #[must_use]
    pub fn assignee<'a>(&self, item: &'a T, role: RoleKey) -> Option<&'a str> {
        (self.assignee)(item, role)
    }

    /// Returns the VAT status of a source item.
    #[must_use]
    pub fn vat_status(&self, item: &T) -> VatStatus {
        (self.vat_status)(item)
    }
}

/// Assignment counts for one employee in one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStat {
    /// The employee id.
    pub employee_id: String,
    /// The resolved display name.
    pub employee_name: String,
    /// The role counted.
    pub role: RoleKey,
    /// Assignments at VAT-registered companies.
    pub vat_registered_count: usize,
    /// Assignments at companies not registered for VAT.
    pub not_vat_registered_count: usize,
    /// Assignments at companies with unknown VAT status.
    pub null_vat_status_count: usize,
    /// All assignments.
    pub total: usize,
}

impl EmployeeStat {
    fn bump(&mut self, vat_status: VatStatus) {
        match vat_status {
            VatStatus::Registered => self.vat_registered_count += 1,
            VatStatus::NotRegistered => self.not_vat_registered_count += 1,
            VatStatus::Unknown => self.null_vat_status_count += 1,
        }
        self.total += 1;
    }
}

/// Orders employee display names with Thai collation.
///
/// Thai leading vowels are skipped for the primary comparison, so `เกด`
/// sorts with the `ก` names. Names that collate equal fall back to an exact
/// comparison so the order is total.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    /// Loads the Thai collation tables.
    #[must_use]
    pub fn thai() -> Self {
        let collator: Option<Collator> =
            Collator::try_new(&locale!("th").into(), CollatorOptions::new()).ok();
        Self { collator }
    }

    /// Compares two display names.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary: Ordering = match &self.collator {
            Some(collator) => collator.compare(a, b),
            // Collation data is compiled in; this only guards a failed load.
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        primary.then_with(|| a.cmp(b))
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::thai()
    }
}

/// Compares two display names with Thai collation.
///
/// Builds a collator per call; sort with a [`NameCollator`] instead.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::thai().compare(a, b)
}

/// Counts assignments per employee and role, split by VAT status.
///
/// Every mapped role with an assignee counts once. The same employee in two
/// roles yields two entries.
///
/// # Arguments
///
/// * `records` - The source items
/// * `map` - Where roles and VAT status live on `T`
/// * `catalogs` - Catalogs used to resolve employee names
///
/// # Returns
///
/// Stats sorted by employee name, then role key.
#[must_use]
pub fn aggregate_by_employee<T>(
    records: &[T],
    map: &RoleFieldMap<T>,
    catalogs: &RoleCatalogs,
) -> Vec<EmployeeStat> {
    let mut index: HashMap<(String, RoleKey), usize> = HashMap::new();
    let mut stats: Vec<EmployeeStat> = Vec::new();

    for record in records {
        let vat_status: VatStatus = map.vat_status(record);
        for (role, _) in map.fields() {
            let Some(employee_id) = map.assignee(record, *role) else {
                continue;
            };
            let slot: usize = *index
                .entry((employee_id.to_string(), *role))
                .or_insert_with(|| {
                    stats.push(EmployeeStat {
                        employee_id: employee_id.to_string(),
                        employee_name: resolve_label(Some(employee_id), *role, catalogs),
                        role: *role,
                        vat_registered_count: 0,
                        not_vat_registered_count: 0,
                        null_vat_status_count: 0,
                        total: 0,
                    });
                    stats.len() - 1
                });
            stats[slot].bump(vat_status);
        }
    }

    let collator: NameCollator = NameCollator::thai();
    stats.sort_by(|a, b| {
        collator
            .compare(&a.employee_name, &b.employee_name)
            .then_with(|| a.role.as_str().cmp(b.role.as_str()))
    });
    stats
}

/// One employee's counts within a role summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEmployeeSummary {
    /// The employee id.
    pub employee_id: String,
    /// The resolved display name.
    pub employee_name: String,
    /// Assignments at VAT-registered companies.
    pub vat_registered_count: usize,
    /// Assignments at companies not registered for VAT.
    pub not_vat_registered_count: usize,
    /// Assignments at companies with unknown VAT status.
    pub null_vat_status_count: usize,
    /// All assignments.
    pub total: usize,
}

/// Roll-up of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStat {
    /// The role.
    pub role: RoleKey,
    /// Display label of the role.
    pub role_label: String,
    /// Employees holding the role, busiest first.
    pub employees: Vec<RoleEmployeeSummary>,
    /// Number of distinct employees.
    pub total_employees: usize,
    /// Sum of VAT-registered counts.
    pub total_vat_registered: usize,
    /// Sum of not-registered counts.
    pub total_not_vat_registered: usize,
    /// Sum of unknown-status counts.
    pub total_null_vat_status: usize,
    /// Sum of all employee totals.
    pub grand_total: usize,
}

/// Groups employee stats by role.
///
/// Roles come out in the fixed role order and roles without employees are
/// dropped. Entries for the same employee within a role are merged. Within a
/// role, employees are sorted by total descending with ties kept in
/// first-seen order. Role totals are summed from the employee entries.
#[must_use]
pub fn group_by_role(stats: &[EmployeeStat]) -> Vec<RoleStat> {
    RoleKey::ALL
        .into_iter()
        .filter_map(|role| {
            let mut employees: Vec<RoleEmployeeSummary> = Vec::new();
            for stat in stats.iter().filter(|stat| stat.role == role) {
                match employees
                    .iter_mut()
                    .find(|summary| summary.employee_id == stat.employee_id)
                {
                    Some(summary) => {
                        summary.vat_registered_count += stat.vat_registered_count;
                        summary.not_vat_registered_count += stat.not_vat_registered_count;
                        summary.null_vat_status_count += stat.null_vat_status_count;
                        summary.total += stat.total;
                    }
                    None => employees.push(RoleEmployeeSummary {
                        employee_id: stat.employee_id.clone(),
                        employee_name: stat.employee_name.clone(),
                        vat_registered_count: stat.vat_registered_count,
                        not_vat_registered_count: stat.not_vat_registered_count,
                        null_vat_status_count: stat.null_vat_status_count,
                        total: stat.total,
                    }),
                }
            }

            if employees.is_empty() {
                return None;
            }

            employees.sort_by(|a, b| b.total.cmp(&a.total));

            Some(RoleStat {
                role,
                role_label: role.label().to_string(),
                total_employees: employees.len(),
                total_vat_registered: employees.iter().map(|e| e.vat_registered_count).sum(),
                total_not_vat_registered: employees.iter().map(|e| e.not_vat_registered_count).sum(),
                total_null_vat_status: employees.iter().map(|e| e.null_vat_status_count).sum(),
                grand_total: employees.iter().map(|e| e.total).sum(),
                employees,
            })
        })
        .collect()
}

/// Employee stats together with their role roll-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStatistics {
    /// Per employee and role.
    pub employees: Vec<EmployeeStat>,
    /// Per role.
    pub roles: Vec<RoleStat>,
}

impl RosterStatistics {
    /// Aggregates a source set and groups the result by role.
    #[must_use]
    pub fn summarize<T>(records: &[T], map: &RoleFieldMap<T>, catalogs: &RoleCatalogs) -> Self {
        let employees: Vec<EmployeeStat> = aggregate_by_employee(records, map, catalogs);
        let roles: Vec<RoleStat> = group_by_role(&employees);
        Self { employees, roles }
    }
}

/// One assignment held by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWork {
    /// The role held.
    pub role: RoleKey,
    /// Build code of the company.
    pub build: String,
    /// Company name, when the store provided it.
    pub company_name: Option<String>,
    /// VAT status of the company.
    pub vat_status: VatStatus,
}

/// Lists every role an employee holds across persisted records.
///
/// Records are visited in order; within a record roles follow the fixed
/// role order.
#[must_use]
pub fn employee_work_details(records: &[AssignmentRecord], employee_id: &str) -> Vec<EmployeeWork> {
    records
        .iter()
        .flat_map(|record| {
            RoleKey::ALL
                .into_iter()
                .filter(move |role| record.role_assignments.assignee(*role) == Some(employee_id))
                .map(move |role| EmployeeWork {
                    role,
                    build: record.build.clone(),
                    company_name: record.company_name.clone(),
                    vat_status: record.vat_status,
                })
        })
        .collect()
}
