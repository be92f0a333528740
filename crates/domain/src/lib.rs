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
#![allow(clippy::multiple_crate_versions)]

mod completeness;
mod duplicates;
mod eligibility;
mod error;
mod fiscal_calendar;
mod option_catalog;
mod preview;
mod statistics;
mod types;

#[cfg(test)]
mod tests;

pub use completeness::{IncompleteRow, find_incomplete, is_required, missing_roles};
pub use duplicates::{Partition, partition};
pub use eligibility::{
    BatchValidation, EligibilityError, InvalidRow, check_integrity, validate_batch,
    validate_build, validate_employee, validate_row,
};
pub use fiscal_calendar::{
    MAX_TARGET_YEARS_AHEAD, MIN_TARGET_YEAR, current_fiscal_month, default_previous_month,
    next_fiscal_month, validate_target_month,
};
pub use option_catalog::{
    OptionCatalog, OptionRecord, RoleCatalogs, SelectOption, build_options, dedupe_options,
    format_label, resolve_label,
};
pub use preview::{
    ALL_COMPANY_STATUSES, ALL_STATUSES_SELECTOR, AssignmentStatusFilter, PreviewFilter,
    PreviewInputs, build_preview, expand_status_selection, filter_preview,
    merge_preserving_edits, select_eligible_companies,
};
pub use statistics::{
    EmployeeStat, EmployeeWork, NameCollator, RoleEmployeeSummary, RoleFieldMap, RoleStat,
    RosterStatistics, aggregate_by_employee, compare_names, employee_work_details, group_by_role,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, FiscalMonth, PerRole, PreviousAssignee,
    ProposedRow, RoleAssignments, RoleKey, VatStatus, normalize_employee_id,
};
