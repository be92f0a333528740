// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use roster_recon::SaveOptions;
use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, EmployeeStat, EmployeeWork, FiscalMonth,
    InvalidRow, PerRole, PreviewFilter, ProposedRow, RoleCatalogs, RoleKey, RoleStat,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Employee directory records per role, as fetched by the client.
pub type RoleEmployees = PerRole<Vec<EmployeeRecord>>;

/// A year/month pair as entered by an operator, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInput {
    /// The fiscal year.
    pub year: i32,
    /// The fiscal month.
    pub month: u8,
}

/// API response describing the fiscal months for a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalMonthResponse {
    /// The calendar date used.
    pub today: Date,
    /// The fiscal month currently worked.
    pub current: FiscalMonth,
    /// The next fiscal month.
    pub next: FiscalMonth,
    /// `current` formatted as `YYYY/MM`.
    pub current_label: String,
    /// `next` formatted as `YYYY/MM`.
    pub next_label: String,
}

/// API request to build a preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The month being prepared.
    pub target: MonthInput,
    /// The carry-forward month; the month before `target` when absent.
    #[serde(default)]
    pub previous: Option<MonthInput>,
    /// Company statuses to keep; empty keeps every company.
    #[serde(default)]
    pub company_statuses: Vec<String>,
    /// Companies from the client directory.
    pub companies: Vec<EligibleCompany>,
    /// Records of the previous month.
    #[serde(default)]
    pub previous_records: Vec<AssignmentRecord>,
    /// Records already stored for the target month.
    #[serde(default)]
    pub target_records: Vec<AssignmentRecord>,
    /// Employee directory records per role.
    #[serde(default)]
    pub employees: RoleEmployees,
    /// Rows of an earlier preview whose edits should survive the rebuild.
    #[serde(default)]
    pub existing_rows: Vec<ProposedRow>,
    /// Display filter applied to the returned rows.
    #[serde(default)]
    pub filter: Option<PreviewFilter>,
}

/// API response for a preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// The validated target month.
    pub target: FiscalMonth,
    /// The carry-forward month used.
    pub previous: FiscalMonth,
    /// The proposed rows, after filtering.
    pub rows: Vec<ProposedRow>,
    /// Number of rows before filtering.
    pub total_rows: usize,
    /// Rows whose company already has a target-month record.
    pub already_assigned_count: usize,
    /// The role catalogs the rows were resolved against.
    pub catalogs: RoleCatalogs,
}

/// API request to validate rows before a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// The month being saved.
    pub target: MonthInput,
    /// The proposed rows.
    pub rows: Vec<ProposedRow>,
    /// The live client directory.
    pub companies: Vec<EligibleCompany>,
    /// Employee directory records per role.
    #[serde(default)]
    pub employees: RoleEmployees,
    /// Records already stored for the target month.
    #[serde(default)]
    pub existing_records: Vec<AssignmentRecord>,
    /// Operator choices.
    #[serde(default)]
    pub options: SaveOptions,
}

/// An incomplete row with display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteRowInfo {
    /// Build code of the row.
    pub build: String,
    /// Unfilled roles.
    pub missing_fields: Vec<RoleKey>,
    /// Labels of the unfilled roles.
    pub missing_labels: Vec<String>,
}

/// API response describing what a save would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Builds that would be created.
    pub to_create: Vec<String>,
    /// Builds skipped because the target month already has a record.
    pub already_exists: Vec<String>,
    /// Rows rejected by eligibility validation.
    pub invalid_rows: Vec<InvalidRow>,
    /// New rows with unfilled required roles.
    pub incomplete: Vec<IncompleteRowInfo>,
    /// Incomplete builds left out because they were not confirmed.
    pub skipped_incomplete: Vec<String>,
    /// Batch-level integrity warnings.
    pub warnings: Vec<String>,
    /// Whether a save with these options would create anything.
    pub can_save: bool,
}

/// Which assignees statistics are computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsSource {
    /// Persisted assignment records.
    #[default]
    Persisted,
    /// The editable assignees of proposed rows.
    Proposed,
    /// The carried-forward assignees of proposed rows.
    CarriedForward,
}

/// API request for workload statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsRequest {
    /// The source to aggregate.
    #[serde(default)]
    pub source: StatisticsSource,
    /// Persisted records, used with [`StatisticsSource::Persisted`].
    #[serde(default)]
    pub records: Vec<AssignmentRecord>,
    /// Proposed rows, used with the other sources.
    #[serde(default)]
    pub rows: Vec<ProposedRow>,
    /// Employee directory records per role, for names.
    #[serde(default)]
    pub employees: RoleEmployees,
    /// Roles to count; every role when absent.
    #[serde(default)]
    pub roles: Option<Vec<RoleKey>>,
    /// Employee to list individual assignments for.
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// API response with workload statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    /// Per employee and role.
    pub employees: Vec<EmployeeStat>,
    /// Per role.
    pub roles: Vec<RoleStat>,
    /// Assignments of `employee_id`, when requested over persisted records.
    pub work: Option<Vec<EmployeeWork>>,
}

/// API request to validate a CSV import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportValidateRequest {
    /// The raw CSV content.
    pub csv: String,
    /// The client directory.
    pub companies: Vec<EligibleCompany>,
    /// Employee directory records per role.
    #[serde(default)]
    pub employees: RoleEmployees,
    /// Records already stored for the months in the file.
    #[serde(default)]
    pub existing_records: Vec<AssignmentRecord>,
}
