// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Handlers are pure: the caller supplies the directory and store snapshots
//! in the request, and nothing is persisted here.

use roster_recon::{ReconciliationSession, SaveOptions, SavePlan, plan_save};
use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, FiscalMonth, IncompleteRow, OptionCatalog, PreviewInputs,
    ProposedRow, RoleCatalogs, RoleFieldMap, RoleKey, RosterStatistics, build_preview,
    current_fiscal_month, employee_work_details, expand_status_selection, filter_preview,
    merge_preserving_edits, next_fiscal_month, select_eligible_companies, validate_target_month,
};
use time::Date;
use tracing::{debug, info};

use crate::csv_import::{CsvPreviewResult, preview_csv_assignments};
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    FiscalMonthResponse, ImportValidateRequest, IncompleteRowInfo, MonthInput, PreviewRequest,
    PreviewResponse, RoleEmployees, StatisticsRequest, StatisticsResponse, StatisticsSource,
    ValidateRequest, ValidateResponse,
};

/// Builds one option catalog per role from the directory records.
#[must_use]
pub fn catalogs_from(employees: &RoleEmployees) -> RoleCatalogs {
    employees.map(|_, records| OptionCatalog::from_employees(records))
}

fn resolve_month(input: MonthInput, today: Date) -> Result<FiscalMonth, ApiError> {
    validate_target_month(input.year, input.month, today).map_err(translate_domain_error)
}

/// Keeps the companies whose status was selected, first occurrence per build.
fn companies_for_statuses(
    companies: Vec<EligibleCompany>,
    statuses: &[String],
) -> Vec<EligibleCompany> {
    if statuses.is_empty() {
        return select_eligible_companies(vec![companies]);
    }
    let selected: Vec<String> = expand_status_selection(statuses);
    select_eligible_companies(vec![
        companies
            .into_iter()
            .filter(|company| selected.contains(&company.company_status))
            .collect(),
    ])
}

/// Returns the current and next fiscal months for a calendar date.
#[must_use]
pub fn fiscal_months(today: Date) -> FiscalMonthResponse {
    let current: FiscalMonth = current_fiscal_month(today);
    let next: FiscalMonth = next_fiscal_month(today);
    FiscalMonthResponse {
        today,
        current,
        next,
        current_label: current.to_string(),
        next_label: next.to_string(),
    }
}

/// Builds a preview for the requested target month.
///
/// # Arguments
///
/// * `request` - The months, directory snapshots and any earlier rows
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the target or previous month is
/// invalid.
pub fn preview(request: PreviewRequest, today: Date) -> Result<PreviewResponse, ApiError> {
    let target: FiscalMonth = resolve_month(request.target, today)?;
    let previous: FiscalMonth = match request.previous {
        Some(input) => resolve_month(input, today)?,
        None => target.previous(),
    };

    let companies: Vec<EligibleCompany> =
        companies_for_statuses(request.companies, &request.company_statuses);
    let catalogs: RoleCatalogs = catalogs_from(&request.employees);

    let fresh: Vec<ProposedRow> = build_preview(&PreviewInputs {
        target,
        previous,
        companies: &companies,
        previous_records: &request.previous_records,
        target_records: &request.target_records,
        catalogs: &catalogs,
    });
    let rows: Vec<ProposedRow> = merge_preserving_edits(&request.existing_rows, fresh);

    let total_rows: usize = rows.len();
    let already_assigned_count: usize = rows.iter().filter(|row| row.is_already_assigned).count();
    let visible: Vec<ProposedRow> = match &request.filter {
        Some(filter) => filter_preview(&rows, filter).into_iter().cloned().collect(),
        None => rows,
    };

    info!(
        target = %target,
        previous = %previous,
        total_rows,
        already_assigned_count,
        "Built preview"
    );

    Ok(PreviewResponse {
        target,
        previous,
        rows: visible,
        total_rows,
        already_assigned_count,
        catalogs,
    })
}

/// Reports what saving the given rows would do.
///
/// # Arguments
///
/// * `request` - The rows and the snapshots to check them against
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the target month is invalid.
pub fn validate(request: ValidateRequest, today: Date) -> Result<ValidateResponse, ApiError> {
    let target: FiscalMonth = resolve_month(request.target, today)?;
    let options: SaveOptions = request.options;

    let mut session: ReconciliationSession = ReconciliationSession::new(target, None, Vec::new());
    session.companies = request.companies;
    session.catalogs = catalogs_from(&request.employees);
    session.rows = request.rows;

    let existing: Vec<AssignmentRecord> = request
        .existing_records
        .into_iter()
        .filter(|record| record.is_for(target))
        .collect();
    let plan: SavePlan = plan_save(&session, &existing, options);

    let can_save: bool =
        !plan.to_create.is_empty() && !(options.require_no_warnings && !plan.warnings.is_empty());

    debug!(
        target = %target,
        to_create = plan.to_create.len(),
        invalid = plan.invalid.len(),
        warnings = plan.warnings.len(),
        "Validated rows"
    );

    Ok(ValidateResponse {
        to_create: plan.to_create.into_iter().map(|row| row.build).collect(),
        already_exists: plan.already_exists.into_iter().map(|row| row.build).collect(),
        invalid_rows: plan.invalid,
        incomplete: plan
            .incomplete
            .into_iter()
            .map(|row: IncompleteRow| IncompleteRowInfo {
                missing_labels: row
                    .missing_labels()
                    .into_iter()
                    .map(String::from)
                    .collect(),
                build: row.build,
                missing_fields: row.missing_fields,
            })
            .collect(),
        skipped_incomplete: plan.skipped_incomplete,
        warnings: plan.warnings,
        can_save,
    })
}

fn restrict<T>(map: RoleFieldMap<T>, roles: Option<&[RoleKey]>) -> RoleFieldMap<T> {
    match roles {
        Some(roles) => map.restricted_to(roles),
        None => map,
    }
}

/// Computes workload statistics.
#[must_use]
pub fn statistics(request: &StatisticsRequest) -> StatisticsResponse {
    let catalogs: RoleCatalogs = catalogs_from(&request.employees);
    let roles: Option<&[RoleKey]> = request.roles.as_deref();

    let summary: RosterStatistics = match request.source {
        StatisticsSource::Persisted => RosterStatistics::summarize(
            &request.records,
            &restrict(RoleFieldMap::persisted(), roles),
            &catalogs,
        ),
        StatisticsSource::Proposed => RosterStatistics::summarize(
            &request.rows,
            &restrict(RoleFieldMap::proposed(), roles),
            &catalogs,
        ),
        StatisticsSource::CarriedForward => RosterStatistics::summarize(
            &request.rows,
            &restrict(RoleFieldMap::carried_forward(), roles),
            &catalogs,
        ),
    };

    let work: Option<Vec<_>> = match (request.source, request.employee_id.as_deref()) {
        (StatisticsSource::Persisted, Some(employee_id)) => {
            Some(employee_work_details(&request.records, employee_id))
        }
        _ => None,
    };

    StatisticsResponse {
        employees: summary.employees,
        roles: summary.roles,
        work,
    }
}

/// Validates CSV import content without persisting.
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the CSV header row is unusable.
pub fn import_validate(request: &ImportValidateRequest) -> Result<CsvPreviewResult, ApiError> {
    let catalogs: RoleCatalogs = catalogs_from(&request.employees);
    let result: CsvPreviewResult = preview_csv_assignments(
        &request.csv,
        &request.companies,
        &catalogs,
        &request.existing_records,
    )?;

    info!(
        total_rows = result.total_rows,
        valid_count = result.valid_count,
        invalid_count = result.invalid_count,
        "Validated CSV import"
    );

    Ok(result)
}
