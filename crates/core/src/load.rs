// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::{AssignmentStore, CompanyDirectory, EmployeeDirectory};
use crate::error::CoreError;
use crate::session::{Progress, ReconciliationSession};
use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, OptionCatalog, PreviewInputs, ProposedRow,
    RoleCatalogs, RoleKey, build_preview, expand_status_selection, merge_preserving_edits,
    select_eligible_companies,
};
use tracing::{debug, info, warn};

/// Fetches beyond the per-status company queries: previous month, target month.
const RECORD_FETCHES: usize = 2;

/// Loads or reloads the preview of a session.
///
/// Fetches run one after another and advance `session.progress` as each
/// completes: one company query per selected status, the previous month's
/// records, the target month's records, then one catalog per role.
///
/// Rows already in the session keep any assignee the operator filled in.
///
/// # Arguments
///
/// * `session` - The session to load into
/// * `companies` - The client directory
/// * `store` - The assignment store
/// * `employees` - The employee directory
///
/// # Errors
///
/// Returns an error if:
/// - No company status is selected
/// - A company, previous-month or catalog fetch fails
///
/// A failed target-month fetch is logged and treated as "no existing records".
/// Duplicates are checked again at save time.
pub async fn load_preview<C, S, E>(
    session: &mut ReconciliationSession,
    companies: &C,
    store: &S,
    employees: &E,
) -> Result<(), CoreError>
where
    C: CompanyDirectory + Sync,
    S: AssignmentStore + Sync,
    E: EmployeeDirectory + Sync,
{
    let statuses: Vec<String> = expand_status_selection(&session.company_statuses);
    if statuses.is_empty() {
        return Err(CoreError::NoStatusSelected);
    }

    session.progress = Progress::new(statuses.len() + RECORD_FETCHES + RoleKey::ALL.len());

    let mut per_status: Vec<Vec<EligibleCompany>> = Vec::with_capacity(statuses.len());
    for status in &statuses {
        let found: Vec<EligibleCompany> = companies.list_eligible(status).await?;
        debug!(status = %status, count = found.len(), "Fetched eligible companies");
        per_status.push(found);
        session.progress.advance();
    }
    let eligible: Vec<EligibleCompany> = select_eligible_companies(per_status);

    let previous_records: Vec<AssignmentRecord> =
        store.list_by_fiscal_month(session.previous).await?;
    session.progress.advance();

    let target_records: Vec<AssignmentRecord> =
        match store.list_by_fiscal_month(session.target).await {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    target = %session.target,
                    error = %err,
                    "Could not fetch target month records, continuing without them"
                );
                Vec::new()
            }
        };
    session.progress.advance();

    let mut catalogs: RoleCatalogs = RoleCatalogs::default();
    for role in RoleKey::ALL {
        let records: Vec<EmployeeRecord> =
            employees.list_by_taxonomy(role.directory_taxonomies()).await?;
        catalogs[role] = OptionCatalog::from_employees(&records);
        session.progress.advance();
    }

    let inputs: PreviewInputs<'_> = PreviewInputs {
        target: session.target,
        previous: session.previous,
        companies: &eligible,
        previous_records: &previous_records,
        target_records: &target_records,
        catalogs: &catalogs,
    };
    let rebuilt: Vec<ProposedRow> = build_preview(&inputs);
    let rows: Vec<ProposedRow> = merge_preserving_edits(&session.rows, rebuilt);

    info!(
        target = %session.target,
        previous = %session.previous,
        companies = eligible.len(),
        rows = rows.len(),
        already_assigned = rows.iter().filter(|row| row.is_already_assigned).count(),
        "Preview loaded"
    );

    session.companies = eligible;
    session.rows = rows;
    session.catalogs = catalogs;

    Ok(())
}
