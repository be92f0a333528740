// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, FiscalMonth, OptionCatalog, PreviewInputs,
    ProposedRow, RoleAssignments, RoleCatalogs, RoleKey, VatStatus, build_preview, is_required,
};

pub fn create_test_month(year: i32, month: u8) -> FiscalMonth {
    FiscalMonth::new(year, month).unwrap()
}

pub fn create_test_company(build: &str, vat_status: VatStatus) -> EligibleCompany {
    EligibleCompany::new(
        build,
        &format!("Company {build}"),
        "0105500000000",
        vat_status,
        "รายเดือน",
    )
}

pub fn create_test_employees() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("E1", "Anong", Some("Nong")),
        EmployeeRecord::new("E2", "Boonmee", None),
        EmployeeRecord::new("E3", "Chanida", Some("Da")),
        EmployeeRecord::new("E4", "Dararat", None),
        EmployeeRecord::new("E5", "Ekkachai", Some("Ek")),
    ]
}

/// Every role draws from the same five employees.
pub fn create_test_catalogs() -> RoleCatalogs {
    let catalog: OptionCatalog = OptionCatalog::from_employees(&create_test_employees());
    RoleCatalogs::from_fn(|_| catalog.clone())
}

pub fn create_assignments(pairs: &[(RoleKey, &str)]) -> RoleAssignments {
    let mut assignments: RoleAssignments = RoleAssignments::default();
    for (role, id) in pairs {
        assignments[*role] = Some((*id).to_string());
    }
    assignments
}

pub fn create_test_record(
    id: &str,
    build: &str,
    month: FiscalMonth,
    vat_status: VatStatus,
    pairs: &[(RoleKey, &str)],
) -> AssignmentRecord {
    let mut record: AssignmentRecord =
        AssignmentRecord::new(id, build, month, create_assignments(pairs));
    record.vat_status = vat_status;
    record.company_name = Some(format!("Company {build}"));
    record
}

/// Builds a preview for the given companies with no prior records.
pub fn create_blank_rows(companies: &[EligibleCompany], target: FiscalMonth) -> Vec<ProposedRow> {
    let catalogs: RoleCatalogs = create_test_catalogs();
    let inputs: PreviewInputs<'_> = PreviewInputs {
        target,
        previous: target.previous(),
        companies,
        previous_records: &[],
        target_records: &[],
        catalogs: &catalogs,
    };
    build_preview(&inputs)
}

/// Fills every required role of a row with `E1`..`E5`.
pub fn fill_required(row: &mut ProposedRow) {
    let ids: [&str; 5] = ["E1", "E2", "E3", "E4", "E5"];
    for (role, id) in RoleKey::ALL.into_iter().zip(ids) {
        if is_required(row, role) {
            row.set_assignee(role, Some(id.to_string()));
        }
    }
}
