// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, FiscalMonth, RoleAssignments, RoleKey,
    VatStatus,
};
use time::{Date, Month};

use crate::{MonthInput, PreviewRequest, RoleEmployees};

pub const MONTHLY: &str = "รายเดือน";

pub fn create_test_today() -> Date {
    Date::from_calendar_date(2026, Month::March, 15).unwrap()
}

pub fn create_test_month(year: i32, month: u8) -> FiscalMonth {
    FiscalMonth::new(year, month).unwrap()
}

pub fn create_test_company(build: &str, vat_status: VatStatus) -> EligibleCompany {
    EligibleCompany::new(build, &format!("Company {build}"), "0105500000000", vat_status, MONTHLY)
}

pub fn create_test_companies() -> Vec<EligibleCompany> {
    vec![
        create_test_company("A01", VatStatus::Registered),
        create_test_company("B01", VatStatus::NotRegistered),
    ]
}

pub fn create_test_employees() -> RoleEmployees {
    RoleEmployees::from_fn(|_| {
        vec![
            EmployeeRecord::new("E1", "Anong", Some("Nong")),
            EmployeeRecord::new("E2", "Boonmee", None),
            EmployeeRecord::new("E3", "Chanida", Some("Da")),
        ]
    })
}

pub fn create_assignments(pairs: &[(RoleKey, &str)]) -> RoleAssignments {
    let mut assignments: RoleAssignments = RoleAssignments::default();
    for (role, id) in pairs {
        assignments[*role] = Some((*id).to_string());
    }
    assignments
}

pub fn create_full_assignments() -> RoleAssignments {
    create_assignments(&[
        (RoleKey::Accounting, "E1"),
        (RoleKey::TaxInspection, "E2"),
        (RoleKey::Wht, "E3"),
        (RoleKey::Vat, "E3"),
        (RoleKey::DocumentEntry, "E1"),
    ])
}

pub fn create_test_record(
    id: &str,
    build: &str,
    month: FiscalMonth,
    vat_status: VatStatus,
    assignments: RoleAssignments,
) -> AssignmentRecord {
    let mut record: AssignmentRecord = AssignmentRecord::new(id, build, month, assignments);
    record.vat_status = vat_status;
    record.company_name = Some(format!("Company {build}"));
    record
}

pub fn create_preview_request(year: i32, month: u8) -> PreviewRequest {
    PreviewRequest {
        target: MonthInput { year, month },
        previous: None,
        company_statuses: vec![String::from(MONTHLY)],
        companies: create_test_companies(),
        previous_records: Vec::new(),
        target_records: Vec::new(),
        employees: create_test_employees(),
        existing_rows: Vec::new(),
        filter: None,
    }
}
