// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_recon_domain::{AssignmentRecord, EmployeeWork, ProposedRow, RoleKey, VatStatus};

use super::helpers::{
    create_assignments, create_preview_request, create_test_employees, create_test_month,
    create_test_record, create_test_today,
};
use crate::{StatisticsRequest, StatisticsResponse, StatisticsSource, preview, statistics};

fn create_records() -> Vec<AssignmentRecord> {
    vec![
        create_test_record(
            "r1",
            "A01",
            create_test_month(2026, 3),
            VatStatus::Registered,
            create_assignments(&[(RoleKey::Accounting, "E1")]),
        ),
        create_test_record(
            "r2",
            "B01",
            create_test_month(2026, 3),
            VatStatus::NotRegistered,
            create_assignments(&[(RoleKey::Accounting, "E1"), (RoleKey::Wht, "E2")]),
        ),
    ]
}

fn create_request(source: StatisticsSource) -> StatisticsRequest {
    StatisticsRequest {
        source,
        records: create_records(),
        rows: Vec::new(),
        employees: create_test_employees(),
        roles: None,
        employee_id: None,
    }
}

#[test]
fn test_persisted_statistics_split_by_vat_status() {
    let response: StatisticsResponse = statistics(&create_request(StatisticsSource::Persisted));

    assert_eq!(response.employees.len(), 2);
    assert_eq!(response.employees[0].employee_id, "E1");
    assert_eq!(response.employees[0].vat_registered_count, 1);
    assert_eq!(response.employees[0].not_vat_registered_count, 1);
    assert_eq!(response.employees[0].total, 2);
    assert_eq!(response.employees[1].employee_id, "E2");

    let roles: Vec<RoleKey> = response.roles.iter().map(|stat| stat.role).collect();
    assert_eq!(roles, vec![RoleKey::Accounting, RoleKey::Wht]);
    assert_eq!(response.roles[0].grand_total, 2);
    assert!(response.work.is_none());
}

#[test]
fn test_statistics_restricted_to_roles() {
    let mut request: StatisticsRequest = create_request(StatisticsSource::Persisted);
    request.roles = Some(vec![RoleKey::Wht]);

    let response: StatisticsResponse = statistics(&request);

    assert_eq!(response.employees.len(), 1);
    assert_eq!(response.employees[0].employee_id, "E2");
    assert_eq!(response.roles.len(), 1);
}

#[test]
fn test_statistics_include_employee_work() {
    let mut request: StatisticsRequest = create_request(StatisticsSource::Persisted);
    request.employee_id = Some(String::from("E1"));

    let response: StatisticsResponse = statistics(&request);
    let work: Vec<EmployeeWork> = response.work.unwrap();

    assert_eq!(work.len(), 2);
    assert!(work.iter().all(|item| item.role == RoleKey::Accounting));
    assert_eq!(work[1].company_name.as_deref(), Some("Company B01"));
}

#[test]
fn test_proposed_and_carried_forward_statistics() {
    let mut rows: Vec<ProposedRow> = preview(create_preview_request(2026, 3), create_test_today())
        .unwrap()
        .rows;
    rows[0].set_assignee(RoleKey::Vat, Some(String::from("E3")));

    let mut request: StatisticsRequest = create_request(StatisticsSource::Proposed);
    request.rows = rows;
    let proposed: StatisticsResponse = statistics(&request);

    assert_eq!(proposed.employees.len(), 1);
    assert_eq!(proposed.employees[0].employee_id, "E3");
    assert_eq!(proposed.employees[0].vat_registered_count, 1);

    request.source = StatisticsSource::CarriedForward;
    let carried: StatisticsResponse = statistics(&request);
    assert!(carried.employees.is_empty());
    assert!(carried.roles.is_empty());
}
