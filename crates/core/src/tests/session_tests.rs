// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{FakeCompanies, FakeEmployees, FakeStore, create_test_company, create_test_month};
use crate::{CoreError, Progress, ReconciliationSession, load_preview};
use futures::executor::block_on;
use roster_recon_domain::{
    AssignmentStatusFilter, FiscalMonth, PreviewFilter, RoleKey, RosterStatistics, VatStatus,
};
use time::{Date, Month};

fn create_loaded_session() -> ReconciliationSession {
    let directory: FakeCompanies = FakeCompanies::default().with(
        "รายเดือน",
        vec![
            create_test_company("A01", VatStatus::Registered, "รายเดือน"),
            create_test_company("B01", VatStatus::NotRegistered, "รายเดือน"),
        ],
    );
    let mut session: ReconciliationSession = ReconciliationSession::new(
        create_test_month(2026, 3),
        None,
        vec![String::from("รายเดือน")],
    );
    block_on(load_preview(
        &mut session,
        &directory,
        &FakeStore::default(),
        &FakeEmployees::default(),
    ))
    .unwrap();
    session
}

#[test]
fn test_new_session_defaults_previous_month() {
    let session: ReconciliationSession =
        ReconciliationSession::new(create_test_month(2026, 1), None, Vec::new());
    assert_eq!(session.previous, create_test_month(2025, 12));
}

#[test]
fn test_session_for_today_targets_current_fiscal_month() {
    let today: Date = Date::from_calendar_date(2026, Month::January, 10).unwrap();
    let session: ReconciliationSession = ReconciliationSession::for_today(today, Vec::new());
    let expected: FiscalMonth = create_test_month(2025, 12);
    assert_eq!(session.target, expected);
    assert_eq!(session.previous, create_test_month(2025, 11));
}

#[test]
fn test_edit_unknown_build_is_rejected() {
    let mut session: ReconciliationSession = create_loaded_session();
    let result: Result<(), CoreError> = session.edit("Z99", RoleKey::Vat, Some(String::from("E1")));
    assert_eq!(
        result,
        Err(CoreError::UnknownBuild {
            build: String::from("Z99")
        })
    );
}

#[test]
fn test_session_delegates_validation() {
    let mut session: ReconciliationSession = create_loaded_session();
    assert_eq!(session.incomplete().len(), 2);
    assert!(session.integrity_warnings().is_empty());

    session
        .edit("A01", RoleKey::Accounting, Some(String::from("ghost")))
        .unwrap();
    let validation = session.validation();
    assert_eq!(validation.invalid_rows.len(), 1);
    assert_eq!(
        validation.invalid_rows[0].reason,
        "accounting: Employee ID not found in system"
    );
}

#[test]
fn test_session_statistics_follow_edits() {
    let mut session: ReconciliationSession = create_loaded_session();
    session.edit("A01", RoleKey::Wht, Some(String::from("E3"))).unwrap();
    session.edit("B01", RoleKey::Wht, Some(String::from("E3"))).unwrap();

    let stats: RosterStatistics = session.statistics();

    assert_eq!(stats.employees.len(), 1);
    assert_eq!(stats.employees[0].employee_name, "Chanida(Da)");
    assert_eq!(stats.roles[0].grand_total, 2);
    assert!(session.carried_forward_statistics().employees.is_empty());
}

#[test]
fn test_filtered_rows_and_discard() {
    let mut session: ReconciliationSession = create_loaded_session();
    session.edit("B01", RoleKey::Accounting, Some(String::from("E2"))).unwrap();
    let mut filter: PreviewFilter = PreviewFilter {
        assignment_status: AssignmentStatusFilter::Unassigned,
        ..PreviewFilter::default()
    };
    filter.assignees.accounting = Some(String::from("E2"));

    assert_eq!(session.filtered_rows(&filter).len(), 1);
    assert!(session.row("B01").is_some());

    session.discard();
    assert!(session.rows.is_empty());
    assert_eq!(session.progress, Progress::default());
    assert_eq!(session.company_statuses, vec![String::from("รายเดือน")]);
}

#[test]
fn test_progress_fraction() {
    let mut progress: Progress = Progress::new(4);
    assert!((progress.fraction() - 0.0).abs() < f64::EPSILON);
    progress.advance();
    assert!((progress.fraction() - 0.25).abs() < f64::EPSILON);
    for _ in 0..10 {
        progress.advance();
    }
    assert_eq!(progress.current, 4);
    assert!(progress.is_complete());
    assert!((Progress::new(0).fraction() - 0.0).abs() < f64::EPSILON);
}
