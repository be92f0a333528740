// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_blank_rows, create_test_company, create_test_month, create_test_record};
use crate::{
    AssignmentRecord, EligibleCompany, FiscalMonth, Partition, ProposedRow, VatStatus, partition,
};

fn create_rows(target: FiscalMonth) -> Vec<ProposedRow> {
    let companies: Vec<EligibleCompany> = ["001", "002", "003", "004"]
        .into_iter()
        .map(|build| create_test_company(build, VatStatus::NotRegistered))
        .collect();
    create_blank_rows(&companies, target)
}

#[test]
fn test_partition_is_disjoint_and_exhaustive() {
    let target: FiscalMonth = create_test_month(2026, 6);
    let rows: Vec<ProposedRow> = create_rows(target);
    let existing: Vec<AssignmentRecord> = vec![
        create_test_record("r2", "002", target, VatStatus::NotRegistered, &[]),
        create_test_record("r4", "004", target, VatStatus::NotRegistered, &[]),
    ];

    let split: Partition = partition(&rows, &existing);

    assert_eq!(split.to_create.len() + split.already_exists.len(), rows.len());
    for row in &split.to_create {
        assert!(!split.already_exists.iter().any(|other| other.build == row.build));
    }
    let created: Vec<&str> = split.to_create.iter().map(|r| r.build.as_str()).collect();
    let existing_builds: Vec<&str> = split.already_exists.iter().map(|r| r.build.as_str()).collect();
    assert_eq!(created, vec!["001", "003"]);
    assert_eq!(existing_builds, vec!["002", "004"]);
}

#[test]
fn test_partition_requires_exact_month_match() {
    let target: FiscalMonth = create_test_month(2026, 6);
    let rows: Vec<ProposedRow> = create_rows(target);
    let existing: Vec<AssignmentRecord> = vec![
        create_test_record("r1", "001", target.previous(), VatStatus::NotRegistered, &[]),
        create_test_record("r2", "002", create_test_month(2025, 6), VatStatus::NotRegistered, &[]),
    ];

    let split: Partition = partition(&rows, &existing);

    assert!(split.already_exists.is_empty());
    assert_eq!(split.to_create.len(), 4);
}

#[test]
fn test_partition_counts_inactive_records_as_existing() {
    let target: FiscalMonth = create_test_month(2026, 6);
    let rows: Vec<ProposedRow> = create_rows(target);
    let mut retired: AssignmentRecord =
        create_test_record("r3", "003", target, VatStatus::NotRegistered, &[]);
    retired.is_active = false;

    let split: Partition = partition(&rows, &[retired]);

    assert_eq!(split.already_exists.len(), 1);
    assert_eq!(split.already_exists[0].build, "003");
}

#[test]
fn test_partition_creates_repeated_build_once() {
    let target: FiscalMonth = create_test_month(2026, 6);
    let mut rows: Vec<ProposedRow> = create_rows(target);
    rows.push(rows[0].clone());

    let split: Partition = partition(&rows, &[]);

    let created: Vec<&str> = split.to_create.iter().map(|r| r.build.as_str()).collect();
    assert_eq!(created, vec!["001", "002", "003", "004"]);
    assert_eq!(split.already_exists.len(), 1);
    assert_eq!(split.already_exists[0].build, "001");
}
