// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_recon_domain::{EligibleCompany, RoleKey, VatStatus};

use super::helpers::{
    create_assignments, create_test_company, create_test_employees, create_test_month,
    create_test_record,
};
use crate::{
    ApiError, CsvPreviewResult, CsvRowStatus, ImportValidateRequest, import_validate,
};

fn create_companies() -> Vec<EligibleCompany> {
    vec![
        create_test_company("001", VatStatus::Registered),
        create_test_company("A01", VatStatus::NotRegistered),
    ]
}

fn create_request(csv: &str) -> ImportValidateRequest {
    ImportValidateRequest {
        csv: csv.to_string(),
        companies: create_companies(),
        employees: create_test_employees(),
        existing_records: Vec::new(),
    }
}

#[test]
fn test_valid_row_with_padded_build() {
    let csv: &str = "Build,Fiscal Year,Fiscal Month,accounting_responsible\n1,2026,3,E1\n";
    let result: CsvPreviewResult = import_validate(&create_request(csv)).unwrap();

    assert_eq!(result.total_rows, 1);
    assert_eq!(result.valid_count, 1);
    let row = &result.rows[0];
    assert_eq!(row.row_number, 1);
    assert_eq!(row.build.as_deref(), Some("001"));
    assert_eq!(row.fiscal_year, Some(2026));
    assert_eq!(row.fiscal_month, Some(3));
    assert_eq!(row.role_assignments.assignee(RoleKey::Accounting), Some("E1"));
    assert!(row.errors.is_empty());
    assert!(row.warnings.is_empty());
}

#[test]
fn test_invalid_rows_collect_every_error() {
    let csv: &str = "build,fiscal_year,fiscal_month\n12,1999,13\nA1,2026,3\n,2026,x\n";
    let result: CsvPreviewResult = import_validate(&create_request(csv)).unwrap();

    assert_eq!(result.total_rows, 3);
    assert_eq!(result.valid_count, 0);
    assert_eq!(result.invalid_count, 3);

    assert_eq!(result.rows[0].errors.len(), 3);
    assert_eq!(
        result.rows[0].errors[0],
        "build: '012' not found in client directory"
    );
    assert_eq!(
        result.rows[1].errors,
        vec![String::from("build: 'A1' must be at least 3 characters")]
    );
    assert_eq!(result.rows[2].errors.len(), 2);
    assert!(result.rows.iter().all(|row| row.status == CsvRowStatus::Invalid));
}

#[test]
fn test_warnings_do_not_invalidate_rows() {
    let csv: &str = "build,fiscal_year,fiscal_month,vat_filer_responsible\n\
                     001,2026,3,ghost\n\
                     A01,2026,3,E2\n\
                     001,2026,3,E3\n";
    let mut request: ImportValidateRequest = create_request(csv);
    request.existing_records = vec![create_test_record(
        "t1",
        "A01",
        create_test_month(2026, 3),
        VatStatus::NotRegistered,
        create_assignments(&[]),
    )];

    let result: CsvPreviewResult = import_validate(&request).unwrap();

    assert_eq!(result.valid_count, 3);
    assert_eq!(
        result.rows[0].warnings,
        vec![
            String::from("vat_filer_responsible: employee 'ghost' not found in directory"),
            String::from("build: '001' appears 2 times in the file for 2026/03"),
        ]
    );
    assert_eq!(
        result.rows[1].warnings,
        vec![String::from(
            "build: assignment for 'A01' in 2026/03 already exists and will be skipped"
        )]
    );
    assert!(result.rows[2].warnings.is_empty());
}

#[test]
fn test_missing_headers_rejected() {
    let result: Result<CsvPreviewResult, ApiError> =
        import_validate(&create_request("build,fiscal_month\n001,3\n"));
    assert_eq!(
        result,
        Err(ApiError::InvalidCsvFormat {
            reason: String::from("Missing required headers: fiscal_year"),
        })
    );
}

#[test]
fn test_short_rows_are_read_as_empty_fields() {
    let csv: &str = "build,fiscal_year,fiscal_month,accounting_responsible\n001,2026,3\n";
    let result: CsvPreviewResult = import_validate(&create_request(csv)).unwrap();

    assert_eq!(result.valid_count, 1);
    assert_eq!(result.rows[0].role_assignments.assignee(RoleKey::Accounting), None);
}
