// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk assignment import.
//!
//! Nothing here persists. Each row is checked against the client directory,
//! the role catalogs and the records already stored, and reported as valid
//! or invalid with its errors and warnings.

use csv::StringRecord;
use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, RoleAssignments, RoleCatalogs, RoleKey,
    normalize_employee_id,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::ApiError;

/// Earliest fiscal year accepted in an import.
const MIN_IMPORT_YEAR: i32 = 2000;

/// Latest fiscal year accepted in an import.
const MAX_IMPORT_YEAR: i32 = 2100;

/// Build codes are at least this long once padded.
const MIN_BUILD_LENGTH: usize = 3;

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["build", "fiscal_year", "fiscal_month"];

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The padded build code (if present).
    pub build: Option<String>,
    /// The parsed fiscal year (if valid).
    pub fiscal_year: Option<i32>,
    /// The parsed fiscal month (if valid).
    pub fiscal_month: Option<u8>,
    /// Assignees read from the role columns.
    pub role_assignments: RoleAssignments,
    /// The row status.
    pub status: CsvRowStatus,
    /// Problems that prevent importing the row.
    pub errors: Vec<String>,
    /// Problems that do not prevent importing the row.
    pub warnings: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Left-pads purely numeric build codes to three digits.
///
/// Spreadsheets drop leading zeros, so `7` is read back as `007`.
#[must_use]
pub fn pad_build_code(raw: &str) -> String {
    let trimmed: &str = raw.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("{trimmed:0>MIN_BUILD_LENGTH$}")
    } else {
        trimmed.to_string()
    }
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !header_map.contains_key(**required))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Parses a numeric field, recording an error when it is missing, malformed
/// or outside `range`.
fn parse_bounded<T>(
    value: Option<String>,
    field_name: &str,
    range: std::ops::RangeInclusive<T>,
    errors: &mut Vec<String>,
) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + std::fmt::Display,
{
    let Some(value) = value else {
        errors.push(format!("{field_name}: required field is missing or empty"));
        return None;
    };
    match value.parse::<T>() {
        Ok(parsed) if range.contains(&parsed) => Some(parsed),
        Ok(parsed) => {
            errors.push(format!(
                "{field_name}: {parsed} must be between {} and {}",
                range.start(),
                range.end()
            ));
            None
        }
        Err(_) => {
            errors.push(format!("{field_name}: invalid number '{value}'"));
            None
        }
    }
}

/// Parses and checks one CSV row.
fn check_row(
    row_number: usize,
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    companies: &[EligibleCompany],
    catalogs: &RoleCatalogs,
    existing: &HashSet<(String, i32, u8)>,
) -> CsvRowResult {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let build: Option<String> = get_field("build").map(|raw| pad_build_code(&raw));
    match &build {
        None => errors.push(String::from("build: required field is missing or empty")),
        Some(code) if code.chars().count() < MIN_BUILD_LENGTH => errors.push(format!(
            "build: '{code}' must be at least {MIN_BUILD_LENGTH} characters"
        )),
        Some(code) if !companies.iter().any(|company| &company.build == code) => {
            errors.push(format!("build: '{code}' not found in client directory"));
        }
        Some(_) => {}
    }

    let fiscal_year: Option<i32> = parse_bounded(
        get_field("fiscal_year"),
        "fiscal_year",
        MIN_IMPORT_YEAR..=MAX_IMPORT_YEAR,
        &mut errors,
    );
    let fiscal_month: Option<u8> =
        parse_bounded(get_field("fiscal_month"), "fiscal_month", 1..=12, &mut errors);

    let role_assignments: RoleAssignments = RoleAssignments::from_fn(|role: RoleKey| {
        normalize_employee_id(get_field(role.persisted_field()))
    });
    for (role, id) in role_assignments.iter() {
        if let Some(id) = id
            && !catalogs[role].contains(id)
        {
            warnings.push(format!(
                "{}: employee '{id}' not found in directory",
                role.persisted_field()
            ));
        }
    }

    if let (Some(build), Some(year), Some(month)) = (&build, fiscal_year, fiscal_month)
        && existing.contains(&(build.clone(), year, month))
    {
        warnings.push(format!(
            "build: assignment for '{build}' in {year}/{month:02} already exists and will be skipped"
        ));
    }

    let status: CsvRowStatus = if errors.is_empty() {
        CsvRowStatus::Valid
    } else {
        CsvRowStatus::Invalid
    };

    CsvRowResult {
        row_number,
        build,
        fiscal_year,
        fiscal_month,
        role_assignments,
        status,
        errors,
        warnings,
    }
}

/// Flags the first row of every `(build, year, month)` repeated in the file.
fn flag_duplicates(rows: &mut [CsvRowResult]) {
    let mut counts: HashMap<(String, i32, u8), usize> = HashMap::new();
    for row in rows.iter() {
        if let (Some(build), Some(year), Some(month)) = (&row.build, row.fiscal_year, row.fiscal_month)
        {
            *counts.entry((build.clone(), year, month)).or_insert(0) += 1;
        }
    }

    let mut flagged: HashSet<(String, i32, u8)> = HashSet::new();
    for row in rows.iter_mut() {
        let (Some(build), Some(year), Some(month)) = (row.build.clone(), row.fiscal_year, row.fiscal_month)
        else {
            continue;
        };
        let key: (String, i32, u8) = (build, year, month);
        let count: usize = counts.get(&key).copied().unwrap_or(0);
        if count > 1 && flagged.insert(key.clone()) {
            row.warnings.push(format!(
                "build: '{}' appears {count} times in the file for {}/{:02}",
                key.0, key.1, key.2
            ));
        }
    }
}

/// Previews and validates CSV assignment data without persisting.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
/// * `companies` - The client directory
/// * `catalogs` - Role catalogs for assignee lookups
/// * `existing_records` - Records already stored
///
/// # Returns
///
/// * `Ok(CsvPreviewResult)` with per-row validation results
/// * `Err(ApiError)` if CSV format is invalid or cannot be parsed
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the header row cannot be read or
/// a required header is missing.
pub fn preview_csv_assignments(
    csv_content: &str,
    companies: &[EligibleCompany],
    catalogs: &RoleCatalogs,
    existing_records: &[AssignmentRecord],
) -> Result<CsvPreviewResult, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let existing: HashSet<(String, i32, u8)> = existing_records
        .iter()
        .map(|record| (record.build.clone(), record.fiscal_year, record.fiscal_month))
        .collect();

    let mut rows: Vec<CsvRowResult> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        match result {
            Ok(record) => rows.push(check_row(
                row_number,
                &record,
                &header_map,
                companies,
                catalogs,
                &existing,
            )),
            Err(e) => rows.push(CsvRowResult {
                row_number,
                build: None,
                fiscal_year: None,
                fiscal_month: None,
                role_assignments: RoleAssignments::default(),
                status: CsvRowStatus::Invalid,
                errors: vec![format!("CSV parse error: {e}")],
                warnings: Vec::new(),
            }),
        }
    }

    flag_duplicates(&mut rows);

    let valid_count: usize = rows
        .iter()
        .filter(|row| row.status == CsvRowStatus::Valid)
        .count();

    Ok(CsvPreviewResult {
        total_rows: rows.len(),
        valid_count,
        invalid_count: rows.len() - valid_count,
        rows,
    })
}
