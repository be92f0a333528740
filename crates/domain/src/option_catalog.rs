// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Selectable option lists built from directory records.
//!
//! Every role draws its assignees from a catalog. A catalog maps an id to a
//! display label and preserves the order in which ids were first seen.

use crate::types::{EligibleCompany, EmployeeRecord, PerRole, RoleKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An `{id, label}` pair offered in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The id submitted when the option is picked.
    pub value: String,
    /// The text shown for the option.
    pub label: String,
}

/// A directory record reduced to the fields a label is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    /// The record id.
    pub id: String,
    /// Main label text, e.g. an employee name.
    pub primary_label: String,
    /// Optional suffix shown in parentheses, e.g. a nickname.
    pub secondary_label: Option<String>,
}

impl From<&EmployeeRecord> for OptionRecord {
    fn from(employee: &EmployeeRecord) -> Self {
        Self {
            id: employee.employee_id.clone(),
            primary_label: employee.name.clone(),
            secondary_label: employee.nick_name.clone(),
        }
    }
}

impl From<&EligibleCompany> for OptionRecord {
    fn from(company: &EligibleCompany) -> Self {
        Self {
            id: company.build.clone(),
            primary_label: company.build.clone(),
            secondary_label: Some(company.company_name.clone()),
        }
    }
}

/// Formats a display label as `primary(secondary)`.
///
/// The secondary part is dropped when it is blank or when the primary label
/// already carries parenthesised text. A blank primary label becomes `-`.
#[must_use]
pub fn format_label(primary: &str, secondary: Option<&str>) -> String {
    let primary: &str = primary.trim();
    if primary.is_empty() {
        return String::from("-");
    }

    let already_annotated: bool = primary
        .find('(')
        .is_some_and(|open| primary[open..].contains(')'));

    match secondary.map(str::trim).filter(|s| !s.is_empty()) {
        Some(secondary) if !already_annotated => format!("{primary}({secondary})"),
        _ => primary.to_string(),
    }
}

/// Builds picker options from raw records.
///
/// Records with a blank id are skipped. When the same id appears more than
/// once the first record wins and later ones are dropped.
#[must_use]
pub fn build_options(records: &[OptionRecord]) -> Vec<SelectOption> {
    let options: Vec<SelectOption> = records
        .iter()
        .filter(|record| !record.id.trim().is_empty())
        .map(|record| SelectOption {
            value: record.id.trim().to_string(),
            label: format_label(&record.primary_label, record.secondary_label.as_deref()),
        })
        .collect();

    dedupe_options(options)
}

/// Removes options whose value was already seen, keeping first occurrences.
#[must_use]
pub fn dedupe_options(options: Vec<SelectOption>) -> Vec<SelectOption> {
    let mut seen: HashSet<String> = HashSet::new();
    options
        .into_iter()
        .filter(|option| seen.insert(option.value.clone()))
        .collect()
}

/// A deduplicated option list for one role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionCatalog {
    options: Vec<SelectOption>,
}

impl OptionCatalog {
    /// Creates a catalog from options, dropping repeated values.
    #[must_use]
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options: dedupe_options(options),
        }
    }

    /// Creates a catalog from employee directory records.
    #[must_use]
    pub fn from_employees(employees: &[EmployeeRecord]) -> Self {
        let records: Vec<OptionRecord> = employees.iter().map(OptionRecord::from).collect();
        Self {
            options: build_options(&records),
        }
    }

    /// Returns the label for an id, if present.
    #[must_use]
    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == id)
            .map(|option| option.label.as_str())
    }

    /// Returns whether the catalog contains an id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|option| option.value == id)
    }

    /// Returns the options in first-seen order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns the number of options.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether the catalog has no options.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One catalog per responsibility role.
pub type RoleCatalogs = PerRole<OptionCatalog>;

/// Resolves an employee id to its display label in a role's catalog.
///
/// Falls back to the raw id when the catalog does not know it. A missing id
/// resolves to an empty string.
#[must_use]
pub fn resolve_label(id: Option<&str>, role: RoleKey, catalogs: &RoleCatalogs) -> String {
    id.map_or_else(String::new, |id| {
        catalogs[role]
            .label_of(id)
            .map_or_else(|| id.to_string(), str::to_string)
    })
}
