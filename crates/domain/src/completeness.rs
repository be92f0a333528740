// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completeness checks for proposed rows.
//!
//! Completeness is advisory. A row with unfilled roles can still be saved
//! once the operator confirms it.

use crate::types::{ProposedRow, RoleKey};
use serde::{Deserialize, Serialize};

/// A proposed row with at least one unfilled required role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteRow {
    /// Build code of the row.
    pub build: String,
    /// Unfilled roles, in the fixed role order.
    pub missing_fields: Vec<RoleKey>,
}

impl IncompleteRow {
    /// Returns the display labels of the missing roles.
    #[must_use]
    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing_fields
            .iter()
            .map(RoleKey::missing_label)
            .collect()
    }
}

/// Returns whether a role must be filled for a row.
///
/// The VAT filer is only required for VAT-registered companies.
#[must_use]
pub fn is_required(row: &ProposedRow, role: RoleKey) -> bool {
    role != RoleKey::Vat || row.is_vat_registered()
}

/// Returns the required roles a row leaves unfilled, in role order.
#[must_use]
pub fn missing_roles(row: &ProposedRow) -> Vec<RoleKey> {
    RoleKey::ALL
        .into_iter()
        .filter(|role| is_required(row, *role) && row.assignee(*role).is_none())
        .collect()
}

/// Reports every row with unfilled required roles.
///
/// Rows with nothing missing are omitted.
#[must_use]
pub fn find_incomplete(rows: &[ProposedRow]) -> Vec<IncompleteRow> {
    rows.iter()
        .filter_map(|row| {
            let missing_fields: Vec<RoleKey> = missing_roles(row);
            (!missing_fields.is_empty()).then(|| IncompleteRow {
                build: row.build.clone(),
                missing_fields,
            })
        })
        .collect()
}
