// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AssignmentRecord, ProposedRow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Proposed rows split by whether the target month already has a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Rows with no record for their build and target month.
    pub to_create: Vec<ProposedRow>,
    /// Rows whose build already has a record for the target month.
    pub already_exists: Vec<ProposedRow>,
}

/// Splits proposed rows against the records stored for the target month.
///
/// A row is in `already_exists` iff a record exists for the same build and
/// exactly the row's target year and month, whether or not that record is
/// active, or an earlier row of the batch has the same build and month. Every
/// other row is in `to_create`, so `to_create` holds at most one row per
/// build and month. Both halves keep input order.
///
/// Rows in `already_exists` must never be submitted for creation.
///
/// # Arguments
///
/// * `rows` - The proposed rows
/// * `existing` - Records fetched for the target month
#[must_use]
pub fn partition(rows: &[ProposedRow], existing: &[AssignmentRecord]) -> Partition {
    let mut taken: HashSet<(&str, i32, u8)> = existing
        .iter()
        .map(|record| (record.build.as_str(), record.fiscal_year, record.fiscal_month))
        .collect();

    let mut split: Partition = Partition::default();
    for row in rows {
        let key: (&str, i32, u8) = (
            row.build.as_str(),
            row.target_fiscal_month.year(),
            row.target_fiscal_month.month(),
        );
        if taken.insert(key) {
            split.to_create.push(row.clone());
        } else {
            split.already_exists.push(row.clone());
        }
    }
    split
}
