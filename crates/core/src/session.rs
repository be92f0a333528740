// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use roster_recon_domain::{
    BatchValidation, EligibleCompany, FiscalMonth, IncompleteRow, PreviewFilter, ProposedRow,
    RoleCatalogs, RoleFieldMap, RoleKey, RosterStatistics, check_integrity, current_fiscal_month,
    default_previous_month, filter_preview, find_incomplete, validate_batch,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Count of completed fetches while a preview is loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Fetches completed so far.
    pub current: usize,
    /// Fetches expected in total.
    pub total: usize,
}

impl Progress {
    /// Creates a progress counter expecting `total` fetches.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Records one completed fetch.
    pub const fn advance(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
    }

    /// Returns whether every expected fetch has completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current >= self.total
    }

    /// Returns completion as a fraction in `0.0..=1.0`.
    ///
    /// A counter with nothing to do reports `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64
    }
}

/// The editable state of one operator's reconciliation of a fiscal month.
///
/// A session is a plain value: it is loaded by [`crate::load_preview`],
/// edited row by row, and consumed by [`crate::execute_save`]. Cancelling is
/// dropping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSession {
    /// The month being prepared.
    pub target: FiscalMonth,
    /// The month whose assignees are carried forward.
    pub previous: FiscalMonth,
    /// Company statuses selected by the operator.
    pub company_statuses: Vec<String>,
    /// Eligible companies loaded for the selected statuses.
    #[serde(default)]
    pub companies: Vec<EligibleCompany>,
    /// The proposed rows.
    #[serde(default)]
    pub rows: Vec<ProposedRow>,
    /// One catalog per role.
    #[serde(default)]
    pub catalogs: RoleCatalogs,
    /// Fetch progress of the last load.
    #[serde(default)]
    pub progress: Progress,
}

impl ReconciliationSession {
    /// Creates an empty session.
    ///
    /// # Arguments
    ///
    /// * `target` - The month being prepared
    /// * `previous` - The carry-forward month; defaults to the month before `target`
    /// * `company_statuses` - Selected statuses, possibly the `all` selector
    #[must_use]
    pub fn new(target: FiscalMonth, previous: Option<FiscalMonth>, company_statuses: Vec<String>) -> Self {
        Self {
            target,
            previous: previous.unwrap_or_else(|| default_previous_month(target)),
            company_statuses,
            companies: Vec::new(),
            rows: Vec::new(),
            catalogs: RoleCatalogs::default(),
            progress: Progress::default(),
        }
    }

    /// Creates an empty session targeting the fiscal month currently worked.
    #[must_use]
    pub fn for_today(today: Date, company_statuses: Vec<String>) -> Self {
        Self::new(current_fiscal_month(today), None, company_statuses)
    }

    /// Sets or clears the proposed assignee of one role of one row.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownBuild` if no row has the build.
    pub fn edit(&mut self, build: &str, role: RoleKey, employee_id: Option<String>) -> Result<(), CoreError> {
        let row: &mut ProposedRow = self
            .rows
            .iter_mut()
            .find(|row| row.build == build)
            .ok_or_else(|| CoreError::UnknownBuild {
                build: build.to_string(),
            })?;
        row.set_assignee(role, employee_id);
        Ok(())
    }

    /// Drops the loaded preview, keeping the month and status selection.
    pub fn discard(&mut self) {
        self.companies.clear();
        self.rows.clear();
        self.progress = Progress::default();
    }

    /// Returns the row for a build, if loaded.
    #[must_use]
    pub fn row(&self, build: &str) -> Option<&ProposedRow> {
        self.rows.iter().find(|row| row.build == build)
    }

    /// Returns the rows passing a display filter.
    #[must_use]
    pub fn filtered_rows(&self, filter: &PreviewFilter) -> Vec<&ProposedRow> {
        filter_preview(&self.rows, filter)
    }

    /// Returns the rows with unfilled required roles.
    #[must_use]
    pub fn incomplete(&self) -> Vec<IncompleteRow> {
        find_incomplete(&self.rows)
    }

    /// Returns batch-level integrity warnings.
    #[must_use]
    pub fn integrity_warnings(&self) -> Vec<String> {
        check_integrity(&self.rows, &self.companies)
    }

    /// Validates every row against the loaded companies and catalogs.
    #[must_use]
    pub fn validation(&self) -> BatchValidation {
        validate_batch(&self.rows, &self.companies, &self.catalogs)
    }

    /// Workload statistics over the proposed assignees.
    #[must_use]
    pub fn statistics(&self) -> RosterStatistics {
        RosterStatistics::summarize(&self.rows, &RoleFieldMap::proposed(), &self.catalogs)
    }

    /// Workload statistics over the carried-forward assignees.
    #[must_use]
    pub fn carried_forward_statistics(&self) -> RosterStatistics {
        RosterStatistics::summarize(&self.rows, &RoleFieldMap::carried_forward(), &self.catalogs)
    }
}
