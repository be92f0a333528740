// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Save planning and execution.
//!
//! A save never overwrites: rows whose build already has a record for the
//! target month are reported and left alone. Each remaining row is created
//! on its own, and a failure of one row does not stop the others.

use crate::collaborators::{AssignmentStore, NewAssignment};
use crate::error::CoreError;
use crate::session::ReconciliationSession;
use roster_recon_domain::{
    AssignmentRecord, BatchValidation, IncompleteRow, InvalidRow, Partition, ProposedRow,
    check_integrity, find_incomplete, partition, validate_batch,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// Operator choices that govern a save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Save rows with unfilled required roles, storing the gaps as null.
    #[serde(default)]
    pub confirm_incomplete: bool,
    /// Refuse to save while any integrity warning exists.
    #[serde(default)]
    pub require_no_warnings: bool,
}

/// What a save would do, computed without side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePlan {
    /// Rows that will be created.
    pub to_create: Vec<ProposedRow>,
    /// Rows skipped because the target month already has a record.
    pub already_exists: Vec<ProposedRow>,
    /// Rows rejected by eligibility validation.
    pub invalid: Vec<InvalidRow>,
    /// New rows with unfilled required roles.
    pub incomplete: Vec<IncompleteRow>,
    /// Builds of incomplete rows left out because they were not confirmed.
    pub skipped_incomplete: Vec<String>,
    /// Batch-level integrity warnings.
    pub warnings: Vec<String>,
}

/// Plans a save of the session's rows.
///
/// # Arguments
///
/// * `session` - The session being saved
/// * `existing` - Records already stored for the target month
/// * `options` - Operator choices
#[must_use]
pub fn plan_save(
    session: &ReconciliationSession,
    existing: &[AssignmentRecord],
    options: SaveOptions,
) -> SavePlan {
    let warnings: Vec<String> = check_integrity(&session.rows, &session.companies);
    let Partition {
        to_create,
        already_exists,
    } = partition(&session.rows, existing);
    let incomplete: Vec<IncompleteRow> = find_incomplete(&to_create);

    let (candidates, skipped_incomplete): (Vec<ProposedRow>, Vec<String>) =
        if options.confirm_incomplete {
            (to_create, Vec::new())
        } else {
            let gaps: HashSet<&str> = incomplete.iter().map(|row| row.build.as_str()).collect();
            let (skipped, kept): (Vec<ProposedRow>, Vec<ProposedRow>) = to_create
                .into_iter()
                .partition(|row| gaps.contains(row.build.as_str()));
            (kept, skipped.into_iter().map(|row| row.build).collect())
        };

    let validation: BatchValidation =
        validate_batch(&candidates, &session.companies, &session.catalogs);

    SavePlan {
        to_create: validation.valid_rows,
        already_exists,
        invalid: validation.invalid_rows,
        incomplete,
        skipped_incomplete,
        warnings,
    }
}

/// A row the store refused to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRow {
    /// Build code of the row.
    pub build: String,
    /// The store's error message.
    pub reason: String,
}

/// Result of executing a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Records created by the store.
    pub created: Vec<AssignmentRecord>,
    /// Rows the store failed to create.
    pub failed: Vec<FailedRow>,
    /// Builds skipped because the target month already had a record.
    pub already_exists: Vec<String>,
    /// Rows rejected by validation.
    pub invalid: Vec<InvalidRow>,
    /// Builds skipped because they were incomplete and not confirmed.
    pub skipped_incomplete: Vec<String>,
    /// Integrity warnings raised for the batch.
    pub warnings: Vec<String>,
}

/// Saves the session's new rows to the assignment store.
///
/// Afterwards the session keeps only the rows that failed, were invalid or
/// were skipped as incomplete, so the operator can fix and retry them.
/// Created and already-existing rows are dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The session has no rows
/// - The existing target-month records cannot be fetched
/// - `require_no_warnings` is set and integrity warnings exist
pub async fn execute_save<S>(
    session: &mut ReconciliationSession,
    store: &S,
    options: SaveOptions,
) -> Result<SaveOutcome, CoreError>
where
    S: AssignmentStore + Sync,
{
    if session.rows.is_empty() {
        return Err(CoreError::NothingToSave);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let builds: Vec<String> = session
        .rows
        .iter()
        .filter(|row| seen.insert(row.build.as_str()))
        .map(|row| row.build.clone())
        .collect();
    let existing: Vec<AssignmentRecord> =
        store.list_by_builds_and_month(&builds, session.target).await?;

    let plan: SavePlan = plan_save(session, &existing, options);
    if options.require_no_warnings && !plan.warnings.is_empty() {
        warn!(warnings = plan.warnings.len(), "Save blocked by integrity warnings");
        return Err(CoreError::IntegrityWarnings(plan.warnings));
    }

    let mut outcome: SaveOutcome = SaveOutcome {
        already_exists: plan.already_exists.iter().map(|row| row.build.clone()).collect(),
        invalid: plan.invalid,
        skipped_incomplete: plan.skipped_incomplete,
        warnings: plan.warnings,
        ..SaveOutcome::default()
    };

    for row in &plan.to_create {
        match store.create(NewAssignment::from(row)).await {
            Ok(record) => {
                info!(build = %row.build, id = %record.id, "Assignment created");
                outcome.created.push(record);
            }
            Err(err) => {
                warn!(build = %row.build, error = %err, "Assignment create failed");
                outcome.failed.push(FailedRow {
                    build: row.build.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let retry: HashSet<&str> = outcome
        .failed
        .iter()
        .map(|row| row.build.as_str())
        .chain(outcome.invalid.iter().map(|row| row.build.as_str()))
        .chain(outcome.skipped_incomplete.iter().map(String::as_str))
        .collect();
    session.rows.retain(|row| retry.contains(row.build.as_str()));

    info!(
        target = %session.target,
        created = outcome.created.len(),
        failed = outcome.failed.len(),
        already_exists = outcome.already_exists.len(),
        invalid = outcome.invalid.len(),
        skipped_incomplete = outcome.skipped_incomplete.len(),
        "Save finished"
    );

    Ok(outcome)
}

/// Soft-deletes a stored record.
///
/// Bulk saves never call this; it is for clearing a record before the
/// operator plans the month again.
///
/// # Errors
///
/// Returns an error if the store rejects the delete.
pub async fn retire_assignment<S>(store: &S, id: &str) -> Result<(), CoreError>
where
    S: AssignmentStore + Sync,
{
    store.soft_delete(id).await?;
    info!(id = %id, "Assignment retired");
    Ok(())
}
