// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod collaborators;
mod error;
mod load;
mod save;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use collaborators::{
    AssignmentStore, CollaboratorError, CompanyDirectory, EmployeeDirectory, NewAssignment,
};
pub use error::CoreError;
pub use load::load_preview;
pub use save::{
    FailedRow, SaveOptions, SaveOutcome, SavePlan, execute_save, plan_save, retire_assignment,
};
pub use session::{Progress, ReconciliationSession};
