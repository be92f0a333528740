// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::CollaboratorError;
use roster_recon_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while loading or saving a reconciliation session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// An external collaborator failed.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// No company status was selected for the preview.
    #[error("At least one company status must be selected")]
    NoStatusSelected,

    /// The build is not part of the current preview.
    #[error("Build {build} is not part of the current preview")]
    UnknownBuild {
        /// The requested build.
        build: String,
    },

    /// The session has no rows to save.
    #[error("There are no proposed rows to save")]
    NothingToSave,

    /// Integrity warnings exist and the caller required none.
    #[error("Save blocked by {} integrity warning(s)", .0.len())]
    IntegrityWarnings(Vec<String>),
}
