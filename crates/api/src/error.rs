// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roster_recon::CoreError;
use roster_recon_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The uploaded CSV could not be read.
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
    /// An external system failed.
    Upstream {
        /// The operation that failed.
        operation: String,
        /// The upstream error message.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
            Self::Upstream { operation, message } => {
                write!(f, "Upstream failure during {operation}: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidFiscalMonth { month } => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid fiscal month: {month}. Must be between 1 and 12"),
        },
        DomainError::FiscalYearOutOfRange { year, min, max } => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Fiscal year {year} must be between {min} and {max}"),
        },
        DomainError::UnknownRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown responsibility role '{role}'"),
        },
        DomainError::InvalidAssignmentStatusFilter(value) => ApiError::InvalidInput {
            field: String::from("assignment_status"),
            message: format!("'{value}' must be all, assigned, or unassigned"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain) => translate_domain_error(domain),
        CoreError::Collaborator(upstream) => ApiError::Upstream {
            operation: upstream.operation,
            message: upstream.message,
        },
        CoreError::NoStatusSelected => ApiError::InvalidInput {
            field: String::from("company_statuses"),
            message: String::from("At least one company status must be selected"),
        },
        CoreError::UnknownBuild { build } => ApiError::ResourceNotFound {
            resource_type: String::from("Build"),
            message: format!("Build {build} is not part of the current preview"),
        },
        CoreError::NothingToSave => ApiError::DomainRuleViolation {
            rule: String::from("non_empty_batch"),
            message: String::from("There are no proposed rows to save"),
        },
        CoreError::IntegrityWarnings(warnings) => ApiError::DomainRuleViolation {
            rule: String::from("no_integrity_warnings"),
            message: warnings.join("; "),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}
