// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_recon::{CollaboratorError, CoreError};
use roster_recon_domain::DomainError;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_domain_errors_become_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::InvalidFiscalMonth { month: 0 });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "month"));

    let err: ApiError = translate_domain_error(DomainError::UnknownRole(String::from("ceo")));
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'role': Unknown responsibility role 'ceo'"
    );
}

#[test]
fn test_collaborator_failure_becomes_upstream() {
    let err: ApiError = translate_core_error(CoreError::Collaborator(CollaboratorError::new(
        "list_eligible",
        "timeout",
    )));
    assert_eq!(
        err,
        ApiError::Upstream {
            operation: String::from("list_eligible"),
            message: String::from("timeout"),
        }
    );
}

#[test]
fn test_core_rule_errors() {
    assert!(matches!(
        ApiError::from(CoreError::NothingToSave),
        ApiError::DomainRuleViolation { .. }
    ));
    assert!(matches!(
        ApiError::from(CoreError::UnknownBuild {
            build: String::from("Z99")
        }),
        ApiError::ResourceNotFound { .. }
    ));
    let err: ApiError = ApiError::from(CoreError::IntegrityWarnings(vec![
        String::from("a"),
        String::from("b"),
    ]));
    assert_eq!(
        err.to_string(),
        "Domain rule violation (no_integrity_warnings): a; b"
    );
}
