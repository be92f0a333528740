// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fiscal month derivation.
//!
//! Assignments are booked one month behind the calendar: in January 2026 the
//! fiscal month being worked is December 2025, while the "next" fiscal month
//! is January 2026 itself.

use crate::error::DomainError;
use crate::types::FiscalMonth;
use time::Date;

/// Earliest fiscal year accepted as a target month.
pub const MIN_TARGET_YEAR: i32 = 2000;

/// How many years past the current calendar year a target month may lie.
pub const MAX_TARGET_YEARS_AHEAD: i32 = 2;

/// Returns the fiscal month currently being worked for a calendar date.
///
/// The fiscal month is the calendar month minus one, rolling back into
/// December of the previous year in January.
#[must_use]
pub fn current_fiscal_month(today: Date) -> FiscalMonth {
    next_fiscal_month(today).previous()
}

/// Returns the next fiscal month for a calendar date.
///
/// This is the calendar month itself.
#[must_use]
pub fn next_fiscal_month(today: Date) -> FiscalMonth {
    FiscalMonth::from_calendar(today.year(), today.month())
}

/// Returns the default previous month for a target month.
///
/// Used when the operator does not pick the carry-forward month explicitly.
#[must_use]
pub const fn default_previous_month(target: FiscalMonth) -> FiscalMonth {
    target.previous()
}

/// Validates a target fiscal month entered by an operator.
///
/// # Arguments
///
/// * `year` - The entered fiscal year
/// * `month` - The entered fiscal month
/// * `today` - The current calendar date, bounding how far ahead the year may be
///
/// # Errors
///
/// Returns an error if:
/// - The month is not in 1..=12
/// - The year is before 2000 or more than two years past `today`
pub fn validate_target_month(year: i32, month: u8, today: Date) -> Result<FiscalMonth, DomainError> {
    let fiscal_month: FiscalMonth = FiscalMonth::new(year, month)?;

    let max_year: i32 = today.year() + MAX_TARGET_YEARS_AHEAD;
    if !(MIN_TARGET_YEAR..=max_year).contains(&year) {
        return Err(DomainError::FiscalYearOutOfRange {
            year,
            min: MIN_TARGET_YEAR,
            max: max_year,
        });
    }

    Ok(fiscal_month)
}
