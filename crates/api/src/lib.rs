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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod csv_import;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_import::{
    CsvPreviewResult, CsvRowResult, CsvRowStatus, pad_build_code, preview_csv_assignments,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{catalogs_from, fiscal_months, import_validate, preview, statistics, validate};
pub use request_response::{
    FiscalMonthResponse, ImportValidateRequest, IncompleteRowInfo, MonthInput, PreviewRequest,
    PreviewResponse, RoleEmployees, StatisticsRequest, StatisticsResponse, StatisticsSource,
    ValidateRequest, ValidateResponse,
};
