// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The five responsibility roles assigned per company per fiscal month.
///
/// The set is closed. Every role-indexed structure in this crate is keyed on
/// exactly these variants, in the order given by [`RoleKey::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    /// Bookkeeping.
    Accounting,
    /// Tax inspection.
    TaxInspection,
    /// Withholding-tax filing.
    Wht,
    /// VAT filing. Only required for VAT-registered companies.
    Vat,
    /// Document entry.
    DocumentEntry,
}

impl RoleKey {
    /// All roles in the fixed evaluation order.
    pub const ALL: [Self; 5] = [
        Self::Accounting,
        Self::TaxInspection,
        Self::Wht,
        Self::Vat,
        Self::DocumentEntry,
    ];

    /// Returns the role key as used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accounting => "accounting",
            Self::TaxInspection => "tax_inspection",
            Self::Wht => "wht",
            Self::Vat => "vat",
            Self::DocumentEntry => "document_entry",
        }
    }

    /// Returns the display label used in dashboards.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Accounting => "Accounting",
            Self::TaxInspection => "Tax inspection",
            Self::Wht => "WHT filing",
            Self::Vat => "VAT filing",
            Self::DocumentEntry => "Document entry",
        }
    }

    /// Returns the label used when this role is reported as unfilled.
    #[must_use]
    pub const fn missing_label(&self) -> &'static str {
        match self {
            Self::Accounting => "Accounting responsible",
            Self::TaxInspection => "Tax inspector",
            Self::Wht => "WHT filer",
            Self::Vat => "VAT filer",
            Self::DocumentEntry => "Document entry clerk",
        }
    }

    /// Field name of this role on a persisted assignment record.
    #[must_use]
    pub const fn persisted_field(&self) -> &'static str {
        match self {
            Self::Accounting => "accounting_responsible",
            Self::TaxInspection => "tax_inspection_responsible",
            Self::Wht => "wht_filer_responsible",
            Self::Vat => "vat_filer_responsible",
            Self::DocumentEntry => "document_entry_responsible",
        }
    }

    /// Field name of this role's editable assignee on a proposed row.
    #[must_use]
    pub const fn proposed_field(&self) -> &'static str {
        match self {
            Self::Accounting => "new_accounting_responsible",
            Self::TaxInspection => "new_tax_inspection_responsible",
            Self::Wht => "new_wht_filer_responsible",
            Self::Vat => "new_vat_filer_responsible",
            Self::DocumentEntry => "new_document_entry_responsible",
        }
    }

    /// Field name of this role's carried-forward assignee on a proposed row.
    #[must_use]
    pub const fn previous_field(&self) -> &'static str {
        match self {
            Self::Accounting => "prev_accounting_responsible",
            Self::TaxInspection => "prev_tax_inspection_responsible",
            Self::Wht => "prev_wht_filer_responsible",
            Self::Vat => "prev_vat_filer_responsible",
            Self::DocumentEntry => "prev_document_entry_responsible",
        }
    }

    /// Employee-directory taxonomies whose members may hold this role.
    #[must_use]
    pub const fn directory_taxonomies(&self) -> &'static [&'static str] {
        match self {
            Self::Accounting => &["service", "data_entry_and_service"],
            Self::TaxInspection => &["audit"],
            Self::Wht | Self::Vat => &["data_entry_and_service"],
            Self::DocumentEntry => &["data_entry_and_service", "data_entry"],
        }
    }
}

impl FromStr for RoleKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accounting" => Ok(Self::Accounting),
            "tax_inspection" => Ok(Self::TaxInspection),
            "wht" => Ok(Self::Wht),
            "vat" => Ok(Self::Vat),
            "document_entry" => Ok(Self::DocumentEntry),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One value per responsibility role.
///
/// This replaces string-keyed role maps: every role has a slot, so callers
/// cannot forget one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerRole<T> {
    /// Value for [`RoleKey::Accounting`].
    #[serde(default)]
    pub accounting: T,
    /// Value for [`RoleKey::TaxInspection`].
    #[serde(default)]
    pub tax_inspection: T,
    /// Value for [`RoleKey::Wht`].
    #[serde(default)]
    pub wht: T,
    /// Value for [`RoleKey::Vat`].
    #[serde(default)]
    pub vat: T,
    /// Value for [`RoleKey::DocumentEntry`].
    #[serde(default)]
    pub document_entry: T,
}

impl<T> PerRole<T> {
    /// Builds a value for every role from a function of the role.
    pub fn from_fn(mut f: impl FnMut(RoleKey) -> T) -> Self {
        Self {
            accounting: f(RoleKey::Accounting),
            tax_inspection: f(RoleKey::TaxInspection),
            wht: f(RoleKey::Wht),
            vat: f(RoleKey::Vat),
            document_entry: f(RoleKey::DocumentEntry),
        }
    }

    /// Returns the value for a role.
    #[must_use]
    pub const fn get(&self, role: RoleKey) -> &T {
        match role {
            RoleKey::Accounting => &self.accounting,
            RoleKey::TaxInspection => &self.tax_inspection,
            RoleKey::Wht => &self.wht,
            RoleKey::Vat => &self.vat,
            RoleKey::DocumentEntry => &self.document_entry,
        }
    }

    /// Returns a mutable reference to the value for a role.
    pub const fn get_mut(&mut self, role: RoleKey) -> &mut T {
        match role {
            RoleKey::Accounting => &mut self.accounting,
            RoleKey::TaxInspection => &mut self.tax_inspection,
            RoleKey::Wht => &mut self.wht,
            RoleKey::Vat => &mut self.vat,
            RoleKey::DocumentEntry => &mut self.document_entry,
        }
    }

    /// Iterates `(role, value)` pairs in the fixed role order.
    pub fn iter(&self) -> impl Iterator<Item = (RoleKey, &T)> {
        RoleKey::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Maps every slot to a new value.
    pub fn map<U>(&self, mut f: impl FnMut(RoleKey, &T) -> U) -> PerRole<U> {
        PerRole::from_fn(|role| f(role, self.get(role)))
    }
}

impl<T> Index<RoleKey> for PerRole<T> {
    type Output = T;

    fn index(&self, role: RoleKey) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<RoleKey> for PerRole<T> {
    fn index_mut(&mut self, role: RoleKey) -> &mut Self::Output {
        self.get_mut(role)
    }
}

/// Employee id assigned to each role, `None` when unassigned.
pub type RoleAssignments = PerRole<Option<String>>;

impl PerRole<Option<String>> {
    /// Returns the assignee id for a role, if any.
    ///
    /// A blank id counts as unassigned.
    #[must_use]
    pub fn assignee(&self, role: RoleKey) -> Option<&str> {
        self.get(role).as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Returns whether at least one role has an assignee.
    #[must_use]
    pub fn has_any(&self) -> bool {
        RoleKey::ALL.into_iter().any(|role| self.assignee(role).is_some())
    }

    /// Returns a copy with every id trimmed and blank ids cleared.
    #[must_use]
    pub fn normalized(&self) -> Self {
        self.map(|_, id| normalize_employee_id(id.clone()))
    }
}

/// Normalizes a raw employee id: blank or whitespace-only ids become `None`.
#[must_use]
pub fn normalize_employee_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())
}

/// Reads role assignments, clearing blank ids.
fn deserialize_assignments<'de, D>(deserializer: D) -> Result<RoleAssignments, D::Error>
where
    D: Deserializer<'de>,
{
    RoleAssignments::deserialize(deserializer).map(|raw| raw.normalized())
}

/// Reads optional role assignments, clearing blank ids.
fn deserialize_optional_assignments<'de, D>(
    deserializer: D,
) -> Result<Option<RoleAssignments>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RoleAssignments>::deserialize(deserializer)
        .map(|raw| raw.map(|assignments| assignments.normalized()))
}

/// VAT-registration status of a client company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum VatStatus {
    /// Registered for VAT; a VAT filer is required.
    Registered,
    /// Not registered for VAT.
    NotRegistered,
    /// Status unknown or not recorded.
    #[default]
    Unknown,
}

impl VatStatus {
    /// Maps a client-registry status label onto a `VatStatus`.
    ///
    /// Accepts both the registry's snake_case keys and its Thai display
    /// labels. Anything else maps to [`VatStatus::Unknown`].
    #[must_use]
    pub fn from_registry_label(label: &str) -> Self {
        match label.trim() {
            "registered" | "จดภาษีมูลค่าเพิ่ม" => Self::Registered,
            "not_registered" | "ยังไม่จดภาษีมูลค่าเพิ่ม" => Self::NotRegistered,
            _ => Self::Unknown,
        }
    }

    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::NotRegistered => "not_registered",
            Self::Unknown => "unknown",
        }
    }
}

impl From<Option<String>> for VatStatus {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unknown, |label| Self::from_registry_label(&label))
    }
}

impl std::fmt::Display for VatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw year/month pair accepted on deserialization before validation.
#[derive(Deserialize)]
struct FiscalMonthParts {
    year: i32,
    month: u8,
}

/// A fiscal month used for assignment bookkeeping.
///
/// Fiscal months are derived from a calendar date (see
/// [`crate::current_fiscal_month`]) or carried as explicit user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "FiscalMonthParts")]
pub struct FiscalMonth {
    year: i32,
    month: u8,
}

impl TryFrom<FiscalMonthParts> for FiscalMonth {
    type Error = DomainError;

    fn try_from(parts: FiscalMonthParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month)
    }
}

impl FiscalMonth {
    /// Creates a fiscal month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFiscalMonth` if `month` is not in 1..=12.
    pub const fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        if month < 1 || month > 12 {
            return Err(DomainError::InvalidFiscalMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Creates a fiscal month from a calendar year and month.
    pub(crate) const fn from_calendar(year: i32, month: time::Month) -> Self {
        Self {
            year,
            month: month as u8,
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the month before this one, rolling over the year in January.
    #[must_use]
    pub const fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the month after this one, rolling over the year in December.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl std::fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}", self.year, self.month)
    }
}

/// A client company eligible for assignment.
///
/// Sourced from the external client registry and never modified here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleCompany {
    /// The build code, unique per company.
    pub build: String,
    /// The company's display name.
    pub company_name: String,
    /// The legal entity (tax id) number.
    #[serde(default)]
    pub legal_entity_number: String,
    /// VAT-registration status.
    #[serde(default)]
    pub vat_status: VatStatus,
    /// Engagement status, e.g. monthly or cancelled.
    #[serde(default)]
    pub company_status: String,
}

impl EligibleCompany {
    /// Creates a new `EligibleCompany`.
    #[must_use]
    pub fn new(
        build: &str,
        company_name: &str,
        legal_entity_number: &str,
        vat_status: VatStatus,
        company_status: &str,
    ) -> Self {
        Self {
            build: build.to_string(),
            company_name: company_name.to_string(),
            legal_entity_number: legal_entity_number.to_string(),
            vat_status,
            company_status: company_status.to_string(),
        }
    }
}

const fn default_active() -> bool {
    true
}

/// A persisted roster row for one company and one fiscal month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Build code of the serviced company.
    pub build: String,
    /// Fiscal year of the assignment.
    pub fiscal_year: i32,
    /// Fiscal month of the assignment (1..=12).
    pub fiscal_month: u8,
    /// Assignee per role.
    #[serde(default, deserialize_with = "deserialize_assignments")]
    pub role_assignments: RoleAssignments,
    /// Whether the record is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Whether the month's working data has been reset for this record.
    #[serde(default)]
    pub is_reset_completed: bool,
    /// Company name joined in by the store, if provided.
    #[serde(default)]
    pub company_name: Option<String>,
    /// VAT status of the serviced company joined in by the store.
    #[serde(default)]
    pub vat_status: VatStatus,
}

impl AssignmentRecord {
    /// Creates an active record for the given fiscal month.
    #[must_use]
    pub fn new(id: &str, build: &str, month: FiscalMonth, role_assignments: RoleAssignments) -> Self {
        Self {
            id: id.to_string(),
            build: build.to_string(),
            fiscal_year: month.year(),
            fiscal_month: month.month(),
            role_assignments,
            is_active: true,
            is_reset_completed: false,
            company_name: None,
            vat_status: VatStatus::Unknown,
        }
    }

    /// Returns whether this record belongs to exactly the given fiscal month.
    #[must_use]
    pub const fn is_for(&self, month: FiscalMonth) -> bool {
        self.fiscal_year == month.year() && self.fiscal_month == month.month()
    }
}

/// The assignee carried over from the previous month, with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousAssignee {
    /// The employee id.
    pub employee_id: String,
    /// The resolved display name.
    pub employee_name: String,
}

/// A proposed, not yet persisted roster row.
///
/// Created in bulk by [`crate::build_preview`], edited role by role, and
/// discarded on cancel or after a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedRow {
    /// Build code of the company.
    pub build: String,
    /// Company display name.
    pub company_name: String,
    /// Legal entity number.
    pub legal_entity_number: String,
    /// VAT-registration status.
    pub vat_status: VatStatus,
    /// Engagement status.
    pub company_status: String,
    /// The fiscal month this row will be saved under.
    pub target_fiscal_month: FiscalMonth,
    /// Whether a record already exists for the target month.
    pub is_already_assigned: bool,
    /// Identifier of the existing target-month record.
    pub existing_assignment_id: Option<String>,
    /// Assignees of the existing target-month record, for reference only.
    #[serde(default, deserialize_with = "deserialize_optional_assignments")]
    pub existing_role_assignments: Option<RoleAssignments>,
    /// Assignees from the previous month, read-only.
    pub previous_role_assignments: PerRole<Option<PreviousAssignee>>,
    /// Assignees proposed for the target month, user-editable.
    #[serde(deserialize_with = "deserialize_assignments")]
    pub new_role_assignments: RoleAssignments,
}

impl ProposedRow {
    /// Returns the proposed assignee for a role.
    #[must_use]
    pub fn assignee(&self, role: RoleKey) -> Option<&str> {
        self.new_role_assignments.assignee(role)
    }

    /// Returns the carried-forward assignee id for a role.
    #[must_use]
    pub fn previous_assignee(&self, role: RoleKey) -> Option<&str> {
        self.previous_role_assignments
            .get(role)
            .as_ref()
            .map(|prev| prev.employee_id.as_str())
    }

    /// Sets or clears the proposed assignee for a role.
    ///
    /// Blank ids clear the role.
    pub fn set_assignee(&mut self, role: RoleKey, employee_id: Option<String>) {
        self.new_role_assignments[role] = normalize_employee_id(employee_id);
    }

    /// Returns whether the company is VAT-registered.
    #[must_use]
    pub fn is_vat_registered(&self) -> bool {
        self.vat_status == VatStatus::Registered
    }
}

/// A raw employee record as exposed by the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee id.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// Optional nickname shown alongside the name.
    #[serde(default)]
    pub nick_name: Option<String>,
}

impl EmployeeRecord {
    /// Creates a new `EmployeeRecord`.
    #[must_use]
    pub fn new(employee_id: &str, name: &str, nick_name: Option<&str>) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            nick_name: nick_name.map(str::to_string),
        }
    }
}
