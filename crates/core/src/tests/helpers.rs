// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory collaborators.

use crate::{
    AssignmentStore, CollaboratorError, CompanyDirectory, EmployeeDirectory, NewAssignment,
};
use futures::future::ready;
use roster_recon_domain::{
    AssignmentRecord, EligibleCompany, EmployeeRecord, FiscalMonth, RoleAssignments, RoleKey,
    VatStatus,
};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Mutex;

pub fn create_test_month(year: i32, month: u8) -> FiscalMonth {
    FiscalMonth::new(year, month).unwrap()
}

pub fn create_test_company(build: &str, vat_status: VatStatus, status: &str) -> EligibleCompany {
    EligibleCompany::new(build, &format!("Company {build}"), "0105500000000", vat_status, status)
}

pub fn create_assignments(pairs: &[(RoleKey, &str)]) -> RoleAssignments {
    let mut assignments: RoleAssignments = RoleAssignments::default();
    for (role, id) in pairs {
        assignments[*role] = Some((*id).to_string());
    }
    assignments
}

#[derive(Default)]
pub struct FakeCompanies {
    pub by_status: HashMap<String, Vec<EligibleCompany>>,
    pub queried: Mutex<Vec<String>>,
}

impl FakeCompanies {
    pub fn with(mut self, status: &str, companies: Vec<EligibleCompany>) -> Self {
        self.by_status.insert(status.to_string(), companies);
        self
    }
}

impl CompanyDirectory for FakeCompanies {
    fn list_eligible(&self, status: &str) -> impl Future<Output = Result<Vec<EligibleCompany>, CollaboratorError>> + Send {
        self.queried.lock().unwrap().push(status.to_string());
        ready(Ok(self.by_status.get(status).cloned().unwrap_or_default()))
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub records: Mutex<Vec<AssignmentRecord>>,
    pub failing_builds: HashSet<String>,
    pub unreachable_months: HashSet<FiscalMonth>,
    pub created: Mutex<Vec<NewAssignment>>,
}

impl FakeStore {
    pub fn with_records(records: Vec<AssignmentRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn created_builds(&self) -> Vec<String> {
        self.created
            .lock()
            .unwrap()
            .iter()
            .map(|assignment| assignment.build.clone())
            .collect()
    }
}

impl AssignmentStore for FakeStore {
    fn list_by_fiscal_month(
        &self,
        month: FiscalMonth,
    ) -> impl Future<Output = Result<Vec<AssignmentRecord>, CollaboratorError>> + Send {
        if self.unreachable_months.contains(&month) {
            return ready(Err(CollaboratorError::new("list_by_fiscal_month", "timed out")));
        }
        let records: Vec<AssignmentRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.is_for(month))
            .cloned()
            .collect();
        ready(Ok(records))
    }

    fn list_by_builds_and_month(
        &self,
        builds: &[String],
        month: FiscalMonth,
    ) -> impl Future<Output = Result<Vec<AssignmentRecord>, CollaboratorError>> + Send {
        let records: Vec<AssignmentRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.is_for(month) && builds.contains(&record.build))
            .cloned()
            .collect();
        ready(Ok(records))
    }

    fn create(&self, assignment: NewAssignment) -> impl Future<Output = Result<AssignmentRecord, CollaboratorError>> + Send {
        if self.failing_builds.contains(&assignment.build) {
            return ready(Err(CollaboratorError::new("create", "HTTP 500")));
        }
        let mut records = self.records.lock().unwrap();
        let record: AssignmentRecord = AssignmentRecord::new(
            &format!("rec-{}", records.len() + 1),
            &assignment.build,
            assignment.fiscal_month,
            assignment.role_assignments.clone(),
        );
        records.push(record.clone());
        self.created.lock().unwrap().push(assignment);
        ready(Ok(record))
    }

    fn soft_delete(&self, id: &str) -> impl Future<Output = Result<(), CollaboratorError>> + Send {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.is_active = false;
                ready(Ok(()))
            }
            None => ready(Err(CollaboratorError::new("soft_delete", format!("{id} not found")))),
        }
    }
}

/// Every taxonomy returns the same five employees plus `T1` for `audit`.
pub struct FakeEmployees {
    pub by_taxonomy: HashMap<&'static str, Vec<EmployeeRecord>>,
}

impl Default for FakeEmployees {
    fn default() -> Self {
        let staff: Vec<EmployeeRecord> = vec![
            EmployeeRecord::new("E1", "Anong", Some("Nong")),
            EmployeeRecord::new("E2", "Boonmee", None),
            EmployeeRecord::new("E3", "Chanida", Some("Da")),
            EmployeeRecord::new("E4", "Dararat", None),
            EmployeeRecord::new("E5", "Ekkachai", Some("Ek")),
        ];
        let mut auditors: Vec<EmployeeRecord> = staff.clone();
        auditors.push(EmployeeRecord::new("T1", "Thida", None));

        let mut by_taxonomy: HashMap<&'static str, Vec<EmployeeRecord>> = HashMap::new();
        by_taxonomy.insert("service", staff.clone());
        by_taxonomy.insert("data_entry_and_service", staff.clone());
        by_taxonomy.insert("data_entry", staff);
        by_taxonomy.insert("audit", auditors);
        Self { by_taxonomy }
    }
}

impl EmployeeDirectory for FakeEmployees {
    fn list_by_taxonomy(
        &self,
        taxonomies: &[&'static str],
    ) -> impl Future<Output = Result<Vec<EmployeeRecord>, CollaboratorError>> + Send {
        let employees: Vec<EmployeeRecord> = taxonomies
            .iter()
            .filter_map(|taxonomy| self.by_taxonomy.get(taxonomy))
            .flatten()
            .cloned()
            .collect();
        ready(Ok(employees))
    }
}
