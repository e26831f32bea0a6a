//! Response envelopes for the HAL collection resource.

use serde::Deserialize;

use crate::types::Employee;

/// Body of `GET /api/employees`.
///
/// Accepts both the client-wrapped shape (`{ "entity": { "_embedded": ... } }`)
/// and the bare HAL document (`{ "_embedded": ... }`).
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum EmployeesEnvelope {
    Wrapped { entity: EmployeesPage },
    Bare(EmployeesPage),
}

#[derive(Deserialize, Debug)]
pub struct EmployeesPage {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
}

#[derive(Deserialize, Debug, Default)]
pub struct Embedded {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl EmployeesEnvelope {
    pub fn into_employees(self) -> Vec<Employee> {
        match self {
            EmployeesEnvelope::Wrapped { entity } => entity.embedded.employees,
            EmployeesEnvelope::Bare(page) => page.embedded.employees,
        }
    }
}
