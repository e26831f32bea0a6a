use std::collections::HashSet;

use tracing::warn;

use crate::types::Employee;

use super::{employee_row, EmployeeTable};

/// Render records as a table, one row per record in input order.
pub fn employee_list(employees: &[Employee]) -> EmployeeTable {
    let mut seen = HashSet::new();
    for href in employees.iter().filter_map(Employee::href) {
        if !seen.insert(href) {
            warn!(href, "duplicate employee self link in collection");
        }
    }

    EmployeeTable::new(employees.iter().map(employee_row).collect())
}
