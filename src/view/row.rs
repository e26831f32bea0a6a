use crate::types::Employee;

use super::Row;

/// Render one record as a row. Missing fields become empty cells.
pub fn employee_row(employee: &Employee) -> Row {
    Row {
        key: employee.href().map(String::from),
        first_name: employee.first_name.clone().unwrap_or_default(),
        last_name: employee.last_name.clone().unwrap_or_default(),
        description: employee.description.clone().unwrap_or_default(),
        job_years: employee
            .job_years
            .as_ref()
            .map(|years| years.to_string())
            .unwrap_or_default(),
        job_title: employee.job_title.clone().unwrap_or_default(),
        email: employee.email.clone().unwrap_or_default(),
    }
}
