use serde::Serialize;
use tabled::Tabled;

use crate::app::App;
use crate::client::PayrollClient;
use crate::error::{PayrollError, Result};
use crate::output;
use crate::types::Employee;
use crate::validation::{self, Field};

#[derive(Tabled, Serialize, Debug, PartialEq, Eq)]
pub struct Issue {
    #[tabled(rename = "Employee")]
    pub employee: String,
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Problem")]
    pub message: String,
}

impl Issue {
    fn new(index: usize, employee: &Employee, field: Field) -> Self {
        Self {
            employee: employee
                .href()
                .map(String::from)
                .unwrap_or_else(|| format!("#{}", index + 1)),
            field: field.label().to_string(),
            message: field.message().to_string(),
        }
    }
}

/// Collect rule violations across the collection, in record order.
pub fn find_issues(employees: &[Employee]) -> Vec<Issue> {
    employees
        .iter()
        .enumerate()
        .flat_map(|(index, employee)| {
            validation::validate(employee)
                .into_iter()
                .map(move |field| Issue::new(index, employee, field))
        })
        .collect()
}

/// Number of records breaking at least one rule. Records sharing an href count separately.
pub fn count_invalid(employees: &[Employee]) -> usize {
    employees
        .iter()
        .filter(|employee| !validation::validate(employee).is_empty())
        .count()
}

pub async fn run(client: &PayrollClient) -> Result<()> {
    let mut app = App::new();
    app.mount(client).await?;

    let employees = app.employees();
    let issues = find_issues(employees);

    if issues.is_empty() {
        output::print_message(&output::success(&format!(
            "All {} employee records are valid",
            employees.len()
        )));
        return Ok(());
    }

    output::print_table(&issues, |issue| Issue {
        employee: issue.employee.clone(),
        field: issue.field.clone(),
        message: output::failure(&issue.message),
    });

    Err(PayrollError::InvalidRecords {
        count: count_invalid(employees),
        total: employees.len(),
    })
}
