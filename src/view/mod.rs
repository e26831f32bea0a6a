//! Declarative output tree for the employee table.
//!
//! The renderers in this module are pure functions from borrowed records to
//! an owned tree. Backends (`html`, the terminal table in `output`) consume
//! the tree and never look at the records themselves.
//! - `row`: one record to one [`Row`]
//! - `list`: a record sequence to an [`EmployeeTable`]
//! - `html`: the tree as an HTML fragment or document

pub mod html;
pub mod list;
pub mod row;

use tabled::Tabled;

pub use list::employee_list;
pub use row::employee_row;

/// Fixed column headers, in cell order.
pub const COLUMNS: [&str; 6] = [
    "First Name",
    "Last Name",
    "Description",
    "Job Years",
    "Job Title",
    "E-mail",
];

/// One body row: six text cells plus the key that identifies the record.
#[derive(Tabled, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    #[tabled(skip)]
    pub key: Option<String>,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Job Years")]
    pub job_years: String,
    #[tabled(rename = "Job Title")]
    pub job_title: String,
    #[tabled(rename = "E-mail")]
    pub email: String,
}

impl Row {
    /// Cells in column order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.description.as_str(),
            self.job_years.as_str(),
            self.job_title.as_str(),
            self.email.as_str(),
        ]
    }
}

/// A header row followed by zero or more body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeTable {
    rows: Vec<Row>,
}

impl EmployeeTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> &'static [&'static str; 6] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn keys(&self) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(|row| row.key.as_deref())
    }

    pub fn find(&self, key: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.key.as_deref() == Some(key))
    }
}
