//! Field rules for employee records, reported without altering the rendered table.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Employee, JobYears};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$").expect("valid email regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Description,
    JobYears,
    JobTitle,
    Email,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Description => "description",
            Field::JobYears => "jobYears",
            Field::JobTitle => "jobTitle",
            Field::Email => "email",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Field::FirstName => "First name cannot be empty.",
            Field::LastName => "Last name cannot be empty.",
            Field::Description => "Description cannot be empty.",
            Field::JobYears => "Job Years cannot be negative.",
            Field::JobTitle => "Job Title cannot be empty.",
            Field::Email => "E-mail must be valid.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL_RE.is_match(email)
}

/// Every rule the record breaks, in field order.
pub fn validate(employee: &Employee) -> Vec<Field> {
    let mut violations = Vec::new();

    if is_blank(employee.first_name.as_deref()) {
        violations.push(Field::FirstName);
    }
    if is_blank(employee.last_name.as_deref()) {
        violations.push(Field::LastName);
    }
    if is_blank(employee.description.as_deref()) {
        violations.push(Field::Description);
    }
    // Absent years default to zero; non-numeric years count as invalid
    let years = employee.job_years.as_ref().map_or(Some(0.0), JobYears::value);
    if years.is_none_or(|years| years < 0.0) {
        violations.push(Field::JobYears);
    }
    if is_blank(employee.job_title.as_deref()) {
        violations.push(Field::JobTitle);
    }
    if !employee.email.as_deref().is_some_and(is_valid_email) {
        violations.push(Field::Email);
    }

    violations
}
