use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One employee record as served by the HAL collection resource.
///
/// Every field is optional on the wire; absent values render as empty cells.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "jobYears", skip_serializing_if = "Option::is_none")]
    pub job_years: Option<JobYears>,
    #[serde(rename = "jobTitle", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Years in the job, kept exactly as sent so it renders verbatim.
///
/// Servers send an integer, but a float or numeric string must not fail the whole collection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum JobYears {
    Number(Number),
    Text(String),
}

impl JobYears {
    /// Numeric value, if the years parse as a number at all.
    pub fn value(&self) -> Option<f64> {
        match self {
            JobYears::Number(n) => n.as_f64(),
            JobYears::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for JobYears {
    fn from(years: i64) -> Self {
        JobYears::Number(years.into())
    }
}

impl fmt::Display for JobYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobYears::Number(n) => write!(f, "{n}"),
            JobYears::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

impl Employee {
    /// The record's self-link href, used as its row key.
    pub fn href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.self_link.as_ref())
            .map(|link| link.href.as_str())
    }
}
