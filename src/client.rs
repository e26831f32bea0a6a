use std::time::Duration;

use const_format::concatcp;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{PayrollError, Result};
use crate::responses::EmployeesEnvelope;
use crate::types::Employee;

const API_ROOT: &str = "/api";
pub const EMPLOYEES_PATH: &str = concatcp!(API_ROOT, "/employees");

const HAL_JSON: &str = "application/hal+json, application/json";

pub struct PayrollClient {
    http: Client,
    base_url: Url,
}

impl PayrollClient {
    pub fn new(mut base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        // Url::join replaces the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| PayrollError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source: e,
            })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self.http.get(url).header(ACCEPT, HAL_JSON).send().await?;

        if !response.status().is_success() {
            return Err(PayrollError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the employee collection and unwrap it from its HAL envelope.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let envelope: EmployeesEnvelope = self.get(EMPLOYEES_PATH).await?;
        let employees = envelope.into_employees();
        debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }
}
