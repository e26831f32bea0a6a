//! Root component: owns the employee collection and runs the one-time fetch.

use tracing::{debug, info, warn};

use crate::client::PayrollClient;
use crate::error::Result;
use crate::types::Employee;
use crate::view::{employee_list, EmployeeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Unfetched,
    Fetched,
}

#[derive(Debug, Default)]
pub struct App {
    employees: Vec<Employee>,
    state: FetchState,
    mounted: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Run the first-display effect: fetch the collection exactly once.
    ///
    /// The guard is set before the request goes out, so later calls are no-ops
    /// whether the first fetch succeeded or failed. On failure the collection
    /// stays empty and the error is returned.
    pub async fn mount(&mut self, client: &PayrollClient) -> Result<()> {
        if self.mounted {
            debug!("already mounted, skipping fetch");
            return Ok(());
        }
        self.mounted = true;

        match client.list_employees().await {
            Ok(employees) => {
                info!(count = employees.len(), "employees loaded");
                self.set_employees(employees);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "employee fetch failed, table stays empty");
                Err(e)
            }
        }
    }

    fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.state = FetchState::Fetched;
    }

    pub fn render(&self) -> EmployeeTable {
        employee_list(&self.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use serde_json::{json, Value};
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record(first: &str, last: &str, years: i64, href: &str) -> Value {
        json!({
            "firstName": first,
            "lastName": last,
            "description": "hobbit",
            "jobYears": years,
            "jobTitle": "Adventurer",
            "email": format!("{}@shire.me", first.to_lowercase()),
            "_links": { "self": { "href": href } }
        })
    }

    async fn serve(body: Value, expected_calls: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected_calls)
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> PayrollClient {
        PayrollClient::new(Url::parse(&server.uri()).unwrap(), None).unwrap()
    }

    #[test]
    fn test_renders_header_only_before_fetch() {
        let app = App::new();
        assert_eq!(app.state(), FetchState::Unfetched);
        let table = app.render();
        assert_eq!(table.row_count(), 1);
        assert!(table.rows().is_empty());
    }

    #[tokio::test]
    async fn test_mount_loads_rows_in_order() {
        let server = serve(
            json!({
                "entity": {
                    "_embedded": {
                        "employees": [
                            record("Frodo", "Baggins", 5, "/api/employees/1"),
                            record("Bilbo", "Baggins", 0, "/api/employees/2"),
                            record("Sam", "Gamgee", 10, "/api/employees/3")
                        ]
                    }
                }
            }),
            1,
        )
        .await;

        let mut app = App::new();
        app.mount(&client_for(&server)).await.unwrap();

        assert_eq!(app.state(), FetchState::Fetched);
        let table = app.render();
        assert_eq!(table.row_count(), 4);
        assert_eq!(
            table.rows()[2].cells(),
            ["Sam", "Gamgee", "hobbit", "10", "Adventurer", "sam@shire.me"]
        );
        let keys: Vec<Option<&str>> = table.keys().collect();
        assert_eq!(
            keys,
            vec![
                Some("/api/employees/1"),
                Some("/api/employees/2"),
                Some("/api/employees/3")
            ]
        );
    }

    #[tokio::test]
    async fn test_mount_with_zero_records() {
        let server = serve(json!({ "_embedded": { "employees": [] } }), 1).await;

        let mut app = App::new();
        app.mount(&client_for(&server)).await.unwrap();

        assert_eq!(app.state(), FetchState::Fetched);
        assert_eq!(app.render().row_count(), 1);
    }

    #[tokio::test]
    async fn test_mount_fetches_only_once() {
        let server = serve(
            json!({ "_embedded": { "employees": [record("Frodo", "Baggins", 5, "/e/1")] } }),
            1,
        )
        .await;
        let client = client_for(&server);

        let mut app = App::new();
        app.mount(&client).await.unwrap();
        app.mount(&client).await.unwrap();

        assert_eq!(app.render().rows().len(), 1);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_table_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let mut app = App::new();
        let err = app.mount(&client).await.unwrap_err();
        assert!(matches!(err, PayrollError::ApiError { status: 500, .. }));
        assert_eq!(app.state(), FetchState::Unfetched);
        assert!(app.render().rows().is_empty());

        // No retry on a second mount
        app.mount(&client).await.unwrap();
        assert!(app.employees().is_empty());
        server.verify().await;
    }

    #[test]
    fn test_rerender_tracks_keys() {
        let decode = |value: Value| -> Vec<Employee> { serde_json::from_value(value).unwrap() };

        let mut app = App::new();
        app.set_employees(decode(json!([
            record("Frodo", "Baggins", 5, "/e/1"),
            record("Sam", "Gamgee", 10, "/e/2")
        ])));
        let before = app.render();

        app.set_employees(decode(json!([
            record("Sam", "Gamgee", 11, "/e/2"),
            record("Merry", "Brandybuck", 1, "/e/4")
        ])));
        let after = app.render();

        assert_eq!(after.rows().len(), 2);
        assert!(after.find("/e/1").is_none());
        assert_eq!(after.find("/e/2").map(|r| r.job_years.as_str()), Some("11"));
        assert_eq!(after.find("/e/4").map(|r| r.first_name.as_str()), Some("Merry"));
        assert_eq!(before.find("/e/2").map(|r| r.job_years.as_str()), Some("10"));
    }
}
