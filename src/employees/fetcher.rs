//! Employee Data Fetcher
//!
//! A single unauthenticated GET against the collection endpoint. No retry,
//! no de-duplication, and no timeout unless one is configured.

use async_trait::async_trait;
use reqwest::Client;

use super::error::FetchError;
use super::model::Employee;
use crate::config::EmployeesConfig;

/// Where the dashboard gets its employees from
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, FetchError>;
}

/// HTTP client for the placeholder API
pub struct EmployeeClient {
    client: Client,
    endpoint: String,
}

impl EmployeeClient {
    /// Create a new client for the configured endpoint
    pub fn new(config: &EmployeesConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Client for an explicit URL with no timeout
    pub fn for_url(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::new(&EmployeesConfig {
            endpoint: endpoint.into(),
            request_timeout_secs: None,
        })
    }
}

#[async_trait]
impl EmployeeSource for EmployeeClient {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "fetching employees");

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let employees: Vec<Employee> = serde_json::from_str(&body)?;
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employees::EmployeeDashboard;
    use crate::mock_api::{self, fixtures};
    use axum::{http::StatusCode, routing::get, Router};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Address nothing is listening on
    async fn closed_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/users", addr)
    }

    struct Rejecting;

    #[async_trait]
    impl EmployeeSource for Rejecting {
        async fn fetch_employees(&self) -> Result<Vec<Employee>, FetchError> {
            Err(FetchError::Network("simulated rejection".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_from_mock_api() {
        let base = spawn(mock_api::build_router()).await;
        let client = EmployeeClient::for_url(format!("{}/users", base)).unwrap();

        let employees = client.fetch_employees().await.unwrap();
        assert_eq!(employees, fixtures());
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route("/users", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let base = spawn(router).await;
        let client = EmployeeClient::for_url(format!("{}/users", base)).unwrap();

        assert_eq!(client.fetch_employees().await, Err(FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let router = Router::new().route("/users", get(|| async { "not json" }));
        let base = spawn(router).await;
        let client = EmployeeClient::for_url(format!("{}/users", base)).unwrap();

        assert!(matches!(client.fetch_employees().await, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = EmployeeClient::for_url(closed_url().await).unwrap();
        assert!(matches!(client.fetch_employees().await, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_dashboard_load_success() {
        let base = spawn(mock_api::build_router()).await;
        let client = EmployeeClient::for_url(format!("{}/users", base)).unwrap();

        let mut dash = EmployeeDashboard::default();
        dash.load(&client).await;
        assert!(!dash.is_loading());
        assert!(dash.error().is_none());
        assert_eq!(dash.employees().len(), fixtures().len());
    }

    #[tokio::test]
    async fn test_dashboard_load_rejection() {
        let mut dash = EmployeeDashboard::default();
        dash.load(&Rejecting).await;

        assert!(!dash.is_loading());
        assert!(dash.employees().is_empty());
        assert_eq!(dash.error(), Some("Network error: simulated rejection"));
    }
}
