use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use shared::{
    domain::StudentId,
    protocol::{Student, StudentPayload},
};
use tracing::{debug, warn};
use url::Url;

pub mod error;

pub use error::ClientError;
pub use reqwest::StatusCode;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8082/api/students";

/// The four REST operations the student UI depends on.
///
/// Every call is a single attempt: no retries, no timeouts beyond the transport's own.
#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>, ClientError>;
    async fn create_student(&self, payload: &StudentPayload) -> Result<(), ClientError>;
    async fn update_student(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<(), ClientError>;
    async fn delete_student(&self, id: &StudentId) -> Result<(), ClientError>;
}

pub struct StudentClient {
    http: Client,
    base_url: String,
}

impl StudentClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: &StudentId) -> String {
        format!("{}/{id}", self.base_url)
    }

    async fn send(
        &self,
        method: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        debug!(method, url = %url, "sending student api request");
        let res = match request.send().await {
            Ok(res) => res,
            Err(source) => {
                warn!(method, url = %url, "student api request did not complete: {source}");
                return Err(ClientError::Transport {
                    method,
                    url,
                    source,
                });
            }
        };

        let status = res.status();
        if !status.is_success() {
            warn!(method, url = %url, status = %status, "student api returned non-success status");
            return Err(ClientError::Status {
                method,
                url,
                status,
            });
        }
        Ok(res)
    }
}

#[async_trait]
impl StudentApi for StudentClient {
    async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        let url = self.base_url.clone();
        let res = self.send("GET", url.clone(), self.http.get(&url)).await?;
        let students: Vec<Student> = res
            .json()
            .await
            .map_err(|source| ClientError::Decode { url, source })?;
        debug!(count = students.len(), "loaded students");
        Ok(students)
    }

    async fn create_student(&self, payload: &StudentPayload) -> Result<(), ClientError> {
        let url = self.base_url.clone();
        self.send("POST", url.clone(), self.http.post(&url).json(payload)).await?;
        Ok(())
    }

    async fn update_student(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<(), ClientError> {
        let url = self.record_url(id);
        self.send("PUT", url.clone(), self.http.put(&url).json(payload)).await?;
        Ok(())
    }

    async fn delete_student(&self, id: &StudentId) -> Result<(), ClientError> {
        let url = self.record_url(id);
        self.send("DELETE", url.clone(), self.http.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
