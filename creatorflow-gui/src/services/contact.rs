use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use creatorflow::contact::ContactSubmission;

use crate::services::http::{NotSuccessResponseInfo, ResponseExt};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unsuccessful HTTP response: {0}")]
    Unsuccessful(#[from] NotSuccessResponseInfo),
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Posts the contact form to a third-party form relay (Formspree).
#[derive(Debug, Clone)]
pub struct FormRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FormRelayClient {
    pub fn new(endpoint: String, client: reqwest::Client) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ContactApi for FormRelayClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::info!("Submitting contact form for project '{}'", submission.project);
        self.client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(submission)
            .send()
            .await?
            .check_success()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creatorflow::contact::ProjectType;
    use httpmock::{Method::POST, MockServer};

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            project: ProjectType::LandingPage,
            message: "Need a landing page".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/f/test")
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "name": "Ada",
                        "email": "ada@example.com",
                        "project": "Landing Page",
                        "message": "Need a landing page",
                    }));
                then.status(200).body(r#"{"ok": true}"#);
            })
            .await;
        FormRelayClient::new(server.url("/f/test"), reqwest::Client::new())
            .submit(&submission())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(422).body(r#"{"error": "invalid email"}"#);
            })
            .await;
        let err = FormRelayClient::new(server.url("/f/test"), reqwest::Client::new())
            .submit(&submission())
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Unsuccessful(ref info) if info.status_code == 422));
    }
}
