//! Client side of the feedback endpoint, used by the form UI from a
//! background thread.

use serde_json::json;
use url::Url;

use super::{SubmitError, SubmitRequest};

/// Posts submissions to `{base}/api/submit`.
pub struct FeedbackClient {
    endpoint: Url,
    client: reqwest::blocking::Client,
}

impl FeedbackClient {
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join("api/submit"))
            .map_err(|e| SubmitError::BadBody(format!("Invalid base URL: {}", e)))?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("c-atlas/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| SubmitError::Notify(e.to_string()))?;
        Ok(Self { endpoint, client })
    }

    pub fn submit(&self, request: &SubmitRequest) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({
                "name": request.name,
                "email": request.email,
                "message": request.message,
            }))
            .send()
            .map_err(|e| SubmitError::Notify(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(SubmitError::Validation);
        }
        if !status.is_success() {
            return Err(SubmitError::Notify(
                status.canonical_reason().unwrap_or("unexpected status").to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_shape() {
        let client = FeedbackClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:3000/api/submit");
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        assert!(FeedbackClient::new("not a url").is_err());
    }
}
