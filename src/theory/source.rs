//! Document resolution: the `DocumentSource` seam and the HTTP-backed
//! implementation used by the running app.

use url::Url;

use super::{LoadError, TheoryDocument};

/// Resolves a theory display name to its document. Injected into the router
/// so tests can substitute an in-memory source with controlled latency.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, name: &str) -> Result<TheoryDocument, LoadError>;
}

/// Fetches `GET {base}/data/{Name}.json` with the blocking client.
pub struct HttpSource {
    base: Url,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Build a source rooted at the API base URL. A hung server must not
    /// leave the UI loading forever, hence the explicit request timeout.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let base = Url::parse(base_url)
            .map_err(|e| LoadError::Network(format!("Invalid base URL: {}", e)))?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("c-atlas/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| LoadError::Network(format!("Client error: {}", e)))?;
        Ok(Self { base, client })
    }

    fn document_url(&self, name: &str) -> Result<Url, LoadError> {
        self.base
            .join(&format!("data/{}.json", name))
            .map_err(|e| LoadError::Network(format!("Invalid document path: {}", e)))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, name: &str) -> Result<TheoryDocument, LoadError> {
        let url = self.document_url(name)?;
        log::debug!("fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| LoadError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(LoadError::Network(
                status.canonical_reason().unwrap_or("unexpected status").to_string(),
            ));
        }

        response
            .json::<TheoryDocument>()
            .map_err(|e| LoadError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_shape() {
        let source = HttpSource::new("http://localhost:3000").unwrap();
        let url = source.document_url("Functionalism").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/data/Functionalism.json");
    }

    #[test]
    fn test_document_url_encodes_spaces() {
        let source = HttpSource::new("http://localhost:3000").unwrap();
        let url = source.document_url("Brain Circuits").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/data/Brain%20Circuits.json");
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        assert!(HttpSource::new("not a url").is_err());
    }
}
