//! Endpoint attempt policy

/// Path tried first by default
pub const PRIMARY_ENDPOINT: &str = "/api/index.py";

/// Path tried when the primary fails
pub const FALLBACK_ENDPOINT: &str = "/api";

/// Ordered list of rendering endpoints
///
/// The pipeline walks the list one endpoint at a time and stops at the first
/// success. Later endpoints are never contacted while an earlier one is
/// pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPolicy {
    endpoints: Vec<String>,
}

impl EndpointPolicy {
    /// A primary endpoint followed by one fallback
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::from_endpoints([primary.into(), fallback.into()])
    }

    /// A single endpoint with no fallback
    pub fn single(endpoint: impl Into<String>) -> Self {
        Self::from_endpoints([endpoint.into()])
    }

    /// Any number of endpoints, tried in iteration order
    ///
    /// Blank entries and repeats are dropped.
    pub fn from_endpoints<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for endpoint in endpoints {
            let endpoint = endpoint.into().trim().to_string();
            if !endpoint.is_empty() && !list.contains(&endpoint) {
                list.push(endpoint);
            }
        }
        Self { endpoints: list }
    }

    /// Endpoints in attempt order
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// The first endpoint, if any
    pub fn primary(&self) -> Option<&str> {
        self.endpoints.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for EndpointPolicy {
    fn default() -> Self {
        Self::new(PRIMARY_ENDPOINT, FALLBACK_ENDPOINT)
    }
}
