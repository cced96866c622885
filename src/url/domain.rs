use crate::{UrlError, UrlResult};
use url::Url;

/// Schemes tried for every domain, most preferred first
pub const SCHEMES: [&str; 2] = ["https", "http"];

/// A validated domain together with its candidate homepage URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainTarget {
    domain: String,
    candidates: Vec<Url>,
}

impl DomainTarget {
    /// Validates a domain and builds one homepage URL per scheme
    ///
    /// The domain may carry a port (`127.0.0.1:8080`) but not a scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use traffic_gauge::url::DomainTarget;
    ///
    /// let target = DomainTarget::parse("example.com").unwrap();
    /// assert_eq!(target.candidates()[0].as_str(), "https://example.com/");
    /// assert_eq!(target.candidates()[1].as_str(), "http://example.com/");
    /// ```
    pub fn parse(raw: &str) -> UrlResult<Self> {
        let domain = raw.trim();

        if domain.is_empty() {
            return Err(UrlError::Empty);
        }

        if domain.chars().any(char::is_whitespace) {
            return Err(UrlError::Whitespace(domain.to_string()));
        }

        if domain.contains("://") {
            return Err(UrlError::HasScheme(domain.to_string()));
        }

        let candidates = SCHEMES
            .iter()
            .map(|scheme| {
                let url = Url::parse(&format!("{}://{}", scheme, domain)).map_err(|e| {
                    UrlError::Malformed {
                        domain: domain.to_string(),
                        message: e.to_string(),
                    }
                })?;

                if url.host_str().map_or(true, str::is_empty) {
                    return Err(UrlError::Malformed {
                        domain: domain.to_string(),
                        message: "missing host".to_string(),
                    });
                }

                Ok(url)
            })
            .collect::<UrlResult<Vec<_>>>()?;

        Ok(Self {
            domain: domain.to_string(),
            candidates,
        })
    }

    /// The domain as it appeared in the input, trimmed
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Homepage URLs in scheme preference order
    pub fn candidates(&self) -> &[Url] {
        &self.candidates
    }
}
