//! Target URL normalization

use url::{Host, Url};

use crate::error::{RelayError, Result};

/// Turns user input into an absolute http(s) URL.
///
/// Input that does not parse as an absolute URL, or parses with a scheme
/// other than http/https (`localhost:8080`, `example.com:443`), is retried
/// with `https://` prepended.
pub fn normalize_target(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RelayError::InvalidUrl("empty URL".to_string()));
    }

    let url = match Url::parse(raw) {
        Ok(url) if is_http(&url) => url,
        _ => Url::parse(&format!("https://{}", raw))
            .map_err(|e| RelayError::InvalidUrl(format!("{}: {}", raw, e)))?,
    };

    validate_host(&url)?;
    Ok(url)
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Rejects hosts the URL parser lets through but no resolver would accept.
fn validate_host(url: &Url) -> Result<()> {
    match url.host() {
        Some(Host::Domain(domain)) => {
            // A single trailing dot marks a fully qualified name
            let labels = domain.strip_suffix('.').unwrap_or(domain);
            let valid = labels.split('.').all(|label| {
                !label.is_empty()
                    && label
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            });
            if valid {
                Ok(())
            } else {
                Err(RelayError::InvalidUrl(format!(
                    "{}: invalid host '{}'",
                    url, domain
                )))
            }
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        None => Err(RelayError::InvalidUrl(format!("{}: missing host", url))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_kept() {
        let url = normalize_target("http://example.com/path?q=1").unwrap();
        assert_eq!(url.as_str(), "http://example.com/path?q=1");
    }

    #[test]
    fn test_bare_host_gets_https() {
        let url = normalize_target("example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_host_with_port_gets_https() {
        let url = normalize_target("localhost:8080").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_ip_literal() {
        let url = normalize_target("127.0.0.1:3000/status").unwrap();
        assert_eq!(url.as_str(), "https://127.0.0.1:3000/status");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let url = normalize_target("  example.org  ").unwrap();
        assert_eq!(url.host_str(), Some("example.org"));
    }

    #[test]
    fn test_trailing_dot_host_accepted() {
        let url = normalize_target("example.com.").unwrap();
        assert_eq!(url.as_str(), "https://example.com./");

        let url = normalize_target("http://example.com./teapot").unwrap();
        assert_eq!(url.host_str(), Some("example.com."));
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(matches!(
            normalize_target("example..com"),
            Err(RelayError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let result = normalize_target("ht!tp://bad");
        match result {
            Err(RelayError::InvalidUrl(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            normalize_target("   "),
            Err(RelayError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_space_in_host_rejected() {
        assert!(matches!(
            normalize_target("exa mple.com"),
            Err(RelayError::InvalidUrl(_))
        ));
    }
}
