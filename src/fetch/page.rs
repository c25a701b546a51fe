// src/fetch/page.rs
// =============================================================================
// Fetches a single web page and returns its HTML as text.
//
// Defaults (see FetchOptions::default):
// - 30 second timeout, so a dead server can't hang the tool forever
// - follow at most 10 redirects
// - identify ourselves with a link-tree user agent
// =============================================================================

use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Everything that can go wrong while fetching the page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The --link value is not an absolute http(s) URL
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered, but not with a 2xx status
    #[error("failed to fetch {url}: HTTP {status}")]
    Http { url: String, status: StatusCode },

    /// No usable answer at all (DNS, connection, TLS, timeout, body decoding...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client settings for the single page request.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: format!("link-tree/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// Loads the page at `url` and returns the body as text
//
// Parameters:
//   url: absolute http:// or https:// URL
//   options: client settings (timeout, redirects, user agent)
//
// Returns: the response body, or a FetchError
//   - InvalidUrl if the URL can't be parsed or isn't http(s)
//   - Http if the server answered with a non-2xx status
//   - Transport for everything else
pub async fn load_page(url: &str, options: &FetchOptions) -> Result<String, FetchError> {
    let target = parse_page_url(url)?;

    let transport = |source: reqwest::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .timeout(options.timeout)
        .redirect(redirect::Policy::limited(options.max_redirects))
        .user_agent(options.user_agent.as_str())
        .build()
        .map_err(transport)?;

    info!(%url, "fetching page");
    let response = client.get(target).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(transport)?;
    debug!(bytes = body.len(), status = status.as_u16(), "page downloaded");
    Ok(body)
}

// Parses the --link value and makes sure it's something we can GET
fn parse_page_url(url: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why thiserror here and anyhow in main.rs?
//    - FetchError is matched on by main() to pick an exit code
//    - #[derive(Error)] writes the Display and source() impls for us
//    - anyhow wraps it with context further up without losing the type
//
// 2. What does map_err(transport) do?
//    - Turns a reqwest::Error into our FetchError::Transport
//    - transport is a closure, reused for every reqwest call
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Serves exactly one canned HTTP response on a random local port
    // and returns the base URL to request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/page", addr)
    }

    #[tokio::test]
    async fn test_load_page_returns_body() {
        let url = serve_once("200 OK", "<h1>Hello</h1>").await;
        let body = load_page(&url, &FetchOptions::default()).await.unwrap();
        assert_eq!(body, "<h1>Hello</h1>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let url = serve_once("404 Not Found", "").await;
        let err = load_page(&url, &FetchOptions::default()).await.unwrap_err();
        assert!(err.to_string().contains("404"));
        match err {
            FetchError::Http { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected an HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let url = serve_once("503 Service Unavailable", "down").await;
        let err = load_page(&url, &FetchOptions::default()).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Http { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind and immediately drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = load_page(&format!("http://{}/", addr), &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let err = load_page("ftp://example.com/file", &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(parse_page_url("/docs/index.html").is_err());
        assert!(parse_page_url("https://example.com/docs").is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.max_redirects, 10);
        assert!(options.user_agent.starts_with("link-tree/"));
    }
}
