//! HTTP client for Wish API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Wish merchant API with optional retry handling.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ResponseEnvelope;
use crate::clients::transport::Transport;
use crate::config::WishConfig;

/// Fixed retry wait time in seconds when no `Retry-After` header is sent.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Wish merchant API.
///
/// The client handles:
/// - Base URI selection from the session's environment
/// - Default headers including User-Agent and the bearer token
/// - Sending parameters as a query string (GET) or form body (POST)
/// - Adding the configured `merchant_id` to every call
/// - Optional retries for HTTP 429 and 500 responses
/// - Decoding the service envelope
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use wish_api::{AccessToken, Environment, Session};
/// use wish_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let session = Session::new(AccessToken::new("token")?, Environment::Sandbox, None);
/// let client = HttpClient::new(&session, None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "auth_test").build()?;
/// let envelope = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://merchant.wish.com/api/v2`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Merchant id appended to every call, if configured.
    merchant_id: Option<String>,
    /// Attempts per request.
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session providing the token, environment and merchant id
    /// * `config` - Optional configuration for `user_agent_prefix`, `tries` and `timeout`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(session: &Session, config: Option<&WishConfig>) -> Self {
        let base_uri = session.base_url().to_string();

        let user_agent_prefix = config
            .and_then(WishConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Wish API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", session.access_token.as_ref()),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(WishConfig::timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
            merchant_id: session.merchant_id.as_ref().map(|m| m.as_ref().to_string()),
            tries: config.map_or(1, WishConfig::tries),
        }
    }

    /// Creates a client from a configuration alone.
    #[must_use]
    pub fn from_config(config: &WishConfig) -> Self {
        Self::new(&config.session(), Some(config))
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Sends a request and decodes the response envelope.
    ///
    /// Any response whose body decodes as an envelope is returned, whatever
    /// its HTTP status, so service codes sent with 4xx statuses still reach
    /// the classifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - A non-2xx response has no envelope (`Response`)
    /// - A 2xx response has no envelope (`Decode`)
    /// - Retries are exhausted on 429/500 (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<ResponseEnvelope, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);
        let max_tries = self.tries;

        let mut params = request.params.to_wire_pairs();
        if let Some(merchant_id) = &self.merchant_id {
            if !request.params.contains("merchant_id") {
                params.push(("merchant_id".to_string(), merchant_id.clone()));
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending Wish API request"
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url).query(&params),
                HttpMethod::Post => self.client.post(&url).form(&params),
            };
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let request_id = headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();
            let retry_after = headers
                .get("retry-after")
                .and_then(|values| values.first())
                .and_then(|value| value.parse::<f64>().ok());
            let body_text = res.text().await.unwrap_or_default();

            let should_retry = code == 429 || code == 500;
            if should_retry {
                if tries < max_tries {
                    let delay = Self::calculate_retry_delay(retry_after, code);
                    tracing::warn!(
                        path = %request.path,
                        status = code,
                        attempt = tries,
                        delay_secs = delay.as_secs_f64(),
                        "Retrying Wish API request"
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                if max_tries > 1 {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code,
                        tries: max_tries,
                        error_reference: request_id,
                    }));
                }
            }

            return match ResponseEnvelope::from_body(code, request_id.clone(), &body_text) {
                Ok(envelope) => Ok(envelope),
                Err(source) if (200..=299).contains(&code) => Err(HttpError::Decode { code, source }),
                Err(_) => Err(HttpError::Response(HttpResponseError {
                    code,
                    message: if body_text.is_empty() {
                        "<empty body>".to_string()
                    } else {
                        body_text
                    },
                    error_reference: request_id,
                })),
            };
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on the `Retry-After` value and status code.
    fn calculate_retry_delay(retry_after: Option<f64>, status: u16) -> Duration {
        // 500 always waits the fixed delay
        if status == 429 {
            if let Some(delay) = retry_after.and_then(|secs| Duration::try_from_secs_f64(secs).ok()) {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}

impl Transport for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<ResponseEnvelope, HttpError> {
        self.request(request).await
    }
}
