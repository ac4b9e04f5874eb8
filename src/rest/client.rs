//! BitcoinTrade REST API client implementation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::auth::{ApiToken, StaticToken, TokenProvider};
use crate::error::BitcoinTradeError;
use crate::rest::endpoints::{ApiVersion, DEFAULT_HOST, Operation};
use crate::rest::envelope::EnvelopeFormat;
use crate::rest::private::PrivateClient;
use crate::rest::public::PublicClient;
use crate::validation::{Arguments, ParamValue};

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared request pipeline behind [`PublicClient`] and [`PrivateClient`].
///
/// One call is one round trip: validate, send, unwrap. Nothing is retried.
#[derive(Clone)]
pub(crate) struct RestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    version: ApiVersion,
    envelope: EnvelopeFormat,
    token: Option<Arc<dyn TokenProvider>>,
}

impl RestClient {
    pub(crate) fn version(&self) -> ApiVersion {
        self.version
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Validate `arguments` for `operation`, send the request and unwrap the
    /// response envelope.
    pub(crate) async fn execute(
        &self,
        operation: Operation,
        arguments: &Arguments,
    ) -> Result<Value, BitcoinTradeError> {
        let endpoint = self.version.endpoint(operation);
        endpoint.params.validate(arguments)?;

        let path = endpoint.path(self.version);
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        let outgoing = arguments.outgoing(endpoint.params);

        tracing::debug!(
            method = %endpoint.method,
            path = %path,
            params = outgoing.len(),
            "sending BitcoinTrade request"
        );

        let mut request = if endpoint.method == Method::POST {
            let body: BTreeMap<&str, &ParamValue> = outgoing.into_iter().collect();
            self.http_client.post(url).body(serde_json::to_vec(&body)?)
        } else {
            let query = serde_urlencoded::to_string(&outgoing)?;
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
            self.http_client.request(endpoint.method, url)
        };

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, authorization_header(token.get_token())?);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Unwrap a response from the BitcoinTrade API.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, BitcoinTradeError> {
        let status = response.status();
        let body = response.text().await?;
        self.envelope.unwrap_body(status, &body)
    }
}

fn authorization_header(token: &ApiToken) -> Result<HeaderValue, BitcoinTradeError> {
    let mut value = HeaderValue::from_str(&token.authorization()).map_err(|_| {
        BitcoinTradeError::Auth("API token contains characters not allowed in a header".into())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Builder for [`PublicClient`] and [`PrivateClient`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use bitcointrade_api_client::rest::{ApiVersion, PrivateClient};
///
/// # fn main() -> Result<(), bitcointrade_api_client::BitcoinTradeError> {
/// let client = PrivateClient::builder()
///     .version(ApiVersion::V2)
///     .timeout(Duration::from_secs(10))
///     .api_token("my-token")
///     .build_private()?;
/// # Ok(())
/// # }
/// ```
pub struct RestClientBuilder {
    base_url: String,
    version: ApiVersion,
    envelope: EnvelopeFormat,
    timeout: Duration,
    user_agent: Option<String>,
    token: Option<Arc<dyn TokenProvider>>,
}

impl RestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: format!("https://{}", DEFAULT_HOST),
            version: ApiVersion::default(),
            envelope: EnvelopeFormat::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            token: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Talk HTTPS to `host` instead of the default BitcoinTrade host.
    pub fn host(self, host: impl AsRef<str>) -> Self {
        let base_url = format!("https://{}", host.as_ref());
        self.base_url(base_url)
    }

    /// Select the API version.
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Select the response envelope format.
    pub fn envelope(mut self, envelope: EnvelopeFormat) -> Self {
        self.envelope = envelope;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the token provider for private requests.
    pub fn token(mut self, token: Arc<dyn TokenProvider>) -> Self {
        self.token = Some(token);
        self
    }

    /// Use a fixed API token for private requests.
    pub fn api_token(self, token: impl Into<String>) -> Self {
        self.token(Arc::new(StaticToken::new(token)))
    }

    /// Build a client for public endpoints. Any configured token is ignored.
    pub fn build_public(mut self) -> Result<PublicClient, BitcoinTradeError> {
        self.token = None;
        Ok(PublicClient::from_inner(self.build_inner()?))
    }

    /// Build a client for private endpoints.
    ///
    /// Fails with [`BitcoinTradeError::MissingCredentials`] if no token was set.
    pub fn build_private(self) -> Result<PrivateClient, BitcoinTradeError> {
        if self.token.is_none() {
            return Err(BitcoinTradeError::MissingCredentials);
        }
        Ok(PrivateClient::from_inner(self.build_inner()?))
    }

    fn build_inner(self) -> Result<RestClient, BitcoinTradeError> {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitcointrade-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitcointrade-api-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(RestClient {
            http_client: client,
            base_url: self.base_url,
            version: self.version,
            envelope: self.envelope,
            token: self.token,
        })
    }
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
