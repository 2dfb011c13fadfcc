//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use log::{Level, debug, log_enabled, trace, warn};

use crate::domain::{
    ArgumentName, Arguments, CallStatus, Credentials, FunctionName, Reply, ResponseData,
    ReturnMode, Service, ValidationError,
};
use crate::transport::{PACKET_FIELD, decode_response, encode_packet};

mod e911;
mod provisioning;

pub use e911::E911Client;
pub use provisioning::ProvisioningClient;

/// Boxed future returned by [`HttpTransport`] implementations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Status code and body of an HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The HTTP seam used by [`ApiClient`].
///
/// The default implementation is backed by `reqwest`. Provide your own through
/// [`ApiClientBuilder::transport`] to route requests elsewhere or to stub the service in tests.
pub trait HttpTransport: Send + Sync {
    /// POST `params` as an `application/x-www-form-urlencoded` body to `url`.
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by the VTWhite clients.
///
/// Nothing in this crate aborts the process; every failure surfaces here:
/// - caller input rejected before any I/O ([`VtWhiteError::Validation`]),
/// - HTTP-level failures ([`VtWhiteError::Transport`], [`VtWhiteError::HttpStatus`]),
/// - unreadable responses ([`VtWhiteError::Parse`]),
/// - bad client setup ([`VtWhiteError::Configuration`]).
pub enum VtWhiteError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not well-formed XML or lacks a `data` element.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The request packet could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// The client was configured with an unusable endpoint or HTTP settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Normalize numeric tags in a raw VTWhite response and return its `data` node.
pub fn parse_response(raw: &str) -> Result<ResponseData, VtWhiteError> {
    decode_response(raw).map_err(|err| VtWhiteError::Parse(Box::new(err)))
}

#[derive(Clone)]
/// Builder for [`ApiClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent or transport.
pub struct ApiClientBuilder {
    service: Service,
    credentials: Credentials,
    test_mode: bool,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ApiClientBuilder {
    /// Create a builder targeting the production endpoint of `service`.
    pub fn new(service: Service, credentials: Credentials) -> Self {
        Self {
            service,
            credentials,
            test_mode: false,
            endpoint: None,
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Select the service's test endpoint instead of production.
    pub fn test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Override the endpoint URL. Takes precedence over [`ApiClientBuilder::test_mode`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom [`HttpTransport`]. Timeout and user-agent settings are then ignored.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`ApiClient`].
    pub fn build(self) -> Result<ApiClient, VtWhiteError> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| self.service.endpoint(self.test_mode).to_owned());
        validate_endpoint(&endpoint)?;

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => {
                if self.timeout.is_some() || self.user_agent.is_some() {
                    warn!("custom transport set; ignoring timeout and user-agent settings");
                }
                transport
            }
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder.build().map_err(|err| {
                    VtWhiteError::Configuration(format!("cannot build HTTP client: {err}"))
                })?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(ApiClient {
            service: self.service,
            credentials: self.credentials,
            endpoint,
            http,
        })
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), VtWhiteError> {
    let url = url::Url::parse(endpoint).map_err(|err| {
        VtWhiteError::Configuration(format!("invalid endpoint {endpoint:?}: {err}"))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(VtWhiteError::Configuration(format!(
            "unsupported endpoint scheme {scheme:?} (expected http or https)"
        ))),
    }
}

#[derive(Clone)]
/// Low-level VTWhite client bound to one service endpoint.
///
/// Every call posts a `packet` form field holding the XML request and reads the `data` node of
/// the XML reply. Service-specific wrappers ([`ProvisioningClient`], [`E911Client`]) sit on top.
pub struct ApiClient {
    service: Service,
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// Create a client for the production or test endpoint of `service`.
    ///
    /// For more customization, use [`ApiClient::builder`].
    pub fn new(service: Service, credentials: Credentials, test_mode: bool) -> Self {
        Self {
            service,
            credentials,
            endpoint: service.endpoint(test_mode).to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(service: Service, credentials: Credentials) -> ApiClientBuilder {
        ApiClientBuilder::new(service, credentials)
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Call a remote function.
    ///
    /// Errors:
    /// - Returns [`VtWhiteError::Validation`] for an empty function name or an argument name that
    ///   cannot be an XML tag,
    /// - [`VtWhiteError::Transport`] / [`VtWhiteError::HttpStatus`] for HTTP failures,
    /// - [`VtWhiteError::Parse`] when the reply is not usable XML.
    pub async fn send(
        &self,
        function: &str,
        args: &Arguments,
        mode: ReturnMode,
    ) -> Result<Reply, VtWhiteError> {
        let data = self.call(function, args).await?;
        Ok(match mode {
            ReturnMode::Output => Reply::Output(data),
            ReturnMode::Status => Reply::Status(data.status()),
        })
    }

    /// [`ApiClient::send`] in output mode.
    pub async fn send_output(
        &self,
        function: &str,
        args: &Arguments,
    ) -> Result<ResponseData, VtWhiteError> {
        self.call(function, args).await
    }

    /// [`ApiClient::send`] in status mode.
    pub async fn send_status(
        &self,
        function: &str,
        args: &Arguments,
    ) -> Result<CallStatus, VtWhiteError> {
        Ok(self.call(function, args).await?.status())
    }

    async fn call(&self, function: &str, args: &Arguments) -> Result<ResponseData, VtWhiteError> {
        let function = FunctionName::new(function)?;
        let args = args
            .iter()
            .map(|(name, value)| Ok((ArgumentName::new(name.as_str())?, value.clone())))
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let user = self.credentials.username().as_str();
        let packet = encode_packet(user, self.credentials.password().as_str(), &function, &args)
            .map_err(|err| VtWhiteError::Encode(Box::new(err)))?;

        debug!(
            "calling {} on {} with {} argument(s)",
            function.as_str(),
            self.endpoint,
            args.len()
        );
        if log_enabled!(Level::Trace) {
            if let Ok(redacted) = encode_packet(user, "***", &function, &args) {
                trace!("request packet:\n{redacted}");
            }
        }

        let response = self
            .http
            .post_form(&self.endpoint, vec![(PACKET_FIELD.to_owned(), packet)])
            .await
            .map_err(VtWhiteError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(
                "{} on {} returned HTTP {}",
                function.as_str(),
                self.endpoint,
                response.status
            );
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(VtWhiteError::HttpStatus {
                status: response.status,
                body,
            });
        }

        trace!("response body:\n{}", response.body);
        parse_response(&response.body)
    }
}
