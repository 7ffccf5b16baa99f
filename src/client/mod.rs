//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiKey, Endpoint, MessageTemplate, RawPhoneNumber, SendMessage, SendMessageResponse,
    TemplateParams, ValidationError,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The only status ACS send results are read from.
const SUCCESS_STATUS: u16 = 200;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    /// Read only when `status == SUCCESS_STATUS`.
    body: Option<String>,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        bearer: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        bearer: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url.as_str())
                .bearer_auth(bearer)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = if status == SUCCESS_STATUS {
                Some(response.text().await?)
            } else {
                None
            };
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AcsClient`].
///
/// Every error is terminal for the call; nothing is retried.
pub enum AcsError {
    /// The client could not be configured (e.g. empty endpoint list).
    #[error("configuration error: {0}")]
    Config(#[source] ValidationError),

    /// A send argument was rejected (e.g. empty target list).
    #[error("invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    /// Request construction or HTTP delivery failed (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// ACS answered with a status other than `200 OK`. The body is discarded.
    #[error("message sending failed")]
    HttpStatus { status: u16 },

    /// Response body was not the expected JSON document.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// ACS reported at least one recipient as unsuccessful; the first one is named.
    #[error("message sending failed for target phone number {to}")]
    Delivery {
        to: String,
        error_message: Option<String>,
    },
}

#[derive(Debug, Clone)]
/// Builder for [`AcsClient`].
///
/// Use this when you need to customize the HTTP timeout or user-agent.
pub struct AcsClientBuilder {
    api_key: ApiKey,
    template: MessageTemplate,
    endpoints: Vec<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    no_proxy: bool,
}

impl AcsClientBuilder {
    /// Create a builder with no timeout/user-agent override.
    ///
    /// Only the first element of `endpoints` is used.
    pub fn new<S: AsRef<str>>(
        api_key: impl Into<String>,
        template: impl Into<MessageTemplate>,
        endpoints: &[S],
    ) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            template: template.into(),
            endpoints: endpoints.iter().map(|e| e.as_ref().to_owned()).collect(),
            timeout: None,
            user_agent: None,
            no_proxy: false,
        }
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

    /// Ignore proxy settings from the environment.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Build an [`AcsClient`].
    ///
    /// Fails with [`AcsError::Config`] when the endpoint list is empty or its first entry
    /// is not an http(s) URL.
    pub fn build(self) -> Result<AcsClient, AcsError> {
        let endpoint =
            Endpoint::first_of(self.endpoints.as_slice()).map_err(AcsError::Config)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|err| AcsError::Transport(Box::new(err)))?;

        Ok(AcsClient {
            api_key: self.api_key,
            template: self.template,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Azure Communication Services SMS client.
///
/// Holds the access key, the message template and the resource endpoint. The value is
/// never mutated after construction and can be shared across tasks.
pub struct AcsClient {
    api_key: ApiKey,
    template: MessageTemplate,
    endpoint: Endpoint,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for AcsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcsClient")
            .field("api_key", &self.api_key)
            .field("template", &self.template)
            .field("endpoint", &self.endpoint.base())
            .finish_non_exhaustive()
    }
}

impl AcsClient {
    /// Create a client with default HTTP settings.
    ///
    /// For more customization, use [`AcsClient::builder`].
    pub fn new<S: AsRef<str>>(
        api_key: impl Into<String>,
        template: impl Into<MessageTemplate>,
        endpoints: &[S],
    ) -> Result<Self, AcsError> {
        AcsClientBuilder::new(api_key, template, endpoints).build()
    }

    /// Start building a client with custom settings.
    pub fn builder<S: AsRef<str>>(
        api_key: impl Into<String>,
        template: impl Into<MessageTemplate>,
        endpoints: &[S],
    ) -> AcsClientBuilder {
        AcsClientBuilder::new(api_key, template, endpoints)
    }

    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Render the template with `params` and send it in a single request.
    ///
    /// The first entry of `targets` is sent as the `from` number and the remaining entries
    /// as recipients.
    ///
    /// Errors:
    /// - [`AcsError::Validation`] when `targets` is empty,
    /// - [`AcsError::HttpStatus`] for any status other than 200,
    /// - [`AcsError::Parse`] for an unexpected body,
    /// - [`AcsError::Delivery`] naming the first recipient ACS reports as unsuccessful.
    #[tracing::instrument(
        name = "acs.send_message",
        skip_all,
        fields(targets = targets.len())
    )]
    pub async fn send_message(
        &self,
        params: &TemplateParams,
        targets: &[RawPhoneNumber],
    ) -> Result<SendMessageResponse, AcsError> {
        let request = SendMessage::from_targets(targets, self.template.render(params))?;

        let body = crate::transport::encode_send_message_json(&request)
            .map_err(|err| AcsError::Transport(Box::new(err)))?;

        tracing::debug!(
            from = %request.from(),
            recipients = request.recipients().len(),
            "Dispatching SMS request"
        );

        let response = self
            .http
            .post_json(self.endpoint.send_url(), self.api_key.as_str(), body)
            .await
            .map_err(AcsError::Transport)?;

        if response.status != SUCCESS_STATUS {
            tracing::warn!(status = response.status, "SMS request rejected");
            return Err(AcsError::HttpStatus {
                status: response.status,
            });
        }

        let body = response.body.unwrap_or_default();
        let parsed = crate::transport::decode_send_message_json_response(&body)
            .map_err(|err| {
                tracing::warn!(error = %err, "Failed to decode SMS response");
                AcsError::Parse(Box::new(err))
            })?;

        if let Some(failed) = parsed.first_failure() {
            tracing::warn!(
                to = %failed.to,
                http_status_code = ?failed.http_status_code,
                error_message = ?failed.error_message,
                "SMS delivery failed for recipient"
            );
            return Err(AcsError::Delivery {
                to: failed.to.clone(),
                error_message: failed.error_message.clone(),
            });
        }

        tracing::debug!(results = parsed.value.len(), "SMS request accepted");
        Ok(parsed)
    }
}
