//! The Wish API client.
//!
//! [`WishClient`] sends requests through a [`Transport`], classifies every
//! envelope, and builds models from the payload. Endpoint methods live in
//! the sibling modules (`products`, `orders`, ...) as further `impl` blocks.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::api::classify::check_envelope;
use crate::api::errors::ApiError;
use crate::api::pager::{PageCursor, Pager, RecordFactory};
use crate::auth::Session;
use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, RequestParams, ResponseEnvelope, Transport,
};
use crate::config::WishConfig;
use crate::models::WishModel;

/// Returns the key that addresses a model, rejecting a missing or empty one.
pub(crate) fn required_key<'m>(
    resource: &'static str,
    key: &'static str,
    value: Option<&'m str>,
) -> Result<&'m str, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingKey { resource, key })
}

/// The future one page request resolves through.
pub type PageFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ResponseEnvelope, HttpError>> + Send + 'a>>;

/// Client for the Wish merchant API.
///
/// Generic over its [`Transport`]; the default is the reqwest-based
/// [`HttpClient`].
///
/// # Thread Safety
///
/// `WishClient<HttpClient>` is `Send + Sync` and can be shared across tasks.
/// Each call is independent; there is no state between calls.
///
/// # Example
///
/// ```rust,ignore
/// use wish_api::{AccessToken, Environment, WishClient, WishConfig};
///
/// let config = WishConfig::builder()
///     .access_token(AccessToken::new("your-access-token")?)
///     .environment(Environment::Sandbox)
///     .build()?;
///
/// let client = WishClient::new(&config);
/// client.auth_test().await?;
///
/// for order in client.get_all_unfulfilled_orders_since(None).await? {
///     println!("{:?}", order.order_id);
/// }
/// ```
#[derive(Debug)]
pub struct WishClient<T = HttpClient> {
    transport: T,
}

// Verify WishClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WishClient>();
};

impl WishClient<HttpClient> {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: &WishConfig) -> Self {
        Self::with_transport(HttpClient::from_config(config))
    }

    /// Creates a client for a session with default transport settings.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self::with_transport(HttpClient::new(session, None))
    }
}

impl<T: Transport> WishClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs one call and classifies the result.
    ///
    /// Returns the whole envelope on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] when the transport fails and
    /// [`ApiError::Service`] when the service code is not success.
    pub async fn get_response(
        &self,
        method: HttpMethod,
        path: &str,
        params: RequestParams,
    ) -> Result<ResponseEnvelope, ApiError> {
        let request = HttpRequest::builder(method, path).params(params).build()?;
        let envelope = self.transport.execute(request).await?;
        check_envelope(envelope)
    }

    /// Performs one call and returns the payload of a successful response.
    ///
    /// # Errors
    ///
    /// See [`get_response`](Self::get_response).
    pub async fn get_data(
        &self,
        method: HttpMethod,
        path: &str,
        params: RequestParams,
    ) -> Result<Value, ApiError> {
        Ok(self.get_response(method, path, params).await?.data)
    }

    /// Performs one call and builds a model from its payload.
    ///
    /// # Errors
    ///
    /// See [`get_response`](Self::get_response); additionally
    /// [`ApiError::Conversion`] when the payload is not an `M`.
    pub async fn get_model<M: WishModel>(
        &self,
        method: HttpMethod,
        path: &str,
        params: RequestParams,
    ) -> Result<M, ApiError> {
        let data = self.get_data(method, path, params).await?;
        M::from_record(data).map_err(|source| ApiError::Conversion {
            resource: M::NAME,
            source,
        })
    }

    /// Performs a call whose payload carries nothing of interest.
    pub(crate) async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        params: RequestParams,
    ) -> Result<(), ApiError> {
        self.get_response(method, path, params).await.map(|_| ())
    }

    /// Returns a lazy listing over a paginated endpoint.
    ///
    /// Each page is requested with `params` plus `limit` and `start`, which
    /// the pager sets (overriding any caller values).
    pub fn pages<'a, M>(
        &'a self,
        method: HttpMethod,
        path: &'a str,
        params: RequestParams,
        resource: &'static str,
        factory: RecordFactory<M>,
    ) -> Pager<impl FnMut(PageCursor) -> PageFuture<'a> + 'a, M> {
        let transport = &self.transport;
        let call = move |cursor: PageCursor| -> PageFuture<'a> {
            let mut params = params.clone();
            cursor.apply(&mut params);
            let request = HttpRequest::builder(method, path).params(params).build();
            Box::pin(async move { transport.execute(request?).await })
        };
        Pager::new(resource, call, factory)
    }

    /// Fetches every page of a paginated endpoint and converts each record.
    ///
    /// # Errors
    ///
    /// Returns the first transport, service or conversion error. No partial
    /// result is returned.
    pub async fn get_response_iter<M>(
        &self,
        method: HttpMethod,
        path: &str,
        params: RequestParams,
        resource: &'static str,
        factory: RecordFactory<M>,
    ) -> Result<Vec<M>, ApiError> {
        self.pages(method, path, params, resource, factory)
            .collect_all()
            .await
    }

    /// Lists every `M` behind a paginated GET endpoint.
    pub(crate) async fn get_all<M: WishModel>(
        &self,
        path: &str,
        params: RequestParams,
    ) -> Result<Vec<M>, ApiError> {
        self.get_response_iter(HttpMethod::Get, path, params, M::NAME, M::from_record)
            .await
    }

    /// Checks that the credentials are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Service`] with an `Unauthorized` failure when the
    /// token is rejected.
    pub async fn auth_test(&self) -> Result<(), ApiError> {
        self.send(HttpMethod::Get, "auth_test", RequestParams::new())
            .await
    }
}
