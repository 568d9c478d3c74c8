//! Authorized request pipeline.
//!
//! Every call to the remote API goes through [`ApiClient::execute`]: the bearer
//! token is read from durable storage (never from the in-memory session), failures
//! are normalized into [`ApiError`], and any 401 ends the session for good by
//! clearing the persisted entry and forcing a page load of the login route.

use std::rc::Rc;

use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::ApiError,
    config,
    router::routes,
    utils::{
        navigation::{is_login_path, BrowserNavigator, Navigator},
        storage::{default_store, KeyValueStore},
    },
};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};

pub(crate) struct HttpReply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    storage: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
            base_url: None,
            storage: default_store(),
            navigator: Rc::new(BrowserNavigator),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.storage)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Access token as last persisted, if the entry parses.
    fn bearer_token(&self) -> Option<String> {
        let raw = self
            .storage
            .get_item(config::AUTH_STATE_STORAGE_KEY)
            .ok()
            .flatten()?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value
                .pointer("/state/tokens/accessToken")
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            Err(err) => {
                log::error!("Failed to parse auth state: {}", err);
                None
            }
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match self.bearer_token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        };
        with_credentials(builder)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::info!("Received 401; ending session");
            self.clear_auth_session();
            self.redirect_to_login_if_needed();
        }
    }

    fn clear_auth_session(&self) {
        if let Err(err) = self.storage.remove_item(config::AUTH_STATE_STORAGE_KEY) {
            log::error!("Failed to clear auth state: {}", err);
        }
    }

    fn redirect_to_login_if_needed(&self) {
        if let Some(pathname) = self.navigator.current_path() {
            if is_login_path(&pathname) {
                return;
            }
        }
        self.navigator.hard_navigate(routes::LOGIN);
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::protocol(format!("Failed to encode request: {}", e)))?;
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut builder = self
            .http_client()
            .request(method.clone(), format!("{}{}", base_url, path));
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        let builder = self.authorize(builder);

        let reply = self.transport(builder).await.map_err(|err| {
            log::warn!("{} {} failed without a response: {}", method, path, err);
            ApiError::network()
        })?;

        self.handle_unauthorized_status(reply.status);
        if reply.status.is_success() {
            let body = reply
                .body
                .ok_or_else(|| ApiError::protocol("Empty response body"))?;
            serde_json::from_value(body)
                .map_err(|e| ApiError::protocol(format!("Failed to parse response: {}", e)))
        } else {
            Err(ApiError::from_response(
                reply.status.as_u16(),
                reply.body.as_ref(),
            ))
        }
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn transport(&self, builder: RequestBuilder) -> Result<HttpReply, String> {
        let response = send(builder).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        let body = serde_json::from_slice(&bytes).ok();
        Ok(HttpReply { status, body })
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn transport(&self, builder: RequestBuilder) -> Result<HttpReply, String> {
        let request = builder.build().map_err(|e| e.to_string())?;
        let responder = mock_transport::find_responder(request.url().as_str())
            .ok_or_else(|| format!("No mock registered for {}", request.url()))?;
        let reply = responder.respond(&request).map_err(|e| e.message)?;
        Ok(HttpReply {
            status: StatusCode::from_u16(reply.status).map_err(|e| e.to_string())?,
            body: reply.body,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .timeout(config::REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|err| {
            log::error!("Failed to build HTTP client: {}", err);
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

// Cookies ride along for the server's CSRF check.
#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

#[cfg(target_arch = "wasm32")]
async fn send(builder: RequestBuilder) -> Result<reqwest::Response, String> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let request = Box::pin(builder.send());
    let timeout = Box::pin(TimeoutFuture::new(
        config::REQUEST_TIMEOUT.as_millis() as u32,
    ));
    match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| e.to_string()),
        Either::Right(_) => Err(format!(
            "timed out after {}s",
            config::REQUEST_TIMEOUT.as_secs()
        )),
    }
}

#[cfg(not(any(target_arch = "wasm32", test)))]
async fn send(builder: RequestBuilder) -> Result<reqwest::Response, String> {
    builder.send().await.map_err(|e| e.to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_transport {
    use std::sync::{Arc, Mutex, OnceLock};

    use serde_json::Value;

    use crate::api::ApiError;

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        pub status: u16,
        pub body: Option<Value>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self {
                status,
                body: Some(body),
            }
        }

        pub fn empty(status: u16) -> Self {
            Self { status, body: None }
        }
    }

    /// Stands in for the network in host tests. `Err` means no response arrived.
    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut mocks = registry().lock().unwrap_or_else(|e| e.into_inner());
        mocks.retain(|(base, _)| *base != base_url);
        mocks.push((base_url, responder));
    }

    pub(super) fn find_responder(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().unwrap_or_else(|e| e.into_inner());
        mocks
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| Arc::clone(responder))
    }
}
