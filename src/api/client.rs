use parking_lot::RwLock;
use reqwest::{Client, Method, Url};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

use crate::api::auth::{LoginRequest, LoginResponse, Session};
use crate::api::error::ApiError;
use crate::api::resource::Resource;
use crate::config::{ApiConfig, SecureString};

/// HTTP client for the cinema API.
///
/// Cheap to clone; clones share the connection pool and the session token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    request_timeout: Duration,
    token: Arc<RwLock<Option<SecureString>>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            http,
            base,
            request_timeout: config.timeout(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Install (or clear) the bearer token sent with every request.
    pub fn set_token(&self, token: Option<SecureString>) {
        *self.token.write() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    /// `GET` the collection, normalized through the resource's list decoder.
    pub async fn list<R: Resource>(&self, query: &R::Query) -> Result<Vec<R>, ApiError> {
        let url = self.endpoint(&R::list_segments(query))?;
        let body = self.send(Method::GET, url, None).await?;
        R::decode_list(&body).map_err(|source| ApiError::Decode {
            what: R::COLLECTION,
            source,
        })
    }

    /// `POST` a draft; returns every element the server reports as created.
    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<Vec<R>, ApiError> {
        let url = self.endpoint(&R::list_segments(&R::Query::default()))?;
        let payload = R::create_body(draft).map_err(ApiError::Encode)?;
        let body = self.send(Method::POST, url, Some(payload)).await?;
        R::decode_created(&body).map_err(|source| ApiError::Decode {
            what: R::SINGULAR,
            source,
        })
    }

    /// `PUT` a draft to `/{collection}/{id}`; returns the server's copy.
    pub async fn update<R: Resource>(&self, id: &str, draft: &R::Draft) -> Result<R, ApiError> {
        let url = self.endpoint(&R::item_segments(id))?;
        let payload = serde_json::to_value(draft).map_err(ApiError::Encode)?;
        let body = self.send(Method::PUT, url, Some(payload)).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            what: R::SINGULAR,
            source,
        })
    }

    /// `DELETE /{collection}/{id}`. The response body is ignored.
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&R::item_segments(id))?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// `POST /auth/login`. Does not install the token; the caller decides.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let url = self.endpoint(&["auth".to_string(), "login".to_string()])?;
        let body = self
            .send(Method::POST, url, Some(request.to_body()))
            .await?;
        let response: LoginResponse =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                what: "login response",
                source,
            })?;
        Ok(response.into_session(&request.email))
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[String]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %method, path = url.path(), "API request");

        let result = timeout(
            self.request_timeout,
            self.do_send(method.clone(), url.clone(), payload),
        )
        .await;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        match &outcome {
            Ok(body) => tracing::debug!(
                %request_id,
                %method,
                path = url.path(),
                bytes = body.len(),
                "API request succeeded"
            ),
            Err(err) => tracing::warn!(
                %request_id,
                %method,
                path = url.path(),
                error_type = err.error_type(),
                "API request failed: {}",
                err
            ),
        }
        outcome
    }

    async fn do_send(
        &self,
        method: Method,
        url: Url,
        payload: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let mut builder = self.http.request(method, url);

        let token = self.token.read().clone();
        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose());
        }
        if let Some(payload) = payload {
            builder = builder.json(&payload);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: ApiError::message_from_body(&body),
            });
        }

        Ok(body.to_vec())
    }
}
