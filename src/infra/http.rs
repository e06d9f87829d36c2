//! REST adapter for the remote collections.
//!
//! Every collection lives under its own prefix on the backend and exposes
//! `list`, `create`, `update/{id}` and `delete/{id}`. Status codes are handed
//! back untouched; deciding which ones count as success is the controller's
//! job.

use std::{marker::PhantomData, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    application::ports::{CollectionResource, Reply, ResourceError},
    domain::entities::{CollectionItem, EntityKind, RecordId},
};

/// Path of a collection relative to the API base URL.
pub fn collection_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Category => "blog/category/api/v1",
        EntityKind::Post => "blog/api/v1",
    }
}

/// Shared HTTP client and base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, ResourceError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(ResourceError::transport)?;
        Ok(Self {
            client,
            base: with_trailing_slash(base.clone()),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("blogdesk/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Adapter for the collection that stores `T`.
    pub fn collection<T: CollectionItem>(&self) -> Result<HttpCollection<T>, ResourceError> {
        let prefix = format!("{}/", collection_path(T::KIND));
        let base = self
            .base
            .join(&prefix)
            .map_err(|err| ResourceError::Url(err.to_string()))?;
        Ok(HttpCollection {
            client: self.client.clone(),
            base,
            _item: PhantomData,
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// [`CollectionResource`] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpCollection<T> {
    client: Client,
    base: Url,
    _item: PhantomData<fn() -> T>,
}

impl<T: CollectionItem> HttpCollection<T> {
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ResourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ResourceError::Url(format!("{} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ResourceError> {
        let url = self.url(segments)?;
        debug!(
            target = "infra::http",
            kind = T::KIND.as_str(),
            method = %method,
            url = %url,
            "sending request"
        );
        Ok(self.client.request(method, url))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ResourceError> {
        request.send().await.map_err(ResourceError::transport)
    }

    /// Read a body that must decode on success.
    async fn strict<B: DeserializeOwned>(response: Response) -> Result<Reply<B>, ResourceError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(ResourceError::transport)?;
        if !status.is_success() {
            return Ok(Reply::empty(status.as_u16()));
        }
        let body = serde_json::from_slice(&bytes).map_err(ResourceError::decode)?;
        Ok(Reply::new(status.as_u16(), body))
    }

    /// Read a body whose content does not matter to the caller.
    async fn lenient<B: DeserializeOwned>(response: Response) -> Result<Reply<B>, ResourceError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(ResourceError::transport)?;
        if !status.is_success() || bytes.is_empty() {
            return Ok(Reply::empty(status.as_u16()));
        }
        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(Reply::new(status.as_u16(), body)),
            Err(err) => {
                debug!(
                    target = "infra::http",
                    kind = T::KIND.as_str(),
                    status = status.as_u16(),
                    error = %err,
                    "ignoring undecodable mutation body"
                );
                Ok(Reply::empty(status.as_u16()))
            }
        }
    }
}

#[async_trait]
impl<T: CollectionItem> CollectionResource<T> for HttpCollection<T>
where
    T: DeserializeOwned,
{
    async fn list(&self) -> Result<Reply<Vec<T>>, ResourceError> {
        let response = Self::send(self.request(Method::GET, &["list"])?).await?;
        Self::strict(response).await
    }

    async fn create(&self, body: &T::Write) -> Result<Reply<T>, ResourceError> {
        let request = self.request(Method::POST, &["create"])?.json(body);
        let response = Self::send(request).await?;
        Self::lenient(response).await
    }

    async fn update(&self, id: &RecordId, body: &T::Write) -> Result<Reply<T>, ResourceError> {
        let id = id.to_string();
        let request = self.request(Method::PUT, &["update", &id])?.json(body);
        let response = Self::send(request).await?;
        Self::lenient(response).await
    }

    async fn delete(&self, id: &RecordId) -> Result<u16, ResourceError> {
        let id = id.to_string();
        let response = Self::send(self.request(Method::DELETE, &["delete", &id])?).await?;
        Ok(response.status().as_u16())
    }
}
