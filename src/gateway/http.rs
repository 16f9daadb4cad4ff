//! HTTP implementation of the collection gateway using reqwest.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::catalog::CatalogEntity;
use crate::config::Config;
use crate::error::{Result, StockroomError};

use super::{CollectionGateway, EntityPayload, FieldValue};

/// Gateway to one entity kind's REST resource.
///
/// Holds a shared `reqwest::Client` and the backend base URL; every method
/// is a single request with no retry and no caching.
pub struct HttpGateway<E> {
    client: Client,
    base: Url,
    _entity: PhantomData<E>,
}

impl<E: CatalogEntity> HttpGateway<E> {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
            _entity: PhantomData,
        }
    }

    /// Build a gateway from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.base_url()?))
    }

    fn endpoint(&self, segment: &str) -> Result<Url> {
        let path = format!("api/{}/{}", E::KIND, segment);
        self.base
            .join(&path)
            .map_err(|e| StockroomError::Config(format!("invalid endpoint '{path}': {e}")))
    }

    /// Convert the payload field map into a multipart form.
    fn multipart(payload: EntityPayload) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in payload.fields.into_iter() {
            form = match value {
                FieldValue::Text(text) => form.text(name, text),
                FieldValue::File {
                    filename,
                    content_type,
                    bytes,
                } => {
                    let part = Part::bytes(bytes)
                        .file_name(filename)
                        .mime_str(&content_type)?;
                    form.part(name, part)
                }
                // Explicit empty value: "remove stored value", as opposed
                // to an omitted field meaning "no change".
                FieldValue::Clear => form.text(name, String::new()),
            };
        }
        Ok(form)
    }

    /// Read the body of a non-2xx write response into the error taxonomy.
    ///
    /// Backends report correctable input problems through a structured
    /// `message` or `error` body key; those become `Validation` so the
    /// modal can show them verbatim.
    async fn write_failure(response: Response) -> StockroomError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if let Some(message) = body_message(&body) {
            return StockroomError::Validation(message);
        }
        StockroomError::Server {
            status: status.as_u16(),
            body,
        }
    }

    async fn plain_failure(response: Response) -> StockroomError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        StockroomError::Server {
            status: status.as_u16(),
            body,
        }
    }
}

#[async_trait]
impl<E: CatalogEntity> CollectionGateway<E> for HttpGateway<E> {
    async fn list_all(&self) -> Result<Vec<E>> {
        let url = self.endpoint("getAll")?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::plain_failure(response).await);
        }

        let body: Value = response.json().await?;
        collection_from_value(&body)
    }

    async fn get_one(&self, id: &str) -> Result<E> {
        let url = self.endpoint(id)?;
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StockroomError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::plain_failure(response).await);
        }

        let body: Value = response.json().await?;
        entity_from_value(&body).ok_or_else(|| {
            StockroomError::Other(format!(
                "response for {} '{}' carried no entity",
                E::KIND_SINGULAR,
                id
            ))
        })
    }

    async fn create(&self, payload: EntityPayload) -> Result<Option<E>> {
        let url = self.endpoint(E::CREATE_SEGMENT)?;
        tracing::debug!("POST {url}");

        let form = Self::multipart(payload)?;
        let response = self.client.post(url).multipart(form).send().await?;
        if !response.status().is_success() {
            return Err(Self::write_failure(response).await);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(entity_from_value(&body))
    }

    async fn update(&self, id: &str, payload: EntityPayload) -> Result<Option<E>> {
        let url = self.endpoint(id)?;
        tracing::debug!("PUT {url}");

        let form = Self::multipart(payload)?;
        let response = self.client.put(url).multipart(form).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StockroomError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::write_failure(response).await);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(entity_from_value(&body))
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let url = self.endpoint(id)?;
        tracing::debug!("DELETE {url}");

        let response = self.client.delete(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StockroomError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::plain_failure(response).await);
        }
        Ok(())
    }
}

/// Extract the collection from a list response body.
///
/// The expected shape is `{ {kind}: [...] }`. A body lacking the envelope
/// key resolves to an empty collection: an empty catalog and a misshapen
/// body are indistinguishable to the user, and neither should crash the
/// session.
fn collection_from_value<E: CatalogEntity>(body: &Value) -> Result<Vec<E>> {
    match body.get(E::KIND) {
        Some(items) => {
            let collection: Vec<E> = serde_json::from_value(items.clone())?;
            Ok(collection)
        }
        None => {
            tracing::warn!("list response for '{}' lacked the envelope key", E::KIND);
            Ok(Vec::new())
        }
    }
}

/// Extract a single entity from a response body.
///
/// Tries the singular envelope key first (`{ {kind}: {...} }`), then a
/// bare entity body. Returns `None` when neither parses; write responses
/// that carry only `{ message }` fall through here.
fn entity_from_value<E: CatalogEntity>(body: &Value) -> Option<E> {
    if let Some(inner) = body.get(E::KIND_SINGULAR)
        && let Ok(entity) = serde_json::from_value::<E>(inner.clone())
    {
        return Some(entity);
    }
    serde_json::from_value::<E>(body.clone()).ok()
}

/// Pull a displayable message out of a structured error body.
fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(Value::String(message)) = value.get(key)
            && !message.is_empty()
        {
            return Some(message.clone());
        }
    }
    None
}
