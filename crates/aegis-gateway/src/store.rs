//! The data store boundary and its REST implementation.
//!
//! The core consumes four resource collections (claims, policies, faqs,
//! conversations/escalations) through three generic operations. Every call
//! is a single independent request: no transactions, no batching, no retry.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::GatewayError;
use crate::filter::Filter;

/// Read/write access to the external data store.
///
/// Records cross this boundary as parsed JSON; callers deserialize into
/// their own types.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Fetch all records of `resource` matching `filter`.
    async fn find(&self, resource: &str, filter: &Filter) -> Result<Vec<Value>, GatewayError>;

    /// Insert a new record, returning the stored representation.
    async fn insert(&self, resource: &str, record: Value) -> Result<Value, GatewayError>;

    /// Partially update the records matching `filter`, returning the first
    /// updated representation.
    async fn patch(
        &self,
        resource: &str,
        filter: &Filter,
        partial: Value,
    ) -> Result<Value, GatewayError>;
}

/// PostgREST-style data store client.
///
/// Speaks the Supabase REST dialect: resources under `/rest/v1/`, filters as
/// query parameters, `Prefer: return=representation` so writes echo back the
/// stored record.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// Create a new store client for the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Absolute URL for a resource collection.
    fn endpoint(&self, resource: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, resource)
    }

    fn request(&self, method: reqwest::Method, resource: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.endpoint(resource))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=representation")
    }

    async fn decode_records(response: reqwest::Response) -> Result<Vec<Value>, GatewayError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        if body.is_empty() {
            return Ok(vec![]);
        }
        match serde_json::from_str(&body) {
            Ok(Value::Array(records)) => Ok(records),
            Ok(single) => Ok(vec![single]),
            Err(e) => Err(GatewayError::Decode(e.to_string())),
        }
    }

    fn first_record(mut records: Vec<Value>) -> Result<Value, GatewayError> {
        if records.is_empty() {
            return Err(GatewayError::Decode(
                "store returned no representation".to_string(),
            ));
        }
        Ok(records.remove(0))
    }
}

#[async_trait]
impl DataStore for RestStore {
    async fn find(&self, resource: &str, filter: &Filter) -> Result<Vec<Value>, GatewayError> {
        let response = self
            .request(reqwest::Method::GET, resource)
            .query(&filter.query_pairs())
            .send()
            .await?;
        Self::decode_records(response).await
    }

    async fn insert(&self, resource: &str, record: Value) -> Result<Value, GatewayError> {
        let response = self
            .request(reqwest::Method::POST, resource)
            .json(&record)
            .send()
            .await?;
        Self::first_record(Self::decode_records(response).await?)
    }

    async fn patch(
        &self,
        resource: &str,
        filter: &Filter,
        partial: Value,
    ) -> Result<Value, GatewayError> {
        let response = self
            .request(reqwest::Method::PATCH, resource)
            .query(&filter.query_pairs())
            .json(&partial)
            .send()
            .await?;
        Self::first_record(Self::decode_records(response).await?)
    }
}
