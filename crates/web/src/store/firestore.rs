//! Firestore REST API store client.
//!
//! Talks to the managed document collection over
//! `https://firestore.googleapis.com/v1`. Documents are carried in
//! Firestore's typed-value envelope (`stringValue`, `doubleValue`, ...);
//! this module is the only place that shape exists - everything above it
//! works with the normalized [`Listing`].

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use tradepost_core::{Listing, ListingId, Price};

use crate::config::FirestoreConfig;
use crate::store::{FETCH_LIMIT, ListingStore, StoreError};

/// Client for the Firestore REST API.
#[derive(Clone)]
pub struct FirestoreStore {
    inner: Arc<FirestoreStoreInner>,
}

struct FirestoreStoreInner {
    client: reqwest::Client,
    /// Base URL of the `documents` resource for the configured database.
    documents_url: String,
    collection: String,
    api_key: SecretString,
}

impl FirestoreStore {
    /// Create a new Firestore store client.
    #[must_use]
    pub fn new(config: &FirestoreConfig) -> Self {
        let documents_url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            config.project_id
        );

        Self {
            inner: Arc::new(FirestoreStoreInner {
                client: reqwest::Client::new(),
                documents_url,
                collection: config.collection.clone(),
                api_key: config.api_key.clone(),
            }),
        }
    }

    /// Send a request and surface non-success statuses as [`StoreError::Api`].
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let response = request
            .query(&[("key", self.inner.api_key.expose_secret())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Firestore returned non-success status"
            );
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl ListingStore for FirestoreStore {
    #[instrument(skip(self, listing), fields(title = %listing.title))]
    async fn insert(&self, listing: &Listing) -> Result<ListingId, StoreError> {
        let url = format!(
            "{}/{}",
            self.inner.documents_url, self.inner.collection
        );
        let body = serde_json::json!({ "fields": encode_fields(listing) });

        let response_text = self.send(self.inner.client.post(&url).json(&body)).await?;
        let created: CreatedDocument = serde_json::from_str(&response_text)?;
        let id = document_id(&created.name)?;

        debug!(id = %id, "Listing stored");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_newest_first(&self) -> Result<Vec<(ListingId, Listing)>, StoreError> {
        let url = format!("{}:runQuery", self.inner.documents_url);
        let body = serde_json::json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.inner.collection }],
                "orderBy": [{
                    "field": { "fieldPath": "createdAt" },
                    "direction": "DESCENDING"
                }],
                "limit": FETCH_LIMIT,
            }
        });

        let response_text = self.send(self.inner.client.post(&url).json(&body)).await?;
        let rows: Vec<QueryRow> = serde_json::from_str(&response_text)?;

        // An empty collection still yields one row carrying only a read
        // timestamp; rows without a document are skipped.
        rows.into_iter()
            .filter_map(|row| row.document)
            .map(|doc| decode_document(&doc))
            .collect()
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// A single Firestore typed value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
enum FireValue {
    StringValue(String),
    DoubleValue(f64),
    /// Firestore carries 64-bit integers as decimal strings.
    IntegerValue(String),
}

/// A Firestore document: resource name plus typed fields.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FireDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, FireValue>,
}

/// Response to a document create.
#[derive(Debug, Deserialize)]
struct CreatedDocument {
    name: String,
}

/// One element of a `runQuery` response.
#[derive(Debug, Deserialize)]
struct QueryRow {
    #[serde(default)]
    document: Option<FireDocument>,
}

/// Encode a listing into Firestore typed fields.
fn encode_fields(listing: &Listing) -> BTreeMap<String, FireValue> {
    BTreeMap::from([
        (
            "title".to_string(),
            FireValue::StringValue(listing.title.clone()),
        ),
        (
            "description".to_string(),
            FireValue::StringValue(listing.description.clone()),
        ),
        (
            "price".to_string(),
            FireValue::DoubleValue(listing.price.as_f64()),
        ),
        (
            "location".to_string(),
            FireValue::StringValue(listing.location.clone()),
        ),
        (
            "phone".to_string(),
            FireValue::StringValue(listing.phone.clone()),
        ),
        (
            "createdAt".to_string(),
            FireValue::StringValue(listing.created_at.clone()),
        ),
    ])
}

/// Decode a Firestore document back into a listing.
fn decode_document(doc: &FireDocument) -> Result<(ListingId, Listing), StoreError> {
    let id = document_id(&doc.name)?;

    let listing = Listing {
        title: required_string(&doc.fields, "title")?,
        description: optional_string(&doc.fields, "description"),
        price: price_field(&doc.fields),
        location: optional_string(&doc.fields, "location"),
        phone: required_string(&doc.fields, "phone")?,
        created_at: required_string(&doc.fields, "createdAt")?,
    };

    Ok((id, listing))
}

/// Extract the document ID from a Firestore resource name
/// (`projects/.../documents/{collection}/{id}`).
fn document_id(name: &str) -> Result<ListingId, StoreError> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(ListingId::from)
        .ok_or_else(|| StoreError::MalformedDocument(format!("resource name '{name}' has no ID")))
}

fn required_string(
    fields: &BTreeMap<String, FireValue>,
    name: &'static str,
) -> Result<String, StoreError> {
    match fields.get(name) {
        Some(FireValue::StringValue(s)) => Ok(s.clone()),
        Some(_) => Err(StoreError::MalformedDocument(format!(
            "field '{name}' is not a string"
        ))),
        None => Err(StoreError::MissingField(name)),
    }
}

fn optional_string(fields: &BTreeMap<String, FireValue>, name: &str) -> String {
    match fields.get(name) {
        Some(FireValue::StringValue(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Decode the price field, tolerating the number shapes Firestore may
/// return. Anything unusable becomes zero rather than failing the read.
fn price_field(fields: &BTreeMap<String, FireValue>) -> Price {
    match fields.get("price") {
        Some(FireValue::DoubleValue(v)) => Price::from_f64(*v),
        Some(FireValue::IntegerValue(s) | FireValue::StringValue(s)) => Price::parse(s),
        None => Price::ZERO,
    }
}
