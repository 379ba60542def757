//! Product entity and payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sellable item in the catalog.
///
/// `id` and the timestamps are assigned by the store and never accepted from
/// clients; everything else comes from a validated [`ProductPayload`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, unique for the store's lifetime.
    pub id: u64,

    /// Display name (non-empty).
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Unit price, strictly positive.
    pub price: f64,

    /// Stock-keeping unit, three dash-separated alphanumeric segments.
    pub sku: String,

    /// Set once at creation.
    pub created_at: DateTime<Utc>,

    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// Untrusted input shape for POST/PUT bodies.
///
/// Absent fields deserialize to zero values so that "field missing" surfaces
/// as a validation violation rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub sku: String,
}
