//! Asset domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Asset category as understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Crypto,
    Stock,
    Cash,
    Deposit,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Crypto,
        AssetType::Stock,
        AssetType::Cash,
        AssetType::Deposit,
    ];

    /// Returns the wire representation (lowercase).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetType::Crypto => "crypto",
            AssetType::Stock => "stock",
            AssetType::Cash => "cash",
            AssetType::Deposit => "deposit",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::Unexpected(format!("Unknown asset type '{}'", s)))
    }
}

/// Domain model representing an asset held by the backend.
///
/// `id` and `created_at` are assigned by the backend and never change
/// on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub currency: String,
    pub amount: Decimal,
    pub created_at: String,
}

impl Asset {
    /// Applies every field present in `payload` onto this asset.
    ///
    /// `id` is immutable and is never taken from the payload.
    pub fn merge(&mut self, payload: &AssetPayload) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(asset_type) = payload.asset_type {
            self.asset_type = asset_type;
        }
        if let Some(currency) = &payload.currency {
            self.currency = currency.clone();
        }
        if let Some(amount) = payload.amount {
            self.amount = amount;
        }
        if let Some(created_at) = &payload.created_at {
            self.created_at = created_at.clone();
        }
    }
}

/// Partial asset sent on create and update. Absent fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl AssetPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = Some(asset_type);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

impl From<&Asset> for AssetPayload {
    fn from(asset: &Asset) -> Self {
        Self {
            id: Some(asset.id),
            name: Some(asset.name.clone()),
            asset_type: Some(asset.asset_type),
            currency: Some(asset.currency.clone()),
            amount: Some(asset.amount),
            created_at: Some(asset.created_at.clone()),
        }
    }
}

/// Outcome of decoding a response body into an entity.
///
/// Some backends answer an update with something other than the stored
/// entity; `Unrecognized` keeps that body instead of failing the call.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Entity(T),
    Unrecognized(serde_json::Value),
}

impl<T> Decoded<T> {
    pub fn entity(self) -> Option<T> {
        match self {
            Decoded::Entity(entity) => Some(entity),
            Decoded::Unrecognized(_) => None,
        }
    }
}

impl<T: serde::de::DeserializeOwned> Decoded<T> {
    /// Decodes a raw body. An empty body is `Unrecognized(Value::Null)`;
    /// non-JSON text is kept as a JSON string.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Decoded::Unrecognized(serde_json::Value::Null);
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Decoded::Unrecognized(serde_json::Value::String(body.to_string())),
        }
    }

    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value::<T>(value.clone()) {
            Ok(entity) => Decoded::Entity(entity),
            Err(_) => Decoded::Unrecognized(value),
        }
    }
}
