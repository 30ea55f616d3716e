//! Assetfolio Client - REST access to the assets backend.
//!
//! This crate provides the HTTP wrapper and the [`AssetsApiClient`] that
//! backs an [`assetfolio_core::AssetStore`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use assetfolio_client::{AssetsApiClient, ClientConfig};
//! use assetfolio_core::{AssetPayload, AssetStore, AssetType};
//!
//! let api = AssetsApiClient::from_config(&ClientConfig::from_env()?)?;
//! let store = AssetStore::new(Arc::new(api));
//! store.fetch_assets().await?;
//! let ok = store
//!     .create_asset(AssetPayload::new().name("BTC").asset_type(AssetType::Crypto))
//!     .await;
//! ```

mod assets_client;
mod config;
mod http;

pub use assets_client::AssetsApiClient;
pub use config::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_MS, ENV_API_TIMEOUT_MS, ENV_API_TOKEN,
    ENV_API_URL,
};
pub use http::HttpClient;
