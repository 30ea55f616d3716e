//! Trait defining the contract for the assets backend.

use async_trait::async_trait;

use super::assets_model::{Asset, AssetPayload, Decoded};
use crate::errors::Result;

/// REST operations on the `/assets` collection.
///
/// Implementations own no state and do not retry; every failure is handed
/// back to the caller.
#[async_trait]
pub trait AssetsApi: Send + Sync {
    /// GET /assets
    async fn get_all(&self) -> Result<Vec<Asset>>;

    /// GET /assets/{id}
    async fn get_by_id(&self, id: i64) -> Result<Asset>;

    /// POST /assets
    async fn create(&self, payload: &AssetPayload) -> Result<Asset>;

    /// PUT /assets/{id}
    async fn update(&self, id: i64, payload: &AssetPayload) -> Result<Decoded<Asset>>;

    /// DELETE /assets/{id}
    async fn delete(&self, id: i64) -> Result<()>;
}
