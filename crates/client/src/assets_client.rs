//! REST implementation of [`AssetsApi`].

use async_trait::async_trait;
use log::debug;

use assetfolio_core::assets::{asset_path, Asset, AssetPayload, AssetsApi, Decoded, ASSETS_PATH};
use assetfolio_core::errors::Result;

use crate::config::ClientConfig;
use crate::http::HttpClient;

/// Client for the `/assets` endpoints.
#[derive(Debug, Clone)]
pub struct AssetsApiClient {
    http: HttpClient,
}

impl AssetsApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

#[async_trait]
impl AssetsApi for AssetsApiClient {
    async fn get_all(&self) -> Result<Vec<Asset>> {
        self.http.get(ASSETS_PATH).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Asset> {
        self.http.get(&asset_path(id)).await
    }

    async fn create(&self, payload: &AssetPayload) -> Result<Asset> {
        debug!("Creating asset: {:?}", payload);
        self.http.post(ASSETS_PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &AssetPayload) -> Result<Decoded<Asset>> {
        debug!("Updating asset {}: {:?}", id, payload);
        let body = self.http.put(&asset_path(id), payload).await?;
        Ok(Decoded::from_body(&body))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&asset_path(id)).await
    }
}
