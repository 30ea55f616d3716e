//! Observable in-memory asset collection backed by an [`AssetsApi`].

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::watch;

use super::assets_constants::{DEFAULT_VALIDATION_MESSAGE, UNKNOWN_ERROR_MESSAGE};
use super::assets_model::{Asset, AssetPayload, Decoded};
use super::assets_traits::AssetsApi;
use crate::errors::{Error, Result, ValidationErrors};
use crate::state::StateContainer;

/// Snapshot published to view bindings after every store mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetState {
    pub assets: Vec<Asset>,
    pub loading: bool,
    pub error_message: Option<String>,
    pub errors: Option<ValidationErrors>,
}

/// Owns the local asset collection and keeps it in step with the backend.
///
/// `create_asset` and `update_asset` turn failures into observable error
/// state and report a success flag. `fetch_assets` and `delete_asset`
/// return failures to the caller untouched.
pub struct AssetStore {
    api: Arc<dyn AssetsApi>,
    state: StateContainer<AssetState>,
}

impl AssetStore {
    pub fn new(api: Arc<dyn AssetsApi>) -> Self {
        Self {
            api,
            state: StateContainer::default(),
        }
    }

    pub fn state(&self) -> AssetState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<AssetState> {
        self.state.subscribe()
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.state.with(|s| s.assets.clone())
    }

    pub fn find(&self, id: i64) -> Option<Asset> {
        self.state.with(|s| s.assets.iter().find(|a| a.id == id).cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|s| s.error_message.clone())
    }

    pub fn errors(&self) -> Option<ValidationErrors> {
        self.state.with(|s| s.errors.clone())
    }

    pub fn clear_errors(&self) {
        self.state.update(|s| {
            s.error_message = None;
            s.errors = None;
        });
    }

    /// Replaces the local collection with the backend's.
    pub async fn fetch_assets(&self) -> Result<()> {
        self.state.update(|s| s.loading = true);

        match self.api.get_all().await {
            Ok(assets) => {
                debug!("Fetched {} assets", assets.len());
                self.state.update(|s| {
                    s.assets = assets;
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                self.state.update(|s| s.loading = false);
                Err(e)
            }
        }
    }

    /// Creates an asset and appends the backend's copy on success.
    pub async fn create_asset(&self, payload: AssetPayload) -> bool {
        self.clear_errors();

        match self.api.create(&payload).await {
            Ok(asset) => {
                debug!("Created asset {}", asset.id);
                self.state.update(|s| s.assets.push(asset));
                true
            }
            Err(e) => {
                self.capture_failure("create", &e);
                false
            }
        }
    }

    /// Updates asset `id`. Reports success even when `id` is not held locally.
    pub async fn update_asset(&self, id: i64, payload: AssetPayload) -> bool {
        self.clear_errors();

        match self.api.update(id, &payload).await {
            Ok(decoded) => {
                self.state.update(|s| {
                    let Some(existing) = s.assets.iter_mut().find(|a| a.id == id) else {
                        debug!("Updated asset {} is not held locally", id);
                        return;
                    };
                    match decoded {
                        Decoded::Entity(asset) => *existing = asset,
                        Decoded::Unrecognized(_) => existing.merge(&payload),
                    }
                });
                true
            }
            Err(e) => {
                self.capture_failure("update", &e);
                false
            }
        }
    }

    /// Deletes asset `id` on the backend, then drops it locally.
    pub async fn delete_asset(&self, id: i64) -> Result<()> {
        self.api.delete(id).await?;
        self.state.update(|s| s.assets.retain(|a| a.id != id));
        Ok(())
    }

    fn capture_failure(&self, action: &str, error: &Error) {
        warn!("Asset {} failed: {}", action, error);

        let (message, errors) = match error.error_body() {
            Some(body) => (
                body.message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string()),
                body.errors.clone(),
            ),
            None => (UNKNOWN_ERROR_MESSAGE.to_string(), None),
        };

        self.state.update(|s| {
            s.error_message = Some(message);
            s.errors = errors;
        });
    }
}
