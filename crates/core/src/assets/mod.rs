//! Assets module - domain models, backend trait and store.

mod assets_constants;
mod assets_model;
mod assets_store;
mod assets_traits;


// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::{Asset, AssetPayload, AssetType, Decoded};
pub use assets_store::{AssetState, AssetStore};
pub use assets_traits::AssetsApi;
