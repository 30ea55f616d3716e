//! Assetfolio Core - Asset model, store and routes.
//!
//! This crate holds the client-side state for a list of financial assets.
//! It is transport-agnostic: the REST implementation of [`assets::AssetsApi`]
//! lives in the `assetfolio-client` crate.

pub mod assets;
pub mod errors;
pub mod router;
pub mod state;

pub use assets::{Asset, AssetPayload, AssetState, AssetStore, AssetType, AssetsApi, Decoded};
pub use errors::{ApiErrorBody, Error, Result, ValidationErrors};
pub use router::{Route, Router, View};
pub use state::StateContainer;
