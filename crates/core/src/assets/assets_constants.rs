/// Collection path of the assets resource.
pub const ASSETS_PATH: &str = "/assets";

/// Used when a structured error response carries no `message`.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Validation failed";

/// Used for every failure that is not a structured error response.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Path of a single asset resource.
pub fn asset_path(id: i64) -> String {
    format!("{}/{}", ASSETS_PATH, id)
}
