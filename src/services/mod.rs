/// Shared CRUD logic for the sprite and audio resources.
pub mod asset_service;
/// OpenAPI document aggregation.
pub mod documentation;
/// Health reporting backed by a store ping.
pub mod health_service;
/// CRUD logic for the player score resource.
pub mod score_service;
