use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the game media backend.
#[openapi(
    info(
        title = "Game Media API",
        description = "Upload and manage sprites, audio files, and player scores"
    ),
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sprites::list_sprites,
        crate::routes::sprites::upload_sprite,
        crate::routes::sprites::get_sprite,
        crate::routes::sprites::update_sprite,
        crate::routes::sprites::delete_sprite,
        crate::routes::audio::list_audio,
        crate::routes::audio::upload_audio,
        crate::routes::audio::get_audio,
        crate::routes::audio::update_audio,
        crate::routes::audio::delete_audio,
        crate::routes::scores::list_scores,
        crate::routes::scores::submit_score,
        crate::routes::scores::get_score,
        crate::routes::scores::update_score,
        crate::routes::scores::delete_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::common::CreatedResponse,
            crate::dto::common::ActionResponse,
            crate::dto::asset::AssetSummary,
            crate::dto::asset::AssetUpdate,
            crate::dto::score::ScoreInput,
            crate::dto::score::ScoreSummary,
            crate::dto::score::ScoreUpdate,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sprites", description = "Sprite image uploads and management"),
        (name = "audio", description = "Audio file uploads and management"),
        (name = "scores", description = "Player score submissions and management"),
    )
)]
pub struct ApiDoc;
