/// Sprite and audio storage and retrieval operations.
pub mod assets;
/// Database model definitions.
pub mod models;
/// MongoDB connection management.
pub mod mongodb;
/// Player score storage and retrieval operations.
pub mod scores;
