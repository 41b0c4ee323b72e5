pub mod sprite_service;

pub use sprite_service::SpriteService;
