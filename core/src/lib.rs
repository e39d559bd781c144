pub mod config;
pub mod deck;
pub mod error;
pub mod generator;
pub mod navigation;
pub mod swipe;

pub use config::Config;
pub use deck::Deck;
pub use error::DeckError;
pub use generator::{
    generator_from_config, CannedGenerator, GeminiGenerator, Intent, TextGenerator,
};
pub use navigation::{BoundaryMode, Direction, NavCommand, Navigator};
pub use swipe::{Swipe, SwipeTracker, MIN_SWIPE_DISTANCE};
