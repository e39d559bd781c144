use thiserror::Error;

/// Errors raised while loading a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("deck contains no slides")]
    Empty,
}
