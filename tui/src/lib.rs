pub mod app;
pub mod keys;

use std::path::Path;

use anyhow::Result;
use deck_core::{generator_from_config, Config, Deck};

/// Load a deck and present it full-screen until the user quits.
pub async fn run_present(path: &Path, config: Config) -> Result<()> {
    let deck = Deck::load(path).await?;
    let generator = generator_from_config(&config);
    let mut app = app::App::new(deck, config.boundary, generator);
    app.run().await
}
