use clap::Parser;
use log::info;
use rand::seq::SliceRandom;

mod config;
mod constants;
mod deck;
mod error;
mod orientation;
mod playback;
mod surface;
mod texture_loader;
mod viewer;

use crate::config::{Config, Effect, Order};
use crate::deck::Deck;
use crate::orientation::{FileProbe, resolve_orientations};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    // --- Gather Photos ---
    let mut photos = texture_loader::list_photo_files(&config.directory)?;
    if config.order == Order::Random {
        photos.shuffle(&mut rand::rng());
    }
    info!(
        "found {} photos in {}",
        photos.len(),
        config.directory.display()
    );

    // --- Compose the Deck ---
    let deck = match config.effect {
        Effect::Standard => Deck::standard(&photos)?,
        Effect::VerticalDual => {
            let orientations = resolve_orientations(&FileProbe, &photos)?;
            Deck::paired(&photos, &orientations, config.pairing)?
        }
    };
    info!("composed {} slides from {} photos", deck.len(), photos.len());

    // --- Run the Viewer ---
    viewer::run(&deck, &config)
}
