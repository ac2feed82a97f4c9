use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::DEFAULT_DISPLAY_TIME_MS;
use crate::deck::PairingPolicy;

/// Photo wall slideshow for a directory of photos.
#[derive(Debug, Parser)]
#[command(name = "photowall", version, about)]
pub struct Config {
    /// Directory containing the photos to show
    pub directory: PathBuf,

    /// Slide layout effect
    #[arg(long, value_enum, default_value_t = Effect::Standard)]
    pub effect: Effect,

    /// Time each slide stays on screen, in milliseconds
    #[arg(long = "display-time-ms", default_value_t = DEFAULT_DISPLAY_TIME_MS)]
    pub display_time_ms: u64,

    /// Photo ordering
    #[arg(long, value_enum, default_value_t = Order::Sequential)]
    pub order: Order,

    /// Pairing policy used by the vertical-dual effect
    #[arg(long, value_enum, default_value_t = PairingPolicy::Adjacent)]
    pub pairing: PairingPolicy,

    /// Start in fullscreen
    #[arg(long)]
    pub fullscreen: bool,
}

impl Config {
    /// Display time as fractional seconds, the unit the frame loop works in.
    pub fn display_time_secs(&self) -> f32 {
        self.display_time_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Effect {
    /// One slide per photo
    Standard,
    /// Pair adjacent vertical photos into side-by-side slides
    VerticalDual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Sorted by file name
    Sequential,
    /// Shuffled once at startup
    Random,
}
