//! Playback state machine: current slide index, play/pause, and the
//! advance countdown. Owns its state per session; the frame loop feeds it
//! elapsed time like the render engines in the original slideshow.

use crate::error::{Result, SlideshowError};

#[derive(Debug)]
pub struct Playback {
    deck_len: usize,
    current: usize,
    playing: bool,
    interval: f32,
    elapsed: f32,
}

impl Playback {
    /// Paused controller at slide 0 over a deck of `deck_len` slides.
    /// `interval` is the display time per slide, in seconds.
    pub fn new(deck_len: usize, interval: f32) -> Self {
        Self {
            deck_len,
            current: 0,
            playing: false,
            interval,
            elapsed: 0.0,
        }
    }

    /// Index of the active slide, `None` over an empty deck.
    pub fn current(&self) -> Option<usize> {
        (self.deck_len > 0).then_some(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts (or restarts) playing. The countdown always restarts at the
    /// full interval, also when already playing.
    pub fn play(&mut self) {
        if self.deck_len == 0 {
            return;
        }
        self.playing = true;
        self.elapsed = 0.0;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.elapsed = 0.0;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Manual advance with wrap-around. Restarts the countdown, so the next
    /// automatic advance happens a full interval from now.
    pub fn next(&mut self) {
        if self.deck_len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.deck_len;
        self.elapsed = 0.0;
    }

    /// Manual retreat with wrap-around. Restarts the countdown like `next`.
    pub fn previous(&mut self) {
        if self.deck_len == 0 {
            return;
        }
        self.current = (self.current + self.deck_len - 1) % self.deck_len;
        self.elapsed = 0.0;
    }

    /// Jumps straight to `index`, no wrap-around. Out of range is a caller
    /// error, not clamped.
    pub fn goto(&mut self, index: usize) -> Result<()> {
        if index >= self.deck_len {
            return Err(SlideshowError::IndexOutOfRange {
                index,
                len: self.deck_len,
            });
        }
        self.current = index;
        self.elapsed = 0.0;
        Ok(())
    }

    /// Advances the countdown by `dt` seconds; returns true when the slide
    /// auto-advanced this tick. At most one advance per tick, so a long
    /// frame never skips slides.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing || self.deck_len == 0 {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            self.current = (self.current + 1) % self.deck_len;
            true
        } else {
            false
        }
    }
}
