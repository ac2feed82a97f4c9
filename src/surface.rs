//! Seam between the composed deck and the presentation backend, so the
//! composer and playback controller never touch render state directly.

use crate::deck::{Deck, Slide};

/// A surface slides are appended to and shown on. One implementation per
/// environment; the raylib one lives in the viewer.
pub trait Surface {
    /// Drops every slide; used when a new deck replaces the old one.
    fn clear(&mut self);

    /// Appends one slide at the end of the surface.
    fn append_slide(&mut self, slide: Slide);

    /// Deactivates every slide, then activates the one at `index`.
    fn set_active(&mut self, index: usize);

    fn slide_count(&self) -> usize;
}

/// Replaces the surface contents with `deck`, in order. The caller decides
/// which slide becomes active afterwards.
pub fn present<S: Surface>(surface: &mut S, deck: &Deck) {
    surface.clear();
    for slide in deck.slides() {
        surface.append_slide(slide.clone());
    }
}
