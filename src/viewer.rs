//! Interactive raylib front-end: the window, the rendered slide list,
//! keyboard controls, fullscreen, and the auto-hiding menu overlay.

use log::{info, warn};
use raylib::prelude::*;

use crate::config::Config;
use crate::constants::{DUAL_SEPARATOR_WIDTH, FPS, MENU_HIDE_DELAY, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::deck::{Deck, Slide};
use crate::playback::Playback;
use crate::surface::{self, Surface};
use crate::texture_loader::load_texture_with_exif_rotation;

/// One appended slide with its loaded textures and active marker.
struct SlideView {
    slide: Slide,
    textures: Vec<Option<Texture2D>>,
    active: bool,
}

/// Retained slide list backing the raylib window; the one [`Surface`]
/// implementation of this environment.
pub struct RaylibSurface {
    slides: Vec<SlideView>,
}

impl RaylibSurface {
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Loads textures for every appended slide. A photo that fails to load
    /// degrades to an empty panel instead of aborting the slideshow.
    pub fn load_textures(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for view in &mut self.slides {
            if !view.textures.is_empty() {
                continue;
            }
            for photo in view.slide.photos() {
                match load_texture_with_exif_rotation(rl, thread, photo) {
                    Ok(texture) => view.textures.push(Some(texture)),
                    Err(e) => {
                        warn!("{e:#}");
                        view.textures.push(None);
                    }
                }
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let Some(view) = self.slides.iter().find(|view| view.active) else {
            return;
        };
        let screen = Rectangle::new(
            0.0,
            0.0,
            d.get_screen_width() as f32,
            d.get_screen_height() as f32,
        );
        match view.textures.as_slice() {
            [Some(texture)] => draw_fitted(d, texture, screen),
            [left, right] => {
                let half_width = (screen.width - DUAL_SEPARATOR_WIDTH) / 2.0;
                if let Some(texture) = left {
                    let area = Rectangle::new(0.0, 0.0, half_width, screen.height);
                    draw_fitted(d, texture, area);
                }
                if let Some(texture) = right {
                    let area = Rectangle::new(
                        half_width + DUAL_SEPARATOR_WIDTH,
                        0.0,
                        half_width,
                        screen.height,
                    );
                    draw_fitted(d, texture, area);
                }
            }
            _ => {}
        }
    }
}

impl Surface for RaylibSurface {
    fn clear(&mut self) {
        self.slides.clear();
    }

    fn append_slide(&mut self, slide: Slide) {
        self.slides.push(SlideView {
            slide,
            textures: Vec::new(),
            active: false,
        });
    }

    fn set_active(&mut self, index: usize) {
        for view in &mut self.slides {
            view.active = false;
        }
        if let Some(view) = self.slides.get_mut(index) {
            view.active = true;
        }
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Fits `texture` inside `area` preserving aspect ratio, centered.
fn draw_fitted(d: &mut RaylibDrawHandle, texture: &Texture2D, area: Rectangle) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = (area.width / tex_width).min(area.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    let dest = Rectangle::new(
        area.x + (area.width - width) / 2.0,
        area.y + (area.height - height) / 2.0,
        width,
        height,
    );
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}

/// Controls overlay visibility: shown on pointer movement, hidden again
/// after a fixed delay or when the pointer leaves the window.
pub struct MenuOverlay {
    visible: bool,
    hide_timer: f32,
}

impl MenuOverlay {
    pub fn new() -> Self {
        Self {
            visible: true,
            hide_timer: MENU_HIDE_DELAY,
        }
    }

    /// Pointer moved; show the menu and restart the hide countdown.
    pub fn poke(&mut self) {
        self.visible = true;
        self.hide_timer = MENU_HIDE_DELAY;
    }

    /// Pointer left the window; hide immediately.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.visible {
            return;
        }
        self.hide_timer -= dt;
        if self.hide_timer <= 0.0 {
            self.visible = false;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Runs the slideshow window until the user closes it.
pub fn run(deck: &Deck, config: &Config) -> anyhow::Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Photo Wall Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if config.fullscreen && !rl.is_window_fullscreen() {
        rl.toggle_fullscreen();
    }

    let mut slideshow = RaylibSurface::new();
    surface::present(&mut slideshow, deck);
    slideshow.load_textures(&mut rl, &thread);

    let mut playback = Playback::new(slideshow.slide_count(), config.display_time_secs());
    playback.play();
    if let Some(index) = playback.current() {
        slideshow.set_active(index);
    }
    info!(
        "showing {} slides, {} ms each",
        slideshow.slide_count(),
        config.display_time_ms
    );

    let mut menu = MenuOverlay::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. Keyboard controls
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            playback.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            playback.previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            playback.toggle();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F) {
            // raylib handles the platform chrome; state is read back each
            // frame so externally-triggered changes stay in sync.
            rl.toggle_fullscreen();
        }

        // 2. Menu auto-hide
        if rl.get_mouse_delta() != Vector2::zero() {
            menu.poke();
        }
        if !rl.is_cursor_on_screen() {
            menu.hide();
        }
        menu.tick(dt);

        // 3. Timed advance
        playback.tick(dt);
        if let Some(index) = playback.current() {
            slideshow.set_active(index);
        }

        // 4. Draw
        let fullscreen = rl.is_window_fullscreen();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        slideshow.draw(&mut d);
        if menu.visible() {
            draw_menu(&mut d, &playback, slideshow.slide_count(), fullscreen);
        }
    }

    Ok(())
}

fn draw_menu(d: &mut RaylibDrawHandle, playback: &Playback, slide_count: usize, fullscreen: bool) {
    let y = d.get_screen_height() - 60;
    let status = format!(
        "Slide {}/{}  -  {}{}",
        playback.current().map_or(0, |i| i + 1),
        slide_count,
        if playback.is_playing() { "Playing" } else { "Paused" },
        if fullscreen { "  -  Fullscreen" } else { "" },
    );
    d.draw_text(&status, 20, y, 20, Color::RAYWHITE);
    d.draw_text(
        "left/right: navigate   space: play/pause   f: fullscreen",
        20,
        y + 26,
        20,
        Color::GRAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_hides_after_the_delay_elapses() {
        let mut menu = MenuOverlay::new();
        assert!(menu.visible());
        menu.tick(MENU_HIDE_DELAY - 0.1);
        assert!(menu.visible());
        menu.tick(0.2);
        assert!(!menu.visible());
    }

    #[test]
    fn pointer_movement_restarts_the_hide_countdown() {
        let mut menu = MenuOverlay::new();
        menu.tick(MENU_HIDE_DELAY - 0.1);
        menu.poke();
        menu.tick(MENU_HIDE_DELAY - 0.1);
        assert!(menu.visible());
        menu.tick(0.2);
        assert!(!menu.visible());
    }

    #[test]
    fn pointer_leaving_hides_immediately_until_the_next_poke() {
        let mut menu = MenuOverlay::new();
        menu.hide();
        assert!(!menu.visible());
        menu.tick(10.0);
        assert!(!menu.visible());
        menu.poke();
        assert!(menu.visible());
    }
}
