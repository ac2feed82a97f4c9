pub const WINDOW_WIDTH: i32 = 1280;              // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;              // Initial window height
pub const FPS: u32 = 60;                         // Frames per second

pub const DEFAULT_DISPLAY_TIME_MS: u64 = 5000;   // Time each slide is shown (milliseconds)
pub const MENU_HIDE_DELAY: f32 = 3.0;            // Menu auto-hide delay after last pointer move (seconds)
pub const DUAL_SEPARATOR_WIDTH: f32 = 8.0;       // Gap between the two photos of a dual slide (pixels)

// Extensions raylib can decode; HEIC conversion lived server-side in the
// original setup and is not supported here.
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];
