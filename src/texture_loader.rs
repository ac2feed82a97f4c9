use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

use crate::constants::PHOTO_EXTENSIONS;
use crate::error::{Result, SlideshowError};

/// Photo files in `dir`, sorted by file name. An empty result is the "no
/// content" condition; nothing downstream runs without photos.
pub fn list_photo_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| SlideshowError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut photos = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SlideshowError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            photos.push(path);
        }
    }
    photos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if photos.is_empty() {
        Err(SlideshowError::NoPhotos(dir.to_path_buf()))
    } else {
        Ok(photos)
    }
}

/// Loads a photo as a texture with its EXIF orientation baked in, so the
/// rest of the viewer never deals with rotation.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> anyhow::Result<Texture2D> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", path.display(), e))?;

    // EXIF orientation is only reliable for JPEG.
    if extension == "jpg" || extension == "jpeg" {
        match exif_orientation(&bytes) {
            // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; the flip variants
            // are ignored, as the original viewer did.
            Some(3) => {
                image.rotate_cw();
                image.rotate_cw();
                debug!("{}: applied 180 deg rotation", path.display());
            }
            Some(6) => {
                image.rotate_cw();
                debug!("{}: applied 90 deg CW rotation", path.display());
            }
            Some(8) => {
                image.rotate_ccw();
                debug!("{}: applied 90 deg CCW rotation", path.display());
            }
            _ => {}
        }
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", path.display(), e))
}

fn exif_orientation(bytes: &[u8]) -> Option<u16> {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            // Non-critical; show the photo unrotated.
            warn!("could not read EXIF data: {e}");
            return None;
        }
    };
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}
