//! Concurrent photo orientation probing, done up front so the composer can
//! pair vertical photos before the first slide is shown.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

use crate::error::{Result, SlideshowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide
    Vertical,
    /// Wide or square
    Landscape,
    /// Probe failed; still counts as settled, never pairs
    Unknown,
}

impl Orientation {
    pub fn classify(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Vertical
        } else {
            Orientation::Landscape
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

pub type OrientationMap = HashMap<PathBuf, Orientation>;

/// Capability that yields a photo's pixel dimensions.
pub trait DimensionProbe: Sync {
    fn dimensions(&self, path: &Path) -> anyhow::Result<(u32, u32)>;
}

/// Production probe; reads dimensions from the file header without a full
/// decode.
pub struct FileProbe;

impl DimensionProbe for FileProbe {
    fn dimensions(&self, path: &Path) -> anyhow::Result<(u32, u32)> {
        Ok(image::image_dimensions(path)?)
    }
}

/// Classifies every photo in `photos`, probing all of them concurrently.
///
/// Returns once every probe has settled, successfully or not. A photo whose
/// probe fails is recorded as [`Orientation::Unknown`] and does not abort
/// the rest. An empty input list is an error; composition must not proceed
/// without photos.
pub fn resolve_orientations<P: DimensionProbe>(
    probe: &P,
    photos: &[PathBuf],
) -> Result<OrientationMap> {
    if photos.is_empty() {
        return Err(SlideshowError::EmptyPhotoList);
    }

    let total = photos.len();
    let mut orientations = OrientationMap::with_capacity(total);
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for path in photos {
            let tx = tx.clone();
            scope.spawn(move || {
                let orientation = match probe.dimensions(path) {
                    Ok((width, height)) => Orientation::classify(width, height),
                    Err(e) => {
                        warn!("failed to probe {}: {e:#}", path.display());
                        Orientation::Unknown
                    }
                };
                let _ = tx.send((path.clone(), orientation));
            });
        }
        drop(tx);

        // Probes settle in arbitrary order; count them until every photo has
        // either classified or failed, then signal completion exactly once by
        // returning.
        let mut settled = 0usize;
        while settled < total {
            match rx.recv() {
                Ok((path, orientation)) => {
                    settled += 1;
                    debug!(
                        "probed {}/{}: {} is {:?}",
                        settled,
                        total,
                        path.display(),
                        orientation
                    );
                    orientations.insert(path, orientation);
                }
                Err(_) => {
                    return Err(SlideshowError::ProbeChannelClosed {
                        missing: total - settled,
                        total,
                    });
                }
            }
        }
        Ok(())
    })?;

    Ok(orientations)
}
