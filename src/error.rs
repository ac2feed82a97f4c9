use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideshowError {
    #[error("no photos found in {0}")]
    NoPhotos(PathBuf),

    #[error("failed to read photo directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot compose a deck from an empty photo list")]
    EmptyPhotoList,

    #[error("slide index {index} out of range, deck has {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("orientation resolution lost {missing} of {total} probe results")]
    ProbeChannelClosed { missing: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
