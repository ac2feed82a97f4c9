//! Slide composition: turns an ordered photo list into the deck of slides
//! the viewer cycles through.

use std::path::PathBuf;

use clap::ValueEnum;
use log::debug;

use crate::error::{Result, SlideshowError};
use crate::orientation::OrientationMap;

/// One slide of the deck. Dual slides hold two vertical photos shown side
/// by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Single(PathBuf),
    Dual(PathBuf, PathBuf),
}

impl Slide {
    pub fn photos(&self) -> impl Iterator<Item = &PathBuf> {
        let (first, second) = match self {
            Slide::Single(a) => (a, None),
            Slide::Dual(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

/// How the vertical-dual effect picks partners. The two observed variants
/// of the original slideshow disagreed on this, so it is an explicit
/// choice rather than a silent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PairingPolicy {
    /// Pair a vertical photo only with the immediately following photo,
    /// and only if that one is vertical too. Never reorders.
    Adjacent,
    /// Emit all non-vertical photos as singles first, then pair the
    /// verticals among themselves in their original relative order.
    Bucketed,
}

/// The ordered, immutable sequence of slides for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// One single slide per photo, input order preserved.
    pub fn standard(photos: &[PathBuf]) -> Result<Self> {
        if photos.is_empty() {
            return Err(SlideshowError::EmptyPhotoList);
        }
        let slides = photos.iter().cloned().map(Slide::Single).collect();
        Ok(Self { slides })
    }

    /// Vertical-dual composition driven by the resolved orientations.
    ///
    /// Photos without an entry in `orientations` (or classified `Unknown`)
    /// never pair and fall back to single slides.
    pub fn paired(
        photos: &[PathBuf],
        orientations: &OrientationMap,
        policy: PairingPolicy,
    ) -> Result<Self> {
        if photos.is_empty() {
            return Err(SlideshowError::EmptyPhotoList);
        }
        let is_vertical = |photo: &PathBuf| {
            orientations
                .get(photo)
                .is_some_and(|orientation| orientation.is_vertical())
        };

        let mut slides = Vec::new();
        match policy {
            PairingPolicy::Adjacent => {
                let mut i = 0;
                while i < photos.len() {
                    let current = &photos[i];
                    if is_vertical(current)
                        && i + 1 < photos.len()
                        && is_vertical(&photos[i + 1])
                    {
                        debug!(
                            "paired {} with {}",
                            current.display(),
                            photos[i + 1].display()
                        );
                        slides.push(Slide::Dual(current.clone(), photos[i + 1].clone()));
                        i += 2;
                    } else {
                        slides.push(Slide::Single(current.clone()));
                        i += 1;
                    }
                }
            }
            PairingPolicy::Bucketed => {
                let (verticals, others): (Vec<_>, Vec<_>) =
                    photos.iter().cloned().partition(|photo| is_vertical(photo));
                slides.extend(others.into_iter().map(Slide::Single));
                let mut pairs = verticals.chunks_exact(2);
                for pair in &mut pairs {
                    slides.push(Slide::Dual(pair[0].clone(), pair[1].clone()));
                }
                if let [trailing] = pairs.remainder() {
                    slides.push(Slide::Single(trailing.clone()));
                }
            }
        }
        Ok(Self { slides })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    fn photos(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    /// Orientation map from a compact pattern: 'V' vertical, 'L' landscape,
    /// '?' unknown, '-' no entry at all.
    fn orientations(photos: &[PathBuf], pattern: &str) -> OrientationMap {
        photos
            .iter()
            .zip(pattern.chars())
            .filter_map(|(photo, c)| {
                let orientation = match c {
                    'V' => Orientation::Vertical,
                    'L' => Orientation::Landscape,
                    '?' => Orientation::Unknown,
                    _ => return None,
                };
                Some((photo.clone(), orientation))
            })
            .collect()
    }

    fn single(name: &str) -> Slide {
        Slide::Single(PathBuf::from(name))
    }

    fn dual(a: &str, b: &str) -> Slide {
        Slide::Dual(PathBuf::from(a), PathBuf::from(b))
    }

    #[test]
    fn standard_deck_preserves_order_one_slide_per_photo() {
        let photos = photos(&["c.jpg", "a.jpg", "b.jpg"]);
        let deck = Deck::standard(&photos).expect("compose failed");
        assert_eq!(deck.len(), 3);
        assert_eq!(
            deck.slides(),
            &[single("c.jpg"), single("a.jpg"), single("b.jpg")]
        );
    }

    #[test]
    fn standard_deck_rejects_empty_input() {
        assert!(matches!(
            Deck::standard(&[]),
            Err(SlideshowError::EmptyPhotoList)
        ));
    }

    #[test]
    fn adjacent_pairing_is_greedy_and_order_preserving() {
        let photos = photos(&["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
        let map = orientations(&photos, "VVLVVV");
        let deck = Deck::paired(&photos, &map, PairingPolicy::Adjacent).expect("compose failed");
        assert_eq!(
            deck.slides(),
            &[
                dual("0.jpg", "1.jpg"),
                single("2.jpg"),
                dual("3.jpg", "4.jpg"),
                single("5.jpg"),
            ]
        );
    }

    #[test]
    fn trailing_vertical_without_partner_stays_single() {
        let photos = photos(&["0.jpg", "1.jpg"]);
        let map = orientations(&photos, "LV");
        let deck = Deck::paired(&photos, &map, PairingPolicy::Adjacent).expect("compose failed");
        assert_eq!(deck.slides(), &[single("0.jpg"), single("1.jpg")]);
    }

    #[test]
    fn unknown_and_unclassified_photos_never_pair() {
        let photos = photos(&["0.jpg", "1.jpg", "2.jpg", "3.jpg"]);
        // 1 failed to probe, 2 has no entry at all; 0 and 3 are vertical but
        // not adjacent, so nothing pairs.
        let map = orientations(&photos, "V?-V");
        let deck = Deck::paired(&photos, &map, PairingPolicy::Adjacent).expect("compose failed");
        assert_eq!(deck.len(), 4);
        assert!(deck.slides().iter().all(|s| matches!(s, Slide::Single(_))));
    }

    #[test]
    fn bucketed_pairing_groups_verticals_after_landscapes() {
        let photos = photos(&["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
        let map = orientations(&photos, "VLVLVV");
        let deck = Deck::paired(&photos, &map, PairingPolicy::Bucketed).expect("compose failed");
        assert_eq!(
            deck.slides(),
            &[
                single("1.jpg"),
                single("3.jpg"),
                dual("0.jpg", "2.jpg"),
                dual("4.jpg", "5.jpg"),
            ]
        );
    }

    #[test]
    fn bucketed_pairing_leaves_odd_vertical_single() {
        let photos = photos(&["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
        let map = orientations(&photos, "VLVLV");
        let deck = Deck::paired(&photos, &map, PairingPolicy::Bucketed).expect("compose failed");
        assert_eq!(
            deck.slides(),
            &[
                single("1.jpg"),
                single("3.jpg"),
                dual("0.jpg", "2.jpg"),
                single("4.jpg"),
            ]
        );
    }

    #[test]
    fn paired_deck_rejects_empty_input() {
        let map = OrientationMap::new();
        assert!(matches!(
            Deck::paired(&[], &map, PairingPolicy::Adjacent),
            Err(SlideshowError::EmptyPhotoList)
        ));
    }

    #[test]
    fn dual_slide_exposes_both_photos() {
        let slide = dual("a.jpg", "b.jpg");
        let all: Vec<_> = slide.photos().collect();
        assert_eq!(all, vec![&PathBuf::from("a.jpg"), &PathBuf::from("b.jpg")]);
    }
}
