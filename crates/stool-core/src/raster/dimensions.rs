//! Target sizes, presets and aspect-ratio locking.

use serde::Serialize;

/// Largest accepted side of an output image, in pixels.
pub const MAX_SIDE: u32 = 16_384;

/// Requested output size. Zero and negative values are representable on
/// purpose: the form accepts them and the resize produces no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetDimensions {
    pub width: i32,
    pub height: i32,
}

impl TargetDimensions {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both sides as pixel counts, or `None` if either side is not positive.
    pub fn to_pixels(&self) -> Option<(u32, u32)> {
        let width = u32::try_from(self.width).ok().filter(|w| *w > 0)?;
        let height = u32::try_from(self.height).ok().filter(|h| *h > 0)?;
        Some((width, height))
    }

    /// Whether either side is larger than [`MAX_SIDE`].
    pub fn exceeds_max(&self) -> bool {
        [self.width, self.height]
            .into_iter()
            .any(|side| u32::try_from(side).is_ok_and(|side| side > MAX_SIDE))
    }
}

impl Default for TargetDimensions {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl From<(u32, u32)> for TargetDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizePreset {
    pub name: &'static str,
    pub width: i32,
    pub height: i32,
}

impl SizePreset {
    pub fn dimensions(&self) -> TargetDimensions {
        TargetDimensions::new(self.width, self.height)
    }

    /// Lowercase, dash separated form of the name, e.g. `instagram-post`.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

const PRESETS: [SizePreset; 4] = [
    SizePreset {
        name: "Instagram Post",
        width: 1080,
        height: 1080,
    },
    SizePreset {
        name: "Twitter Post",
        width: 1200,
        height: 675,
    },
    SizePreset {
        name: "Facebook Cover",
        width: 851,
        height: 315,
    },
    SizePreset {
        name: "LinkedIn Cover",
        width: 1584,
        height: 396,
    },
];

pub fn presets() -> &'static [SizePreset] {
    &PRESETS
}

/// Look a preset up by display name or slug, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static SizePreset> {
    let wanted = name.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|p| p.name.to_lowercase() == wanted || p.slug() == wanted)
}

/// Height that keeps the `original` ratio for a new width.
pub fn locked_height(width: i32, original: (u32, u32)) -> i32 {
    let (w0, h0) = original;
    (f64::from(width) * f64::from(h0) / f64::from(w0)).round() as i32
}

/// Width that keeps the `original` ratio for a new height.
pub fn locked_width(height: i32, original: (u32, u32)) -> i32 {
    let (w0, h0) = original;
    (f64::from(height) * f64::from(w0) / f64::from(h0)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        assert_eq!(TargetDimensions::default(), TargetDimensions::new(800, 600));
    }

    #[test]
    fn test_exceeds_max() {
        assert!(!TargetDimensions::new(16_384, 16_384).exceeds_max());
        assert!(TargetDimensions::new(16_385, 10).exceeds_max());
        assert!(TargetDimensions::new(10, i32::MAX).exceeds_max());
        assert!(!TargetDimensions::new(-20_000, 0).exceeds_max());
    }

    #[test]
    fn test_to_pixels_rejects_non_positive() {
        assert_eq!(TargetDimensions::new(10, 20).to_pixels(), Some((10, 20)));
        assert_eq!(TargetDimensions::new(0, 20).to_pixels(), None);
        assert_eq!(TargetDimensions::new(10, -5).to_pixels(), None);
    }

    #[test]
    fn test_locked_height() {
        assert_eq!(locked_height(960, (1920, 1080)), 540);
        assert_eq!(locked_height(100, (3, 2)), 67);
        assert_eq!(locked_height(0, (3, 2)), 0);
    }

    #[test]
    fn test_locked_width() {
        assert_eq!(locked_width(540, (1920, 1080)), 960);
        assert_eq!(locked_width(100, (2, 3)), 67);
    }

    #[test]
    fn test_lock_round_trip_drift_is_bounded() {
        let original = (1000, 333);
        for width in 1..500 {
            let height = locked_height(width, original);
            let back = locked_width(height, original);
            assert!((back - width).abs() <= 2, "width {width} came back as {back}");
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(presets().len(), 4);
        let preset = find_preset("twitter-post").unwrap();
        assert_eq!(preset.dimensions(), TargetDimensions::new(1200, 675));
        assert_eq!(find_preset("LinkedIn Cover").unwrap().width, 1584);
        assert!(find_preset("poster").is_none());
    }
}
