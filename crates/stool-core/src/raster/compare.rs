//! Before/after image comparison.
//!
//! The "after" image is the bottom layer and the "before" image sits on top
//! of it, clipped to the part of the frame left of (or above) the slider.
//! Position 0 therefore shows only "after" and position 100 only "before".

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Pixel, RgbaImage};
use serde::{Deserialize, Serialize};

use super::dimensions::MAX_SIDE;
use crate::error::{CliError, ImageError};

pub const DEFAULT_POSITION: u8 = 50;
const MAX_POSITION: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            other => Err(CliError::InvalidArguments(format!(
                "Invalid orientation '{}': expected horizontal or vertical",
                other
            ))),
        }
    }
}

/// CSS-style inset of a layer, in percent of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClipInset {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparator {
    position: u8,
    orientation: Orientation,
}

impl Default for Comparator {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            orientation: Orientation::default(),
        }
    }
}

impl Comparator {
    pub fn new(position: i32, orientation: Orientation) -> Self {
        let mut comparator = Self {
            position: DEFAULT_POSITION,
            orientation,
        };
        comparator.set_position(position);
        comparator
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Clamped into `0..=100`.
    pub fn set_position(&mut self, position: i32) {
        let clamped = position.clamp(0, i32::from(MAX_POSITION));
        if clamped != position {
            log::warn!("position {} is outside 0..=100, using {}", position, clamped);
        }
        self.position = clamped as u8;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn toggle_orientation(&mut self) {
        self.orientation = match self.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
    }

    /// Share of the frame covered by the "before" layer.
    pub fn before_fraction(&self) -> f64 {
        f64::from(self.position) / f64::from(MAX_POSITION)
    }

    pub fn before_clip(&self) -> ClipInset {
        let hidden = MAX_POSITION - self.position;
        match self.orientation {
            Orientation::Horizontal => ClipInset {
                right: hidden,
                ..ClipInset::default()
            },
            Orientation::Vertical => ClipInset {
                bottom: hidden,
                ..ClipInset::default()
            },
        }
    }

    /// Where the divider handle sits along the active axis, in percent.
    pub fn handle_offset(&self) -> u8 {
        self.position
    }

    /// Pixel rectangle `(x, y, width, height)` of the visible "before"
    /// layer inside a `frame_width` x `frame_height` frame.
    pub fn before_rect(&self, frame_width: u32, frame_height: u32) -> (u32, u32, u32, u32) {
        let scale = |extent: u32| {
            (f64::from(extent) * self.before_fraction()).round() as u32
        };
        match self.orientation {
            Orientation::Horizontal => (0, 0, scale(frame_width), frame_height),
            Orientation::Vertical => (0, 0, frame_width, scale(frame_height)),
        }
    }

    /// Render both layers into one `frame_width` x `frame_height` image.
    /// Each image is scaled to fit the frame and centered.
    pub fn composite(
        &self,
        before: &DynamicImage,
        after: &DynamicImage,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<RgbaImage, ImageError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(ImageError::InvalidFrame {
                width: frame_width,
                height: frame_height,
            });
        }
        if frame_width > MAX_SIDE || frame_height > MAX_SIDE {
            return Err(ImageError::TooLarge {
                width: frame_width,
                height: frame_height,
                max: MAX_SIDE,
            });
        }

        let before_layer = fit_contain(before, frame_width, frame_height);
        let mut out = fit_contain(after, frame_width, frame_height);

        let (x0, y0, clip_w, clip_h) = self.before_rect(frame_width, frame_height);
        for y in y0..y0 + clip_h {
            for x in x0..x0 + clip_w {
                let top = *before_layer.get_pixel(x, y);
                out.get_pixel_mut(x, y).blend(&top);
            }
        }

        log::debug!(
            "composited {}x{} frame at {}% ({})",
            frame_width,
            frame_height,
            self.position,
            self.orientation
        );
        Ok(out)
    }
}

/// Scale `img` to fit inside the frame keeping its ratio, centered on a
/// transparent background.
fn fit_contain(img: &DynamicImage, frame_width: u32, frame_height: u32) -> RgbaImage {
    let fitted = img.resize(frame_width, frame_height, FilterType::Triangle).to_rgba8();
    let mut canvas = RgbaImage::new(frame_width, frame_height);
    let x = (frame_width - fitted.width()) / 2;
    let y = (frame_height - fitted.height()) / 2;
    imageops::overlay(&mut canvas, &fitted, i64::from(x), i64::from(y));
    canvas
}
