//! Resize-and-re-encode for the image resizer.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use super::asset::ImageAsset;
use super::dimensions::{MAX_SIDE, SizePreset, TargetDimensions, locked_height, locked_width};
use crate::error::ImageError;

/// Bilinear, matching what a browser canvas does by default.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// A re-encoded image ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Scale the whole of `asset` to exactly `target` and encode it in the
/// asset's own format.
///
/// Returns `Ok(None)` when either target side is zero or negative; there
/// is nothing to encode in that case.
pub fn resize(
    asset: &ImageAsset,
    target: TargetDimensions,
) -> Result<Option<EncodedImage>, ImageError> {
    let Some((width, height)) = target.to_pixels() else {
        log::warn!(
            "target size {}x{} is empty, no image produced",
            target.width,
            target.height
        );
        return Ok(None);
    };
    if width > MAX_SIDE || height > MAX_SIDE {
        return Err(ImageError::TooLarge {
            width,
            height,
            max: MAX_SIDE,
        });
    }

    let source = asset.to_image()?;
    let scaled = source.resize_exact(width, height, RESIZE_FILTER);
    let (bytes, format) = encode(&scaled, asset.format)?;

    Ok(Some(EncodedImage {
        bytes,
        format,
        width,
        height,
    }))
}

/// Encode in `format`, falling back to PNG when no encoder exists for it.
fn encode(img: &DynamicImage, format: ImageFormat) -> Result<(Vec<u8>, ImageFormat), ImageError> {
    match write_image(img, format) {
        Ok(bytes) => Ok((bytes, format)),
        Err(image::ImageError::Unsupported(reason)) if format != ImageFormat::Png => {
            log::info!("cannot encode {:?} ({}), writing PNG instead", format, reason);
            write_image(img, ImageFormat::Png)
                .map(|bytes| (bytes, ImageFormat::Png))
                .map_err(|source| ImageError::Encode {
                    format: "Png".to_string(),
                    source,
                })
        }
        Err(source) => Err(ImageError::Encode {
            format: format!("{:?}", format),
            source,
        }),
    }
}

pub(crate) fn write_image(
    img: &DynamicImage,
    format: ImageFormat,
) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Download name for a resized file.
pub fn output_file_name(original: &str) -> String {
    format!("resized-{}", original)
}

/// State of the resizer form: the loaded image, the size it had when it
/// was loaded, and the size the user is asking for.
#[derive(Debug, Clone)]
pub struct ResizerSession {
    asset: Option<ImageAsset>,
    original: Option<(u32, u32)>,
    dimensions: TargetDimensions,
    aspect_lock: bool,
}

impl Default for ResizerSession {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ResizerSession {
    pub fn new(aspect_lock: bool) -> Self {
        Self {
            asset: None,
            original: None,
            dimensions: TargetDimensions::default(),
            aspect_lock,
        }
    }

    /// Replace the current image. Target size resets to the image's own size.
    pub fn load(&mut self, asset: ImageAsset) {
        let size = asset.dimensions();
        self.original = Some(size);
        self.dimensions = size.into();
        self.asset = Some(asset);
    }

    pub fn asset(&self) -> Option<&ImageAsset> {
        self.asset.as_ref()
    }

    pub fn original(&self) -> Option<(u32, u32)> {
        self.original
    }

    pub fn dimensions(&self) -> TargetDimensions {
        self.dimensions
    }

    pub fn aspect_lock(&self) -> bool {
        self.aspect_lock
    }

    pub fn set_aspect_lock(&mut self, enabled: bool) {
        self.aspect_lock = enabled;
    }

    /// Ignored until an image has been loaded.
    pub fn set_width(&mut self, width: i32) {
        let Some(original) = self.original else {
            return;
        };
        self.dimensions.width = width;
        if self.aspect_lock {
            self.dimensions.height = locked_height(width, original);
        }
    }

    /// Ignored until an image has been loaded.
    pub fn set_height(&mut self, height: i32) {
        let Some(original) = self.original else {
            return;
        };
        self.dimensions.height = height;
        if self.aspect_lock {
            self.dimensions.width = locked_width(height, original);
        }
    }

    /// Presets set both sides as-is, regardless of the lock.
    pub fn apply_preset(&mut self, preset: &SizePreset) {
        self.dimensions = preset.dimensions();
    }

    /// Resize the loaded image. `Ok(None)` if nothing is loaded or the
    /// target size is empty.
    pub fn export(&self) -> Result<Option<EncodedImage>, ImageError> {
        match &self.asset {
            Some(asset) => resize(asset, self.dimensions),
            None => Ok(None),
        }
    }
}
