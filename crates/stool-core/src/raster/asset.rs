use image::{DynamicImage, ImageFormat};

use crate::error::ImageError;

/// An image as selected by the user: the encoded bytes plus what the
/// decoder learned about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub file_name: Option<String>,
}

impl ImageAsset {
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Decode the stored bytes into pixels.
    pub fn to_image(&self) -> Result<DynamicImage, ImageError> {
        image::load_from_memory_with_format(&self.bytes, self.format)
            .map_err(|source| ImageError::Decode { source })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, ImageError>;
}

/// Decoder backed by the `image` crate's built-in codecs.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDecoder;

impl ImageDecoder for StandardDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, ImageError> {
        let format = detect_format(bytes)
            .ok_or_else(|| ImageError::UnsupportedFormat("unrecognized data".to_string()))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|source| ImageError::Decode { source })?;
        log::debug!(
            "decoded {:?} image {}x{}",
            format,
            decoded.width(),
            decoded.height()
        );
        Ok(ImageAsset {
            bytes: bytes.to_vec(),
            format,
            width: decoded.width(),
            height: decoded.height(),
            file_name: None,
        })
    }
}

/// Sniff the image format from the leading bytes. `None` means the data is
/// not an image this crate can read.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

#[cfg(test)]
pub(crate) mod test_support {
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        encode(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color))),
            ImageFormat::Png,
        )
    }

    pub fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), format)
            .expect("encode test image");
        out
    }
}
