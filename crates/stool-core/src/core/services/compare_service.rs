//! Compare service: composite a before/after pair into one PNG.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::Result;
use crate::error::{CliError, ImageError, StorageError};
use crate::raster::resize::write_image;
use crate::raster::{Comparator, ImageAsset, ImageDecoder, StandardDecoder, read_image_file};
use crate::utils::file::ensure_directory_exists;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOutcome {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub comparator: Comparator,
}

pub struct CompareService {
    decoder: Box<dyn ImageDecoder>,
}

impl Default for CompareService {
    fn default() -> Self {
        Self::new(Box::new(StandardDecoder))
    }
}

impl CompareService {
    pub fn new(decoder: Box<dyn ImageDecoder>) -> Self {
        Self { decoder }
    }

    /// Load both images concurrently. Either side may come back empty if
    /// the file is not an image.
    pub async fn load_pair(
        &self,
        before: &Path,
        after: &Path,
    ) -> Result<(Option<ImageAsset>, Option<ImageAsset>)> {
        let decoder = self.decoder.as_ref();
        let (before_asset, after_asset) = tokio::join!(
            read_image_file(before, decoder),
            read_image_file(after, decoder)
        );
        Ok((before_asset?, after_asset?))
    }

    /// Render the comparison at `comparator`'s position and write it as PNG.
    /// The frame defaults to the "before" image's size.
    pub async fn compare_files(
        &self,
        before: &Path,
        after: &Path,
        comparator: Comparator,
        frame: Option<(u32, u32)>,
        output: &Path,
    ) -> Result<CompareOutcome> {
        let (before_asset, after_asset) = self.load_pair(before, after).await?;
        let before_asset = before_asset.ok_or_else(|| not_an_image(before))?;
        let after_asset = after_asset.ok_or_else(|| not_an_image(after))?;

        let (width, height) = frame.unwrap_or_else(|| before_asset.dimensions());
        let composite = comparator.composite(
            &before_asset.to_image()?,
            &after_asset.to_image()?,
            width,
            height,
        )?;

        let bytes = write_image(&DynamicImage::ImageRgba8(composite), ImageFormat::Png).map_err(
            |source| ImageError::Encode {
                format: "Png".to_string(),
                source,
            },
        )?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(parent)?;
        }
        tokio::fs::write(output, &bytes)
            .await
            .map_err(|source| StorageError::FileIo {
                path: output.to_string_lossy().to_string(),
                source,
            })?;
        log::info!("wrote comparison to {}", output.display());

        Ok(CompareOutcome {
            output: output.to_path_buf(),
            width,
            height,
            comparator,
        })
    }
}

fn not_an_image(path: &Path) -> CliError {
    CliError::InvalidArguments(format!("{} is not an image", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use crate::raster::Orientation;
    use crate::raster::asset::test_support::png_bytes;
    use image::Rgba;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_compare_files_half_and_half() {
        let dir = tempdir().expect("Failed to create temp dir");
        let before = dir.path().join("before.png");
        let after = dir.path().join("after.png");
        std::fs::write(&before, png_bytes(10, 10, [255, 0, 0, 255])).unwrap();
        std::fs::write(&after, png_bytes(10, 10, [0, 0, 255, 255])).unwrap();
        let output = dir.path().join("out").join("cmp.png");

        let outcome = CompareService::default()
            .compare_files(&before, &after, Comparator::default(), None, &output)
            .await
            .unwrap();
        assert_eq!((outcome.width, outcome.height), (10, 10));

        let written = image::open(&output).unwrap().to_rgba8();
        assert_eq!(*written.get_pixel(0, 5), Rgba([255, 0, 0, 255]));
        assert_eq!(*written.get_pixel(9, 5), Rgba([0, 0, 255, 255]));
    }

    #[tokio::test]
    async fn test_compare_custom_frame_vertical() {
        let dir = tempdir().expect("Failed to create temp dir");
        let before = dir.path().join("before.png");
        let after = dir.path().join("after.png");
        std::fs::write(&before, png_bytes(4, 4, [255, 0, 0, 255])).unwrap();
        std::fs::write(&after, png_bytes(4, 4, [0, 0, 255, 255])).unwrap();
        let output = dir.path().join("cmp.png");

        let comparator = Comparator::new(100, Orientation::Vertical);
        CompareService::default()
            .compare_files(&before, &after, comparator, Some((8, 8)), &output)
            .await
            .unwrap();

        let written = image::open(&output).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (8, 8));
        assert_eq!(*written.get_pixel(4, 7), Rgba([255, 0, 0, 255]));
    }

    #[tokio::test]
    async fn test_non_image_input_is_rejected() {
        let dir = tempdir().expect("Failed to create temp dir");
        let before = dir.path().join("before.txt");
        let after = dir.path().join("after.png");
        std::fs::write(&before, "text").unwrap();
        std::fs::write(&after, png_bytes(2, 2, [0, 0, 255, 255])).unwrap();

        let (b, a) = CompareService::default()
            .load_pair(&before, &after)
            .await
            .unwrap();
        assert!(b.is_none());
        assert!(a.is_some());

        let result = CompareService::default()
            .compare_files(
                &before,
                &after,
                Comparator::default(),
                None,
                &dir.path().join("cmp.png"),
            )
            .await;
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
    }
}
