//! Resize service: load an image file, size it, write the result next to it.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::Result;
use crate::error::{CliError, StorageError};
use crate::raster::{
    ImageDecoder, ImageSlot, MAX_SIDE, ResizerSession, StandardDecoder, find_preset, load_into,
    output_file_name,
};
use crate::utils::file::ensure_directory_exists;

/// What the user asked for. Explicit sides are applied after the preset.
#[derive(Debug, Clone, Default)]
pub struct ResizeRequest {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub preset: Option<String>,
    pub aspect_lock: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub output: PathBuf,
    pub original: (u32, u32),
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

pub struct ResizeService {
    decoder: Box<dyn ImageDecoder>,
}

impl Default for ResizeService {
    fn default() -> Self {
        Self::new(Box::new(StandardDecoder))
    }
}

impl ResizeService {
    pub fn new(decoder: Box<dyn ImageDecoder>) -> Self {
        Self { decoder }
    }

    /// Build the resizer form for `input` and `request`.
    ///
    /// `Ok(None)` when `input` is not an image; the selection is ignored.
    pub async fn prepare(
        &self,
        input: &Path,
        request: &ResizeRequest,
    ) -> Result<Option<ResizerSession>> {
        let mut slot = ImageSlot::new();
        if !load_into(&mut slot, input, self.decoder.as_ref()).await? {
            return Ok(None);
        }
        let Some(asset) = slot.take() else {
            return Ok(None);
        };

        let mut session = ResizerSession::new(request.aspect_lock);
        session.load(asset);

        if let Some(name) = &request.preset {
            let preset = find_preset(name).ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "Unknown preset '{}'. Run 'stool presets' to list them",
                    name
                ))
            })?;
            session.apply_preset(preset);
        }

        // Both sides given: take them as typed.
        if request.width.is_some() && request.height.is_some() {
            session.set_aspect_lock(false);
        }
        if let Some(width) = request.width {
            session.set_width(width);
        }
        if let Some(height) = request.height {
            session.set_height(height);
        }

        let target = session.dimensions();
        if target.exceeds_max() {
            return Err(CliError::InvalidArguments(format!(
                "Target size {}x{} is too large: each side must be at most {} pixels",
                target.width, target.height, MAX_SIDE
            ))
            .into());
        }

        Ok(Some(session))
    }

    /// Resize `input` and write it to `output`, or to `resized-<name>`
    /// beside the input when no output is given.
    ///
    /// `Ok(None)` when nothing was written: the input is not an image or
    /// the target size is empty.
    pub async fn resize_file(
        &self,
        input: &Path,
        request: &ResizeRequest,
        output: Option<PathBuf>,
    ) -> Result<Option<ResizeOutcome>> {
        let Some(session) = self.prepare(input, request).await? else {
            log::info!("{} is not an image, nothing to resize", input.display());
            return Ok(None);
        };

        let Some(encoded) = session.export()? else {
            return Ok(None);
        };

        let output = match output {
            Some(path) => path,
            None => default_output_path(input),
        };
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(parent)?;
        }

        tokio::fs::write(&output, &encoded.bytes)
            .await
            .map_err(|source| StorageError::FileIo {
                path: output.to_string_lossy().to_string(),
                source,
            })?;
        log::info!(
            "wrote {}x{} {:?} to {}",
            encoded.width,
            encoded.height,
            encoded.format,
            output.display()
        );

        Ok(Some(ResizeOutcome {
            output,
            original: session.original().unwrap_or_default(),
            width: encoded.width,
            height: encoded.height,
            format: encoded.format,
        }))
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(output_file_name(&name))
}
