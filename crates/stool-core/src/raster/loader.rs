//! Async image loading with stale-result protection.

use std::path::Path;

use super::asset::{ImageAsset, ImageDecoder, detect_format};
use crate::error::{AppError, StorageError};

/// Issued when a load starts; only the newest ticket may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Holds the image currently selected for one input of a tool.
#[derive(Debug, Default)]
pub struct ImageSlot {
    issued: u64,
    current: Option<ImageAsset>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Store `asset` if `ticket` is still the newest one. Returns whether
    /// the asset was kept.
    pub fn complete_load(&mut self, ticket: LoadTicket, asset: ImageAsset) -> bool {
        if ticket.0 != self.issued {
            log::debug!(
                "discarding stale image load #{} (latest is #{})",
                ticket.0,
                self.issued
            );
            return false;
        }
        self.current = Some(asset);
        true
    }

    pub fn current(&self) -> Option<&ImageAsset> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<ImageAsset> {
        self.current.take()
    }
}

/// Read and decode an image file.
///
/// Files that are not images are skipped without an error: the result is
/// `Ok(None)`. Read failures and corrupt images are errors.
pub async fn read_image_file(
    path: &Path,
    decoder: &dyn ImageDecoder,
) -> Result<Option<ImageAsset>, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

    if detect_format(&bytes).is_none() {
        log::debug!("ignoring {}: not an image", path.display());
        return Ok(None);
    }

    let mut asset = decoder.decode(&bytes)?;
    if let Some(name) = path.file_name() {
        asset = asset.with_file_name(name.to_string_lossy());
    }
    Ok(Some(asset))
}

/// Load `path` into `slot` under a fresh ticket.
pub async fn load_into(
    slot: &mut ImageSlot,
    path: &Path,
    decoder: &dyn ImageDecoder,
) -> Result<bool, AppError> {
    let ticket = slot.begin_load();
    match read_image_file(path, decoder).await? {
        Some(asset) => Ok(slot.complete_load(ticket, asset)),
        None => Ok(false),
    }
}
