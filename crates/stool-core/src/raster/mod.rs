//! Raster image tools: resizing and before/after comparison.
//!
//! Decoding goes through the [`ImageDecoder`] capability and file loads go
//! through [`ImageSlot`], which discards results that finish after a newer
//! load was started.

pub mod asset;
pub mod compare;
pub mod dimensions;
pub mod loader;
pub mod resize;

pub use asset::{ImageAsset, ImageDecoder, StandardDecoder, detect_format};
pub use compare::{ClipInset, Comparator, Orientation};
pub use dimensions::{
    MAX_SIDE, SizePreset, TargetDimensions, find_preset, locked_height, locked_width, presets,
};
pub use loader::{ImageSlot, LoadTicket, load_into, read_image_file};
pub use resize::{EncodedImage, ResizerSession, output_file_name, resize};
