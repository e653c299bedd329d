//! # stool-core
//!
//! Core library for the `stool` student utilities.
//!
//! This crate holds every tool's logic; `stool-cli` is a thin command layer on top.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stool_core::prelude::*;
//!
//! fn main() -> stool_core::Result<()> {
//!     let config = Config::load(None)?;
//!     let service = BioService::new(&config);
//!
//!     let mut session = service.session("professional")?;
//!     session.set_field(BioField::Name, "Ada");
//!     session.set_field(BioField::Role, "Engineer");
//!     println!("{}", session.view().bio);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Tools Layer                │  bio, raster, resume
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Services that tie tools to files and config
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Configuration persistence
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Validation, file and logging helpers
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`bio`]: Template substitution, character limits and the bio form session
//! - [`raster`]: Image loading, resizing and before/after comparison
//! - [`resume`]: Resume model, form documents, preview and export
//! - [`clipboard`]: Clipboard capability
//! - [`core`]: Service layer used by the command line
//! - [`storage`]: Configuration file
//! - [`display`]: Table output
//! - [`error`]: Hierarchical error system with troubleshooting hints

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use stool_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Tools
    pub use crate::bio::{BioField, BioSession, BioTemplate, TemplateCatalog};
    pub use crate::raster::{Comparator, Orientation, ResizerSession, TargetDimensions};
    pub use crate::resume::{ResumeData, ResumeForm, ResumeTemplate};

    // Services
    pub use crate::core::services::bio_service::BioService;
    pub use crate::core::services::compare_service::CompareService;
    pub use crate::core::services::config_service::ConfigService;
    pub use crate::core::services::resize_service::ResizeService;
    pub use crate::core::services::resume_service::ResumeService;

    // Storage
    pub use crate::storage::config::Config;

    // Display utilities
    pub use crate::display::TableDisplay;
}

/// Bio maker: templates, rendering and platform limits.
pub mod bio;

/// Clipboard capability and its system and in-memory implementations.
pub mod clipboard;

/// Business logic layer - services.
///
/// - [`core::services::bio_service`]: Bio rendering with configured templates
/// - [`core::services::resize_service`]: File-to-file resizing
/// - [`core::services::compare_service`]: Before/after compositing
/// - [`core::services::resume_service`]: Resume form loading and preview
/// - [`core::services::config_service`]: Configuration management
pub mod core;

/// Display layer - table rendering for terminal output.
pub mod display;

/// Error handling - hierarchical error system.
///
/// Provides structured error handling:
/// - Domain-specific error variants (Image, Bio, Resume, Config, etc.)
/// - Severity levels (Critical, High, Medium, Low)
/// - Troubleshooting hints for common issues
pub mod error;

/// Raster image tools.
pub mod raster;

/// Resume builder.
pub mod resume;

/// Storage layer - configuration persistence.
pub mod storage;

/// Utilities layer - shared helpers.
pub mod utils;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[doc(hidden)]
pub use storage::config::Config;
