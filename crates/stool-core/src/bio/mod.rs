//! Social-media bio generation.
//!
//! A bio is a [`BioTemplate`] with `{{field}}` placeholders filled from a
//! [`TemplateFieldSet`]. Rendering is a pure function of those two inputs;
//! [`BioSession`] re-renders after every edit so callers never see a stale
//! bio.

pub mod engine;
pub mod limits;
pub mod session;
pub mod template;

pub use engine::{BioField, TemplateFieldSet, char_count, render};
pub use limits::{CharacterReport, LimitCheck, PlatformLimit, check_limits, default_limits};
pub use session::{BioSession, BioState, BioView, recompute};
pub use template::{BioTemplate, DEFAULT_TEMPLATE_ID, TemplateCatalog, builtin_templates};
