pub mod bio_service;
pub mod compare_service;
pub mod config_service;
pub mod resize_service;
pub mod resume_service;
