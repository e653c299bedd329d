use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ImageError: {0}")]
    Image(#[from] ImageError),
    #[error("BioError: {0}")]
    Bio(#[from] BioError),
    #[error("ResumeError: {0}")]
    Resume(#[from] ResumeError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Command not implemented: {command}")]
    NotImplemented { command: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String, field_type: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to decode image: {source}")]
    Decode { source: image::ImageError },
    #[error("Failed to encode image as {format}: {source}")]
    Encode {
        format: String,
        source: image::ImageError,
    },
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid frame size {width}x{height}")]
    InvalidFrame { width: u32, height: u32 },
    #[error("Image size {width}x{height} exceeds {max} pixels per side")]
    TooLarge { width: u32, height: u32, max: u32 },
}

#[derive(Error, Debug)]
pub enum BioError {
    #[error("Unknown bio template '{id}'")]
    UnknownTemplate { id: String, available: Vec<String> },
    #[error("Unknown bio field '{0}'")]
    UnknownField(String),
}

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("Unknown resume template '{0}'")]
    UnknownTemplate(String),
    #[error("Unknown {section} field '{field}'")]
    UnknownField { section: String, field: String },
    #[error("Failed to parse resume form: {message}")]
    FormParse { message: String },
}

#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("Failed to copy: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::NotImplemented { .. }) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
            AppError::Image(image_error) => match image_error {
                ImageError::Decode { .. } | ImageError::Encode { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Bio(_) => ErrorSeverity::Medium,
            AppError::Resume(_) => ErrorSeverity::Medium,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Bio(BioError::UnknownTemplate { id, .. }) => {
                format!("Bio template '{}' does not exist", id)
            }
            AppError::Cli(CliError::NotImplemented { command }) => {
                format!("'{}' is not available yet", command)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Bio(BioError::UnknownTemplate { available, .. }) => Some(format!(
                "Available templates: {} ('stool templates' lists them)",
                available.join(", ")
            )),
            AppError::Resume(ResumeError::UnknownTemplate(_)) => {
                Some("Use one of: modern, classic, minimal, professional".to_string())
            }
            AppError::Resume(ResumeError::FormParse { .. }) => {
                Some("'stool resume init' prints an empty form to start from".to_string())
            }
            AppError::Config(_) => {
                Some("Check the [[bio.templates]] entries in config.toml".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Check config.toml or recreate it with 'stool config set'".to_string())
            }
            AppError::Image(ImageError::Decode { .. }) => {
                Some("Make sure the file is a PNG, JPEG, GIF, BMP or WebP image".to_string())
            }
            _ => None,
        }
    }
}
