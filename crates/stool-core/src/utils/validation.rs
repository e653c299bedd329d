//! Input validation for command-line values.

use crate::error::CliError;
use crate::raster::MAX_SIDE;

/// How a command prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Validate an output format name (`text` or `json`)
pub fn parse_output_format(format: &str) -> crate::Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(CliError::InvalidArguments(format!(
            "Invalid format '{}': expected text or json",
            other
        ))
        .into()),
    }
}

/// A compositing frame needs both sides, and both must be positive.
pub fn validate_frame_size(
    width: Option<u32>,
    height: Option<u32>,
) -> crate::Result<Option<(u32, u32)>> {
    match (width, height) {
        (None, None) => Ok(None),
        (Some(w), Some(h)) if w > MAX_SIDE || h > MAX_SIDE => {
            Err(CliError::InvalidArguments(format!(
                "Frame size {}x{} is too large: each side must be at most {} pixels",
                w, h, MAX_SIDE
            ))
            .into())
        }
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok(Some((w, h))),
        (Some(_), Some(_)) => Err(CliError::InvalidArguments(
            "Frame width and height must be greater than zero".to_string(),
        )
        .into()),
        _ => Err(CliError::InvalidArguments(
            "--width and --height must be given together".to_string(),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            parse_output_format("csv"),
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
    }

    #[test]
    fn test_validate_frame_size() {
        assert_eq!(validate_frame_size(None, None).unwrap(), None);
        assert_eq!(
            validate_frame_size(Some(640), Some(480)).unwrap(),
            Some((640, 480))
        );
        assert!(validate_frame_size(Some(640), None).is_err());
        assert!(validate_frame_size(None, Some(480)).is_err());
        assert!(validate_frame_size(Some(0), Some(480)).is_err());
        assert!(validate_frame_size(Some(MAX_SIDE), Some(MAX_SIDE)).is_ok());
        assert!(matches!(
            validate_frame_size(Some(u32::MAX), Some(u32::MAX)),
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
    }
}
