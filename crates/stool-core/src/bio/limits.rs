//! Per-platform character limits for a rendered bio.

use serde::Serialize;

use super::engine::char_count;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformLimit {
    pub platform: String,
    pub max_chars: usize,
}

impl PlatformLimit {
    pub fn new(platform: impl Into<String>, max_chars: usize) -> Self {
        Self {
            platform: platform.into(),
            max_chars,
        }
    }

    pub fn is_exceeded_by(&self, length: usize) -> bool {
        length > self.max_chars
    }
}

pub fn default_limits() -> Vec<PlatformLimit> {
    vec![
        PlatformLimit::new("instagram", 150),
        PlatformLimit::new("twitter", 160),
        PlatformLimit::new("linkedin", 220),
        PlatformLimit::new("tiktok", 80),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitCheck {
    pub platform: String,
    pub max_chars: usize,
    pub exceeds: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterReport {
    pub length: usize,
    pub checks: Vec<LimitCheck>,
}

impl CharacterReport {
    pub fn any_exceeded(&self) -> bool {
        self.checks.iter().any(|c| c.exceeds)
    }
}

pub fn check_limits(bio: &str, limits: &[PlatformLimit]) -> CharacterReport {
    let length = char_count(bio);
    CharacterReport {
        length,
        checks: limits
            .iter()
            .map(|limit| LimitCheck {
                platform: limit.platform.clone(),
                max_chars: limit.max_chars,
                exceeds: limit.is_exceeded_by(length),
            })
            .collect(),
    }
}
