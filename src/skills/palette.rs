use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use super::types::{SkillLevel, SkillsError};

/// Default level colors, taken from the site's theme.
const DEFAULT_COLORS: [(SkillLevel, &str); SkillLevel::COUNT] = [
    (SkillLevel::Beginner, "bluemine-100"),
    (SkillLevel::Intermediate, "bluemine-400"),
    (SkillLevel::Experienced, "downy-500"),
];

// Lowercase alphanumeric words joined by single hyphens, e.g. "frostedmint-source"
static COLOR_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_color_token_regex() -> &'static Regex {
    COLOR_TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap()
    })
}

/// Opaque presentation color identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Level to color mapping, as read from a palette file.
pub type PaletteConfig = BTreeMap<SkillLevel, String>;

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub level: SkillLevel,
    pub label: &'static str,
    pub color: ColorToken,
}

/// Validated level to color mapping with one token per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    // indexed by SkillLevel::ordinal
    colors: Vec<ColorToken>,
}

impl Palette {
    /// Builds a palette, rejecting mappings that leave a level uncolored or
    /// carry a malformed token.
    pub fn new(config: &PaletteConfig) -> Result<Self, SkillsError> {
        let missing: Vec<SkillLevel> = SkillLevel::ALL
            .into_iter()
            .filter(|level| !config.contains_key(level))
            .collect();
        if !missing.is_empty() {
            return Err(SkillsError::PaletteMismatch { missing });
        }

        let mut colors = Vec::with_capacity(SkillLevel::COUNT);
        for (level, token) in config {
            if !get_color_token_regex().is_match(token) {
                return Err(SkillsError::InvalidColorToken {
                    level: *level,
                    token: token.clone(),
                });
            }
            colors.push(ColorToken(token.clone()));
        }

        Ok(Self { colors })
    }

    pub fn color_for_level(&self, level: SkillLevel) -> &ColorToken {
        &self.colors[level.ordinal()]
    }

    /// One entry per level, lowest level first.
    pub fn legend(&self) -> Vec<LegendEntry> {
        SkillLevel::ALL
            .into_iter()
            .map(|level| LegendEntry {
                level,
                label: level.label(),
                color: self.color_for_level(level).clone(),
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(_, token)| ColorToken((*token).to_string()))
                .collect(),
        }
    }
}
