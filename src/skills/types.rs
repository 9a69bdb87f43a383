use serde::{Deserialize, Serialize};
use std::fmt;

/// Proficiency tier. Declaration order is the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Experienced,
}

impl SkillLevel {
    /// Every level, lowest first.
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Experienced,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of the level in [`SkillLevel::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Experienced => 2,
        }
    }

    /// Legend text shown next to the level's color swatch
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Experienced => "experienced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == value)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grouping bucket. Not ordered; iterate [`SkillCategory::ALL`] for display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Front-end")]
    FrontEnd,
    #[serde(rename = "Back-end")]
    BackEnd,
    #[serde(rename = "Dev Tools")]
    DevTools,
    #[serde(rename = "Others")]
    Others,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::FrontEnd,
        SkillCategory::BackEnd,
        SkillCategory::DevTools,
        SkillCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::FrontEnd => "Front-end",
            SkillCategory::BackEnd => "Back-end",
            SkillCategory::DevTools => "Dev Tools",
            SkillCategory::Others => "Others",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == value)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated skill record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            level,
            category,
        }
    }
}

/// Skill record as supplied by the data provider, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSkill {
    pub name: String,
    pub level: String,
    pub category: String,
}

impl TryFrom<RawSkill> for Skill {
    type Error = SkillsError;

    fn try_from(raw: RawSkill) -> Result<Self, Self::Error> {
        let level = SkillLevel::parse(&raw.level).ok_or_else(|| SkillsError::InvalidSkill {
            name: raw.name.clone(),
            field: "level",
            value: raw.level.clone(),
        })?;
        let category =
            SkillCategory::parse(&raw.category).ok_or_else(|| SkillsError::InvalidSkill {
                name: raw.name.clone(),
                field: "category",
                value: raw.category.clone(),
            })?;

        Ok(Skill {
            name: raw.name,
            level,
            category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillsError {
    #[error("Invalid skill '{name}': unknown {field} '{value}'")]
    InvalidSkill {
        name: String,
        field: &'static str,
        value: String,
    },

    #[error("Palette has no color for level(s): {}", join_levels(.missing))]
    PaletteMismatch { missing: Vec<SkillLevel> },

    #[error("Invalid color token for level {level}: '{token}'")]
    InvalidColorToken { level: SkillLevel, token: String },
}

fn join_levels(levels: &[SkillLevel]) -> String {
    levels
        .iter()
        .map(|level| level.label())
        .collect::<Vec<_>>()
        .join(", ")
}
