use serde::Serialize;

use super::grouper::SkillGroups;
use super::palette::{ColorToken, LegendEntry, Palette};
use super::types::{SkillCategory, SkillLevel};

#[derive(Debug, Clone, Serialize)]
pub struct SkillBadge {
    pub name: String,
    pub level: SkillLevel,
    pub color: ColorToken,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBlock {
    pub category: SkillCategory,
    pub label: &'static str,
    pub skills: Vec<SkillBadge>,
}

/// Data behind the skills section: a level legend plus one block per category.
#[derive(Debug, Clone, Serialize)]
pub struct SkillsSection {
    pub legend: Vec<LegendEntry>,
    pub categories: Vec<CategoryBlock>,
}

impl SkillsSection {
    pub fn build(groups: &SkillGroups, palette: &Palette, skip_empty: bool) -> Self {
        let categories = groups
            .iter()
            .filter(|group| !(skip_empty && group.skills.is_empty()))
            .map(|group| CategoryBlock {
                category: group.category,
                label: group.category.label(),
                skills: group
                    .skills
                    .iter()
                    .map(|skill| SkillBadge {
                        name: skill.name.clone(),
                        level: skill.level,
                        color: palette.color_for_level(skill.level).clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            legend: palette.legend(),
            categories,
        }
    }
}
