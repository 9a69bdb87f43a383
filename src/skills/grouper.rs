use serde::Serialize;

use super::types::{RawSkill, Skill, SkillCategory, SkillsError};

/// Skills of one category, strongest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

/// Ordered mapping from category to its skills.
///
/// Always holds one group per category, in [`SkillCategory::ALL`] order,
/// including categories without any skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroups {
    groups: Vec<SkillGroup>,
}

impl SkillGroups {
    pub fn get(&self, category: SkillCategory) -> &[Skill] {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.skills.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillGroup> {
        self.groups.iter()
    }

    /// Total number of skills across all groups
    pub fn skill_count(&self) -> usize {
        self.groups.iter().map(|group| group.skills.len()).sum()
    }

    pub fn into_groups(self) -> Vec<SkillGroup> {
        self.groups
    }
}

/// Groups skills by category and orders each group by level, highest first.
///
/// `sort_by` is stable, so skills sharing a level keep their input order.
pub fn group_and_sort(skills: &[Skill]) -> SkillGroups {
    let groups = SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let mut selected: Vec<Skill> = skills
                .iter()
                .filter(|skill| skill.category == category)
                .cloned()
                .collect();
            selected.sort_by(|a, b| b.level.cmp(&a.level));

            SkillGroup {
                category,
                skills: selected,
            }
        })
        .collect();

    SkillGroups { groups }
}

/// Validates a raw skillset, stopping at the first invalid record.
pub fn parse_skillset(raw: Vec<RawSkill>) -> Result<Vec<Skill>, SkillsError> {
    raw.into_iter().map(Skill::try_from).collect()
}

/// Validates a raw skillset, keeping valid records and collecting the errors
/// for the rest.
pub fn partition_skillset(raw: Vec<RawSkill>) -> (Vec<Skill>, Vec<SkillsError>) {
    let mut skills = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for record in raw {
        match Skill::try_from(record) {
            Ok(skill) => skills.push(skill),
            Err(e) => errors.push(e),
        }
    }

    (skills, errors)
}
