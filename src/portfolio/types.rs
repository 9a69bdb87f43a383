use serde::{Deserialize, Serialize};

use crate::skills::{partition_skillset, parse_skillset, RawSkill, Skill, SkillsError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub image_url: String,
    #[serde(default)]
    pub social_media_links: Option<Vec<SocialMediaLink>>,
    /// Paragraphs, rendered with spacing between them
    pub about: Vec<String>,
    #[serde(default)]
    pub random_facts: Option<Vec<RandomFact>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
    pub updated_at: String,
}

/// Portfolio as read from disk; the skillset is not validated yet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub profile: Profile,
    #[serde(default)]
    pub skillset: Vec<RawSkill>,
    #[serde(default)]
    pub educational_backgrounds: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Portfolio with a validated skillset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    pub skillset: Vec<Skill>,
    pub educational_backgrounds: Vec<Education>,
    pub projects: Vec<Project>,
}

impl PortfolioDocument {
    /// Validates the skillset.
    ///
    /// With `skip_invalid` unset the first invalid skill fails the whole
    /// document. Otherwise invalid skills are dropped and returned alongside.
    pub fn validate(self, skip_invalid: bool) -> Result<(Portfolio, Vec<SkillsError>), SkillsError> {
        let (skillset, skipped) = if skip_invalid {
            partition_skillset(self.skillset)
        } else {
            (parse_skillset(self.skillset)?, Vec::new())
        };

        let portfolio = Portfolio {
            profile: self.profile,
            skillset,
            educational_backgrounds: self.educational_backgrounds,
            projects: self.projects,
        };

        Ok((portfolio, skipped))
    }
}

impl Portfolio {
    /// Projects ordered by last update, most recent first.
    ///
    /// Timestamps that fail to parse as RFC 3339 sort last, keeping their
    /// relative order.
    pub fn projects_by_recency(&self) -> Vec<Project> {
        let mut projects = self.projects.clone();
        projects.sort_by_key(|project| {
            std::cmp::Reverse(
                chrono::DateTime::parse_from_rfc3339(&project.updated_at)
                    .ok()
                    .map(|dt| dt.with_timezone(&chrono::Utc)),
            )
        });
        projects
    }
}
