pub mod types;
pub mod grouper;
pub mod palette;
pub mod section;

pub use types::{RawSkill, Skill, SkillCategory, SkillLevel, SkillsError};
pub use grouper::{group_and_sort, parse_skillset, partition_skillset, SkillGroup, SkillGroups};
pub use palette::{ColorToken, LegendEntry, Palette, PaletteConfig};
pub use section::{CategoryBlock, SkillBadge, SkillsSection};
