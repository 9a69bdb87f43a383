pub mod types;
pub mod loader;

pub use types::{
    Education, Portfolio, PortfolioDocument, Profile, Project, RandomFact, SocialMediaLink, Topic,
};
pub use loader::{load_palette, load_portfolio};
