use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub portfolio_path: String,
    pub palette_path: Option<String>,
    pub skip_invalid_skills: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            portfolio_path: env::var("PORTFOLIO_PATH")
                .unwrap_or_else(|_| "portfolio.json".into()),
            palette_path: env::var("PALETTE_PATH").ok().filter(|p| !p.is_empty()),
            skip_invalid_skills: env::var("SKIP_INVALID_SKILLS")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            portfolio_path: "portfolio.json".into(),
            palette_path: None,
            skip_invalid_skills: false,
        }
    }
}
