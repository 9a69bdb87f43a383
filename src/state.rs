use crate::config::Config;
use crate::portfolio::{load_palette, load_portfolio, Portfolio};
use crate::skills::Palette;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

/// Shared, read-only after startup.
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    pub loaded_at: DateTime<Utc>,
    pub portfolio: Portfolio,
    pub palette: Palette,
}

impl AppState {
    pub fn new(config: Config, portfolio: Portfolio, palette: Palette) -> Arc<Self> {
        Arc::new(Self {
            config,
            start_time: Instant::now(),
            loaded_at: Utc::now(),
            portfolio,
            palette,
        })
    }

    /// Validates the palette and loads the portfolio named by `config`.
    pub async fn load(config: Config) -> anyhow::Result<Arc<Self>> {
        let palette = match &config.palette_path {
            Some(path) => {
                tracing::info!("loading palette from {}", path);
                load_palette(path).await?
            }
            None => Palette::default(),
        };

        tracing::info!("loading portfolio from {}", config.portfolio_path);
        let document = load_portfolio(&config.portfolio_path).await?;
        let (portfolio, skipped) = document.validate(config.skip_invalid_skills)?;
        for err in &skipped {
            tracing::warn!("skipping skill: {}", err);
        }
        tracing::info!(
            skills = portfolio.skillset.len(),
            projects = portfolio.projects.len(),
            "portfolio loaded"
        );

        Ok(Self::new(config, portfolio, palette))
    }

    pub fn uptime_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
