pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod portfolio;
pub mod skills;
pub mod state;
