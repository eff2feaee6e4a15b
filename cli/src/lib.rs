mod app;
pub use app::{App, HELP_MENU};

pub mod command;
pub mod config;
pub use config::{Args, Settings};

pub mod logger;
pub mod preferences;
