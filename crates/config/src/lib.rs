pub mod settings;

pub use settings::{AppSettings, SeedSettings, Settings};
