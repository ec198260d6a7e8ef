pub mod config;

pub use config::{AppConfig, PreviewConfig, SheetConfig};
