pub mod config;
pub mod error;

pub use config::{DashboardConfig, DeviceChoice, EmotionModelConfig};
pub use error::{DashboardError, Result};
