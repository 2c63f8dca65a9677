pub mod block;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod fluctuation;
pub mod grid;
pub mod heat;
pub mod labels;
pub mod rotation;

pub use config::{HeatSealConfig, get_config, reload_config};
pub use error::{HeatSealError, Result};
