pub mod config;
pub mod content;
pub mod error;

pub use config::{AppConfig, CarouselConfig, Easing};
pub use error::{Error, Result};
