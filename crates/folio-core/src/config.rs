use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a carousel glide is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Theme name ("ink" or "paper")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Carousel behavior
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: default_theme_name(),
            carousel: CarouselConfig::default(),
        }
    }
}

/// Timing and motion knobs for the panel carousels.
///
/// Two instances run on the home page (story panels and preview cards) and a
/// third on the projects page; they share this configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// How long a programmatic glide is trusted before organic scroll events
    /// are honored again
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Interval between automatic next-panel transitions
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Idle time after a user interaction before auto-advance restarts
    #[serde(default = "default_resume_ms")]
    pub resume_ms: u64,
    /// Horizontal drag distance required to register a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u16,
    /// Duration of the eased glide between panels
    #[serde(default = "default_glide_ms")]
    pub glide_ms: u64,
    /// Easing curve for glides
    #[serde(default)]
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            auto_advance_ms: default_auto_advance_ms(),
            resume_ms: default_resume_ms(),
            swipe_threshold: default_swipe_threshold(),
            glide_ms: default_glide_ms(),
            easing: Easing::default(),
        }
    }
}

/// Easing curve applied to carousel glides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No interpolation, jump at the end
    None,
    Linear,
    #[default]
    CubicOut,
    QuintOut,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_theme_name() -> String {
    "ink".to_string()
}

fn default_settle_ms() -> u64 {
    550
}

fn default_auto_advance_ms() -> u64 {
    4000
}

fn default_resume_ms() -> u64 {
    5000
}

fn default_swipe_threshold() -> u16 {
    50
}

fn default_glide_ms() -> u64 {
    250
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carousel_config() {
        let config = CarouselConfig::default();
        assert_eq!(config.settle_ms, 550);
        assert_eq!(config.auto_advance_ms, 4000);
        assert_eq!(config.resume_ms, 5000);
        assert_eq!(config.swipe_threshold, 50);
        assert_eq!(config.easing, Easing::CubicOut);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 50

            [ui.carousel]
            auto_advance_ms = 2500
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.carousel.auto_advance_ms, 2500);
        // Untouched fields keep their defaults
        assert_eq!(config.ui.carousel.settle_ms, 550);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.ui.carousel.glide_ms, config.ui.carousel.glide_ms);
        assert_eq!(parsed.ui.theme, config.ui.theme);
    }

    #[test]
    fn test_easing_names() {
        let config: CarouselConfig = toml::from_str("easing = \"quint_out\"").unwrap();
        assert_eq!(config.easing, Easing::QuintOut);
    }
}
