use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub selection: Color,
    pub accent: Color,
    pub dim: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ink()
    }
}

impl Theme {
    /// Dark palette, the default.
    pub fn ink() -> Self {
        Self {
            bg0: Color::Rgb(0x16, 0x16, 0x1e),
            bg1: Color::Rgb(0x1f, 0x1f, 0x2b),
            bg2: Color::Rgb(0x2a, 0x2a, 0x3a),
            fg0: Color::Rgb(0xc8, 0xc8, 0xd4),
            fg1: Color::Rgb(0xe2, 0xe2, 0xec),
            grey0: Color::Rgb(0x5a, 0x5a, 0x6e),
            grey1: Color::Rgb(0x80, 0x80, 0x96),
            red: Color::Rgb(0xf7, 0x76, 0x8e),
            orange: Color::Rgb(0xff, 0x9e, 0x64),
            yellow: Color::Rgb(0xe0, 0xaf, 0x68),
            green: Color::Rgb(0x9e, 0xce, 0x6a),
            aqua: Color::Rgb(0x73, 0xda, 0xca),
            blue: Color::Rgb(0x7a, 0xa2, 0xf7),
            purple: Color::Rgb(0xbb, 0x9a, 0xf7),
            selection: Color::Rgb(0x2a, 0x2a, 0x3a),
            accent: Color::Rgb(0x7a, 0xa2, 0xf7),
            dim: Color::Rgb(0x5a, 0x5a, 0x6e),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
            success: Color::Rgb(0x9e, 0xce, 0x6a),
            info: Color::Rgb(0x73, 0xda, 0xca),
        }
    }

    /// Light palette.
    pub fn paper() -> Self {
        Self {
            bg0: Color::Rgb(0xfa, 0xf7, 0xf0),
            bg1: Color::Rgb(0xf0, 0xec, 0xe2),
            bg2: Color::Rgb(0xe4, 0xdf, 0xd2),
            fg0: Color::Rgb(0x3a, 0x36, 0x2e),
            fg1: Color::Rgb(0x26, 0x23, 0x1d),
            grey0: Color::Rgb(0xa8, 0xa2, 0x94),
            grey1: Color::Rgb(0x7c, 0x76, 0x68),
            red: Color::Rgb(0xc1, 0x42, 0x4a),
            orange: Color::Rgb(0xc0, 0x6a, 0x2c),
            yellow: Color::Rgb(0xa8, 0x82, 0x1e),
            green: Color::Rgb(0x5a, 0x8a, 0x3a),
            aqua: Color::Rgb(0x2e, 0x8a, 0x7e),
            blue: Color::Rgb(0x2e, 0x64, 0xb8),
            purple: Color::Rgb(0x8a, 0x52, 0xb4),
            selection: Color::Rgb(0xe4, 0xdf, 0xd2),
            accent: Color::Rgb(0x2e, 0x64, 0xb8),
            dim: Color::Rgb(0xa8, 0xa2, 0x94),
            error: Color::Rgb(0xc1, 0x42, 0x4a),
            success: Color::Rgb(0x5a, 0x8a, 0x3a),
            info: Color::Rgb(0x2e, 0x8a, 0x7e),
        }
    }
}

/// Resolve a configured theme name; unknown names fall back to the default.
pub fn load_theme(name: &str) -> Theme {
    match name {
        "paper" => Theme::paper(),
        "ink" => Theme::ink(),
        other => {
            tracing::warn!("unknown theme '{}', using default", other);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let theme = load_theme("neon");
        assert_eq!(theme.bg0, Theme::ink().bg0);
    }

    #[test]
    fn test_named_palettes_differ() {
        assert_ne!(Theme::ink().bg0, Theme::paper().bg0);
    }
}
