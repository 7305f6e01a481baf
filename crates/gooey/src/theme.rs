//! Theming for Gooey
//!
//! A theme is a flat palette of seven named colors. Widgets read it on every
//! draw; it is replaced wholesale, never mutated in place. Themes come either
//! from the compiled-in presets or from a JSON file of the form
//!
//! ```json
//! { "base": "0xFFFFFF", "neutral": "0x000000", "widget_base": "0xD3D3D3",
//!   "primary": "0x0000FF", "danger": "0xE74C3C", "info": "0x3498DB",
//!   "success": "0x2ECC71" }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{GooeyError, GooeyResult};

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into a `0xRRGGBB` value
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a hex string (`"0xRRGGBB"`, `"#RRGGBB"` or `"RRGGBB"`)
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .or_else(|| hex.strip_prefix('#'))
            .unwrap_or(hex);

        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }

    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:06X}", self.to_u32())
    }
}

/// The named palette every widget draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Window background
    pub base: Color,
    /// Text and outlines
    pub neutral: Color,
    /// Widget body fill
    pub widget_base: Color,
    /// Accent (selection, thumbs, active state)
    pub primary: Color,
    /// Destructive or error state
    pub danger: Color,
    /// Informational accents
    pub info: Color,
    /// Confirmation accents
    pub success: Color,
}

impl Theme {
    /// Light preset
    pub const LIGHT: Self = Self {
        base: Color::from_u32(0xFF_FFFF),
        neutral: Color::from_u32(0x00_0000),
        widget_base: Color::from_u32(0xD3_D3D3),
        primary: Color::from_u32(0x21_96F3),
        danger: Color::from_u32(0xE7_4C3C),
        info: Color::from_u32(0x34_98DB),
        success: Color::from_u32(0x2E_CC71),
    };

    /// Dark preset
    pub const DARK: Self = Self {
        base: Color::from_u32(0x1E_1E1E),
        neutral: Color::from_u32(0xE0_E0E0),
        widget_base: Color::from_u32(0x3A_3A3A),
        primary: Color::from_u32(0x21_96F3),
        danger: Color::from_u32(0xE7_4C3C),
        info: Color::from_u32(0x34_98DB),
        success: Color::from_u32(0x2E_CC71),
    };

    /// Parse a theme from its JSON representation
    pub fn from_json_str(json: &str) -> GooeyResult<Self> {
        let file: ThemeFile = serde_json::from_str(json)?;
        file.into_theme()
    }

    /// Load a theme from a JSON file
    pub fn load(path: impl AsRef<Path>) -> GooeyResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let theme = Self::from_json_str(&contents).map_err(|e| {
            log::error!("Failed to load theme from {}: {e}", path.display());
            e
        })?;
        log::debug!("Loaded theme from {}", path.display());
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// On-disk theme layout, colors as hex strings
#[derive(Debug, Deserialize)]
struct ThemeFile {
    base: String,
    neutral: String,
    widget_base: String,
    primary: String,
    danger: String,
    info: String,
    success: String,
}

impl ThemeFile {
    fn into_theme(self) -> GooeyResult<Theme> {
        let parse = |name: &str, value: &str| {
            Color::from_hex(value)
                .ok_or_else(|| GooeyError::Theme(format!("invalid color for '{name}': {value}")))
        };

        Ok(Theme {
            base: parse("base", &self.base)?,
            neutral: parse("neutral", &self.neutral)?,
            widget_base: parse("widget_base", &self.widget_base)?,
            primary: parse("primary", &self.primary)?,
            danger: parse("danger", &self.danger)?,
            info: parse("info", &self.info)?,
            success: parse("success", &self.success)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "base": "0xFFFFFF",
        "neutral": "0x000000",
        "widget_base": "0xD3D3D3",
        "primary": "0x0000FF",
        "danger": "#FF0000",
        "info": "0x00FFFF",
        "success": "00FF00"
    }"##;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("0xFF5733"), Some(Color::rgb(255, 87, 51)));
        assert_eq!(Color::from_hex("#00ff00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("0000FF"), Some(Color::rgb(0, 0, 255)));
        assert_eq!(Color::from_hex("0xFFF"), None);
        assert_eq!(Color::from_hex("0xGGGGGG"), None);
    }

    #[test]
    fn test_color_packing() {
        let color = Color::from_u32(0x12_3456);
        assert_eq!(color, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(color.to_u32(), 0x12_3456);
        assert_eq!(color.to_string(), "0x123456");
    }

    #[test]
    fn test_theme_from_json() {
        let theme = Theme::from_json_str(SAMPLE).unwrap();
        assert_eq!(theme.base, Color::WHITE);
        assert_eq!(theme.primary, Color::rgb(0, 0, 255));
        assert_eq!(theme.danger, Color::rgb(255, 0, 0));
        assert_eq!(theme.success, Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_theme_missing_key() {
        let err = Theme::from_json_str(r#"{ "base": "0xFFFFFF" }"#).unwrap_err();
        assert!(matches!(err, GooeyError::Json(_)));
    }

    #[test]
    fn test_theme_bad_color() {
        let json = SAMPLE.replace("0xD3D3D3", "grey");
        let err = Theme::from_json_str(&json).unwrap_err();
        match err {
            GooeyError::Theme(msg) => assert!(msg.contains("widget_base")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_theme_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let theme = Theme::load(file.path()).unwrap();
        assert_eq!(theme.neutral, Color::BLACK);
    }

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::LIGHT);
        assert_ne!(Theme::LIGHT.base, Theme::DARK.base);
    }
}
