//! Colours: the solarized palette, a few named colours and the roles a
//! poster assigns to them.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// RGB colour with components in 0..1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub f64, pub f64, pub f64);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0);
    pub const GRAY: Color = Color(0.5, 0.5, 0.5);
    pub const FIRE_BRICK: Color = Color(0.698, 0.133, 0.133);
    pub const DARK_GOLDENROD: Color = Color(0.722, 0.525, 0.043);

    pub const BASE03: Color = Color(0.0000, 0.1686, 0.2117);
    pub const BASE02: Color = Color(0.0274, 0.2117, 0.2588);
    pub const BASE01: Color = Color(0.3450, 0.4313, 0.4588);
    pub const BASE00: Color = Color(0.3960, 0.4823, 0.5137);
    pub const BASE0: Color = Color(0.5137, 0.5803, 0.5882);
    pub const BASE1: Color = Color(0.5764, 0.6313, 0.6313);
    pub const BASE2: Color = Color(0.9333, 0.9098, 0.8352);
    pub const BASE3: Color = Color(0.9921, 0.9647, 0.8901);
    pub const YELLOW: Color = Color(0.7098, 0.5372, 0.0000);
    pub const ORANGE: Color = Color(0.7960, 0.2941, 0.0862);
    pub const SOL_RED: Color = Color(0.8627, 0.1960, 0.1843);
    pub const MAGENTA: Color = Color(0.8274, 0.2117, 0.5098);
    pub const VIOLET: Color = Color(0.4235, 0.4431, 0.7686);
    pub const BLUE: Color = Color(0.1490, 0.5450, 0.8235);
    pub const CYAN: Color = Color(0.1647, 0.6313, 0.5960);
    pub const GREEN: Color = Color(0.5215, 0.6000, 0.0000);

    pub fn scale(self, k: f64) -> Color {
        Color(self.0 * k, self.1 * k, self.2 * k)
    }

    /// `#rrggbb`, components clamped to 0..1.
    pub fn to_hex(self) -> String {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.0), c(self.1), c(self.2))
    }

    /// Look up a palette or named colour, case-insensitively.
    pub fn named(name: &str) -> Option<Color> {
        let c = match name.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "gray" | "grey" => Color::GRAY,
            "firebrick" => Color::FIRE_BRICK,
            "darkgoldenrod" => Color::DARK_GOLDENROD,
            "base03" => Color::BASE03,
            "base02" => Color::BASE02,
            "base01" => Color::BASE01,
            "base00" => Color::BASE00,
            "base0" => Color::BASE0,
            "base1" => Color::BASE1,
            "base2" => Color::BASE2,
            "base3" => Color::BASE3,
            "yellow" => Color::YELLOW,
            "orange" => Color::ORANGE,
            "solarized_red" => Color::SOL_RED,
            "magenta" => Color::MAGENTA,
            "violet" => Color::VIOLET,
            "blue" => Color::BLUE,
            "cyan" => Color::CYAN,
            "green" => Color::GREEN,
            _ => return None,
        };
        Some(c)
    }
}

/// Colour reference as written in poster files: a role or palette name, or
/// explicit `[r, g, b]` components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    Rgb([f64; 3]),
    Named(String),
}

/// Colours the poster assigns by role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub page_background: Color,
    pub column_background: Color,
    pub stroke: Color,
    pub title_text: Color,
    pub author_text: Color,
    pub body_text: Color,
    pub section_text: Color,
    pub caption_text: Color,
    pub grid_marker: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            page_background: Color::BASE2,
            column_background: Color::BASE3,
            stroke: Color::BLACK,
            title_text: Color::FIRE_BRICK,
            author_text: Color::DARK_GOLDENROD,
            body_text: Color(0.1, 0.1, 0.1),
            section_text: Color::BLUE.scale(0.75),
            caption_text: Color::GRAY,
            grid_marker: Color::RED,
        }
    }
}

impl Palette {
    /// Resolve a colour reference. Role names (`title`, `author`, `body`,
    /// `section`, `caption`) take precedence over palette names.
    pub fn resolve(&self, r: &ColorRef) -> Result<Color> {
        match r {
            ColorRef::Rgb([r, g, b]) => Ok(Color(*r, *g, *b)),
            ColorRef::Named(name) => {
                let role = match name.as_str() {
                    "title" => Some(self.title_text),
                    "author" => Some(self.author_text),
                    "body" => Some(self.body_text),
                    "section" => Some(self.section_text),
                    "caption" => Some(self.caption_text),
                    "background" => Some(self.page_background),
                    "column" => Some(self.column_background),
                    _ => None,
                };
                role.or_else(|| Color::named(name))
                    .ok_or_else(|| Error::ContentError(format!("unknown colour '{}'", name)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encoding() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color(2.0, -1.0, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn section_colour_is_darkened_blue() {
        let p = Palette::default();
        assert!((p.section_text.2 - 0.8235 * 0.75).abs() < 1e-12);
    }

    #[test]
    fn resolve_roles_names_and_rgb() {
        let p = Palette::default();
        assert_eq!(p.resolve(&ColorRef::Named("title".into())).unwrap(), Color::FIRE_BRICK);
        assert_eq!(p.resolve(&ColorRef::Named("Cyan".into())).unwrap(), Color::CYAN);
        assert_eq!(p.resolve(&ColorRef::Rgb([0.1, 0.2, 0.3])).unwrap(), Color(0.1, 0.2, 0.3));
        assert!(p.resolve(&ColorRef::Named("chartreuse".into())).is_err());
    }

    #[test]
    fn colour_refs_deserialize_untagged() {
        let r: ColorRef = serde_json::from_str("[1.0, 0.0, 0.0]").unwrap();
        assert_eq!(r, ColorRef::Rgb([1.0, 0.0, 0.0]));
        let n: ColorRef = serde_json::from_str("\"author\"").unwrap();
        assert_eq!(n, ColorRef::Named("author".into()));
    }
}
