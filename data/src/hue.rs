use iced_core::Color;
use palette::Mix;
use palette::rgb::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

/// Named fill colors a glyph can carry. Serialized as lowercase CSS names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Cyan,
    Purple,
    Pink,
    Brown,
    Beige,
    White,
}

/// Owning colors, consumed in generation order.
pub const PALETTE: [Hue; 10] = [
    Hue::Red,
    Hue::Orange,
    Hue::Yellow,
    Hue::Green,
    Hue::Blue,
    Hue::Cyan,
    Hue::Purple,
    Hue::Pink,
    Hue::Brown,
    Hue::Beige,
];

/// Color a selected glyph is painted with.
pub const HIGHLIGHT: Hue = Hue::White;

impl Hue {
    /// Palette entry owned by the record generated at `index`.
    ///
    /// # Panics
    /// When `index` is outside the palette; record ids always fit.
    pub fn owned_by(index: usize) -> Self {
        PALETTE[index]
    }

    pub fn color(self) -> Color {
        match self {
            Hue::Red => Color::from_rgb8(255, 0, 0),
            Hue::Orange => Color::from_rgb8(255, 165, 0),
            Hue::Yellow => Color::from_rgb8(255, 255, 0),
            Hue::Green => Color::from_rgb8(0, 128, 0),
            Hue::Blue => Color::from_rgb8(0, 0, 255),
            Hue::Cyan => Color::from_rgb8(0, 255, 255),
            Hue::Purple => Color::from_rgb8(128, 0, 128),
            Hue::Pink => Color::from_rgb8(255, 192, 203),
            Hue::Brown => Color::from_rgb8(165, 42, 42),
            Hue::Beige => Color::from_rgb8(245, 245, 220),
            Hue::White => Color::WHITE,
        }
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Cyan => "cyan",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
            Hue::Brown => "brown",
            Hue::Beige => "beige",
            Hue::White => "white",
        };
        write!(f, "{name}")
    }
}

/// Channel-wise interpolation in sRGB space, `t` clamped to `[0, 1]`.
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    to_color(to_rgba(from).mix(to_rgba(to), t))
}

fn to_color(rgba: Rgba) -> Color {
    Color {
        r: rgba.color.red,
        g: rgba.color.green,
        b: rgba.color.blue,
        a: rgba.alpha,
    }
}

fn to_rgba(color: Color) -> Rgba {
    Rgba {
        alpha: color.a,
        color: Rgb::new(color.r, color.g, color.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_entries_are_distinct() {
        let unique: HashSet<_> = PALETTE.iter().collect();
        assert_eq!(unique.len(), PALETTE.len());
        assert!(!PALETTE.contains(&HIGHLIGHT));
    }

    #[test]
    fn mix_hits_endpoints() {
        let red = Hue::Red.color();
        let white = Hue::White.color();
        assert_eq!(mix(red, white, 0.0), red);
        assert_eq!(mix(red, white, 1.0), white);

        let half = mix(red, white, 0.5);
        assert_eq!(half.r, 1.0);
        assert!((half.g - 0.5).abs() < 1e-6);
    }

    #[test]
    fn mix_blends_alpha_and_clamps_factor() {
        let clear = Color::from_rgba(0.0, 0.0, 1.0, 0.0);
        let blue = Hue::Blue.color();

        let quarter = mix(clear, blue, 0.25);
        assert!((quarter.a - 0.25).abs() < 1e-6);
        assert_eq!(mix(clear, blue, 2.0), mix(clear, blue, 1.0));
        assert_eq!(mix(clear, blue, -1.0), clear);
    }

    #[test]
    fn serializes_as_css_name() {
        let json = serde_json::to_string(&Hue::Beige).unwrap();
        assert_eq!(json, "\"beige\"");
        assert_eq!(Hue::Beige.to_string(), "beige");
    }
}
