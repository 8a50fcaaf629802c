/// Palette layout follows <https://github.com/iced-rs/iced/blob/master/core/src/theme/palette.rs>
use iced_core::{
    Color,
    theme::{Custom, Palette},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Theme(pub iced_core::Theme);

impl Default for Theme {
    fn default() -> Self {
        Self(iced_core::Theme::Custom(deep_sea_theme().into()))
    }
}

impl From<Theme> for iced_core::Theme {
    fn from(val: Theme) -> Self {
        val.0
    }
}

pub fn deep_sea_theme() -> Custom {
    Custom::new(
        "Deep Sea".to_string(),
        Palette {
            background: Color::from_rgb8(12, 28, 46),
            text: Color::from_rgb8(225, 232, 240),
            primary: Color::from_rgb8(64, 156, 214),
            success: Color::from_rgb8(72, 190, 140),
            danger: Color::from_rgb8(226, 88, 72),
            warning: Color::from_rgb8(240, 196, 64),
        },
    )
}

pub fn shallows_theme() -> Custom {
    Custom::new(
        "Shallows".to_string(),
        Palette {
            background: Color::from_rgb8(236, 244, 250),
            text: Color::from_rgb8(24, 36, 48),
            primary: Color::from_rgb8(20, 110, 180),
            success: Color::from_rgb8(34, 139, 84),
            danger: Color::from_rgb8(178, 34, 34),
            warning: Color::from_rgb8(205, 133, 63),
        },
    )
}

/// Water gradient drawn behind the glyphs, surface first.
pub fn water(theme: &iced_core::Theme) -> (Color, Color) {
    let palette = theme.palette();
    let surface = Color {
        a: 1.0,
        ..palette.primary
    };
    (surface.scale_alpha(0.35), palette.background)
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let name = match &self.0 {
            iced_core::Theme::Custom(custom) if custom.to_string() == "Shallows" => "shallows",
            iced_core::Theme::Light => "light",
            iced_core::Theme::Dark => "dark",
            _ => "deep-sea",
        };
        name.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;

        let theme = match name.as_str() {
            "deep-sea" => Theme::default().0,
            "shallows" => iced_core::Theme::Custom(shallows_theme().into()),
            "light" => iced_core::Theme::Light,
            "dark" => iced_core::Theme::Dark,
            _ => {
                return Err(serde::de::Error::custom(format!("Invalid theme: {}", name)));
            }
        };

        Ok(Theme(theme))
    }
}
