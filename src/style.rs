use iced::widget::container;
use iced::{Border, Color, Theme};

pub mod button {
    use iced::widget::button::{Status, Style};
    use iced::{Border, Theme};

    pub fn transparent(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        Style {
            text_color: palette.background.base.text,
            border: Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            background: match status {
                Status::Active | Status::Disabled => None,
                Status::Pressed => Some(palette.background.weak.color.into()),
                Status::Hovered => Some(palette.background.strong.color.into()),
            },
            ..Default::default()
        }
    }

    pub fn export(theme: &Theme, status: Status) -> Style {
        let palette = theme.extended_palette();

        let (background, text_color) = match status {
            Status::Active => (palette.primary.base.color, palette.primary.base.text),
            Status::Hovered | Status::Pressed => {
                (palette.primary.strong.color, palette.primary.strong.text)
            }
            Status::Disabled => (
                palette.background.weak.color,
                palette.background.weak.text.scale_alpha(0.5),
            ),
        };

        Style {
            background: Some(background.into()),
            text_color,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn sea_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn instructions(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.scale_alpha(0.4).into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color.scale_alpha(0.5),
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn toast(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: 4.0.into(),
        },
        shadow: iced::Shadow {
            color: Color::BLACK.scale_alpha(0.6),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}
