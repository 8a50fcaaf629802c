use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Border, Center, Element, Fill, padding, theme};
use std::time::{Duration, Instant};

use crate::style;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);
const MAX_TOAST_WIDTH: f32 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Danger,
}

#[derive(Debug, Clone)]
pub struct Toast {
    title: String,
    body: String,
    status: Status,
    created: Instant,
}

impl Toast {
    pub fn error(body: impl Into<String>) -> Self {
        Self::new("Error", body, Status::Danger)
    }

    pub fn success(body: impl Into<String>) -> Self {
        Self::new("Exported", body, Status::Success)
    }

    fn new(title: &str, body: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
            status,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= DEFAULT_TIMEOUT
    }
}

/// Toast column pinned to the bottom-right corner, meant to be stacked above content.
pub fn view<'a, Message>(
    toasts: &'a [Toast],
    on_close: impl Fn(usize) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let cards: Vec<Element<'a, Message>> = toasts
        .iter()
        .enumerate()
        .map(|(index, toast)| {
            let header = container(
                row![
                    text(toast.title.as_str()),
                    space::horizontal(),
                    button("X")
                        .on_press(on_close(index))
                        .style(style::button::transparent)
                        .padding(padding::right(6).left(6).top(2).bottom(2))
                ]
                .align_y(Center),
            )
            .style(move |theme| toast.status.style(theme))
            .width(Fill)
            .padding(4);

            let body = container(
                text(toast.body.as_str())
                    .wrapping(text::Wrapping::Word)
                    .width(Fill),
            )
            .width(Fill)
            .padding(4);

            container(column![header, body])
                .style(style::toast)
                .padding(4)
                .max_width(MAX_TOAST_WIDTH)
                .into()
        })
        .collect();

    container(column(cards).spacing(10).align_x(Alignment::End))
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(24)
        .into()
}

fn styled(pair: theme::palette::Pair) -> container::Style {
    container::Style {
        background: Some(pair.color.into()),
        text_color: pair.text.into(),
        border: Border {
            width: 1.0,
            color: pair.color,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}

impl Status {
    pub fn style(&self, theme: &iced::Theme) -> container::Style {
        let palette = theme.extended_palette();

        match self {
            Status::Success => styled(palette.success.weak),
            Status::Danger => styled(palette.danger.weak),
        }
    }
}
