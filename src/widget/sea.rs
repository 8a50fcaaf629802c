use data::config::theme::water;
use data::glyph::{GlyphShape, TOWER_CORNER_RADIUS};
use data::tooltip::Shown;
use data::{RecordId, Session};

use iced::widget::canvas::{self, Frame, Path, Stroke, path::arc};
use iced::{
    Color, Pixels, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse, window,
};
use std::f32::consts::TAU;
use std::time::Instant;

const TEXT_SIZE: f32 = 13.0;
const LINE_H: f32 = TEXT_SIZE + 5.0;
const CHAR_W: f32 = TEXT_SIZE * 0.6;
const TOOLTIP_PADDING: f32 = 8.0;

const OUTLINE_WIDTH: f32 = 1.0;
const SHAFT_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// First layout of the canvas; the session is sized from it once.
    Measured(Size),
    Clicked(RecordId),
    HoverEnter(RecordId, Point),
    HoverExit,
}

#[derive(Default)]
pub struct State {
    hovered: Option<RecordId>,
}

/// Sea canvas: samples the session's glyphs at `now` and routes pointer input.
pub struct Sea<'a> {
    pub session: Option<&'a Session>,
    pub cache: &'a canvas::Cache,
    pub now: Instant,
}

impl Sea<'_> {
    /// Re-runs hit testing under the cursor; glyphs may move while the pointer rests.
    fn refresh_hover(
        &self,
        state: &mut State,
        session: &Session,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Event> {
        let position = cursor.position_in(bounds);
        let hovered = position.and_then(|p| session.glyph_at(p, self.now));

        if hovered == state.hovered {
            return None;
        }
        state.hovered = hovered;

        match (hovered, position) {
            (Some(id), Some(p)) => Some(Event::HoverEnter(id, p)),
            _ => Some(Event::HoverExit),
        }
    }

    fn fill_water(&self, frame: &mut Frame, theme: &Theme) {
        let (surface, deep) = water(theme);
        let size = frame.size();

        frame.fill_rectangle(Point::ORIGIN, size, deep);
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(size.width, size.height * 0.12),
            surface,
        );
    }

    fn fill_glyph(&self, frame: &mut Frame, shape: &GlyphShape) {
        let outline = Stroke::default()
            .with_color(Color::BLACK)
            .with_width(OUTLINE_WIDTH);

        let (shaft_bottom, shaft_top) = shape.shaft_points();
        let shaft = Path::line(shaft_bottom, shaft_top);
        frame.stroke(
            &shaft,
            Stroke::default()
                .with_color(Color::BLACK)
                .with_width(SHAFT_WIDTH),
        );

        let tower = Path::rounded_rectangle(
            shape.tower_top_left(),
            Size::new(shape.tower_width, shape.tower_height),
            TOWER_CORNER_RADIUS.into(),
        );
        frame.fill(&tower, shape.color);
        frame.stroke(&tower, outline);

        let body = Path::new(|b| {
            b.ellipse(arc::Elliptical {
                center: shape.center,
                radii: shape.body,
                rotation: Radians(0.0),
                start_angle: Radians(0.0),
                end_angle: Radians(TAU),
            });
        });
        frame.fill(&body, shape.color);
        frame.stroke(&body, outline);

        let head = Path::circle(shape.head_center(), shape.head_radius);
        frame.fill(&head, shape.color);
        frame.stroke(&head, outline);
    }

    fn fill_tooltip(&self, frame: &mut Frame, theme: &Theme, shown: &Shown) {
        let palette = theme.extended_palette();
        let content = &shown.content;

        let rows: Vec<String> = content
            .lines
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect();
        let max_chars = rows
            .iter()
            .map(String::len)
            .chain(std::iter::once(content.title.len()))
            .max()
            .unwrap_or(0);

        let size = Size::new(
            max_chars as f32 * CHAR_W + TOOLTIP_PADDING * 2.0,
            (rows.len() + 1) as f32 * LINE_H + TOOLTIP_PADDING * 2.0,
        );
        let bounds = frame.size();
        let origin = Point::new(
            shown.position.x.clamp(0.0, (bounds.width - size.width).max(0.0)),
            shown.position.y.clamp(0.0, (bounds.height - size.height).max(0.0)),
        );

        let bg = Path::rounded_rectangle(origin, size, 4.0.into());
        frame.fill(&bg, palette.background.base.color.scale_alpha(0.92));
        frame.stroke(
            &bg,
            Stroke::default()
                .with_color(palette.background.strong.color)
                .with_width(1.0),
        );

        let text_at = |frame: &mut Frame, line: usize, content: String, color: Color| {
            frame.fill_text(canvas::Text {
                content,
                position: origin
                    + Vector::new(TOOLTIP_PADDING, TOOLTIP_PADDING + line as f32 * LINE_H),
                color,
                size: Pixels(TEXT_SIZE),
                font: iced::Font {
                    weight: if line == 0 {
                        iced::font::Weight::Bold
                    } else {
                        iced::font::Weight::Normal
                    },
                    ..iced::Font::DEFAULT
                },
                ..canvas::Text::default()
            });
        };

        text_at(frame, 0, content.title.clone(), palette.background.base.text);
        for (i, row) in rows.into_iter().enumerate() {
            text_at(frame, i + 1, row, palette.background.weak.text);
        }
    }
}

impl canvas::Program<Event> for Sea<'_> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Event>> {
        let Some(session) = self.session else {
            return match event {
                iced::Event::Window(window::Event::RedrawRequested(_)) => {
                    Some(canvas::Action::publish(Event::Measured(bounds.size())))
                }
                _ => None,
            };
        };

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let id = session.glyph_at(position, self.now)?;

                Some(canvas::Action::publish(Event::Clicked(id)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. })
            | iced::Event::Window(window::Event::RedrawRequested(_)) => self
                .refresh_hover(state, session, bounds, cursor)
                .map(canvas::Action::publish),
            iced::Event::Mouse(mouse::Event::CursorLeft) => state
                .hovered
                .take()
                .map(|_| canvas::Action::publish(Event::HoverExit)),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let sea = self.cache.draw(renderer, bounds.size(), |frame| {
            self.fill_water(frame, theme);

            let Some(session) = self.session else {
                return;
            };

            for (_, shape) in session.shapes(self.now) {
                self.fill_glyph(frame, &shape);
            }

            if let Some(shown) = session.tooltip().shown() {
                self.fill_tooltip(frame, theme, shown);
            }
        });

        vec![sea]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::Hue;
    use data::selection::SWAP_DURATION;

    fn bounds() -> Rectangle {
        Rectangle::with_size(Size::new(1280.0, 720.0))
    }

    fn sea<'a>(session: &'a Session, cache: &'a canvas::Cache, now: Instant) -> Sea<'a> {
        Sea {
            session: Some(session),
            cache,
            now,
        }
    }

    #[test]
    fn resting_cursor_keeps_hover_without_events() {
        let t0 = Instant::now();
        let cache = canvas::Cache::new();
        let session = Session::start(bounds().size(), Some(11), Hue::White, t0);
        let pointer = session.shape_of(RecordId(9), t0).center;
        let cursor = mouse::Cursor::Available(pointer);

        let mut state = State::default();
        let sea = sea(&session, &cache, t0);
        assert_eq!(
            sea.refresh_hover(&mut state, &session, bounds(), cursor),
            Some(Event::HoverEnter(RecordId(9), pointer))
        );
        assert_eq!(sea.refresh_hover(&mut state, &session, bounds(), cursor), None);
    }

    #[test]
    fn glyph_moving_away_from_resting_cursor_ends_hover() {
        let t0 = Instant::now();
        let settled = t0 + SWAP_DURATION;
        let cache = canvas::Cache::new();

        let (session, pointer) = (0..10)
            .filter(|&other| other != 3)
            .find_map(|other| {
                let mut session = Session::start(bounds().size(), Some(11), Hue::White, t0);
                let pointer = session.shape_of(RecordId(3), t0).center;

                session.click(RecordId(3), t0);
                session.click(RecordId(other), t0);

                session
                    .glyph_at(pointer, settled)
                    .is_none()
                    .then_some((session, pointer))
            })
            .expect("an exchange that moves glyph #4 off the pointer");
        let cursor = mouse::Cursor::Available(pointer);

        let mut state = State {
            hovered: Some(RecordId(3)),
        };
        let later = sea(&session, &cache, settled);
        assert_eq!(
            later.refresh_hover(&mut state, &session, bounds(), cursor),
            Some(Event::HoverExit)
        );
        assert_eq!(state.hovered, None);
    }
}
