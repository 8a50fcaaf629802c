//! Visual description of a record and its animated transitions.
//!
//! Shapes are expressed in canvas coordinates with the body centered at
//! `center`; every other offset is relative to that center. Drawing is left to
//! whichever backend samples [`GlyphRenderer::shape_at`].

use crate::dataset::{Record, RecordId};
use crate::scale::{PERISCOPE_SHAFT_FACTOR, Scales};
use crate::tween::{Interpolate, Tween};

use iced_core::{Color, Point, Vector};
use std::time::{Duration, Instant};

/// Corner radius of the tower rectangle.
pub const TOWER_CORNER_RADIUS: f32 = 5.0;

/// Grab tolerance around the periscope shaft, in px.
const SHAFT_HIT_SLOP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphHandle(usize);

/// Every attribute that is drawn and animated for one submarine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphShape {
    pub center: Point,
    /// Body ellipse radii.
    pub body: Vector,
    /// Tower top-left, relative to `center`.
    pub tower_offset: Vector,
    pub tower_width: f32,
    pub tower_height: f32,
    /// Shaft endpoints on the vertical axis, relative to `center`.
    pub shaft: (f32, f32),
    pub head_radius: f32,
    pub color: Color,
}

impl GlyphShape {
    pub fn from_record(record: &Record, scales: &Scales) -> Self {
        let length = scales.length.map_clamped(record.length);
        let body_height = scales.body_height.map_clamped(record.body_height);
        let tower_height = scales.tower_height.map_clamped(record.tower_height);
        let periscope_radius = scales.periscope_radius.map_clamped(record.periscope_radius);

        let tower_top = -body_height / 2.0 - tower_height;
        let shaft_top = tower_top - periscope_radius * PERISCOPE_SHAFT_FACTOR;

        Self {
            center: Point::new(record.x, scales.depth.map_clamped(record.depth)),
            body: Vector::new(length / 2.0, body_height / 2.0),
            tower_offset: Vector::new(-length / 6.0, tower_top),
            tower_width: length / 3.0,
            tower_height,
            shaft: (tower_top, shaft_top),
            head_radius: periscope_radius,
            color: record.color.color(),
        }
    }

    pub fn tower_top_left(&self) -> Point {
        self.center + self.tower_offset
    }

    pub fn shaft_points(&self) -> (Point, Point) {
        (
            Point::new(self.center.x, self.center.y + self.shaft.0),
            Point::new(self.center.x, self.center.y + self.shaft.1),
        )
    }

    pub fn head_center(&self) -> Point {
        self.shaft_points().1
    }

    pub fn contains(&self, p: Point) -> bool {
        let in_body = {
            let dx = (p.x - self.center.x) / self.body.x.max(f32::EPSILON);
            let dy = (p.y - self.center.y) / self.body.y.max(f32::EPSILON);
            dx * dx + dy * dy <= 1.0
        };

        let in_tower = {
            let tl = self.tower_top_left();
            p.x >= tl.x
                && p.x <= tl.x + self.tower_width
                && p.y >= tl.y
                && p.y <= tl.y + self.tower_height
        };

        let in_shaft = {
            let (bottom, top) = self.shaft_points();
            (p.x - bottom.x).abs() <= SHAFT_HIT_SLOP && p.y <= bottom.y && p.y >= top.y
        };

        let in_head = p.distance(self.head_center()) <= self.head_radius;

        in_body || in_tower || in_shaft || in_head
    }
}

impl Interpolate for GlyphShape {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let lerp = |a: f32, b: f32| a.interpolate(&b, t);

        Self {
            center: Point::new(
                lerp(self.center.x, other.center.x),
                lerp(self.center.y, other.center.y),
            ),
            body: Vector::new(lerp(self.body.x, other.body.x), lerp(self.body.y, other.body.y)),
            tower_offset: Vector::new(
                lerp(self.tower_offset.x, other.tower_offset.x),
                lerp(self.tower_offset.y, other.tower_offset.y),
            ),
            tower_width: lerp(self.tower_width, other.tower_width),
            tower_height: lerp(self.tower_height, other.tower_height),
            shaft: (
                lerp(self.shaft.0, other.shaft.0),
                lerp(self.shaft.1, other.shaft.1),
            ),
            head_radius: lerp(self.head_radius, other.head_radius),
            color: self.color.interpolate(&other.color, t),
        }
    }
}

#[derive(Debug, Clone)]
struct Glyph {
    record: RecordId,
    tween: Tween<GlyphShape>,
}

/// Owns the rendered state of every glyph, in creation order.
#[derive(Debug, Clone)]
pub struct GlyphRenderer {
    scales: Scales,
    glyphs: Vec<Glyph>,
}

impl GlyphRenderer {
    pub fn new(scales: Scales) -> Self {
        Self {
            scales,
            glyphs: Vec::new(),
        }
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    /// Places a glyph at the record's current values, without animation.
    pub fn create(&mut self, record: &Record, now: Instant) -> GlyphHandle {
        let shape = GlyphShape::from_record(record, &self.scales);

        self.glyphs.push(Glyph {
            record: record.id,
            tween: Tween::new(shape, shape, now, Duration::ZERO),
        });

        GlyphHandle(self.glyphs.len() - 1)
    }

    /// Re-targets the glyph at `record`, starting from whatever is on screen at `now`.
    pub fn update(&mut self, handle: GlyphHandle, record: &Record, duration: Duration, now: Instant) {
        let target = GlyphShape::from_record(record, &self.scales);
        let glyph = self.glyph_mut(handle);

        let current = glyph.tween.value_at(now);
        glyph.tween = Tween::new(current, target, now, duration);
    }

    pub fn shape_at(&self, handle: GlyphHandle, now: Instant) -> GlyphShape {
        self.glyph(handle).tween.value_at(now)
    }

    pub fn handle_of(&self, id: RecordId) -> GlyphHandle {
        match self.glyphs.iter().position(|g| g.record == id) {
            Some(index) => GlyphHandle(index),
            None => panic!("no glyph drawn for record {}", id.0),
        }
    }

    /// Shapes in draw order, sampled at `now`.
    pub fn shapes(&self, now: Instant) -> impl Iterator<Item = (RecordId, GlyphShape)> + '_ {
        self.glyphs
            .iter()
            .map(move |g| (g.record, g.tween.value_at(now)))
    }

    /// Topmost glyph under `point`; later glyphs are drawn above earlier ones.
    pub fn hit_test(&self, point: Point, now: Instant) -> Option<RecordId> {
        self.glyphs
            .iter()
            .rev()
            .find(|g| g.tween.value_at(now).contains(point))
            .map(|g| g.record)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.glyphs.iter().any(|g| !g.tween.is_finished(now))
    }

    fn glyph(&self, handle: GlyphHandle) -> &Glyph {
        &self.glyphs[handle.0]
    }

    fn glyph_mut(&mut self, handle: GlyphHandle) -> &mut Glyph {
        &mut self.glyphs[handle.0]
    }
}
