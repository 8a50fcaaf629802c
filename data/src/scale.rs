use iced_core::Size;

/// Normalized domain shared by every record variable.
pub const DOMAIN: (f32, f32) = (0.0, 100.0);

pub const LENGTH_RANGE: (f32, f32) = (50.0, 150.0);
pub const TOWER_HEIGHT_RANGE: (f32, f32) = (10.0, 40.0);
pub const BODY_HEIGHT_RANGE: (f32, f32) = (15.0, 45.0);
pub const PERISCOPE_RADIUS_RANGE: (f32, f32) = (2.0, 8.0);

/// The periscope shaft is this many head radii tall.
pub const PERISCOPE_SHAFT_FACTOR: f32 = 5.0;

/// Linear map from a closed domain onto a closed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub domain: (f32, f32),
    pub range: (f32, f32),
}

impl Linear {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn normalized(range: (f32, f32)) -> Self {
        Self::new(DOMAIN, range)
    }

    pub fn min(&self) -> f32 {
        self.range.0
    }

    pub fn max(&self) -> f32 {
        self.range.1
    }

    pub fn map(&self, v: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }

        // domain ends map onto range ends verbatim
        if v == d0 {
            return r0;
        }
        if v == d1 {
            return r1;
        }

        let t = (v - d0) / span;
        r0 + (r1 - r0) * t
    }

    /// Like [`Linear::map`] but never leaves the range.
    pub fn map_clamped(&self, v: f32) -> f32 {
        let (r0, r1) = self.range;
        self.map(v).clamp(r0.min(r1), r0.max(r1))
    }
}

/// Space reserved around the sea so that no glyph can be clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        let max_length = LENGTH_RANGE.1;
        let max_body = BODY_HEIGHT_RANGE.1;
        let max_tower = TOWER_HEIGHT_RANGE.1;
        let max_periscope = PERISCOPE_RADIUS_RANGE.1 * PERISCOPE_SHAFT_FACTOR;

        Self {
            top: max_body / 2.0 + max_tower + max_periscope,
            right: max_length,
            bottom: max_body / 2.0,
            left: max_length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub canvas: Size,
    pub margins: Margins,
    pub depth: Linear,
    pub length: Linear,
    pub tower_height: Linear,
    pub body_height: Linear,
    pub periscope_radius: Linear,
}

impl Scales {
    /// Derives every scale from the measured canvas size. Computed once per session.
    pub fn new(canvas: Size) -> Self {
        let margins = Margins::default();

        Self {
            canvas,
            margins,
            depth: Linear::normalized((margins.top, canvas.height - margins.bottom)),
            length: Linear::normalized(LENGTH_RANGE),
            tower_height: Linear::normalized(TOWER_HEIGHT_RANGE),
            body_height: Linear::normalized(BODY_HEIGHT_RANGE),
            periscope_radius: Linear::normalized(PERISCOPE_RADIUS_RANGE),
        }
    }

    /// Horizontal span available for glyph centers.
    pub fn available_width(&self) -> f32 {
        self.canvas.width - self.margins.left - self.margins.right
    }

    pub fn all(&self) -> [&Linear; 5] {
        [
            &self.depth,
            &self.length,
            &self.tower_height,
            &self.body_height,
            &self.periscope_radius,
        ]
    }
}
