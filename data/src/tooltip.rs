use crate::dataset::{Dataset, Record, RecordId};

use iced_core::{Point, Vector};

/// Panel placement relative to the pointer.
pub const POINTER_OFFSET: Vector = Vector::new(10.0, -28.0);

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<(&'static str, String)>,
}

impl TooltipContent {
    pub fn for_record(record: &Record) -> Self {
        let fmt = |v: f32| format!("{v:.1}");

        Self {
            title: format!("Submarine {}", record.id),
            lines: vec![
                ("Depth", fmt(record.depth)),
                ("Length", fmt(record.length)),
                ("Tower Height", fmt(record.tower_height)),
                ("Body Width", fmt(record.body_height)),
                ("Periscope Radius", fmt(record.periscope_radius)),
            ],
        }
    }

    pub fn text(&self) -> String {
        let mut out = self.title.clone();
        for (label, value) in &self.lines {
            out.push('\n');
            out.push_str(label);
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub record: RecordId,
    pub position: Point,
    pub content: TooltipContent,
}

/// Floating info panel bound to the hovered glyph.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    shown: Option<Shown>,
}

impl Tooltip {
    /// Reads the record afresh on every call.
    pub fn hover_enter(&mut self, dataset: &Dataset, id: RecordId, pointer: Point) {
        let record = dataset.get(id);

        self.shown = Some(Shown {
            record: id,
            position: pointer + POINTER_OFFSET,
            content: TooltipContent::for_record(record),
        });
    }

    pub fn hover_exit(&mut self) {
        self.shown = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&Shown> {
        self.shown.as_ref()
    }
}
