use crate::dataset::{Dataset, RecordId};
use crate::export::{self, ExportError};
use crate::glyph::{GlyphRenderer, GlyphShape};
use crate::hue::Hue;
use crate::scale::Scales;
use crate::selection::{ClickOutcome, Controller, Selection};
use crate::tooltip::Tooltip;

use iced_core::{Point, Size};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::Instant;

/// Everything a running visualization owns. The dataset is only mutated
/// through [`Session::click`] and [`Session::tick`].
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    glyphs: GlyphRenderer,
    controller: Controller,
    tooltip: Tooltip,
}

impl Session {
    /// Measures the sea once, generates the dataset and draws every glyph.
    pub fn start(canvas: Size, seed: Option<u64>, highlight: Hue, now: Instant) -> Self {
        let scales = Scales::new(canvas);
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let dataset = Dataset::generate(&scales, &mut rng);

        match export::to_json(&dataset) {
            Ok(json) => log::info!("Generated dataset:\n{json}"),
            Err(err) => log::warn!("{err}"),
        }

        Self::with_dataset(dataset, scales, highlight, now)
    }

    pub fn with_dataset(dataset: Dataset, scales: Scales, highlight: Hue, now: Instant) -> Self {
        let mut glyphs = GlyphRenderer::new(scales);
        for record in dataset.records() {
            glyphs.create(record, now);
        }

        Self {
            dataset,
            glyphs,
            controller: Controller::new(highlight),
            tooltip: Tooltip::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scales(&self) -> &Scales {
        self.glyphs.scales()
    }

    pub fn selection(&self) -> Selection {
        self.controller.state()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn click(&mut self, id: RecordId, now: Instant) -> ClickOutcome {
        self.controller.click(id, &mut self.dataset, &mut self.glyphs, now)
    }

    /// Advances scheduled work; call on every frame.
    pub fn tick(&mut self, now: Instant) -> Option<(RecordId, RecordId)> {
        self.controller.tick(&mut self.dataset, &mut self.glyphs, now)
    }

    pub fn hover_enter(&mut self, id: RecordId, pointer: Point) {
        self.tooltip.hover_enter(&self.dataset, id, pointer);
    }

    pub fn hover_exit(&mut self) {
        self.tooltip.hover_exit();
    }

    pub fn glyph_at(&self, point: Point, now: Instant) -> Option<RecordId> {
        self.glyphs.hit_test(point, now)
    }

    pub fn shapes(&self, now: Instant) -> impl Iterator<Item = (RecordId, GlyphShape)> + '_ {
        self.glyphs.shapes(now)
    }

    pub fn shape_of(&self, id: RecordId, now: Instant) -> GlyphShape {
        self.glyphs.shape_at(self.glyphs.handle_of(id), now)
    }

    /// Whether frames are still needed to reach a settled picture.
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.glyphs.is_animating(now) || self.controller.next_deadline().is_some()
    }

    pub fn export_json(&self) -> Result<String, ExportError> {
        export::to_json(&self.dataset)
    }
}
