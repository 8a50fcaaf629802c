use crate::dataset::{Dataset, RecordId};
use crate::glyph::GlyphRenderer;
use crate::hue::Hue;
use crate::tween::DEFAULT_DURATION;

use std::time::{Duration, Instant};

/// Highlighting or un-highlighting a single glyph.
pub const SELECT_DURATION: Duration = Duration::from_millis(300);
/// Geometry exchange between two glyphs; colors are restored once it elapses.
pub const SWAP_DURATION: Duration = DEFAULT_DURATION;
/// Color settling after an exchange.
pub const RESTORE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub first: RecordId,
    pub second: RecordId,
    pub restore_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Armed(RecordId),
    /// Values are exchanged, colors not yet restored.
    Exchanging(Exchange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(RecordId),
    Deselected(RecordId),
    SwapStarted { first: RecordId, second: RecordId },
    /// A previous exchange has not settled yet; the click was dropped.
    Busy,
}

/// Two-click selection and exchange state machine.
#[derive(Debug, Clone)]
pub struct Controller {
    state: Selection,
    highlight: Hue,
}

impl Controller {
    pub fn new(highlight: Hue) -> Self {
        Self {
            state: Selection::Idle,
            highlight,
        }
    }

    pub fn state(&self) -> Selection {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, Selection::Idle)
    }

    /// The highlighted record, if any.
    pub fn selected(&self) -> Option<RecordId> {
        match self.state {
            Selection::Idle => None,
            Selection::Armed(id) => Some(id),
            Selection::Exchanging(exchange) => Some(exchange.first),
        }
    }

    /// When the pending color restoration is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            Selection::Exchanging(exchange) => Some(exchange.restore_at),
            _ => None,
        }
    }

    pub fn click(
        &mut self,
        target: RecordId,
        dataset: &mut Dataset,
        glyphs: &mut GlyphRenderer,
        now: Instant,
    ) -> ClickOutcome {
        match self.state {
            Selection::Idle => {
                let record = dataset.get_mut(target);
                record.color = self.highlight;
                glyphs.update(glyphs.handle_of(target), record, SELECT_DURATION, now);

                log::debug!("Submarine {target} selected");
                self.state = Selection::Armed(target);
                ClickOutcome::Selected(target)
            }
            Selection::Armed(selected) if selected == target => {
                let record = dataset.get_mut(target);
                record.color = record.owned_color();
                glyphs.update(glyphs.handle_of(target), record, SELECT_DURATION, now);

                log::debug!("Submarine {target} deselected");
                self.state = Selection::Idle;
                ClickOutcome::Deselected(target)
            }
            Selection::Armed(selected) => {
                self.swap(selected, target, dataset, glyphs, now);
                ClickOutcome::SwapStarted {
                    first: selected,
                    second: target,
                }
            }
            Selection::Exchanging(exchange) => {
                log::debug!(
                    "Ignoring click on {target}, exchange {} <-> {} still settling",
                    exchange.first,
                    exchange.second
                );
                ClickOutcome::Busy
            }
        }
    }

    /// Fires the deferred color restoration once it is due.
    /// Returns the exchanged pair when it fired.
    pub fn tick(
        &mut self,
        dataset: &mut Dataset,
        glyphs: &mut GlyphRenderer,
        now: Instant,
    ) -> Option<(RecordId, RecordId)> {
        let Selection::Exchanging(exchange) = self.state else {
            return None;
        };
        if now < exchange.restore_at {
            return None;
        }

        // anchored at restore_at, not at the frame that observes it
        for id in [exchange.first, exchange.second] {
            let record = dataset.get_mut(id);
            record.color = record.owned_color();
            glyphs.update(
                glyphs.handle_of(id),
                record,
                RESTORE_DURATION,
                exchange.restore_at,
            );
        }

        log::debug!(
            "Colors restored after exchange {} <-> {}",
            exchange.first,
            exchange.second
        );
        self.state = Selection::Idle;
        Some((exchange.first, exchange.second))
    }

    fn swap(
        &mut self,
        first: RecordId,
        second: RecordId,
        dataset: &mut Dataset,
        glyphs: &mut GlyphRenderer,
        now: Instant,
    ) {
        dataset.exchange(first, second);

        for id in [first, second] {
            glyphs.update(glyphs.handle_of(id), dataset.get(id), SWAP_DURATION, now);
        }

        log::info!("Exchanging values of submarines {first} and {second}");
        self.state = Selection::Exchanging(Exchange {
            first,
            second,
            restore_at: now + SWAP_DURATION,
        });
    }
}
