use crate::hue::Hue;
use crate::scale::Scales;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of submarines in every session.
pub const RECORD_COUNT: usize = 10;

/// Maximum horizontal nudge applied to the evenly spaced positions.
pub const X_JITTER: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub usize);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// The five exchangeable variables, each in the normalized domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variables {
    pub depth: f32,
    pub length: f32,
    pub tower_height: f32,
    pub body_height: f32,
    pub periscope_radius: f32,
}

impl Variables {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            depth: rng.gen_range(0.0..100.0),
            length: rng.gen_range(0.0..100.0),
            tower_height: rng.gen_range(0.0..100.0),
            body_height: rng.gen_range(0.0..100.0),
            periscope_radius: rng.gen_range(0.0..100.0),
        }
    }

    pub fn as_array(&self) -> [f32; 5] {
        [
            self.depth,
            self.length,
            self.tower_height,
            self.body_height,
            self.periscope_radius,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub x: f32,
    pub depth: f32,
    pub length: f32,
    pub tower_height: f32,
    pub body_height: f32,
    pub periscope_radius: f32,
    pub color: Hue,
}

impl Record {
    pub fn new(id: RecordId, x: f32, vars: Variables, color: Hue) -> Self {
        Self {
            id,
            x,
            depth: vars.depth,
            length: vars.length,
            tower_height: vars.tower_height,
            body_height: vars.body_height,
            periscope_radius: vars.periscope_radius,
            color,
        }
    }

    pub fn variables(&self) -> Variables {
        Variables {
            depth: self.depth,
            length: self.length,
            tower_height: self.tower_height,
            body_height: self.body_height,
            periscope_radius: self.periscope_radius,
        }
    }

    pub fn set_variables(&mut self, vars: Variables) {
        self.depth = vars.depth;
        self.length = vars.length;
        self.tower_height = vars.tower_height;
        self.body_height = vars.body_height;
        self.periscope_radius = vars.periscope_radius;
    }

    /// Palette color owned by this record's generation slot.
    pub fn owned_color(&self) -> Hue {
        Hue::owned_by(self.id.0)
    }
}

/// Ordered record collection. Order is generation order and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn generate(scales: &Scales, rng: &mut impl Rng) -> Self {
        let step = scales.available_width() / (RECORD_COUNT - 1) as f32;

        let records = (0..RECORD_COUNT)
            .map(|i| {
                let jitter = (rng.r#gen::<f32>() - 0.5) * 2.0 * X_JITTER;
                let x = scales.margins.left + i as f32 * step + jitter;

                Record::new(RecordId(i), x, Variables::random(rng), Hue::owned_by(i))
            })
            .collect();

        Self { records }
    }

    /// Wraps records whose ids already match their positions.
    ///
    /// # Panics
    /// When a record's id differs from its index.
    pub fn from_records(records: Vec<Record>) -> Self {
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, RecordId(i), "record ids must follow generation order");
        }
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// Ids are generated internally, so a miss is a broken invariant.
    ///
    /// # Panics
    /// When no record carries `id`.
    pub fn get(&self, id: RecordId) -> &Record {
        match self.records.get(id.0) {
            Some(record) if record.id == id => record,
            _ => panic!("no record with id {}", id.0),
        }
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> &mut Record {
        match self.records.get_mut(id.0) {
            Some(record) if record.id == id => record,
            _ => panic!("no record with id {}", id.0),
        }
    }

    /// Exchanges the five variables of two records. Colors and positions stay put.
    pub(crate) fn exchange(&mut self, a: RecordId, b: RecordId) {
        let vars_a = self.get(a).variables();
        let vars_b = self.get(b).variables();

        self.get_mut(a).set_variables(vars_b);
        self.get_mut(b).set_variables(vars_a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::Size;
    use rand::{SeedableRng, rngs::SmallRng};

    fn generate(seed: u64) -> (Scales, Dataset) {
        let scales = Scales::new(Size::new(1400.0, 700.0));
        let mut rng = SmallRng::seed_from_u64(seed);
        let dataset = Dataset::generate(&scales, &mut rng);
        (scales, dataset)
    }

    #[test]
    fn generates_ten_ordered_records() {
        for seed in 0..32 {
            let (_, dataset) = generate(seed);
            assert_eq!(dataset.len(), RECORD_COUNT);

            let ids: Vec<_> = dataset.ids().map(|id| id.0).collect();
            assert_eq!(ids, (0..RECORD_COUNT).collect::<Vec<_>>());
        }
    }

    #[test]
    fn placement_stays_within_margins() {
        for seed in 0..32 {
            let (scales, dataset) = generate(seed);
            let lo = scales.margins.left - X_JITTER;
            let hi = scales.canvas.width - scales.margins.right + X_JITTER;

            for record in dataset.records() {
                assert!(record.x >= lo && record.x <= hi, "x = {}", record.x);
            }
        }
    }

    #[test]
    fn variables_stay_in_domain() {
        for seed in 0..32 {
            let (_, dataset) = generate(seed);
            for record in dataset.records() {
                for v in record.variables().as_array() {
                    assert!((0.0..100.0).contains(&v), "{v} out of domain");
                }
            }
        }
    }

    #[test]
    fn colors_follow_generation_order() {
        let (_, dataset) = generate(1);
        for (i, record) in dataset.records().iter().enumerate() {
            assert_eq!(record.color, crate::hue::PALETTE[i]);
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generate(99).1, generate(99).1);
    }

    #[test]
    fn exchange_swaps_variables_only() {
        let (_, mut dataset) = generate(5);
        let before_a = dataset.get(RecordId(2)).clone();
        let before_b = dataset.get(RecordId(8)).clone();

        dataset.exchange(RecordId(2), RecordId(8));

        let a = dataset.get(RecordId(2));
        let b = dataset.get(RecordId(8));
        assert_eq!(a.variables(), before_b.variables());
        assert_eq!(b.variables(), before_a.variables());
        assert_eq!((a.x, a.color), (before_a.x, before_a.color));
        assert_eq!((b.x, b.color), (before_b.x, before_b.color));
    }

    #[test]
    #[should_panic(expected = "no record with id 10")]
    fn missing_id_is_fatal() {
        let (_, dataset) = generate(0);
        dataset.get(RecordId(10));
    }
}
