use periscope_data::dataset::{Dataset, RecordId};
use periscope_data::scale::Scales;
use periscope_data::selection::{ClickOutcome, RESTORE_DURATION, SWAP_DURATION, Selection};
use periscope_data::{Hue, Session, hue};

use iced_core::{Point, Size};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::{Duration, Instant};

fn canvas() -> Size {
    Size::new(1280.0, 720.0)
}

fn session_with_depth_of_three(depth: f32, now: Instant) -> Session {
    let scales = Scales::new(canvas());
    let mut records = Dataset::generate(&scales, &mut SmallRng::seed_from_u64(3)).into_records();
    records[3].depth = depth;

    Session::with_dataset(Dataset::from_records(records), scales, Hue::White, now)
}

#[test]
fn hover_then_exchange_scenario() {
    let t0 = Instant::now();
    let mut session = session_with_depth_of_three(42.5, t0);

    let three = session.shape_of(RecordId(3), t0);
    session.hover_enter(RecordId(3), three.center);
    let text = session.tooltip().shown().unwrap().content.text();
    assert!(text.contains("42.5"), "{text}");
    session.hover_exit();
    assert!(!session.tooltip().is_visible());

    let before_3 = session.dataset().get(RecordId(3)).clone();
    let before_7 = session.dataset().get(RecordId(7)).clone();

    assert_eq!(session.click(RecordId(3), t0), ClickOutcome::Selected(RecordId(3)));
    assert_eq!(session.dataset().get(RecordId(3)).color, Hue::White);

    let t_swap = t0 + Duration::from_millis(400);
    session.click(RecordId(7), t_swap);
    assert!(matches!(session.selection(), Selection::Exchanging(_)));

    let t_geometry = t_swap + SWAP_DURATION;
    assert_eq!(session.tick(t_geometry), Some((RecordId(3), RecordId(7))));

    let after_3 = session.dataset().get(RecordId(3)).clone();
    let after_7 = session.dataset().get(RecordId(7)).clone();
    assert_eq!(after_3.variables(), before_7.variables());
    assert_eq!(after_7.variables(), before_3.variables());
    assert_eq!(after_3.x, before_3.x);
    assert_eq!(after_7.x, before_7.x);

    // geometry has landed while the highlight is still on screen
    let shape_3 = session.shape_of(RecordId(3), t_geometry);
    assert_eq!(shape_3.center.y, session.scales().depth.map_clamped(before_7.depth));
    assert_eq!(shape_3.color, Hue::White.color());

    let t_settled = t_geometry + RESTORE_DURATION;
    assert_eq!(
        session.shape_of(RecordId(3), t_settled).color,
        hue::PALETTE[3].color()
    );
    assert_eq!(
        session.shape_of(RecordId(7), t_settled).color,
        hue::PALETTE[7].color()
    );
    assert!(!session.needs_frames(t_settled));
}

#[test]
fn tooltip_reflects_mid_swap_values() {
    let t0 = Instant::now();
    let mut session = session_with_depth_of_three(42.5, t0);
    let depth_of_5 = session.dataset().get(RecordId(5)).depth;

    session.click(RecordId(5), t0);
    session.click(RecordId(3), t0);

    let mid = t0 + Duration::from_millis(500);
    session.hover_enter(RecordId(5), Point::new(200.0, 200.0));
    let text = session.tooltip().shown().unwrap().content.text();
    assert!(text.contains("Depth: 42.5"), "{text}");
    assert!(session.needs_frames(mid));

    session.hover_enter(RecordId(3), Point::new(200.0, 200.0));
    let text = session.tooltip().shown().unwrap().content.text();
    assert!(text.contains(&format!("Depth: {depth_of_5:.1}")), "{text}");
}

#[test]
fn pointer_routing_hits_generated_glyphs() {
    let t0 = Instant::now();
    let session = Session::start(canvas(), Some(11), Hue::White, t0);

    for record in session.dataset().records() {
        let shape = session.shape_of(record.id, t0);
        assert!(session.glyph_at(shape.center, t0).is_some());
    }
    assert_eq!(session.glyph_at(Point::new(1.0, canvas().height - 1.0), t0), None);
}

#[test]
fn export_reflects_exchanged_values() {
    let t0 = Instant::now();
    let mut session = Session::start(canvas(), Some(8), Hue::White, t0);

    session.click(RecordId(0), t0);
    session.click(RecordId(1), t0);
    session.tick(t0 + SWAP_DURATION);

    let json = session.export_json().unwrap();
    let parsed: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, session.dataset());
}
