//! End-to-end snap coordination through the public engine API.

use scrolly::{ContainerBounds, Engine, SectionConfig, SectionSpec, Storyboard};

fn board(sections: &[(&str, f64)]) -> Storyboard {
    Storyboard {
        sections: sections
            .iter()
            .map(|(id, pin_span)| SectionSpec {
                id: id.to_string(),
                config: SectionConfig {
                    pin_span: *pin_span,
                    ..SectionConfig::default()
                },
                tweens: Vec::new(),
            })
            .collect(),
        snap: Default::default(),
    }
}

/// Sections pinned over [0,1000], [1000,2200], [2200,3500] with a document
/// extent of 3500 (viewport height 1000).
fn three_region_engine() -> Engine {
    let mut engine = Engine::new(&board(&[("a", 1.0), ("b", 1.2), ("c", 1.3)])).unwrap();
    engine.resize(3500.0, 1000.0);
    for (id, top) in [("a", 0.0), ("b", 1000.0), ("c", 2200.0)] {
        engine
            .activate_section(id, ContainerBounds {
                top,
                height: 1000.0,
            })
            .unwrap();
    }
    engine
}

#[test]
fn settled_position_inside_a_span_snaps_to_its_center() {
    let mut engine = three_region_engine();

    // 1050 sits inside the middle region's buffered span and is exactly
    // equidistant from the first two centers; the containing region wins.
    engine.record_scroll(1050.0);
    let decision = engine.settle().unwrap();
    assert!((engine.to_offset(decision.target) - 1600.0).abs() < 1e-6);
    assert!((decision.target - 0.457).abs() < 1e-3);
}

#[test]
fn gaps_between_buffered_spans_stay_free() {
    // Two pinned regions [0,2000] and [5000,7000] over a 10000 extent:
    // normalized [0,0.2] and [0.5,0.7].
    let mut engine = Engine::new(&board(&[("a", 2.0), ("b", 2.0)])).unwrap();
    engine.resize(10_000.0, 1000.0);
    engine
        .activate_section("a", ContainerBounds {
            top: 0.0,
            height: 1000.0,
        })
        .unwrap();
    engine
        .activate_section("b", ContainerBounds {
            top: 5000.0,
            height: 1000.0,
        })
        .unwrap();

    // 0.45 normalized: outside both buffered spans.
    engine.record_scroll(4500.0);
    assert!(engine.settle().is_none());

    // 0.19: inside the first span, center 0.1.
    engine.record_scroll(1900.0);
    let decision = engine.settle().unwrap();
    assert!((decision.target - 0.1).abs() < 1e-12);

    // 0.61: inside the second span, center 0.6.
    engine.record_scroll(6100.0);
    let decision = engine.settle().unwrap();
    assert!((decision.target - 0.6).abs() < 1e-12);
}

#[test]
fn snap_is_idempotent_through_the_engine() {
    let mut engine = three_region_engine();
    engine.record_scroll(1050.0);
    let first = engine.settle().unwrap();

    engine.record_scroll(engine.to_offset(first.target));
    assert!(engine.settle().is_none(), "resolved target resolves to itself");
}

#[test]
fn resize_rescales_normalized_targets_only() {
    let mut engine = three_region_engine();

    engine.record_scroll(1050.0);
    let before = engine.settle().unwrap();

    // The document grows (late image load); absolute geometry is unchanged,
    // so the absolute snap target is too.
    engine.resize(7000.0, 1000.0);
    engine.record_scroll(1050.0);
    let after = engine.settle().unwrap();

    assert!((engine.to_offset(after.target) - 1600.0).abs() < 1e-6);
    assert!((after.target - before.target / 2.0).abs() < 1e-6);
}

#[test]
fn deactivated_section_no_longer_attracts() {
    let mut engine = three_region_engine();
    engine.deactivate_section("b");

    // 1050 is now only within the first region's buffered span.
    engine.record_scroll(1050.0);
    let decision = engine.settle().unwrap();
    assert!((engine.to_offset(decision.target) - 500.0).abs() < 1e-6);
}
