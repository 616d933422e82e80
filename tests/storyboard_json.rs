//! Storyboard document round-trips and validation through the public API.

use scrolly::{Ease, Storyboard, presets};

#[test]
fn gallery_round_trips_through_json() {
    let board = presets::gallery();
    let json = serde_json::to_string_pretty(&board).unwrap();
    let back = Storyboard::from_json(&json).unwrap();

    assert_eq!(back.sections.len(), board.sections.len());
    for (a, b) in back.sections.iter().zip(&board.sections) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.config, b.config);
        assert_eq!(a.tweens.len(), b.tweens.len());
    }
    assert_eq!(back.snap, board.snap);
}

#[test]
fn minimal_document_gets_defaults() {
    let board = Storyboard::from_json(
        r#"{
            "sections": [
                {
                    "id": "hero",
                    "tweens": [
                        { "element": "headline", "property": "translate_x",
                          "from": 0.0, "to": -0.18,
                          "window": { "start": 0.7, "end": 1.0 },
                          "ease": "in_quad" }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let section = &board.sections[0];
    assert_eq!(section.config.pin_span, 1.3);
    assert_eq!(section.config.entrance_end, 0.30);
    assert_eq!(section.config.exit_start, 0.70);
    assert_eq!(section.tweens[0].ease, Ease::InQuad);
    assert_eq!(board.snap.buffer, 0.02);
    assert_eq!(board.snap.ease, Ease::OutQuad);
}

#[test]
fn tween_ease_defaults_to_linear() {
    let board = Storyboard::from_json(
        r#"{
            "sections": [
                {
                    "id": "s",
                    "tweens": [
                        { "element": "image", "property": "opacity",
                          "from": 0.0, "to": 1.0,
                          "window": { "start": 0.0, "end": 0.3 } }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(board.sections[0].tweens[0].ease, Ease::Linear);
}

#[test]
fn invalid_documents_are_rejected() {
    // Inverted window.
    let err = Storyboard::from_json(
        r#"{
            "sections": [
                { "id": "s",
                  "tweens": [
                      { "element": "image", "property": "opacity",
                        "from": 0.0, "to": 1.0,
                        "window": { "start": 0.9, "end": 0.2 } }
                  ] }
            ]
        }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("progress window"));

    // Duplicate ids.
    let err = Storyboard::from_json(
        r#"{ "sections": [ { "id": "s" }, { "id": "s" } ] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate section id"));

    // Malformed JSON.
    assert!(Storyboard::from_json("not json").is_err());
}
