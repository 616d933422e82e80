//! Reference storyboard: a six-section pinned gallery.
//!
//! Entrances are linear (the scrub itself is the motion), exits accelerate
//! with `InQuad`. Translation values are viewport fractions; the hero relies
//! on a load animation for its entrance, so its scroll program is exit-only.

use crate::{
    ease::Ease,
    snap::SnapConfig,
    storyboard::{SectionConfig, SectionSpec, Storyboard},
    timeline::{ProgressWindow, Property, Tween},
};

fn tween(
    element: &str,
    property: Property,
    from: f64,
    to: f64,
    start: f64,
    end: f64,
    ease: Ease,
) -> Tween {
    Tween {
        element: element.to_string(),
        property,
        from,
        to,
        window: ProgressWindow { start, end },
        ease,
    }
}

fn section(id: &str, pin_span: f64, tweens: Vec<Tween>) -> SectionSpec {
    SectionSpec {
        id: id.to_string(),
        config: SectionConfig {
            pin_span,
            ..SectionConfig::default()
        },
        tweens,
    }
}

/// The full gallery storyboard.
pub fn gallery() -> Storyboard {
    use Property::{Opacity, Rotation, Scale, TranslateX, TranslateY};

    let hero = section(
        "hero",
        1.3,
        vec![
            tween("headline", TranslateX, 0.0, -0.18, 0.70, 1.0, Ease::InQuad),
            tween("headline", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("subhead", TranslateX, 0.0, -0.14, 0.72, 1.0, Ease::InQuad),
            tween("subhead", Opacity, 1.0, 0.0, 0.72, 1.0, Ease::InQuad),
            tween("cta", TranslateY, 0.0, 0.10, 0.70, 1.0, Ease::InQuad),
            tween("cta", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("image", Scale, 1.0, 1.08, 0.70, 1.0, Ease::Linear),
            tween("image", TranslateX, 0.0, 0.06, 0.70, 1.0, Ease::Linear),
            tween("frames", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
        ],
    );

    let tessellation = section(
        "tessellation",
        1.3,
        vec![
            tween("image", TranslateX, 0.60, 0.0, 0.0, 0.30, Ease::Linear),
            tween("image", Scale, 1.18, 1.0, 0.0, 0.30, Ease::Linear),
            tween("image", Opacity, 0.6, 1.0, 0.0, 0.30, Ease::Linear),
            tween("card", TranslateX, 0.50, 0.0, 0.05, 0.30, Ease::Linear),
            tween("card", Opacity, 0.0, 1.0, 0.05, 0.30, Ease::Linear),
            tween("card", Rotation, 2.0, 0.0, 0.05, 0.30, Ease::Linear),
            tween("label", Opacity, 0.0, 1.0, 0.10, 0.30, Ease::Linear),
            tween("label", TranslateY, -0.02, 0.0, 0.10, 0.30, Ease::Linear),
            tween("caption", Opacity, 0.0, 1.0, 0.10, 0.30, Ease::Linear),
            tween("caption", TranslateY, -0.02, 0.0, 0.10, 0.30, Ease::Linear),
            tween("image", TranslateX, 0.0, -0.18, 0.70, 1.0, Ease::InQuad),
            tween("image", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("card", TranslateX, 0.0, 0.18, 0.70, 1.0, Ease::InQuad),
            tween("card", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("label", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
            tween("caption", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
        ],
    );

    let portal = section(
        "portal",
        1.4,
        vec![
            tween("portal", Scale, 0.22, 1.0, 0.0, 0.30, Ease::Linear),
            tween("portal", Opacity, 0.0, 1.0, 0.0, 0.30, Ease::Linear),
            tween("image", Scale, 1.12, 1.0, 0.0, 0.30, Ease::Linear),
            tween("image", Opacity, 0.7, 1.0, 0.0, 0.30, Ease::Linear),
            tween("headline", TranslateY, 0.018, 0.0, 0.10, 0.30, Ease::Linear),
            tween("headline", Opacity, 0.0, 1.0, 0.10, 0.30, Ease::Linear),
            tween("cta", TranslateY, 0.018, 0.0, 0.15, 0.30, Ease::Linear),
            tween("cta", Opacity, 0.0, 1.0, 0.15, 0.30, Ease::Linear),
            // The portal blows past the viewport on exit.
            tween("portal", Scale, 1.0, 3.2, 0.70, 1.0, Ease::InQuad),
            tween("portal", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("image", Scale, 1.0, 1.10, 0.70, 1.0, Ease::Linear),
            tween("image", TranslateX, 0.0, -0.08, 0.70, 1.0, Ease::Linear),
            tween("headline", TranslateY, 0.0, -0.024, 0.70, 1.0, Ease::InQuad),
            tween("headline", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("cta", TranslateY, 0.0, -0.024, 0.70, 1.0, Ease::InQuad),
            tween("cta", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
        ],
    );

    let split = section(
        "split",
        1.3,
        vec![
            tween("left_image", TranslateX, -0.60, 0.0, 0.0, 0.30, Ease::Linear),
            tween("left_image", Opacity, 0.7, 1.0, 0.0, 0.30, Ease::Linear),
            tween("right_image", TranslateX, 0.60, 0.0, 0.0, 0.30, Ease::Linear),
            tween("right_image", Opacity, 0.7, 1.0, 0.0, 0.30, Ease::Linear),
            tween("label", Opacity, 0.0, 1.0, 0.10, 0.30, Ease::Linear),
            tween("label", TranslateY, -0.02, 0.0, 0.10, 0.30, Ease::Linear),
            tween("left_caption", Opacity, 0.0, 1.0, 0.12, 0.30, Ease::Linear),
            tween("left_caption", TranslateY, 0.02, 0.0, 0.12, 0.30, Ease::Linear),
            tween("right_caption", Opacity, 0.0, 1.0, 0.17, 0.30, Ease::Linear),
            tween("right_caption", TranslateY, 0.02, 0.0, 0.17, 0.30, Ease::Linear),
            tween("left_image", TranslateX, 0.0, -0.18, 0.70, 1.0, Ease::InQuad),
            tween("left_image", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("right_image", TranslateX, 0.0, 0.18, 0.70, 1.0, Ease::InQuad),
            tween("right_image", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("label", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
            tween("left_caption", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
            tween("right_caption", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
        ],
    );

    let manifesto = section(
        "manifesto",
        1.4,
        vec![
            tween("image", Scale, 1.1, 1.0, 0.0, 0.30, Ease::Linear),
            tween("image", Opacity, 0.5, 1.0, 0.0, 0.30, Ease::Linear),
            tween("image", Rotation, -1.5, 0.0, 0.0, 0.30, Ease::Linear),
            tween("headline_1", TranslateY, 0.03, 0.0, 0.05, 0.30, Ease::Linear),
            tween("headline_1", Opacity, 0.0, 1.0, 0.05, 0.30, Ease::Linear),
            tween("headline_2", TranslateY, 0.03, 0.0, 0.08, 0.30, Ease::Linear),
            tween("headline_2", Opacity, 0.0, 1.0, 0.08, 0.30, Ease::Linear),
            tween("body", TranslateY, 0.02, 0.0, 0.12, 0.30, Ease::Linear),
            tween("body", Opacity, 0.0, 1.0, 0.12, 0.30, Ease::Linear),
            tween("label", Opacity, 0.0, 1.0, 0.10, 0.30, Ease::Linear),
            tween("label", TranslateY, -0.02, 0.0, 0.10, 0.30, Ease::Linear),
            tween("image", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("image", Scale, 1.0, 1.06, 0.70, 1.0, Ease::InQuad),
            tween("headline_1", TranslateX, 0.0, -0.14, 0.70, 1.0, Ease::InQuad),
            tween("headline_1", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("headline_2", TranslateX, 0.0, -0.14, 0.72, 1.0, Ease::InQuad),
            tween("headline_2", Opacity, 1.0, 0.0, 0.72, 1.0, Ease::InQuad),
            tween("body", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("label", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
        ],
    );

    let perspective = section(
        "perspective",
        1.3,
        vec![
            tween("image", TranslateX, 0.40, 0.0, 0.0, 0.30, Ease::Linear),
            tween("image", Scale, 1.12, 1.0, 0.0, 0.30, Ease::Linear),
            tween("image", Opacity, 0.6, 1.0, 0.0, 0.30, Ease::Linear),
            tween("card", TranslateX, -0.40, 0.0, 0.05, 0.30, Ease::Linear),
            tween("card", Scale, 0.96, 1.0, 0.05, 0.30, Ease::Linear),
            tween("card", Opacity, 0.0, 1.0, 0.05, 0.30, Ease::Linear),
            tween("label", Opacity, 0.0, 1.0, 0.10, 0.30, Ease::Linear),
            tween("label", TranslateY, -0.02, 0.0, 0.10, 0.30, Ease::Linear),
            tween("caption", Opacity, 0.0, 1.0, 0.12, 0.30, Ease::Linear),
            tween("caption", TranslateY, 0.02, 0.0, 0.12, 0.30, Ease::Linear),
            tween("image", TranslateX, 0.0, -0.12, 0.70, 1.0, Ease::InQuad),
            tween("image", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("card", TranslateY, 0.0, -0.10, 0.70, 1.0, Ease::InQuad),
            tween("card", Opacity, 1.0, 0.0, 0.70, 1.0, Ease::InQuad),
            tween("label", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
            tween("caption", Opacity, 1.0, 0.0, 0.75, 1.0, Ease::InQuad),
        ],
    );

    Storyboard {
        sections: vec![hero, tessellation, portal, split, manifesto, perspective],
        snap: SnapConfig::default(),
    }
}
