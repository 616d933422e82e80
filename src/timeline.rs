use std::collections::BTreeMap;

use crate::{
    core::{Affine, PhaseWindows, Vec2},
    ease::Ease,
    error::{ScrollyError, ScrollyResult},
};

/// A visual property scrubbed by section progress.
///
/// Translation values are viewport fractions (`0.18` = 18% of the viewport
/// width or height), so a program is layout-independent until
/// [`ElementStyle::to_affine`] resolves it against concrete dimensions.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    TranslateX,
    TranslateY,
    Scale,
    Opacity,
    /// Degrees, positive clockwise.
    Rotation,
}

/// The progress sub-span a tween is active over, in `[0,1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressWindow {
    pub start: f64,
    pub end: f64,
}

impl ProgressWindow {
    pub fn new(start: f64, end: f64) -> ScrollyResult<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    pub fn validate(self) -> ScrollyResult<()> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.start < self.end
            && self.end <= 1.0;
        if !ok {
            return Err(ScrollyError::validation(
                "progress window must satisfy 0 <= start < end <= 1",
            ));
        }
        Ok(())
    }

    fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One `fromTo` program entry: drive `element`'s `property` from `from` to
/// `to` across `window`, shaped by `ease`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub element: String,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub window: ProgressWindow,
    #[serde(default)]
    pub ease: Ease,
}

impl Tween {
    pub fn validate(&self) -> ScrollyResult<()> {
        if self.element.trim().is_empty() {
            return Err(ScrollyError::validation("tween element must be non-empty"));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ScrollyError::animation(format!(
                "tween for '{}' has non-finite endpoint values",
                self.element
            )));
        }
        self.window.validate()
    }

    /// Value at `progress`: `from` before the window, `to` after it, eased
    /// interpolation inside. Monotonic application as progress increases.
    pub fn value_at(&self, progress: f64) -> f64 {
        if progress <= self.window.start {
            return self.from;
        }
        if progress >= self.window.end {
            return self.to;
        }
        let denom = self.window.end - self.window.start;
        if denom <= 0.0 {
            return self.from;
        }
        let t = (progress - self.window.start) / denom;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// Resolved style for one element at one progress value.
///
/// Rest state is identity: no translation, unit scale, fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    /// Viewport-fraction translation (x of width, y of height).
    pub translate: Vec2,
    pub scale: f64,
    pub opacity: f64,
    pub rotation_deg: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
            rotation_deg: 0.0,
        }
    }
}

impl ElementStyle {
    fn apply(&mut self, property: Property, value: f64) {
        match property {
            Property::TranslateX => self.translate.x = value,
            Property::TranslateY => self.translate.y = value,
            Property::Scale => self.scale = value,
            Property::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Property::Rotation => self.rotation_deg = value,
        }
    }

    /// Resolve against concrete viewport dimensions.
    ///
    /// Order: T(translate) * R(rotation) * S(scale); hosts that need a
    /// different pivot compose their own anchor translation around this.
    pub fn to_affine(&self, viewport_width: f64, viewport_height: f64) -> Affine {
        let t = Affine::translate(Vec2::new(
            self.translate.x * viewport_width,
            self.translate.y * viewport_height,
        ));
        let r = Affine::rotate(self.rotation_deg.to_radians());
        let s = Affine::scale(self.scale);
        t * r * s
    }
}

/// Evaluated output of one section for one frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SectionFrame {
    pub id: String,
    pub progress: f64,
    pub elements: BTreeMap<String, ElementStyle>,
}

/// One section's keyframe program: the entrance/hold/exit tween set driven
/// by that section's progress.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionTimeline {
    pub id: String,
    #[serde(default)]
    pub phases: PhaseWindows,
    pub tweens: Vec<Tween>,
}

impl SectionTimeline {
    pub fn validate(&self) -> ScrollyResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScrollyError::validation("section id must be non-empty"));
        }
        self.phases.validate()?;
        for tween in &self.tweens {
            tween.validate()?;
        }

        // Windows for the same (element, property) sub-timeline must not
        // overlap, or scrubbing through the shared span would produce
        // contradictory values.
        let mut windows: BTreeMap<(&str, Property), Vec<ProgressWindow>> = BTreeMap::new();
        for tween in &self.tweens {
            windows
                .entry((tween.element.as_str(), tween.property))
                .or_default()
                .push(tween.window);
        }
        for ((element, property), mut ws) in windows {
            ws.sort_by(|a, b| a.start.total_cmp(&b.start));
            for pair in ws.windows(2) {
                if pair[0].overlaps(pair[1]) {
                    return Err(ScrollyError::validation(format!(
                        "section '{}': overlapping windows for '{element}' {property:?}",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Sample the program at `progress` (clamped to `[0,1]`).
    ///
    /// Pure: the same progress always yields the same frame, so rapid
    /// forward/backward scrubbing is stable and reversible.
    pub fn sample(&self, progress: f64) -> SectionFrame {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        // Group per (element, property) and let the window governing this
        // progress decide: the active window interpolates, an already-passed
        // window contributes its `to`, and before every window the earliest
        // `from` holds. Windows are validated non-overlapping, so this is
        // unambiguous.
        let mut groups: BTreeMap<(&str, Property), Vec<&Tween>> = BTreeMap::new();
        for tween in &self.tweens {
            groups
                .entry((tween.element.as_str(), tween.property))
                .or_default()
                .push(tween);
        }

        let mut elements: BTreeMap<String, ElementStyle> = BTreeMap::new();
        for ((element, property), mut tweens) in groups {
            tweens.sort_by(|a, b| a.window.start.total_cmp(&b.window.start));
            let mut value = tweens[0].from;
            for tween in tweens {
                if progress < tween.window.start {
                    break;
                }
                value = tween.value_at(progress);
            }
            elements
                .entry(element.to_string())
                .or_default()
                .apply(property, value);
        }

        SectionFrame {
            id: self.id.clone(),
            progress,
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_tween(element: &str, property: Property, from: f64, to: f64) -> Tween {
        Tween {
            element: element.to_string(),
            property,
            from,
            to,
            window: ProgressWindow::new(0.7, 1.0).unwrap(),
            ease: Ease::InQuad,
        }
    }

    fn timeline() -> SectionTimeline {
        SectionTimeline {
            id: "hero".to_string(),
            phases: PhaseWindows::default(),
            tweens: vec![
                exit_tween("headline", Property::TranslateX, 0.0, -0.18),
                exit_tween("headline", Property::Opacity, 1.0, 0.0),
                Tween {
                    element: "image".to_string(),
                    property: Property::Scale,
                    from: 1.18,
                    to: 1.0,
                    window: ProgressWindow::new(0.0, 0.3).unwrap(),
                    ease: Ease::Linear,
                },
            ],
        }
    }

    #[test]
    fn sample_holds_endpoints_outside_window() {
        let tl = timeline();
        let hold = tl.sample(0.5);
        let headline = &hold.elements["headline"];
        assert_eq!(headline.translate.x, 0.0);
        assert_eq!(headline.opacity, 1.0);

        let done = tl.sample(1.0);
        let headline = &done.elements["headline"];
        assert_eq!(headline.translate.x, -0.18);
        assert_eq!(headline.opacity, 0.0);
    }

    #[test]
    fn entrance_interpolates_linearly() {
        let tl = timeline();
        let frame = tl.sample(0.15);
        assert!((frame.elements["image"].scale - 1.09).abs() < 1e-12);
    }

    #[test]
    fn forward_then_reverse_scrub_is_identical() {
        let tl = timeline();
        let steps: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let forward: Vec<SectionFrame> = steps.iter().map(|&p| tl.sample(p)).collect();
        for (&p, fwd) in steps.iter().zip(&forward).rev() {
            let back = tl.sample(p);
            assert_eq!(back.elements, fwd.elements, "hysteresis at progress {p}");
        }
    }

    #[test]
    fn progress_is_clamped_before_interpolation() {
        let tl = timeline();
        assert_eq!(tl.sample(-2.0).elements, tl.sample(0.0).elements);
        assert_eq!(tl.sample(7.5).elements, tl.sample(1.0).elements);
        assert_eq!(tl.sample(f64::NAN).progress, 0.0);
    }

    #[test]
    fn entrance_and_exit_chain_through_the_hold_zone() {
        let tl = SectionTimeline {
            id: "tessellation".to_string(),
            phases: PhaseWindows::default(),
            tweens: vec![
                // Entrance: slide in from the right.
                Tween {
                    element: "image".to_string(),
                    property: Property::TranslateX,
                    from: 0.60,
                    to: 0.0,
                    window: ProgressWindow::new(0.0, 0.3).unwrap(),
                    ease: Ease::Linear,
                },
                // Exit: slide out to the left.
                Tween {
                    element: "image".to_string(),
                    property: Property::TranslateX,
                    from: 0.0,
                    to: -0.18,
                    window: ProgressWindow::new(0.7, 1.0).unwrap(),
                    ease: Ease::InQuad,
                },
            ],
        };

        // Mid-entrance the entrance window governs; the pending exit tween
        // must not clobber it with its own `from`.
        assert!((tl.sample(0.15).elements["image"].translate.x - 0.30).abs() < 1e-12);
        // Hold zone rests at the entrance target.
        assert_eq!(tl.sample(0.5).elements["image"].translate.x, 0.0);
        // Exit completes.
        assert_eq!(tl.sample(1.0).elements["image"].translate.x, -0.18);
    }

    #[test]
    fn overlapping_property_windows_are_rejected() {
        let mut tl = timeline();
        tl.tweens.push(Tween {
            element: "headline".to_string(),
            property: Property::TranslateX,
            from: 0.0,
            to: 0.5,
            window: ProgressWindow::new(0.8, 0.9).unwrap(),
            ease: Ease::Linear,
        });
        assert!(tl.validate().is_err());
    }

    #[test]
    fn touching_windows_are_allowed() {
        let mut tl = timeline();
        tl.tweens.push(Tween {
            element: "image".to_string(),
            property: Property::Scale,
            from: 1.0,
            to: 1.08,
            window: ProgressWindow::new(0.3, 1.0).unwrap(),
            ease: Ease::Linear,
        });
        assert!(tl.validate().is_ok());
    }

    #[test]
    fn window_rejects_inverted_or_out_of_range() {
        assert!(ProgressWindow::new(0.5, 0.5).is_err());
        assert!(ProgressWindow::new(0.9, 0.2).is_err());
        assert!(ProgressWindow::new(-0.1, 0.5).is_err());
        assert!(ProgressWindow::new(0.5, 1.2).is_err());
    }

    #[test]
    fn opacity_is_clamped() {
        let tl = SectionTimeline {
            id: "s".to_string(),
            phases: PhaseWindows::default(),
            tweens: vec![Tween {
                element: "card".to_string(),
                property: Property::Opacity,
                from: 0.0,
                to: 2.0,
                window: ProgressWindow::new(0.0, 1.0).unwrap(),
                ease: Ease::Linear,
            }],
        };
        assert_eq!(tl.sample(1.0).elements["card"].opacity, 1.0);
    }

    #[test]
    fn style_resolves_viewport_fractions() {
        let style = ElementStyle {
            translate: Vec2::new(-0.18, 0.1),
            ..ElementStyle::default()
        };
        let affine = style.to_affine(1000.0, 500.0);
        assert_eq!(affine, Affine::translate(Vec2::new(-180.0, 50.0)));
    }
}
